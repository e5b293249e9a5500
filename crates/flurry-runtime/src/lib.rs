//! Flurry Runtime - fixed-rate tick loop for particle systems
//!
//! Provides:
//! - `SystemParameters`: tick rate and recycling policy
//! - `TickClock`: per-tick budget for pacing the loop
//! - `SimulationState`: the population plus its generator and transformation
//! - `ParticleSystem`: runs the simulation on a tokio task and publishes the iteration counter

mod clock;
mod params;
mod state;
mod system;

pub use clock::TickClock;
pub use params::SystemParameters;
pub use state::{SimulationState, TickOutcome};
pub use system::{ParticleSystem, ParticleSystemBuilder};
