//! Particle generators: build the initial population and respawn particles

mod params;
mod randomize;

pub use params::{Constraint, GeneratorParameters, SourceEdge};
pub use randomize::RandomizeParticleGenerator;

use crate::particle::Particle;

/// Creates particles and re-derives them after they leave the system
pub trait ParticleGenerator: Send {
    /// Builds a brand-new population with fresh ids
    fn create_particles(&mut self) -> Vec<Particle>;

    /// Gives `particle` a new instinct and position, keeping its id
    fn reset_particle(&mut self, particle: &mut Particle);
}
