//! Flurry Particles - particle model and the pieces that move it
//!
//! Provides:
//! - `Particle` / `Instinct`: live state plus the attributes fixed at spawn
//! - Generators that build and respawn particles from randomized ranges
//! - Composable per-tick transformations (translate, rotate, scale, blink, sequences)
//! - Renderer-agnostic shape descriptions

pub mod generator;
pub mod particle;
pub mod random;
pub mod shape;
pub mod transform;

pub use generator::{
    Constraint, GeneratorParameters, ParticleGenerator, RandomizeParticleGenerator, SourceEdge,
};
pub use particle::{Instinct, Particle};
pub use random::ParticleRng;
pub use shape::{path_bounds, ParticleShape, PathCommand, ShapeProvider};
pub use transform::{
    BlinkTransformation, CompositeTransformation, Durational, DurationalTransformation,
    HorizontalSinDriftTransformation, LinearRotationTransformation, LinearScaleTransformation,
    LinearTranslateTransformation, ParticleTransformation, ScaleAndDimTransformation,
    SequenceStep, SequenceTransformation, TransformationKey, TransformationParameters,
};
