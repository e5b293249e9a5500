//! Scale and fade driven by the shared tick counter

use super::ParticleTransformation;
use crate::particle::Particle;

/// Fades alpha and changes scale linearly in the tick passed in.
///
/// Unlike [`super::LinearScaleTransformation`] this uses the tick as given, not
/// the particle's age, so every particle follows one clock. Inside a
/// [`super::SequenceTransformation`] that tick is already relative to the
/// window start.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScaleAndDimTransformation {
    x_delta: f32,
    y_delta: f32,
    alpha_delta: f32,
}

impl ScaleAndDimTransformation {
    pub fn new(x_delta: f32, y_delta: f32, alpha_delta: f32) -> Self {
        Self {
            x_delta,
            y_delta,
            alpha_delta,
        }
    }
}

impl ParticleTransformation for ScaleAndDimTransformation {
    fn transform(&mut self, particle: &mut Particle, iteration: i64) {
        let tick = iteration as f32;
        particle.alpha = (particle.instinct.alpha - self.alpha_delta * tick).clamp(0.0, 1.0);
        particle.scale_x = particle.instinct.scale_x + tick * self.x_delta;
        particle.scale_y = particle.instinct.scale_y + tick * self.y_delta;
    }
}
