//! Linear growth or shrink relative to the spawn-time scale

use super::ParticleTransformation;
use crate::particle::Particle;

/// `scale = instinct.scale + age * delta`, age in ticks since the current instinct
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearScaleTransformation {
    x_delta: f32,
    y_delta: f32,
}

impl LinearScaleTransformation {
    pub fn new(x_delta: f32, y_delta: f32) -> Self {
        Self { x_delta, y_delta }
    }
}

impl ParticleTransformation for LinearScaleTransformation {
    fn transform(&mut self, particle: &mut Particle, iteration: i64) {
        let age = particle.age(iteration) as f32;
        particle.scale_x = particle.instinct.scale_x + age * self.x_delta;
        particle.scale_y = particle.instinct.scale_y + age * self.y_delta;
    }
}
