//! Straight-line movement along the instinct's angle

use super::ParticleTransformation;
use crate::particle::Particle;

/// Moves `(x, y)` by `speed` along `angle` every tick.
///
/// `gravity` adds `gravity * age` to the vertical step, where age counts ticks
/// since the particle's current instinct took effect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearTranslateTransformation {
    gravity: f32,
}

impl LinearTranslateTransformation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gravity(gravity: f32) -> Self {
        Self { gravity }
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }
}

impl ParticleTransformation for LinearTranslateTransformation {
    fn transform(&mut self, particle: &mut Particle, iteration: i64) {
        let age = particle.age(iteration) as f32;
        let speed = particle.instinct.speed;
        let radians = f64::from(particle.instinct.angle).to_radians();

        let horizontal = speed * radians.cos() as f32;
        let vertical = speed * radians.sin() as f32;

        particle.x += horizontal;
        particle.y += vertical + self.gravity * age;
    }
}
