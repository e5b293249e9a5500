//! In-plane rotation plus a fake flip around the vertical axis

use super::{normalize_degrees, ParticleTransformation};
use crate::particle::Particle;

/// Advances rotation by the instinct's z rotational speed, wrapping at 360.
///
/// The flip is faked without 3D: `x_rotation_width` counts down by
/// `|x_rotational_speed|` and refills to the full width once it drops below
/// zero. `scale_y` follows the distance from the middle of that cycle, so the
/// particle squashes to nothing halfway through and recovers, like a leaf
/// turning over.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearRotationTransformation;

impl LinearRotationTransformation {
    pub fn new() -> Self {
        Self
    }
}

impl ParticleTransformation for LinearRotationTransformation {
    fn transform(&mut self, particle: &mut Particle, _iteration: i64) {
        let instinct = &particle.instinct;
        let width = instinct.width.max(1) as f32;

        particle.x_rotation_width -= instinct.x_rotational_speed.abs();
        if particle.x_rotation_width < 0.0 {
            particle.x_rotation_width = width;
        }

        particle.rotation = normalize_degrees(particle.rotation + instinct.z_rotational_speed);
        particle.scale_y = (particle.x_rotation_width / width - 0.5).abs() * 2.0;
    }
}
