//! Falling with a sideways sine sway, as snow does

use super::{normalize_degrees, ParticleTransformation};
use crate::particle::Particle;

const DEFAULT_FREQUENCY_FACTOR: f32 = 2.0;
const DEFAULT_AMPLITUDE: f32 = 2.0;

/// Each tick:
/// - `x += speed * amplitude * sin(age * frequency_factor) * cos(angle)`
/// - `y += speed * sin(angle)`
/// - rotation advances by the z rotational speed
///
/// Both sine arguments are in degrees; age counts ticks since the current
/// instinct took effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalSinDriftTransformation {
    frequency_factor: f32,
    amplitude: f32,
}

impl Default for HorizontalSinDriftTransformation {
    fn default() -> Self {
        Self {
            frequency_factor: DEFAULT_FREQUENCY_FACTOR,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }
}

impl HorizontalSinDriftTransformation {
    pub fn new(frequency_factor: f32, amplitude: f32) -> Self {
        Self {
            frequency_factor,
            amplitude,
        }
    }
}

impl ParticleTransformation for HorizontalSinDriftTransformation {
    fn transform(&mut self, particle: &mut Particle, iteration: i64) {
        let age = particle.age(iteration) as f64;
        let speed = particle.instinct.speed;
        let angle = f64::from(particle.instinct.angle).to_radians();
        let sway = (age * f64::from(self.frequency_factor)).to_radians().sin();

        let horizontal = speed * self.amplitude * sway as f32 * angle.cos() as f32;
        let vertical = speed * angle.sin() as f32;

        particle.x += horizontal;
        particle.y += vertical;
        particle.rotation =
            normalize_degrees(particle.rotation + particle.instinct.z_rotational_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Instinct;
    use flurry_core::ParticleId;

    fn flake(angle: f32) -> Particle {
        Particle::new(
            ParticleId(7),
            Instinct {
                speed: 2.0,
                angle,
                z_rotational_speed: 15.0,
                ..Default::default()
            },
        )
    }

    #[test]
    fn no_sway_at_spawn_tick() {
        let mut p = flake(0.0);
        HorizontalSinDriftTransformation::default().transform(&mut p, 0);
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        assert_eq!(p.rotation, 15.0);
    }

    #[test]
    fn sways_with_age() {
        // age 45 * factor 2 = 90 degrees -> full amplitude
        let mut p = flake(0.0);
        HorizontalSinDriftTransformation::default().transform(&mut p, 45);
        assert!((p.x - 4.0).abs() < 1e-5);
    }

    #[test]
    fn straight_down_only_falls() {
        let mut p = flake(90.0);
        HorizontalSinDriftTransformation::new(2.0, 3.0).transform(&mut p, 45);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 2.0).abs() < 1e-6);
    }
}
