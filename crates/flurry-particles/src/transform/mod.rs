//! Per-tick particle transformations
//!
//! A transformation mutates a particle in place. Calls compound: invoking
//! `transform` twice for the same tick applies the effect twice, so the system
//! calls it exactly once per particle per tick.

mod blink;
mod composite;
mod params;
mod rotation;
mod scale;
mod scale_dim;
mod sequence;
mod sin_drift;
mod translate;

pub use blink::BlinkTransformation;
pub use composite::{CompositeTransformation, TransformationKey};
pub use params::{SequenceStep, TransformationParameters};
pub use rotation::LinearRotationTransformation;
pub use scale::LinearScaleTransformation;
pub use scale_dim::ScaleAndDimTransformation;
pub use sequence::{DurationalTransformation, SequenceTransformation};
pub use sin_drift::HorizontalSinDriftTransformation;
pub use translate::LinearTranslateTransformation;

use crate::particle::Particle;

/// Updates a particle for the given tick
pub trait ParticleTransformation: Send {
    fn transform(&mut self, particle: &mut Particle, iteration: i64);
}

impl<T: ParticleTransformation + ?Sized> ParticleTransformation for Box<T> {
    fn transform(&mut self, particle: &mut Particle, iteration: i64) {
        (**self).transform(particle, iteration)
    }
}

/// A transformation that spans a fixed number of ticks
pub trait Durational {
    fn duration(&self) -> i64;
}

/// Wraps degrees into [0, 360)
pub(crate) fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::ParticleTransformation;
    use crate::particle::Particle;

    /// Overwrites alpha with 0.5
    pub struct AlphaHalf;

    impl ParticleTransformation for AlphaHalf {
        fn transform(&mut self, particle: &mut Particle, _iteration: i64) {
            particle.alpha = 0.5;
        }
    }

    /// Overwrites rotation with 180
    pub struct RotationHalfTurn;

    impl ParticleTransformation for RotationHalfTurn {
        fn transform(&mut self, particle: &mut Particle, _iteration: i64) {
            particle.rotation = 180.0;
        }
    }

    /// Overwrites alpha with a fixed value
    pub struct AlphaTo(pub f32);

    impl ParticleTransformation for AlphaTo {
        fn transform(&mut self, particle: &mut Particle, _iteration: i64) {
            particle.alpha = self.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_degrees_wraps_both_directions() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert!(normalize_degrees(-1e-7) < 360.0);
    }
}
