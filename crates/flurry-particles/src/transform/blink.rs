//! Irregular per-particle twinkle

use super::ParticleTransformation;
use crate::particle::Particle;
use crate::random::ParticleRng;
use flurry_core::{FloatRange, ParticleId};
use std::collections::HashMap;

/// Sets `alpha = |sin(tick * f)|` (degrees), with `f` drawn once per particle
/// from `frequency_factor_range` the first time the particle is seen.
///
/// The per-id cache is never evicted. It stays bounded by the population size
/// because ids survive resets. Don't share one instance between unrelated
/// systems: their ids would collide in the cache.
pub struct BlinkTransformation {
    frequency_factor_range: FloatRange,
    frequencies: HashMap<ParticleId, f32>,
    rng: ParticleRng,
}

impl BlinkTransformation {
    pub fn new(frequency_factor_range: FloatRange) -> Self {
        Self {
            frequency_factor_range,
            frequencies: HashMap::new(),
            rng: ParticleRng::from_entropy(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ParticleRng::new(seed);
        self
    }

    /// Cached frequency for `id`, if the particle has been seen
    pub fn frequency_of(&self, id: ParticleId) -> Option<f32> {
        self.frequencies.get(&id).copied()
    }

    pub fn cached_len(&self) -> usize {
        self.frequencies.len()
    }
}

impl ParticleTransformation for BlinkTransformation {
    fn transform(&mut self, particle: &mut Particle, iteration: i64) {
        let range = self.frequency_factor_range;
        let rng = &mut self.rng;
        let frequency = *self
            .frequencies
            .entry(particle.id)
            .or_insert_with(|| rng.float_in(range));

        let phase = (iteration as f64 * f64::from(frequency)).to_radians();
        particle.alpha = (phase.sin().abs() as f32).clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Instinct;

    #[test]
    fn alpha_follows_abs_sine() {
        let mut blink = BlinkTransformation::new(FloatRange::point(1.0)).with_seed(1);
        let mut p = Particle::new(ParticleId(1), Instinct::default());

        blink.transform(&mut p, 90);
        assert!((p.alpha - 1.0).abs() < 1e-6);

        blink.transform(&mut p, 180);
        assert!(p.alpha.abs() < 1e-6);

        blink.transform(&mut p, 270);
        assert!((p.alpha - 1.0).abs() < 1e-6);
    }

    #[test]
    fn frequency_sampled_once_per_particle() {
        let mut blink = BlinkTransformation::new(FloatRange::new(0.5, 2.0)).with_seed(42);
        let mut a = Particle::new(ParticleId(1), Instinct::default());
        let mut b = Particle::new(ParticleId(2), Instinct::default());

        blink.transform(&mut a, 1);
        let first = blink.frequency_of(a.id).unwrap();
        blink.transform(&mut a, 2);
        blink.transform(&mut b, 2);

        assert_eq!(blink.frequency_of(a.id), Some(first));
        assert!((0.5..=2.0).contains(&first));
        assert_eq!(blink.cached_len(), 2);
        assert!(blink.frequency_of(ParticleId(3)).is_none());
    }
}
