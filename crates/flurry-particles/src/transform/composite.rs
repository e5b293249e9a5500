//! Applies several transformations to the same particle in order

use super::{LinearTranslateTransformation, ParticleTransformation};
use crate::particle::Particle;

/// Handle returned by [`CompositeTransformation::add`], used to remove the entry later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformationKey(u64);

/// Runs its transformations in insertion order; each sees the previous one's writes.
///
/// Constructing it from an empty list installs a [`LinearTranslateTransformation`]
/// so a composite always moves particles. [`CompositeTransformation::clear`], by
/// contrast, leaves it empty and inert.
pub struct CompositeTransformation {
    entries: Vec<(TransformationKey, Box<dyn ParticleTransformation>)>,
    next_key: u64,
}

impl CompositeTransformation {
    pub fn new(initial: Vec<Box<dyn ParticleTransformation>>) -> Self {
        let mut composite = Self {
            entries: Vec::with_capacity(initial.len().max(1)),
            next_key: 0,
        };

        if initial.is_empty() {
            tracing::warn!("No particle transformation, using LinearTranslateTransformation as default");
            composite.add(Box::new(LinearTranslateTransformation::new()));
        } else {
            for transformation in initial {
                composite.add(transformation);
            }
        }
        composite
    }

    pub fn add(&mut self, transformation: Box<dyn ParticleTransformation>) -> TransformationKey {
        let key = TransformationKey(self.next_key);
        self.next_key += 1;
        self.entries.push((key, transformation));
        key
    }

    /// Removes and returns the transformation added under `key`
    pub fn remove(&mut self, key: TransformationKey) -> Option<Box<dyn ParticleTransformation>> {
        let index = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CompositeTransformation {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ParticleTransformation for CompositeTransformation {
    fn transform(&mut self, particle: &mut Particle, iteration: i64) {
        for (_, transformation) in self.entries.iter_mut() {
            transformation.transform(particle, iteration);
        }
    }
}
