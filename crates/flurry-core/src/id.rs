//! Stable particle identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable particle identifier.
///
/// A particle keeps its id across in-place resets; only recreating the whole
/// population hands out new ones.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticleId(pub u64);

impl fmt::Debug for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParticleId({})", self.0)
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out monotonically increasing ids.
///
/// Each generator owns one, so ids are unique for the generator's lifetime
/// rather than process-wide.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ParticleId {
        let id = ParticleId(self.next);
        self.next += 1;
        id
    }
}
