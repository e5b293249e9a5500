//! Range sampling that never fails
//!
//! Configuration ranges come straight from live UI edits, so an inverted range
//! is a normal input rather than a bug. Every sampler here falls back to the
//! range start instead of panicking or returning an error.

use flurry_core::{FloatRange, IntRange};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable random source shared by the generator and randomized transformations
pub struct ParticleRng {
    inner: StdRng,
}

impl ParticleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    /// Uniform sample from the closed interval `range`.
    ///
    /// - `start > end` (or `start == end`) yields `start`.
    /// - A non-finite bound yields NaN. Nothing downstream repairs it: a
    ///   particle placed at a NaN coordinate is never out of bounds, so it is
    ///   never reset and never dies on its own.
    pub fn float_in(&mut self, range: FloatRange) -> f32 {
        let FloatRange { start, end } = range;
        if !start.is_finite() || !end.is_finite() {
            return f32::NAN;
        }
        if !(start < end) {
            return start;
        }

        let size = end - start;
        let r = if size.is_infinite() {
            // Both bounds finite but the width overflows: sample the halves
            let half = self.next_f32() * (end / 2.0 - start / 2.0);
            start + half + half
        } else {
            start + self.next_f32() * size
        };
        r.min(end)
    }

    /// Uniform sample from the closed interval `range`; `start > end` yields `start`
    pub fn int_in(&mut self, range: IntRange) -> i32 {
        if range.start >= range.end {
            return range.start;
        }
        self.inner.gen_range(range.start..=range.end)
    }

    /// Uniform integer in `[0, bound)`, or 0 when `bound` is 0
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.inner.gen_range(0..bound)
    }

    /// Random index into a collection of `len` items. A single item is picked
    /// without consuming randomness.
    pub fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }

    /// Picks one item, `None` for an empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.index(items.len());
        items.get(index)
    }
}

impl Default for ParticleRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
