//! Time-sliced transformations: one active window at a time

use super::{Durational, ParticleTransformation};
use crate::particle::Particle;

/// Runs the wrapped transformation only for ticks in `[start_from, start_from + duration)`,
/// passing it the tick relative to `start_from`
pub struct DurationalTransformation {
    start_from: i64,
    duration: i64,
    inner: Box<dyn ParticleTransformation>,
}

impl DurationalTransformation {
    pub fn new(start_from: i64, duration: i64, inner: Box<dyn ParticleTransformation>) -> Self {
        Self {
            start_from,
            duration,
            inner,
        }
    }

    pub fn start_from(&self) -> i64 {
        self.start_from
    }

    pub fn end(&self) -> i64 {
        self.start_from + self.duration
    }

    pub fn covers(&self, iteration: i64) -> bool {
        iteration >= self.start_from && iteration < self.end()
    }
}

impl Durational for DurationalTransformation {
    fn duration(&self) -> i64 {
        self.duration
    }
}

impl ParticleTransformation for DurationalTransformation {
    fn transform(&mut self, particle: &mut Particle, iteration: i64) {
        if !self.covers(iteration) {
            return;
        }
        self.inner.transform(particle, iteration - self.start_from);
    }
}

/// Plays transformations back to back.
///
/// Each particle runs on its own clock starting at
/// `initial_iteration + instinct.start_offset`. Before that nothing happens;
/// once the last window has passed the particle is killed.
#[derive(Default)]
pub struct SequenceTransformation {
    windows: Vec<DurationalTransformation>,
    duration: i64,
}

impl SequenceTransformation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `transformation` for the next `duration` ticks
    pub fn add(&mut self, transformation: Box<dyn ParticleTransformation>, duration: i64) {
        self.windows.push(DurationalTransformation::new(
            self.duration,
            duration,
            transformation,
        ));
        self.duration += duration;
    }

    pub fn then(mut self, transformation: Box<dyn ParticleTransformation>, duration: i64) -> Self {
        self.add(transformation, duration);
        self
    }

    pub fn clear(&mut self) {
        self.windows.clear();
        self.duration = 0;
    }

    /// The window covering a tick relative to the particle's start
    pub fn active_window(&self, iteration: i64) -> Option<&DurationalTransformation> {
        self.windows.iter().find(|window| window.covers(iteration))
    }

    fn active_window_mut(&mut self, iteration: i64) -> Option<&mut DurationalTransformation> {
        self.windows.iter_mut().find(|window| window.covers(iteration))
    }
}

impl Durational for SequenceTransformation {
    fn duration(&self) -> i64 {
        self.duration
    }
}

impl ParticleTransformation for SequenceTransformation {
    fn transform(&mut self, particle: &mut Particle, iteration: i64) {
        if self.windows.is_empty() {
            return;
        }

        let start = particle.initial_iteration + i64::from(particle.instinct.start_offset);
        let relative = iteration - start;
        if relative < 0 {
            return;
        }

        match self.active_window_mut(relative) {
            Some(window) => window.transform(particle, relative),
            None => particle.kill(),
        }
    }
}
