//! Particle types: per-spawn instinct and live simulation state

use crate::shape::ParticleShape;
use flurry_core::{ParticleId, Size};
use std::sync::Arc;

/// Attributes randomized once when a particle is spawned or reset.
///
/// Never mutated field by field: a reset swaps in a whole new instinct.
#[derive(Debug, Clone, PartialEq)]
pub struct Instinct {
    /// Pixels, at least 1
    pub width: u32,
    /// Pixels, at least 1
    pub height: u32,
    /// Pixels per tick
    pub speed: f32,
    /// Degrees; 0 points right, 90 points down
    pub angle: f32,
    /// Flip speed around the vertical axis, pixels of width per tick
    pub x_rotational_speed: f32,
    /// In-plane rotation, degrees per tick
    pub z_rotational_speed: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub alpha: f32,
    /// Ticks to wait before the particle is first drawn
    pub start_offset: u32,
    pub shape: ParticleShape,
}

impl Default for Instinct {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            speed: 0.0,
            angle: 0.0,
            x_rotational_speed: 0.0,
            z_rotational_speed: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            alpha: 1.0,
            start_offset: 0,
            shape: ParticleShape::default(),
        }
    }
}

/// One simulated particle.
///
/// Fields are written in place by the owning system's tick. Only liveness is
/// guarded: once [`Particle::kill`] runs, nothing turns the particle back on.
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: ParticleId,
    /// Tick at which the current instinct took effect
    pub initial_iteration: i64,
    /// Tick most recently stamped by the system
    pub iteration: i64,
    pub x: f32,
    pub y: f32,
    /// Degrees in [0, 360)
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub alpha: f32,
    /// Scratch width for the flip illusion in the rotation transformation
    pub x_rotation_width: f32,
    pub instinct: Arc<Instinct>,
    alive: bool,
}

impl Particle {
    pub fn new(id: ParticleId, instinct: Instinct) -> Self {
        Self {
            id,
            initial_iteration: 0,
            iteration: 0,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: instinct.scale_x,
            scale_y: instinct.scale_y,
            alpha: instinct.alpha,
            x_rotation_width: instinct.width as f32,
            instinct: Arc::new(instinct),
            alive: true,
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_initial_iteration(mut self, iteration: i64) -> Self {
        self.initial_iteration = iteration;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Permanently retires the particle
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Alive and past its start offset
    pub fn should_be_drawn(&self) -> bool {
        self.alive && self.iteration >= i64::from(self.instinct.start_offset)
    }

    /// Ticks since the current instinct took effect
    pub fn age(&self, iteration: i64) -> i64 {
        iteration - self.initial_iteration
    }

    /// Swaps in a new instinct and rewinds the state derived from it
    pub fn replace_instinct(&mut self, instinct: Instinct) {
        self.rotation = 0.0;
        self.scale_x = instinct.scale_x;
        self.scale_y = instinct.scale_y;
        self.alpha = instinct.alpha;
        self.x_rotation_width = instinct.width as f32;
        self.instinct = Arc::new(instinct);
    }

    /// True when the particle's box no longer touches `[0, w] x [0, h]`.
    /// Rotation is ignored, so a rotated particle may linger slightly longer.
    /// A NaN coordinate compares false everywhere and is never out of bounds.
    pub fn is_out_of_bounds(&self, dimension: Size) -> bool {
        let half_width = (self.instinct.width / 2).max(1) as f32;
        let half_height = (self.instinct.height / 2).max(1) as f32;
        self.x + half_width < 0.0
            || self.x - half_width > dimension.width as f32
            || self.y + half_height < 0.0
            || self.y - half_height > dimension.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let particle = Particle::new(ParticleId(101), Instinct::default())
            .with_initial_iteration(100)
            .with_position(100.0, 101.0)
            .with_rotation(90.0);

        assert_eq!(particle.id, ParticleId(101));
        assert_eq!(particle.initial_iteration, 100);
        assert_eq!(particle.x, 100.0);
        assert_eq!(particle.y, 101.0);
        assert_eq!(particle.rotation, 90.0);
        assert!(particle.is_alive());
    }

    #[test]
    fn start_offset_delays_drawing() {
        let instinct = Instinct {
            start_offset: 5,
            ..Default::default()
        };
        let mut particle = Particle::new(ParticleId(1), instinct);
        particle.iteration = 4;
        assert!(!particle.should_be_drawn());
        particle.iteration = 5;
        assert!(particle.should_be_drawn());
        particle.kill();
        assert!(!particle.should_be_drawn());
    }

    #[test]
    fn out_of_bounds_uses_inflated_box() {
        let instinct = Instinct {
            width: 10,
            height: 10,
            ..Default::default()
        };
        let dimension = Size::new(100, 100);
        let mut particle = Particle::new(ParticleId(1), instinct).with_position(-4.0, 50.0);
        assert!(!particle.is_out_of_bounds(dimension));
        particle.x = -5.5;
        assert!(particle.is_out_of_bounds(dimension));
        particle.x = 50.0;
        particle.y = 105.0;
        assert!(!particle.is_out_of_bounds(dimension));
        particle.y = 105.5;
        assert!(particle.is_out_of_bounds(dimension));
    }

    #[test]
    fn nan_position_is_never_out_of_bounds() {
        let dimension = Size::new(10, 10);
        let mut particle =
            Particle::new(ParticleId(1), Instinct::default()).with_position(f32::NAN, 5.0);
        assert!(!particle.is_out_of_bounds(dimension));
        particle.x = 5.0;
        particle.y = f32::NAN;
        assert!(!particle.is_out_of_bounds(dimension));
    }

    #[test]
    fn tiny_particles_get_one_pixel_margin() {
        let particle = Particle::new(ParticleId(1), Instinct::default()).with_position(-0.5, 0.0);
        assert!(!particle.is_out_of_bounds(Size::new(10, 10)));
    }

    #[test]
    fn replace_instinct_resets_derived_state() {
        let mut particle = Particle::new(ParticleId(3), Instinct::default()).with_rotation(45.0);
        particle.alpha = 0.2;
        particle.replace_instinct(Instinct {
            width: 8,
            scale_x: 2.0,
            ..Default::default()
        });
        assert_eq!(particle.rotation, 0.0);
        assert_eq!(particle.alpha, 1.0);
        assert_eq!(particle.scale_x, 2.0);
        assert_eq!(particle.x_rotation_width, 8.0);
        assert_eq!(particle.id, ParticleId(3));
    }
}
