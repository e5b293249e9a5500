//! Generator that randomizes every instinct attribute from configured ranges

use super::params::{GeneratorParameters, SourceEdge};
use super::ParticleGenerator;
use crate::particle::{Instinct, Particle};
use crate::random::ParticleRng;
use crate::shape::{ParticleShape, ShapeProvider};
use flurry_core::{IdAllocator, Size};

/// Generates particles with random attributes inside a system of the given size
pub struct RandomizeParticleGenerator {
    parameters: GeneratorParameters,
    dimension: Size,
    shape_provider: Box<dyn ShapeProvider>,
    rng: ParticleRng,
    ids: IdAllocator,
}

impl RandomizeParticleGenerator {
    pub fn new(
        parameters: GeneratorParameters,
        dimension: Size,
        shape_provider: impl ShapeProvider + 'static,
    ) -> Self {
        Self {
            parameters,
            dimension,
            shape_provider: Box::new(shape_provider),
            rng: ParticleRng::from_entropy(),
            ids: IdAllocator::new(),
        }
    }

    /// Replace the random source with a seeded one (deterministic output)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ParticleRng::new(seed);
        self
    }

    pub fn parameters(&self) -> &GeneratorParameters {
        &self.parameters
    }

    pub fn dimension(&self) -> Size {
        self.dimension
    }

    fn create_particle(&mut self) -> Particle {
        let shape = self.shape_provider.provide();
        let start_offset = self.rng.int_in(self.parameters.start_offset_range).max(0) as u32;
        let instinct = self.sample_instinct(shape, start_offset);

        let (x, y) = if self.parameters.randomize_initial_xy {
            (self.random_x(), self.random_y())
        } else {
            self.edge_position(&instinct)
        };

        Particle::new(self.ids.next_id(), instinct).with_position(x, y)
    }

    fn sample_instinct(&mut self, shape: ParticleShape, start_offset: u32) -> Instinct {
        let width = match shape.intrinsic_width() {
            Some(width) => width,
            None => self.rng.int_in(self.parameters.particle_width_range).max(0) as u32,
        };
        let height = match shape.intrinsic_height() {
            Some(height) => height,
            None => self.rng.int_in(self.parameters.particle_height_range).max(0) as u32,
        };

        Instinct {
            width: width.max(1),
            height: height.max(1),
            speed: self.rng.float_in(self.parameters.speed_range),
            angle: self.rng.float_in(self.parameters.angle_range),
            x_rotational_speed: self.rng.float_in(self.parameters.x_rotational_speed_range),
            z_rotational_speed: self.rng.float_in(self.parameters.z_rotational_speed_range),
            scale_x: self.rng.float_in(self.parameters.scale_range),
            scale_y: self.rng.float_in(self.parameters.scale_range),
            alpha: 1.0,
            start_offset,
            shape,
        }
    }

    /// Places a particle just outside one of the configured source edges.
    ///
    /// Particles entering from the top start a half-height above it so they
    /// slide in rather than pop in straddling the edge.
    fn edge_position(&mut self, instinct: &Instinct) -> (f32, f32) {
        let half_width = (instinct.width / 2) as f32;
        let half_height = (instinct.height / 2) as f32;
        let width = self.dimension.width as f32;
        let height = self.dimension.height as f32;
        let limit = self.parameters.initial_limit();

        let edge = self
            .rng
            .choose(&self.parameters.source_edges)
            .copied()
            .unwrap_or(SourceEdge::Top);

        match edge {
            SourceEdge::Top => {
                let x = match limit {
                    Some(range) => self.rng.float_in(range) * width,
                    None => self.random_x(),
                };
                (x - half_width, -half_height)
            }
            SourceEdge::Bottom => (self.random_x() - half_width, height),
            SourceEdge::Left => {
                let y = match limit {
                    Some(range) => self.rng.float_in(range) * height,
                    None => self.random_y(),
                };
                (0.0, y - half_height)
            }
            SourceEdge::Right => (width, self.random_y() - half_height),
        }
    }

    fn random_x(&mut self) -> f32 {
        self.rng.below(self.dimension.width) as f32
    }

    fn random_y(&mut self) -> f32 {
        self.rng.below(self.dimension.height) as f32
    }
}

impl ParticleGenerator for RandomizeParticleGenerator {
    fn create_particles(&mut self) -> Vec<Particle> {
        (0..self.parameters.count)
            .map(|_| self.create_particle())
            .collect()
    }

    fn reset_particle(&mut self, particle: &mut Particle) {
        // Respawns keep their shape and always enter from an edge
        let instinct = self.sample_instinct(particle.instinct.shape.clone(), 0);
        let (x, y) = self.edge_position(&instinct);
        particle.replace_instinct(instinct);
        particle.x = x;
        particle.y = y;
    }
}
