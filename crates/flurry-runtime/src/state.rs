//! Simulation state owned by a particle system
//!
//! Everything here is synchronous. The system's tick task is the only caller
//! that mutates it, holding the state lock for the duration of one tick.

use crate::params::SystemParameters;
use flurry_core::{ParticleId, Size};
use flurry_particles::{Particle, ParticleGenerator, ParticleTransformation};
use std::collections::HashSet;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// At least one particle is still alive
    Alive,
    /// Every particle in a non-empty population is dead
    AllDead,
}

/// The population plus the generator and transformation that drive it
pub struct SimulationState {
    dimension: Size,
    parameters: SystemParameters,
    particles: Vec<Particle>,
    not_alive: HashSet<ParticleId>,
    generator: Box<dyn ParticleGenerator>,
    transformation: Box<dyn ParticleTransformation>,
}

impl SimulationState {
    pub fn new(
        dimension: Size,
        parameters: SystemParameters,
        mut generator: Box<dyn ParticleGenerator>,
        transformation: Box<dyn ParticleTransformation>,
    ) -> Self {
        let particles = generator.create_particles();
        Self {
            dimension,
            parameters,
            particles,
            not_alive: HashSet::new(),
            generator,
            transformation,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn not_alive(&self) -> &HashSet<ParticleId> {
        &self.not_alive
    }

    pub fn dimension(&self) -> Size {
        self.dimension
    }

    /// Update every live particle for `iteration` and report whether any survive
    pub fn tick(&mut self, iteration: i64) -> TickOutcome {
        let Self {
            dimension,
            parameters,
            particles,
            not_alive,
            generator,
            transformation,
        } = self;

        for particle in particles.iter_mut() {
            if !particle.is_alive() {
                continue;
            }

            particle.iteration = iteration;
            if particle.is_out_of_bounds(*dimension) {
                if parameters.auto_reset_particles {
                    particle.initial_iteration = iteration;
                    generator.reset_particle(particle);
                } else {
                    particle.kill();
                }
            } else if particle.should_be_drawn() {
                transformation.transform(particle, iteration);
            }

            if !particle.is_alive() {
                tracing::debug!(id = %particle.id, iteration, "particle is not alive");
                not_alive.insert(particle.id);
            }
        }

        // An empty population has nothing to wait for, so it is never "all dead"
        if !particles.is_empty() && not_alive.len() >= particles.len() {
            TickOutcome::AllDead
        } else {
            TickOutcome::Alive
        }
    }

    /// Replace the population with a brand-new one from the generator
    pub fn recreate(&mut self) {
        self.not_alive.clear();
        self.particles = self.generator.create_particles();
        tracing::info!(count = self.particles.len(), "particle population recreated");
    }
}
