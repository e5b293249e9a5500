//! Particle system: owns a population and ticks it on a background task

use crate::clock::TickClock;
use crate::params::SystemParameters;
use crate::state::{SimulationState, TickOutcome};
use flurry_core::{FlurryError, Result, Size};
use flurry_particles::{
    LinearTranslateTransformation, Particle, ParticleGenerator, ParticleTransformation,
};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::sync::watch;

/// A running (or stopped) particle simulation.
///
/// The population is advanced by a tokio task at `fps` ticks per second.
/// Observers follow progress through [`ParticleSystem::subscribe`] and read
/// the population with [`ParticleSystem::with_particles`]. Dropping the system
/// stops its loop.
pub struct ParticleSystem {
    dimension: Size,
    parameters: SystemParameters,
    state: Arc<Mutex<SimulationState>>,
    running: Arc<AtomicBool>,
    /// Bumped on every start so a loop from an earlier start cannot resume
    epoch: Arc<AtomicU64>,
    iteration: Arc<watch::Sender<u64>>,
    runtime: Handle,
}

impl ParticleSystem {
    pub fn builder(dimension: Size) -> ParticleSystemBuilder {
        ParticleSystemBuilder::new(dimension)
    }

    pub fn dimension(&self) -> Size {
        self.dimension
    }

    pub fn parameters(&self) -> &SystemParameters {
        &self.parameters
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Current value of the iteration counter
    pub fn iteration(&self) -> u64 {
        *self.iteration.borrow()
    }

    /// Receiver notified every time the iteration counter is published
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.iteration.subscribe()
    }

    /// Run `f` against the live population while the tick loop is held off
    pub fn with_particles<R>(&self, f: impl FnOnce(&[Particle]) -> R) -> R {
        f(lock(&self.state).particles())
    }

    /// Owned copy of the current population
    pub fn particles(&self) -> Vec<Particle> {
        self.with_particles(<[Particle]>::to_vec)
    }

    /// Number of particles retired since the population was last created
    pub fn not_alive_count(&self) -> usize {
        lock(&self.state).not_alive().len()
    }

    /// Begin ticking. Does nothing if the system is already running.
    pub fn start(&self) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }

        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let tick_loop = TickLoop {
            state: Arc::clone(&self.state),
            running: Arc::clone(&self.running),
            epoch: Arc::clone(&self.epoch),
            iteration: Arc::clone(&self.iteration),
            parameters: self.parameters,
            clock: TickClock::new(self.parameters.fps),
        };

        tracing::info!(fps = self.parameters.fps, "particle system started");
        self.runtime.spawn(tick_loop.run(epoch));
    }

    /// Ask the loop to exit after its current tick. Returns immediately.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

impl Drop for ParticleSystem {
    fn drop(&mut self) {
        self.stop();
    }
}

fn lock(state: &Mutex<SimulationState>) -> MutexGuard<'_, SimulationState> {
    // A panic inside a user transformation must not wedge every observer
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Everything the background task needs, detached from the `ParticleSystem` handle
struct TickLoop {
    state: Arc<Mutex<SimulationState>>,
    running: Arc<AtomicBool>,
    epoch: Arc<AtomicU64>,
    iteration: Arc<watch::Sender<u64>>,
    parameters: SystemParameters,
    clock: TickClock,
}

impl TickLoop {
    fn is_current(&self, epoch: u64) -> bool {
        self.running.load(Ordering::SeqCst) && self.epoch.load(Ordering::SeqCst) == epoch
    }

    /// One tick, start to finish under the state lock.
    ///
    /// The epoch is checked after the lock is taken, so a loop replaced by a
    /// newer start can never apply a tick the new loop is about to apply.
    /// Returns `None` once this loop is no longer the current one.
    fn step(&self, epoch: u64) -> Option<TickOutcome> {
        let mut state = lock(&self.state);
        if !self.is_current(epoch) {
            return None;
        }

        let current = *self.iteration.borrow();
        let outcome = state.tick(current as i64);
        self.iteration.send_replace(current + 1);

        match outcome {
            TickOutcome::AllDead if self.parameters.restart_when_all_dead => {
                state.recreate();
                self.iteration.send_replace(0);
            }
            TickOutcome::AllDead => {
                // Only clear the flag if a newer start has not claimed it
                if self.epoch.load(Ordering::SeqCst) == epoch {
                    self.running.store(false, Ordering::SeqCst);
                }
            }
            TickOutcome::Alive => {}
        }
        Some(outcome)
    }

    async fn run(mut self, epoch: u64) {
        loop {
            self.clock.begin_tick();
            match self.step(epoch) {
                None => break,
                Some(TickOutcome::AllDead) => tokio::task::yield_now().await,
                Some(TickOutcome::Alive) => {
                    tokio::time::sleep(self.clock.remaining()).await;
                }
            }
        }
        tracing::info!("particle system stopped");
    }
}

/// Assembles a [`ParticleSystem`].
///
/// A generator is required. The transformation defaults to a plain
/// [`LinearTranslateTransformation`] and the loop is spawned on the current
/// tokio runtime unless another handle is given.
pub struct ParticleSystemBuilder {
    dimension: Size,
    parameters: SystemParameters,
    generator: Option<Box<dyn ParticleGenerator>>,
    transformation: Option<Box<dyn ParticleTransformation>>,
    auto_start: bool,
    runtime: Option<Handle>,
}

impl ParticleSystemBuilder {
    pub fn new(dimension: Size) -> Self {
        Self {
            dimension,
            parameters: SystemParameters::default(),
            generator: None,
            transformation: None,
            auto_start: true,
            runtime: None,
        }
    }

    pub fn parameters(mut self, parameters: SystemParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn generator(mut self, generator: impl ParticleGenerator + 'static) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    pub fn transformation(mut self, transformation: impl ParticleTransformation + 'static) -> Self {
        self.transformation = Some(Box::new(transformation));
        self
    }

    pub fn boxed_transformation(mut self, transformation: Box<dyn ParticleTransformation>) -> Self {
        self.transformation = Some(transformation);
        self
    }

    pub fn auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }

    pub fn runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn build(self) -> Result<ParticleSystem> {
        self.parameters.validate()?;

        let generator = self.generator.ok_or_else(|| {
            FlurryError::InvalidConfig("particle system requires a generator".to_string())
        })?;
        let transformation = self
            .transformation
            .unwrap_or_else(|| Box::new(LinearTranslateTransformation::new()));
        let runtime = match self.runtime {
            Some(handle) => handle,
            None => Handle::try_current().map_err(|e| FlurryError::Runtime(e.to_string()))?,
        };

        let state = SimulationState::new(self.dimension, self.parameters, generator, transformation);
        let (sender, _) = watch::channel(0u64);

        let system = ParticleSystem {
            dimension: self.dimension,
            parameters: self.parameters,
            state: Arc::new(Mutex::new(state)),
            running: Arc::new(AtomicBool::new(false)),
            epoch: Arc::new(AtomicU64::new(0)),
            iteration: Arc::new(sender),
            runtime,
        };

        if self.auto_start {
            system.start();
        }
        Ok(system)
    }
}
