//! Headless run command

use anyhow::{Context, Result};
use flurry_core::Size;
use flurry_particles::Particle;
use flurry_preset::{load_preset, AnimationKind, PresetFile};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tokio::time::timeout;

pub struct RunArgs {
    pub preset: String,
    pub width: u32,
    pub height: u32,
    pub ticks: u64,
    pub report_every: u64,
    pub seed: Option<u64>,
    pub format: String,
}

/// Population snapshot printed every report interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
struct TickStats {
    tick: u64,
    iteration: u64,
    alive: usize,
    drawable: usize,
    mean_alpha: f32,
}

impl TickStats {
    fn collect(tick: u64, iteration: u64, particles: &[Particle]) -> Self {
        let drawable: Vec<&Particle> = particles.iter().filter(|p| p.should_be_drawn()).collect();
        let mean_alpha = if drawable.is_empty() {
            0.0
        } else {
            drawable.iter().map(|p| p.alpha).sum::<f32>() / drawable.len() as f32
        };
        Self {
            tick,
            iteration,
            alive: particles.iter().filter(|p| p.is_alive()).count(),
            drawable: drawable.len(),
            mean_alpha,
        }
    }
}

/// Counts ticks across iteration counter updates, including population restarts
#[derive(Debug, Default)]
struct TickCounter {
    last: u64,
    total: u64,
}

impl TickCounter {
    fn observe(&mut self, iteration: u64) -> u64 {
        // A drop means the population restarted from 0
        let advanced = if iteration >= self.last {
            iteration - self.last
        } else {
            iteration
        };
        self.last = iteration;
        self.total += advanced;
        self.total
    }
}

pub fn run(args: RunArgs) -> Result<()> {
    if args.width == 0 || args.height == 0 {
        anyhow::bail!("System size must be non-zero, got {}x{}", args.width, args.height);
    }
    if !matches!(args.format.as_str(), "text" | "json") {
        anyhow::bail!("Unknown format: {}", args.format);
    }

    let preset = resolve_preset(&args.preset)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;

    runtime.block_on(simulate(&preset, &args))
}

fn resolve_preset(name_or_path: &str) -> Result<PresetFile> {
    if Path::new(name_or_path).is_file() {
        return load_preset(name_or_path)
            .with_context(|| format!("Failed to load {}", name_or_path));
    }
    let kind: AnimationKind = name_or_path.parse()?;
    Ok(kind.preset())
}

async fn simulate(preset: &PresetFile, args: &RunArgs) -> Result<()> {
    let dimension = Size::new(args.width, args.height);
    let system = preset
        .system_builder(dimension, args.seed)?
        .auto_start(false)
        .build()?;
    let mut iterations = system.subscribe();

    if args.format == "text" {
        println!(
            "Running '{}' at {} fps on {}x{} for {} ticks",
            preset.name, preset.system.fps, args.width, args.height, args.ticks
        );
    }

    system.start();
    let report_every = args.report_every.max(1);
    let mut counter = TickCounter::default();
    let mut next_report = report_every;

    while counter.total < args.ticks {
        match timeout(Duration::from_secs(1), iterations.changed()).await {
            Ok(Ok(())) => {}
            Ok(Err(_)) => break,
            Err(_) if !system.is_running() => break,
            Err(_) => continue,
        }

        let iteration = *iterations.borrow_and_update();
        let tick = counter.observe(iteration);
        if tick >= next_report || tick >= args.ticks {
            let stats =
                system.with_particles(|particles| TickStats::collect(tick, iteration, particles));
            report(&stats, &args.format)?;
            while next_report <= tick {
                next_report += report_every;
            }
        }
        if !system.is_running() {
            break;
        }
    }

    system.stop();
    if args.format == "text" {
        if counter.total < args.ticks {
            println!(
                "Stopped after {} ticks: every particle is dead ({} retired)",
                counter.total,
                system.not_alive_count()
            );
        } else {
            println!("Done after {} ticks", counter.total);
        }
    }
    Ok(())
}

fn report(stats: &TickStats, format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string(stats)?),
        _ => println!(
            "  tick {:>6}  iteration {:>6}  alive {:>5}  drawable {:>5}  mean alpha {:.3}",
            stats.tick, stats.iteration, stats.alive, stats.drawable, stats.mean_alpha
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flurry_core::ParticleId;
    use flurry_particles::Instinct;

    #[test]
    fn test_tick_counter_survives_restart() {
        let mut counter = TickCounter::default();
        assert_eq!(counter.observe(3), 3);
        assert_eq!(counter.observe(10), 10);
        // Restart: counter dropped to 0 then advanced to 2
        assert_eq!(counter.observe(2), 12);
        assert_eq!(counter.observe(2), 12);
    }

    #[test]
    fn test_stats_only_average_drawable() {
        let waiting = Instinct {
            start_offset: 50,
            ..Default::default()
        };
        let mut particles = vec![
            Particle::new(ParticleId(1), Instinct::default()),
            Particle::new(ParticleId(2), Instinct::default()),
            Particle::new(ParticleId(3), waiting),
        ];
        particles[0].alpha = 0.5;
        particles[1].kill();

        let stats = TickStats::collect(10, 10, &particles);
        assert_eq!(stats.alive, 2);
        assert_eq!(stats.drawable, 1);
        assert_eq!(stats.mean_alpha, 0.5);
    }

    #[test]
    fn test_resolve_builtin_and_unknown() {
        assert_eq!(resolve_preset("snow").unwrap().name, "snow");
        assert!(resolve_preset("no-such-preset").is_err());
    }
}
