//! Flurry CLI - inspect, export and run particle animation presets

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{export, list, run, validate};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flurry")]
#[command(about = "Particle animation engine: presets and headless simulation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in animation presets
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Write a built-in preset to stdout or a file
    Export {
        /// Preset name (e.g. "sakura", "flying-poo")
        preset: String,

        /// Output file; the extension picks the format when --format is not given
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (toml or json)
        #[arg(long)]
        format: Option<String>,
    },

    /// Check that a preset file loads and can run
    Validate {
        /// Path to a TOML or JSON preset
        file: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Run a preset headless and report population statistics
    Run {
        /// Built-in preset name or path to a preset file
        preset: String,

        /// System width in pixels
        #[arg(long, default_value = "1080")]
        width: u32,

        /// System height in pixels
        #[arg(long, default_value = "1920")]
        height: u32,

        /// Number of ticks to simulate
        #[arg(long, default_value = "300")]
        ticks: u64,

        /// Print statistics every N ticks
        #[arg(long, default_value = "60")]
        report_every: u64,

        /// Seed for deterministic particle generation
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { format } => list::run(&format),
        Commands::Export {
            preset,
            output,
            format,
        } => export::run(&preset, output.as_deref(), format.as_deref()),
        Commands::Validate { file, format } => validate::run(&file, &format),
        Commands::Run {
            preset,
            width,
            height,
            ticks,
            report_every,
            seed,
            format,
        } => run::run(run::RunArgs {
            preset,
            width,
            height,
            ticks,
            report_every,
            seed,
            format,
        }),
    }
}
