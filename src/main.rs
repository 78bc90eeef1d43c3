//! Well Playback Generator
//!
//! Reads a well configuration and writes a stand-by-stand drilling playback
//! table for replay into rig-floor displays.
//!
//! # Usage
//! ```bash
//! ./well-playback                      # config.xml -> FEPlayback.csv
//! ./well-playback --seed 42            # reproducible output
//! ./well-playback --config well.toml --output well.csv
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use well_playback::config::{defaults, WellConfig};
use well_playback::simulation::write_playback;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "well-playback")]
#[command(about = "Synthetic drilling telemetry playback generator")]
#[command(version)]
struct Args {
    /// Well configuration document (.xml, or .toml)
    #[arg(long, env = "WELL_PLAYBACK_CONFIG", default_value = defaults::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output CSV path (overwritten)
    #[arg(short, long, env = "WELL_PLAYBACK_OUTPUT", default_value = defaults::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    // Diagnostics on stderr; stdout carries the progress lines
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = WellConfig::load(&args.config)
        .with_context(|| format!("Cannot load well config {}", args.config.display()))?;
    println!("Loaded {}.", args.config.display());

    if let Some(seed) = args.seed {
        info!(seed, "Using fixed random seed");
    }

    println!("Creating {}.", args.output.display());
    let summary = write_playback(&config, &args.output, args.seed)
        .with_context(|| format!("Cannot generate {}", args.output.display()))?;

    println!(
        "{} created from configuration type {}.",
        args.output.display(),
        config.well_type
    );
    println!(
        "  Stands: {} | Rows: {} | Final hole depth: {:.1} ft",
        summary.stands, summary.samples, summary.final_hole_depth
    );

    Ok(())
}
