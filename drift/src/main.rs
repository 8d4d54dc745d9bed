//! Previews a seeded gradient noise field in the terminal.

mod config;
mod logging;
mod preview;

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use drift_core::{NoiseGenerator, Xoroshiro};

use crate::config::DriftConfig;

const DEFAULT_CONFIG_PATH: &str = "drift.json5";

fn main() -> Result<()> {
    logging::init()?;

    let path = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = DriftConfig::load_or_create(&path)?;
    tracing::info!("Loaded config from {}", path.display());

    let seed = config.resolve_seed();
    tracing::info!("Using seed {seed}");

    let start = Instant::now();
    let generator =
        NoiseGenerator::with_random(Xoroshiro::from_seed(seed as u64), config.noise_config())
            .context("failed to build noise tables")?;
    for _ in 0..config.reseeds {
        generator.reseed().context("failed to reseed noise tables")?;
    }
    tracing::info!(
        "Noise tables ready in {:?} (size {}, generation {})",
        start.elapsed(),
        config.table_size,
        generator.generation()
    );

    let window = config.window();
    let start = Instant::now();
    let field = generator.sample_window(&window);
    tracing::info!(
        "Sampled {}x{} in {:?}: min {:.4}, max {:.4}",
        field.width(),
        field.height(),
        start.elapsed(),
        field.min(),
        field.max()
    );

    print!("{}", preview::render(&field));
    Ok(())
}
