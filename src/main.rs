//! chunkplot binary: chunk-size distribution plots.
//!
//! Generates seeded pseudo-random input, samples chunk sizes for each
//! requested algorithm under one shared configuration, and renders a scatter
//! plot of the distributions against the configured bounds.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use chunkplot::plot::{self, ScatterSeries};
use chunkplot::{ChunkerConfig, Registry, input, sampler, series};

/// Compare chunk-size distributions of CDC algorithms.
#[derive(Debug, Parser)]
#[command(name = "chunkplot", version)]
struct Args {
    /// Generated input size in bytes.
    #[arg(long, default_value_t = 1024 << 20)]
    size: usize,

    /// Minimum chunk size in bytes.
    #[arg(long, default_value_t = 2 * 1024)]
    min: usize,

    /// Average chunk size in bytes.
    #[arg(long, default_value_t = 8 * 1024)]
    avg: usize,

    /// Maximum chunk size in bytes.
    #[arg(long, default_value_t = 64 * 1024)]
    max: usize,

    /// Seed for the generated input.
    #[arg(long, default_value_t = input::DEFAULT_SEED)]
    seed: u64,

    /// Output image path. Defaults to a name derived from the bounds, so
    /// repeated runs with the same configuration overwrite the same file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Algorithms to compare (e.g. fastcdc ultracdc).
    #[arg(required = true)]
    algorithms: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = ChunkerConfig::new(args.min, args.avg, args.max)?;
    let registry = Registry::builtin();
    let input = input::seeded_bytes(args.size, args.seed);

    let mut all_series = Vec::with_capacity(args.algorithms.len());
    let mut max_points = 0;
    for algorithm in &args.algorithms {
        let lengths = sampler::sample_with(&registry, input.clone(), algorithm, &config)
            .with_context(|| {
                format!(
                    "sampling {} (registered: {})",
                    algorithm,
                    registry.names().join(", ")
                )
            })?;
        max_points = max_points.max(lengths.len());
        all_series.push(ScatterSeries {
            name: algorithm.clone(),
            points: series::chunk_points(&lengths),
        });
    }

    let output = args.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "cdc-min{}-avg{}-max{}.png",
            args.min, args.avg, args.max
        ))
    });
    let title = format!("min={}, avg={}, max={}", args.min, args.avg, args.max);
    plot::scatter_chart(&output, &title, &all_series, &config, max_points)?;

    println!("Generated: {}", output.display());
    Ok(())
}
