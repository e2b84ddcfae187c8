//! benchplot binary: bar charts from benchmark output.
//!
//! Reads Go-style benchmark text from stdin, extracts the records, and
//! renders one bar chart per metric (latency, throughput, chunk count),
//! sorted ascending by the plotted value.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use chunkplot::series::{Metric, benchmark_series};
use chunkplot::{bench, plot};

fn main() -> Result<()> {
    let records = bench::read_records(io::stdin().lock()).context("reading stdin")?;

    if records.is_empty() {
        println!("No valid benchmark lines found.");
        return Ok(());
    }

    for metric in Metric::ALL {
        let (labels, values) = benchmark_series(&records, metric);
        plot::bar_chart(
            Path::new(metric.file_name()),
            metric.title(),
            metric.y_label(),
            &labels,
            &values,
        )?;
    }

    let names: Vec<_> = Metric::ALL.iter().map(|m| m.file_name()).collect();
    println!("Generated: {}", names.join(", "));
    Ok(())
}
