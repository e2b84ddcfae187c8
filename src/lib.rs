//! chunkplot
//!
//! Evaluate and visualize Content-Defined Chunking (CDC) algorithms.
//!
//! `chunkplot` drives registered chunking algorithms over the same input and
//! turns the results into charts:
//!
//! - chunk-size distributions per algorithm, plotted against the configured
//!   min/average/max bounds
//! - bar charts of latency, throughput, and chunk count parsed from textual
//!   benchmark output
//!
//! The crate intentionally:
//! - does NOT invent chunk boundaries itself (that is the algorithms' job)
//! - does NOT lay out plot images beyond handing series to the renderer
//! - does NOT stream: inputs are materialized once and processed in memory
//!
//! # Sampling chunk sizes
//!
//! ```
//! use chunkplot::{ChunkerConfig, input, sampler};
//!
//! fn main() -> Result<(), chunkplot::SampleError> {
//!     let config = ChunkerConfig::new(2048, 8192, 65536)?;
//!     let data = input::seeded_bytes(1024 * 1024, 0);
//!
//!     let lengths = sampler::sample(data, "fastcdc", &config)?;
//!     assert_eq!(lengths.iter().sum::<usize>(), 1024 * 1024);
//!     Ok(())
//! }
//! ```
//!
//! # Parsing benchmark output
//!
//! ```
//! use chunkplot::bench::parse_line;
//! use chunkplot::series::{Metric, benchmark_series};
//!
//! let records: Vec<_> = "Benchmark_FastCDC-14  1000  345 ns/op  120.5 MB/s  83 chunks"
//!     .lines()
//!     .filter_map(parse_line)
//!     .collect();
//!
//! let (labels, values) = benchmark_series(&records, Metric::Throughput);
//! assert_eq!(labels, vec!["FastCDC"]);
//! assert_eq!(values, vec![120.5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cdc;
mod chunker;
mod config;
mod error;

pub mod bench;
pub mod input;
pub mod plot;
pub mod sampler;
pub mod series;

//
// Public surface (intentionally tiny)
//

pub use bench::BenchmarkRecord;
pub use chunker::{ChunkStep, Chunker, ChunkerFactory, Registry};
pub use config::ChunkerConfig;
pub use error::SampleError;
pub use series::Metric;
