//! Series builders: turn raw samples and records into plottable series.
//!
//! No state, no failure modes; these operate on already-validated in-memory
//! data.

use std::cmp::Ordering;

use crate::bench::BenchmarkRecord;

/// The benchmark metric a bar chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Nanoseconds per operation.
    Latency,
    /// Throughput in MB/s.
    Throughput,
    /// Chunks produced per operation.
    ChunkCount,
}

impl Metric {
    /// All metrics, in the order charts are generated.
    pub const ALL: [Metric; 3] = [Metric::Latency, Metric::Throughput, Metric::ChunkCount];

    /// Extracts this metric's value from a record.
    pub fn value(self, record: &BenchmarkRecord) -> f64 {
        match self {
            Metric::Latency => record.ns_per_op,
            Metric::Throughput => record.throughput,
            Metric::ChunkCount => record.chunks,
        }
    }

    /// Chart title.
    pub fn title(self) -> &'static str {
        match self {
            Metric::Latency => "Benchmark ns/op",
            Metric::Throughput => "Benchmark Throughput",
            Metric::ChunkCount => "Benchmark Chunk Count",
        }
    }

    /// Y-axis label.
    pub fn y_label(self) -> &'static str {
        match self {
            Metric::Latency => "ns/op",
            Metric::Throughput => "MB/s",
            Metric::ChunkCount => "Chunks",
        }
    }

    /// Default output file name for this metric's chart.
    pub fn file_name(self) -> &'static str {
        match self {
            Metric::Latency => "ns_per_op.png",
            Metric::Throughput => "throughput.png",
            Metric::ChunkCount => "chunks.png",
        }
    }
}

/// Maps a chunk-length series to scatter coordinates.
///
/// Zero-length entries are dropped (they carry no size information), but the
/// x coordinate of each surviving entry is its position in the *raw* series,
/// so gaps remain visible as stream positions rather than being compacted.
///
/// # Example
///
/// ```
/// use chunkplot::series::chunk_points;
///
/// let points = chunk_points(&[100, 0, 250]);
/// assert_eq!(points, vec![(0.0, 100.0), (2.0, 250.0)]);
/// ```
pub fn chunk_points(lengths: &[usize]) -> Vec<(f64, f64)> {
    lengths
        .iter()
        .enumerate()
        .filter(|&(_, &len)| len != 0)
        .map(|(i, &len)| (i as f64, len as f64))
        .collect()
}

/// Builds a bar-chart series for `metric` over `records`.
///
/// Returns parallel label/value vectors sorted by ascending value. The sort
/// is stable: records with equal values keep their input order. Labels are
/// the record names with a trailing run-count suffix (`-<digits>`, appended
/// by the benchmark harness) stripped for display; stripping never affects
/// the records or the sort key.
pub fn benchmark_series(records: &[BenchmarkRecord], metric: Metric) -> (Vec<String>, Vec<f64>) {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| {
        metric
            .value(&records[a])
            .partial_cmp(&metric.value(&records[b]))
            .unwrap_or(Ordering::Equal)
    });

    let labels = order
        .iter()
        .map(|&i| strip_run_suffix(&records[i].name).to_string())
        .collect();
    let values = order.iter().map(|&i| metric.value(&records[i])).collect();
    (labels, values)
}

/// Strips a trailing `-<digits>` run-count suffix, if present.
fn strip_run_suffix(name: &str) -> &str {
    match name.rsplit_once('-') {
        Some((head, tail))
            if !head.is_empty() && !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) =>
        {
            head
        }
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, ns: f64, mbs: f64, chunks: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            name: name.to_string(),
            ns_per_op: ns,
            throughput: mbs,
            chunks,
        }
    }

    #[test]
    fn test_chunk_points_skips_zeros_keeps_indices() {
        let points = chunk_points(&[0, 10, 0, 30, 40, 0]);
        assert_eq!(points, vec![(1.0, 10.0), (3.0, 30.0), (4.0, 40.0)]);
    }

    #[test]
    fn test_chunk_points_indices_strictly_increasing() {
        let points = chunk_points(&[5, 0, 5, 5, 0, 5]);
        for pair in points.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn test_chunk_points_empty() {
        assert!(chunk_points(&[]).is_empty());
        assert!(chunk_points(&[0, 0]).is_empty());
    }

    #[test]
    fn test_benchmark_series_sorted_ascending() {
        let records = vec![
            record("C-14", 300.0, 10.0, 5.0),
            record("A-14", 100.0, 30.0, 2.0),
            record("B-14", 200.0, 20.0, 9.0),
        ];

        let (labels, values) = benchmark_series(&records, Metric::Latency);
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(values, vec![100.0, 200.0, 300.0]);

        // A different metric reorders independently.
        let (labels, values) = benchmark_series(&records, Metric::Throughput);
        assert_eq!(labels, vec!["C", "B", "A"]);
        assert_eq!(values, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_benchmark_series_stable_on_ties() {
        let records = vec![
            record("first-14", 100.0, 1.0, 1.0),
            record("second-14", 100.0, 2.0, 2.0),
            record("third-14", 50.0, 3.0, 3.0),
        ];

        let (labels, _) = benchmark_series(&records, Metric::Latency);
        assert_eq!(labels, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_benchmark_series_is_permutation() {
        let records = vec![
            record("x-1", 3.0, 0.0, 0.0),
            record("y-2", 1.0, 0.0, 0.0),
            record("z-3", 2.0, 0.0, 0.0),
        ];
        let (labels, values) = benchmark_series(&records, Metric::Latency);
        assert_eq!(labels.len(), records.len());
        assert_eq!(values.len(), records.len());
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(values, sorted);
    }

    #[test]
    fn test_strip_run_suffix() {
        assert_eq!(strip_run_suffix("FastCDC-14"), "FastCDC");
        assert_eq!(strip_run_suffix("FastCDC-1234"), "FastCDC");
        assert_eq!(strip_run_suffix("FastCDC"), "FastCDC");
        assert_eq!(strip_run_suffix("fastcdc-v2-14"), "fastcdc-v2");
        assert_eq!(strip_run_suffix("fastcdc-v2"), "fastcdc-v2");
        assert_eq!(strip_run_suffix("trailing-"), "trailing-");
        assert_eq!(strip_run_suffix("-14"), "-14");
    }
}
