//! Benchmark record parsing.
//!
//! Extracts structured records from Go-style textual benchmark output, one
//! line at a time. A matching line looks like:
//!
//! ```text
//! Benchmark_FastCDC-14  1000  345 ns/op  120.5 MB/s  83 chunks
//! ```
//!
//! Lines of any other shape are silently skipped; the caller decides whether
//! ending up with zero records is worth reporting.

use std::io::{self, BufRead};
use std::sync::LazyLock;

use regex::Regex;

/// One parsed benchmark line: name, iteration count dropped, then the three
/// plotted metrics in fixed order.
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Benchmark_(\S+)\s+\d+\s+(\d+)\s+ns/op\s+([\d.]+)\s+MB/s\s+(\d+)\s+chunks")
        .expect("benchmark line pattern is valid")
});

/// One parsed benchmark result line.
///
/// Immutable after creation; `name` keeps any run-count suffix (for display
/// the series builder strips it, the record itself is untouched).
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// Algorithm/variant identifier, `Benchmark_` prefix stripped.
    pub name: String,

    /// Nanoseconds per operation.
    pub ns_per_op: f64,

    /// Throughput in MB/s.
    pub throughput: f64,

    /// Chunks produced per operation.
    pub chunks: f64,
}

/// Parses one line of benchmark output.
///
/// Total over all inputs: returns `None` for lines that do not match the
/// expected shape, never an error. Numeric captures that fail conversion
/// after a shape match default to zero; the captures are digit-shaped, so in
/// practice only overflow can trigger this.
///
/// # Example
///
/// ```
/// use chunkplot::bench::parse_line;
///
/// let record = parse_line("Benchmark_FastCDC-14  1000  345 ns/op  120.5 MB/s  83 chunks").unwrap();
/// assert_eq!(record.name, "FastCDC-14");
/// assert_eq!(record.throughput, 120.5);
/// assert!(parse_line("goos: linux").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<BenchmarkRecord> {
    let caps = LINE_RE.captures(line)?;

    Some(BenchmarkRecord {
        name: caps[1].to_string(),
        ns_per_op: caps[2].parse().unwrap_or(0.0),
        throughput: caps[3].parse().unwrap_or(0.0),
        chunks: caps[4].parse().unwrap_or(0.0),
    })
}

/// Collects all records from a line stream, in input order.
///
/// # Errors
///
/// Only I/O errors from the reader; unparseable lines are skipped.
pub fn read_records<R: BufRead>(reader: R) -> io::Result<Vec<BenchmarkRecord>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        if let Some(record) = parse_line(&line?) {
            records.push(record);
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_line() {
        let record =
            parse_line("Benchmark_FastCDC-14  1000  345 ns/op  120.5 MB/s  83 chunks").unwrap();
        assert_eq!(record.name, "FastCDC-14");
        assert_eq!(record.ns_per_op, 345.0);
        assert_eq!(record.throughput, 120.5);
        assert_eq!(record.chunks, 83.0);
    }

    #[test]
    fn test_parse_single_spaces() {
        let record = parse_line("Benchmark_UltraCDC-8 500 1200 ns/op 88.25 MB/s 41 chunks");
        let record = record.unwrap();
        assert_eq!(record.name, "UltraCDC-8");
        assert_eq!(record.ns_per_op, 1200.0);
    }

    #[test]
    fn test_reject_wrong_shapes() {
        for line in [
            "",
            "goos: linux",
            "Benchmark_FastCDC-14  1000",
            "FastCDC-14  1000  345 ns/op  120.5 MB/s  83 chunks",
            "Benchmark_FastCDC-14  1000  345 ns/op  120.5 MB/s",
            "Benchmark_FastCDC-14  1000  abc ns/op  120.5 MB/s  83 chunks",
        ] {
            assert!(parse_line(line).is_none(), "should reject: {:?}", line);
        }
    }

    #[test]
    fn test_trailing_content_tolerated() {
        // The pattern is anchored at the start only, matching the reference.
        let record = parse_line("Benchmark_JC-14 10 9 ns/op 1.0 MB/s 2 chunks extra");
        assert!(record.is_some());
    }

    #[test]
    fn test_read_records_skips_noise() {
        let text = "goos: linux\n\
                    Benchmark_A-14  10  100 ns/op  5.0 MB/s  3 chunks\n\
                    PASS\n\
                    Benchmark_B-14  10  200 ns/op  2.5 MB/s  6 chunks\n";
        let records = read_records(text.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "A-14");
        assert_eq!(records[1].name, "B-14");
    }
}
