//! Chunk-size sampling pipeline.
//!
//! Drives a registered chunking algorithm over an input and records the byte
//! length of every chunk it emits, validating each length against the
//! configured bounds. The resulting series is what the scatter plot draws.

use bytes::Bytes;

use crate::chunker::Registry;
use crate::config::ChunkerConfig;
use crate::error::SampleError;

/// Samples chunk lengths for `algorithm` over `input` using the built-in
/// registry.
///
/// See [`sample_with`] for the contract.
pub fn sample(
    input: Bytes,
    algorithm: &str,
    config: &ChunkerConfig,
) -> Result<Vec<usize>, SampleError> {
    sample_with(&Registry::builtin(), input, algorithm, config)
}

/// Samples chunk lengths for `algorithm` over `input`.
///
/// Chunk lengths are returned in emission order, so the index of each entry
/// is its position in the stream. The lengths always sum to `input.len()`.
/// Sampling is a pure function of its arguments: the same input, algorithm
/// and config yield the same series.
///
/// Every chunk except the terminal one must lie within
/// `[config.min_size(), config.max_size()]`; the terminal chunk may be
/// shorter than the minimum because it is cut by end-of-input, but is still
/// bound by the maximum. An empty input yields an empty series.
///
/// # Errors
///
/// - [`SampleError::UnknownAlgorithm`] if `algorithm` is not registered.
/// - [`SampleError::InvalidConfig`] if the chunker rejects the configuration
///   at construction.
/// - [`SampleError::BoundsViolation`] if the algorithm emits an out-of-bounds
///   chunk. This means the implementation under test is broken; the series is
///   discarded rather than partially returned.
pub fn sample_with(
    registry: &Registry,
    input: Bytes,
    algorithm: &str,
    config: &ChunkerConfig,
) -> Result<Vec<usize>, SampleError> {
    let mut chunker = registry.create(algorithm, input, config)?;
    let mut lengths = Vec::new();

    while let Some(step) = chunker.next_chunk() {
        let len = step.data.len();

        let below_min = !step.last && len < config.min_size();
        if below_min || len > config.max_size() {
            return Err(SampleError::BoundsViolation {
                algorithm: algorithm.to_string(),
                index: lengths.len(),
                len,
                min: config.min_size(),
                max: config.max_size(),
            });
        }

        lengths.push(len);
    }

    Ok(lengths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunker::{ChunkStep, Chunker};
    use crate::input::seeded_bytes;

    #[test]
    fn test_empty_input_empty_series() {
        let config = ChunkerConfig::new(64, 256, 1024).unwrap();
        let lengths = sample(Bytes::new(), "fastcdc", &config).unwrap();
        assert!(lengths.is_empty());
    }

    #[test]
    fn test_input_below_min_single_terminal_chunk() {
        let config = ChunkerConfig::new(64, 256, 1024).unwrap();
        let lengths = sample(seeded_bytes(40, 0), "fastcdc", &config).unwrap();
        assert_eq!(lengths, vec![40]);
    }

    #[test]
    fn test_unknown_algorithm() {
        let config = ChunkerConfig::default();
        assert!(matches!(
            sample(Bytes::new(), "buzhash", &config),
            Err(SampleError::UnknownAlgorithm { .. })
        ));
    }

    /// Emits fixed-length chunks regardless of config bounds.
    struct FixedLen {
        input: Bytes,
        pos: usize,
        len: usize,
    }

    impl Chunker for FixedLen {
        fn next_chunk(&mut self) -> Option<ChunkStep> {
            if self.pos >= self.input.len() {
                return None;
            }
            let end = (self.pos + self.len).min(self.input.len());
            let data = self.input.slice(self.pos..end);
            self.pos = end;
            Some(ChunkStep {
                data,
                last: self.pos == self.input.len(),
            })
        }
    }

    #[test]
    fn test_bounds_violation_is_fatal() {
        let mut registry = Registry::builtin();
        registry.register("oversized", |input, config| {
            Ok(Box::new(FixedLen {
                input,
                pos: 0,
                len: config.max_size() + 1,
            }))
        });

        let config = ChunkerConfig::new(64, 256, 1024).unwrap();
        let result = sample_with(&registry, seeded_bytes(8192, 0), "oversized", &config);
        match result {
            Err(SampleError::BoundsViolation {
                index, len, max, ..
            }) => {
                assert_eq!(index, 0);
                assert_eq!(len, 1025);
                assert_eq!(max, 1024);
            }
            _ => panic!("expected BoundsViolation"),
        }
    }

    #[test]
    fn test_terminal_chunk_exempt_from_min_only() {
        // 1025 bytes with a 1024-max chunker: one full chunk plus a 1-byte
        // terminal chunk, which must be accepted despite min = 64.
        let mut registry = Registry::new();
        registry.register("fixed", |input, config| {
            Ok(Box::new(FixedLen {
                input,
                pos: 0,
                len: config.max_size(),
            }))
        });

        let config = ChunkerConfig::new(64, 256, 1024).unwrap();
        let lengths = sample_with(&registry, seeded_bytes(1025, 0), "fixed", &config).unwrap();
        assert_eq!(lengths, vec![1024, 1]);
    }
}
