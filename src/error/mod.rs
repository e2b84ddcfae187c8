//! Error types for chunkplot.

use std::fmt;

/// Errors that can occur while sampling chunk sizes for an algorithm.
#[derive(Debug)]
pub enum SampleError {
    /// The requested algorithm identifier is not registered.
    UnknownAlgorithm {
        /// The identifier that failed to resolve.
        name: String,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// An algorithm emitted a chunk outside the configured size bounds.
    ///
    /// This signals a defect in the algorithm under test, not a recoverable
    /// condition; the whole sampling run is aborted.
    BoundsViolation {
        /// The algorithm under test.
        algorithm: String,
        /// Zero-based position of the offending chunk in the stream.
        index: usize,
        /// The offending chunk length.
        len: usize,
        /// Configured minimum chunk size.
        min: usize,
        /// Configured maximum chunk size.
        max: usize,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::UnknownAlgorithm { name } => {
                write!(f, "unknown algorithm: {}", name)
            }
            SampleError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            SampleError::BoundsViolation {
                algorithm,
                index,
                len,
                min,
                max,
            } => {
                write!(
                    f,
                    "{}: chunk {} is {} bytes, outside [{}, {}]",
                    algorithm, index, len, min, max
                )
            }
        }
    }
}

impl std::error::Error for SampleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_algorithm_display() {
        let err = SampleError::UnknownAlgorithm {
            name: "rollsum".into(),
        };
        assert!(err.to_string().contains("unknown algorithm: rollsum"));
    }

    #[test]
    fn test_bounds_violation_display() {
        let err = SampleError::BoundsViolation {
            algorithm: "fastcdc".into(),
            index: 7,
            len: 100,
            min: 2048,
            max: 65536,
        };
        let s = err.to_string();
        assert!(s.contains("chunk 7"));
        assert!(s.contains("100 bytes"));
    }
}
