//! Configuration for chunk sampling.
//!
//! [`ChunkerConfig`] carries the size bounds every algorithm run is measured
//! against, plus optional keying material for algorithms that support it.

use crate::error::SampleError;

/// Default minimum chunk size (2 KiB).
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 2 * 1024;

/// Default average/target chunk size (8 KiB).
pub const DEFAULT_AVG_CHUNK_SIZE: usize = 8 * 1024;

/// Default maximum chunk size (64 KiB).
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 64 * 1024;

/// Size bounds and keying material for one sampling run.
///
/// Created once per invocation and never mutated. All registered algorithms
/// for a run share the same config, so their chunk-size distributions are
/// directly comparable.
///
/// # Size Constraints
///
/// All sizes must be non-zero and ordered: `min_size <= avg_size <= max_size`.
/// Individual algorithms may impose further constraints at construction time
/// (FastCDC requires a power-of-two `avg_size` for its boundary masks).
///
/// # Example
///
/// ```
/// use chunkplot::ChunkerConfig;
///
/// let config = ChunkerConfig::new(2048, 8192, 65536)?;
/// assert_eq!(config.avg_size(), 8192);
/// # Ok::<(), chunkplot::SampleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkerConfig {
    /// Minimum chunk size in bytes.
    min_size: usize,

    /// Average/target chunk size in bytes.
    avg_size: usize,

    /// Maximum chunk size in bytes.
    max_size: usize,

    /// Opaque keying material; algorithms that do not support keying ignore it.
    key: Option<Vec<u8>>,
}

impl ChunkerConfig {
    /// Creates a new configuration with the specified size bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidConfig`] if any size is zero or the sizes
    /// are not ordered `min_size <= avg_size <= max_size`.
    pub fn new(min_size: usize, avg_size: usize, max_size: usize) -> Result<Self, SampleError> {
        if min_size == 0 || avg_size == 0 || max_size == 0 {
            return Err(SampleError::InvalidConfig {
                message: "chunk sizes must be non-zero",
            });
        }

        if min_size > avg_size {
            return Err(SampleError::InvalidConfig {
                message: "min_size cannot be greater than avg_size",
            });
        }

        if avg_size > max_size {
            return Err(SampleError::InvalidConfig {
                message: "avg_size cannot be greater than max_size",
            });
        }

        Ok(Self {
            min_size,
            avg_size,
            max_size,
            key: None,
        })
    }

    /// Sets the keying material.
    ///
    /// # Example
    ///
    /// ```
    /// use chunkplot::ChunkerConfig;
    ///
    /// let config = ChunkerConfig::default().with_key(b"secret".to_vec());
    /// assert!(config.key().is_some());
    /// ```
    pub fn with_key(mut self, key: Vec<u8>) -> Self {
        self.key = Some(key);
        self
    }

    /// Returns the minimum chunk size.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Returns the average/target chunk size.
    pub fn avg_size(&self) -> usize {
        self.avg_size
    }

    /// Returns the maximum chunk size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the keying material, if set.
    pub fn key(&self) -> Option<&[u8]> {
        self.key.as_deref()
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_CHUNK_SIZE,
            avg_size: DEFAULT_AVG_CHUNK_SIZE,
            max_size: DEFAULT_MAX_CHUNK_SIZE,
            key: None,
        }
    }
}
