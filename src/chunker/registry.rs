//! Algorithm registry.
//!
//! An explicit mapping from algorithm identifier to chunker constructor,
//! populated at construction. Nothing registers itself as a side effect; the
//! full set of algorithms is visible in [`Registry::builtin`].

use std::collections::BTreeMap;

use bytes::Bytes;

use crate::config::ChunkerConfig;
use crate::error::SampleError;

use super::{Chunker, FastCdcChunker, UltraCdcChunker};

/// Constructor for a chunker bound to an input stream and config.
pub type ChunkerFactory = fn(Bytes, &ChunkerConfig) -> Result<Box<dyn Chunker>, SampleError>;

/// Named lookup from algorithm identifier to chunker constructor.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use chunkplot::{ChunkerConfig, Registry};
///
/// let registry = Registry::builtin();
/// assert!(registry.contains("fastcdc"));
///
/// let chunker = registry.create("fastcdc", Bytes::from_static(b"data"), &ChunkerConfig::default());
/// assert!(chunker.is_ok());
/// ```
pub struct Registry {
    entries: BTreeMap<&'static str, ChunkerFactory>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Creates a registry holding the built-in algorithms.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("fastcdc", |input, config| {
            Ok(Box::new(FastCdcChunker::new(input, config)?))
        });
        registry.register("ultracdc", |input, config| {
            Ok(Box::new(UltraCdcChunker::new(input, config)?))
        });
        registry
    }

    /// Registers `factory` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &'static str, factory: ChunkerFactory) {
        self.entries.insert(name, factory);
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the registered identifiers, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// Resolves `name` and constructs a chunker bound to `input` and `config`.
    ///
    /// # Errors
    ///
    /// [`SampleError::UnknownAlgorithm`] if `name` is not registered;
    /// construction errors from the factory pass through.
    pub fn create(
        &self,
        name: &str,
        input: Bytes,
        config: &ChunkerConfig,
    ) -> Result<Box<dyn Chunker>, SampleError> {
        let factory = self
            .entries
            .get(name)
            .ok_or_else(|| SampleError::UnknownAlgorithm {
                name: name.to_string(),
            })?;
        factory(input, config)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
