//! The chunker capability and the drivers for the built-in engines.
//!
//! A [`Chunker`] is bound to one input stream at construction and hands out
//! chunks until the stream is exhausted. The [`Registry`] maps algorithm
//! identifiers to chunker constructors.

use bytes::Bytes;

use crate::cdc::{FastCdc, UltraCdc};
use crate::config::ChunkerConfig;
use crate::error::SampleError;

mod registry;

pub use registry::{ChunkerFactory, Registry};

/// One chunk handed out by a [`Chunker`].
#[derive(Debug, Clone)]
pub struct ChunkStep {
    /// The chunk's bytes, zero-copy sliced from the input.
    pub data: Bytes,

    /// True for the terminal chunk, whose length is constrained by
    /// end-of-input rather than algorithm policy.
    pub last: bool,
}

/// A chunking engine bound to one input stream.
///
/// `next_chunk` yields chunks in stream order and `None` once the terminal
/// chunk has been handed out. An empty input yields `None` immediately.
pub trait Chunker {
    /// Returns the next chunk, or `None` when the stream is exhausted.
    fn next_chunk(&mut self) -> Option<ChunkStep>;
}

/// Emits `data[pos..pos + len]` and advances, flagging the terminal chunk.
fn emit(input: &Bytes, pos: &mut usize, len: usize) -> ChunkStep {
    let data = input.slice(*pos..*pos + len);
    *pos += len;
    ChunkStep {
        data,
        last: *pos == input.len(),
    }
}

/// FastCDC driver: scans the input with the gear rolling hash.
pub struct FastCdcChunker {
    input: Bytes,
    pos: usize,
    cdc: FastCdc,
}

impl FastCdcChunker {
    /// Binds a FastCDC chunker to `input` under `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidConfig`] unless `avg_size` is a power of
    /// two in `[2, 2^30]`; the normalized boundary masks are indexed by
    /// `log2(avg_size) ± 1`.
    pub fn new(input: Bytes, config: &ChunkerConfig) -> Result<Self, SampleError> {
        let avg = config.avg_size();
        if !avg.is_power_of_two() || avg < 2 || avg > 1 << 30 {
            return Err(SampleError::InvalidConfig {
                message: "fastcdc requires a power-of-two avg_size in [2, 2^30]",
            });
        }

        Ok(Self {
            input,
            pos: 0,
            cdc: FastCdc::with_key(
                config.min_size(),
                config.avg_size(),
                config.max_size(),
                config.key(),
            ),
        })
    }
}

impl Chunker for FastCdcChunker {
    fn next_chunk(&mut self) -> Option<ChunkStep> {
        if self.pos >= self.input.len() {
            return None;
        }

        let rest = &self.input[self.pos..];
        match self.cdc.next_boundary(rest) {
            Some(len) => Some(emit(&self.input, &mut self.pos, len)),
            // No boundary before end of input: the remainder is terminal.
            None => Some(emit(&self.input, &mut self.pos, rest.len())),
        }
    }
}

/// UltraCDC driver: repeated cut-point searches over the remaining input.
pub struct UltraCdcChunker {
    input: Bytes,
    pos: usize,
    cdc: UltraCdc,
}

impl UltraCdcChunker {
    /// Binds an UltraCDC chunker to `input` under `config`.
    ///
    /// UltraCDC ignores keying material; only the size bounds apply.
    pub fn new(input: Bytes, config: &ChunkerConfig) -> Result<Self, SampleError> {
        Ok(Self {
            input,
            pos: 0,
            cdc: UltraCdc::new(config.min_size(), config.avg_size(), config.max_size()),
        })
    }
}

impl Chunker for UltraCdcChunker {
    fn next_chunk(&mut self) -> Option<ChunkStep> {
        if self.pos >= self.input.len() {
            return None;
        }

        let len = self.cdc.cut_point(&self.input[self.pos..]);
        Some(emit(&self.input, &mut self.pos, len))
    }
}
