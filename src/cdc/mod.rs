//! Content-Defined Chunking (CDC) boundary engines.
//!
//! These detect chunk boundaries from content patterns; the [`crate::chunker`]
//! module drives them over an input stream.
//!
//! - [`FastCdc`] - gear rolling hash with normalized masks
//! - [`UltraCdc`] - Hamming-distance windows with low-entropy cuts

mod fastcdc;
mod ultracdc;

pub use fastcdc::FastCdc;
pub use ultracdc::UltraCdc;
