//! Reproducible input generation.
//!
//! Comparative runs need every algorithm to see the same bytes, and repeated
//! runs need to be comparable with each other, so generated input always
//! comes from an explicitly seeded generator rather than entropy.

use bytes::Bytes;
use rand::{RngCore, SeedableRng, rngs::StdRng};

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0;

/// Generates `len` pseudo-random bytes from `seed`.
///
/// Deterministic: the same `(len, seed)` pair always yields the same bytes,
/// across runs and platforms.
///
/// # Example
///
/// ```
/// use chunkplot::input::seeded_bytes;
///
/// assert_eq!(seeded_bytes(1024, 0), seeded_bytes(1024, 0));
/// assert_ne!(seeded_bytes(1024, 0), seeded_bytes(1024, 1));
/// ```
pub fn seeded_bytes(len: usize, seed: u64) -> Bytes {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    Bytes::from(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len() {
        assert_eq!(seeded_bytes(0, 0).len(), 0);
        assert_eq!(seeded_bytes(4096, 0).len(), 4096);
    }

    #[test]
    fn test_prefix_stability() {
        // Growing the requested length must not change the leading bytes,
        // otherwise runs with different --size are not comparable.
        let short = seeded_bytes(1024, 7);
        let long = seeded_bytes(2048, 7);
        assert_eq!(&long[..1024], &short[..]);
    }
}
