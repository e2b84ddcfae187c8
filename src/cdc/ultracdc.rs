//! UltraCDC cut-point detection.
//!
//! Based on "UltraCDC: A Fast and Efficient Content-Defined Chunking
//! Algorithm for Data Deduplication" (2022). Instead of a rolling hash,
//! UltraCDC tracks the Hamming distance between an 8-byte sliding window and
//! the fixed pattern `0xAA..AA`, declaring a boundary when the distance
//! matches a mask. Runs of identical windows are detected as low-entropy data
//! and force a cut, which keeps pathological inputs (all zeros, long repeats)
//! from degenerating into max-size chunks only.

/// Hamming distance from each byte value to `0xAA`.
const fn hamming_to_pattern() -> [i32; 256] {
    let mut table = [0i32; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = ((i as u8) ^ 0xAA).count_ones() as i32;
        i += 1;
    }
    table
}

const HAMMING: [i32; 256] = hamming_to_pattern();

/// Mask used before the target size is reached: 0b10_1111.
const MASK_S: u64 = 0x2F;

/// Mask used past the target size: 0b10_1100. Two fewer bits to check, so a
/// match becomes more likely and oversized chunks rarer.
const MASK_L: u64 = 0x2C;

/// Consecutive identical 8-byte windows that force a low-entropy cut.
const LOW_ENTROPY_THRESHOLD: usize = 64;

/// UltraCDC cut-point search over in-memory data.
///
/// Stateless between chunks: each call to [`UltraCdc::cut_point`] considers
/// one window of the input starting at the previous cut.
#[derive(Debug, Clone)]
pub struct UltraCdc {
    min_size: usize,
    avg_size: usize,
    max_size: usize,
}

impl UltraCdc {
    /// Creates a new cut-point searcher with the given size bounds.
    pub fn new(min_size: usize, avg_size: usize, max_size: usize) -> Self {
        Self {
            min_size,
            avg_size,
            max_size,
        }
    }

    /// Returns the length of the next chunk at the start of `data`.
    ///
    /// The result is at most `min(data.len(), max_size)`. When `data` is too
    /// short to search (at most `min_size + 8` bytes remain) the whole
    /// remainder is taken; the caller treats a cut that consumes the rest of
    /// the stream as the terminal chunk.
    pub fn cut_point(&self, data: &[u8]) -> usize {
        let n = data.len().min(self.max_size);
        if n <= self.min_size + 8 {
            return n;
        }

        let avg_size = self.avg_size.min(n);

        // Reference window starts right after the minimum size.
        let out_win = &data[self.min_size..self.min_size + 8];
        let mut dist: i32 = out_win.iter().map(|&b| HAMMING[b as usize]).sum();

        let mut low_entropy_runs = 0;
        let mut i = self.min_size + 8;

        while i + 8 <= n {
            let mask = if i < avg_size { MASK_S } else { MASK_L };
            let in_win = &data[i..i + 8];

            if in_win == out_win {
                low_entropy_runs += 1;
                if low_entropy_runs >= LOW_ENTROPY_THRESHOLD {
                    return i + 8;
                }
                i += 8;
                continue;
            }
            low_entropy_runs = 0;

            for j in 0..8 {
                if dist as u64 & mask == 0 {
                    return i + j;
                }
                // Slide the window one byte.
                dist += HAMMING[data[i + j] as usize] - HAMMING[data[i + j - 8] as usize];
            }

            i += 8;
        }

        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_taken_whole() {
        let cdc = UltraCdc::new(64, 256, 512);
        let data = vec![7u8; 40];
        assert_eq!(cdc.cut_point(&data), 40);
    }

    #[test]
    fn test_cut_never_exceeds_max() {
        let cdc = UltraCdc::new(64, 256, 512);
        let data: Vec<u8> = (0..4096).map(|i| (i * 13 % 251) as u8).collect();
        let mut offset = 0;
        while offset < data.len() {
            let cut = cdc.cut_point(&data[offset..]);
            assert!(cut > 0);
            assert!(cut <= 512);
            offset += cut;
        }
        assert_eq!(offset, data.len());
    }

    #[test]
    fn test_low_entropy_forces_cut() {
        let cdc = UltraCdc::new(64, 256, 4096);
        // Identical windows skip the mask check entirely, so only the
        // low-entropy rule can cut before max_size.
        let data = vec![0x33u8; 4096];
        let cut = cdc.cut_point(&data);
        assert!(cut < 4096);
    }

    #[test]
    fn test_deterministic() {
        let cdc = UltraCdc::new(64, 256, 512);
        let data: Vec<u8> = (0..8192).map(|i| (i * 31 % 257) as u8).collect();
        assert_eq!(cdc.cut_point(&data), cdc.cut_point(&data));
    }
}
