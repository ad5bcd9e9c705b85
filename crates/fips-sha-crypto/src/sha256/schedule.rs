//! Message schedule (FIPS 180-4 Section 6.2.2, step 1).

use super::constants::{BLOCK_LEN, ROUNDS};
use super::ops::{small_sigma0, small_sigma1};

/// Expand one 64-byte block into the 64-word message schedule W[0..63].
pub fn expand(block: &[u8; BLOCK_LEN]) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];

    // First 16 words from block
    for (i, chunk) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    // Extend to 64 words
    for i in 16..ROUNDS {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }

    w
}
