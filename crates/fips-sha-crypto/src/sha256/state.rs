//! The running hash accumulator (H⁽ⁱ⁾ in FIPS 180-4).

use super::constants::H0;
use fips_sha_core::{Digest, DIGEST_LEN};

/// Eight 32-bit words, reset to `H0` at the start of every computation and
/// mutated once per compressed block.
#[derive(Debug, PartialEq, Eq)]
pub struct DigestState {
    words: [u32; 8],
}

impl DigestState {
    /// A state loaded with the FIPS 180-4 initial hash values.
    pub fn new() -> Self {
        Self { words: H0 }
    }

    /// Reset to the initial hash values.
    pub fn initialize(&mut self) {
        self.words = H0;
    }

    /// Add the post-round working variables back into the state, modulo 2³².
    pub fn add_block(&mut self, delta: [u32; 8]) {
        for (word, d) in self.words.iter_mut().zip(delta) {
            *word = word.wrapping_add(d);
        }
    }

    pub fn words(&self) -> &[u32; 8] {
        &self.words
    }

    /// Serialize each word big-endian, in order.
    pub fn finalize(&self) -> Digest {
        let mut out = [0u8; DIGEST_LEN];
        for (i, word) in self.words.iter().enumerate() {
            out[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
        }
        Digest::new(out)
    }
}

impl Default for DigestState {
    fn default() -> Self {
        Self::new()
    }
}
