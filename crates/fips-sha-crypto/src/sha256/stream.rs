//! Incremental SHA-256 (init / update / final).
//!
//! Buffers at most one partial block, so arbitrarily long inputs (files,
//! stdin) can be hashed without holding the whole message in memory.

use super::compress::compress;
use super::constants::BLOCK_LEN;
use super::pad::pad_in_place;
use super::schedule::expand;
use super::state::DigestState;
use fips_sha_core::Digest;

/// Streaming hash context.
#[derive(Debug)]
pub struct Sha256Context {
    state: DigestState,
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    total_len: u64,
}

impl Sha256Context {
    pub fn new() -> Self {
        Self {
            state: DigestState::new(),
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            total_len: 0,
        }
    }

    /// Total bytes fed so far.
    pub fn bytes_processed(&self) -> u64 {
        self.total_len
    }

    /// Absorb more message bytes. Any chunking yields the same digest.
    pub fn update(&mut self, mut data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        // Top up a partially filled block first
        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }
            let block = self.buffer;
            self.process(&block);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for chunk in &mut blocks {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            self.process(&block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Pad the buffered tail, compress it and emit the digest.
    pub fn finalize(mut self) -> Digest {
        let mut tail = Vec::with_capacity(2 * BLOCK_LEN);
        tail.extend_from_slice(&self.buffer[..self.buffered]);
        pad_in_place(&mut tail, self.total_len);

        for chunk in tail.chunks_exact(BLOCK_LEN) {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            self.process(&block);
        }

        self.state.finalize()
    }

    fn process(&mut self, block: &[u8; BLOCK_LEN]) {
        let words = expand(block);
        compress(&mut self.state, &words);
    }
}

impl Default for Sha256Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha256::hash;

    #[test]
    fn test_empty() {
        assert_eq!(Sha256Context::new().finalize(), hash(b""));
    }

    #[test]
    fn test_every_split_point_matches_one_shot() {
        let message: Vec<u8> = (0..200u32).map(|i| (i * 31 % 251) as u8).collect();
        let expected = hash(&message);
        for split in 0..=message.len() {
            let mut ctx = Sha256Context::new();
            ctx.update(&message[..split]);
            ctx.update(&message[split..]);
            assert_eq!(ctx.finalize(), expected, "split at {}", split);
        }
    }

    #[test]
    fn test_byte_at_a_time() {
        let message = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        let mut ctx = Sha256Context::new();
        for b in message.iter() {
            ctx.update(std::slice::from_ref(b));
        }
        assert_eq!(ctx.bytes_processed(), message.len() as u64);
        assert_eq!(
            ctx.finalize().to_hex(),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    #[test]
    fn test_empty_updates_are_noops() {
        let mut ctx = Sha256Context::new();
        ctx.update(b"");
        ctx.update(b"abc");
        ctx.update(b"");
        assert_eq!(ctx.finalize(), hash(b"abc"));
    }
}
