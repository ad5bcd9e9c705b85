//! SHA-256 engine facade and its per-computation state machine.
//!
//! ```text
//! Created -> Initialized -> (Compressing)* -> Finalized
//! ```
//!
//! `Finalized` is terminal. Calling [`Sha256::encrypt`] again returns the
//! digest already produced; loading another message fails with
//! [`Error::EngineFinalized`] until [`Sha256::reset`] is called.

use super::compress::compress;
use super::constants::BLOCK_LEN;
use super::pad::pad;
use super::schedule::expand;
use super::state::DigestState;
use crate::algorithm::HashAlgorithm;
use crate::input::{collect_bytes, ToByte};
use fips_sha_core::{Digest, Error, Result, DIGEST_LEN};

/// Where an engine is in its computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Holding a message, nothing computed yet.
    Created,
    /// Digest state loaded with the initial hash values.
    Initialized,
    /// At least one block folded into the state.
    Compressing,
    /// Digest produced; terminal until `reset()`.
    Finalized,
}

impl Phase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Initialized => "initialized",
            Self::Compressing => "compressing",
            Self::Finalized => "finalized",
        }
    }
}

/// One SHA-256 computation with a single owner.
///
/// The engine keeps a private copy of the message; the caller's buffer is
/// never padded or otherwise written. Not `Clone`: one computation, one owner.
#[derive(Debug)]
pub struct Sha256 {
    state: DigestState,
    message: Vec<u8>,
    phase: Phase,
    digest: Option<Digest>,
}

impl Sha256 {
    /// An engine holding the empty message.
    pub fn new() -> Self {
        Self {
            state: DigestState::new(),
            message: Vec::new(),
            phase: Phase::Created,
            digest: None,
        }
    }

    /// An engine holding an owned copy of `message`.
    pub fn with_message(message: impl Into<Vec<u8>>) -> Self {
        let mut engine = Self::new();
        engine.message = message.into();
        engine
    }

    /// An engine holding the bytes of any byte-convertible sequence.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToByte,
    {
        Self::with_message(collect_bytes(elements))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The digest, once finalized.
    pub fn digest(&self) -> Option<Digest> {
        self.digest
    }

    /// Length of the held (unpadded) message.
    pub fn message_len(&self) -> usize {
        self.message.len()
    }

    /// Replace the held message. Fails once the engine is finalized.
    pub fn load(&mut self, message: &[u8]) -> Result<()> {
        self.ensure_not_finalized()?;
        self.message.clear();
        self.message.extend_from_slice(message);
        self.phase = Phase::Created;
        Ok(())
    }

    /// Replace the held message with the bytes of `elements`.
    pub fn load_elements<I>(&mut self, elements: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: ToByte,
    {
        self.ensure_not_finalized()?;
        self.message = collect_bytes(elements);
        self.phase = Phase::Created;
        Ok(())
    }

    /// Hash the held message.
    ///
    /// Runs initialize, pad, expand + compress per block, finalize. On a
    /// finalized engine this returns the existing digest without recomputing.
    pub fn encrypt(&mut self) -> Digest {
        if let Some(digest) = self.digest {
            return digest;
        }

        self.state.initialize();
        self.phase = Phase::Initialized;

        let padded = pad(&self.message);
        self.compress_blocks(&padded);

        let digest = self.state.finalize();
        self.digest = Some(digest);
        self.phase = Phase::Finalized;
        digest
    }

    /// Load `elements` and hash them in one call.
    pub fn encrypt_elements<I>(&mut self, elements: I) -> Result<Digest>
    where
        I: IntoIterator,
        I::Item: ToByte,
    {
        self.load_elements(elements)?;
        Ok(self.encrypt())
    }

    /// Return to `Created` with an empty message.
    pub fn reset(&mut self) {
        self.state.initialize();
        self.message.clear();
        self.digest = None;
        self.phase = Phase::Created;
    }

    fn ensure_not_finalized(&self) -> Result<()> {
        if self.phase == Phase::Finalized {
            return Err(Error::EngineFinalized);
        }
        Ok(())
    }

    /// Guard for the step-wise path: `Finalized` only leaves through `reset`,
    /// every other step must be in one of `allowed`.
    fn require_phase(&self, step: &'static str, allowed: &[Phase]) -> Result<()> {
        self.ensure_not_finalized()?;
        if !allowed.contains(&self.phase) {
            return Err(Error::StepOutOfOrder {
                step,
                phase: self.phase.as_str(),
            });
        }
        Ok(())
    }

    fn compress_blocks(&mut self, blocks: &[u8]) {
        debug_assert_eq!(blocks.len() % BLOCK_LEN, 0);
        for chunk in blocks.chunks_exact(BLOCK_LEN) {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            let words = expand(&block);
            compress(&mut self.state, &words);
            self.phase = Phase::Compressing;
        }
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

/// Step-wise access for the shared pipeline.
///
/// `pad` records the message it is given, so the held message always matches
/// the digest `encrypt` reports afterwards.
impl HashAlgorithm for Sha256 {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn block_size(&self) -> usize {
        BLOCK_LEN
    }

    fn output_size(&self) -> usize {
        DIGEST_LEN
    }

    fn initialize(&mut self) -> Result<()> {
        self.ensure_not_finalized()?;
        self.state.initialize();
        self.phase = Phase::Initialized;
        Ok(())
    }

    fn pad(&mut self, message: &[u8]) -> Result<Vec<u8>> {
        self.require_phase("pad", &[Phase::Initialized])?;
        self.message.clear();
        self.message.extend_from_slice(message);
        Ok(pad(message))
    }

    fn compress(&mut self, blocks: &[u8]) -> Result<()> {
        self.require_phase("compress", &[Phase::Initialized, Phase::Compressing])?;
        if blocks.len() % BLOCK_LEN != 0 {
            return Err(Error::PartialBlock {
                len: blocks.len(),
                block_size: BLOCK_LEN,
            });
        }
        self.compress_blocks(blocks);
        Ok(())
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        self.require_phase("finalize", &[Phase::Compressing])?;
        let digest = self.state.finalize();
        self.digest = Some(digest);
        self.phase = Phase::Finalized;
        Ok(digest.as_bytes().to_vec())
    }

    fn reset(&mut self) {
        Sha256::reset(self);
    }
}
