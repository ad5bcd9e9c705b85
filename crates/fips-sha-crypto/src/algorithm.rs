//! Pluggable hash algorithms sharing one pipeline shape.
//!
//! Every Merkle-Damgard style digest here runs the same four steps:
//! initialize, pad, compress each block, finalize. [`HashAlgorithm`] is the
//! capability interface for those steps and [`Algorithm`] is the factory
//! selecting a concrete implementation by name.
//!
//! Steps must be driven in order. Calling one out of order, or compressing
//! a trailing partial block, is an error rather than a silently wrong digest.

#![forbid(unsafe_code)]

use crate::sha256::Sha256;
use fips_sha_core::Error;
use std::fmt;
use std::str::FromStr;
use thiserror::Error as ThisError;

/// Object-safe interface over one hash computation.
pub trait HashAlgorithm {
    /// Canonical algorithm name, e.g. `"sha256"`.
    fn name(&self) -> &'static str;

    /// Compression block size in bytes.
    fn block_size(&self) -> usize;

    /// Digest size in bytes.
    fn output_size(&self) -> usize;

    /// Load the algorithm's initial values. Fails on a finalized engine.
    fn initialize(&mut self) -> Result<(), Error>;

    /// Record `message` as the engine's input and return a padded copy whose
    /// length is a multiple of `block_size()`. Requires `initialize` first.
    fn pad(&mut self, message: &[u8]) -> Result<Vec<u8>, Error>;

    /// Fold whole blocks into the running state.
    fn compress(&mut self, blocks: &[u8]) -> Result<(), Error>;

    /// Serialize the running state into the digest. Requires at least one
    /// compressed block.
    fn finalize(&mut self) -> Result<Vec<u8>, Error>;

    /// Discard all state so the engine can run again.
    fn reset(&mut self);

    /// Initialize, pad, compress block by block, finalize.
    fn run(&mut self, message: &[u8]) -> Result<Vec<u8>, Error> {
        self.initialize()?;
        let padded = self.pad(message)?;
        for block in padded.chunks_exact(self.block_size()) {
            self.compress(block)?;
        }
        self.finalize()
    }
}

/// Supported algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Sha256,
}

impl Algorithm {
    /// All algorithms known to the factory.
    pub const ALL: &'static [Algorithm] = &[Algorithm::Sha256];

    /// Create a fresh engine for this algorithm.
    pub fn create(self) -> Box<dyn HashAlgorithm + Send> {
        match self {
            Self::Sha256 => Box::new(Sha256::new()),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }

    pub const fn output_size(self) -> usize {
        match self {
            Self::Sha256 => 32,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("unknown algorithm '{0}' (supported: sha256)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" | "sha2-256" => Ok(Self::Sha256),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("sha256".parse::<Algorithm>().unwrap(), Algorithm::Sha256);
        assert_eq!("SHA-256".parse::<Algorithm>().unwrap(), Algorithm::Sha256);
        assert!("md5".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.to_string().parse::<Algorithm>().unwrap(), *alg);
        }
    }

    #[test]
    fn test_parse_error_message() {
        let err = "md5".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, UnknownAlgorithm("md5".to_string()));
        assert_eq!(err.to_string(), "unknown algorithm 'md5' (supported: sha256)");
    }

    #[test]
    fn test_factory_runs_pipeline() {
        let mut engine = Algorithm::Sha256.create();
        assert_eq!(engine.name(), "sha256");
        assert_eq!(engine.block_size(), 64);
        assert_eq!(engine.output_size(), Algorithm::Sha256.output_size());

        let out = engine.run(b"abc").unwrap();
        assert_eq!(
            hex::encode(&out),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_factory_engine_requires_reset_between_runs() {
        let mut engine = Algorithm::Sha256.create();
        let first = engine.run(b"").unwrap();
        assert_eq!(engine.run(b""), Err(Error::EngineFinalized));

        engine.reset();
        assert_eq!(engine.run(b"").unwrap(), first);
    }
}
