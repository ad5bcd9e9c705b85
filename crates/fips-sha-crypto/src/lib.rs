//! SHA-256 for fips-sha.
//!
//! Implemented from scratch against FIPS 180-4. Reference crates (sha2) are
//! dev-dependencies only.

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod input;
pub mod sha256;

pub use algorithm::{Algorithm, HashAlgorithm, UnknownAlgorithm};
pub use input::ToByte;
pub use sha256::{digest, hash, hash_elements, Sha256, Sha256Context};
