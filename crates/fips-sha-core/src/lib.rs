//! Core types for fips-sha: error type, digest value, hex encoding.

#![forbid(unsafe_code)]

mod error;

pub mod digest;
pub mod hex;

pub use digest::{Digest, DIGEST_LEN};
pub use error::Error;
pub use hex::{decode_hex, to_hex_string};

pub type Result<T> = std::result::Result<T, Error>;
