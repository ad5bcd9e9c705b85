//! SHA-256 implementation (FIPS 180-4).
//!
//! Pipeline per computation: initialize the digest state, pad an owned copy
//! of the message to a multiple of 64 bytes, expand and compress each block,
//! serialize the state big-endian.

#![forbid(unsafe_code)]

pub mod compress;
pub mod constants;
pub mod engine;
pub mod ops;
pub mod pad;
pub mod schedule;
pub mod state;
pub mod stream;
pub mod vectors;

pub use engine::{Phase, Sha256};
pub use stream::Sha256Context;
pub use vectors::self_test;

use crate::input::ToByte;
use fips_sha_core::Digest;

/// Compute SHA-256 digest of input data.
pub fn digest(data: &[u8]) -> [u8; 32] {
    hash(data).into_bytes()
}

/// One-shot hash of a byte slice.
pub fn hash(data: &[u8]) -> Digest {
    Sha256::with_message(data).encrypt()
}

/// One-shot hash of any sequence of byte-convertible elements.
pub fn hash_elements<I>(elements: I) -> Digest
where
    I: IntoIterator,
    I::Item: ToByte,
{
    Sha256::from_elements(elements).encrypt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fips_sha_core::to_hex_string;

    #[test]
    fn test_empty() {
        // FIPS 180-4 example: SHA-256("")
        let result = digest(b"");
        assert_eq!(
            to_hex_string(&result),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_abc() {
        // FIPS 180-4 example: SHA-256("abc")
        let result = digest(b"abc");
        assert_eq!(
            to_hex_string(&result),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_448_bits() {
        // FIPS 180-4 example: 448-bit message (56 bytes)
        let result = digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq");
        assert_eq!(
            to_hex_string(&result),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    #[test]
    fn test_million_a() {
        let data = vec![b'a'; 1_000_000];
        assert_eq!(
            hash(&data).to_hex(),
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
        );
    }

    #[test]
    fn test_against_sha2_crate() {
        use sha2::{Digest as _, Sha256 as RefSha256};

        let test_cases = [
            b"".as_slice(),
            b"hello world",
            b"The quick brown fox jumps over the lazy dog",
            &[0u8; 55],  // largest single-block message
            &[0u8; 56],  // length field spills into a second block
            &[0u8; 64],  // exactly one block
            &[0u8; 65],  // just over one block
            &[0u8; 128], // exactly two blocks
        ];

        for data in test_cases {
            let our_result = digest(data);
            let ref_result: [u8; 32] = RefSha256::digest(data).into();
            assert_eq!(our_result, ref_result, "mismatch for input len {}", data.len());
        }
    }

    #[test]
    fn test_elements_equivalence() {
        let expected = hash(b"hello");
        assert_eq!(hash_elements(b"hello".to_vec()), expected);
        assert_eq!(hash_elements(*b"hello"), expected);
        assert_eq!(hash_elements("hello".chars()), expected);
        assert_eq!(hash_elements("hello".bytes()), expected);
    }
}
