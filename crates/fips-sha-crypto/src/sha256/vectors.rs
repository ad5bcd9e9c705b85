//! Known-answer vectors and the startup self test.

use super::engine::Sha256;
use super::stream::Sha256Context;
use fips_sha_core::{Error, Result};

/// Message source for a known-answer vector.
#[derive(Clone, Copy, Debug)]
pub enum VectorInput {
    /// Literal bytes.
    Bytes(&'static [u8]),
    /// One byte repeated `count` times.
    Repeat { byte: u8, count: usize },
}

impl VectorInput {
    pub fn to_bytes(self) -> Vec<u8> {
        match self {
            Self::Bytes(b) => b.to_vec(),
            Self::Repeat { byte, count } => vec![byte; count],
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct KnownAnswer {
    pub name: &'static str,
    pub input: VectorInput,
    pub expected_hex: &'static str,
}

/// FIPS 180-4 / NIST CSRC example vectors.
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "empty",
        input: VectorInput::Bytes(b""),
        expected_hex: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    KnownAnswer {
        name: "abc",
        input: VectorInput::Bytes(b"abc"),
        expected_hex: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    KnownAnswer {
        name: "448-bit",
        input: VectorInput::Bytes(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        expected_hex: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    KnownAnswer {
        name: "896-bit",
        input: VectorInput::Bytes(
            b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
              ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        ),
        expected_hex: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
    KnownAnswer {
        name: "million-a",
        input: VectorInput::Repeat {
            byte: b'a',
            count: 1_000_000,
        },
        expected_hex: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    },
];

/// Check every known answer through the one-shot engine and the
/// incremental context.
pub fn self_test() -> Result<()> {
    for vector in KNOWN_ANSWERS {
        let message = vector.input.to_bytes();

        let one_shot = Sha256::with_message(message.as_slice()).encrypt();
        check(vector, &one_shot.to_hex())?;

        let mut ctx = Sha256Context::new();
        for chunk in message.chunks(1000) {
            ctx.update(chunk);
        }
        check(vector, &ctx.finalize().to_hex())?;
    }
    Ok(())
}

fn check(vector: &KnownAnswer, got: &str) -> Result<()> {
    if got != vector.expected_hex {
        return Err(Error::SelfTestFailed {
            name: vector.name,
            expected: vector.expected_hex.to_string(),
            got: got.to_string(),
        });
    }
    Ok(())
}
