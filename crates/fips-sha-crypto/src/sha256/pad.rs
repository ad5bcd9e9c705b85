//! Message padding (FIPS 180-4 Section 5.1.1).

use super::constants::BLOCK_LEN;

/// Offset inside the final block where the 64-bit length field starts
/// (448 bits).
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Length in bytes of the padded form of a `len`-byte message.
///
/// Always a multiple of 64 and at least `len + 9`.
pub fn padded_len(len: usize) -> usize {
    // 0x80 marker + 8 length bytes, rounded up to a whole block
    (len + 9).div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Pad a message into a fresh buffer; the caller's bytes are never touched.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(padded_len(message.len()));
    padded.extend_from_slice(message);
    pad_in_place(&mut padded, message.len() as u64);
    padded
}

/// Append padding to an owned buffer holding a message of `original_len`
/// bytes.
pub(crate) fn pad_in_place(buf: &mut Vec<u8>, original_len: u64) {
    let bit_len = original_len.wrapping_mul(8);

    // Append bit '1' (0x80 byte)
    buf.push(0x80);

    // Append zeros until length ≡ 448 (mod 512), i.e., 56 bytes (mod 64)
    let rem = buf.len() % BLOCK_LEN;
    let zeros = if rem <= LENGTH_OFFSET {
        LENGTH_OFFSET - rem
    } else {
        BLOCK_LEN + LENGTH_OFFSET - rem
    };
    buf.resize(buf.len() + zeros, 0x00);

    // Append 64-bit big-endian length
    buf.extend_from_slice(&bit_len.to_be_bytes());
}
