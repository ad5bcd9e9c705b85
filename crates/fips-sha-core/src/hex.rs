//! Lowercase hexadecimal encoding.

#![forbid(unsafe_code)]

use crate::{Error, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Format bytes as lowercase hex, two characters per byte, no separators.
pub fn to_hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decode hex text (either case) into bytes.
///
/// Characters are validated before the length, so a non-hex character is
/// reported even when the text also has an odd number of characters.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let mut nibbles = Vec::with_capacity(text.len());
    for (index, ch) in text.chars().enumerate() {
        let nibble = ch
            .to_digit(16)
            .ok_or(Error::InvalidHexChar { ch, index })? as u8;
        nibbles.push(nibble);
    }

    if nibbles.len() % 2 != 0 {
        return Err(Error::InvalidHexLength { got: nibbles.len() });
    }

    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}
