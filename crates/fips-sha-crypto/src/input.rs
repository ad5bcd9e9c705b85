//! Conversion of caller-side sequence elements into message bytes.
//!
//! Lets the engine hash vectors, slices, fixed arrays, lists and text without
//! a separate code path per container: every element becomes one `u8` and the
//! sequence is materialized into an owned buffer before padding.

#![forbid(unsafe_code)]

/// An element convertible to exactly one message byte.
pub trait ToByte {
    fn to_byte(&self) -> u8;
}

impl ToByte for u8 {
    #[inline]
    fn to_byte(&self) -> u8 {
        *self
    }
}

/// Two's-complement reinterpretation (`-1` hashes as `0xff`).
impl ToByte for i8 {
    #[inline]
    fn to_byte(&self) -> u8 {
        *self as u8
    }
}

/// Low 8 bits of the scalar value. ASCII maps to itself; use `str::bytes`
/// to hash text by its UTF-8 encoding instead.
impl ToByte for char {
    #[inline]
    fn to_byte(&self) -> u8 {
        (*self as u32 & 0xff) as u8
    }
}

impl<T: ToByte + ?Sized> ToByte for &T {
    #[inline]
    fn to_byte(&self) -> u8 {
        (**self).to_byte()
    }
}

/// Materialize any sequence of byte-convertible elements into an owned buffer.
pub fn collect_bytes<I>(elements: I) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: ToByte,
{
    let iter = elements.into_iter();
    let mut out = Vec::with_capacity(iter.size_hint().0);
    out.extend(iter.map(|e| e.to_byte()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{LinkedList, VecDeque};

    #[test]
    fn test_unsigned_passthrough() {
        assert_eq!(collect_bytes([0u8, 1, 255]), vec![0, 1, 255]);
        assert_eq!(collect_bytes(&[7u8, 8]), vec![7, 8]);
    }

    #[test]
    fn test_signed_twos_complement() {
        assert_eq!(collect_bytes([-1i8, -128, 0, 127]), vec![0xff, 0x80, 0x00, 0x7f]);
    }

    #[test]
    fn test_chars_ascii() {
        assert_eq!(collect_bytes("abc".chars()), b"abc".to_vec());
    }

    #[test]
    fn test_chars_non_ascii_take_low_byte() {
        // U+00E9 -> 0xe9, U+20AC (euro) -> 0xac
        assert_eq!(collect_bytes(['\u{e9}', '\u{20ac}']), vec![0xe9, 0xac]);
    }

    #[test]
    fn test_containers() {
        let list: LinkedList<u8> = b"hello".iter().copied().collect();
        let deque: VecDeque<i8> = b"hello".iter().map(|&b| b as i8).collect();
        assert_eq!(collect_bytes(&list), b"hello".to_vec());
        assert_eq!(collect_bytes(deque), b"hello".to_vec());
    }
}
