//! Bitwise functions of FIPS 180-4 Section 4.1.2.

/// Rotate a 32-bit word right by `shift` bits.
///
/// The shift is normalized into `[0, 31]` first, so negative or oversized
/// amounts wrap instead of panicking.
#[inline(always)]
pub fn rotr(value: u32, shift: i32) -> u32 {
    let shift = shift.rem_euclid(32) as u32;
    value.rotate_right(shift)
}

/// σ₀, message schedule.
#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

/// σ₁, message schedule.
#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}

/// Σ₀, applied to working variable `a`.
#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// Σ₁, applied to working variable `e`.
#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}
