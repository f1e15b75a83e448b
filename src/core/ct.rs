#![forbid(unsafe_code)]
// Constant-time helpers for the GF(2^8) engine.
// - Every predicate returns 0 or 1 as a byte, never a `bool`, so callers blend with masks.
// - Inputs go through `black_box` so the optimizer cannot turn the masks back into branches.

use core::hint::black_box;

/// Returns 1 if `x == 0`, else 0, without branching on `x`.
#[inline(always)]
pub fn ct_is_zero(x: u8) -> u8 {
    let y = black_box(x) as u32;
    // Only x == 0 borrows out of the low byte.
    (y.wrapping_sub(1) >> 31) as u8
}

/// Returns 1 if `a == b`, else 0, without branching on either operand.
#[inline(always)]
pub fn ct_eq(a: u8, b: u8) -> u8 {
    ct_is_zero(a ^ b)
}

/// Expands a 0/1 bit into 0x00/0xFF.
#[inline(always)]
pub fn mask(bit: u8) -> u8 {
    0u8.wrapping_sub(black_box(bit) & 1)
}

/// Folds `v` in -255..=509 into 0..255, the exponent range of the multiplicative group.
///
/// Log sums (0..=508) are shifted down by 255 first; log differences (-254..=254) are not.
/// In both cases a negative intermediate gets 255 added back through a sign mask.
#[inline(always)]
pub fn wrap_order(v: i32) -> usize {
    let v = black_box(v);
    let over = ((254 - v) >> 31) & 255; // 255 when v > 254
    let r = v - over;
    let under = (r >> 31) & 255; // 255 when r < 0
    (r + under) as usize
}
