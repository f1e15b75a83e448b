//! GF(2^8) arithmetic module.
//!
//! Finite field arithmetic over GF(2^8) with the irreducible polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B). Multiplication and division go through discrete
//! log/exp tables for the generator 0xE5, which are built at compile time and never change.
//!
//! # Design Choices
//! - **Tables as constants**: `LOG` and `EXP` are `const` arrays computed by `const fn`; no
//!   lazy initialization and no lifecycle beyond program startup.
//! - **Branch-free zero handling**: `log[0]` has no meaning, so a zero operand is masked out of
//!   the result with `ct::ct_is_zero` instead of an `if`.
//! - **Masked modular reduction**: log sums and differences are folded into 0..255 by
//!   `ct::wrap_order`, so an underflow is not observable through timing.
//! - **Division by zero panics**: it is a caller bug, never a secret-dependent condition.
//!   `checked_div` is available for callers that prefer an `Option`.
//!
//! # Usage
//! ```
//! use gf256_sss::core::gf256::GF256;
//!
//! let a = GF256(0x57);
//! let b = GF256(0x83);
//! assert_eq!(a * b, GF256(0xC1));
//! assert_eq!((a * b) / b, a);
//! assert_eq!(a + a, GF256::ZERO);
//! ```

#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub};
use zeroize::Zeroize;

use super::ct;

/// Full irreducible polynomial (x^8 + x^4 + x^3 + x + 1).
const POLY_FULL: u16 = 0x11B;

/// Generator of the multiplicative group used for the tables.
pub const GENERATOR: u8 = 0xE5;

/// Order of the multiplicative group.
const ORDER: usize = 255;

/// Bit-serial product, used only to build the tables at compile time.
const fn slow_mul(a: u8, b: u8) -> u8 {
    let mut aa = a as u16;
    let mut bb = b;
    let mut result: u16 = 0;
    while bb != 0 {
        if bb & 1 != 0 {
            result ^= aa;
        }
        aa <<= 1;
        if aa & 0x100 != 0 {
            aa ^= POLY_FULL;
        }
        bb >>= 1;
    }
    result as u8
}

const fn build_exp() -> [u8; 256] {
    let mut exp = [0u8; 256];
    let mut x: u8 = 1;
    let mut i = 0;
    while i < ORDER {
        exp[i] = x;
        x = slow_mul(x, GENERATOR);
        i += 1;
    }
    // g^255 = g^0
    exp[ORDER] = 1;
    exp
}

const fn build_log() -> [u8; 256] {
    let exp = build_exp();
    let mut log = [0u8; 256];
    let mut i = 0;
    while i < ORDER {
        log[exp[i] as usize] = i as u8;
        i += 1;
    }
    log
}

/// `EXP[i] = g^i`, with `EXP[255] = EXP[0] = 1`.
pub const EXP: [u8; 256] = build_exp();

/// `LOG[EXP[i]] = i` for `i` in 0..255. `LOG[0]` is 0 by convention and never used unmasked.
pub const LOG: [u8; 256] = build_log();

/// Field addition (and subtraction): XOR.
#[inline(always)]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Field multiplication: `EXP[(LOG[a] + LOG[b]) mod 255]`, forced to 0 when either operand is 0.
#[inline(always)]
pub fn mul(a: u8, b: u8) -> u8 {
    let log_sum = LOG[a as usize] as i32 + LOG[b as usize] as i32;
    let product = EXP[ct::wrap_order(log_sum)];
    let any_zero = ct::ct_is_zero(a) | ct::ct_is_zero(b);
    product & !ct::mask(any_zero)
}

/// Field division: `EXP[(LOG[a] - LOG[b]) mod 255]`, or 0 when `a` is 0.
///
/// # Panics
/// Panics if `b == 0`. This is the only branch on an operand and it guards a programming
/// error, not secret data.
#[inline(always)]
pub fn div(a: u8, b: u8) -> u8 {
    if b == 0 {
        panic!("GF(2^8) division by zero");
    }
    div_nonzero(a, b)
}

#[inline(always)]
fn div_nonzero(a: u8, b: u8) -> u8 {
    let log_diff = LOG[a as usize] as i32 - LOG[b as usize] as i32;
    let quotient = EXP[ct::wrap_order(log_diff)];
    quotient & !ct::mask(ct::ct_is_zero(a))
}

/// The finite field element type, wrapping a u8.
///
/// All 256 values are valid elements; 0 is the additive identity and 1 the multiplicative one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Zeroize)]
#[repr(transparent)]
pub struct GF256(pub u8);

impl GF256 {
    /// Additive identity.
    pub const ZERO: Self = GF256(0);
    /// Multiplicative identity.
    pub const ONE: Self = GF256(1);

    /// Returns `self / rhs`, or `None` when `rhs` is zero.
    #[inline(always)]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            None
        } else {
            Some(GF256(div_nonzero(self.0, rhs.0)))
        }
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    /// Panics for zero, which has no inverse.
    #[inline(always)]
    pub fn inv(self) -> Self {
        Self::ONE / self
    }
}

impl From<u8> for GF256 {
    #[inline(always)]
    fn from(value: u8) -> Self {
        GF256(value)
    }
}

impl From<GF256> for u8 {
    #[inline(always)]
    fn from(gf: GF256) -> u8 {
        gf.0
    }
}

impl Add for GF256 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        GF256(add(self.0, rhs.0))
    }
}

impl AddAssign for GF256 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Subtraction is addition in characteristic 2.
impl Sub for GF256 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        GF256(add(self.0, rhs.0))
    }
}

impl Mul for GF256 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        GF256(mul(self.0, rhs.0))
    }
}

impl MulAssign for GF256 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for GF256 {
    type Output = Self;

    /// # Panics
    /// Panics if `rhs` is zero.
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        GF256(div(self.0, rhs.0))
    }
}
