//! Per-byte random polynomials.
//!
//! Each secret byte gets its own polynomial of degree `threshold - 1`:
//! `f(x) = c[0] + c[1]*x + ... + c[k-1]*x^(k-1)` with `c[0]` the secret byte and the rest
//! drawn fresh from the entropy source. The coefficients are wiped when it is dropped.

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroizing;
use crate::core::gf256::GF256;
use crate::entropy::{EntropyError, EntropySource};

pub(crate) struct Polynomial {
    coefficients: Zeroizing<Vec<GF256>>,
}

impl Polynomial {
    /// Builds `f` with `f(0) = intercept` and `threshold - 1` random higher coefficients.
    ///
    /// `threshold` must be at least 1. Exactly `threshold - 1` bytes are drawn from `rng`.
    pub(crate) fn random<R: EntropySource + ?Sized>(
        intercept: u8,
        threshold: u8,
        rng: &mut R,
    ) -> Result<Self, EntropyError> {
        let degree = threshold.saturating_sub(1) as usize;
        let mut random_buf = Zeroizing::new(alloc::vec![0u8; degree]);
        rng.fill(&mut random_buf)?;

        let mut coefficients: Zeroizing<Vec<GF256>> = Zeroizing::new(Vec::with_capacity(degree + 1));
        coefficients.push(GF256(intercept));
        coefficients.extend(random_buf.iter().map(|&c| GF256(c)));
        Ok(Self { coefficients })
    }

    #[cfg(test)]
    pub(crate) fn from_coefficients(coefficients: &[u8]) -> Self {
        Self {
            coefficients: Zeroizing::new(coefficients.iter().map(|&c| GF256(c)).collect()),
        }
    }

    /// Evaluates `f(x)` with Horner's method.
    ///
    /// `x = 0` returns the intercept directly. `x` is a public coordinate, so that branch
    /// reveals nothing about the coefficients.
    #[inline]
    pub(crate) fn evaluate(&self, x: GF256) -> GF256 {
        if x == GF256::ZERO {
            return self.coefficients[0];
        }
        let (highest, rest) = match self.coefficients.split_last() {
            Some(split) => split,
            None => return GF256::ZERO,
        };
        let mut value = *highest;
        for &coeff in rest.iter().rev() {
            value = coeff + value * x;
        }
        value
    }

    pub(crate) fn len(&self) -> usize {
        self.coefficients.len()
    }
}
