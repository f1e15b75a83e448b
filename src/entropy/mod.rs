//! Randomness providers for the splitting engine.
//!
//! The splitter never generates randomness itself. It asks an [`EntropySource`] for two
//! things: uniformly random bytes (polynomial coefficients) and a uniform permutation of
//! `0..n` (participant coordinates). Both are derived from `fill`, so a source that replays a
//! fixed byte stream makes a split fully deterministic.
//!
//! # Design
//! - **Fail-Closed**: a source that cannot deliver the full request returns an error; it never
//!   hands back a partially filled buffer as success.
//! - **Unbiased Permutation**: Fisher-Yates with rejection sampling, so no coordinate is more
//!   likely than another in any position.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;

pub mod custom;
pub mod os;

pub use custom::CustomSource;
#[cfg(feature = "std")]
pub use os::OsEntropy;
pub use os::RngSource;

/// Error types for randomness collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The underlying generator failed or is not available on this platform.
    Unavailable,
    /// The source is exhausted (e.g., fixed buffer).
    Exhausted,
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyError::Unavailable => write!(f, "Entropy source unavailable"),
            EntropyError::Exhausted => write!(f, "Entropy source exhausted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EntropyError {}

/// A trait for randomness providers.
pub trait EntropySource {
    /// Returns a unique identifier for the source, used in log messages.
    fn name(&self) -> &'static str;

    /// Fills `dest` with cryptographically secure uniform random bytes.
    ///
    /// # Returns
    /// * `Ok(())` when every byte of `dest` was written.
    /// * `Err(EntropyError)` if the source fails or cannot supply `dest.len()` bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Returns a uniform random permutation of `0..n`.
    ///
    /// Every value in `0..n` appears exactly once. Randomness is drawn one byte at a time
    /// through [`EntropySource::fill`].
    fn permutation(&mut self, n: u8) -> Result<Vec<u8>, EntropyError> {
        let mut perm: Vec<u8> = (0..n).collect();
        for i in (1..perm.len()).rev() {
            let j = uniform_below(self, (i + 1) as u16)?;
            perm.swap(i, j);
        }
        Ok(perm)
    }
}

/// Draws an index uniformly from `0..bound` (`1 <= bound <= 256`).
///
/// Bytes at or above the largest multiple of `bound` are rejected so the modulo is unbiased.
fn uniform_below<S: EntropySource + ?Sized>(source: &mut S, bound: u16) -> Result<usize, EntropyError> {
    let limit = 256 - (256 % bound);
    let mut byte = [0u8; 1];
    loop {
        source.fill(&mut byte)?;
        let b = byte[0] as u16;
        if b < limit {
            return Ok((b % bound) as usize);
        }
    }
}
