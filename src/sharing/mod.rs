//! Splitting engine: Shamir's Secret Sharing over GF(256).
//!
//! # Components
//! - `split`: the split algorithm and its validation.
//! - `share`: share rows and the share matrix.
//! - `polynomial`: per-byte random polynomials and Horner evaluation.
//! - `coordinates`: distinct participant evaluation points.
//!
//! # Security
//! - **Constant-Time**: All GF(256) operations on secret data are branch-free.
//! - **Zeroization**: Coefficients and share rows are zeroized on drop.
//! - **Fail-Closed**: Errors abort the whole split; no partial matrix is returned.
//!
//! Recovery (Lagrange interpolation at x = 0) is not part of this crate.

pub mod share;
pub mod split;
pub(crate) mod coordinates;
pub(crate) mod polynomial;

use core::fmt;
use crate::config::SharingConfig;
use crate::entropy::{EntropyError, EntropySource};

pub use share::{Share, ShareMatrix};
pub use split::split_secret;

/// Errors for sharing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharingError {
    /// Threshold is greater than the number of shares to deal.
    ThresholdExceedsShares,
    /// The secret is empty.
    EmptySecret,
    /// Threshold is below 2.
    ThresholdTooLow,
    /// A share row is too short to hold a value and a coordinate.
    InvalidShare,
    /// The entropy source failed; the split was abandoned.
    Entropy(EntropyError),
}

impl fmt::Display for SharingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SharingError::ThresholdExceedsShares => {
                write!(f, "Threshold cannot be greater than the number of shares")
            }
            SharingError::EmptySecret => write!(f, "Secret cannot be empty"),
            SharingError::ThresholdTooLow => write!(f, "Threshold must be at least 2"),
            SharingError::InvalidShare => write!(f, "Share row is malformed"),
            SharingError::Entropy(e) => write!(f, "Failed to generate randomness: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SharingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SharingError::Entropy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EntropyError> for SharingError {
    fn from(e: EntropyError) -> Self {
        SharingError::Entropy(e)
    }
}

/// Trait for Secret Sharing Schemes.
///
/// Abstract interface to support other fields or share layouts.
pub trait SecretSharingScheme {
    type Output;
    type Error;

    /// Splits a secret according to the scheme's configured parameters.
    fn split<R: EntropySource + ?Sized>(
        &self,
        secret: &[u8],
        rng: &mut R,
    ) -> Result<Self::Output, Self::Error>;
}

/// Shamir's Secret Sharing over GF(256) with fixed (threshold, shares) parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShamirGF256 {
    config: SharingConfig,
}

impl ShamirGF256 {
    /// Creates a scheme after validating `config`.
    pub fn with_config(config: SharingConfig) -> Result<Self, SharingError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SharingConfig {
        &self.config
    }
}

impl SecretSharingScheme for ShamirGF256 {
    type Output = ShareMatrix;
    type Error = SharingError;

    fn split<R: EntropySource + ?Sized>(
        &self,
        secret: &[u8],
        rng: &mut R,
    ) -> Result<Self::Output, Self::Error> {
        split_secret(secret, self.config.shares, self.config.threshold, rng)
    }
}
