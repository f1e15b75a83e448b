//! Configuration for the splitting engine.
//!
//! Defines the caller-tunable sharing parameters.

use crate::sharing::SharingError;

/// Sharing parameters for a (threshold, shares) Shamir scheme.
///
/// This struct should be populated by the host application and passed to
/// [`ShamirGF256::with_config`](crate::sharing::ShamirGF256::with_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharingConfig {
    /// Number of shares to deal (n). One per participant, at most 255.
    pub shares: u8,

    /// Minimum number of shares needed to recover the secret (k). `2 <= k <= n`.
    pub threshold: u8,
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            shares: 5,
            threshold: 3,
        }
    }
}

impl SharingConfig {
    /// Creates a validated configuration.
    pub fn new(shares: u8, threshold: u8) -> Result<Self, SharingError> {
        let config = Self { shares, threshold };
        config.validate()?;
        Ok(config)
    }

    /// Checks the threshold invariants, reporting the first violation in the order
    /// threshold > shares, then threshold < 2.
    pub fn validate(&self) -> Result<(), SharingError> {
        if self.threshold > self.shares {
            return Err(SharingError::ThresholdExceedsShares);
        }
        if self.threshold < 2 {
            return Err(SharingError::ThresholdTooLow);
        }
        Ok(())
    }
}
