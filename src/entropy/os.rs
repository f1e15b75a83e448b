//! Operating-system and `rand_core` backed sources.

use rand_core::{CryptoRng, RngCore};
use super::{EntropyError, EntropySource};

/// The platform CSPRNG (`getrandom`) via `rand_core::OsRng`.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

#[cfg(feature = "std")]
impl OsEntropy {
    pub fn new() -> Self {
        OsEntropy
    }
}

#[cfg(feature = "std")]
impl EntropySource for OsEntropy {
    fn name(&self) -> &'static str {
        "OsRng"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        rand_core::OsRng
            .try_fill_bytes(dest)
            .map_err(|_| EntropyError::Unavailable)
    }
}

/// Adapts any `rand_core` cryptographic generator into an [`EntropySource`].
///
/// The `CryptoRng` bound keeps non-cryptographic generators out of the splitter.
pub struct RngSource<R: RngCore + CryptoRng> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore + CryptoRng> EntropySource for RngSource<R> {
    fn name(&self) -> &'static str {
        "RngCore"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.rng
            .try_fill_bytes(dest)
            .map_err(|_| EntropyError::Unavailable)
    }
}
