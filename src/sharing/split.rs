//! Shamir splitting over GF(2^8).
//!
//! The secret is processed one byte at a time. For every byte a fresh random polynomial is
//! drawn with that byte as its intercept, and the polynomial is evaluated at each
//! participant's coordinate. Participant `i` ends up with the row
//! `[f_0(x[i]), f_1(x[i]), ..., f_{p-1}(x[i]), x[i]]`.
//!
//! Reusing one coordinate per participant across all bytes is fine as long as coordinates
//! differ between participants. Reusing coefficients across bytes is not: every byte gets
//! its own `threshold - 1` random bytes.
//!
//! The share length reveals the secret length. Callers who need to hide it should pad, or
//! split a key that encrypts the secret instead of the secret itself.
//!
//! # Security
//! - **Constant-Time**: evaluation uses the masked table arithmetic of `GF256`.
//! - **Zeroization**: coefficients are wiped after each byte; on failure the partial matrix is
//!   dropped (and wiped) before the error is returned.
//! - **Validation**: parameters are checked before any randomness is drawn.

use crate::core::gf256::GF256;
use crate::entropy::EntropySource;
use crate::sharing::{polynomial::Polynomial, share::ShareMatrix, SharingError};
use super::coordinates::pick_coordinates;

/// Splits `secret` into `n` shares, any `threshold` of which determine it.
///
/// Entropy use: the coordinate permutation first, then exactly `threshold - 1` bytes per
/// secret byte, in secret order. Nothing else is drawn.
///
/// # Returns
/// * `Ok(ShareMatrix)` with `n` rows of `secret.len() + 1` bytes.
/// * `Err(SharingError)` if `threshold > n`, the secret is empty, `threshold < 2`, or the
///   entropy source fails. No partial matrix is ever returned.
pub fn split_secret<R: EntropySource + ?Sized>(
    secret: &[u8],
    n: u8,
    threshold: u8,
    rng: &mut R,
) -> Result<ShareMatrix, SharingError> {
    if threshold > n {
        log::warn!("split rejected: threshold {} exceeds share count {}", threshold, n);
        return Err(SharingError::ThresholdExceedsShares);
    }
    if secret.is_empty() {
        log::warn!("split rejected: empty secret");
        return Err(SharingError::EmptySecret);
    }
    if threshold < 2 {
        log::warn!("split rejected: threshold {} is below 2", threshold);
        return Err(SharingError::ThresholdTooLow);
    }

    log::debug!(
        "splitting {}-byte secret into {} shares (threshold {}) using {}",
        secret.len(),
        n,
        threshold,
        rng.name()
    );

    let mut matrix = ShareMatrix::zeroed(n, secret.len());

    let coordinates = pick_coordinates(n, rng).map_err(|e| {
        log::error!("entropy source {} failed while picking coordinates", rng.name());
        SharingError::Entropy(e)
    })?;

    for (idx, &byte) in secret.iter().enumerate() {
        let polynomial = Polynomial::random(byte, threshold, rng).map_err(|e| {
            // The cause stays out of the log line on purpose.
            log::error!("entropy source {} failed while generating a polynomial", rng.name());
            SharingError::Entropy(e)
        })?;
        debug_assert_eq!(polynomial.len(), threshold as usize);

        for (row, &x) in matrix.rows_mut().iter_mut().zip(coordinates.iter()) {
            let GF256(y) = polynomial.evaluate(x);
            row.set_value(idx, y);
        }
    }

    for (row, &GF256(x)) in matrix.rows_mut().iter_mut().zip(coordinates.iter()) {
        row.set_coordinate(x);
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{CustomSource, EntropyError};
    use crate::sharing::share::Share;

    /// Mock entropy source for deterministic testing
    struct MockEntropy {
        fill_val: u8,
        consumed: usize,
    }

    impl MockEntropy {
        fn new(fill_val: u8) -> Self {
            Self { fill_val, consumed: 0 }
        }
    }

    impl EntropySource for MockEntropy {
        fn name(&self) -> &'static str { "Mock" }
        fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
            for b in dest.iter_mut() {
                *b = self.fill_val;
                self.fill_val = self.fill_val.wrapping_add(1);
            }
            self.consumed += dest.len();
            Ok(())
        }
    }

    /// Source that fails after handing out `budget` bytes.
    struct FailingEntropy {
        budget: usize,
    }

    impl EntropySource for FailingEntropy {
        fn name(&self) -> &'static str { "Failing" }
        fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
            if dest.len() > self.budget {
                return Err(EntropyError::Unavailable);
            }
            self.budget -= dest.len();
            dest.fill(0);
            Ok(())
        }
    }

    /// Lagrange interpolation at x = 0 over the given rows.
    fn interpolate(shares: &[&Share]) -> Vec<u8> {
        let len = shares[0].values().len();
        let mut secret = vec![0u8; len];
        for (j, sj) in shares.iter().enumerate() {
            let xj = GF256(sj.coordinate());
            let mut basis = GF256::ONE;
            for (m, sm) in shares.iter().enumerate() {
                if m != j {
                    let xm = GF256(sm.coordinate());
                    basis *= xm / (xm - xj);
                }
            }
            for (p, out) in secret.iter_mut().enumerate() {
                *out = (GF256(*out) + GF256(sj.values()[p]) * basis).0;
            }
        }
        secret
    }

    #[test]
    fn test_split_shape() {
        let mut rng = MockEntropy::new(0x10);
        let secret = b"correct horse battery staple";
        let matrix = split_secret(secret, 5, 3, &mut rng).expect("Split failed");

        assert_eq!(matrix.len(), 5);
        assert_eq!(matrix.secret_len(), secret.len());
        for share in matrix.shares() {
            assert_eq!(share.as_bytes().len(), secret.len() + 1);
        }
        let mut xs: Vec<u8> = matrix.coordinates().collect();
        xs.sort_unstable();
        assert_eq!(xs, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_single_byte_scenario() {
        // Permutation bytes 00 00 give coordinates [1, 2, 0]; the single coefficient is 0x07.
        let mut rng = CustomSource::new();
        rng.add_bytes(&[0x00, 0x00, 0x07]);
        let matrix = split_secret(&[0x2A], 3, 2, &mut rng).unwrap();
        assert_eq!(rng.remaining(), 0);

        let rows: Vec<&[u8]> = matrix.shares().iter().map(Share::as_bytes).collect();
        // f(x) = 0x2A + 0x07 x
        assert_eq!(rows, vec![&[0x2D, 0x01][..], &[0x24, 0x02][..], &[0x2A, 0x00][..]]);

        let at_zero = matrix.shares().iter().find(|s| s.coordinate() == 0).unwrap();
        assert_eq!(at_zero.values(), &[0x2A]);
    }

    #[test]
    fn test_intercept_at_zero_for_any_stream() {
        let secret = [0x2A];
        for seed in 0u8..=255 {
            let mut rng = MockEntropy::new(seed);
            let matrix = split_secret(&secret, 3, 2, &mut rng).unwrap();
            let at_zero = matrix.shares().iter().find(|s| s.coordinate() == 0).unwrap();
            assert_eq!(at_zero.values(), &[0x2A]);
        }
    }

    #[test]
    fn test_deterministic_with_injected_entropy() {
        let secret = [0xDE, 0xAD, 0xBE, 0xEF, 0x00];
        let a = split_secret(&secret, 7, 4, &mut MockEntropy::new(0x42)).unwrap();
        let b = split_secret(&secret, 7, 4, &mut MockEntropy::new(0x42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_consumes_exact_entropy() {
        // n = 2: the permutation draws one byte (bound 2 never rejects),
        // then (k - 1) * p coefficient bytes.
        let secret = [1, 2, 3, 4];
        let mut rng = MockEntropy::new(0);
        split_secret(&secret, 2, 2, &mut rng).unwrap();
        assert_eq!(rng.consumed, 1 + secret.len());

        // Same budget from a finite pool leaves nothing behind.
        let mut pool = CustomSource::new();
        pool.add_bytes(&[0x00; 5]);
        split_secret(&secret, 2, 2, &mut pool).unwrap();
        assert_eq!(pool.remaining(), 0);
    }

    #[test]
    fn test_any_threshold_subset_recovers() {
        let secret = b"\x00\x01\x7f\x80\xfe\xff shamir";
        let matrix = split_secret(secret, 5, 3, &mut MockEntropy::new(0xA5)).unwrap();
        let rows = matrix.shares();
        for a in 0..5 {
            for b in (a + 1)..5 {
                for c in (b + 1)..5 {
                    let recovered = interpolate(&[&rows[a], &rows[b], &rows[c]]);
                    assert_eq!(&recovered[..], &secret[..], "rows {} {} {}", a, b, c);
                }
            }
        }
        // All five rows still lie on the same polynomials.
        let all: Vec<&Share> = rows.iter().collect();
        assert_eq!(&interpolate(&all)[..], &secret[..]);
    }

    #[test]
    fn test_below_threshold_does_not_recover() {
        // With two of three required rows, interpolation lands on a degree-1 fit
        // that disagrees with the secret for this stream.
        let secret = [0x2A; 8];
        let matrix = split_secret(&secret, 5, 3, &mut MockEntropy::new(0x01)).unwrap();
        let rows = matrix.shares();
        let nonzero: Vec<&Share> = rows.iter().filter(|s| s.coordinate() != 0).take(2).collect();
        assert_ne!(interpolate(&nonzero), secret.to_vec());
    }

    #[test]
    fn test_max_shares() {
        let mut rng = MockEntropy::new(0x00);
        let matrix = split_secret(&[0x99, 0x11], 255, 255, &mut rng).unwrap();
        assert_eq!(matrix.len(), 255);
        let mut seen = [false; 256];
        for x in matrix.coordinates() {
            assert!(x < 255);
            assert!(!seen[x as usize]);
            seen[x as usize] = true;
        }
    }

    #[test]
    fn test_invalid_params() {
        let mut rng = MockEntropy::new(0);
        let secret = vec![1, 2, 3];

        assert_eq!(split_secret(&secret, 3, 5, &mut rng), Err(SharingError::ThresholdExceedsShares));
        assert_eq!(split_secret(&secret, 5, 1, &mut rng), Err(SharingError::ThresholdTooLow));
        assert_eq!(split_secret(&secret, 5, 0, &mut rng), Err(SharingError::ThresholdTooLow));
        assert_eq!(split_secret(&[], 3, 2, &mut rng), Err(SharingError::EmptySecret));
        // Validation order: k > n before empty secret, empty secret before k < 2.
        assert_eq!(split_secret(&[], 2, 3, &mut rng), Err(SharingError::ThresholdExceedsShares));
        assert_eq!(split_secret(&[], 3, 1, &mut rng), Err(SharingError::EmptySecret));
        // Nothing was drawn for rejected calls.
        assert_eq!(rng.consumed, 0);
    }

    #[test]
    fn test_entropy_failure_is_total() {
        // Fails while picking coordinates.
        let mut rng = FailingEntropy { budget: 0 };
        assert_eq!(
            split_secret(&[1, 2, 3], 3, 2, &mut rng),
            Err(SharingError::Entropy(EntropyError::Unavailable))
        );

        // Fails after the permutation and the first byte's coefficients.
        let mut rng = FailingEntropy { budget: 2 + 1 };
        assert_eq!(
            split_secret(&[1, 2, 3], 3, 2, &mut rng),
            Err(SharingError::Entropy(EntropyError::Unavailable))
        );
    }
}
