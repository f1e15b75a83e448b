//! Participant coordinate selection.

extern crate alloc;
use alloc::vec::Vec;
use crate::core::gf256::GF256;
use crate::entropy::{EntropyError, EntropySource};

/// Picks `n` distinct evaluation points, one per participant.
///
/// The points are a uniform random permutation of the field elements `0..n`, so participant
/// `i` gets `coordinates[i]` and no two participants share a point. Only the low `n`
/// elements are ever used, so 0 is always among them and the participant holding it
/// receives the polynomial intercepts.
pub(crate) fn pick_coordinates<R: EntropySource + ?Sized>(
    n: u8,
    rng: &mut R,
) -> Result<Vec<GF256>, EntropyError> {
    let permutation = rng.permutation(n)?;
    Ok(permutation.into_iter().map(GF256).collect())
}
