//! Field engine: constant-time GF(2^8) arithmetic.

pub mod ct;
pub mod gf256;
