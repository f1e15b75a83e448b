//! Share matrix definition.
//!
//! A split produces one row per participant. Row `i` holds the participant's evaluation of
//! every per-byte polynomial, followed by the coordinate `x[i]` they were evaluated at:
//!
//! ```text
//! [ y[0], y[1], ..., y[p-1], x[i] ]
//! ```
//!
//! # Security
//! - Rows implement `Zeroize` and `ZeroizeOnDrop`.
//! - `Debug` prints the coordinate and length, never the share bytes.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};
use super::SharingError;

/// One participant's row of the share matrix.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Share {
    /// Share bytes followed by the coordinate; always at least 2 bytes long.
    bytes: Vec<u8>,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("coordinate", &self.coordinate())
            .field("length", &self.values().len())
            .field("values", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Allocates a zeroed row for a secret of `secret_len` bytes.
    pub(crate) fn zeroed(secret_len: usize) -> Self {
        Self { bytes: alloc::vec![0u8; secret_len + 1] }
    }

    /// Re-admits a row produced by a split (e.g. after transport).
    ///
    /// # Returns
    /// * `Err(SharingError::InvalidShare)` if the row cannot hold a value and a coordinate.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, SharingError> {
        if bytes.len() < 2 {
            return Err(SharingError::InvalidShare);
        }
        Ok(Self { bytes })
    }

    /// The evaluation coordinate (last column).
    pub fn coordinate(&self) -> u8 {
        self.bytes[self.bytes.len() - 1]
    }

    /// The per-byte share values (every column but the last).
    pub fn values(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    /// The full row, coordinate included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn set_value(&mut self, idx: usize, value: u8) {
        self.bytes[idx] = value;
    }

    pub(crate) fn set_coordinate(&mut self, x: u8) {
        let last = self.bytes.len() - 1;
        self.bytes[last] = x;
    }
}

/// The n x (p + 1) result of a split.
#[derive(Clone, PartialEq, Eq)]
pub struct ShareMatrix {
    rows: Vec<Share>,
    secret_len: usize,
}

impl fmt::Debug for ShareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareMatrix")
            .field("shares", &self.rows.len())
            .field("secret_len", &self.secret_len)
            .field("rows", &self.rows)
            .finish()
    }
}

impl ShareMatrix {
    /// Allocates `n` zeroed rows of `secret_len + 1` bytes.
    pub(crate) fn zeroed(n: u8, secret_len: usize) -> Self {
        let rows = (0..n).map(|_| Share::zeroed(secret_len)).collect();
        Self { rows, secret_len }
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Share] {
        &mut self.rows
    }

    /// Number of rows (participants).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the secret that was split (row length minus one).
    pub fn secret_len(&self) -> usize {
        self.secret_len
    }

    pub fn shares(&self) -> &[Share] {
        &self.rows
    }

    pub fn get(&self, i: usize) -> Option<&Share> {
        self.rows.get(i)
    }

    /// Hands each row over to its participant.
    pub fn into_shares(self) -> Vec<Share> {
        self.rows
    }

    /// Iterator over the coordinate column.
    pub fn coordinates(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().map(Share::coordinate)
    }
}
