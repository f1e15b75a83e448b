//! Caller-Injected Entropy Source.
//!
//! Replays a finite pool of bytes supplied by the host, e.g. randomness gathered by another
//! subsystem or a fixed stream for reproducible splits in tests.

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroizing;
use super::{EntropyError, EntropySource};

/// Source that hands out injected bytes in order, wiping its pool on drop.
pub struct CustomSource {
    buffer: Zeroizing<Vec<u8>>,
    cursor: usize,
}

impl CustomSource {
    /// Creates a new empty CustomSource.
    pub fn new() -> Self {
        Self { buffer: Zeroizing::new(Vec::new()), cursor: 0 }
    }

    /// Add entropy bytes to the pool.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Number of bytes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }
}

impl Default for CustomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for CustomSource {
    fn name(&self) -> &'static str {
        "CustomInput"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.remaining() < dest.len() {
            return Err(EntropyError::Exhausted);
        }
        let end = self.cursor + dest.len();
        dest.copy_from_slice(&self.buffer[self.cursor..end]);
        self.cursor = end;
        Ok(())
    }
}
