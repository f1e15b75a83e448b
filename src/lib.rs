//! Shamir secret splitting over GF(2^8).
//!
//! Two layers: [`core`] implements constant-time field arithmetic on discrete log/exp tables,
//! and [`sharing`] builds one random polynomial per secret byte and evaluates it at each
//! participant's coordinate. Randomness comes from an [`entropy::EntropySource`].
//!
//! ```
//! use gf256_sss::entropy::OsEntropy;
//! use gf256_sss::sharing::split_secret;
//!
//! let matrix = split_secret(b"hunter2", 5, 3, &mut OsEntropy::new()).unwrap();
//! assert_eq!(matrix.len(), 5);
//! assert!(matrix.shares().iter().all(|s| s.as_bytes().len() == 8));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
pub mod entropy;
pub mod sharing;
pub mod config;

pub use config::SharingConfig;
pub use sharing::{split_secret, SecretSharingScheme, ShamirGF256, Share, ShareMatrix, SharingError};
