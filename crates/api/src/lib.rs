//! Public API types for the eckey library
//!
//! This crate provides the stable error surface for the eckey ecosystem:
//! the [`Error`] enum returned by every public operation, the matching
//! [`Result`] alias and the [`ResultExt`] extension trait used to attach
//! operation context while converting lower-level errors.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
