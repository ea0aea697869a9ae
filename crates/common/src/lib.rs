//! Common security utilities for the eckey library
//!
//! Provides the heap-backed, zeroize-on-drop byte container used to hold
//! private scalars whose width depends on the curve in use.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

pub mod security;

pub use security::SecretBytes;
