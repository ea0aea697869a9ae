//! Arithmetic and key-import primitives for the eckey library
//!
//! This crate holds the working parts: a thin big-number layer over
//! `num-bigint` exposing exactly the operations the curve code consumes,
//! affine/Jacobian point arithmetic for arbitrary short Weierstrass curves,
//! and the raw key-import core that turns untrusted byte strings into
//! validated key records.
//!
//! All operations take their curve descriptor as an explicit borrow; there
//! is no ambient curve state anywhere in the crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Big-number layer backing the ec module
pub mod mp;
pub use mp::Mp;

// Elliptic-curve points and the key-import core
pub mod ec;
pub use ec::{EcKey, EcPoint, KeyKind, RawEncoding};
