//! # eckey
//!
//! A small, modular library for handling raw elliptic-curve key material on
//! short Weierstrass curves y² = x³ + ax + b over prime fields.
//!
//! The core operation is [`import_key`]: it takes an opaque byte string,
//! decides from its length and tag byte whether it holds a raw private
//! scalar, an ANSI X9.63 uncompressed public point or an ANSI X9.63
//! compressed public point, reconstructs any missing coordinate, checks
//! curve membership and only then hands back a fully-formed key record.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! eckey = "0.1"
//! ```
//!
//! Importing the NIST P-256 base point from its compressed encoding:
//!
//! ```
//! use eckey::prelude::*;
//! use eckey::params::weierstrass::NIST_P256;
//!
//! let encoded = hex::decode(
//!     "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
//! )
//! .unwrap();
//! let key = eckey::import_key(&encoded, &NIST_P256).unwrap();
//! assert_eq!(key.kind(), KeyKind::Public);
//! ```
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`eckey-api`]: Error types and result extensions
//! - [`eckey-common`]: Secure memory containers
//! - [`eckey-params`]: Curve descriptors and the standard-curve registry
//! - [`eckey-algorithms`]: Big-number arithmetic, curve operations and the
//!   key-import core

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use eckey_api as api;
pub use eckey_common as common;
pub use eckey_params as params;
pub use eckey_algorithms as algorithms;

use eckey_api::ResultExt;
use eckey_params::weierstrass::CurveParams;
use rand::{CryptoRng, RngCore};

pub use eckey_algorithms::ec::EcKey;

/// Import a raw private scalar or X9.63 public point for the given curve.
///
/// The encoding is selected from the input length and leading tag byte;
/// see [`algorithms::ec::RawEncoding`] for the exact rules. On failure the
/// caller receives an error and no key record exists in any state.
pub fn import_key(input: &[u8], curve: &'static CurveParams) -> api::Result<EcKey> {
    EcKey::import(input, curve).with_context("ecc import")
}

/// Generate a fresh private key on the given curve.
///
/// Draws field-width byte strings from `rng` until one falls in the range
/// (0, order) and derives the matching public point.
pub fn generate_key<R: CryptoRng + RngCore>(
    rng: &mut R,
    curve: &'static CurveParams,
) -> api::Result<EcKey> {
    EcKey::generate(rng, curve).with_context("ecc keygen")
}

/// Common imports for eckey users
pub mod prelude {
    pub use eckey_algorithms::ec::{EcKey, EcPoint, KeyKind, RawEncoding};
    pub use eckey_api::{Error, Result, ResultExt};
    pub use eckey_params::weierstrass::CurveParams;
}
