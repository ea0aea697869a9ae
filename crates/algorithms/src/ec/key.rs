//! Raw key import for short Weierstrass curves
//!
//! Accepts the three raw wire encodings (private scalar, X9.63 uncompressed
//! point, X9.63 compressed point), selected purely from the input length and
//! leading tag byte. Decoding runs in four strict stages: classify the
//! encoding, read the field elements, complete any missing coordinate
//! (scalar multiplication for private keys, modular square root for
//! compressed points), then validate curve membership and commit. A key
//! record only exists after the final stage; every failure before that
//! point leaves the caller with nothing but an error.

use alloc::vec;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use eckey_common::SecretBytes;
use eckey_params::weierstrass::CurveParams;

use super::{base_point, read_prime, EcPoint};
use crate::error::{validate, Error, Result};
use crate::mp::{self, Mp};

/// The wire encodings understood by [`EcKey::import`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEncoding {
    /// A bare big-endian private scalar of exactly the field width
    PrivateScalar,
    /// `0x04 ‖ X ‖ Y` (ANSI X9.63 uncompressed)
    PublicUncompressed,
    /// `0x02/0x03 ‖ X`, tag parity selecting the y root (ANSI X9.63
    /// compressed)
    PublicCompressed,
}

impl RawEncoding {
    /// Select the encoding from the input length, the leading byte and the
    /// curve's field byte-width
    ///
    /// Length conditions are checked before the tag byte is consulted, so a
    /// zero-length input is rejected without ever inspecting content.
    pub fn classify(len: usize, first: Option<u8>, field_size: usize) -> Result<Self> {
        if len == field_size && len != 0 {
            return Ok(RawEncoding::PrivateScalar);
        }
        match first {
            Some(0x04) if len % 2 == 1 && (len - 1) / 2 == field_size => {
                Ok(RawEncoding::PublicUncompressed)
            }
            Some(0x02) | Some(0x03) if len - 1 == field_size => {
                Ok(RawEncoding::PublicCompressed)
            }
            _ => Err(Error::Encoding {
                context: "ec key import",
                details: "input length and tag match no supported encoding",
            }),
        }
    }
}

/// Discriminant of a key record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Private key (scalar plus derived public point)
    Private,
    /// Public key (point only)
    Public,
}

/// A validated elliptic-curve key bound to its curve descriptor
///
/// The variants make an inconsistent record unrepresentable: a public key
/// carries no scalar slot to misread, and a private key always holds the
/// public point derived from its scalar. Both variants only come into
/// existence after the curve-membership check has passed.
#[derive(Clone, Debug, PartialEq)]
pub enum EcKey {
    /// Private key material
    Private {
        /// The private scalar, big-endian at field width, wiped on drop
        scalar: SecretBytes,
        /// The public point k·G
        public: EcPoint,
        /// Descriptor of the curve the key lives on
        curve: &'static CurveParams,
    },
    /// Public key material
    Public {
        /// The public point
        point: EcPoint,
        /// Descriptor of the curve the key lives on
        curve: &'static CurveParams,
    },
}

impl EcKey {
    /// Import a raw private scalar or X9.63 public point
    ///
    /// | encoding            | length | layout                         |
    /// |---------------------|--------|--------------------------------|
    /// | private scalar      | S      | big-endian unsigned integer    |
    /// | uncompressed public | 2S+1   | `0x04 ‖ X ‖ Y`                 |
    /// | compressed public   | S+1    | `(0x02\|0x03) ‖ X`             |
    ///
    /// where S is the curve's field byte-width. The zero scalar is rejected;
    /// compressed points are completed via a modular square root (requires
    /// p ≡ 3 mod 4, enforced by the square-root primitive); every decoded
    /// point must satisfy the curve equation.
    pub fn import(input: &[u8], curve: &'static CurveParams) -> Result<Self> {
        let encoding = RawEncoding::classify(input.len(), input.first().copied(), curve.size)?;

        let (scalar, point) = match encoding {
            RawEncoding::PrivateScalar => {
                let (scalar, public) = derive_public(input, curve)?;
                (Some(scalar), public)
            }
            RawEncoding::PublicUncompressed => (None, decode_uncompressed(input, curve)?),
            RawEncoding::PublicCompressed => (None, decode_compressed(input, curve)?),
        };

        // One membership check covers all three paths; for uncompressed
        // input it is the only check.
        if !point.is_on_curve(curve)? {
            return Err(Error::Encoding {
                context: "ec key import",
                details: "point is not on the curve",
            });
        }

        Ok(match scalar {
            Some(scalar) => EcKey::Private {
                scalar,
                public: point,
                curve,
            },
            None => EcKey::Public { point, curve },
        })
    }

    /// Generate a fresh private key on `curve`
    ///
    /// Rejection-samples field-width byte strings until one falls in
    /// (0, order), then derives the public point through the same path an
    /// imported scalar takes.
    pub fn generate<R: CryptoRng + RngCore>(
        rng: &mut R,
        curve: &'static CurveParams,
    ) -> Result<Self> {
        let order = Mp::read_radix16(curve.order)?;
        validate::parameter(!order.is_zero(), "curve order", "must be nonzero")?;

        let mut candidate = Zeroizing::new(vec![0u8; curve.size]);
        loop {
            rng.fill_bytes(candidate.as_mut_slice());
            let k = Mp::read_be_bytes(&candidate);
            if k.is_zero() || k >= order {
                continue;
            }
            return Self::import(&candidate, curve);
        }
    }

    /// Whether this record holds private or public material
    pub fn kind(&self) -> KeyKind {
        match self {
            EcKey::Private { .. } => KeyKind::Private,
            EcKey::Public { .. } => KeyKind::Public,
        }
    }

    /// The descriptor of the curve this key is bound to
    pub fn curve(&self) -> &'static CurveParams {
        match self {
            EcKey::Private { curve, .. } => curve,
            EcKey::Public { curve, .. } => curve,
        }
    }

    /// The public point (for private keys, the derived k·G)
    pub fn public_point(&self) -> &EcPoint {
        match self {
            EcKey::Private { public, .. } => public,
            EcKey::Public { point, .. } => point,
        }
    }

    /// The private scalar, if this is a private key
    pub fn private_scalar(&self) -> Option<&SecretBytes> {
        match self {
            EcKey::Private { scalar, .. } => Some(scalar),
            EcKey::Public { .. } => None,
        }
    }
}

/// Private-scalar path: read k, reject zero, derive k·G
fn derive_public(input: &[u8], curve: &CurveParams) -> Result<(SecretBytes, EcPoint)> {
    validate::length("ec raw private key", input.len(), curve.size)?;

    let k = Mp::read_be_bytes(input);
    if k.is_zero() {
        return Err(Error::Encoding {
            context: "ec raw private key",
            details: "the zero scalar is not a valid private key",
        });
    }

    let prime = read_prime(curve)?;
    let a = Mp::read_radix16(curve.a)?;
    let base = base_point(curve)?;
    let public = base.mul(&k, &a, &prime)?;

    Ok((SecretBytes::from_slice(input), public))
}

/// Uncompressed path: both coordinates are present in the input
fn decode_uncompressed(input: &[u8], curve: &CurveParams) -> Result<EcPoint> {
    validate::length(
        "ec uncompressed public key",
        input.len(),
        1 + 2 * curve.size,
    )?;

    let size = curve.size;
    let x = Mp::read_be_bytes(&input[1..1 + size]);
    let y = Mp::read_be_bytes(&input[1 + size..]);
    Ok(EcPoint::new(x, y))
}

/// Compressed path: recover y from x³ + ax + b and the tag parity
fn decode_compressed(input: &[u8], curve: &CurveParams) -> Result<EcPoint> {
    validate::length("ec compressed public key", input.len(), 1 + curve.size)?;

    let x = Mp::read_be_bytes(&input[1..]);

    let prime = read_prime(curve)?;
    let b = Mp::read_radix16(curve.b)?;
    let a = Mp::read_radix16(curve.a)?;

    // x³ + a·x + b, left unreduced; the square root reduces its operand
    let candidate = x
        .sqr()
        .mul_mod(&x, &prime)
        .add(&a.mul_mod(&x, &prime))
        .add(&b);
    let root = mp::sqrt_mod_prime(&candidate, &prime)?;

    // The tag byte encodes the parity of y: 0x02 even, 0x03 odd. Exactly
    // one of {root, p − root} has each parity.
    let want_odd = input[0] == 0x03;
    let y = if root.is_odd() == want_odd {
        root.rem(&prime)
    } else {
        prime.sub_mod(&root, &prime)
    };

    Ok(EcPoint::new(x, y))
}
