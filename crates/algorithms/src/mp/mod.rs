//! Big-number layer over `num-bigint`
//!
//! The curve code does not talk to `num-bigint` directly; it consumes the
//! small operation set below, which mirrors what a multiple-precision
//! library offers a prime-field ECC implementation: big-endian and radix-16
//! reads, parity and zero tests, a handful of modular operations, Fermat
//! inversion and a square root for primes congruent to 3 mod 4.
//!
//! Values are arbitrary-precision and unsigned. Operations taking a modulus
//! require it to be nonzero; the curve layer checks the descriptor's prime
//! once on load. `mod_pow`, `inv_mod` and [`sqrt_mod_prime`] report their
//! failures as [`Error::Arithmetic`], which callers propagate verbatim.

use alloc::vec;
use alloc::vec::Vec;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{validate, Error, Result};


/// An unsigned multiple-precision integer
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mp(BigUint);

impl Mp {
    /// The value 0
    pub fn zero() -> Self {
        Mp(BigUint::zero())
    }

    /// Lift a small constant
    pub fn from_u64(value: u64) -> Self {
        Mp(BigUint::from(value))
    }

    /// Read an unsigned big-endian byte string
    pub fn read_be_bytes(bytes: &[u8]) -> Self {
        Mp(BigUint::from_bytes_be(bytes))
    }

    /// Read a radix-16 string (descriptor constants)
    pub fn read_radix16(text: &str) -> Result<Self> {
        validate::parameter(!text.is_empty(), "radix-16 constant", "empty string")?;
        BigUint::parse_bytes(text.as_bytes(), 16)
            .map(Mp)
            .ok_or_else(|| Error::param("radix-16 constant", "malformed hexadecimal digits"))
    }

    /// Encode as big-endian bytes in minimal form (no leading zeros)
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }

    /// Encode as big-endian bytes, left-padded to exactly `width` bytes
    pub fn to_be_bytes_padded(&self, width: usize) -> Result<Vec<u8>> {
        let bytes = self.0.to_bytes_be();
        if self.0.is_zero() {
            return Ok(vec![0u8; width]);
        }
        validate::parameter(
            bytes.len() <= width,
            "big-endian field encoding",
            "value does not fit the requested width",
        )?;
        let mut out = vec![0u8; width];
        out[width - bytes.len()..].copy_from_slice(&bytes);
        Ok(out)
    }

    /// Whether the value is 0
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whether the value is odd
    pub fn is_odd(&self) -> bool {
        self.0.is_odd()
    }

    /// Plain addition
    pub fn add(&self, rhs: &Self) -> Self {
        Mp(&self.0 + &rhs.0)
    }

    /// Plain squaring
    pub fn sqr(&self) -> Self {
        Mp(&self.0 * &self.0)
    }

    /// Reduction modulo `m`
    pub fn rem(&self, m: &Self) -> Self {
        Mp(&self.0 % &m.0)
    }

    /// (self + rhs) mod m
    pub fn add_mod(&self, rhs: &Self, m: &Self) -> Self {
        Mp((&self.0 + &rhs.0) % &m.0)
    }

    /// (self - rhs) mod m
    pub fn sub_mod(&self, rhs: &Self, m: &Self) -> Self {
        let a = &self.0 % &m.0;
        let b = &rhs.0 % &m.0;
        if a >= b {
            Mp(a - b)
        } else {
            Mp((a + &m.0) - b)
        }
    }

    /// (self * rhs) mod m
    pub fn mul_mod(&self, rhs: &Self, m: &Self) -> Self {
        Mp((&self.0 * &rhs.0) % &m.0)
    }

    /// self² mod m
    pub fn sqr_mod(&self, m: &Self) -> Self {
        Mp((&self.0 * &self.0) % &m.0)
    }

    /// self^exp mod m
    pub fn mod_pow(&self, exp: &Self, m: &Self) -> Result<Self> {
        if m.0.is_zero() {
            return Err(Error::Arithmetic {
                operation: "mod_pow",
                details: "zero modulus",
            });
        }
        Ok(Mp(self.0.modpow(&exp.0, &m.0)))
    }

    /// Multiplicative inverse modulo an odd prime `p` (Fermat)
    pub fn inv_mod(&self, p: &Self) -> Result<Self> {
        if p.0 < BigUint::from(3u32) || p.0.is_even() {
            return Err(Error::Arithmetic {
                operation: "inv_mod",
                details: "modulus is not an odd prime",
            });
        }
        let reduced = &self.0 % &p.0;
        if reduced.is_zero() {
            return Err(Error::Arithmetic {
                operation: "inv_mod",
                details: "zero has no inverse",
            });
        }
        let exp = &p.0 - BigUint::from(2u32);
        let inverse = reduced.modpow(&exp, &p.0);
        if (&inverse * &reduced) % &p.0 != BigUint::one() {
            return Err(Error::Arithmetic {
                operation: "inv_mod",
                details: "value is not invertible",
            });
        }
        Ok(Mp(inverse))
    }
}

/// Square root of `value` modulo `prime`, for primes p ≡ 3 (mod 4)
///
/// Reduces its operand before the exponentiation, so callers may pass an
/// unreduced sum. Returns the principal root r = value^((p+1)/4); the caller
/// selects between r and p − r by parity. Fails for other prime shapes and
/// for quadratic non-residues.
pub fn sqrt_mod_prime(value: &Mp, prime: &Mp) -> Result<Mp> {
    if &prime.0 % 4u32 != BigUint::from(3u32) {
        return Err(Error::Arithmetic {
            operation: "sqrt_mod_prime",
            details: "modulus is not congruent to 3 mod 4",
        });
    }
    let reduced = value.rem(prime);
    if reduced.is_zero() {
        return Ok(Mp::zero());
    }
    let exp = Mp((&prime.0 + BigUint::one()) >> 2u32);
    let root = reduced.mod_pow(&exp, prime)?;
    if root.sqr_mod(prime) != reduced {
        return Err(Error::Arithmetic {
            operation: "sqrt_mod_prime",
            details: "value has no square root modulo the prime",
        });
    }
    Ok(root)
}
