//! Point arithmetic on short Weierstrass curves

use subtle::Choice;

use crate::error::Result;
use crate::mp::Mp;
use eckey_params::weierstrass::CurveParams;

/// A point on a short Weierstrass curve, in affine coordinates
///
/// The normalization factor z is implicitly 1; Jacobian coordinates are
/// used internally for scalar multiplication and never escape this module.
#[derive(Clone, Debug)]
pub struct EcPoint {
    is_identity: Choice,
    x: Mp,
    y: Mp,
}

/// Jacobian projective point (X : Y : Z), x = X/Z², y = Y/Z³
#[derive(Clone, Debug)]
struct ProjectivePoint {
    is_identity: Choice,
    x: Mp,
    y: Mp,
    z: Mp,
}

impl PartialEq for EcPoint {
    fn eq(&self, other: &Self) -> bool {
        let self_is_identity: bool = self.is_identity.into();
        let other_is_identity: bool = other.is_identity.into();
        if self_is_identity || other_is_identity {
            return self_is_identity == other_is_identity;
        }
        self.x == other.x && self.y == other.y
    }
}

impl EcPoint {
    /// Create an affine point from its coordinates
    ///
    /// No curve membership is implied; callers validate separately.
    pub fn new(x: Mp, y: Mp) -> Self {
        EcPoint {
            is_identity: Choice::from(0),
            x,
            y,
        }
    }

    /// The point at infinity (identity element)
    pub fn identity() -> Self {
        EcPoint {
            is_identity: Choice::from(1),
            x: Mp::zero(),
            y: Mp::zero(),
        }
    }

    /// Whether this point is the identity element
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// The x-coordinate
    pub fn x(&self) -> &Mp {
        &self.x
    }

    /// The y-coordinate
    pub fn y(&self) -> &Mp {
        &self.y
    }

    /// Whether this point satisfies the curve equation of `curve`
    ///
    /// The identity is not representable as an affine coordinate pair and
    /// never passes (b = 0 curves are not valid descriptors).
    pub fn is_on_curve(&self, curve: &CurveParams) -> Result<bool> {
        super::is_on_curve(&self.x, &self.y, curve)
    }

    /// Scalar multiplication: compute k · self over the field `prime` with
    /// curve coefficient `a`
    ///
    /// Double-and-add over the big-endian bits of k, accumulating in
    /// Jacobian coordinates with a single final inversion.
    pub fn mul(&self, k: &Mp, a: &Mp, prime: &Mp) -> Result<EcPoint> {
        if k.is_zero() {
            return Ok(Self::identity());
        }
        let base = self.to_projective(prime);
        let mut acc = ProjectivePoint::identity();
        for byte in k.to_be_bytes() {
            for bit in (0..8).rev() {
                acc = acc.double(a, prime);
                if (byte >> bit) & 1 == 1 {
                    acc = acc.add(&base, a, prime);
                }
            }
        }
        acc.to_affine(prime)
    }

    /// Convert to Jacobian coordinates, reducing both coordinates mod p
    fn to_projective(&self, prime: &Mp) -> ProjectivePoint {
        if self.is_identity() {
            return ProjectivePoint::identity();
        }
        ProjectivePoint {
            is_identity: Choice::from(0),
            x: self.x.rem(prime),
            y: self.y.rem(prime),
            z: Mp::from_u64(1),
        }
    }
}

impl ProjectivePoint {
    fn identity() -> Self {
        ProjectivePoint {
            is_identity: Choice::from(1),
            x: Mp::zero(),
            y: Mp::from_u64(1),
            z: Mp::zero(),
        }
    }

    /// Jacobian point addition
    fn add(&self, other: &Self, a: &Mp, prime: &Mp) -> Self {
        if self.is_identity.into() {
            return other.clone();
        }
        if other.is_identity.into() {
            return self.clone();
        }

        let z1_sq = self.z.sqr_mod(prime);
        let z2_sq = other.z.sqr_mod(prime);
        let z1_cu = z1_sq.mul_mod(&self.z, prime);
        let z2_cu = z2_sq.mul_mod(&other.z, prime);

        let u1 = self.x.mul_mod(&z2_sq, prime);
        let u2 = other.x.mul_mod(&z1_sq, prime);
        let s1 = self.y.mul_mod(&z2_cu, prime);
        let s2 = other.y.mul_mod(&z1_cu, prime);

        let h = u2.sub_mod(&u1, prime);
        let r = s2.sub_mod(&s1, prime);

        if h.is_zero() {
            if r.is_zero() {
                return self.double(a, prime);
            }
            return Self::identity();
        }

        let h_sq = h.sqr_mod(prime);
        let h_cu = h_sq.mul_mod(&h, prime);
        let v = u1.mul_mod(&h_sq, prime);

        // X₃ = r² − h³ − 2v
        let two_v = v.add_mod(&v, prime);
        let x3 = r.sqr_mod(prime).sub_mod(&h_cu, prime).sub_mod(&two_v, prime);

        // Y₃ = r·(v − X₃) − s₁·h³
        let y3 = r
            .mul_mod(&v.sub_mod(&x3, prime), prime)
            .sub_mod(&s1.mul_mod(&h_cu, prime), prime);

        // Z₃ = Z₁·Z₂·h
        let z3 = self.z.mul_mod(&other.z, prime).mul_mod(&h, prime);

        ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Jacobian point doubling for arbitrary curve coefficient a
    fn double(&self, a: &Mp, prime: &Mp) -> Self {
        if self.is_identity.into() {
            return self.clone();
        }
        if self.y.is_zero() {
            return Self::identity();
        }

        // M = 3·X² + a·Z⁴, S = 4·X·Y²
        let y_sq = self.y.sqr_mod(prime);
        let s = self
            .x
            .mul_mod(&y_sq, prime)
            .mul_mod(&Mp::from_u64(4), prime);
        let z_quartic = self.z.sqr_mod(prime).sqr_mod(prime);
        let m = self
            .x
            .sqr_mod(prime)
            .mul_mod(&Mp::from_u64(3), prime)
            .add_mod(&a.mul_mod(&z_quartic, prime), prime);

        // X₃ = M² − 2S
        let x3 = m
            .sqr_mod(prime)
            .sub_mod(&s.add_mod(&s, prime), prime);

        // Y₃ = M·(S − X₃) − 8·Y⁴
        let y_quartic = y_sq.sqr_mod(prime);
        let y3 = m
            .mul_mod(&s.sub_mod(&x3, prime), prime)
            .sub_mod(&y_quartic.mul_mod(&Mp::from_u64(8), prime), prime);

        // Z₃ = 2·Y·Z
        let z3 = self
            .y
            .mul_mod(&self.z, prime)
            .mul_mod(&Mp::from_u64(2), prime);

        ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Convert back to affine coordinates
    fn to_affine(&self, prime: &Mp) -> Result<EcPoint> {
        if self.is_identity.into() {
            return Ok(EcPoint::identity());
        }
        let z_inv = self.z.inv_mod(prime)?;
        let z_inv_sq = z_inv.sqr_mod(prime);
        let z_inv_cu = z_inv_sq.mul_mod(&z_inv, prime);
        Ok(EcPoint::new(
            self.x.mul_mod(&z_inv_sq, prime),
            self.y.mul_mod(&z_inv_cu, prime),
        ))
    }
}
