//! Descriptors for short Weierstrass curves over prime fields
//!
//! Each descriptor carries the domain constants of one curve
//! y² = x³ + ax + b mod p as radix-16 strings, together with the canonical
//! byte-width of an encoded field element. Descriptors are immutable and
//! borrowed by the operations that consume them; keys hold a reference to
//! the descriptor they were imported against.

/// Domain parameters of a short Weierstrass curve over a prime field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Human-readable curve name
    pub name: &'static str,
    /// Canonical byte-width of an encoded field element
    pub size: usize,
    /// Field prime modulus p, radix-16
    pub prime: &'static str,
    /// Curve coefficient a, radix-16
    pub a: &'static str,
    /// Curve coefficient b, radix-16
    pub b: &'static str,
    /// Order of the base point, radix-16
    pub order: &'static str,
    /// Base-point x-coordinate, radix-16
    pub g_x: &'static str,
    /// Base-point y-coordinate, radix-16
    pub g_y: &'static str,
}

/// NIST P-192 (secp192r1)
pub static NIST_P192: CurveParams = CurveParams {
    name: "NIST P-192",
    size: 24,
    prime: "fffffffffffffffffffffffffffffffeffffffffffffffff",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffc",
    b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    order: "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
    g_x: "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
    g_y: "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
};

/// NIST P-224 (secp224r1)
///
/// The field prime is congruent to 1 mod 4, so compressed-point import is
/// not available on this curve; the square-root primitive reports failure.
pub static NIST_P224: CurveParams = CurveParams {
    name: "NIST P-224",
    size: 28,
    prime: "ffffffffffffffffffffffffffffffff000000000000000000000001",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
    b: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
    order: "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
    g_x: "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
    g_y: "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
};

/// NIST P-256 (secp256r1)
pub static NIST_P256: CurveParams = CurveParams {
    name: "NIST P-256",
    size: 32,
    prime: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    order: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
    g_x: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    g_y: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
};

/// NIST P-384 (secp384r1)
pub static NIST_P384: CurveParams = CurveParams {
    name: "NIST P-384",
    size: 48,
    prime: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe\
            ffffffff0000000000000000ffffffff",
    a: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe\
        ffffffff0000000000000000fffffffc",
    b: "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a\
        c656398d8a2ed19d2a85c8edd3ec2aef",
    order: "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf\
            581a0db248b0a77aecec196accc52973",
    g_x: "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38\
          5502f25dbf55296c3a545e3872760ab7",
    g_y: "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0\
          0a60b1ce1d7e819d7a431d7c90ea0e5f",
};

/// NIST P-521 (secp521r1)
pub static NIST_P521: CurveParams = CurveParams {
    name: "NIST P-521",
    size: 66,
    prime: "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
            ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
            ffff",
    a: "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
        ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
        fffc",
    b: "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef1\
        09e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b50\
        3f00",
    order: "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
            fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138\
            6409",
    g_x: "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d\
          3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5\
          bd66",
    g_y: "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e\
          662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd1\
          6650",
};

/// secp256k1 (the Koblitz curve used by Bitcoin and Ethereum)
pub static SECP256K1: CurveParams = CurveParams {
    name: "secp256k1",
    size: 32,
    prime: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    a: "0",
    b: "7",
    order: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
    g_x: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    g_y: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
};

/// All built-in curves, ordered by field width
pub static CURVES: [&CurveParams; 6] = [
    &NIST_P192,
    &NIST_P224,
    &NIST_P256,
    &SECP256K1,
    &NIST_P384,
    &NIST_P521,
];

/// Look up a built-in curve by name (case-insensitive)
pub fn by_name(name: &str) -> Option<&'static CurveParams> {
    CURVES
        .iter()
        .find(|params| params.name.eq_ignore_ascii_case(name))
        .copied()
}

/// Look up the first built-in curve whose field width matches `size` bytes
pub fn by_size(size: usize) -> Option<&'static CurveParams> {
    CURVES.iter().find(|params| params.size == size).copied()
}
