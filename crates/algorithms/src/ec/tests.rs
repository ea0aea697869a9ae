//! Elliptic-curve and key-import unit tests

use super::*;
use crate::error::Error;
use crate::mp::Mp;

use alloc::vec;

use eckey_params::weierstrass::{CurveParams, NIST_P224, NIST_P256};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// y² = x³ + x + 1 over F₂₃, G = (3, 10), |G| = 28. Small enough to check
/// every multiple by hand.
static TOY_CURVE: CurveParams = CurveParams {
    name: "toy-p23",
    size: 1,
    prime: "17",
    a: "1",
    b: "1",
    order: "1c",
    g_x: "3",
    g_y: "a",
};

fn toy_mul(k: u64) -> EcPoint {
    let prime = Mp::read_radix16(TOY_CURVE.prime).unwrap();
    let a = Mp::read_radix16(TOY_CURVE.a).unwrap();
    base_point(&TOY_CURVE)
        .unwrap()
        .mul(&Mp::from_u64(k), &a, &prime)
        .unwrap()
}

#[test]
fn classify_selects_each_encoding() {
    use RawEncoding::*;

    assert_eq!(
        RawEncoding::classify(32, Some(0x00), 32).unwrap(),
        PrivateScalar
    );
    assert_eq!(
        RawEncoding::classify(65, Some(0x04), 32).unwrap(),
        PublicUncompressed
    );
    assert_eq!(
        RawEncoding::classify(33, Some(0x02), 32).unwrap(),
        PublicCompressed
    );
    assert_eq!(
        RawEncoding::classify(33, Some(0x03), 32).unwrap(),
        PublicCompressed
    );
}

#[test]
fn classify_rejects_everything_else() {
    // Empty input, even when the descriptor is degenerate
    assert!(RawEncoding::classify(0, None, 32).is_err());
    assert!(RawEncoding::classify(0, None, 0).is_err());
    // Unknown tag
    assert!(RawEncoding::classify(65, Some(0x05), 32).is_err());
    // Uncompressed must be odd-length
    assert!(RawEncoding::classify(64, Some(0x04), 32).is_err());
    // Near-miss lengths
    assert!(RawEncoding::classify(31, Some(0x04), 32).is_err());
    assert!(RawEncoding::classify(34, Some(0x02), 32).is_err());
}

#[test]
fn base_point_loads_from_descriptor() {
    let g = base_point(&TOY_CURVE).unwrap();
    assert_eq!(g.x(), &Mp::from_u64(3));
    assert_eq!(g.y(), &Mp::from_u64(10));
    assert!(g.is_on_curve(&TOY_CURVE).unwrap());
}

#[test]
fn identity_is_not_a_curve_point() {
    let identity = EcPoint::identity();
    assert!(identity.is_identity());
    assert!(!identity.is_on_curve(&TOY_CURVE).unwrap());
}

#[test]
fn scalar_mult_matches_hand_computed_multiples() {
    // 2G = (7, 12), 3G = (19, 5), 5G = (9, 16) on the toy curve
    assert_eq!(toy_mul(2), EcPoint::new(Mp::from_u64(7), Mp::from_u64(12)));
    assert_eq!(toy_mul(3), EcPoint::new(Mp::from_u64(19), Mp::from_u64(5)));
    assert_eq!(toy_mul(5), EcPoint::new(Mp::from_u64(9), Mp::from_u64(16)));
    // |G| = 28
    assert!(toy_mul(28).is_identity());
    assert!(toy_mul(0).is_identity());
}

#[test]
fn import_private_key_derives_public_point() {
    let key = EcKey::import(&[5], &TOY_CURVE).unwrap();
    assert_eq!(key.kind(), KeyKind::Private);
    assert_eq!(key.curve(), &TOY_CURVE);
    assert_eq!(key.private_scalar().unwrap().as_slice(), &[5]);
    // The scalar-multiplication primitive is the oracle
    assert_eq!(key.public_point(), &toy_mul(5));
    assert_eq!(
        key.public_point(),
        &EcPoint::new(Mp::from_u64(9), Mp::from_u64(16))
    );
    assert!(key.public_point().is_on_curve(&TOY_CURVE).unwrap());
}

#[test]
fn import_does_not_reduce_the_scalar() {
    // 30 ≡ 2 (mod 28): accepted, lands on 2G
    let key = EcKey::import(&[30], &TOY_CURVE).unwrap();
    assert_eq!(key.public_point(), &toy_mul(2));

    // A multiple of the group order maps to the identity, which the
    // membership check rejects
    assert!(matches!(
        EcKey::import(&[28], &TOY_CURVE).unwrap_err(),
        Error::Encoding { .. }
    ));
}

#[test]
fn import_rejects_zero_private_scalar() {
    let err = EcKey::import(&[0u8; 32], &NIST_P256).unwrap_err();
    assert!(matches!(err, Error::Encoding { .. }));
}

#[test]
fn import_uncompressed_public_key() {
    let key = EcKey::import(&[0x04, 3, 10], &TOY_CURVE).unwrap();
    assert_eq!(key.kind(), KeyKind::Public);
    assert!(key.private_scalar().is_none());
    assert_eq!(key.public_point(), &base_point(&TOY_CURVE).unwrap());

    // Odd-y points work the same way
    let odd = EcKey::import(&[0x04, 3, 13], &TOY_CURVE).unwrap();
    assert_eq!(odd.public_point().y(), &Mp::from_u64(13));
}

#[test]
fn import_compressed_even_and_odd_roots() {
    // (3, 10): y even, tag 0x02
    let even = EcKey::import(&[0x02, 3], &TOY_CURVE).unwrap();
    assert_eq!(even.public_point().y(), &Mp::from_u64(10));

    // (3, 13): the other root of the same x, tag 0x03
    let odd = EcKey::import(&[0x03, 3], &TOY_CURVE).unwrap();
    assert_eq!(odd.public_point().x(), &Mp::from_u64(3));
    assert_eq!(odd.public_point().y(), &Mp::from_u64(13));
}

#[test]
fn import_compressed_rejects_non_residue_x() {
    // x = 2: 2³ + 2 + 1 = 11 is not a square mod 23
    let err = EcKey::import(&[0x02, 2], &TOY_CURVE).unwrap_err();
    assert!(matches!(err, Error::Arithmetic { .. }));
}

#[test]
fn import_rejects_point_off_curve() {
    // (1, 1): 1 ≠ 1 + 1 + 1 mod 23
    let err = EcKey::import(&[0x04, 1, 1], &TOY_CURVE).unwrap_err();
    assert!(matches!(
        err,
        Error::Encoding {
            details: "point is not on the curve",
            ..
        }
    ));
}

#[test]
fn import_rejects_unmatched_lengths() {
    for len in [31usize, 34, 64] {
        let input = vec![0x04u8; len];
        let err = EcKey::import(&input, &NIST_P256).unwrap_err();
        assert!(matches!(err, Error::Encoding { .. }), "length {}", len);
    }
    assert!(EcKey::import(&[], &NIST_P256).is_err());
}

#[test]
fn import_p256_base_point_both_forms() {
    let uncompressed = hex::decode(
        "046b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296\
         4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    )
    .unwrap();
    let compressed = hex::decode(
        "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    )
    .unwrap();

    let from_uncompressed = EcKey::import(&uncompressed, &NIST_P256).unwrap();
    let from_compressed = EcKey::import(&compressed, &NIST_P256).unwrap();

    assert_eq!(from_uncompressed.kind(), KeyKind::Public);
    assert_eq!(
        from_uncompressed.public_point(),
        &base_point(&NIST_P256).unwrap()
    );
    assert_eq!(
        from_uncompressed.public_point(),
        from_compressed.public_point()
    );
}

#[test]
fn import_p256_private_key_known_vector() {
    let mut scalar = [0u8; 32];
    scalar[31] = 2;
    let key = EcKey::import(&scalar, &NIST_P256).unwrap();

    // 2·G for P-256
    let expected_x = Mp::read_radix16(
        "7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978",
    )
    .unwrap();
    let expected_y = Mp::read_radix16(
        "07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1",
    )
    .unwrap();
    assert_eq!(key.public_point(), &EcPoint::new(expected_x, expected_y));
}

#[test]
fn import_p256_rejects_corrupted_y() {
    let mut uncompressed = hex::decode(
        "046b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296\
         4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    )
    .unwrap();
    *uncompressed.last_mut().unwrap() ^= 1;

    let err = EcKey::import(&uncompressed, &NIST_P256).unwrap_err();
    assert!(matches!(err, Error::Encoding { .. }));
}

#[test]
fn compressed_import_requires_3_mod_4_prime() {
    // The P-224 prime is 1 mod 4; the square-root primitive reports failure
    let mut input = vec![0x02u8];
    input.extend_from_slice(&hex::decode(NIST_P224.g_x).unwrap());

    let err = EcKey::import(&input, &NIST_P224).unwrap_err();
    assert!(matches!(err, Error::Arithmetic { .. }));
}

#[test]
fn generate_produces_importable_keys() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    let key = EcKey::generate(&mut rng, &TOY_CURVE).unwrap();
    assert_eq!(key.kind(), KeyKind::Private);

    let scalar = key.private_scalar().unwrap();
    assert_eq!(scalar.len(), TOY_CURVE.size);
    let k = Mp::read_be_bytes(scalar.as_slice());
    assert!(!k.is_zero());
    assert!(k < Mp::read_radix16(TOY_CURVE.order).unwrap());

    // Re-importing the scalar bytes reproduces the same record
    let reimported = EcKey::import(scalar.as_slice(), &TOY_CURVE).unwrap();
    assert_eq!(key, reimported);
}

#[test]
fn generate_on_p256() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let key = EcKey::generate(&mut rng, &NIST_P256).unwrap();
    assert!(key.public_point().is_on_curve(&NIST_P256).unwrap());
}

proptest! {
    #[test]
    fn import_matches_the_multiplication_oracle(k in 1u8..28) {
        let key = EcKey::import(&[k], &TOY_CURVE).unwrap();
        prop_assert_eq!(key.public_point(), &toy_mul(u64::from(k)));
        prop_assert!(key.public_point().is_on_curve(&TOY_CURVE).unwrap());
    }
}
