use criterion::{criterion_group, criterion_main, Criterion};

use eckey_algorithms::ec::EcKey;
use eckey_params::weierstrass::NIST_P256;

fn bench_import(c: &mut Criterion) {
    let uncompressed = hex::decode(
        "046b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296\
         4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    )
    .unwrap();
    let compressed = hex::decode(
        "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    )
    .unwrap();
    let mut private = [0u8; 32];
    private[31] = 2;

    c.bench_function("import/p256/uncompressed", |b| {
        b.iter(|| EcKey::import(&uncompressed, &NIST_P256).unwrap())
    });
    c.bench_function("import/p256/compressed", |b| {
        b.iter(|| EcKey::import(&compressed, &NIST_P256).unwrap())
    });
    c.bench_function("import/p256/private", |b| {
        b.iter(|| EcKey::import(&private, &NIST_P256).unwrap())
    });
}

criterion_group!(benches, bench_import);
criterion_main!(benches);
