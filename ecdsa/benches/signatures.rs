use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecdsa::{Ecdsa, SigningKey};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DIGEST: [u8; 32] = [0x5a; 32];

fn setup() -> (Ecdsa, [u8; 32], [u8; 64], String) {
    let ecdsa = Ecdsa::secp256k1().expect("curve");
    let mut rng = StdRng::seed_from_u64(42);
    let sk = ecdsa.generate_private_key(&mut rng).expect("key");
    let pk = ecdsa.private_key_to_public_key(&sk).expect("public key");
    let sig = ecdsa.sign(&sk, &DIGEST).expect("sign");
    (ecdsa, sk, pk, sig)
}

fn bench_sign(c: &mut Criterion) {
    let (ecdsa, sk, _, _) = setup();
    let key = SigningKey::from_bytes(ecdsa.curve(), &sk).expect("key");
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("ecdsa_sign", |bencher| {
        bencher.iter(|| {
            let sig = ecdsa
                .sign_with_rng(&mut rng, &key, black_box(&DIGEST))
                .expect("sign");
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let (ecdsa, _, pk, sig) = setup();

    c.bench_function("ecdsa_verify", |bencher| {
        bencher.iter(|| {
            let ok = ecdsa
                .verify(black_box(&pk), black_box(&DIGEST), black_box(&sig))
                .expect("verify");
            black_box(ok);
        })
    });
}

fn bench_recover(c: &mut Criterion) {
    let (ecdsa, _, _, sig) = setup();

    c.bench_function("ecdsa_recover", |bencher| {
        bencher.iter(|| {
            let pk = ecdsa
                .recover_to_public_key(black_box(&DIGEST), black_box(&sig))
                .expect("recover");
            black_box(pk);
        })
    });
}

fn bench_public_key(c: &mut Criterion) {
    let (ecdsa, sk, _, _) = setup();

    c.bench_function("ecdsa_private_key_to_public_key", |bencher| {
        bencher.iter(|| black_box(ecdsa.private_key_to_public_key(black_box(&sk)).expect("pk")))
    });
}

criterion_group!(benches, bench_sign, bench_verify, bench_recover, bench_public_key);
criterion_main!(benches);
