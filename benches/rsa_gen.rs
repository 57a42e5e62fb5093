use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;

use rsa_primitives::{prime::gen, rsa};

fn prime_gen(c: &mut Criterion) {
    let sizes = [128, 256, 512, 1024];
    for size in sizes {
        let name = format!("prime::gen({})", size);
        c.bench_function(&name, |b| b.iter(|| gen::new_prime(black_box(size))));
    }
}

fn keypair_gen(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsa");
    // key generation dominates everything else; keep the sample count low
    group.sample_size(10);
    for size in [256, 512] {
        let name = format!("generate_rsa_pair({})", size);
        group.bench_function(&name, |b| {
            b.iter(|| rsa::generate_rsa_pair(black_box(size)))
        });
    }
    group.finish();
}

fn cipher(c: &mut Criterion) {
    let (public, private) = rsa::generate_rsa_pair(1024).unwrap();
    let msg = BigUint::parse_bytes(b"42424242424242424242", 16).unwrap();
    let cipher = public.encrypt(&msg).unwrap();

    c.bench_function("rsa::encrypt(1024)", |b| {
        b.iter(|| public.encrypt(black_box(&msg)))
    });
    c.bench_function("rsa::decrypt(1024)", |b| {
        b.iter(|| private.decrypt(black_box(&cipher)))
    });
}

criterion_group!(benches, prime_gen, keypair_gen, cipher);
criterion_main!(benches);
