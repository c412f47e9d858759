use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strhash::cs::hashing::PolynomialWindow;
use strhash::cs::string::TextSearch;

fn random_text(len: usize, alphabet: &[u8], seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

fn bench_find_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("rabin_karp");
    for &size in &[1_000usize, 10_000, 100_000] {
        let text = random_text(size, b"abcd", 7);
        let pattern = &text[size / 2..size / 2 + 8];

        group.bench_with_input(BenchmarkId::new("additive", size), &text, |b, text| {
            b.iter(|| TextSearch::new(black_box(pattern), black_box(&text[..])).find_all())
        });
        group.bench_with_input(BenchmarkId::new("polynomial", size), &text, |b, text| {
            b.iter(|| {
                TextSearch::with_checksum(
                    black_box(pattern),
                    black_box(&text[..]),
                    PolynomialWindow::default(),
                )
                .find_all()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_all);
criterion_main!(benches);
