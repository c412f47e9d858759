use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use strhash::cs::hashing::ChainedStringSet;

fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("key{}", i)).collect()
}

fn bench_add_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_string_set");
    let keys = keys(10_000);
    for &buckets in &[16usize, 1_024, 16_384] {
        group.bench_with_input(BenchmarkId::new("add_then_find", buckets), &buckets, |b, &buckets| {
            b.iter(|| {
                let mut set = ChainedStringSet::new(buckets).unwrap();
                for k in &keys {
                    set.add(k);
                }
                keys.iter().filter(|k| set.find(black_box(k))).count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add_find);
criterion_main!(benches);
