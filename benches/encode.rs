use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use multihot::{IndexEncoder, MultiHotEncoder};

fn vocabulary(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("intent_{:05}", i)).collect()
}

fn bench_construction(c: &mut Criterion) {
    for size in [10, 100, 1000, 10000].iter() {
        c.bench_with_input(BenchmarkId::new("new", size), size, |b, &n| {
            let names: Vec<String> = vocabulary(n).into_iter().rev().collect();

            b.iter(|| {
                let encoder = MultiHotEncoder::new(black_box(names.clone())).unwrap();
                black_box(encoder);
            });
        });
    }
}

fn bench_index_sequence(c: &mut Criterion) {
    for size in [10, 100, 1000, 10000].iter() {
        c.bench_with_input(BenchmarkId::new("index_sequence", size), size, |b, &n| {
            let names = vocabulary(n);
            let encoder = MultiHotEncoder::new(names.clone()).unwrap();

            b.iter(|| {
                let indices = encoder.encode_as_index_sequence(black_box(&names)).unwrap();
                black_box(indices);
            });
        });
    }
}

fn bench_sparse_sentence_feature(c: &mut Criterion) {
    for size in [10, 100, 1000, 10000].iter() {
        c.bench_with_input(BenchmarkId::new("sparse_sentence", size), size, |b, &n| {
            let names = vocabulary(n);
            let encoder = MultiHotEncoder::new(names.clone()).unwrap();

            b.iter(|| {
                let features = encoder
                    .encode_as_sparse_sentence_feature(
                        black_box(&names).iter().step_by(3).map(|name| (name, 1.0)),
                    )
                    .unwrap();
                black_box(features);
            });
        });
    }
}

criterion_group!(
    benches,
    bench_construction,
    bench_index_sequence,
    bench_sparse_sentence_feature
);
criterion_main!(benches);
