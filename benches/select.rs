use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lazeq::{Sequence, from_iter, range};

const N: i64 = 100_000;

fn bench_select(c: &mut Criterion) {
    let source: Vec<i64> = (0..N).collect();

    c.bench_function("native vec map", |b| {
        b.iter(|| {
            let out: Vec<i64> = black_box(&source).iter().map(|n| n * 3).collect();
            assert_eq!(out.len(), N as usize);
            out
        });
    });

    let realized = from_iter(source.clone()).select(|n: &i64| n * 3);
    c.bench_function("select from realized items", |b| {
        b.iter(|| {
            let out = black_box(&realized).to_vec();
            assert_eq!(out.len(), N as usize);
            out
        });
    });

    let generated = range(0, N).select(|n: &i64| n * 3);
    c.bench_function("select from range", |b| {
        b.iter(|| {
            let out = black_box(&generated).to_vec();
            assert_eq!(out.len(), N as usize);
            out
        });
    });
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
