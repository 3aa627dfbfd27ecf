//! Benchmark for the scalar and vector kernels.

use criterion::{Criterion, criterion_group, criterion_main};

fn benchmarks(c: &mut Criterion) {
    lanes::benchmarks::benchmarks(c);
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
