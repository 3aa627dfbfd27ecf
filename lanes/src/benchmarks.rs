//! Criterion benchmarks for the kernel pairs.
//! Run with: cargo bench -p lanes --features bench --bench kernels

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};

use crate::element::{Element, Float};
use crate::kernels::{scalar, vector};
use crate::luminance;

const SIZES: [usize; 3] = [1024, 16_384, 262_144];

/// Register kernel benchmarks with Criterion.
pub fn benchmarks(c: &mut Criterion) {
    benchmark_binary::<f32>(c, "add_f32", scalar::add, vector::add);
    benchmark_binary::<f64>(c, "div_f64", scalar::div, vector::div);
    benchmark_binary::<i32>(c, "div_i32", scalar::div, vector::div);
    benchmark_binary::<f32>(c, "fma_f32", scalar::fma, vector::fma);
    benchmark_cos::<f32>(c, "cos_f32");
    benchmark_cos::<f64>(c, "cos_f64");
    benchmark_luminance(c);
}

type Binary<T> = fn(&[T], &[T], &mut [T]);

fn benchmark_binary<T: Element>(
    c: &mut Criterion,
    name: &str,
    scalar_kernel: Binary<T>,
    vector_kernel: Binary<T>,
) {
    let mut group = c.benchmark_group(name);

    for size in SIZES {
        let a: Vec<T> = (0..size).map(|i| T::from_index(i, 1)).collect();
        let b: Vec<T> = (0..size).map(|i| T::from_index(i, 2)).collect();
        let mut out = vec![T::default(); size];

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("scalar", size), |bencher| {
            bencher.iter(|| scalar_kernel(black_box(&a), black_box(&b), &mut out))
        });
        group.bench_function(BenchmarkId::new("vector", size), |bencher| {
            bencher.iter(|| vector_kernel(black_box(&a), black_box(&b), &mut out))
        });
    }

    group.finish();
}

fn benchmark_cos<T: Float>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);

    for size in SIZES {
        let a: Vec<T> = (0..size).map(|i| T::from_index(i, 1)).collect();
        let mut out = vec![T::default(); size];

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("scalar", size), |bencher| {
            bencher.iter(|| scalar::cos(black_box(&a), &mut out))
        });
        group.bench_function(BenchmarkId::new("vector", size), |bencher| {
            bencher.iter(|| vector::cos(black_box(&a), &mut out))
        });
    }

    group.finish();
}

fn benchmark_luminance(c: &mut Criterion) {
    let mut group = c.benchmark_group("luminance");

    for size in SIZES {
        let src: Vec<u32> = (0..size as u32).map(|i| i.wrapping_mul(0x9E37_79B1)).collect();
        let mut dst = vec![0u32; size];

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("scalar", size), |bencher| {
            bencher.iter(|| luminance::scalar_row(black_box(&src), &mut dst))
        });
        group.bench_function(BenchmarkId::new("vector", size), |bencher| {
            bencher.iter(|| luminance::vector_row(black_box(&src), &mut dst))
        });
    }

    group.finish();
}
