//! Quick scalar vs vector benchmarks for the elementwise kernels.

use ::bench::quick_bench;
use std::hint::black_box;

use super::{Op, scalar, vector};
use crate::compare::measure_pair;
use crate::element::DataType;

const BENCH_SIZE: usize = 1 << 20;

fn make_inputs<T: crate::element::Element>() -> (Vec<T>, Vec<T>, Vec<T>) {
    let a = (0..BENCH_SIZE).map(|i| T::from_index(i, 1)).collect();
    let b = (0..BENCH_SIZE).map(|i| T::from_index(i, 2)).collect();
    (a, b, vec![T::default(); BENCH_SIZE])
}

#[quick_bench(repetitions = 50)]
fn bench_add_f32(b: ::bench::Bencher) {
    let (x, y, mut out) = make_inputs::<f32>();

    b.bench_labeled("scalar", || scalar::add(black_box(&x), black_box(&y), &mut out));
    b.bench_labeled("vector", || vector::add(black_box(&x), black_box(&y), &mut out));
}

#[quick_bench(repetitions = 50)]
fn bench_div_f64(b: ::bench::Bencher) {
    let (x, y, mut out) = make_inputs::<f64>();

    b.bench_labeled("scalar", || scalar::div(black_box(&x), black_box(&y), &mut out));
    b.bench_labeled("vector", || vector::div(black_box(&x), black_box(&y), &mut out));
}

#[quick_bench(repetitions = 50)]
fn bench_div_i32(b: ::bench::Bencher) {
    let (x, y, mut out) = make_inputs::<i32>();

    b.bench_labeled("scalar", || scalar::div(black_box(&x), black_box(&y), &mut out));
    b.bench_labeled("vector", || vector::div(black_box(&x), black_box(&y), &mut out));
}

#[quick_bench(repetitions = 20)]
fn bench_cos_f32(b: ::bench::Bencher) {
    let (x, _, mut out) = make_inputs::<f32>();

    b.bench_labeled("scalar", || scalar::cos(black_box(&x), &mut out));
    b.bench_labeled("vector", || vector::cos(black_box(&x), &mut out));
}

#[quick_bench(repetitions = 50)]
fn bench_fma_f32(b: ::bench::Bencher) {
    let (x, y, mut acc) = make_inputs::<f32>();

    b.bench_labeled("scalar", || scalar::fma(black_box(&x), black_box(&y), &mut acc));
    b.bench_labeled("vector", || vector::fma(black_box(&x), black_box(&y), &mut acc));
}

// Vector arithmetic must not lose to the scalar reference on large buffers.
#[test]
#[ignore = "timing-sensitive; run with --ignored --release"]
fn vector_arithmetic_not_slower_at_two_million() {
    const SIZE: usize = 2_000_000;
    const SLACK: f64 = 1.05;

    let mut slower = Vec::new();
    for op in [Op::Add, Op::Mul, Op::Div, Op::Fma] {
        for data_type in [DataType::F32, DataType::F64, DataType::I32] {
            let sample = measure_pair(op, data_type, SIZE, 30).unwrap();
            if sample.vector_ms() > sample.scalar_ms() * SLACK {
                slower.push(format!(
                    "{op} {data_type}: scalar {:.4} ms, vector {:.4} ms",
                    sample.scalar_ms(),
                    sample.vector_ms()
                ));
            }
        }
    }
    assert!(slower.is_empty(), "vector slower than scalar:\n{}", slower.join("\n"));
}
