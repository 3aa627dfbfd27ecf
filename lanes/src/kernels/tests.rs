//! Scalar/vector parity tests.

use rand::distr::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::IntoEnumIterator;

use super::*;
use crate::element::{DataType, Element, Float};
use crate::lane::LaneVector;

/// Lengths around the lane boundary: 0, 1, L-1, L, L+1, 10L+3.
fn boundary_lengths<T: Element>() -> [usize; 6] {
    let l = <T::Lanes as LaneVector>::LANES;
    [0, 1, l - 1, l, l + 1, 10 * l + 3]
}

fn random_vec<T>(rng: &mut StdRng, n: usize, lo: T, hi: T) -> Vec<T>
where
    T: SampleUniform + Copy + PartialOrd,
{
    (0..n).map(|_| rng.random_range(lo..hi)).collect()
}

fn assert_same<T: Element>(expected: &[T], actual: &[T], what: &str) {
    assert_eq!(expected.len(), actual.len(), "{what}: length");
    for (i, (&e, &a)) in expected.iter().zip(actual).enumerate() {
        assert!(e.same(a), "{what}: index {i}: scalar {e:?} vs vector {a:?}");
    }
}

type Binary<T> = fn(&[T], &[T], &mut [T]);

fn binary_kernels<T: Element>() -> [(&'static str, Binary<T>, Binary<T>); 3] {
    [
        ("add", scalar::add::<T>, vector::add::<T>),
        ("mul", scalar::mul::<T>, vector::mul::<T>),
        ("div", scalar::div::<T>, vector::div::<T>),
    ]
}

fn check_binary_parity<T: Element>(a: &[T], b: &[T]) {
    let n = a.len();
    for (name, scalar_kernel, vector_kernel) in binary_kernels::<T>() {
        let mut expected = vec![T::default(); n];
        let mut actual = vec![T::default(); n];
        scalar_kernel(a, b, &mut expected);
        vector_kernel(a, b, &mut actual);
        assert_same(&expected, &actual, &format!("{name} {:?} n={n}", T::DATA_TYPE));
    }

    let mut expected: Vec<T> = b.iter().rev().copied().collect();
    let mut actual = expected.clone();
    scalar::fma(a, b, &mut expected);
    vector::fma(a, b, &mut actual);
    assert_same(&expected, &actual, &format!("fma {:?} n={n}", T::DATA_TYPE));
}

fn check_cos_close<T: Float>(a: &[T], tolerance: f64) {
    let n = a.len();
    let lanes = <T::Lanes as LaneVector>::LANES;
    let mut expected = vec![T::default(); n];
    let mut actual = vec![T::default(); n];
    scalar::cos(a, &mut expected);
    vector::cos(a, &mut actual);

    for i in 0..n {
        let err = expected[i].abs_diff(actual[i]);
        assert!(err <= tolerance, "cos {:?} n={n} index {i}: error {err}", T::DATA_TYPE);
    }
    // Tail elements come from the scalar kernel and must match exactly.
    let tail_start = n - n % lanes;
    assert_same(&expected[tail_start..], &actual[tail_start..], "cos tail");
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn add_f32_eight_elements() {
    let a = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let b = [2.0f32, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    let expected = [3.0f32, 5.0, 7.0, 9.0, 11.0, 13.0, 15.0, 17.0];

    let mut out = [0.0f32; 8];
    scalar::add(&a, &b, &mut out);
    assert_eq!(out, expected);

    let mut out = [0.0f32; 8];
    vector::add(&a, &b, &mut out);
    assert_eq!(out, expected);
}

#[test]
fn empty_input_is_a_no_op() {
    let mut out: [f64; 0] = [];
    vector::add(&[], &[], &mut out);
    vector::cos(&[], &mut out);
    scalar::div(&[], &[], &mut out);
    vector::fma(&[], &[], &mut out);
}

#[test]
fn longer_inputs_are_truncated_to_output_length() {
    let a: Vec<i32> = (1..=20).collect();
    let b = vec![10i32; 20];
    let mut out = vec![0i32; 9];
    vector::mul(&a, &b, &mut out);
    assert_eq!(out, (1..=9).map(|x| x * 10).collect::<Vec<_>>());
}

#[test]
#[should_panic(expected = "shorter than output length")]
fn short_input_panics() {
    let mut out = [0.0f32; 4];
    vector::add(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0], &mut out);
}

#[test]
fn kernels_do_not_modify_inputs() {
    let a: Vec<f32> = (0..37).map(|i| i as f32 * 0.5).collect();
    let b: Vec<f32> = (0..37).map(|i| i as f32 + 1.0).collect();
    let (a0, b0) = (a.clone(), b.clone());
    let mut out = vec![0.0f32; 37];
    vector::div(&a, &b, &mut out);
    vector::cos(&a, &mut out);
    vector::fma(&a, &b, &mut out);
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

// ---------------------------------------------------------------------------
// Parity over lane boundaries
// ---------------------------------------------------------------------------

#[test]
fn arithmetic_parity_f32_boundary_lengths() {
    let mut rng = StdRng::seed_from_u64(1);
    for n in boundary_lengths::<f32>() {
        let a = random_vec(&mut rng, n, -1e3f32, 1e3);
        let b = random_vec(&mut rng, n, -1e3f32, 1e3);
        check_binary_parity(&a, &b);
    }
}

#[test]
fn arithmetic_parity_f64_boundary_lengths() {
    let mut rng = StdRng::seed_from_u64(2);
    for n in boundary_lengths::<f64>() {
        let a = random_vec(&mut rng, n, -1e6f64, 1e6);
        let b = random_vec(&mut rng, n, -1e6f64, 1e6);
        check_binary_parity(&a, &b);
    }
}

#[test]
fn arithmetic_parity_i32_boundary_lengths() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in boundary_lengths::<i32>() {
        let a = random_vec(&mut rng, n, i32::MIN, i32::MAX);
        let b = random_vec(&mut rng, n, -1000i32, 1000);
        check_binary_parity(&a, &b);
    }
}

#[test]
fn arithmetic_parity_large_random() {
    let mut rng = StdRng::seed_from_u64(4);
    let n = 10_007;
    check_binary_parity(
        &random_vec(&mut rng, n, -1e30f32, 1e30),
        &random_vec(&mut rng, n, -1e-30f32, 1e30),
    );
    check_binary_parity(
        &random_vec(&mut rng, n, -1e300f64, 1e300),
        &random_vec(&mut rng, n, -1e-300f64, 1e300),
    );
    check_binary_parity(
        &random_vec(&mut rng, n, i32::MIN, i32::MAX),
        &random_vec(&mut rng, n, i32::MIN, i32::MAX),
    );
}

#[test]
fn sweep_style_inputs_match() {
    let n = 1003;
    let a: Vec<f32> = (0..n).map(|i| f32::from_index(i, 1)).collect();
    let b: Vec<f32> = (0..n).map(|i| f32::from_index(i, 2)).collect();
    check_binary_parity(&a, &b);

    let a: Vec<i32> = (0..n).map(|i| i32::from_index(i, 1)).collect();
    let b: Vec<i32> = (0..n).map(|i| i32::from_index(i, 2)).collect();
    check_binary_parity(&a, &b);
}

// ---------------------------------------------------------------------------
// Special values
// ---------------------------------------------------------------------------

#[test]
fn float_special_values_match() {
    let specials = [
        f32::NAN,
        f32::INFINITY,
        f32::NEG_INFINITY,
        0.0,
        -0.0,
        f32::MIN_POSITIVE,
        f32::MAX,
        f32::MIN,
        1.0,
        -1.0,
        1e-45,
    ];
    // Every pair, so division by zero and inf - inf style cases are all covered.
    let a: Vec<f32> = specials.iter().flat_map(|&x| specials.iter().map(move |_| x)).collect();
    let b: Vec<f32> = specials.iter().flat_map(|_| specials.iter().copied()).collect();
    check_binary_parity(&a, &b);

    let a64: Vec<f64> = a.iter().map(|&x| x as f64).collect();
    let b64: Vec<f64> = b.iter().map(|&x| x as f64).collect();
    check_binary_parity(&a64, &b64);
}

#[test]
fn float_division_by_zero() {
    let a = [1.0f32, -1.0, 0.0, f32::NAN, 5.0, 6.0, 7.0, 8.0, 9.0];
    let b = [0.0f32, 0.0, 0.0, 0.0, -0.0, 1.0, 1.0, 1.0, 0.0];
    let mut out = [0.0f32; 9];
    vector::div(&a, &b, &mut out);
    assert_eq!(out[0], f32::INFINITY);
    assert_eq!(out[1], f32::NEG_INFINITY);
    assert!(out[2].is_nan());
    assert!(out[3].is_nan());
    assert_eq!(out[4], f32::NEG_INFINITY);
    assert_eq!(out[8], f32::INFINITY);
}

#[test]
fn i32_division_special_cases() {
    let a = [10, -10, i32::MIN, i32::MIN, 0, 7, -7, 1, i32::MIN, 3, 9];
    let b = [3, 3, -1, 1, 0, 0, -2, i32::MIN, 2, -1, 0];
    let expected = [3, -3, i32::MIN, i32::MIN, i32::MIN, i32::MIN, 3, 0, -(1 << 30), -3, i32::MIN];

    let mut out = [0i32; 11];
    scalar::div(&a, &b, &mut out);
    assert_eq!(out, expected);
    vector::div(&a, &b, &mut out);
    assert_eq!(out, expected);
}

#[test]
fn i32_overflow_wraps_on_both_paths() {
    let a = [i32::MAX, i32::MIN, 46341, -2, i32::MAX];
    let b = [1, -1, 46341, i32::MIN, i32::MAX];
    let mut expected = [0i32; 5];
    let mut actual = [0i32; 5];

    scalar::add(&a, &b, &mut expected);
    vector::add(&a, &b, &mut actual);
    assert_eq!(expected, [i32::MIN, i32::MAX, 92682, i32::MAX - 1, -2]);
    assert_eq!(expected, actual);

    scalar::mul(&a, &b, &mut expected);
    vector::mul(&a, &b, &mut actual);
    assert_eq!(expected, actual);
    assert_eq!(expected[2], 46341i32.wrapping_mul(46341));
}

#[test]
fn fma_is_fused() {
    // 1 + 2^-12 squared needs 25 bits; an unfused multiply would round away the 2^-24 term.
    let x = 1.0f32 + f32::EPSILON * 2048.0;
    let a = vec![x; 19];
    let b = vec![x; 19];
    let mut c = vec![-1.0f32; 19];
    let mut c_scalar = c.clone();
    vector::fma(&a, &b, &mut c);
    scalar::fma(&a, &b, &mut c_scalar);
    let exact = x.mul_add(x, -1.0);
    assert_ne!(exact, x * x - 1.0);
    assert!(c.iter().all(|&v| v == exact));
    assert_eq!(c, c_scalar);
}

// ---------------------------------------------------------------------------
// Cosine
// ---------------------------------------------------------------------------

#[test]
fn cos_f32_within_tolerance() {
    let mut rng = StdRng::seed_from_u64(5);
    for n in boundary_lengths::<f32>().into_iter().chain([4099]) {
        let a = random_vec(&mut rng, n, -1e3f32, 1e3);
        check_cos_close(&a, 1e-5);
    }
}

#[test]
fn cos_f64_within_tolerance() {
    let mut rng = StdRng::seed_from_u64(6);
    for n in boundary_lengths::<f64>().into_iter().chain([4099]) {
        let a = random_vec(&mut rng, n, -1e3f64, 1e3);
        check_cos_close(&a, 1e-12);
    }
}

#[test]
fn cos_non_finite_inputs_give_nan() {
    let a = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, f64::NAN];
    let mut out = [0.0f64; 5];
    vector::cos(&a, &mut out);
    assert!(out[0].is_nan() && out[1].is_nan() && out[2].is_nan() && out[4].is_nan());
    assert!((out[3] - 1.0).abs() < 1e-15);
}

// ---------------------------------------------------------------------------
// Op
// ---------------------------------------------------------------------------

#[test]
fn op_names_round_trip_through_strings() {
    for op in Op::iter() {
        let name = op.to_string();
        assert_eq!(name.parse::<Op>().unwrap(), op);
    }
    assert_eq!(Op::Fma.to_string(), "fma");
    assert!("sqrt".parse::<Op>().is_err());
}

#[test]
fn op_support_matrix() {
    let supported: Vec<(Op, DataType)> = Op::iter()
        .flat_map(|op| DataType::iter().map(move |dt| (op, dt)))
        .filter(|&(op, dt)| op.supports(dt))
        .collect();

    assert_eq!(supported.len(), 4 * 3 + 2 + 1);
    assert!(Op::Cos.supports(DataType::F64));
    assert!(!Op::Cos.supports(DataType::I32));
    assert!(!Op::Add.supports(DataType::Bgra8));
    assert!(Op::Luminance.supports(DataType::Bgra8));
    assert!(!Op::Luminance.supports(DataType::F32));
}
