//! One-element-at-a-time reference kernels.
//!
//! Every result passes through [`black_box`], which keeps these loops scalar even when
//! the target enables AVX2. Without it the optimizer turns the arithmetic loops into
//! lane loops and the timing baseline stops being scalar.

use std::hint::black_box;

use crate::element::{Element, Float};

use super::check_binary;

/// `out[i] = a[i] + b[i]`.
pub fn add<T: Element>(a: &[T], b: &[T], out: &mut [T]) {
    binary(a, b, out, T::scalar_add);
}

/// `out[i] = a[i] * b[i]`.
pub fn mul<T: Element>(a: &[T], b: &[T], out: &mut [T]) {
    binary(a, b, out, T::scalar_mul);
}

/// `out[i] = a[i] / b[i]`. Float division by zero gives ±inf or NaN; integer rules are
/// on [`Element::scalar_div`].
pub fn div<T: Element>(a: &[T], b: &[T], out: &mut [T]) {
    binary(a, b, out, T::scalar_div);
}

/// `out[i] = cos(a[i])`, radians.
pub fn cos<T: Float>(a: &[T], out: &mut [T]) {
    let n = out.len();
    assert!(a.len() >= n, "input length {} shorter than output length {n}", a.len());
    for (o, &x) in out.iter_mut().zip(a) {
        *o = black_box(x.scalar_cos());
    }
}

/// In place: `c[i] = a[i] * b[i] + c[i]`.
pub fn fma<T: Element>(a: &[T], b: &[T], c: &mut [T]) {
    check_binary(a.len(), b.len(), c.len());
    for ((acc, &x), &y) in c.iter_mut().zip(a).zip(b) {
        *acc = black_box(x.scalar_fma(y, *acc));
    }
}

#[inline(always)]
fn binary<T: Element>(a: &[T], b: &[T], out: &mut [T], op: impl Fn(T, T) -> T) {
    check_binary(a.len(), b.len(), out.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = black_box(op(x, y));
    }
}
