//! Lane-parallel kernels.
//!
//! Full lane groups go through the element type's [`LaneVector`]; the tail of fewer
//! than `LANES` elements is computed by the matching [`scalar`](super::scalar) kernel.

use crate::element::{Element, Float};
use crate::lane::{FloatLanes, LaneVector};

use super::{check_binary, scalar};

/// `out[i] = a[i] + b[i]`.
pub fn add<T: Element>(a: &[T], b: &[T], out: &mut [T]) {
    binary(a, b, out, T::Lanes::add, scalar::add);
}

/// `out[i] = a[i] * b[i]`.
pub fn mul<T: Element>(a: &[T], b: &[T], out: &mut [T]) {
    binary(a, b, out, T::Lanes::mul, scalar::mul);
}

/// `out[i] = a[i] / b[i]`.
pub fn div<T: Element>(a: &[T], b: &[T], out: &mut [T]) {
    binary(a, b, out, T::Lanes::div, scalar::div);
}

/// `out[i] = cos(a[i])`. Lane groups use the polynomial cosine from
/// [`trig`](crate::lane::trig); tail elements use `std`.
pub fn cos<T: Float>(a: &[T], out: &mut [T]) {
    let n = out.len();
    assert!(a.len() >= n, "input length {} shorter than output length {n}", a.len());
    let lanes = <T::Lanes as LaneVector>::LANES;

    let mut a_chunks = a[..n].chunks_exact(lanes);
    let mut out_chunks = out.chunks_exact_mut(lanes);
    for (o, x) in (&mut out_chunks).zip(&mut a_chunks) {
        T::Lanes::load(x).cos().store(o);
    }
    scalar::cos(a_chunks.remainder(), out_chunks.into_remainder());
}

/// In place: `c[i] = a[i] * b[i] + c[i]`, fused.
pub fn fma<T: Element>(a: &[T], b: &[T], c: &mut [T]) {
    let n = c.len();
    check_binary(a.len(), b.len(), n);
    let lanes = <T::Lanes as LaneVector>::LANES;

    let mut a_chunks = a[..n].chunks_exact(lanes);
    let mut b_chunks = b[..n].chunks_exact(lanes);
    let mut c_chunks = c.chunks_exact_mut(lanes);
    for ((acc, x), y) in (&mut c_chunks).zip(&mut a_chunks).zip(&mut b_chunks) {
        let va = T::Lanes::load(x);
        let vb = T::Lanes::load(y);
        va.mul_add(vb, T::Lanes::load(acc)).store(acc);
    }
    scalar::fma(
        a_chunks.remainder(),
        b_chunks.remainder(),
        c_chunks.into_remainder(),
    );
}

#[inline(always)]
fn binary<V: LaneVector>(
    a: &[V::Elem],
    b: &[V::Elem],
    out: &mut [V::Elem],
    lane_op: impl Fn(V, V) -> V,
    tail: fn(&[V::Elem], &[V::Elem], &mut [V::Elem]),
) {
    let n = out.len();
    check_binary(a.len(), b.len(), n);

    let mut a_chunks = a[..n].chunks_exact(V::LANES);
    let mut b_chunks = b[..n].chunks_exact(V::LANES);
    let mut out_chunks = out.chunks_exact_mut(V::LANES);
    for ((o, x), y) in (&mut out_chunks).zip(&mut a_chunks).zip(&mut b_chunks) {
        lane_op(V::load(x), V::load(y)).store(o);
    }
    tail(
        a_chunks.remainder(),
        b_chunks.remainder(),
        out_chunks.into_remainder(),
    );
}
