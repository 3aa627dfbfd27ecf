//! Fixed-width lane vectors.
//!
//! Kernels are written once against [`LaneVector`]; the concrete types come from one of
//! two backends chosen at build time:
//!
//! - `avx2`: 256-bit AVX2+FMA registers (`__m256`, `__m256d`) and 128-bit SSE4.1 for `i32`.
//! - `portable`: plain arrays of the same widths whose lanes apply the scalar element
//!   operations, for targets without AVX2+FMA.
//!
//! Both backends produce bit-identical results to the scalar element operations for
//! add/mul/div/fma. Cosine uses the polynomial in [`trig`], evaluated the same way per
//! lane on both backends.

pub mod trig;

use crate::element::Element;

/// Lanes per `f32` vector.
pub const F32_LANES: usize = 8;
/// Lanes per `f64` vector.
pub const F64_LANES: usize = 4;
/// Lanes per `i32` vector.
pub const I32_LANES: usize = 4;
/// Pixels converted per luminance step.
pub const PIXEL_LANES: usize = 8;

/// Name of the backend compiled into this build.
pub const BACKEND: &str = if common::has_avx2_fma() {
    "avx2+fma"
} else {
    "portable"
};

/// A fixed number of elements processed by one instruction.
pub trait LaneVector: Copy {
    type Elem: Element;
    const LANES: usize;

    /// Loads the first `LANES` elements of `src`. Panics if `src` is shorter.
    fn load(src: &[Self::Elem]) -> Self;
    /// Stores into the first `LANES` elements of `dst`. Panics if `dst` is shorter.
    fn store(self, dst: &mut [Self::Elem]);

    fn add(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn div(self, rhs: Self) -> Self;
    /// `self * b + c` per lane.
    fn mul_add(self, b: Self, c: Self) -> Self;
}

/// Lane vectors of floating-point elements.
pub trait FloatLanes: LaneVector {
    fn cos(self) -> Self;
}

common::cfg_avx2! {
    mod avx2;
    pub use avx2::{F32x8, F64x4, I32x4};
}

common::cfg_portable! {
    mod portable;
    pub use portable::{F32x8, F64x4, I32x4};
}
