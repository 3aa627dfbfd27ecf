//! AVX2+FMA lane vectors (x86_64).
//!
//! Compiled only when the target enables both features, so every intrinsic below is
//! available on the running CPU.

#![allow(unsafe_op_in_unsafe_fn)]
#![allow(unused_unsafe)]

use std::arch::x86_64::*;

use super::trig::{
    PI_A_F32, PI_A_F64, PI_B_F32, PI_B_F64, PI_C_F32, PI_C_F64, SIN_POLY_F32, SIN_POLY_F64,
};
use super::{F32_LANES, F64_LANES, FloatLanes, I32_LANES, LaneVector};

#[derive(Clone, Copy, Debug)]
pub struct F32x8(__m256);

#[derive(Clone, Copy, Debug)]
pub struct F64x4(__m256d);

#[derive(Clone, Copy, Debug)]
pub struct I32x4(__m128i);

impl LaneVector for F32x8 {
    type Elem = f32;
    const LANES: usize = F32_LANES;

    #[inline(always)]
    fn load(src: &[f32]) -> Self {
        assert!(src.len() >= Self::LANES);
        // SAFETY: length checked above; loadu has no alignment requirement.
        Self(unsafe { _mm256_loadu_ps(src.as_ptr()) })
    }

    #[inline(always)]
    fn store(self, dst: &mut [f32]) {
        assert!(dst.len() >= Self::LANES);
        // SAFETY: length checked above.
        unsafe { _mm256_storeu_ps(dst.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_add_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_mul_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_div_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul_add(self, b: Self, c: Self) -> Self {
        Self(unsafe { _mm256_fmadd_ps(self.0, b.0, c.0) })
    }
}

impl FloatLanes for F32x8 {
    #[inline(always)]
    fn cos(self) -> Self {
        Self(unsafe { cos_ps(self.0) })
    }
}

impl LaneVector for F64x4 {
    type Elem = f64;
    const LANES: usize = F64_LANES;

    #[inline(always)]
    fn load(src: &[f64]) -> Self {
        assert!(src.len() >= Self::LANES);
        // SAFETY: length checked above; loadu has no alignment requirement.
        Self(unsafe { _mm256_loadu_pd(src.as_ptr()) })
    }

    #[inline(always)]
    fn store(self, dst: &mut [f64]) {
        assert!(dst.len() >= Self::LANES);
        // SAFETY: length checked above.
        unsafe { _mm256_storeu_pd(dst.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_add_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_mul_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_div_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul_add(self, b: Self, c: Self) -> Self {
        Self(unsafe { _mm256_fmadd_pd(self.0, b.0, c.0) })
    }
}

impl FloatLanes for F64x4 {
    #[inline(always)]
    fn cos(self) -> Self {
        Self(unsafe { cos_pd(self.0) })
    }
}

impl LaneVector for I32x4 {
    type Elem = i32;
    const LANES: usize = I32_LANES;

    #[inline(always)]
    fn load(src: &[i32]) -> Self {
        assert!(src.len() >= Self::LANES);
        // SAFETY: length checked above; loadu has no alignment requirement.
        Self(unsafe { _mm_loadu_si128(src.as_ptr() as *const __m128i) })
    }

    #[inline(always)]
    fn store(self, dst: &mut [i32]) {
        assert!(dst.len() >= Self::LANES);
        // SAFETY: length checked above.
        unsafe { _mm_storeu_si128(dst.as_mut_ptr() as *mut __m128i, self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { _mm_mullo_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(unsafe { div_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul_add(self, b: Self, c: Self) -> Self {
        Self(unsafe { _mm_add_epi32(_mm_mullo_epi32(self.0, b.0), c.0) })
    }
}

/// Truncating i32 division through f64.
///
/// Every i32 is exact in f64 and the correctly rounded quotient never crosses an
/// integer boundary, so truncation gives the exact integer quotient. Division by zero
/// (±inf or NaN) and `i32::MIN / -1` (2^31) are out of range for the conversion, which
/// then returns `i32::MIN`, matching the scalar rule.
#[inline]
#[target_feature(enable = "avx2")]
unsafe fn div_epi32(a: __m128i, b: __m128i) -> __m128i {
    let q = _mm256_div_pd(_mm256_cvtepi32_pd(a), _mm256_cvtepi32_pd(b));
    _mm256_cvttpd_epi32(q)
}

#[inline]
#[target_feature(enable = "avx2", enable = "fma")]
unsafe fn cos_ps(d: __m256) -> __m256 {
    let half = _mm256_set1_ps(0.5);

    let scaled = _mm256_sub_ps(_mm256_mul_ps(d, _mm256_set1_ps(std::f32::consts::FRAC_1_PI)), half);
    let k = _mm256_round_ps::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(scaled);
    let qh = _mm256_add_ps(k, half);

    let mut r = _mm256_fnmadd_ps(qh, _mm256_set1_ps(PI_A_F32), d);
    r = _mm256_fnmadd_ps(qh, _mm256_set1_ps(PI_B_F32), r);
    r = _mm256_fnmadd_ps(qh, _mm256_set1_ps(PI_C_F32), r);

    // Negate lanes where k is even.
    let h = _mm256_mul_ps(k, half);
    let frac = _mm256_sub_ps(h, _mm256_floor_ps(h));
    let even = _mm256_cmp_ps::<_CMP_EQ_OQ>(frac, _mm256_setzero_ps());
    r = _mm256_xor_ps(r, _mm256_and_ps(even, _mm256_set1_ps(-0.0)));

    let s = _mm256_mul_ps(r, r);
    let mut u = _mm256_set1_ps(SIN_POLY_F32[0]);
    for &c in &SIN_POLY_F32[1..] {
        u = _mm256_fmadd_ps(u, s, _mm256_set1_ps(c));
    }
    _mm256_fmadd_ps(s, _mm256_mul_ps(u, r), r)
}

#[inline]
#[target_feature(enable = "avx2", enable = "fma")]
unsafe fn cos_pd(d: __m256d) -> __m256d {
    let half = _mm256_set1_pd(0.5);

    let scaled = _mm256_sub_pd(_mm256_mul_pd(d, _mm256_set1_pd(std::f64::consts::FRAC_1_PI)), half);
    let k = _mm256_round_pd::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(scaled);
    let qh = _mm256_add_pd(k, half);

    let mut r = _mm256_fnmadd_pd(qh, _mm256_set1_pd(PI_A_F64), d);
    r = _mm256_fnmadd_pd(qh, _mm256_set1_pd(PI_B_F64), r);
    r = _mm256_fnmadd_pd(qh, _mm256_set1_pd(PI_C_F64), r);

    let h = _mm256_mul_pd(k, half);
    let frac = _mm256_sub_pd(h, _mm256_floor_pd(h));
    let even = _mm256_cmp_pd::<_CMP_EQ_OQ>(frac, _mm256_setzero_pd());
    r = _mm256_xor_pd(r, _mm256_and_pd(even, _mm256_set1_pd(-0.0)));

    let s = _mm256_mul_pd(r, r);
    let mut u = _mm256_set1_pd(SIN_POLY_F64[0]);
    for &c in &SIN_POLY_F64[1..] {
        u = _mm256_fmadd_pd(u, s, _mm256_set1_pd(c));
    }
    _mm256_fmadd_pd(s, _mm256_mul_pd(u, r), r)
}
