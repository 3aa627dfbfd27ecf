//! AVX2+FMA row conversion, eight pixels per step.

#![allow(unsafe_op_in_unsafe_fn)]

use std::arch::x86_64::*;

use super::scalar::{self, LUMA_B, LUMA_G, LUMA_R};
use crate::lane::PIXEL_LANES;

pub(super) fn row(src: &[u32], dst: &mut [u32]) {
    let mut src_chunks = src.chunks_exact(PIXEL_LANES);
    let mut dst_chunks = dst.chunks_exact_mut(PIXEL_LANES);
    for (d, s) in (&mut dst_chunks).zip(&mut src_chunks) {
        // SAFETY: both chunks hold exactly PIXEL_LANES u32 values (32 bytes), and this
        // module is only compiled when AVX2 and FMA are enabled for the target.
        unsafe {
            let px = _mm256_loadu_si256(s.as_ptr() as *const __m256i);
            _mm256_storeu_si256(d.as_mut_ptr() as *mut __m256i, gray_8(px));
        }
    }
    scalar::row(src_chunks.remainder(), dst_chunks.into_remainder());
}

#[inline]
#[target_feature(enable = "avx2", enable = "fma")]
unsafe fn gray_8(px: __m256i) -> __m256i {
    let byte = _mm256_set1_epi32(0xFF);

    let b = _mm256_cvtepi32_ps(_mm256_and_si256(px, byte));
    let g = _mm256_cvtepi32_ps(_mm256_and_si256(_mm256_srli_epi32::<8>(px), byte));
    let r = _mm256_cvtepi32_ps(_mm256_and_si256(_mm256_srli_epi32::<16>(px), byte));
    let alpha = _mm256_srli_epi32::<24>(px);

    let luma = _mm256_fmadd_ps(
        b,
        _mm256_set1_ps(LUMA_B),
        _mm256_fmadd_ps(
            g,
            _mm256_set1_ps(LUMA_G),
            _mm256_mul_ps(r, _mm256_set1_ps(LUMA_R)),
        ),
    );
    let gray = _mm256_min_epi32(_mm256_cvttps_epi32(luma), byte);

    let bg = _mm256_or_si256(gray, _mm256_slli_epi32::<8>(gray));
    let rgb = _mm256_or_si256(bg, _mm256_slli_epi32::<16>(gray));
    _mm256_or_si256(rgb, _mm256_slli_epi32::<24>(alpha))
}
