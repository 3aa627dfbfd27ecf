//! Per-pixel reference conversion.

use std::hint::black_box;

/// BT.601 luma weights.
pub const LUMA_R: f32 = 0.299;
pub const LUMA_G: f32 = 0.587;
pub const LUMA_B: f32 = 0.114;

/// Converts one packed pixel (`b | g << 8 | r << 16 | a << 24`) to gray.
///
/// `gray = fma(b, 0.114, fma(g, 0.587, r * 0.299))`, truncated toward zero and capped
/// at 255, replicated into B, G and R. Alpha is copied unchanged.
#[inline(always)]
pub fn gray_pixel(pixel: u32) -> u32 {
    let b = (pixel & 0xFF) as f32;
    let g = ((pixel >> 8) & 0xFF) as f32;
    let r = ((pixel >> 16) & 0xFF) as f32;
    let a = pixel >> 24;

    let luma = b.mul_add(LUMA_B, g.mul_add(LUMA_G, r * LUMA_R));
    let gray = (luma as u32).min(0xFF);
    gray | (gray << 8) | (gray << 16) | (a << 24)
}

/// Converts a row one pixel at a time. [`black_box`] keeps the loop from being
/// auto-vectorized.
pub fn row(src: &[u32], dst: &mut [u32]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = black_box(gray_pixel(s));
    }
}
