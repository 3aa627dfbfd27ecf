//! Portable row conversion in fixed groups of eight pixels.

use super::scalar::{self, gray_pixel};
use crate::lane::PIXEL_LANES;

pub(super) fn row(src: &[u32], dst: &mut [u32]) {
    let mut src_chunks = src.chunks_exact(PIXEL_LANES);
    let mut dst_chunks = dst.chunks_exact_mut(PIXEL_LANES);
    for (d, s) in (&mut dst_chunks).zip(&mut src_chunks) {
        let mut group = [0u32; PIXEL_LANES];
        group.copy_from_slice(s);
        d.copy_from_slice(&group.map(gray_pixel));
    }
    scalar::row(src_chunks.remainder(), dst_chunks.into_remainder());
}
