//! Packed BGRA to grayscale conversion.
//!
//! Pixels are `u32` values laid out as `b | g << 8 | r << 16 | a << 24`, which is the
//! byte order B, G, R, A in memory on little-endian targets. Rows are contiguous with no
//! padding. Both row kernels produce bit-identical output.

use crate::error::{Error, Result};

pub mod scalar;

common::cfg_avx2! {
    mod avx2;
    use avx2 as backend;
}

common::cfg_portable! {
    mod portable;
    use portable as backend;
}

pub use scalar::gray_pixel;

/// Converts one row a pixel at a time.
pub fn scalar_row(src: &[u32], dst: &mut [u32]) {
    assert_eq!(src.len(), dst.len(), "row width mismatch");
    scalar::row(src, dst);
}

/// Converts one row [`PIXEL_LANES`](crate::lane::PIXEL_LANES) pixels at a time, the
/// remaining `width mod 8` pixels with [`scalar_row`].
pub fn vector_row(src: &[u32], dst: &mut [u32]) {
    assert_eq!(src.len(), dst.len(), "row width mismatch");
    backend::row(src, dst);
}

/// Default row conversion, the vector form.
#[inline]
pub fn luminance_row(src: &[u32], dst: &mut [u32]) {
    vector_row(src, dst);
}

/// A whole image of packed BGRA pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, pixels: Vec<u32>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(Error::PixelBufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a buffer from raw bytes, 4 bytes per pixel.
    ///
    /// Bytes are reinterpreted in native order, which is B, G, R, A on little-endian
    /// targets.
    pub fn from_bgra_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self> {
        let expected = pixel_count(width, height)?
            .checked_mul(size_of::<u32>())
            .ok_or(Error::ImageTooLarge { width, height })?;
        if bytes.len() != expected {
            return Err(Error::PixelBufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: bytemuck::pod_collect_to_vec(bytes),
        })
    }

    pub fn to_bgra_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice::<u32, u8>(&self.pixels).to_vec()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn row(&self, y: usize) -> &[u32] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Gray copy using [`vector_row`]. The source is left untouched.
    pub fn to_grayscale(&self) -> PixelBuffer {
        self.map_rows(vector_row)
    }

    /// Gray copy using [`scalar_row`].
    pub fn to_grayscale_scalar(&self) -> PixelBuffer {
        self.map_rows(scalar_row)
    }

    /// Writes the gray image into `dst` with [`vector_row`]. `dst` must hold exactly one
    /// value per pixel.
    pub fn grayscale_into(&self, dst: &mut [u32]) {
        self.convert_rows(dst, vector_row);
    }

    /// [`grayscale_into`](Self::grayscale_into) with [`scalar_row`].
    pub fn grayscale_into_scalar(&self, dst: &mut [u32]) {
        self.convert_rows(dst, scalar_row);
    }

    fn convert_rows(&self, dst: &mut [u32], row_fn: fn(&[u32], &mut [u32])) {
        assert_eq!(dst.len(), self.pixels.len(), "destination size mismatch");
        if self.width == 0 {
            return;
        }
        for (src_row, dst_row) in self
            .pixels
            .chunks_exact(self.width)
            .zip(dst.chunks_exact_mut(self.width))
        {
            row_fn(src_row, dst_row);
        }
    }

    fn map_rows(&self, row_fn: fn(&[u32], &mut [u32])) -> PixelBuffer {
        let mut pixels = vec![0u32; self.pixels.len()];
        self.convert_rows(&mut pixels, row_fn);
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    /// Nearest-neighbour copy that fits inside `max_width × max_height`, keeping the
    /// aspect ratio. Images that already fit are copied at their own size.
    pub fn fit_within(&self, max_width: usize, max_height: usize) -> PixelBuffer {
        assert!(max_width > 0 && max_height > 0, "target box must be non-empty");

        let ratio_w = self.width as f32 / max_width as f32;
        let ratio_h = self.height as f32 / max_height as f32;
        if self.pixels.is_empty() || (ratio_w <= 1.0 && ratio_h <= 1.0) {
            return self.clone();
        }

        let scale = ratio_w.max(ratio_h);
        let width = ((self.width as f32 / scale) as usize).clamp(1, max_width);
        let height = ((self.height as f32 / scale) as usize).clamp(1, max_height);

        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            let src_row = self.row(y * self.height / height);
            pixels.extend((0..width).map(|x| src_row[x * self.width / width]));
        }
        PixelBuffer {
            width,
            height,
            pixels,
        }
    }
}

fn pixel_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .ok_or(Error::ImageTooLarge { width, height })
}
