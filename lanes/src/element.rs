//! Element types and their ground-truth scalar semantics.
//!
//! Every kernel, scalar or vector, is defined in terms of the operations on this trait.
//! Float operations follow IEEE-754 (fma is fused, one rounding). `i32` operations wrap
//! on overflow, and division yields `i32::MIN` when the quotient is not representable.

use std::fmt::Debug;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::lane::{F32x8, F64x4, FloatLanes, I32x4, LaneVector};

/// Data-type tag carried by measurement samples and reports.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    F32,
    F64,
    I32,
    /// Packed 8-bit blue, green, red, alpha pixels.
    Bgra8,
}

pub trait Element: Copy + PartialEq + Debug + Default + Send + Sync + 'static {
    const DATA_TYPE: DataType;

    /// Lane vector type used by the vectorized kernels for this element.
    type Lanes: LaneVector<Elem = Self>;

    fn scalar_add(self, rhs: Self) -> Self;
    fn scalar_mul(self, rhs: Self) -> Self;
    fn scalar_div(self, rhs: Self) -> Self;
    /// `self * b + c`.
    fn scalar_fma(self, b: Self, c: Self) -> Self;

    /// Sweep input value for position `index`: `index + offset` converted to `Self`.
    fn from_index(index: usize, offset: usize) -> Self;

    /// Equality used by parity checks: bitwise, except that any two NaNs match.
    fn same(self, other: Self) -> bool;
}

pub trait Float: Element<Lanes: FloatLanes> {
    fn scalar_cos(self) -> Self;

    /// Absolute difference widened to f64; NaN when either side is NaN.
    fn abs_diff(self, other: Self) -> f64;
}

impl Element for f32 {
    const DATA_TYPE: DataType = DataType::F32;
    type Lanes = F32x8;

    #[inline(always)]
    fn scalar_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn scalar_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn scalar_div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline(always)]
    fn scalar_fma(self, b: Self, c: Self) -> Self {
        self.mul_add(b, c)
    }

    fn from_index(index: usize, offset: usize) -> Self {
        (index + offset) as f32
    }

    fn same(self, other: Self) -> bool {
        self.to_bits() == other.to_bits() || (self.is_nan() && other.is_nan())
    }
}

impl Float for f32 {
    #[inline(always)]
    fn scalar_cos(self) -> Self {
        self.cos()
    }

    fn abs_diff(self, other: Self) -> f64 {
        (self as f64 - other as f64).abs()
    }
}

impl Element for f64 {
    const DATA_TYPE: DataType = DataType::F64;
    type Lanes = F64x4;

    #[inline(always)]
    fn scalar_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn scalar_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn scalar_div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline(always)]
    fn scalar_fma(self, b: Self, c: Self) -> Self {
        self.mul_add(b, c)
    }

    fn from_index(index: usize, offset: usize) -> Self {
        (index + offset) as f64
    }

    fn same(self, other: Self) -> bool {
        self.to_bits() == other.to_bits() || (self.is_nan() && other.is_nan())
    }
}

impl Float for f64 {
    #[inline(always)]
    fn scalar_cos(self) -> Self {
        self.cos()
    }

    fn abs_diff(self, other: Self) -> f64 {
        (self - other).abs()
    }
}

impl Element for i32 {
    const DATA_TYPE: DataType = DataType::I32;
    type Lanes = I32x4;

    #[inline(always)]
    fn scalar_add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline(always)]
    fn scalar_mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }

    /// Truncating division; `i32::MIN` for a zero divisor and for `i32::MIN / -1`.
    #[inline(always)]
    fn scalar_div(self, rhs: Self) -> Self {
        self.checked_div(rhs).unwrap_or(i32::MIN)
    }

    #[inline(always)]
    fn scalar_fma(self, b: Self, c: Self) -> Self {
        self.wrapping_mul(b).wrapping_add(c)
    }

    fn from_index(index: usize, offset: usize) -> Self {
        (index + offset) as i32
    }

    fn same(self, other: Self) -> bool {
        self == other
    }
}
