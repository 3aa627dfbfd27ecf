//! Elementwise kernels in two flavors with identical signatures.
//!
//! [`scalar`] processes one element per step and is the ground truth. [`vector`]
//! processes [`LaneVector::LANES`](crate::lane::LaneVector::LANES) elements per step and
//! hands the remaining `n mod LANES` elements to the scalar kernel.
//!
//! The element count `n` is always `out.len()` (for fma, `c.len()`); input slices must be
//! at least that long. Inputs are never modified; out-of-place kernels may not alias
//! their output with an input, which the borrow checker enforces.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::element::DataType;

pub mod scalar;
pub mod vector;

/// Kernel identity used by the sweep and reports.
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
pub enum Op {
    Add,
    Mul,
    Div,
    Cos,
    Fma,
    Luminance,
}

impl Op {
    /// Human-readable name used in report tables.
    pub fn label(self) -> &'static str {
        match self {
            Op::Add => "Addition",
            Op::Mul => "Multiplication",
            Op::Div => "Division",
            Op::Cos => "Cosine",
            Op::Fma => "FMA",
            Op::Luminance => "Luminance",
        }
    }

    /// Whether a kernel exists for this element type.
    pub fn supports(self, data_type: DataType) -> bool {
        match self {
            Op::Add | Op::Mul | Op::Div | Op::Fma => matches!(
                data_type,
                DataType::F32 | DataType::F64 | DataType::I32
            ),
            Op::Cos => matches!(data_type, DataType::F32 | DataType::F64),
            Op::Luminance => data_type == DataType::Bgra8,
        }
    }
}

#[track_caller]
fn check_binary(a: usize, b: usize, n: usize) {
    assert!(
        a >= n && b >= n,
        "input lengths ({a}, {b}) shorter than output length {n}"
    );
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod bench;
