//! Elementwise numeric kernels in scalar and lane-parallel form, plus the tooling that
//! times one against the other.
//!
//! - [`kernels`]: add, mul, div, cos and fma over `f32`, `f64` and `i32` slices.
//! - [`luminance`]: packed BGRA pixels to grayscale.
//! - [`compare`]: size sweeps that measure every kernel pair.
//! - [`report`]: table and JSON output of the measurements.
//!
//! The vector backend is chosen at build time: AVX2+FMA on x86_64 targets that enable
//! both features (see `.cargo/config.toml`), a portable fixed-width backend elsewhere.

pub mod buffer;
pub mod cli;
pub mod compare;
pub mod element;
pub mod error;
pub mod kernels;
pub mod lane;
pub mod luminance;
pub mod report;

#[cfg(feature = "bench")]
pub mod benchmarks;

pub use buffer::NumericBuffer;
pub use compare::{MeasurementSample, SweepConfig, SweepOutcome, run_sweep};
pub use element::{DataType, Element, Float};
pub use error::{Error, Result};
pub use kernels::Op;
pub use lane::BACKEND;
pub use luminance::PixelBuffer;
pub use report::{Grouping, render_json, render_table};
