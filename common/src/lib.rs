//! Helpers shared by the workspace crates: backend gating macros, logging setup and
//! test scratch files.

#[macro_use]
pub mod macros;
pub mod log_setup;
pub mod test_utils;

pub use macros::has_avx2_fma;

/// True in builds with debug assertions, where timings are not meaningful.
pub fn is_debug() -> bool {
    cfg!(debug_assertions)
}
