//! Build-time backend selection.
//!
//! Lane kernels come in two variants: AVX2+FMA intrinsics, compiled when the target
//! enables both features, and a portable array-backed variant for everything else.
//! Exactly one of the two blocks survives compilation, so no runtime dispatch exists.

/// Items compiled only when the target enables AVX2 and FMA on x86_64.
#[macro_export]
macro_rules! cfg_avx2 {
    ($($item:item)*) => {
        $(
            #[cfg(all(
                target_arch = "x86_64",
                target_feature = "avx2",
                target_feature = "fma"
            ))]
            $item
        )*
    };
}

/// Items compiled whenever the AVX2+FMA backend is not available.
#[macro_export]
macro_rules! cfg_portable {
    ($($item:item)*) => {
        $(
            #[cfg(not(all(
                target_arch = "x86_64",
                target_feature = "avx2",
                target_feature = "fma"
            )))]
            $item
        )*
    };
}

/// Returns true when the AVX2+FMA backend was compiled in.
pub const fn has_avx2_fma() -> bool {
    cfg!(all(
        target_arch = "x86_64",
        target_feature = "avx2",
        target_feature = "fma"
    ))
}
