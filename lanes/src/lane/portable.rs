//! Array-backed lane vectors for targets without AVX2+FMA.
//!
//! Each lane applies the scalar element operation, so results match the scalar kernels
//! exactly. The fixed-size loops are left to the compiler's auto-vectorizer.

use crate::element::Element;

use super::trig::{cos_f32, cos_f64};
use super::{F32_LANES, F64_LANES, FloatLanes, I32_LANES, LaneVector};

macro_rules! array_lanes {
    ($name:ident, $elem:ty, $lanes:expr) => {
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name([$elem; $lanes]);

        impl $name {
            #[inline(always)]
            fn zip_map(self, rhs: Self, f: impl Fn($elem, $elem) -> $elem) -> Self {
                Self(std::array::from_fn(|i| f(self.0[i], rhs.0[i])))
            }
        }

        impl LaneVector for $name {
            type Elem = $elem;
            const LANES: usize = $lanes;

            #[inline(always)]
            fn load(src: &[$elem]) -> Self {
                let mut lanes = [<$elem>::default(); $lanes];
                lanes.copy_from_slice(&src[..$lanes]);
                Self(lanes)
            }

            #[inline(always)]
            fn store(self, dst: &mut [$elem]) {
                dst[..$lanes].copy_from_slice(&self.0);
            }

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self.zip_map(rhs, <$elem>::scalar_add)
            }

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                self.zip_map(rhs, <$elem>::scalar_mul)
            }

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                self.zip_map(rhs, <$elem>::scalar_div)
            }

            #[inline(always)]
            fn mul_add(self, b: Self, c: Self) -> Self {
                Self(std::array::from_fn(|i| self.0[i].scalar_fma(b.0[i], c.0[i])))
            }
        }
    };
}

array_lanes!(F32x8, f32, F32_LANES);
array_lanes!(F64x4, f64, F64_LANES);
array_lanes!(I32x4, i32, I32_LANES);

impl FloatLanes for F32x8 {
    #[inline(always)]
    fn cos(self) -> Self {
        Self(self.0.map(cos_f32))
    }
}

impl FloatLanes for F64x4 {
    #[inline(always)]
    fn cos(self) -> Self {
        Self(self.0.map(cos_f64))
    }
}
