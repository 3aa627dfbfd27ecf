//! Lane cosine.
//!
//! `x` is reduced by the nearest odd multiple of pi/2, `x = (k + 1/2) * pi + r` with
//! `|r| <= pi/2`, using a three-part Cody-Waite split of pi. Then `cos(x) = ±sin(r)`,
//! negated when `k` is even, and `sin(r)` is an odd minimax polynomial.
//!
//! Max absolute error against `std` cosine: about 1e-7 (f32) and 4e-16 (f64) for
//! `|x| <= 1e3`. Accuracy degrades for much larger arguments because the reduction
//! is not exact there.
//!
//! The functions here evaluate one lane. The AVX2 backend runs the same sequence of
//! roundings on eight (or four) lanes at once and must stay in step with them.

/// `pi = PI_A + PI_B + PI_C`, each part exact in f32 with trailing zero bits.
pub const PI_A_F32: f32 = 3.1414794921875;
pub const PI_B_F32: f32 = 0.000_113_159_418_106_079_101_56;
pub const PI_C_F32: f32 = 1.984_187_258_941_005_893_6e-9;

/// `sin(r) ≈ r + r³·P(r²)`, coefficients of `P` from highest degree.
pub const SIN_POLY_F32: [f32; 4] = [
    2.608_315_980_978_659_354_150_3e-6,
    -0.000_198_106_907_191_686_332_225_8,
    0.008_333_078_585_565_090_179_443_36,
    -0.166_666_597_127_914_428_710_938,
];

pub const PI_A_F64: f64 = 3.141_592_621_803_283_691_4;
pub const PI_B_F64: f64 = 3.178_650_942_459_171_346_9e-8;
pub const PI_C_F64: f64 = 1.224_646_786_410_718_850_2e-16;

pub const SIN_POLY_F64: [f64; 9] = [
    -8.220_635_246_624_33e-18,
    2.811_457_254_345_520_6e-15,
    -7.647_163_731_819_816e-13,
    1.605_904_383_682_161_3e-10,
    -2.505_210_838_544_172e-8,
    2.755_731_922_398_589_3e-6,
    -0.000_198_412_698_412_698_4,
    0.008_333_333_333_333_333,
    -0.166_666_666_666_666_66,
];

/// Single-lane form of the f32 lane cosine.
#[inline(always)]
pub fn cos_f32(d: f32) -> f32 {
    let k = (d * std::f32::consts::FRAC_1_PI - 0.5).round_ties_even();
    let qh = k + 0.5;

    let mut r = qh.mul_add(-PI_A_F32, d);
    r = qh.mul_add(-PI_B_F32, r);
    r = qh.mul_add(-PI_C_F32, r);

    let h = k * 0.5;
    if h - h.floor() == 0.0 {
        r = -r;
    }

    let s = r * r;
    let mut u = SIN_POLY_F32[0];
    for &c in &SIN_POLY_F32[1..] {
        u = u.mul_add(s, c);
    }
    s.mul_add(u * r, r)
}

/// Single-lane form of the f64 lane cosine.
#[inline(always)]
pub fn cos_f64(d: f64) -> f64 {
    let k = (d * std::f64::consts::FRAC_1_PI - 0.5).round_ties_even();
    let qh = k + 0.5;

    let mut r = qh.mul_add(-PI_A_F64, d);
    r = qh.mul_add(-PI_B_F64, r);
    r = qh.mul_add(-PI_C_F64, r);

    let h = k * 0.5;
    if h - h.floor() == 0.0 {
        r = -r;
    }

    let s = r * r;
    let mut u = SIN_POLY_F64[0];
    for &c in &SIN_POLY_F64[1..] {
        u = u.mul_add(s, c);
    }
    s.mul_add(u * r, r)
}
