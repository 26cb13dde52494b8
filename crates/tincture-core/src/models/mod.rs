//! Colour-model conversions: HSV, HSL, CMY, CMYK and CIE xyY.
//!
//! Scalar kernels take and return fixed-size arrays. The [`batch`] module
//! exposes the same conversions over [`ColourArray`](crate::ColourArray)s of
//! any rank.
//!
//! Inputs are never range-checked or clamped. The only special cases are the
//! achromatic and black points where the textbook formulas divide by zero.

pub mod batch;
pub mod cie;
pub mod cmy;
pub mod hsl;
pub mod hsv;

pub use cie::{xy_to_xyz, xyy_to_xyz, xyz_to_xy, xyz_to_xyy};
pub use cmy::{cmy_to_cmyk, cmy_to_rgb, cmyk_to_cmy, rgb_to_cmy};
pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};

/// Hue in [0, 1] of an RGB triple with the given maximum and non-zero chroma.
///
/// 60° segment formula with the hue expressed as a fraction of a turn:
/// ```text
/// dR = ((max − R) / 6 + delta / 2) / delta     (likewise dG, dB)
/// R is max → dB − dG
/// G is max → 1/3 + dR − dB
/// B is max → 2/3 + dG − dR
/// ```
pub(crate) fn hue(rgb: [f64; 3], max: f64, delta: f64) -> f64 {
    let [r, g, b] = rgb;
    let channel_delta = |c: f64| ((max - c) / 6.0 + delta / 2.0) / delta;
    let (delta_r, delta_g, delta_b) = (channel_delta(r), channel_delta(g), channel_delta(b));

    let hue = if b == max {
        2.0 / 3.0 + delta_g - delta_r
    } else if g == max {
        1.0 / 3.0 + delta_r - delta_b
    } else {
        delta_b - delta_g
    };

    if hue < 0.0 {
        hue + 1.0
    } else if hue > 1.0 {
        hue - 1.0
    } else {
        hue
    }
}

pub(crate) fn max3(v: [f64; 3]) -> f64 {
    v[0].max(v[1]).max(v[2])
}

pub(crate) fn min3(v: [f64; 3]) -> f64 {
    v[0].min(v[1]).min(v[2])
}
