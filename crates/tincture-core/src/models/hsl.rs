//! RGB ↔ HSL (bi-hexcone model, hue as a fraction of a turn).

use super::{hue, max3, min3};

/// Convert RGB to HSL.
///
/// ```text
/// L = (max + min) / 2
/// S = delta / (max + min)        L < 0.5
///     delta / (2 − max − min)    otherwise
/// H = segment hue in [0, 1]
/// ```
///
/// Achromatic input gives `H = S = 0`. A zero saturation denominator can only
/// come from out-of-range input and also yields `S = 0`.
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let max = max3(rgb);
    let min = min3(rgb);
    let lum = (max + min) * 0.5;
    let delta = max - min;

    if delta == 0.0 {
        return [0.0, 0.0, lum];
    }

    let denominator = if lum < 0.5 { max + min } else { 2.0 - max - min };
    let sat = if denominator == 0.0 { 0.0 } else { delta / denominator };

    [hue(rgb, max, delta), sat, lum]
}

/// Convert HSL to RGB.
///
/// ```text
/// q = L(1 + S)        L < 0.5
///     L + S − L·S     otherwise
/// p = 2L − q
/// RGB = hue_to_rgb(p, q, H + 1/3), hue_to_rgb(p, q, H), hue_to_rgb(p, q, H − 1/3)
/// ```
pub fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let [hue, sat, lum] = hsl;
    if sat == 0.0 {
        return [lum, lum, lum];
    }

    let q = if lum < 0.5 {
        lum * (1.0 + sat)
    } else {
        lum + sat - lum * sat
    };
    let p = 2.0 * lum - q;

    [
        hue_to_rgb(p, q, hue + 1.0 / 3.0),
        hue_to_rgb(p, q, hue),
        hue_to_rgb(p, q, hue - 1.0 / 3.0),
    ]
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if 6.0 * t < 1.0 {
        p + (q - p) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        q
    } else if 3.0 * t < 2.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
