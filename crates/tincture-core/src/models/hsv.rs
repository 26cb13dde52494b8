//! RGB ↔ HSV (hexcone model, hue as a fraction of a turn).
//!
//! # Reference
//! Smith, A. R. (1978): Color Gamut Transform Pairs

use super::{hue, max3, min3};

/// Convert RGB to HSV.
///
/// ```text
/// V = max(R, G, B)
/// delta = V − min(R, G, B)
/// S = delta / V            (0 when delta = 0 or V = 0)
/// H = segment hue in [0, 1] (0 when delta = 0)
/// ```
///
/// Achromatic input (including black) collapses to `H = S = 0`.
pub fn rgb_to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let max = max3(rgb);
    let delta = max - min3(rgb);

    if delta == 0.0 {
        return [0.0, 0.0, max];
    }

    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    [hue(rgb, max, delta), saturation, max]
}

/// Convert HSV to RGB.
///
/// ```text
/// h = 6H (h = 6 wraps to 0), i = floor(h), f = h − i
/// j = V(1 − S), k = V(1 − S·f), l = V(1 − S(1 − f))
/// i = 0..5 → [V,l,j] [k,V,j] [j,V,l] [j,k,V] [l,j,V] [V,j,k]
/// ```
///
/// The sector index is taken modulo 6, so hues outside [0, 1] stay on the
/// hexcone instead of being rejected.
pub fn hsv_to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    let [h, s, v] = hsv;

    let mut h = h * 6.0;
    if h == 6.0 {
        h = 0.0;
    }
    let sector = h.floor();
    let f = h - sector;

    let j = v * (1.0 - s);
    let k = v * (1.0 - s * f);
    let l = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => [v, l, j],
        1 => [k, v, j],
        2 => [j, v, l],
        3 => [j, k, v],
        4 => [l, j, v],
        _ => [v, j, k],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-7;

    fn assert_close(actual: [f64; 3], expected: [f64; 3]) {
        for i in 0..3 {
            assert!(
                (actual[i] - expected[i]).abs() < EPSILON,
                "channel {i}: got {:?}, expected {:?}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_rgb_to_hsv_known_values() {
        assert_close(rgb_to_hsv([0.25, 0.60, 0.05]), [0.27272727, 0.91666667, 0.6]);
        assert_close(rgb_to_hsv([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_close(rgb_to_hsv([1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hsv_to_rgb_known_values() {
        assert_close(hsv_to_rgb([0.27272727, 0.91666667, 0.6]), [0.25, 0.60, 0.05]);
        assert_close(hsv_to_rgb([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_close(hsv_to_rgb([0.0, 0.0, 1.0]), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_hsv_roundtrip_preserves_values() {
        let samples = [
            [0.8, 0.4, 0.2],
            [0.1, 0.9, 0.3],
            [0.2, 0.3, 0.95],
            [0.7, 0.1, 0.6],
            [0.5, 0.5, 0.25],
            [0.0, 0.5, 1.0],
        ];
        for rgb in samples {
            assert_close(hsv_to_rgb(rgb_to_hsv(rgb)), rgb);
        }
    }

    #[test]
    fn test_hsv_black_is_achromatic() {
        let hsv = rgb_to_hsv([0.0, 0.0, 0.0]);
        assert!(hsv.iter().all(|c| c.is_finite()));
        assert_eq!(hsv[1], 0.0);
    }

    #[test]
    fn test_hsv_full_turn_hue_wraps_to_red() {
        assert_close(hsv_to_rgb([1.0, 1.0, 1.0]), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rgb_to_hsv_out_of_range_is_not_clamped() {
        let hsv = rgb_to_hsv([1.5, 0.5, 0.5]);
        assert!((hsv[2] - 1.5).abs() < EPSILON);
        assert!(hsv.iter().all(|c| c.is_finite()));
    }
}
