//! CIE XYZ ↔ xyY and chromaticity helpers.

/// Tristimulus values of a chromaticity at unit luminance.
///
/// `y = 0` has no finite XYZ and returns black.
pub fn xy_to_xyz(xy: [f64; 2]) -> [f64; 3] {
    xyy_to_xyz([xy[0], xy[1], 1.0])
}

/// `X = xY / y, Z = (1 − x − y)Y / y`; `y = 0` returns black.
pub fn xyy_to_xyz(xyy: [f64; 3]) -> [f64; 3] {
    let [x, y, big_y] = xyy;
    if y == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    [x * big_y / y, big_y, (1.0 - x - y) * big_y / y]
}

/// `x = X / (X + Y + Z)`, `y = Y / (X + Y + Z)`.
///
/// Black has no chromaticity; it takes `fallback_xy` (usually the reference
/// whitepoint) with zero luminance.
pub fn xyz_to_xyy(xyz: [f64; 3], fallback_xy: [f64; 2]) -> [f64; 3] {
    let [x, y, z] = xyz;
    let sum = x + y + z;
    if sum == 0.0 {
        return [fallback_xy[0], fallback_xy[1], y];
    }
    [x / sum, y / sum, y]
}

pub fn xyz_to_xy(xyz: [f64; 3], fallback_xy: [f64; 2]) -> [f64; 2] {
    let [x, y, _] = xyz_to_xyy(xyz, fallback_xy);
    [x, y]
}
