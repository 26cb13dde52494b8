//! Conversions over n-dimensional [`ColourArray`]s.
//!
//! Each function checks the trailing axis length up front and then applies
//! the scalar kernel of the same name to every pixel. Leading axes are kept
//! as they are.

use crate::array::ColourArray;
use crate::error::ColourError;

use super::{cie, cmy, hsl, hsv};

pub fn rgb_to_hsv(array: &ColourArray) -> Result<ColourArray, ColourError> {
    array.map_channels(hsv::rgb_to_hsv)
}

pub fn hsv_to_rgb(array: &ColourArray) -> Result<ColourArray, ColourError> {
    array.map_channels(hsv::hsv_to_rgb)
}

pub fn rgb_to_hsl(array: &ColourArray) -> Result<ColourArray, ColourError> {
    array.map_channels(hsl::rgb_to_hsl)
}

pub fn hsl_to_rgb(array: &ColourArray) -> Result<ColourArray, ColourError> {
    array.map_channels(hsl::hsl_to_rgb)
}

pub fn rgb_to_cmy(array: &ColourArray) -> Result<ColourArray, ColourError> {
    array.map_channels(cmy::rgb_to_cmy)
}

pub fn cmy_to_rgb(array: &ColourArray) -> Result<ColourArray, ColourError> {
    array.map_channels(cmy::cmy_to_rgb)
}

/// `[..., 3] -> [..., 4]`.
pub fn cmy_to_cmyk(array: &ColourArray) -> Result<ColourArray, ColourError> {
    array.map_channels(cmy::cmy_to_cmyk)
}

/// `[..., 4] -> [..., 3]`.
pub fn cmyk_to_cmy(array: &ColourArray) -> Result<ColourArray, ColourError> {
    array.map_channels(cmy::cmyk_to_cmy)
}

pub fn xyy_to_xyz(array: &ColourArray) -> Result<ColourArray, ColourError> {
    array.map_channels(cie::xyy_to_xyz)
}

pub fn xyz_to_xyy(array: &ColourArray, fallback_xy: [f64; 2]) -> Result<ColourArray, ColourError> {
    array.map_channels(|pixel| cie::xyz_to_xyy(pixel, fallback_xy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_rejects_cmyk_input_for_rgb_conversions() {
        let cmyk = ColourArray::tile([0.1, 0.2, 0.3, 0.4], 2);
        assert!(matches!(
            rgb_to_hsv(&cmyk),
            Err(ColourError::ShapeMismatch {
                expected: 3,
                found: 4
            })
        ));
    }

    #[test]
    fn test_batch_rejects_rgb_input_for_cmyk_to_cmy() {
        let rgb = ColourArray::tile([0.1, 0.2, 0.3], 2);
        assert!(matches!(
            cmyk_to_cmy(&rgb),
            Err(ColourError::ShapeMismatch {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn test_xyz_to_xyy_batch_keeps_black_fallback() {
        let xyz = ColourArray::from_pixels(&[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]]);
        let xyy = xyz_to_xyy(&xyz, [0.3127, 0.329]).unwrap();
        assert_eq!(&xyy.as_slice()[..3], &[0.3127, 0.329, 0.0]);
    }
}
