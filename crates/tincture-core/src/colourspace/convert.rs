//! Encoded RGB ↔ XYZ through a [`Colourspace`], with chromatic adaptation
//! to a caller-chosen reference white.

use glam::DVec3;

use super::Colourspace;
use crate::adaptation::{ChromaticAdaptation, adaptation_matrix};

/// Decode `rgb`, convert it to XYZ and adapt from the colourspace whitepoint
/// to `illuminant_xy`.
pub fn rgb_to_xyz(
    rgb: [f64; 3],
    colourspace: &Colourspace,
    illuminant_xy: [f64; 2],
    method: ChromaticAdaptation,
) -> [f64; 3] {
    let linear = DVec3::from_array(colourspace.decode(rgb));
    let adapt = adaptation_matrix(colourspace.whitepoint(), illuminant_xy, method);
    (adapt * colourspace.rgb_to_xyz_matrix() * linear).to_array()
}

/// Inverse of [`rgb_to_xyz`]: adapt from `illuminant_xy` to the colourspace
/// whitepoint, convert to linear RGB and encode.
pub fn xyz_to_rgb(
    xyz: [f64; 3],
    colourspace: &Colourspace,
    illuminant_xy: [f64; 2],
    method: ChromaticAdaptation,
) -> [f64; 3] {
    let adapt = adaptation_matrix(illuminant_xy, colourspace.whitepoint(), method);
    let linear = colourspace.xyz_to_rgb_matrix() * adapt * DVec3::from_array(xyz);
    colourspace.encode(linear.to_array())
}

pub mod batch {
    //! [`ColourArray`] variants. The adaptation matrix is built once per call.

    use glam::DVec3;

    use super::{ChromaticAdaptation, Colourspace, adaptation_matrix};
    use crate::array::ColourArray;
    use crate::error::ColourError;

    pub fn rgb_to_xyz(
        array: &ColourArray,
        colourspace: &Colourspace,
        illuminant_xy: [f64; 2],
        method: ChromaticAdaptation,
    ) -> Result<ColourArray, ColourError> {
        let matrix = adaptation_matrix(colourspace.whitepoint(), illuminant_xy, method)
            * colourspace.rgb_to_xyz_matrix();
        array.map_channels(|rgb: [f64; 3]| {
            (matrix * DVec3::from_array(colourspace.decode(rgb))).to_array()
        })
    }

    pub fn xyz_to_rgb(
        array: &ColourArray,
        colourspace: &Colourspace,
        illuminant_xy: [f64; 2],
        method: ChromaticAdaptation,
    ) -> Result<ColourArray, ColourError> {
        let matrix = colourspace.xyz_to_rgb_matrix()
            * adaptation_matrix(illuminant_xy, colourspace.whitepoint(), method);
        array.map_channels(|xyz: [f64; 3]| {
            colourspace.encode((matrix * DVec3::from_array(xyz)).to_array())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::ColourArray;
    use crate::colourspace::{ColourspaceId, colourspace};
    use crate::models::xy_to_xyz;

    const EPSILON: f64 = 1e-9;
    const D50: [f64; 2] = [0.34567, 0.35850];

    fn assert_close3(actual: [f64; 3], expected: [f64; 3]) {
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
    fn test_srgb_white_lands_on_target_illuminant() {
        let srgb = colourspace(ColourspaceId::Srgb);
        let xyz = rgb_to_xyz([1.0, 1.0, 1.0], srgb, D50, ChromaticAdaptation::Bradford);
        assert_close3(xyz, xy_to_xyz(D50));
    }

    #[test]
    fn test_native_whitepoint_skips_adaptation() {
        let srgb = colourspace(ColourspaceId::Srgb);
        let rgb = [0.25, 0.6, 0.05];
        let direct = srgb.to_xyz(srgb.decode(rgb));
        let via = rgb_to_xyz(rgb, srgb, srgb.whitepoint(), ChromaticAdaptation::Bradford);
        assert_close3(via, direct);
    }

    #[test]
    fn test_rgb_xyz_roundtrip_for_every_colourspace() {
        let rgb = [0.25, 0.6, 0.05];
        for &id in ColourspaceId::all() {
            let space = colourspace(id);
            for &method in ChromaticAdaptation::all() {
                let xyz = rgb_to_xyz(rgb, space, D50, method);
                assert_close3(xyz_to_rgb(xyz, space, D50, method), rgb);
            }
        }
    }

    #[test]
    fn test_batch_matches_scalar() {
        let space = colourspace(ColourspaceId::AdobeRgb1998);
        let pixels = [[0.25, 0.6, 0.05], [0.9, 0.1, 0.4], [0.0, 0.0, 0.0]];
        let array = ColourArray::from_pixels(&pixels).reshape([3, 1, 3]).unwrap();
        let xyz = batch::rgb_to_xyz(&array, space, D50, ChromaticAdaptation::Cat02).unwrap();
        assert_eq!(xyz.shape(), &[3, 1, 3]);
        for (pixel, expected) in xyz.pixels::<3>().unwrap().zip(pixels) {
            assert_close3(pixel, rgb_to_xyz(expected, space, D50, ChromaticAdaptation::Cat02));
        }
        let back = batch::xyz_to_rgb(&xyz, space, D50, ChromaticAdaptation::Cat02).unwrap();
        for (pixel, expected) in back.pixels::<3>().unwrap().zip(pixels) {
            assert_close3(pixel, expected);
        }
    }
}
