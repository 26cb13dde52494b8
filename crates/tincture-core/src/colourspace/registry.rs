//! Named colourspaces, built once on first access.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::{Colourspace, Transfer, normalised_primary_matrix_unchecked};
use crate::adaptation::from_rows;
use crate::error::{ColourError, KeyKind};
use crate::illuminants::{D65_2_DEGREE, E};

/// Tolerance for the self-check run when the registry is built.
const REGISTRY_TOLERANCE: f64 = 1e-9;

/// Identifies a built-in colourspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColourspaceId {
    /// CIE 1931 RGB (700 / 546.1 / 435.8 nm primaries, equal-energy white).
    CieRgb,
    /// sRGB (Rec. 709 primaries, sRGB transfer).
    Srgb,
    /// Adobe RGB (1998).
    AdobeRgb1998,
    /// ITU-R BT.2020 (wide gamut).
    Bt2020,
}

impl ColourspaceId {
    /// Human-readable label, also accepted by [`FromStr`].
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CieRgb => "CIE RGB",
            Self::Srgb => "sRGB",
            Self::AdobeRgb1998 => "Adobe RGB (1998)",
            Self::Bt2020 => "ITU-R BT.2020",
        }
    }

    pub fn all() -> &'static [Self] {
        const ALL: [ColourspaceId; 4] = [
            ColourspaceId::CieRgb,
            ColourspaceId::Srgb,
            ColourspaceId::AdobeRgb1998,
            ColourspaceId::Bt2020,
        ];
        &ALL
    }

    const fn index(&self) -> usize {
        match self {
            Self::CieRgb => 0,
            Self::Srgb => 1,
            Self::AdobeRgb1998 => 2,
            Self::Bt2020 => 3,
        }
    }
}

impl fmt::Display for ColourspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColourspaceId {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|id| id.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColourError::unknown(KeyKind::Colourspace, s))
    }
}

// ---------------------------------------------------------------------------
// CIE RGB
// ---------------------------------------------------------------------------

const CIE_RGB_PRIMARIES: [[f64; 2]; 3] = [[0.7350, 0.2650], [0.2740, 0.7170], [0.1670, 0.0090]];

/// Published CIE 1931 RGB → XYZ matrix, scaled by `1 / 0.17697` so that the
/// green row yields luminance.
///
/// # Reference
/// Smith, T. and Guild, J. (1931): The C.I.E. colorimetric standards and their use
const CIE_RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.49 / 0.17697, 0.31 / 0.17697, 0.20 / 0.17697],
    [0.17697 / 0.17697, 0.81240 / 0.17697, 0.01063 / 0.17697],
    [0.00 / 0.17697, 0.01 / 0.17697, 0.99 / 0.17697],
];

const REC709_PRIMARIES: [[f64; 2]; 3] = [[0.64, 0.33], [0.30, 0.60], [0.15, 0.06]];
const ADOBE_RGB_PRIMARIES: [[f64; 2]; 3] = [[0.64, 0.33], [0.21, 0.71], [0.15, 0.06]];
const BT2020_PRIMARIES: [[f64; 2]; 3] = [[0.708, 0.292], [0.170, 0.797], [0.131, 0.046]];

fn derived(name: &str, primaries: [[f64; 2]; 3], white: [f64; 2], transfer: Transfer) -> Colourspace {
    let npm = normalised_primary_matrix_unchecked(primaries, white);
    Colourspace::assemble(name.to_string(), primaries, white, npm, transfer)
}

fn build(id: ColourspaceId) -> Colourspace {
    let name = id.label();
    match id {
        ColourspaceId::CieRgb => Colourspace::assemble(
            name.to_string(),
            CIE_RGB_PRIMARIES,
            E,
            from_rows(CIE_RGB_TO_XYZ),
            Transfer::Gamma(2.2),
        ),
        ColourspaceId::Srgb => derived(name, REC709_PRIMARIES, D65_2_DEGREE, Transfer::Srgb),
        ColourspaceId::AdobeRgb1998 => derived(
            name,
            ADOBE_RGB_PRIMARIES,
            D65_2_DEGREE,
            Transfer::Gamma(563.0 / 256.0),
        ),
        ColourspaceId::Bt2020 => derived(name, BT2020_PRIMARIES, D65_2_DEGREE, Transfer::Rec2020),
    }
}

static REGISTRY: LazyLock<Vec<Colourspace>> = LazyLock::new(|| {
    let spaces: Vec<Colourspace> = ColourspaceId::all().iter().map(|&id| build(id)).collect();
    for space in &spaces {
        if let Err(err) = space.verify(REGISTRY_TOLERANCE) {
            tracing::error!(colourspace = space.name(), %err, "colourspace failed self-check");
        }
    }
    tracing::debug!(count = spaces.len(), "built colourspace registry");
    spaces
});

/// Descriptor of a built-in colourspace.
pub fn colourspace(id: ColourspaceId) -> &'static Colourspace {
    &REGISTRY[id.index()]
}

/// Descriptor looked up by label, e.g. `"CIE RGB"` or `"sRGB"`.
pub fn colourspace_by_name(name: &str) -> Result<&'static Colourspace, ColourError> {
    name.parse::<ColourspaceId>().map(colourspace)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_all_registered_colourspaces_verify() {
        for &id in ColourspaceId::all() {
            let space = colourspace(id);
            assert_eq!(space.name(), id.label());
            space.verify(EPSILON).unwrap();
        }
    }

    #[test]
    fn test_cie_rgb_white_maps_to_equal_energy() {
        let space = colourspace(ColourspaceId::CieRgb);
        let xyz = space.to_xyz([1.0, 1.0, 1.0]);
        for channel in xyz {
            assert!((channel - 1.0 / 0.17697).abs() < EPSILON);
        }
        assert_eq!(space.whitepoint(), [1.0 / 3.0, 1.0 / 3.0]);
    }

    #[test]
    fn test_cie_rgb_transfer_is_gamma_2_2() {
        let space = colourspace(ColourspaceId::CieRgb);
        let encode = space.transfer_function();
        let decode = space.inverse_transfer_function();
        assert!((encode(0.5) - 0.5_f64.powf(1.0 / 2.2)).abs() < EPSILON);
        assert!((decode(0.5) - 0.5_f64.powf(2.2)).abs() < EPSILON);
    }

    #[test]
    fn test_derived_spaces_map_white_to_whitepoint() {
        for id in [ColourspaceId::Srgb, ColourspaceId::AdobeRgb1998, ColourspaceId::Bt2020] {
            let space = colourspace(id);
            let [x, y, z] = space.to_xyz([1.0, 1.0, 1.0]);
            let [wx, wy] = space.whitepoint();
            assert!((y - 1.0).abs() < EPSILON);
            assert!((x / (x + y + z) - wx).abs() < EPSILON);
            assert!((y / (x + y + z) - wy).abs() < EPSILON);
        }
    }

    #[test]
    fn test_srgb_matrix_known_values() {
        let m = colourspace(ColourspaceId::Srgb).rgb_to_xyz_matrix();
        // IEC 61966-2-1 first row, to the precision of the published matrix.
        let row0 = [m.x_axis.x, m.y_axis.x, m.z_axis.x];
        assert!((row0[0] - 0.4124).abs() < 2e-4);
        assert!((row0[1] - 0.3576).abs() < 2e-4);
        assert!((row0[2] - 0.1805).abs() < 2e-4);
    }

    #[test]
    fn test_whitepoints_come_from_illuminant_table() {
        use crate::illuminants::{Observer, illuminant_chromaticity};

        let e = illuminant_chromaticity(Observer::Cie1931TwoDegree, "E").unwrap();
        let d65 = illuminant_chromaticity(Observer::Cie1931TwoDegree, "D65").unwrap();
        assert_eq!(colourspace(ColourspaceId::CieRgb).whitepoint(), e);
        for id in [ColourspaceId::Srgb, ColourspaceId::AdobeRgb1998, ColourspaceId::Bt2020] {
            assert_eq!(colourspace(id).whitepoint(), d65);
        }
    }

    #[test]
    fn test_singular_primaries_fail_self_check() {
        let collinear = [[0.2, 0.2], [0.3, 0.3], [0.4, 0.4]];
        let space = derived("Collinear", collinear, D65_2_DEGREE, Transfer::Linear);
        assert!(matches!(
            space.verify(REGISTRY_TOLERANCE),
            Err(ColourError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(colourspace_by_name("cie rgb").unwrap().name(), "CIE RGB");
        let err = colourspace_by_name("ProPhoto RGB").unwrap_err();
        assert_eq!(err, ColourError::unknown(KeyKind::Colourspace, "ProPhoto RGB"));
    }

    #[test]
    fn test_colourspace_id_serde_roundtrip() {
        for &id in ColourspaceId::all() {
            let json = serde_json::to_string(&id).unwrap();
            let back: ColourspaceId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, id);
        }
    }
}
