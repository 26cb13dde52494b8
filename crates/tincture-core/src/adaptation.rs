//! Von Kries-style chromatic adaptation between whitepoints.
//!
//! Every method follows the same recipe: transform XYZ into a cone-like
//! response space, scale each channel by the ratio of destination to source
//! white, and transform back.
//!
//! # Reference
//! - Lindbloom, Bruce J.: Chromatic Adaptation
//! - CIE 159:2004: A colour appearance model for colour management systems: CIECAM02

use std::fmt;
use std::str::FromStr;

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{ColourError, KeyKind};
use crate::models::xy_to_xyz;

/// Cone response model used for adaptation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChromaticAdaptation {
    /// Scale X, Y and Z directly.
    XyzScaling,
    #[default]
    Bradford,
    VonKries,
    Cat02,
}

impl ChromaticAdaptation {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::XyzScaling => "XYZ Scaling",
            Self::Bradford => "Bradford",
            Self::VonKries => "Von Kries",
            Self::Cat02 => "CAT02",
        }
    }

    pub fn all() -> &'static [Self] {
        const ALL: [ChromaticAdaptation; 4] = [
            ChromaticAdaptation::XyzScaling,
            ChromaticAdaptation::Bradford,
            ChromaticAdaptation::VonKries,
            ChromaticAdaptation::Cat02,
        ];
        &ALL
    }

    /// XYZ → cone response matrix and its inverse.
    fn cone_matrices(&self) -> (DMat3, DMat3) {
        match self {
            Self::XyzScaling => (DMat3::IDENTITY, DMat3::IDENTITY),
            // Published inverse, matches Lindbloom to 10 places.
            Self::Bradford => (from_rows(BRADFORD), from_rows(BRADFORD_INV)),
            Self::VonKries => {
                let m = from_rows(VON_KRIES);
                (m, m.inverse())
            }
            Self::Cat02 => {
                let m = from_rows(CAT02);
                (m, m.inverse())
            }
        }
    }
}

impl fmt::Display for ChromaticAdaptation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChromaticAdaptation {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|method| method.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColourError::unknown(KeyKind::ChromaticAdaptation, s))
    }
}

const BRADFORD: [[f64; 3]; 3] = [
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
];

const BRADFORD_INV: [[f64; 3]; 3] = [
    [0.9869929055, -0.1470542564, 0.1599626517],
    [0.4323052697, 0.5183602715, 0.0492912282],
    [-0.0085286646, 0.0400428217, 0.9684866958],
];

const VON_KRIES: [[f64; 3]; 3] = [
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.0, 0.0, 0.91822],
];

const CAT02: [[f64; 3]; 3] = [
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
];

/// Build a glam matrix from a row-major literal.
pub(crate) fn from_rows(rows: [[f64; 3]; 3]) -> DMat3 {
    DMat3::from_cols_array_2d(&rows).transpose()
}

/// Adaptation matrix taking XYZ under `source_xy` to XYZ under `target_xy`.
///
/// ```text
/// ρ_s = M · XYZ(source_xy),  ρ_t = M · XYZ(target_xy)
/// A   = M⁻¹ · diag(ρ_t / ρ_s) · M
/// ```
///
/// Identical whitepoints short-circuit to the exact identity.
pub fn adaptation_matrix(
    source_xy: [f64; 2],
    target_xy: [f64; 2],
    method: ChromaticAdaptation,
) -> DMat3 {
    if source_xy == target_xy {
        return DMat3::IDENTITY;
    }

    let (m, m_inv) = method.cone_matrices();
    let source = m * DVec3::from_array(xy_to_xyz(source_xy));
    let target = m * DVec3::from_array(xy_to_xyz(target_xy));
    let scale = DMat3::from_diagonal(target / source);

    m_inv * scale * m
}

/// Adapt a single XYZ triple.
pub fn adapt_xyz(
    xyz: [f64; 3],
    source_xy: [f64; 2],
    target_xy: [f64; 2],
    method: ChromaticAdaptation,
) -> [f64; 3] {
    let matrix = adaptation_matrix(source_xy, target_xy, method);
    (matrix * DVec3::from_array(xyz)).to_array()
}
