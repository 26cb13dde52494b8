//! CIE standard illuminant chromaticities for the 1931 2° and 1964 10°
//! standard observers.
//!
//! # Reference
//! CIE 15:2004: Colorimetry, Tables T.3 and T.8

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColourError, KeyKind};

/// CIE standard colorimetric observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Observer {
    /// CIE 1931 2° standard observer.
    Cie1931TwoDegree,
    /// CIE 1964 10° supplementary standard observer.
    Cie1964TenDegree,
}

impl Observer {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cie1931TwoDegree => "CIE 1931 2 Degree Standard Observer",
            Self::Cie1964TenDegree => "CIE 1964 10 Degree Standard Observer",
        }
    }

    pub fn all() -> &'static [Self] {
        const ALL: [Observer; 2] = [Observer::Cie1931TwoDegree, Observer::Cie1964TenDegree];
        &ALL
    }

    fn table(&self) -> &'static [(&'static str, [f64; 2])] {
        match self {
            Self::Cie1931TwoDegree => CIE_1931_2_DEGREE,
            Self::Cie1964TenDegree => CIE_1964_10_DEGREE,
        }
    }
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Observer {
    type Err = ColourError;

    /// Accepts the full label or the field size alone (`"2"`, `"10"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2" => return Ok(Self::Cie1931TwoDegree),
            "10" => return Ok(Self::Cie1964TenDegree),
            _ => {}
        }
        Self::all()
            .iter()
            .copied()
            .find(|observer| observer.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColourError::unknown(KeyKind::Observer, s))
    }
}

/// D65 under the 2° observer.
pub const D65_2_DEGREE: [f64; 2] = [0.31271, 0.32902];
/// Equal-energy white, the same under both observers.
pub const E: [f64; 2] = [1.0 / 3.0, 1.0 / 3.0];

const CIE_1931_2_DEGREE: &[(&str, [f64; 2])] = &[
    ("A", [0.44757, 0.40745]),
    ("B", [0.34842, 0.35161]),
    ("C", [0.31006, 0.31616]),
    ("D50", [0.34567, 0.35850]),
    ("D55", [0.33242, 0.34743]),
    ("D60", [0.32168, 0.33767]),
    ("D65", D65_2_DEGREE),
    ("D75", [0.29902, 0.31485]),
    ("E", E),
    ("F1", [0.31310, 0.33727]),
    ("F2", [0.37208, 0.37529]),
    ("F3", [0.40910, 0.39430]),
    ("F4", [0.44018, 0.40329]),
    ("F5", [0.31379, 0.34531]),
    ("F6", [0.37790, 0.38835]),
    ("F7", [0.31292, 0.32933]),
    ("F8", [0.34588, 0.35875]),
    ("F9", [0.37417, 0.37281]),
    ("F10", [0.34609, 0.35986]),
    ("F11", [0.38052, 0.37713]),
    ("F12", [0.43695, 0.40441]),
];

const CIE_1964_10_DEGREE: &[(&str, [f64; 2])] = &[
    ("A", [0.45117, 0.40594]),
    ("B", [0.34980, 0.35270]),
    ("C", [0.31039, 0.31905]),
    ("D50", [0.34773, 0.35952]),
    ("D55", [0.33411, 0.34877]),
    ("D60", [0.32299, 0.33595]),
    ("D65", [0.31382, 0.33100]),
    ("D75", [0.29968, 0.31740]),
    ("E", E),
    ("F1", [0.31811, 0.33559]),
    ("F2", [0.37925, 0.36733]),
    ("F3", [0.41761, 0.38324]),
    ("F4", [0.44920, 0.39074]),
    ("F5", [0.31975, 0.34246]),
    ("F6", [0.38660, 0.37847]),
    ("F7", [0.31569, 0.32960]),
    ("F8", [0.34902, 0.35939]),
    ("F9", [0.37829, 0.37045]),
    ("F10", [0.35090, 0.35444]),
    ("F11", [0.38541, 0.37123]),
    ("F12", [0.44256, 0.39717]),
];

/// Look up the chromaticity of a named illuminant.
///
/// Names are matched exactly (`"D65"`, not `"d65"`). A missing entry is an
/// error; there is no fallback whitepoint.
pub fn illuminant_chromaticity(observer: Observer, name: &str) -> Result<[f64; 2], ColourError> {
    observer
        .table()
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, xy)| *xy)
        .ok_or_else(|| ColourError::unknown(KeyKind::Illuminant, name))
}

/// Illuminant names available for an observer, in table order.
pub fn illuminant_names(observer: Observer) -> impl Iterator<Item = &'static str> {
    observer.table().iter().map(|(key, _)| *key)
}
