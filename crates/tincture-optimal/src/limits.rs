//! Process-wide MacAdam loci and the gamut membership predicates.

use std::sync::LazyLock;

use tincture_core::{ColourArray, ColourError, KeyKind};

use crate::config::LocusConfig;
use crate::locus::MacAdamLocus;
use crate::spectral::illuminant_spd;

const ILLUMINANTS: [&str; 3] = ["A", "C", "D65"];

/// One entry per [`ILLUMINANTS`] label, in the same order. A locus that
/// failed to build keeps its error so lookups report it.
static LOCI: LazyLock<Vec<Result<MacAdamLocus, ColourError>>> = LazyLock::new(|| {
    ILLUMINANTS
        .iter()
        .map(|&label| {
            let locus = illuminant_spd(label)
                .and_then(|spd| MacAdamLocus::from_spectrum(label, &spd, &LocusConfig::STANDARD));
            if let Err(err) = &locus {
                tracing::warn!(illuminant = label, %err, "failed to build MacAdam locus");
            }
            locus
        })
        .collect()
});

/// Illuminants with a built-in MacAdam locus.
pub fn macadam_illuminants() -> &'static [&'static str] {
    &ILLUMINANTS
}

/// Built-in locus for `illuminant`, computed on first use with
/// [`LocusConfig::STANDARD`].
pub fn macadam_locus(illuminant: &str) -> Result<&'static MacAdamLocus, ColourError> {
    let index = ILLUMINANTS
        .iter()
        .position(|&label| label == illuminant)
        .ok_or_else(|| ColourError::unknown(KeyKind::MacAdamLocus, illuminant))?;
    LOCI[index].as_ref().map_err(Clone::clone)
}

/// Whether `xyy` is an object colour under `illuminant`, i.e. lies within
/// its MacAdam limits.
///
/// Unknown illuminants are an error; any xyY value for a known one gives a
/// plain answer, with `Y ≤ 0`, `Y > 1` and non-finite values outside.
pub fn is_within_macadam_limits(xyy: [f64; 3], illuminant: &str) -> Result<bool, ColourError> {
    Ok(macadam_locus(illuminant)?.contains(xyy))
}

/// [`is_within_macadam_limits`] for every pixel of an `[..., 3]` xyY array,
/// in row-major order.
pub fn within_macadam_limits(array: &ColourArray, illuminant: &str) -> Result<Vec<bool>, ColourError> {
    let locus = macadam_locus(illuminant)?;
    array.map_pixels(|xyy: [f64; 3]| locus.contains(xyy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_illuminant_has_a_locus() {
        for label in macadam_illuminants() {
            assert_eq!(macadam_locus(label).unwrap().label(), *label);
        }
    }

    #[test]
    fn test_built_in_loci_use_standard_sampling() {
        let standard = LocusConfig::STANDARD;
        for label in macadam_illuminants() {
            let locus = macadam_locus(label).unwrap();
            assert_eq!(locus.levels().len(), standard.levels);
            assert_eq!(locus.levels()[0].vertices.len(), standard.wavelengths().count());
        }
    }

    #[test]
    fn test_built_in_loci_match_explicit_construction() {
        let spd = illuminant_spd("C").unwrap();
        let explicit = MacAdamLocus::from_spectrum("C", &spd, &LocusConfig::STANDARD).unwrap();
        assert_eq!(macadam_locus("C").unwrap(), &explicit);
    }

    #[test]
    fn test_unknown_illuminant_is_error() {
        assert_eq!(
            is_within_macadam_limits([0.3, 0.3, 0.5], "F2").unwrap_err(),
            ColourError::unknown(KeyKind::MacAdamLocus, "F2")
        );
    }

    #[test]
    fn test_batch_rejects_wrong_channel_count() {
        let array = ColourArray::tile([0.3, 0.3, 0.5, 1.0], 2);
        assert!(matches!(
            within_macadam_limits(&array, "C"),
            Err(ColourError::ShapeMismatch { expected: 3, found: 4 })
        ));
    }
}
