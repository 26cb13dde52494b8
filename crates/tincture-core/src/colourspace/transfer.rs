//! Transfer function (OETF/EOTF) implementations.
//!
//! Transfer functions convert between non-linear (encoded) and linear light
//! values. Each variant uses the published constants of its standard.

use serde::{Deserialize, Serialize};

/// A transfer function that converts between linear and non-linear encodings.
pub trait TransferFunction {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f64) -> f64;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f64) -> f64;
}

/// Transfer curve carried by a [`Colourspace`](super::Colourspace).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transfer {
    /// Identity in both directions.
    Linear,
    /// Pure power law, mirrored about zero.
    ///
    /// ```text
    /// to_linear:  V ^ γ
    /// to_encoded: L ^ (1/γ)
    /// ```
    Gamma(f64),
    /// IEC 61966-2-1 piecewise curve.
    Srgb,
    /// ITU-R BT.2020 OETF and its inverse.
    Rec2020,
}

// ---------------------------------------------------------------------------
// sRGB (IEC 61966-2-1)
// ---------------------------------------------------------------------------

/// ```text
/// to_linear:   V <= 0.04045 → V / 12.92
///              V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
///
/// to_encoded:  L <= 0.0031308 → L × 12.92
///              L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
fn srgb_to_linear(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

fn srgb_to_encoded(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

// ---------------------------------------------------------------------------
// ITU-R BT.2020
// ---------------------------------------------------------------------------

/// # Reference
/// ITU-R BT.2020-2, Table 4 (12-bit precision constants)
///
/// ```text
/// to_encoded: L < β → 4.5 L
///             L ≥ β → α L^0.45 − (α − 1)
///
/// to_linear:  V < 4.5β → V / 4.5
///             V ≥ 4.5β → ((V + α − 1) / α) ^ (1/0.45)
/// ```
const BT2020_ALPHA: f64 = 1.099_296_826_809_44;
const BT2020_BETA: f64 = 0.018_053_968_510_807;

fn rec2020_to_linear(encoded: f64) -> f64 {
    if encoded < 4.5 * BT2020_BETA {
        encoded / 4.5
    } else {
        ((encoded + BT2020_ALPHA - 1.0) / BT2020_ALPHA).powf(1.0 / 0.45)
    }
}

fn rec2020_to_encoded(linear: f64) -> f64 {
    if linear < BT2020_BETA {
        4.5 * linear
    } else {
        BT2020_ALPHA * linear.powf(0.45) - (BT2020_ALPHA - 1.0)
    }
}

fn mirrored_power(value: f64, exponent: f64) -> f64 {
    value.signum() * value.abs().powf(exponent)
}

impl TransferFunction for Transfer {
    fn to_linear(&self, encoded: f64) -> f64 {
        match *self {
            Self::Linear => encoded,
            Self::Gamma(gamma) => mirrored_power(encoded, gamma),
            Self::Srgb => srgb_to_linear(encoded),
            Self::Rec2020 => rec2020_to_linear(encoded),
        }
    }

    fn to_encoded(&self, linear: f64) -> f64 {
        match *self {
            Self::Linear => linear,
            Self::Gamma(gamma) => mirrored_power(linear, 1.0 / gamma),
            Self::Srgb => srgb_to_encoded(linear),
            Self::Rec2020 => rec2020_to_encoded(linear),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_roundtrip(tf: Transfer, values: &[f64]) {
        for &v in values {
            let encoded = tf.to_encoded(v);
            let back = tf.to_linear(encoded);
            assert!(
                (v - back).abs() < EPSILON,
                "{tf:?} roundtrip failed for {v}: encoded={encoded}, back={back}"
            );
        }
    }

    #[test]
    fn test_all_curves_roundtrip_preserves_values() {
        let values = [0.0, 0.001, 0.01, 0.018, 0.1, 0.18, 0.5, 0.9, 1.0];
        for tf in [
            Transfer::Linear,
            Transfer::Gamma(2.2),
            Transfer::Gamma(563.0 / 256.0),
            Transfer::Srgb,
            Transfer::Rec2020,
        ] {
            assert_roundtrip(tf, &values);
        }
    }

    #[test]
    fn test_srgb_linearize_known_values() {
        let tf = Transfer::Srgb;
        assert_eq!(tf.to_linear(0.0), 0.0);
        assert!((tf.to_linear(1.0) - 1.0).abs() < EPSILON);
        // Mid-grey sRGB 0.5 is ~0.214 linear
        assert!((tf.to_linear(0.5) - 0.214041).abs() < 1e-6);
    }

    #[test]
    fn test_gamma_matches_power_law() {
        let tf = Transfer::Gamma(2.2);
        assert!((tf.to_encoded(0.5) - 0.5_f64.powf(1.0 / 2.2)).abs() < EPSILON);
        assert!((tf.to_linear(0.5) - 0.5_f64.powf(2.2)).abs() < EPSILON);
    }

    #[test]
    fn test_gamma_is_odd_for_negative_input() {
        let tf = Transfer::Gamma(2.2);
        assert!((tf.to_encoded(-0.25) + tf.to_encoded(0.25)).abs() < EPSILON);
        assert!(tf.to_linear(-0.5).is_finite());
    }

    #[test]
    fn test_rec2020_segments_meet_at_knee() {
        let tf = Transfer::Rec2020;
        let linear_side = 4.5 * BT2020_BETA;
        let power_side = BT2020_ALPHA * BT2020_BETA.powf(0.45) - (BT2020_ALPHA - 1.0);
        assert!((linear_side - power_side).abs() < 1e-9);
        assert!((tf.to_encoded(1.0) - 1.0).abs() < EPSILON);
    }
}
