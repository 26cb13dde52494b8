//! Spectral power distributions and the CIE 1931 colour-matching functions.
//!
//! Only what optimal colour loci need: a uniformly sampled distribution type,
//! the standard illuminants A, C, D-series and E, and the tabulated 2°
//! standard observer.

use tincture_core::illuminants::{Observer, illuminant_chromaticity};
use tincture_core::{ColourError, KeyKind};

/// Uniformly sampled spectral distribution, linearly interpolated between
/// samples and zero outside them.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralDistribution {
    start: f64,
    interval: f64,
    values: Vec<f64>,
}

impl SpectralDistribution {
    /// `values[i]` is the power at `start + i * interval` nanometres.
    pub fn new(start: f64, interval: f64, values: Vec<f64>) -> Self {
        Self {
            start,
            interval,
            values,
        }
    }

    /// Sample `f` from `start` to `end` inclusive.
    pub fn from_fn(start: f64, end: f64, interval: f64, f: impl Fn(f64) -> f64) -> Self {
        let count = ((end - start) / interval).round() as usize;
        let values = (0..=count).map(|i| f(start + i as f64 * interval)).collect();
        Self::new(start, interval, values)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.start + (self.values.len().saturating_sub(1)) as f64 * self.interval
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn value_at(&self, wavelength: f64) -> f64 {
        let last = self.values.len().saturating_sub(1);
        let position = (wavelength - self.start) / self.interval;
        if self.values.is_empty() || !(0.0..=last as f64).contains(&position) {
            return 0.0;
        }
        if last == 0 {
            return self.values[0];
        }

        let index = (position.floor() as usize).min(last - 1);
        let t = position - index as f64;
        self.values[index] * (1.0 - t) + self.values[index + 1] * t
    }
}

/// CIE 1931 2° standard observer colour-matching functions.
///
/// # Reference
/// CIE 15:2004: Colorimetry, Table T.4
pub mod std_observer {
    const START: f64 = 380.0;
    const INTERVAL: f64 = 5.0;

    /// `x̄, ȳ, z̄` from 380 to 780 nm at 5 nm.
    pub const CIE_1931_2_DEGREE: [[f64; 3]; 81] = [
        [0.001368, 0.000039, 0.006450],
        [0.002236, 0.000064, 0.010550],
        [0.004243, 0.000120, 0.020050],
        [0.007650, 0.000217, 0.036210],
        [0.014310, 0.000396, 0.067850],
        [0.023190, 0.000640, 0.110200],
        [0.043510, 0.001210, 0.207400],
        [0.077630, 0.002180, 0.371300],
        [0.134380, 0.004000, 0.645600],
        [0.214770, 0.007300, 1.039050],
        [0.283900, 0.011600, 1.385600],
        [0.328500, 0.016840, 1.622960],
        [0.348280, 0.023000, 1.747060],
        [0.348060, 0.029800, 1.782600],
        [0.336200, 0.038000, 1.772110],
        [0.318700, 0.048000, 1.744100],
        [0.290800, 0.060000, 1.669200],
        [0.251100, 0.073900, 1.528100],
        [0.195360, 0.090980, 1.287640],
        [0.142100, 0.112600, 1.041900],
        [0.095640, 0.139020, 0.812950],
        [0.057950, 0.169300, 0.616200],
        [0.032010, 0.208020, 0.465180],
        [0.014700, 0.258600, 0.353300],
        [0.004900, 0.323000, 0.272000],
        [0.002400, 0.407300, 0.212300],
        [0.009300, 0.503000, 0.158200],
        [0.029100, 0.608200, 0.111700],
        [0.063270, 0.710000, 0.078250],
        [0.109600, 0.793200, 0.057250],
        [0.165500, 0.862000, 0.042160],
        [0.225750, 0.914850, 0.029840],
        [0.290400, 0.954000, 0.020300],
        [0.359700, 0.980300, 0.013400],
        [0.433450, 0.994950, 0.008750],
        [0.512050, 1.000000, 0.005750],
        [0.594500, 0.995000, 0.003900],
        [0.678400, 0.978600, 0.002750],
        [0.762100, 0.952000, 0.002100],
        [0.842500, 0.915400, 0.001800],
        [0.916300, 0.870000, 0.001650],
        [0.978600, 0.816300, 0.001400],
        [1.026300, 0.757000, 0.001100],
        [1.056700, 0.694900, 0.001000],
        [1.062200, 0.631000, 0.000800],
        [1.045600, 0.566800, 0.000600],
        [1.002600, 0.503000, 0.000340],
        [0.938400, 0.441200, 0.000240],
        [0.854450, 0.381000, 0.000190],
        [0.751400, 0.321000, 0.000100],
        [0.642400, 0.265000, 0.000050],
        [0.541900, 0.217000, 0.000030],
        [0.447900, 0.175000, 0.000020],
        [0.360800, 0.138200, 0.000010],
        [0.283500, 0.107000, 0.000000],
        [0.218700, 0.081600, 0.000000],
        [0.164900, 0.061000, 0.000000],
        [0.121200, 0.044580, 0.000000],
        [0.087400, 0.032000, 0.000000],
        [0.063600, 0.023200, 0.000000],
        [0.046770, 0.017000, 0.000000],
        [0.032900, 0.011920, 0.000000],
        [0.022700, 0.008210, 0.000000],
        [0.015840, 0.005723, 0.000000],
        [0.011359, 0.004102, 0.000000],
        [0.008111, 0.002929, 0.000000],
        [0.005790, 0.002091, 0.000000],
        [0.004109, 0.001484, 0.000000],
        [0.002899, 0.001047, 0.000000],
        [0.002049, 0.000740, 0.000000],
        [0.001440, 0.000520, 0.000000],
        [0.001000, 0.000361, 0.000000],
        [0.000690, 0.000249, 0.000000],
        [0.000476, 0.000172, 0.000000],
        [0.000332, 0.000120, 0.000000],
        [0.000235, 0.000085, 0.000000],
        [0.000166, 0.000060, 0.000000],
        [0.000117, 0.000042, 0.000000],
        [0.000083, 0.000030, 0.000000],
        [0.000059, 0.000021, 0.000000],
        [0.000042, 0.000015, 0.000000],
    ];

    /// Colour-matching functions at `wavelength`, linearly interpolated and
    /// zero outside the tabulated range.
    pub fn xyz(wavelength: f64) -> [f64; 3] {
        let last = CIE_1931_2_DEGREE.len() - 1;
        let position = (wavelength - START) / INTERVAL;
        if !(0.0..=last as f64).contains(&position) {
            return [0.0; 3];
        }
        let index = (position.floor() as usize).min(last - 1);
        let t = position - index as f64;
        let (low, high) = (CIE_1931_2_DEGREE[index], CIE_1931_2_DEGREE[index + 1]);
        [0, 1, 2].map(|c| low[c] * (1.0 - t) + high[c] * t)
    }

    pub fn x(wavelength: f64) -> f64 {
        xyz(wavelength)[0]
    }

    pub fn y(wavelength: f64) -> f64 {
        xyz(wavelength)[1]
    }

    pub fn z(wavelength: f64) -> f64 {
        xyz(wavelength)[2]
    }
}

// ---------------------------------------------------------------------------
// Illuminant A
// ---------------------------------------------------------------------------

/// Second radiation constant as fixed by CIE 15 for illuminant A, in nm·K.
const PLANCK_C2: f64 = 1.435e7;
const ILLUMINANT_A_CCT: f64 = 2848.0;

/// Relative power of illuminant A, normalised to 100 at 560 nm.
///
/// ```text
/// S(λ) = 100 · (560/λ)^5 · (exp(c₂ / (T·560)) − 1) / (exp(c₂ / (T·λ)) − 1)
/// ```
pub fn illuminant_a(wavelength: f64) -> f64 {
    let t = ILLUMINANT_A_CCT;
    100.0 * (560.0 / wavelength).powi(5) * ((PLANCK_C2 / (t * 560.0)).exp() - 1.0)
        / ((PLANCK_C2 / (t * wavelength)).exp() - 1.0)
}

// ---------------------------------------------------------------------------
// Tabulated data, 380 to 780 nm at 10 nm
// ---------------------------------------------------------------------------

const TABLE_START: f64 = 380.0;
const TABLE_INTERVAL: f64 = 10.0;

const ILLUMINANT_C: [f64; 41] = [
    33.0, 47.4, 63.3, 80.6, 98.1, 112.4, 121.5, 124.0, 123.1, 123.8, 123.9, 120.7, 112.1, 102.3,
    96.9, 98.0, 102.1, 105.2, 105.3, 102.3, 97.8, 93.2, 89.7, 88.4, 88.1, 88.0, 87.8, 88.2, 87.9,
    86.3, 84.0, 80.2, 76.3, 72.4, 68.3, 64.4, 61.5, 59.2, 58.1, 58.2, 59.1,
];

/// CIE daylight basis functions S0, S1 and S2.
const DAYLIGHT_S0: [f64; 41] = [
    63.4, 65.8, 94.8, 104.8, 105.9, 96.8, 113.9, 125.6, 125.5, 121.3, 121.3, 113.5, 113.1, 110.8,
    106.5, 108.8, 105.3, 104.4, 100.0, 96.0, 95.1, 89.1, 90.5, 90.3, 88.4, 84.0, 85.1, 81.9, 82.6,
    84.9, 81.3, 71.9, 74.3, 76.4, 63.3, 71.7, 77.0, 65.2, 47.7, 68.6, 65.0,
];

const DAYLIGHT_S1: [f64; 41] = [
    38.5, 35.0, 43.4, 46.3, 43.9, 37.1, 36.7, 35.9, 32.6, 27.9, 24.3, 20.1, 16.2, 13.2, 8.6, 6.1,
    4.2, 1.9, 0.0, -1.6, -3.5, -3.5, -5.8, -7.2, -8.6, -9.5, -10.9, -10.7, -12.0, -14.0, -13.6,
    -12.0, -13.3, -12.9, -10.6, -11.6, -12.2, -10.2, -7.8, -11.2, -10.4,
];

const DAYLIGHT_S2: [f64; 41] = [
    3.0, 1.2, -1.1, -0.5, -0.7, -1.2, -2.6, -2.9, -2.8, -2.6, -2.6, -1.8, -1.5, -1.3, -1.2, -1.0,
    -0.5, -0.3, 0.0, 0.2, 0.5, 2.1, 3.2, 4.1, 4.7, 5.1, 6.7, 7.3, 8.6, 9.8, 10.2, 8.3, 9.6, 8.5,
    7.0, 7.6, 8.0, 6.7, 5.2, 7.4, 6.8,
];

/// CIE daylight at chromaticity `xy`.
///
/// ```text
/// M  = 0.0241 + 0.2562x − 0.7341y
/// M1 = (−1.3515 − 1.7703x + 5.9114y) / M
/// M2 = (0.0300 − 31.4424x + 30.0717y) / M
/// S  = S0 + M1·S1 + M2·S2
/// ```
pub fn daylight(xy: [f64; 2]) -> SpectralDistribution {
    let [x, y] = xy;
    let m = 0.0241 + 0.2562 * x - 0.7341 * y;
    let m1 = (-1.3515 - 1.7703 * x + 5.9114 * y) / m;
    let m2 = (0.0300 - 31.4424 * x + 30.0717 * y) / m;

    let values = DAYLIGHT_S0
        .iter()
        .zip(DAYLIGHT_S1)
        .zip(DAYLIGHT_S2)
        .map(|((s0, s1), s2)| s0 + m1 * s1 + m2 * s2)
        .collect();
    SpectralDistribution::new(TABLE_START, TABLE_INTERVAL, values)
}

/// Relative spectral power of a named illuminant.
///
/// Supported: `A`, `C`, `E` and the D-series entries of the CIE 1931 table
/// (`D50`, `D55`, `D60`, `D65`, `D75`).
pub fn illuminant_spd(label: &str) -> Result<SpectralDistribution, ColourError> {
    match label {
        "A" => Ok(SpectralDistribution::from_fn(300.0, 830.0, 5.0, illuminant_a)),
        "C" => Ok(SpectralDistribution::new(TABLE_START, TABLE_INTERVAL, ILLUMINANT_C.to_vec())),
        "E" => Ok(SpectralDistribution::from_fn(300.0, 830.0, 5.0, |_| 100.0)),
        _ if label.starts_with('D') => {
            let xy = illuminant_chromaticity(Observer::Cie1931TwoDegree, label)?;
            Ok(daylight(xy))
        }
        _ => Err(ColourError::unknown(KeyKind::Illuminant, label)),
    }
}
