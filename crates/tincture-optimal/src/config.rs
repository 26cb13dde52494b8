//! Sampling configuration for optimal colour locus generation.

use serde::{Deserialize, Serialize};
use tincture_core::ColourError;

/// How a [`MacAdamLocus`](crate::MacAdamLocus) is derived from spectral data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocusConfig {
    pub start_wavelength: f64,
    pub end_wavelength: f64,
    pub interval: f64,
    /// Levels sit at `i / levels` for `i = 1..levels`, plus `Y = 1`.
    pub levels: usize,
}

impl LocusConfig {
    /// Sampling of the built-in loci: every tabulated colour-matching
    /// function sample from 380 to 780 nm, 50 luminance levels.
    pub const STANDARD: Self = Self {
        start_wavelength: 380.0,
        end_wavelength: 780.0,
        interval: 5.0,
        levels: 50,
    };
}

impl Default for LocusConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl LocusConfig {
    /// Wavelengths sampled by this configuration, end inclusive.
    pub fn wavelengths(&self) -> impl Iterator<Item = f64> + '_ {
        let count = ((self.end_wavelength - self.start_wavelength) / self.interval).round() as usize;
        (0..=count).map(move |i| self.start_wavelength + i as f64 * self.interval)
    }

    /// Luminance of every level, ascending, ending at 1.
    pub fn luminances(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=self.levels).map(move |i| i as f64 / self.levels as f64)
    }

    pub fn validate(&self) -> Result<(), ColourError> {
        if !(self.interval > 0.0) {
            return Err(ColourError::InvalidLocus(format!(
                "sampling interval must be positive, got {}",
                self.interval
            )));
        }
        if !(self.end_wavelength - self.start_wavelength >= 2.0 * self.interval) {
            return Err(ColourError::InvalidLocus(format!(
                "wavelength range {}..{} holds fewer than three samples",
                self.start_wavelength, self.end_wavelength
            )));
        }
        if self.levels < 2 {
            return Err(ColourError::InvalidLocus(format!(
                "at least two luminance levels are needed, got {}",
                self.levels
            )));
        }
        Ok(())
    }
}
