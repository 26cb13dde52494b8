//! MacAdam limits: the boundary of object colours at each luminance.
//!
//! A [`MacAdamLocus`] is a stack of chromaticity polygons, one per luminance
//! level. The boundary at an arbitrary luminance is the vertex-wise linear
//! interpolation of the two levels that bracket it.

use serde::{Deserialize, Serialize};
use tincture_core::ColourError;

use crate::config::LocusConfig;
use crate::spectral::{SpectralDistribution, std_observer};

/// One tabulated luminance level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocusLevel {
    pub luminance: f64,
    /// Chromaticity polygon, in traversal order.
    pub vertices: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MacAdamLocus {
    label: String,
    levels: Vec<LocusLevel>,
}

impl MacAdamLocus {
    /// Load a tabulated locus.
    ///
    /// Levels must be strictly ascending in luminance, lie in (0, 1] and
    /// share a vertex count of at least three.
    pub fn from_levels(label: impl Into<String>, levels: Vec<LocusLevel>) -> Result<Self, ColourError> {
        let label = label.into();
        let Some(first) = levels.first() else {
            return Err(ColourError::InvalidLocus(format!("{label}: no levels")));
        };
        let vertex_count = first.vertices.len();
        if vertex_count < 3 {
            return Err(ColourError::InvalidLocus(format!(
                "{label}: a level needs at least three vertices, got {vertex_count}"
            )));
        }

        let mut previous = 0.0;
        for level in &levels {
            if !(level.luminance > previous && level.luminance <= 1.0) {
                return Err(ColourError::InvalidLocus(format!(
                    "{label}: luminance {} is out of order or outside (0, 1]",
                    level.luminance
                )));
            }
            if level.vertices.len() != vertex_count {
                return Err(ColourError::InvalidLocus(format!(
                    "{label}: level at Y = {} has {} vertices, expected {vertex_count}",
                    level.luminance,
                    level.vertices.len()
                )));
            }
            previous = level.luminance;
        }

        Ok(Self { label, levels })
    }

    /// Compute the optimal colour loci of an illuminant.
    ///
    /// Illuminant power and the CIE 1931 colour-matching functions are
    /// multiplied per sample and scaled so the perfect reflector has
    /// `Y = 1`. For every start sample and every level, a circular
    /// square-wave reflectance beginning at that sample is widened until its
    /// luminance reaches the level; the last sample may be partially
    /// covered. The pulse's chromaticity is the vertex for that start. The
    /// level at `Y = 1` is the illuminant's own chromaticity.
    pub fn from_spectrum(
        label: impl Into<String>,
        spd: &SpectralDistribution,
        config: &LocusConfig,
    ) -> Result<Self, ColourError> {
        let label = label.into();
        config.validate()?;
        let pulses = PulseTable::new(spd, config).ok_or_else(|| {
            ColourError::InvalidLocus(format!("{label}: illuminant has no luminance in range"))
        })?;

        let whitepoint = pulses.chromaticity(pulses.total);
        let levels = config
            .luminances()
            .map(|luminance| {
                let vertices = if luminance >= 1.0 {
                    vec![whitepoint; pulses.len()]
                } else {
                    (0..pulses.len())
                        .map(|start| pulses.chromaticity(pulses.pulse_at(start, luminance)))
                        .collect()
                };
                LocusLevel { luminance, vertices }
            })
            .collect();

        tracing::debug!(
            illuminant = %label,
            samples = pulses.len(),
            levels = config.levels,
            "computed MacAdam locus"
        );
        Self::from_levels(label, levels)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn levels(&self) -> &[LocusLevel] {
        &self.levels
    }

    /// Interpolated boundary polygon at `luminance`.
    ///
    /// Below the first level the first polygon is used. Returns `None` for
    /// `Y ≤ 0`, `Y` above the last level or non-finite input.
    pub fn boundary_at(&self, luminance: f64) -> Option<Vec<[f64; 2]>> {
        if !luminance.is_finite() || luminance <= 0.0 {
            return None;
        }
        let first = self.levels.first()?;
        if luminance <= first.luminance {
            return Some(first.vertices.clone());
        }

        // Binary search for the upper bracketing level.
        let upper = self.levels.partition_point(|level| level.luminance < luminance);
        let high = self.levels.get(upper)?;
        if high.luminance == luminance {
            return Some(high.vertices.clone());
        }
        let low = &self.levels[upper - 1];
        let t = (luminance - low.luminance) / (high.luminance - low.luminance);

        Some(
            low.vertices
                .iter()
                .zip(&high.vertices)
                .map(|(a, b)| [a[0] + (b[0] - a[0]) * t, a[1] + (b[1] - a[1]) * t])
                .collect(),
        )
    }

    /// Whether `xyy` lies inside the object colour solid.
    pub fn contains(&self, xyy: [f64; 3]) -> bool {
        let [x, y, luminance] = xyy;
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        self.boundary_at(luminance)
            .is_some_and(|polygon| polygon_contains(&polygon, [x, y]))
    }
}

/// Even-odd ray-crossing test.
///
/// A horizontal ray from `point` towards +x toggles the state at every edge
/// it crosses. Points exactly on an edge may land either way.
pub fn polygon_contains(polygon: &[[f64; 2]], point: [f64; 2]) -> bool {
    let [px, py] = point;
    let mut inside = false;
    let mut j = polygon.len().wrapping_sub(1);
    for (i, &[xi, yi]) in polygon.iter().enumerate() {
        let [xj, yj] = polygon[j];
        if (yi > py) != (yj > py) {
            let crossing = xi + (py - yi) * (xj - xi) / (yj - yi);
            if px < crossing {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Illuminant-weighted colour-matching functions with circular prefix sums,
/// so any pulse costs two lookups.
struct PulseTable {
    weights: Vec<[f64; 3]>,
    /// `prefix[k]` sums `weights[i % n]` for `i < k`, for `k` in `0..=2n`.
    prefix: Vec<[f64; 3]>,
    total: [f64; 3],
}

impl PulseTable {
    fn new(spd: &SpectralDistribution, config: &LocusConfig) -> Option<Self> {
        let mut weights: Vec<[f64; 3]> = config
            .wavelengths()
            .map(|wavelength| {
                let power = spd.value_at(wavelength);
                std_observer::xyz(wavelength).map(|c| c * power)
            })
            .collect();

        let luminance: f64 = weights.iter().map(|w| w[1]).sum();
        if !(luminance > 0.0) {
            return None;
        }
        for weight in &mut weights {
            *weight = weight.map(|c| c / luminance);
        }

        let n = weights.len();
        let mut prefix = Vec::with_capacity(2 * n + 1);
        let mut running = [0.0; 3];
        prefix.push(running);
        for i in 0..2 * n {
            let w = weights[i % n];
            running = [running[0] + w[0], running[1] + w[1], running[2] + w[2]];
            prefix.push(running);
        }
        let total = prefix[n];

        Some(Self {
            weights,
            prefix,
            total,
        })
    }

    fn len(&self) -> usize {
        self.weights.len()
    }

    /// Tristimulus values of the narrowest pulse starting at `start` whose
    /// luminance equals `target`.
    fn pulse_at(&self, start: usize, target: f64) -> [f64; 3] {
        let n = self.len();
        let base = self.prefix[start];
        let window = &self.prefix[start..=start + n];

        // Whole samples that fit under the target.
        let whole = window.partition_point(|p| p[1] - base[1] <= target) - 1;
        let covered = window[whole];
        if whole == n {
            return self.total;
        }

        let next = self.weights[(start + whole) % n];
        let fraction = if next[1] > 0.0 {
            ((target - (covered[1] - base[1])) / next[1]).clamp(0.0, 1.0)
        } else {
            0.0
        };
        [0, 1, 2].map(|c| covered[c] - base[c] + fraction * next[c])
    }

    fn chromaticity(&self, xyz: [f64; 3]) -> [f64; 2] {
        let sum = xyz[0] + xyz[1] + xyz[2];
        [xyz[0] / sum, xyz[1] / sum]
    }
}
