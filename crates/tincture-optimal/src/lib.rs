//! Tincture Optimal: object colour limits.
//!
//! Answers whether an xyY colour is physically attainable by a reflecting
//! surface under a given illuminant (MacAdam limits). The limits are
//! computed from spectral data the first time an illuminant is queried.

pub mod config;
pub mod limits;
pub mod locus;
pub mod spectral;

pub use config::LocusConfig;
pub use limits::{is_within_macadam_limits, macadam_illuminants, macadam_locus, within_macadam_limits};
pub use locus::{LocusLevel, MacAdamLocus};
pub use spectral::{SpectralDistribution, illuminant_spd};
