//! Tincture Core: colour-science primitives.
//!
//! Legacy colour-model conversions (HSV, HSL, CMY, CMYK), CIE xyY helpers,
//! standard illuminant chromaticities, chromatic adaptation and RGB
//! colourspace descriptors. Every conversion has a scalar form on fixed-size
//! arrays and a batch form on n-dimensional [`ColourArray`]s.
//!
//! The crate is pure and synchronous. Reference tables are built once on
//! first access and are read-only afterwards.

pub mod adaptation;
pub mod array;
pub mod colourspace;
pub mod error;
pub mod illuminants;
pub mod models;

// Re-exports for convenience.
pub use adaptation::{ChromaticAdaptation, adaptation_matrix};
pub use array::ColourArray;
pub use colourspace::{Colourspace, ColourspaceId, Transfer, TransferFunction, colourspace};
pub use error::{ColourError, KeyKind};
pub use illuminants::{Observer, illuminant_chromaticity};
