//! RGB colourspace descriptors.
//!
//! A [`Colourspace`] bundles primaries, whitepoint, the RGB ↔ XYZ matrices
//! and a transfer curve. Descriptors are immutable once built; the named
//! ones live in a process-wide registry (see [`registry`]).

pub mod convert;
pub mod registry;
pub mod transfer;

use glam::{DMat3, DVec3};

use crate::error::ColourError;
use crate::models::xy_to_xyz;

pub use registry::{ColourspaceId, colourspace, colourspace_by_name};
pub use transfer::{Transfer, TransferFunction};

/// Determinants below this are treated as singular.
const SINGULAR_DETERMINANT: f64 = 1e-12;

/// Samples used by [`Colourspace::verify`] for the transfer round trip.
const VERIFY_GRID_STEPS: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Colourspace {
    name: String,
    primaries: [[f64; 2]; 3],
    whitepoint: [f64; 2],
    rgb_to_xyz: DMat3,
    xyz_to_rgb: DMat3,
    transfer: Transfer,
}

impl Colourspace {
    /// Build a descriptor from an explicit RGB → XYZ matrix.
    ///
    /// The XYZ → RGB matrix is its inverse, computed here once.
    pub fn new(
        name: impl Into<String>,
        primaries: [[f64; 2]; 3],
        whitepoint: [f64; 2],
        rgb_to_xyz: DMat3,
        transfer: Transfer,
    ) -> Result<Self, ColourError> {
        let name = name.into();
        if rgb_to_xyz.determinant().abs() < SINGULAR_DETERMINANT {
            return Err(ColourError::SingularMatrix(name));
        }
        Ok(Self::assemble(name, primaries, whitepoint, rgb_to_xyz, transfer))
    }

    /// Build a descriptor whose matrix is the normalised primary matrix of
    /// `primaries` and `whitepoint`.
    pub fn from_primaries(
        name: impl Into<String>,
        primaries: [[f64; 2]; 3],
        whitepoint: [f64; 2],
        transfer: Transfer,
    ) -> Result<Self, ColourError> {
        let name = name.into();
        let npm = normalised_primary_matrix(primaries, whitepoint)
            .map_err(|_| ColourError::SingularMatrix(name.clone()))?;
        Self::new(name, primaries, whitepoint, npm, transfer)
    }

    /// Construction without the determinant check. Used by the registry,
    /// whose constants are checked through [`verify`](Self::verify) instead.
    pub(crate) fn assemble(
        name: String,
        primaries: [[f64; 2]; 3],
        whitepoint: [f64; 2],
        rgb_to_xyz: DMat3,
        transfer: Transfer,
    ) -> Self {
        Self {
            name,
            primaries,
            whitepoint,
            rgb_to_xyz,
            xyz_to_rgb: rgb_to_xyz.inverse(),
            transfer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chromaticities of the red, green and blue primaries.
    pub fn primaries(&self) -> [[f64; 2]; 3] {
        self.primaries
    }

    pub fn whitepoint(&self) -> [f64; 2] {
        self.whitepoint
    }

    pub fn rgb_to_xyz_matrix(&self) -> DMat3 {
        self.rgb_to_xyz
    }

    pub fn xyz_to_rgb_matrix(&self) -> DMat3 {
        self.xyz_to_rgb
    }

    pub fn transfer(&self) -> Transfer {
        self.transfer
    }

    /// Linear → encoded, as a plain function value.
    pub fn transfer_function(&self) -> impl Fn(f64) -> f64 + Copy + use<> {
        let transfer = self.transfer;
        move |linear| transfer.to_encoded(linear)
    }

    /// Encoded → linear, as a plain function value.
    pub fn inverse_transfer_function(&self) -> impl Fn(f64) -> f64 + Copy + use<> {
        let transfer = self.transfer;
        move |encoded| transfer.to_linear(encoded)
    }

    /// Apply the transfer curve to each channel of a linear triple.
    pub fn encode(&self, linear: [f64; 3]) -> [f64; 3] {
        linear.map(|c| self.transfer.to_encoded(c))
    }

    /// Remove the transfer curve from each channel of an encoded triple.
    pub fn decode(&self, encoded: [f64; 3]) -> [f64; 3] {
        encoded.map(|c| self.transfer.to_linear(c))
    }

    /// Linear RGB → XYZ relative to this colourspace's whitepoint.
    pub fn to_xyz(&self, linear_rgb: [f64; 3]) -> [f64; 3] {
        (self.rgb_to_xyz * DVec3::from_array(linear_rgb)).to_array()
    }

    /// XYZ → linear RGB, no adaptation.
    pub fn from_xyz(&self, xyz: [f64; 3]) -> [f64; 3] {
        (self.xyz_to_rgb * DVec3::from_array(xyz)).to_array()
    }

    /// Check that the matrices are mutual inverses and that the transfer
    /// curve round-trips on a uniform grid over [0, 1], both within
    /// `tolerance`.
    pub fn verify(&self, tolerance: f64) -> Result<(), ColourError> {
        let product = self.xyz_to_rgb * self.rgb_to_xyz;
        if !product.abs_diff_eq(DMat3::IDENTITY, tolerance) {
            return Err(self.violation(format!(
                "RGB to XYZ and XYZ to RGB matrices are not inverses (product {product})"
            )));
        }

        for step in 0..=VERIFY_GRID_STEPS {
            let value = step as f64 / VERIFY_GRID_STEPS as f64;
            let back = self.transfer.to_linear(self.transfer.to_encoded(value));
            if (back - value).abs() > tolerance {
                return Err(self.violation(format!(
                    "transfer round trip of {value} returned {back}"
                )));
            }
        }
        Ok(())
    }

    fn violation(&self, reason: String) -> ColourError {
        ColourError::InvariantViolation {
            name: self.name.clone(),
            reason,
        }
    }
}

/// Normalised primary matrix: the RGB → XYZ matrix that maps RGB white
/// `(1, 1, 1)` to the whitepoint at `Y = 1`.
///
/// ```text
/// P   = [XYZ(r) XYZ(g) XYZ(b)]      columns at unit luminance
/// S   = P⁻¹ · XYZ(w)
/// NPM = P · diag(S)
/// ```
///
/// # Reference
/// SMPTE RP 177-1993: Derivation of Basic Television Color Equations
pub fn normalised_primary_matrix(
    primaries: [[f64; 2]; 3],
    whitepoint: [f64; 2],
) -> Result<DMat3, ColourError> {
    let p = primary_matrix(primaries);
    if p.determinant().abs() < SINGULAR_DETERMINANT {
        return Err(ColourError::SingularMatrix("primaries".to_string()));
    }
    Ok(scale_to_whitepoint(p, whitepoint))
}

/// Unit-luminance primaries as matrix columns.
fn primary_matrix(primaries: [[f64; 2]; 3]) -> DMat3 {
    DMat3::from_cols(
        DVec3::from_array(xy_to_xyz(primaries[0])),
        DVec3::from_array(xy_to_xyz(primaries[1])),
        DVec3::from_array(xy_to_xyz(primaries[2])),
    )
}

fn scale_to_whitepoint(p: DMat3, whitepoint: [f64; 2]) -> DMat3 {
    let scale = p.inverse() * DVec3::from_array(xy_to_xyz(whitepoint));
    p * DMat3::from_diagonal(scale)
}

/// [`normalised_primary_matrix`] without the singularity check, for
/// constants that [`Colourspace::verify`] checks afterwards.
pub(crate) fn normalised_primary_matrix_unchecked(
    primaries: [[f64; 2]; 3],
    whitepoint: [f64; 2],
) -> DMat3 {
    scale_to_whitepoint(primary_matrix(primaries), whitepoint)
}
