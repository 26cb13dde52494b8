use std::fmt;

/// The table a failed lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Illuminant,
    Observer,
    Colourspace,
    ChromaticAdaptation,
    MacAdamLocus,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Illuminant => write!(f, "illuminant"),
            Self::Observer => write!(f, "observer"),
            Self::Colourspace => write!(f, "colourspace"),
            Self::ChromaticAdaptation => write!(f, "chromatic adaptation method"),
            Self::MacAdamLocus => write!(f, "MacAdam locus"),
        }
    }
}

/// Errors that can occur in colour conversions and table lookups.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColourError {
    /// A name was not found in the table `kind` refers to.
    #[error("unknown {kind}: {key:?}")]
    UnknownKey { kind: KeyKind, key: String },

    /// The trailing axis holds the wrong number of channels.
    #[error("expected a trailing channel axis of length {expected}, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// A shape whose element count disagrees with the data, or a rank-0 shape.
    #[error("shape {shape:?} does not describe {len} values")]
    InvalidShape { shape: Vec<usize>, len: usize },

    /// A colourspace matrix that cannot be inverted.
    #[error("matrix is singular: {0}")]
    SingularMatrix(String),

    /// A colourspace descriptor failed its self-check.
    #[error("{name}: {reason}")]
    InvariantViolation { name: String, reason: String },

    /// A MacAdam locus table or sampling configuration is malformed.
    #[error("invalid MacAdam locus: {0}")]
    InvalidLocus(String),
}

impl ColourError {
    /// Shorthand for [`ColourError::UnknownKey`].
    pub fn unknown(kind: KeyKind, key: &str) -> Self {
        Self::UnknownKey {
            kind,
            key: key.to_string(),
        }
    }
}
