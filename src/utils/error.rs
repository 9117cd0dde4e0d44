// Error types for version parsing and validation

use crate::models::identifier::IdentifierKind;

/// Reasons a version string can be rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// Core section did not split into major.minor.patch
    #[error("Core version must have exactly 3 identifiers major.minor.patch, found {found} in '{input}'")]
    CoreArity { input: String, found: usize },

    /// An identifier or dotted segment is empty
    #[error("Empty {kind} identifier in '{value}'")]
    EmptyIdentifier { kind: IdentifierKind, value: String },

    /// A character outside the identifier's allowed set
    #[error("Invalid {kind} identifier '{value}': character {character:?} is not allowed")]
    InvalidCharacter {
        kind: IdentifierKind,
        value: String,
        character: char,
    },

    /// Numeric identifier with a leading zero
    #[error("Invalid {kind} identifier '{value}': numeric identifiers must not have leading zeros")]
    LeadingZero { kind: IdentifierKind, value: String },

    /// Core identifier too large for u64
    #[error("Invalid {kind} identifier '{value}': value does not fit in 64 bits")]
    NumericOverflow { kind: IdentifierKind, value: String },

    /// Identifier kind name that has no validation rules
    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),
}

impl VersionError {
    /// Identifier kind the error is attributed to, if any
    pub const fn kind(&self) -> Option<IdentifierKind> {
        match self {
            Self::EmptyIdentifier { kind, .. }
            | Self::InvalidCharacter { kind, .. }
            | Self::LeadingZero { kind, .. }
            | Self::NumericOverflow { kind, .. } => Some(*kind),
            Self::CoreArity { .. } | Self::UnknownIdentifier(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VersionError>;
