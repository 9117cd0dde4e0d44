use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::VersionError;

/// The five identifier slots of a semantic version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Major version number
    Major,
    /// Minor version number
    Minor,
    /// Patch version number
    Patch,
    /// Dot-separated pre-release identifiers after `-`
    PreRelease,
    /// Dot-separated build metadata after `+`
    Build,
}

/// Validation rules attached to an identifier kind
#[derive(Debug)]
pub struct IdentifierRules {
    /// Predicate for characters permitted in a segment
    pub allowed: fn(char) -> bool,
    /// Whether purely numeric segments may start with `0` when longer than one digit
    pub leading_zero_allowed: bool,
    /// Whether the raw value is split on `.` before validation
    pub dotted: bool,
}

impl IdentifierRules {
    /// Check a single character against this rule set
    pub fn allows(&self, c: char) -> bool {
        (self.allowed)(c)
    }
}

const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

const fn is_alphanumeric_or_hyphen(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

static CORE_RULES: IdentifierRules = IdentifierRules {
    allowed: is_digit,
    leading_zero_allowed: false,
    dotted: false,
};

static PRE_RELEASE_RULES: IdentifierRules = IdentifierRules {
    allowed: is_alphanumeric_or_hyphen,
    leading_zero_allowed: false,
    dotted: true,
};

// Build segments may keep leading zeros: "001" is valid metadata.
static BUILD_RULES: IdentifierRules = IdentifierRules {
    allowed: is_alphanumeric_or_hyphen,
    leading_zero_allowed: true,
    dotted: true,
};

impl IdentifierKind {
    /// Core identifiers in precedence order
    pub const CORE: [Self; 3] = [Self::Major, Self::Minor, Self::Patch];

    /// Returns the validation rules for this identifier kind
    pub fn rules(self) -> &'static IdentifierRules {
        match self {
            Self::Major | Self::Minor | Self::Patch => &CORE_RULES,
            Self::PreRelease => &PRE_RELEASE_RULES,
            Self::Build => &BUILD_RULES,
        }
    }

    /// Canonical name of this identifier kind
    pub const fn name(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::PreRelease => "pre_release",
            Self::Build => "build",
        }
    }

    /// Returns all identifier kinds
    pub const fn all() -> &'static [Self] {
        &[
            Self::Major,
            Self::Minor,
            Self::Patch,
            Self::PreRelease,
            Self::Build,
        ]
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for IdentifierKind {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            "pre_release" | "pre-release" => Ok(Self::PreRelease),
            "build" => Ok(Self::Build),
            _ => Err(VersionError::UnknownIdentifier(s.to_string())),
        }
    }
}
