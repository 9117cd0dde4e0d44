// Identifier validation for semantic version strings

use crate::models::identifier::IdentifierKind;
use crate::utils::error::{Result, VersionError};

/// Returns true when `value` is a non-empty run of ASCII digits
pub fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a raw identifier slot
///
/// Pre-release and build values are split on `.` and every segment is checked on
/// its own; core values are checked whole. Empty segments are reported with the
/// full raw value, other violations with the offending segment.
pub fn validate_identifier(kind: IdentifierKind, raw: &str) -> Result<()> {
    if !kind.rules().dotted {
        return validate_segment(kind, raw);
    }

    for segment in raw.split('.') {
        if segment.is_empty() {
            return Err(VersionError::EmptyIdentifier {
                kind,
                value: raw.to_string(),
            });
        }
        validate_segment(kind, segment)?;
    }

    Ok(())
}

/// Validate a single identifier segment against the rules of `kind`
pub fn validate_segment(kind: IdentifierKind, segment: &str) -> Result<()> {
    let rules = kind.rules();

    if segment.is_empty() {
        return Err(VersionError::EmptyIdentifier {
            kind,
            value: segment.to_string(),
        });
    }

    if !rules.leading_zero_allowed
        && segment.len() > 1
        && segment.starts_with('0')
        && is_numeric(segment)
    {
        return Err(VersionError::LeadingZero {
            kind,
            value: segment.to_string(),
        });
    }

    if let Some(character) = segment.chars().find(|&c| !rules.allows(c)) {
        return Err(VersionError::InvalidCharacter {
            kind,
            value: segment.to_string(),
            character,
        });
    }

    Ok(())
}

/// Validate an identifier slot addressed by its name
pub fn validate_named_identifier(name: &str, raw: &str) -> Result<()> {
    let kind: IdentifierKind = name.parse()?;
    validate_identifier(kind, raw)
}
