use std::cmp::Ordering;
use tracing::{debug, trace};

use crate::models::identifier::IdentifierKind;
use crate::models::version::Version;
use crate::utils::error::{Result, VersionError};
use crate::utils::validation::validate_identifier;

/// Trait for parsing and ordering version strings
pub trait VersionParser {
    /// Parse a version string into a validated `Version`
    fn parse_version(&self, version: &str) -> Result<Version>;

    /// Compare two version strings by precedence
    fn compare_versions(&self, v1: &str, v2: &str) -> Result<Ordering> {
        let v1 = self.parse_version(v1)?;
        let v2 = self.parse_version(v2)?;
        Ok(v1.cmp(&v2))
    }
}

/// The five raw identifier slots of a version string, not yet validated
///
/// Pre-release and build text is kept whole; dot-splitting happens during
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawVersion<'a> {
    pub major: &'a str,
    pub minor: &'a str,
    pub patch: &'a str,
    pub pre_release: Option<&'a str>,
    pub build: Option<&'a str>,
}

impl<'a> RawVersion<'a> {
    /// Split a version string into its raw slots
    ///
    /// Only the first `+` and the first `-` before it act as separators; any
    /// later occurrence stays inside the build or pre-release text.
    pub fn split(input: &'a str) -> Result<Self> {
        let (rest, build) = match input.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (input, None),
        };

        let (core, pre_release) = match rest.split_once('-') {
            Some((core, pre_release)) => (core, Some(pre_release)),
            None => (rest, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        let [major, minor, patch] = parts[..] else {
            return Err(VersionError::CoreArity {
                input: input.to_string(),
                found: parts.len(),
            });
        };

        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }

    /// Raw text held in the slot for `kind`
    pub const fn get(&self, kind: IdentifierKind) -> Option<&'a str> {
        match kind {
            IdentifierKind::Major => Some(self.major),
            IdentifierKind::Minor => Some(self.minor),
            IdentifierKind::Patch => Some(self.patch),
            IdentifierKind::PreRelease => self.pre_release,
            IdentifierKind::Build => self.build,
        }
    }

    /// Validate every present slot: build, then pre-release, then core
    pub fn validate(&self) -> Result<()> {
        const ORDER: [IdentifierKind; 5] = [
            IdentifierKind::Build,
            IdentifierKind::PreRelease,
            IdentifierKind::Major,
            IdentifierKind::Minor,
            IdentifierKind::Patch,
        ];

        for kind in ORDER {
            if let Some(raw) = self.get(kind) {
                validate_identifier(kind, raw)?;
            }
        }
        Ok(())
    }

    /// Build a `Version` from validated slots
    pub fn into_version(self) -> Result<Version> {
        Ok(Version::from_parts(
            parse_core(IdentifierKind::Major, self.major)?,
            parse_core(IdentifierKind::Minor, self.minor)?,
            parse_core(IdentifierKind::Patch, self.patch)?,
            self.pre_release.map(str::to_string),
            self.build.map(str::to_string),
        ))
    }
}

fn parse_core(kind: IdentifierKind, raw: &str) -> Result<u64> {
    raw.parse().map_err(|_| VersionError::NumericOverflow {
        kind,
        value: raw.to_string(),
    })
}

/// Strict semantic version parser
#[derive(Debug, Default, Clone, Copy)]
pub struct SemverParser;

impl VersionParser for SemverParser {
    fn parse_version(&self, version: &str) -> Result<Version> {
        let parsed = RawVersion::split(version).and_then(|raw| {
            raw.validate()?;
            raw.into_version()
        });

        match &parsed {
            Ok(_) => trace!(version, "Parsed version"),
            Err(err) => debug!(version, kind = ?err.kind(), "Rejected version: {}", err),
        }
        parsed
    }
}
