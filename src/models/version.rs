use serde::{Deserialize, Serialize};
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::services::version_parser::{SemverParser, VersionParser};
use crate::utils::error::{Result, VersionError};
use crate::utils::validation::is_numeric;

/// A validated semantic version: `MAJOR.MINOR.PATCH[-PRE_RELEASE][+BUILD]`
///
/// Values are immutable once parsed. Equality, hashing and ordering ignore build
/// metadata, so `1.0.0+a == 1.0.0+b`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<String>,
    build: Option<String>,
}

impl Version {
    /// Parse and validate a version string
    pub fn parse(version: &str) -> Result<Self> {
        SemverParser.parse_version(version)
    }

    /// Assemble a version from already validated parts
    pub(crate) const fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<String>,
        build: Option<String>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release,
            build,
        }
    }

    pub const fn major(&self) -> u64 {
        self.major
    }

    pub const fn minor(&self) -> u64 {
        self.minor
    }

    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// The `(major, minor, patch)` triple
    pub const fn core(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    /// Raw pre-release text, without the leading `-`
    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    /// Raw build metadata, without the leading `+`
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    pub const fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Dot-separated pre-release segments, empty for a normal release
    pub fn pre_release_identifiers(&self) -> impl Iterator<Item = &str> {
        self.pre_release.as_deref().into_iter().flat_map(|pre| pre.split('.'))
    }

    /// Dot-separated build metadata segments
    pub fn build_identifiers(&self) -> impl Iterator<Item = &str> {
        self.build.as_deref().into_iter().flat_map(|build| build.split('.'))
    }

    /// Compare against a value of unknown type
    ///
    /// Returns `None` when `other` is not a `Version`.
    pub fn try_cmp(&self, other: &dyn Any) -> Option<Ordering> {
        other.downcast_ref::<Self>().map(|other| self.cmp(other))
    }

    pub fn try_eq(&self, other: &dyn Any) -> Option<bool> {
        self.try_cmp(other).map(Ordering::is_eq)
    }

    pub fn try_ne(&self, other: &dyn Any) -> Option<bool> {
        self.try_cmp(other).map(Ordering::is_ne)
    }

    pub fn try_lt(&self, other: &dyn Any) -> Option<bool> {
        self.try_cmp(other).map(Ordering::is_lt)
    }

    pub fn try_le(&self, other: &dyn Any) -> Option<bool> {
        self.try_cmp(other).map(Ordering::is_le)
    }

    pub fn try_gt(&self, other: &dyn Any) -> Option<bool> {
        self.try_cmp(other).map(Ordering::is_gt)
    }

    pub fn try_ge(&self, other: &dyn Any) -> Option<bool> {
        self.try_cmp(other).map(Ordering::is_ge)
    }
}

/// Order two pre-release slots; a missing pre-release outranks any present one
fn compare_pre_release(left: Option<&str>, right: Option<&str>) -> Ordering {
    let (left, right) = match (left, right) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(left), Some(right)) => (left, right),
    };

    let mut left = left.split('.');
    let mut right = right.split('.');
    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => match compare_segment(l, r) {
                Ordering::Equal => continue,
                decided => return decided,
            },
            // A longer list with an equal prefix has higher precedence
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

fn compare_segment(left: &str, right: &str) -> Ordering {
    if left == right {
        return Ordering::Equal;
    }

    match (is_numeric(left), is_numeric(right)) {
        // No leading zeros, so the longer digit string is the larger number
        (true, true) => left.len().cmp(&right.len()).then_with(|| left.cmp(right)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => left.cmp(right),
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_pre_release(self.pre_release(), other.pre_release()))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{pre_release}")?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Version")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}
