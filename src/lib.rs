// semverd - strict semantic versioning
// Core library functionality

pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::identifier::IdentifierKind;
pub use models::version::Version;
pub use services::version_parser::{RawVersion, SemverParser, VersionParser};
pub use utils::error::{Result, VersionError};
