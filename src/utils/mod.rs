// Shared error and validation utilities
pub mod error;
pub mod validation;
