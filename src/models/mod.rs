// Models module for data structures
pub mod identifier;
pub mod version;
