// Services module for parsing logic
pub mod version_parser;
