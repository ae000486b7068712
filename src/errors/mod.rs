//! Error types and error handling for the lexical analyzer.
//!
//! This module defines the error types used during scanning. It
//! includes:
//!
//! - The lexical error carrying line number, offending text and cause tag
//! - The scan-level error separating lexical failures from I/O failures
//! - Error formatting matching the analyzer's report format

pub mod errors;

#[cfg(test)]
mod tests;
