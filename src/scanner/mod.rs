//! Lexical analysis module for the analyzer.
//!
//! This module contains the scanner that converts source text into the
//! Program Internal Form (PIF) consumed by the parser. It handles:
//!
//! - Character-level reading with separator-bounded raw tokens
//! - Negative numeric literals (`-` as a contextual prefix) and quoted
//!   string literals spanning embedded spaces
//! - Token classification into reserved words, identifiers and constants
//! - Symbol-table deduplication of identifiers and constants
//! - Line tracking for error reporting

pub mod scanner;
pub mod tokens;
