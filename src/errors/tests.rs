//! Unit tests for error handling.
//!
//! This module contains tests for error construction, accessors and the
//! report format.

use crate::errors::errors::{LexicalError, LexicalErrorKind, ScanError};

#[test]
fn test_invalid_character_error() {
    let error = LexicalError::invalid_character('@', 3);

    assert_eq!(error.line(), 3);
    assert_eq!(error.target(), "@");
    assert_eq!(error.tag(), "Invalid character");
}

#[test]
fn test_invalid_token_error() {
    let error = LexicalError::invalid_token("-abc", 12);

    assert_eq!(error.line(), 12);
    assert_eq!(error.target(), "-abc");
    assert_eq!(error.tag(), "Invalid identifier or literal token");
}

#[test]
fn test_error_display_format() {
    let error = LexicalError::invalid_token("-", 4);
    assert_eq!(
        error.to_string(),
        "Lexical error on line 4: '-' - Invalid identifier or literal token"
    );

    let error = LexicalError::invalid_character('#', 1);
    assert_eq!(
        error.to_string(),
        "Lexical error on line 1: '#' - Invalid character"
    );
}

#[test]
fn test_error_kind_accessor() {
    let error = LexicalError::invalid_character('@', 1);
    assert_eq!(
        error.kind(),
        &LexicalErrorKind::InvalidCharacter { character: '@' }
    );
}

#[test]
fn test_non_ascii_character_reported_by_value() {
    let error = LexicalError::invalid_character('é', 2);

    assert_eq!(error.target(), "0xE9");
    assert_eq!(
        error.to_string(),
        "Lexical error on line 2: '0xE9' - Invalid character"
    );
}

#[test]
fn test_scan_error_from_lexical() {
    let scan_error = ScanError::from(LexicalError::invalid_token("-", 2));
    match scan_error {
        ScanError::Lexical(error) => assert_eq!(error.line(), 2),
        ScanError::Io(_) => panic!("expected a lexical error"),
    }
}

#[test]
fn test_scan_error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.verba");
    let scan_error = ScanError::from(io);
    assert!(matches!(scan_error, ScanError::Io(_)));
}
