use std::fmt::Display;

use thiserror::Error;

/// The single lexical failure kind. Scanning halts at the first one;
/// no recovery or resynchronization is attempted within a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    kind: LexicalErrorKind,
    line: usize,
}

impl LexicalError {
    pub fn new(kind: LexicalErrorKind, line: usize) -> Self {
        LexicalError { kind, line }
    }

    pub fn invalid_character(character: char, line: usize) -> Self {
        LexicalError::new(LexicalErrorKind::InvalidCharacter { character }, line)
    }

    pub fn invalid_token(token: impl Into<String>, line: usize) -> Self {
        LexicalError::new(LexicalErrorKind::InvalidToken { token: token.into() }, line)
    }

    /// 1-based source line the failure was detected on.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The offending token or character text. The alphabet is ASCII
    /// only, so a character outside ASCII is really a raw input byte
    /// and is reported by value instead of as mojibake.
    pub fn target(&self) -> String {
        match &self.kind {
            LexicalErrorKind::InvalidCharacter { character } if !character.is_ascii() => {
                format!("0x{:02X}", *character as u32)
            }
            LexicalErrorKind::InvalidCharacter { character } => character.to_string(),
            LexicalErrorKind::InvalidToken { token } => token.clone(),
        }
    }

    /// Human-readable cause tag.
    pub fn tag(&self) -> &'static str {
        match &self.kind {
            LexicalErrorKind::InvalidCharacter { .. } => "Invalid character",
            LexicalErrorKind::InvalidToken { .. } => "Invalid identifier or literal token",
        }
    }

    pub fn kind(&self) -> &LexicalErrorKind {
        &self.kind
    }
}

impl Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lexical error on line {}: '{}' - {}",
            self.line,
            self.target(),
            self.tag()
        )
    }
}

impl std::error::Error for LexicalError {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexicalErrorKind {
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },
    #[error("invalid identifier or literal token: {token:?}")]
    InvalidToken { token: String },
}

/// Everything that can end a single scan early. A lexical failure and
/// an unreadable source are kept distinct so a multi-source driver can
/// report each appropriately and move on to the next source.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
}
