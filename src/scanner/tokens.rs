use lazy_static::lazy_static;
use regex::Regex;
use std::{fmt::Display, fs, io, path::Path};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new("^[a-zA-Z][a-zA-Z0-9]*$").unwrap();
    static ref NUMERIC_CONSTANT: Regex = Regex::new("^-?[0-9]+$").unwrap();
    // interior characters: the token alphabet minus the quote itself
    static ref STRING_CONSTANT: Regex = Regex::new("^\"[a-zA-Z0-9 \r\n-]*\"$").unwrap();
}

// Character checks

pub fn is_letter(character: char) -> bool {
    character.is_ascii_alphabetic()
}

pub fn is_digit(character: char) -> bool {
    character.is_ascii_digit()
}

pub fn is_separator(character: char) -> bool {
    matches!(character, ' ' | '\r' | '\n')
}

pub fn is_quote(character: char) -> bool {
    character == '"'
}

pub fn is_minus(character: char) -> bool {
    character == '-'
}

/// Every character a source may contain. Anything outside this set is a
/// fatal lexical error, even inside an otherwise well-formed token.
pub fn is_alphabet(character: char) -> bool {
    is_letter(character)
        || is_digit(character)
        || is_separator(character)
        || is_quote(character)
        || is_minus(character)
}

// Token checks

pub fn is_identifier(token: &str) -> bool {
    IDENTIFIER.is_match(token)
}

pub fn is_numeric_constant(token: &str) -> bool {
    NUMERIC_CONSTANT.is_match(token)
}

pub fn is_string_constant(token: &str) -> bool {
    STRING_CONSTANT.is_match(token)
}

/// Reference value of PIF entries that carry no symbol-table payload.
pub const NO_REFERENCE: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenClass {
    /// A reserved word acts as its own class tag.
    Reserved(String),
    Identifier,
    Constant,
}

impl Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenClass::Reserved(word) => write!(f, "{}", word),
            TokenClass::Identifier => write!(f, "IDENTIFIER"),
            TokenClass::Constant => write!(f, "CONSTANT"),
        }
    }
}

/// One Program Internal Form entry: a token class paired with either a
/// symbol-table handle or `NO_REFERENCE` for reserved words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PifEntry {
    pub class: TokenClass,
    pub reference: i64,
}

impl PifEntry {
    pub fn reserved(word: impl Into<String>) -> Self {
        PifEntry {
            class: TokenClass::Reserved(word.into()),
            reference: NO_REFERENCE,
        }
    }

    pub fn identifier(handle: usize) -> Self {
        PifEntry {
            class: TokenClass::Identifier,
            reference: handle as i64,
        }
    }

    pub fn constant(handle: usize) -> Self {
        PifEntry {
            class: TokenClass::Constant,
            reference: handle as i64,
        }
    }
}

impl Display for PifEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.class, self.reference)
    }
}

/// Token class numbers begin with two fixed slots, so reserved words
/// number from 2 in list order. Downstream stages rely on this
/// numbering even though scanning itself only needs membership tests.
pub const IDENTIFIER_CLASS: usize = 0;
pub const CONSTANT_CLASS: usize = 1;
const RESERVED_BASE: usize = 2;

/// The externally supplied reserved-word list, loaded in full before
/// scanning begins.
#[derive(Debug, Clone, Default)]
pub struct ReservedWords {
    words: Vec<String>,
}

impl ReservedWords {
    /// Builds the list from lines of text, one word per line, in order.
    /// Blank lines are ignored.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> ReservedWords {
        ReservedWords {
            words: lines
                .into_iter()
                .map(str::trim_end)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    pub fn load(path: &Path) -> io::Result<ReservedWords> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::from_lines(contents.lines()))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.iter().any(|word| word == token)
    }

    /// The class number of `word` under the pipeline's numbering
    /// convention, or `None` for non-reserved tokens.
    pub fn class_code(&self, word: &str) -> Option<usize> {
        self.words
            .iter()
            .position(|reserved| reserved == word)
            .map(|position| position + RESERVED_BASE)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
