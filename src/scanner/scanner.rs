use std::{fs, path::Path};

use crate::{
    errors::errors::{LexicalError, ScanError},
    symbol_table::symbol_table::SymbolTable,
};

use super::tokens::{
    is_alphabet, is_identifier, is_numeric_constant, is_separator, is_string_constant, PifEntry,
    ReservedWords,
};

/// Stop set for ordinary tokens: separators end a token, quote and
/// minus end it but stay part of the text.
const TOKEN_STOPS: &str = " \r\n\"-";
/// Stop set for the remainder of a quoted string: a line break before
/// the closing quote leaves the string unterminated.
const STRING_STOPS: &str = "\"\r\n";

/// Output of one scan: the PIF in source order plus the symbol table
/// holding every unique identifier and constant. Both are owned by the
/// result, so independent scans never share state.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub pif: Vec<PifEntry>,
    pub symbol_table: SymbolTable,
}

pub struct Scanner<'a> {
    source: &'a [u8],
    reserved: &'a ReservedWords,
    pos: usize,
    line: usize,
    token_line: usize,
    pif: Vec<PifEntry>,
    symbol_table: SymbolTable,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, reserved: &'a ReservedWords) -> Scanner<'a> {
        Scanner {
            source: source.as_bytes(),
            reserved,
            pos: 0,
            line: 1,
            token_line: 1,
            pif: vec![],
            symbol_table: SymbolTable::new(),
        }
    }

    /// Runs the scan to end of input or the first lexical error.
    pub fn scan(mut self) -> Result<ScanResult, LexicalError> {
        while let Some(token) = self.read_token()? {
            if token.is_empty() {
                // consecutive separators, nothing to classify
                continue;
            }
            let entry = if self.reserved.contains(&token) {
                PifEntry::reserved(token)
            } else if is_identifier(&token) {
                PifEntry::identifier(self.intern(&token))
            } else if is_numeric_constant(&token) || is_string_constant(&token) {
                PifEntry::constant(self.intern(&token))
            } else {
                return Err(LexicalError::invalid_token(token, self.token_line));
            };
            self.pif.push(entry);
        }

        Ok(ScanResult {
            pif: self.pif,
            symbol_table: self.symbol_table,
        })
    }

    /// Lookup-or-put; the lookup guard keeps table values unique, which
    /// `put` itself does not enforce.
    fn intern(&mut self, token: &str) -> usize {
        match self.symbol_table.lookup(token) {
            Some(handle) => handle,
            None => self.symbol_table.put(token),
        }
    }

    /// Produces the next complete token, `Ok(None)` at end of input.
    ///
    /// A raw run ending in `-` alone must continue into digits, and one
    /// ending in an opening quote must continue to the closing quote on
    /// the same line; both are validated here so classification sees
    /// complete tokens only.
    fn read_token(&mut self) -> Result<Option<String>, LexicalError> {
        let Some(token) = self.read_until(TOKEN_STOPS)? else {
            return Ok(None);
        };

        if token == "-" {
            let line = self.token_line;
            let Some(digits) = self.read_until(TOKEN_STOPS)? else {
                return Err(LexicalError::invalid_token(token, line));
            };
            let number = token + &digits;
            if !is_numeric_constant(&number) {
                return Err(LexicalError::invalid_token(number, line));
            }
            Ok(Some(number))
        } else if token == "\"" {
            let line = self.token_line;
            let Some(rest) = self.read_until(STRING_STOPS)? else {
                return Err(LexicalError::invalid_token(token, line));
            };
            let string = token + &rest;
            if !is_string_constant(&string) {
                return Err(LexicalError::invalid_token(string, line));
            }
            Ok(Some(string))
        } else {
            Ok(Some(token))
        }
    }

    /// Consumes characters up to the next stop character. A separator
    /// stop is discarded; a non-separator stop (quote, minus) is kept as
    /// token text. End of input before any stop is "no token" and drops
    /// whatever was buffered.
    fn read_until(&mut self, stops: &str) -> Result<Option<String>, LexicalError> {
        let mut token = String::new();

        loop {
            let Some(character) = self.read() else {
                return Ok(None);
            };
            if stops.contains(character) {
                if !is_separator(character) {
                    self.push(&mut token, character);
                }
                return Ok(Some(token));
            }
            if !is_alphabet(character) {
                return Err(LexicalError::invalid_character(character, self.line));
            }
            self.push(&mut token, character);
        }
    }

    /// Appends to the token in progress, remembering the line its first
    /// character sits on for later error reports.
    fn push(&mut self, token: &mut String, character: char) {
        if token.is_empty() {
            self.token_line = self.line;
        }
        token.push(character);
    }

    fn read(&mut self) -> Option<char> {
        let character = *self.source.get(self.pos)? as char;
        self.pos += 1;
        if character == '\n' {
            self.line += 1;
        }
        Some(character)
    }
}

/// Scans `source` against the reserved-word list, producing the PIF and
/// the symbol table, or the first lexical error.
pub fn scan(source: &str, reserved: &ReservedWords) -> Result<ScanResult, LexicalError> {
    Scanner::new(source, reserved).scan()
}

/// Reads a source file and scans it. I/O failures surface as
/// `ScanError::Io`, distinct from lexical failures.
pub fn scan_file(path: &Path, reserved: &ReservedWords) -> Result<ScanResult, ScanError> {
    let source = fs::read_to_string(path)?;
    Ok(scan(&source, reserved)?)
}
