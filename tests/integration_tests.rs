//! Integration tests for end-to-end scanning.
//!
//! These tests verify the complete pipeline from source text through
//! raw token reading, classification and symbol-table interning to the
//! final Program Internal Form, including the file-based entry point.

use std::{fs, path::PathBuf};

use verba::{
    errors::errors::ScanError,
    scanner::{
        scanner::{scan, scan_file},
        tokens::{PifEntry, ReservedWords, TokenClass},
    },
    symbol_table::symbol_table::BUCKET_COUNT,
};

fn reserved(words: &[&str]) -> ReservedWords {
    ReservedWords::from_lines(words.iter().copied())
}

#[test]
fn test_scan_small_program() {
    let source = "\
int n
read n
if n
write \"result is\"
write -1
";
    let words = reserved(&["int", "if", "read", "write"]);
    let result = scan(source, &words).unwrap();
    let table = &result.symbol_table;

    let n = table.lookup("n").unwrap();
    assert_eq!(
        result.pif,
        vec![
            PifEntry::reserved("int"),
            PifEntry::identifier(n),
            PifEntry::reserved("read"),
            PifEntry::identifier(n),
            PifEntry::reserved("if"),
            PifEntry::identifier(n),
            PifEntry::reserved("write"),
            PifEntry::constant(table.lookup("\"result is\"").unwrap()),
            PifEntry::reserved("write"),
            PifEntry::constant(table.lookup("-1").unwrap()),
        ]
    );

    // one table entry per unique identifier/constant, all handles
    // decodable back to their values
    assert_eq!(table.len(), 3);
    for entry in table.entries() {
        assert_eq!(entry.handle % BUCKET_COUNT, entry.hash);
        assert_eq!(entry.handle / BUCKET_COUNT, entry.index);
        assert_eq!(table.get(entry.handle), Some(entry.symbol));
    }
}

#[test]
fn test_scan_file_end_to_end() {
    let dir = PathBuf::from("/tmp/verba_tests");
    fs::create_dir_all(&dir).unwrap();

    let words_path = dir.join("token.in");
    let source_path = dir.join("p1.verba");
    fs::write(&words_path, "int\nif\nwrite\n").unwrap();
    fs::write(&source_path, "int x\nwrite -42\n").unwrap();

    let words = ReservedWords::load(&words_path).unwrap();
    assert_eq!(words.len(), 3);

    let result = scan_file(&source_path, &words).unwrap();
    assert_eq!(result.pif.len(), 4);
    assert_eq!(result.pif[0], PifEntry::reserved("int"));
    assert_eq!(result.pif[1].class, TokenClass::Identifier);
    assert_eq!(result.pif[3].class, TokenClass::Constant);
    assert_eq!(result.symbol_table.symbols().len(), 2);
}

#[test]
fn test_scan_file_missing_source() {
    let words = reserved(&["if"]);
    let error = scan_file(&PathBuf::from("/tmp/verba_tests/no_such.verba"), &words).unwrap_err();

    assert!(matches!(error, ScanError::Io(_)));
}

#[test]
fn test_independent_scans_do_not_share_state() {
    let words = reserved(&[]);

    let first = scan("alpha beta\n", &words).unwrap();
    let second = scan("gamma\n", &words).unwrap();

    assert_eq!(first.symbol_table.len(), 2);
    assert_eq!(second.symbol_table.len(), 1);
    assert_eq!(second.symbol_table.lookup("alpha"), None);
}

#[test]
fn test_error_in_one_source_leaves_next_scan_clean() {
    let words = reserved(&["if"]);

    assert!(scan("if @\n", &words).is_err());

    let result = scan("if ok\n", &words).unwrap();
    assert_eq!(result.pif.len(), 2);
    assert_eq!(result.symbol_table.len(), 1);
}
