//! Symbol table for identifiers and constants.
//!
//! This module contains the hash table that stores every unique
//! identifier and constant lexeme found during a scan. It handles:
//!
//! - Fixed-bucket hashing with insertion-ordered chaining
//! - Dense integer position handles (`index * BUCKET_COUNT + hash`)
//! - Handle decoding back to hash and chain index
//! - Stable bucket-major enumeration for diagnostic dumps
//!
//! One table instance is scoped to exactly one scanned source; tables
//! are never shared between scans.

pub mod symbol_table;
