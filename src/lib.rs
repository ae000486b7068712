#![allow(clippy::module_inception)]

pub mod errors;
pub mod scanner;
pub mod symbol_table;
