use std::{
    env,
    fs::{self, create_dir},
    io,
    path::{Path, PathBuf},
};

use verba::{
    errors::errors::ScanError,
    scanner::{
        scanner::{scan_file, ScanResult},
        tokens::ReservedWords,
    },
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        panic!("Usage: verba <reserved-words-file> <source-file>...");
    }

    let reserved =
        ReservedWords::load(Path::new(&args[1])).expect("Failed to read reserved words file!");

    if !PathBuf::from("output").exists() {
        create_dir("output").unwrap();
    }

    // each source gets its own scanner and symbol table; a failure in
    // one source never blocks the remaining ones
    for file_path in &args[2..] {
        let path = Path::new(file_path);
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_path.clone());

        match scan_file(path, &reserved) {
            Ok(result) => {
                save_pif(&result, &stem).unwrap();
                save_symbol_table(&result, &stem).unwrap();
                println!("{}: Lexically correct", stem);
            }
            Err(ScanError::Lexical(error)) => println!("{}: {}", stem, error),
            Err(ScanError::Io(error)) => println!("{}: Failed to read source: {}", stem, error),
        }
    }
}

fn save_pif(result: &ScanResult, stem: &str) -> io::Result<()> {
    let lines: String = result
        .pif
        .iter()
        .map(|entry| format!("{}\n", entry))
        .collect();
    fs::write(format!("output/{}_pif.out", stem), lines)
}

fn save_symbol_table(result: &ScanResult, stem: &str) -> io::Result<()> {
    let lines: String = result
        .symbol_table
        .entries()
        .map(|entry| format!("{}\n", entry))
        .collect();
    fs::write(format!("output/{}_st.out", stem), lines)
}
