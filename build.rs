//! Build script to generate the embedded dictionary
//!
//! Reads the whitespace-separated word file and generates a const array.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const DICTIONARY: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap_or_else(|e| panic!("OUT_DIR is not set: {e}"));
    let output_path = Path::new(&out_dir).join("words.rs");

    let content = fs::read_to_string(DICTIONARY)
        .unwrap_or_else(|e| panic!("Failed to read {DICTIONARY}: {e}"));
    let source = render_word_list(&content, "WORDS", "Default dictionary of five-letter words");

    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    // Rebuild if the dictionary changes
    println!("cargo:rerun-if-changed={DICTIONARY}");
}

fn render_word_list(content: &str, const_name: &str, doc_comment: &str) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    let mut source = String::new();

    writeln!(source, "// Generated from {DICTIONARY}").unwrap_or_else(|e| panic!("{e}"));
    writeln!(source).unwrap_or_else(|e| panic!("{e}"));
    writeln!(source, "/// {doc_comment}").unwrap_or_else(|e| panic!("{e}"));
    writeln!(source, "pub const {const_name}: &[&str] = &[").unwrap_or_else(|e| panic!("{e}"));
    for word in &words {
        writeln!(source, "    \"{word}\",").unwrap_or_else(|e| panic!("{e}"));
    }
    writeln!(source, "];").unwrap_or_else(|e| panic!("{e}"));
    writeln!(source).unwrap_or_else(|e| panic!("{e}"));
    writeln!(source, "/// Number of words in {const_name}").unwrap_or_else(|e| panic!("{e}"));
    writeln!(source, "pub const {const_name}_COUNT: usize = {};", words.len())
        .unwrap_or_else(|e| panic!("{e}"));

    source
}
