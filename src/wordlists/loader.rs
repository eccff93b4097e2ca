//! Word list loading utilities
//!
//! Dictionary files hold whitespace-separated words, any number per line.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Words per line when rewriting a dictionary file
pub const WORDS_PER_LINE: usize = 20;

/// Load a dictionary from a file
///
/// Returns the valid words upper-cased, de-duplicated and sorted. Tokens that
/// are not 5-letter words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_wrangler::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse whitespace-separated words into a sorted, duplicate-free dictionary
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    words_from_slice(&content.split_whitespace().collect::<Vec<_>>())
}

/// Convert a string slice to a sorted, duplicate-free dictionary
///
/// # Examples
/// ```
/// use wordle_wrangler::wordlists::loader::words_from_slice;
/// use wordle_wrangler::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    let mut words: Vec<Word> = slice.iter().filter_map(|&s| Word::new(s).ok()).collect();
    words.sort_unstable();
    words.dedup();
    words
}

/// Rewrite a dictionary file without duplicates
///
/// Keeps first occurrences in file order and writes them upper-cased,
/// [`WORDS_PER_LINE`] to a line. Returns the number of unique words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or written.
pub fn clean_file<P: AsRef<Path>>(path: P) -> io::Result<usize> {
    let path = path.as_ref();
    let unique = unique_in_order(&fs::read_to_string(path)?);

    fs::write(path, render_lines(&unique))?;
    Ok(unique.len())
}

fn unique_in_order(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    content
        .split_whitespace()
        .filter_map(|token| Word::new(token).ok())
        .filter(|word| seen.insert(*word))
        .collect()
}

fn render_lines(words: &[Word]) -> String {
    words
        .chunks(WORDS_PER_LINE)
        .map(|line| {
            line.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_normalizes() {
        let words = words_from_slice(&["taunt", "PAINT", "Taunt", "foyer"]);
        let text: Vec<String> = words.iter().map(ToString::to_string).collect();

        assert_eq!(text, ["FOYER", "PAINT", "TAUNT"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].to_string(), "CRANE");
        assert_eq!(words[1].to_string(), "SLATE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_words_handles_lines_and_spaces() {
        let words = parse_words("TAUNT  PAINT\n\n  foyer\tslate\nPAINT\n");
        assert_eq!(words.len(), 4);
    }

    #[test]
    fn unique_in_order_keeps_first_occurrence() {
        let words = unique_in_order("slate crane SLATE paint crane");
        let text: Vec<String> = words.iter().map(ToString::to_string).collect();

        assert_eq!(text, ["SLATE", "CRANE", "PAINT"]);
    }

    #[test]
    fn render_lines_wraps_at_twenty() {
        let words = words_from_slice(crate::wordlists::WORDS);
        let rendered = render_lines(&words[..45]);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].split(' ').count(), 20);
        assert_eq!(lines[2].split(' ').count(), 5);
    }

    #[test]
    fn clean_file_rewrites_without_duplicates() {
        let path = std::env::temp_dir().join(format!("wrangler-clean-{}.txt", std::process::id()));
        fs::write(&path, "taunt paint\nTAUNT foyer\npaint\n").unwrap();

        let count = clean_file(&path).unwrap();
        let rewritten = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(count, 3);
        assert_eq!(rewritten, "TAUNT PAINT FOYER");
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/words.txt").is_err());
    }
}
