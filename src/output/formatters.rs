//! Formatting utilities for terminal output

use crate::core::Constraint;
use colored::Colorize;
use std::fmt::Display;

/// Items per printed row
pub const ROW_WIDTH: usize = 5;

/// Render items in rows of `width`, each item preceded by a space
#[must_use]
pub fn rows<T: Display>(items: &[T], width: usize) -> Vec<String> {
    items
        .chunks(width.max(1))
        .map(|row| row.iter().map(|item| format!(" {item}")).collect())
        .collect()
}

/// Constraint coloured by kind: green fixed, yellow present, dimmed unused
#[must_use]
pub fn colored_constraint(constraint: &Constraint) -> String {
    let text = constraint.to_string();
    match constraint {
        Constraint::Fixed { .. } => text.green().to_string(),
        Constraint::Present { .. } => text.yellow().to_string(),
        Constraint::Unused { .. } => text.bright_black().to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn rows_wrap_at_width() {
        let words: Vec<Word> = ["ABBEY", "CRANE", "DAUNT", "FOYER", "PAINT", "TAUNT", "VAUNT"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();

        let rendered = rows(&words, ROW_WIDTH);
        assert_eq!(
            rendered,
            vec![
                " ABBEY CRANE DAUNT FOYER PAINT".to_string(),
                " TAUNT VAUNT".to_string()
            ]
        );
    }

    #[test]
    fn rows_empty() {
        let empty: [Word; 0] = [];
        assert!(rows(&empty, ROW_WIDTH).is_empty());
    }

    #[test]
    fn colored_constraint_keeps_text() {
        colored::control::set_override(false);
        assert_eq!(colored_constraint(&Constraint::unused(b'O')), "[❌O]");
        assert_eq!(colored_constraint(&Constraint::fixed(b'A', 1)), "[✅A 1]");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
