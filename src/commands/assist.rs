//! Interactive assist mode
//!
//! Text-based loop for a game whose secret is unknown: the player reports the
//! F/P/U feedback for each guess and gets the next hot candidate back.

use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::output::display::{print_constraints, print_words};
use crate::solver::{Chooser, Game, GameState};
use colored::Colorize;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Quit,
    New,
    Undo,
    Feedback { guess: Word, spec: String },
}

/// Parse a line such as `CRANE UUPFU`, a bare `UUPFU` for the suggested word,
/// or a command
///
/// # Errors
///
/// Returns a message describing what was wrong with the line.
pub fn parse_entry(line: &str, suggestion: Option<Word>) -> Result<Entry, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [command] if matches!(command.to_lowercase().as_str(), "quit" | "q" | "exit") => {
            Ok(Entry::Quit)
        }
        [command] if matches!(command.to_lowercase().as_str(), "new" | "n") => Ok(Entry::New),
        [command] if matches!(command.to_lowercase().as_str(), "undo" | "u") => Ok(Entry::Undo),
        [spec] if is_feedback(spec) => {
            let guess = suggestion.ok_or("No suggestion to apply feedback to; enter GUESS SPEC")?;
            Ok(Entry::Feedback {
                guess,
                spec: (*spec).to_string(),
            })
        }
        [guess, spec] => {
            let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
            Ok(Entry::Feedback {
                guess,
                spec: (*spec).to_string(),
            })
        }
        _ => Err("Enter GUESS SPEC (e.g. CRANE UUPFU), a SPEC for the suggestion, or a command".to_string()),
    }
}

fn is_feedback(token: &str) -> bool {
    token.chars().count() == WORD_LENGTH && token.chars().all(|c| Feedback::from_code(c).is_some())
}

/// Run the interactive assist loop over `words`
///
/// Previous game states are kept on a stack, so `undo` simply pops one.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist<C: Chooser + ?Sized>(words: &[Word], chooser: &mut C) -> Result<(), String> {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORDLE WRANGLER - ASSIST MODE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\nAfter each guess, enter the guess and its feedback:");
    println!("  F = letter in the right place");
    println!("  P = letter present elsewhere");
    println!("  U = letter unused");
    println!("e.g. 'CRANE UUPFU', or just 'UUPFU' for the suggested word.");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut history: Vec<Game> = vec![Game::new(words.to_vec())];

    loop {
        let Some(game) = history.last() else {
            history.push(Game::new(words.to_vec()));
            continue;
        };

        let suggestion = match game.state() {
            GameState::Solved => {
                println!(
                    "\n{}",
                    format!("🎉 Solved in {} guesses!", game.guesses().len())
                        .green()
                        .bold()
                );
                None
            }
            GameState::Impossible => {
                println!(
                    "\n{}",
                    "❌ No candidates remain! Your feedback may be incorrect.".red()
                );
                println!("Type 'undo' to go back, or 'new' to start over.");
                None
            }
            GameState::Fresh | GameState::InProgress => {
                print_turn(game);
                game.some_hot_candidate(chooser).map(|hot| {
                    println!(
                        "\n📊 Suggested guess: {} (eliminates ~{})",
                        hot.word().to_string().bright_yellow().bold(),
                        hot.eliminated()
                    );
                    hot.word()
                })
            }
        };

        let line = get_user_input("Feedback")?;
        match parse_entry(&line, suggestion) {
            Ok(Entry::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Ok(Entry::New) => {
                history.truncate(1);
                println!("\n🔄 New game started!\n");
            }
            Ok(Entry::Undo) => {
                if history.len() > 1 {
                    history.pop();
                    println!("✓ Undone!");
                } else {
                    println!("Nothing to undo!");
                }
            }
            Ok(Entry::Feedback { guess, spec }) => match game.tried(guess, &spec) {
                Ok(next) => history.push(next),
                Err(e) => println!("{}", format!("❌ {e}").red()),
            },
            Err(message) => println!("{}", format!("❌ {message}").red()),
        }
    }
}

fn print_turn(game: &Game) {
    println!("{}", "─".repeat(60));
    println!(
        "Turn {}: {} candidates remaining",
        game.guesses().len() + 1,
        game.candidates().len()
    );
    println!("{}", "─".repeat(60));

    if !game.constraints().is_empty() {
        println!("Constraints:");
        print_constraints(game.constraints());
    }
    if game.candidates().len() <= 20 {
        println!("Still viable:");
        print_words(game.candidates());
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // End of input behaves like quit
    if read == 0 {
        return Ok("quit".to_string());
    }
    Ok(input.trim().to_string())
}
