use crate::engine::{Game, Rejection};
use crate::game_loop::{GameInterface, UserAction, rejection_text};
use clap::Parser;
use std::io::BufRead;

/// Word Scramble CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited root-word list file
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<String>,

    /// Path to a newline-delimited dictionary file
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<String>,

    /// Run the interactive terminal UI instead of the line-based prompt
    #[arg(long = "tui")]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Line-based implementation of the game interface. Reads one submission per
/// line; `next` starts a new round, `exit` quits, end of input also quits.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round(&mut self, game: &Game) {
        println!("\nYour root word is: {}", game.root_word());
        println!("Build shorter words from its letters.");
        println!("(type a word, or 'next' for a new word, or 'exit' to quit)");
    }

    fn read_submission(&mut self) -> Option<UserAction> {
        let mut input = String::new();
        let bytes = self.reader.read_line(&mut input).unwrap_or(0);
        if bytes == 0 {
            return Some(UserAction::Exit);
        }

        match input.trim().to_lowercase().as_str() {
            "exit" => Some(UserAction::Exit),
            "next" => Some(UserAction::NewGame),
            _ => Some(UserAction::Submit(input)),
        }
    }

    fn display_accepted(&mut self, game: &Game) {
        println!("Nice! Score: {}", game.score());
        for word in game.used_words() {
            println!("  {} ({})", word, word.chars().count());
        }
    }

    fn display_rejection(&mut self, rejection: Rejection, game: &Game) {
        if let Some((title, message)) = rejection_text(rejection, game.root_word()) {
            println!("{title}: {message}");
            println!("Score: {}", game.score());
        }
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli {
            wordlist_path: None,
            dictionary_path: None,
            tui: false,
        };
        assert_eq!(cli.wordlist_path, None);
        assert_eq!(cli.dictionary_path, None);
        assert!(!cli.tui);
    }

    #[test]
    fn test_cli_with_paths() {
        let cli = Cli {
            wordlist_path: Some("start.txt".to_string()),
            dictionary_path: Some("words.txt".to_string()),
            tui: true,
        };
        assert_eq!(cli.wordlist_path.as_deref(), Some("start.txt"));
        assert_eq!(cli.dictionary_path.as_deref(), Some("words.txt"));
        assert!(cli.tui);
    }

    #[test]
    fn test_read_submission_word() {
        let mut interface = CliInterface::new(Cursor::new("worm\n"));
        assert_eq!(
            interface.read_submission(),
            Some(UserAction::Submit("worm\n".to_string()))
        );
    }

    #[test]
    fn test_read_submission_exit() {
        let mut interface = CliInterface::new(Cursor::new("exit\n"));
        assert_eq!(interface.read_submission(), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_submission_exit_case_insensitive() {
        let mut interface = CliInterface::new(Cursor::new("EXIT\n"));
        assert_eq!(interface.read_submission(), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_submission_next() {
        let mut interface = CliInterface::new(Cursor::new("next\n"));
        assert_eq!(interface.read_submission(), Some(UserAction::NewGame));
    }

    #[test]
    fn test_read_submission_eof_exits() {
        let mut interface = CliInterface::new(Cursor::new(""));
        assert_eq!(interface.read_submission(), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_submission_blank_line_is_a_submission() {
        // The engine decides blank input is silently ignored, not the reader
        let mut interface = CliInterface::new(Cursor::new("   \n"));
        assert_eq!(
            interface.read_submission(),
            Some(UserAction::Submit("   \n".to_string()))
        );
    }
}
