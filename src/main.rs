use std::io;
use std::process::ExitCode;

use word_scramble::cli::{CliInterface, parse_cli};
use word_scramble::dictionary::Dictionary;
use word_scramble::game_loop::game_loop;
use word_scramble::tui::TuiInterface;
use word_scramble::wordlist::{
    EMBEDDED_WORDLIST, load_wordlist_from_file, load_wordlist_from_str,
};

fn main() -> ExitCode {
    let cli = parse_cli();

    // Logging goes to stderr, which the TUI's alternate screen would clobber
    if !cli.tui {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
    }

    // A missing word list is a configuration error, not something the game
    // can play through
    let wordlist = match &cli.wordlist_path {
        Some(path) => match load_wordlist_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word list from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => load_wordlist_from_str(EMBEDDED_WORDLIST),
    };

    let dictionary = match &cli.dictionary_path {
        Some(path) => match Dictionary::from_file("en", path) {
            Ok(dict) => dict,
            Err(e) => {
                eprintln!("Failed to load dictionary from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Dictionary::embedded(),
    };

    if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to initialize terminal UI: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&wordlist, &dictionary, &mut interface);
    } else {
        println!("Loaded {} root words.", wordlist.len());
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&wordlist, &dictionary, &mut interface);
    }

    ExitCode::SUCCESS
}
