// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod engine;
pub mod game_loop;
pub mod tui;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use dictionary::{Dictionary, SpellingOracle};
pub use engine::{DEFAULT_ROOT_WORD, Game, Outcome, Rejection, is_derivable};
pub use game_loop::{GameInterface, UserAction, game_loop};
pub use wordlist::{load_wordlist_from_file, load_wordlist_from_str, pick_random_root_word};
