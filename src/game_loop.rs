use crate::dictionary::SpellingOracle;
use crate::engine::{Game, Outcome, Rejection};
use crate::wordlist::pick_random_root_word;

/// What the player asked for this turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    NewGame,
    Exit,
}

/// Presentation boundary. The CLI implements this over a `BufRead`, the TUI
/// over a terminal; the loop itself never formats text.
pub trait GameInterface {
    /// A round started: show the root word and the (empty) history.
    fn display_round(&mut self, game: &Game);
    fn read_submission(&mut self) -> Option<UserAction>;
    fn display_accepted(&mut self, game: &Game);
    fn display_rejection(&mut self, rejection: Rejection, game: &Game);
    fn display_exit_message(&mut self);
}

/// User-facing title and message for a rejection, or `None` for the silent
/// empty-input case.
pub fn rejection_text(rejection: Rejection, root_word: &str) -> Option<(String, String)> {
    match rejection {
        Rejection::Empty => None,
        Rejection::Duplicate => Some((
            "Word used already".to_string(),
            "Be more original!".to_string(),
        )),
        Rejection::Impossible => Some((
            "Word not possible".to_string(),
            format!("You can't spell that word from '{root_word}'!"),
        )),
        Rejection::NotAWord => Some((
            "Word not recognized".to_string(),
            "You can't make them up, you know!".to_string(),
        )),
    }
}

/// Drive a full game session: pick a root word, then submit, restart, or
/// exit on the player's command until they quit.
pub fn game_loop<I: GameInterface>(
    wordlist: &[String],
    oracle: &impl SpellingOracle,
    interface: &mut I,
) {
    let mut game = Game::new(pick_random_root_word(wordlist));
    interface.display_round(&game);

    loop {
        let Some(action) = interface.read_submission() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                game.new_round(pick_random_root_word(wordlist));
                interface.display_round(&game);
            }
            UserAction::Submit(raw) => match game.submit(&raw, oracle) {
                Outcome::Accepted => interface.display_accepted(&game),
                // Nothing typed: no feedback, no score change
                Outcome::Rejected(Rejection::Empty) => {}
                Outcome::Rejected(rejection) => interface.display_rejection(rejection, &game),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliInterface;
    use crate::dictionary::tests::FakeOracle;
    use std::io::Cursor;

    fn wordlist() -> Vec<String> {
        vec!["silkworm".to_string()]
    }

    fn oracle() -> FakeOracle {
        FakeOracle::with_words(&["silk", "worm", "wok"])
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let mut interface = CliInterface::new(Cursor::new("exit\n"));
        game_loop(&wordlist(), &oracle(), &mut interface);
    }

    #[test]
    fn test_game_loop_accepts_and_exits() {
        let input = "wok\nsilk\nexit\n";
        let mut interface = CliInterface::new(Cursor::new(input));
        game_loop(&wordlist(), &oracle(), &mut interface);
    }

    #[test]
    fn test_game_loop_handles_rejections() {
        // Duplicate, impossible, and made-up words each just continue the loop
        let input = "wok\nwok\nxyz\nqqq\nexit\n";
        let mut interface = CliInterface::new(Cursor::new(input));
        game_loop(&wordlist(), &oracle(), &mut interface);
    }

    #[test]
    fn test_game_loop_blank_line_ignored() {
        let input = "\n   \nwok\nexit\n";
        let mut interface = CliInterface::new(Cursor::new(input));
        game_loop(&wordlist(), &oracle(), &mut interface);
    }

    #[test]
    fn test_game_loop_new_round_command() {
        let input = "wok\nnext\nwok\nexit\n";
        let mut interface = CliInterface::new(Cursor::new(input));
        game_loop(&wordlist(), &oracle(), &mut interface);
    }

    #[test]
    fn test_game_loop_ends_on_eof() {
        // Input runs out without an explicit exit
        let mut interface = CliInterface::new(Cursor::new("wok\n"));
        game_loop(&wordlist(), &oracle(), &mut interface);
    }

    #[test]
    fn test_game_loop_empty_wordlist_uses_default_root() {
        let mut interface = CliInterface::new(Cursor::new("wok\nexit\n"));
        game_loop(&[], &oracle(), &mut interface);
    }

    #[test]
    fn test_rejection_text_empty_is_silent() {
        assert!(rejection_text(Rejection::Empty, "silkworm").is_none());
    }

    #[test]
    fn test_rejection_text_mentions_root_word() {
        let (title, message) = rejection_text(Rejection::Impossible, "silkworm").unwrap();
        assert_eq!(title, "Word not possible");
        assert!(message.contains("silkworm"));
    }

    #[test]
    fn test_rejection_text_duplicate_and_not_a_word() {
        let (title, _) = rejection_text(Rejection::Duplicate, "silkworm").unwrap();
        assert_eq!(title, "Word used already");
        let (title, _) = rejection_text(Rejection::NotAWord, "silkworm").unwrap();
        assert_eq!(title, "Word not recognized");
    }
}
