use crate::dictionary::SpellingOracle;
use log::{debug, info};

/// Root word used when the word list has nothing to offer.
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

const ACCEPT_BONUS: u32 = 2;
const REJECT_PENALTY: u32 = 3;

/// Result of submitting a word to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected(Rejection),
}

/// Why a submission was turned down. `Empty` carries no score penalty and
/// produces no user-visible feedback; the other three are penalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Duplicate,
    Impossible,
    NotAWord,
}

impl Rejection {
    pub fn is_penalized(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// One round of the word-building game: a root word, the words already
/// played, and the running score.
///
/// Score carries over between rounds; only the root word and the used-word
/// history reset on `new_round`. Callers sharing a `Game` across threads
/// provide their own synchronization.
pub struct Game {
    root_word: String,
    used_words: Vec<String>,
    score: u32,
}

impl Game {
    pub fn new(root_word: impl Into<String>) -> Self {
        let root_word = root_word.into().to_lowercase();
        info!("Starting game with root word '{root_word}'");
        Self {
            root_word,
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Swap in a fresh root word and clear the history. The score is kept.
    pub fn new_round(&mut self, root_word: impl Into<String>) {
        self.root_word = root_word.into().to_lowercase();
        self.used_words.clear();
        info!("New round with root word '{}'", self.root_word);
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Run a raw submission through the validation pipeline.
    ///
    /// Checks run in a fixed order: normalize, originality, derivability,
    /// then the spelling oracle. The first failing check decides the
    /// outcome; later checks never run. Accepted words go to the front of
    /// the history.
    pub fn submit(&mut self, raw: &str, oracle: &impl SpellingOracle) -> Outcome {
        let word = raw.trim().to_lowercase();
        if word.is_empty() {
            return Outcome::Rejected(Rejection::Empty);
        }

        if !self.is_original(&word) {
            debug!("'{word}' already used");
            return self.reject(Rejection::Duplicate);
        }

        if !is_derivable(&self.root_word, &word) {
            debug!("'{word}' cannot be spelled from '{}'", self.root_word);
            return self.reject(Rejection::Impossible);
        }

        if !oracle.is_real_word(&word, "en") {
            debug!("'{word}' not recognized by the dictionary");
            return self.reject(Rejection::NotAWord);
        }

        self.score += ACCEPT_BONUS;
        debug!("'{word}' accepted, score now {}", self.score);
        self.used_words.insert(0, word);
        Outcome::Accepted
    }

    fn is_original(&self, word: &str) -> bool {
        !self.used_words.iter().any(|used| used == word)
    }

    fn reject(&mut self, rejection: Rejection) -> Outcome {
        if rejection.is_penalized() {
            self.score = self.score.saturating_sub(REJECT_PENALTY);
        }
        Outcome::Rejected(rejection)
    }
}

/// Whether `word` can be spelled from the letters of `root`, each root
/// letter usable at most once. Multiset containment, not substring search.
pub fn is_derivable(root: &str, word: &str) -> bool {
    let mut remaining: Vec<char> = root.chars().collect();
    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}
