use log::info;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

/// Answers whether a word is a recognized dictionary word for a language.
/// Any spellcheck backend satisfying this is substitutable; tests use an
/// in-memory fake.
pub trait SpellingOracle {
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

/// Set-backed dictionary for a single language.
pub struct Dictionary {
    language: String,
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new(language: impl Into<String>, words: HashSet<String>) -> Self {
        Self {
            language: language.into(),
            words,
        }
    }

    pub fn from_str_data(language: impl Into<String>, data: &str) -> Self {
        let words: HashSet<String> = data
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        let dict = Self::new(language, words);
        info!(
            "Loaded {} words into '{}' dictionary",
            dict.words.len(),
            dict.language
        );
        dict
    }

    pub fn from_file<P: AsRef<Path>>(language: impl Into<String>, path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut words = HashSet::new();
        for line in reader.lines() {
            let word = line?.trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }
        let dict = Self::new(language, words);
        info!(
            "Loaded {} words into '{}' dictionary",
            dict.words.len(),
            dict.language
        );
        Ok(dict)
    }

    pub fn embedded() -> Self {
        Self::from_str_data("en", EMBEDDED_DICTIONARY)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellingOracle for Dictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self.language == language && self.words.contains(&word.to_lowercase())
    }
}
