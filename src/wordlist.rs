use crate::engine::DEFAULT_ROOT_WORD;
use log::info;
use rand::prelude::IndexedRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDLIST: &str = include_str!("resources/start.txt");

pub fn load_wordlist_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
        .collect()
}

pub fn load_wordlist_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
            words.push(word);
        }
    }
    info!("Loaded {} candidate root words", words.len());
    Ok(words)
}

/// Pick a root word uniformly at random, falling back to the fixed default
/// when the list is empty.
pub fn pick_random_root_word(words: &[String]) -> &str {
    words
        .choose(&mut rand::rng())
        .map_or(DEFAULT_ROOT_WORD, String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_str_normalizes() {
        let words = load_wordlist_from_str("  Silkworm \nMOUNTAIN\nlantern\n");
        assert_eq!(words, ["silkworm", "mountain", "lantern"]);
    }

    #[test]
    fn test_load_from_str_skips_blank_and_non_alphabetic() {
        let words = load_wordlist_from_str("silkworm\n\nword1\ntwo words\nlantern\n");
        assert_eq!(words, ["silkworm", "lantern"]);
    }

    #[test]
    fn test_pick_from_singleton_list() {
        let words = vec!["mountain".to_string()];
        assert_eq!(pick_random_root_word(&words), "mountain");
    }

    #[test]
    fn test_pick_from_empty_list_falls_back() {
        assert_eq!(pick_random_root_word(&[]), DEFAULT_ROOT_WORD);
    }

    #[test]
    fn test_pick_is_from_the_list() {
        let words = load_wordlist_from_str("silkworm\nmountain\nlantern\n");
        for _ in 0..20 {
            let picked = pick_random_root_word(&words);
            assert!(words.iter().any(|w| w == picked));
        }
    }

    #[test]
    fn test_embedded_wordlist_loads() {
        let words = load_wordlist_from_str(EMBEDDED_WORDLIST);
        assert!(words.len() > 50);
        assert!(words.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;
        let path = std::env::temp_dir().join("word_scramble_test_wordlist.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "silkworm").unwrap();
            writeln!(file, "mountain").unwrap();
        }
        let words = load_wordlist_from_file(&path).unwrap();
        assert_eq!(words, ["silkworm", "mountain"]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_wordlist_from_file("/no/such/wordlist.txt").is_err());
    }
}
