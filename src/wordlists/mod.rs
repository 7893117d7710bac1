//! Word lists for ladder searches
//!
//! Provides the dictionary compiled into the binary and helpers for loading
//! one from disk.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::Dictionary;

/// The embedded dictionary as a lookup set
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    loader::dictionary_from_slice(DICTIONARY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn entries_are_lowercase_letters() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn entries_are_unique() {
        assert_eq!(embedded_dictionary().len(), DICTIONARY_COUNT);
    }

    #[test]
    fn expected_count() {
        assert_eq!(DICTIONARY_COUNT, 2282, "Expected 2,282 embedded words");
    }

    #[test]
    fn contains_challenge_words() {
        let dictionary = embedded_dictionary();
        for word in ["cat", "dog", "stone", "money", "paddle", "jumble"] {
            assert!(dictionary.contains(word), "missing '{word}'");
        }
    }
}
