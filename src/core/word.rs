//! Word ladder word representation
//!
//! A Word is a non-empty run of lowercase ASCII letters. All words taking part in
//! a single ladder share the same length.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// A lowercase dictionary word
///
/// Ordering is lexicographic, which is also the frontier tie-break between
/// entries of equal priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains anything other than letters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.length()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Count of positions where the two words differ
    ///
    /// Returns `None` when the lengths differ, since no substitution sequence
    /// can connect words of different lengths.
    #[must_use]
    pub fn distance(&self, other: &Self) -> Option<usize> {
        if self.length() != other.length() {
            return None;
        }
        Some(
            self.bytes()
                .iter()
                .zip(other.bytes())
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    /// First position where the two words differ, if any
    #[must_use]
    pub fn first_difference(&self, other: &Self) -> Option<usize> {
        self.bytes()
            .iter()
            .zip(other.bytes())
            .position(|(a, b)| a != b)
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.bytes(), b"cat");
        assert_eq!(word.length(), 3);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("PADDLE").unwrap();
        assert_eq!(word.text(), "paddle");

        let word2 = Word::new("PaDdLe").unwrap();
        assert_eq!(word2.text(), "paddle");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("c4t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ca t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cat!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("dog").unwrap();
        assert_eq!(word.char_at(0), b'd');
        assert_eq!(word.char_at(1), b'o');
        assert_eq!(word.char_at(2), b'g');
    }

    #[test]
    fn distance_counts_mismatched_positions() {
        let cat = Word::new("cat").unwrap();
        let cot = Word::new("cot").unwrap();
        let dog = Word::new("dog").unwrap();

        assert_eq!(cat.distance(&cat), Some(0));
        assert_eq!(cat.distance(&cot), Some(1));
        assert_eq!(cat.distance(&dog), Some(3));
        assert_eq!(dog.distance(&cat), Some(3));
    }

    #[test]
    fn distance_undefined_across_lengths() {
        let cat = Word::new("cat").unwrap();
        let cats = Word::new("cats").unwrap();
        assert_eq!(cat.distance(&cats), None);
    }

    #[test]
    fn first_difference_finds_changed_letter() {
        let cot = Word::new("cot").unwrap();
        let cog = Word::new("cog").unwrap();
        assert_eq!(cot.first_difference(&cog), Some(2));
        assert_eq!(cot.first_difference(&cot), None);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut words = [
            Word::new("dog").unwrap(),
            Word::new("cat").unwrap(),
            Word::new("cot").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat", "cot", "dog"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("ladder").unwrap();
        assert_eq!(format!("{word}"), "ladder");
    }

    #[test]
    fn word_serializes_as_plain_string() {
        let word = Word::new("cat").unwrap();
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"cat\"");
    }
}
