//! Immutable dictionary of valid words
//!
//! Defines graph membership for every search. Loaded once, never mutated,
//! and shared by reference between concurrent searches.

use super::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// A read-only set of valid words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    ///
    /// Duplicates collapse into a single entry.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Build a dictionary from raw strings, skipping any invalid entries
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["cat", "cot", "c4t", "dog"]);
    /// assert_eq!(dictionary.len(), 3);
    /// assert!(dictionary.contains("cot"));
    /// assert!(!dictionary.contains("c4t"));
    /// ```
    #[must_use]
    pub fn from_strs(words: &[&str]) -> Self {
        Self::from_words(words.iter().filter_map(|&s| Word::new(s).ok()))
    }

    /// Check whether a word is a member
    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.contains(text)
    }

    /// Look up the stored word for a string
    #[inline]
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.words.get(text)
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// All words of the given length, sorted
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<&Word> {
        let mut words: Vec<&Word> = self
            .words
            .iter()
            .filter(|word| word.length() == length)
            .collect();
        words.sort();
        words
    }

    /// Word count per length, sorted by length
    #[must_use]
    pub fn length_histogram(&self) -> Vec<(usize, usize)> {
        let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
        for word in &self.words {
            *counts.entry(word.length()).or_insert(0) += 1;
        }
        let mut histogram: Vec<(usize, usize)> = counts.into_iter().collect();
        histogram.sort_unstable();
        histogram
    }
}
