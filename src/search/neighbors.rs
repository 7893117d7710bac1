//! Neighbor generation over the implicit word graph
//!
//! The graph is never materialised: neighbors are derived on demand by trying
//! every single-letter substitution and keeping the dictionary members.

use crate::core::{Dictionary, Word};

/// Derives the words one substitution away from a given word
#[derive(Debug, Clone, Copy)]
pub struct NeighborGenerator<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> NeighborGenerator<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// All dictionary words reachable from `word` by one letter substitution
    ///
    /// Order is deterministic: position ascending, then alphabet ascending.
    /// The word itself is never included.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Dictionary, Word};
    /// use word_ladder::search::NeighborGenerator;
    ///
    /// let dictionary = Dictionary::from_strs(&["cat", "cot", "bat", "dog"]);
    /// let generator = NeighborGenerator::new(&dictionary);
    ///
    /// let neighbors = generator.neighbors(&Word::new("cat").unwrap());
    /// let texts: Vec<&str> = neighbors.iter().map(Word::text).collect();
    /// assert_eq!(texts, ["bat", "cot"]);
    /// ```
    #[must_use]
    pub fn neighbors(&self, word: &Word) -> Vec<Word> {
        let mut buffer = word.bytes().to_vec();
        let mut neighbors = Vec::new();

        for position in 0..buffer.len() {
            let original = buffer[position];
            for letter in b'a'..=b'z' {
                if letter == original {
                    continue;
                }
                buffer[position] = letter;
                if let Ok(candidate) = std::str::from_utf8(&buffer)
                    && let Some(found) = self.dictionary.get(candidate)
                {
                    neighbors.push(found.clone());
                }
            }
            buffer[position] = original;
        }

        neighbors
    }

    /// Number of neighbors of `word`
    #[must_use]
    pub fn degree(&self, word: &Word) -> usize {
        self.neighbors(word).len()
    }

    /// Whether `to` is a legal single step from `from`
    #[must_use]
    pub fn is_step(&self, from: &Word, to: &Word) -> bool {
        from.distance(to) == Some(1) && self.dictionary.contains(to.text())
    }
}
