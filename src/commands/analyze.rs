//! Word analysis command
//!
//! Describes a word's place in the ladder graph: its neighbors, the component
//! it belongs to, and the farthest word reachable from it.

use std::collections::VecDeque;

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashMap;

use crate::core::{Dictionary, Word};
use crate::search::NeighborGenerator;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub neighbors: Vec<Word>,
    /// Dictionary words with the same length
    pub same_length: usize,
    /// Words reachable from `word`, itself included
    pub component_size: usize,
    /// A word at the greatest ladder distance, and that distance
    pub farthest: Option<(Word, usize)>,
}

impl AnalysisResult {
    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Share of same-length words reachable from this one
    #[must_use]
    pub fn reach(&self) -> f64 {
        if self.same_length == 0 {
            0.0
        } else {
            self.component_size as f64 / self.same_length as f64
        }
    }
}

/// Analyze a word against the dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The word is malformed
/// - The word is not in the dictionary
pub fn analyze_word(word: &str, dictionary: &Dictionary) -> Result<AnalysisResult> {
    let word = Word::new(word.trim()).with_context(|| format!("Invalid word '{word}'"))?;
    if !dictionary.contains(word.text()) {
        bail!("Word '{word}' not in dictionary");
    }

    let generator = NeighborGenerator::new(dictionary);
    let neighbors = generator.neighbors(&word);
    let same_length = dictionary.words_of_length(word.length()).len();

    // Breadth-first sweep of the component; ties on distance keep the
    // lexicographically smallest word.
    let mut distances: FxHashMap<Word, usize> = FxHashMap::default();
    let mut queue = VecDeque::from([word.clone()]);
    distances.insert(word.clone(), 0);

    while let Some(current) = queue.pop_front() {
        let distance = distances.get(&current).copied().unwrap_or_default();
        for next in generator.neighbors(&current) {
            if !distances.contains_key(&next) {
                distances.insert(next.clone(), distance + 1);
                queue.push_back(next);
            }
        }
    }

    let farthest = distances
        .iter()
        .filter(|&(_, &distance)| distance > 0)
        .max_by(|(a, da), (b, db)| da.cmp(db).then_with(|| b.cmp(a)))
        .map(|(w, &distance)| (w.clone(), distance));

    Ok(AnalysisResult {
        word,
        neighbors,
        same_length,
        component_size: distances.len(),
        farthest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::embedded_dictionary;

    #[test]
    fn analyze_small_chain() {
        let dictionary = Dictionary::from_strs(&["cat", "cot", "cog", "dog", "bat", "tree"]);
        let result = analyze_word("cot", &dictionary).unwrap();

        let neighbors: Vec<&str> = result.neighbors.iter().map(Word::text).collect();
        assert_eq!(neighbors, ["cat", "cog"]);
        assert_eq!(result.degree(), 2);
        assert_eq!(result.same_length, 5);
        assert_eq!(result.component_size, 5);
        assert!((result.reach() - 1.0).abs() < f64::EPSILON);

        // bat and dog are both two steps away; bat wins the tie
        let (word, distance) = result.farthest.unwrap();
        assert_eq!((word.text(), distance), ("bat", 2));
    }

    #[test]
    fn isolated_word() {
        let dictionary = Dictionary::from_strs(&["cat", "dog"]);
        let result = analyze_word("cat", &dictionary).unwrap();

        assert!(result.neighbors.is_empty());
        assert_eq!(result.component_size, 1);
        assert_eq!(result.farthest, None);
    }

    #[test]
    fn analyze_embedded_word() {
        let dictionary = embedded_dictionary();
        let result = analyze_word("cot", &dictionary).unwrap();

        let neighbors: Vec<&str> = result.neighbors.iter().map(Word::text).collect();
        assert_eq!(
            neighbors,
            [
                "bot", "dot", "got", "hot", "jot", "lot", "not", "pot", "rot", "sot", "tot", "cat",
                "cut", "cob", "cod", "cog", "con", "coo", "cop", "cow", "coy"
            ]
        );
        assert!(result.component_size > 100);
    }

    #[test]
    fn analyze_invalid_word() {
        let dictionary = Dictionary::from_strs(&["cat"]);
        assert!(analyze_word("zzz", &dictionary).is_err());
        assert!(analyze_word("c@t", &dictionary).is_err());
    }
}
