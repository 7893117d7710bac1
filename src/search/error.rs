//! Typed search errors.
//!
//! `SearchError` covers invalid input only and is returned before any search
//! step runs. "No path" and "budget exceeded" are ordinary outcomes, reported
//! through [`SearchOutcome`](super::SearchOutcome).

use crate::core::Word;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start and goal have different lengths, so no ladder can join them.
    LengthMismatch { start: Word, goal: Word },
    /// The word is not a dictionary member.
    NotInDictionary(Word),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { start, goal } => write!(
                f,
                "'{start}' has {} letters but '{goal}' has {}",
                start.length(),
                goal.length()
            ),
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the dictionary"),
        }
    }
}

impl std::error::Error for SearchError {}
