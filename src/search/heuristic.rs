//! Remaining-cost estimate between equal-length words

use crate::core::Word;

/// Hamming distance from `word` to `goal`
///
/// Every ladder step changes exactly one letter, so a step lowers this count by
/// at most one. The estimate therefore never exceeds the true number of
/// remaining steps (admissible) and drops by at most the edge cost along any
/// edge (consistent).
///
/// Both words must have the same length.
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::search::estimate;
///
/// let cat = Word::new("cat").unwrap();
/// let dog = Word::new("dog").unwrap();
/// assert_eq!(estimate(&cat, &dog), 3);
/// assert_eq!(estimate(&dog, &dog), 0);
/// ```
#[must_use]
pub fn estimate(word: &Word, goal: &Word) -> u32 {
    debug_assert_eq!(word.length(), goal.length(), "lengths differ");
    word.bytes()
        .iter()
        .zip(goal.bytes())
        .filter(|(a, b)| a != b)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn zero_for_identical_words() {
        for text in ["a", "cat", "ladder"] {
            assert_eq!(estimate(&w(text), &w(text)), 0);
        }
    }

    #[test]
    fn zero_only_when_equal() {
        assert!(estimate(&w("cat"), &w("cot")) > 0);
        assert!(estimate(&w("cat"), &w("cab")) > 0);
    }

    #[test]
    fn counts_mismatches() {
        assert_eq!(estimate(&w("cat"), &w("cot")), 1);
        assert_eq!(estimate(&w("cat"), &w("cog")), 2);
        assert_eq!(estimate(&w("cat"), &w("dog")), 3);
        assert_eq!(estimate(&w("paddle"), &w("puddle")), 1);
    }

    #[test]
    fn symmetric() {
        assert_eq!(
            estimate(&w("stone"), &w("money")),
            estimate(&w("money"), &w("stone"))
        );
    }

    #[test]
    fn changes_by_at_most_one_per_step() {
        let goal = w("dog");
        let ladder = ["cat", "cot", "cog", "dog"].map(w);
        for pair in ladder.windows(2) {
            let before = estimate(&pair[0], &goal);
            let after = estimate(&pair[1], &goal);
            assert!(before.abs_diff(after) <= 1);
        }
    }
}
