//! Challenge selection
//!
//! Three difficulty tiers, each with its own word pool and move limit, plus
//! custom challenges picked by the player.

use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::core::{Dictionary, Word, WordError};
use crate::search::{SearchEngine, SearchError, Strategy};

/// Beginner pool (3 letters)
pub const BEGINNER_WORDS: &[&str] = &[
    "cat", "dog", "sun", "car", "hat", "run", "top", "cup", "pen", "box",
];

/// Advanced pool (5 letters)
pub const ADVANCED_WORDS: &[&str] = &[
    "stone", "money", "apple", "happy", "beach", "green", "music", "water", "night", "light",
];

/// Challenge pool (6 letters)
pub const CHALLENGE_WORDS: &[&str] = &[
    "paddle", "bottle", "cuddle", "fiddle", "rattle", "toggle", "handle", "baffle", "hurdle",
    "doodle",
];

/// Words a player may never move to in Challenge mode
pub const BANNED_WORDS: &[&str] = &[
    "jumble", "bundle", "tangle", "muddle", "wobble", "ripple", "guzzle",
];

/// Letters a player may never use in Challenge mode
pub const RESTRICTED_LETTERS: &[u8] = b"wz";

/// Move limit for challenges the player chose themselves
pub const CUSTOM_MOVE_LIMIT: usize = 20;

/// Random pairs tried before giving up on finding a solvable one
const MAX_DRAWS: usize = 64;

/// Difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Advanced,
    Challenge,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Advanced, Self::Challenge];

    /// Parse a tier from its name or menu number
    ///
    /// # Examples
    /// ```
    /// use word_ladder::game::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_name("1"), Some(Difficulty::Beginner));
    /// assert_eq!(Difficulty::from_name("Challenge"), Some(Difficulty::Challenge));
    /// assert_eq!(Difficulty::from_name("expert"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "1" | "beginner" | "easy" => Some(Self::Beginner),
            "2" | "advanced" | "medium" => Some(Self::Advanced),
            "3" | "challenge" | "hard" => Some(Self::Challenge),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Advanced => "Advanced",
            Self::Challenge => "Challenge",
        }
    }

    #[must_use]
    pub const fn move_limit(self) -> usize {
        match self {
            Self::Beginner => 10,
            Self::Advanced => 15,
            Self::Challenge => 20,
        }
    }

    #[must_use]
    pub const fn word_pool(self) -> &'static [&'static str] {
        match self {
            Self::Beginner => BEGINNER_WORDS,
            Self::Advanced => ADVANCED_WORDS,
            Self::Challenge => CHALLENGE_WORDS,
        }
    }

    /// Whether banned words and restricted letters apply
    #[must_use]
    pub const fn is_restricted(self) -> bool {
        matches!(self, Self::Challenge)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a challenge could not be set up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeError {
    /// A word was not a valid lowercase word
    InvalidWord { input: String, source: WordError },
    /// Start and goal fail the search engine's input checks
    Rejected(SearchError),
    /// Start and goal are the same word
    SameWord(Word),
    /// No connected pair turned up in the tier's pool
    NoSolvablePair(Difficulty),
}

impl fmt::Display for ChallengeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord { input, source } => write!(f, "'{input}': {source}"),
            Self::Rejected(err) => write!(f, "{err}"),
            Self::SameWord(word) => write!(f, "start and goal are both '{word}'"),
            Self::NoSolvablePair(difficulty) => {
                write!(f, "no solvable {difficulty} challenge in the dictionary")
            }
        }
    }
}

impl std::error::Error for ChallengeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            Self::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SearchError> for ChallengeError {
    fn from(err: SearchError) -> Self {
        Self::Rejected(err)
    }
}

/// A start/goal pair with the rules it is played under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub start: Word,
    pub goal: Word,
    /// `None` for custom challenges
    pub difficulty: Option<Difficulty>,
    pub move_limit: usize,
}

impl Challenge {
    /// Draw two distinct words from the tier's pool
    ///
    /// Banned words are never drawn in a restricted tier.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::NoSolvablePair`] if the pool has fewer than
    /// two usable words.
    pub fn random<R: Rng + ?Sized>(
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Self, ChallengeError> {
        let pool: Vec<&str> = difficulty
            .word_pool()
            .iter()
            .copied()
            .filter(|word| !(difficulty.is_restricted() && BANNED_WORDS.contains(word)))
            .collect();

        let picked: Vec<&str> = pool.choose_multiple(rng, 2).copied().collect();
        let [start, goal] = picked.as_slice() else {
            return Err(ChallengeError::NoSolvablePair(difficulty));
        };

        Ok(Self {
            start: parse(start)?,
            goal: parse(goal)?,
            difficulty: Some(difficulty),
            move_limit: difficulty.move_limit(),
        })
    }

    /// Draw random pairs until one has a ladder in `dictionary`
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::NoSolvablePair`] if no connected pair is found
    /// after a bounded number of draws.
    pub fn random_solvable<R: Rng + ?Sized>(
        difficulty: Difficulty,
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Result<Self, ChallengeError> {
        let engine = SearchEngine::new(dictionary);

        for _ in 0..MAX_DRAWS {
            let challenge = Self::random(difficulty, rng)?;
            match engine.search(&challenge.start, &challenge.goal, Strategy::AStar) {
                Ok(report) if report.is_found() => return Ok(challenge),
                _ => {
                    debug!(
                        start = %challenge.start,
                        goal = %challenge.goal,
                        "discarding unsolvable draw"
                    );
                }
            }
        }
        Err(ChallengeError::NoSolvablePair(difficulty))
    }

    /// A challenge chosen by the player
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError`] if either word is malformed, missing from the
    /// dictionary, the lengths differ, or both words are the same.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Dictionary;
    /// use word_ladder::game::Challenge;
    ///
    /// let dictionary = Dictionary::from_strs(&["cold", "cord", "card", "ward", "warm"]);
    /// let challenge = Challenge::custom(&dictionary, "COLD", "warm").unwrap();
    /// assert_eq!(challenge.start.text(), "cold");
    ///
    /// assert!(Challenge::custom(&dictionary, "cold", "heat").is_err());
    /// ```
    pub fn custom(
        dictionary: &Dictionary,
        start: &str,
        goal: &str,
    ) -> Result<Self, ChallengeError> {
        let start = parse(start)?;
        let goal = parse(goal)?;

        if start.length() != goal.length() {
            return Err(SearchError::LengthMismatch { start, goal }.into());
        }
        for word in [&start, &goal] {
            if !dictionary.contains(word.text()) {
                return Err(SearchError::NotInDictionary(word.clone()).into());
            }
        }
        if start == goal {
            return Err(ChallengeError::SameWord(start));
        }

        Ok(Self {
            start,
            goal,
            difficulty: None,
            move_limit: CUSTOM_MOVE_LIMIT,
        })
    }

    /// Whether banned words and restricted letters apply
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        self.difficulty.is_some_and(Difficulty::is_restricted)
    }

    /// Why `word` is forbidden under this challenge's rules, if it is
    #[must_use]
    pub fn restriction(&self, word: &Word) -> Option<Restriction> {
        if !self.is_restricted() {
            return None;
        }
        if BANNED_WORDS.contains(&word.text()) {
            return Some(Restriction::BannedWord);
        }
        word.bytes()
            .iter()
            .find(|&&byte| RESTRICTED_LETTERS.contains(&byte))
            .map(|&byte| Restriction::RestrictedLetter(char::from(byte)))
    }
}

/// A Challenge-mode rule a word breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restriction {
    BannedWord,
    RestrictedLetter(char),
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BannedWord => f.write_str("banned word"),
            Self::RestrictedLetter(letter) => write!(f, "uses restricted letter '{letter}'"),
        }
    }
}

fn parse(input: &str) -> Result<Word, ChallengeError> {
    Word::new(input.trim()).map_err(|source| ChallengeError::InvalidWord {
        input: input.to_string(),
        source,
    })
}
