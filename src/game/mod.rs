//! The word-ladder game
//!
//! Challenge tiers, move validation, scoring and hints. The search engine is
//! used for hints and to make sure random challenges are solvable.

mod challenge;
mod session;

pub use challenge::{
    ADVANCED_WORDS, BANNED_WORDS, BEGINNER_WORDS, CHALLENGE_WORDS, CUSTOM_MOVE_LIMIT, Challenge,
    ChallengeError, Difficulty, RESTRICTED_LETTERS, Restriction,
};
pub use session::{GameSession, GameStatus, Hint, MOVE_PENALTY, MoveError, STARTING_SCORE};
