//! A game in progress
//!
//! Tracks the player's ladder, remaining moves and score, validates each move,
//! and answers hint requests with a search from the current word.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::challenge::{Challenge, Restriction};
use crate::core::{Dictionary, Word, WordError};
use crate::search::{
    ExplorationGraph, SearchEngine, SearchError, SearchLimits, SearchReport, Strategy,
};

/// Points at the start of every game
pub const STARTING_SCORE: u32 = 1000;

/// Points deducted per accepted move
pub const MOVE_PENALTY: u32 = 10;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a move or hint was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already been won or lost
    GameOver,
    /// Input is not a word at all
    InvalidWord(WordError),
    /// Challenge-mode rule broken
    Restricted { word: Word, rule: Restriction },
    /// Length differs from the current word
    WrongLength { expected: usize, actual: usize },
    /// The word changes zero or several letters
    NotOneLetter { from: Word, to: Word },
    NotInDictionary(Word),
    /// A hint search rejected its input
    Search(SearchError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is over"),
            Self::InvalidWord(err) => write!(f, "{err}"),
            Self::Restricted { word, rule } => write!(f, "'{word}' is not allowed: {rule}"),
            Self::WrongLength { expected, actual } => {
                write!(f, "Word must have {expected} letters, got {actual}")
            }
            Self::NotOneLetter { from, to } => {
                write!(f, "'{to}' must differ from '{from}' by exactly one letter")
            }
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the dictionary"),
            Self::Search(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Result of asking for a hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub strategy: Strategy,
    /// `None` when the search found no ladder from the current word
    pub next: Option<Word>,
    /// Steps left on the suggested ladder
    pub remaining_steps: Option<usize>,
}

/// One player's game
#[derive(Debug)]
pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    challenge: Challenge,
    limits: SearchLimits,
    path: Vec<Word>,
    moves_taken: usize,
    bonus_moves: usize,
    hints_used: usize,
    score: u32,
    status: GameStatus,
    reports: FxHashMap<Strategy, SearchReport>,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, challenge: Challenge) -> Self {
        info!(
            start = %challenge.start,
            goal = %challenge.goal,
            move_limit = challenge.move_limit,
            "new game"
        );
        let status = if challenge.start == challenge.goal {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };

        Self {
            dictionary,
            path: vec![challenge.start.clone()],
            challenge,
            limits: SearchLimits::unbounded(),
            moves_taken: 0,
            bonus_moves: 0,
            hints_used: 0,
            score: STARTING_SCORE,
            status,
            reports: FxHashMap::default(),
        }
    }

    /// Budget applied to hint searches
    #[must_use]
    pub const fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub const fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    #[must_use]
    pub fn current(&self) -> &Word {
        self.path.last().unwrap_or(&self.challenge.start)
    }

    #[must_use]
    pub const fn goal(&self) -> &Word {
        &self.challenge.goal
    }

    /// The player's ladder so far, start included
    #[must_use]
    pub fn path(&self) -> &[Word] {
        &self.path
    }

    #[must_use]
    pub const fn moves_taken(&self) -> usize {
        self.moves_taken
    }

    /// Move allowance including hint bonuses
    #[must_use]
    pub const fn move_limit(&self) -> usize {
        self.challenge.move_limit + self.bonus_moves
    }

    #[must_use]
    pub const fn moves_remaining(&self) -> usize {
        self.move_limit().saturating_sub(self.moves_taken)
    }

    #[must_use]
    pub const fn hints_used(&self) -> usize {
        self.hints_used
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Check a move without applying it
    ///
    /// # Errors
    ///
    /// Returns the first rule the word breaks, checked in this order: game
    /// over, malformed input, Challenge-mode restrictions, length, one-letter
    /// difference, dictionary membership.
    pub fn validate(&self, input: &str) -> Result<Word, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        let word = Word::new(input.trim()).map_err(MoveError::InvalidWord)?;

        if let Some(rule) = self.challenge.restriction(&word) {
            return Err(MoveError::Restricted { word, rule });
        }

        let current = self.current();
        if word.length() != current.length() {
            return Err(MoveError::WrongLength {
                expected: current.length(),
                actual: word.length(),
            });
        }
        if current.distance(&word) != Some(1) {
            return Err(MoveError::NotOneLetter {
                from: current.clone(),
                to: word,
            });
        }
        if !self.dictionary.contains(word.text()) {
            return Err(MoveError::NotInDictionary(word));
        }
        Ok(word)
    }

    /// Apply a move
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the move is invalid; the session is unchanged.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Dictionary;
    /// use word_ladder::game::{Challenge, GameSession, GameStatus};
    ///
    /// let dictionary = Dictionary::from_strs(&["cat", "cot", "cog", "dog"]);
    /// let challenge = Challenge::custom(&dictionary, "cat", "dog").unwrap();
    /// let mut game = GameSession::new(&dictionary, challenge);
    ///
    /// game.play("cot").unwrap();
    /// game.play("cog").unwrap();
    /// assert_eq!(game.play("dog").unwrap(), GameStatus::Won);
    /// assert_eq!(game.score(), 970);
    /// ```
    pub fn play(&mut self, input: &str) -> Result<GameStatus, MoveError> {
        let word = self.validate(input)?;

        self.moves_taken += 1;
        self.score = self.score.saturating_sub(MOVE_PENALTY);
        debug!(word = %word, moves_taken = self.moves_taken, "move accepted");

        self.status = if word == self.challenge.goal {
            GameStatus::Won
        } else if self.moves_remaining() == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        self.path.push(word);

        if self.status.is_over() {
            info!(status = ?self.status, score = self.score, moves = self.moves_taken, "game over");
        }
        Ok(self.status)
    }

    /// Suggest the next word using `strategy`
    ///
    /// A successful hint grants one extra move. The search report is kept and
    /// can be fetched with [`Self::report`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended.
    pub fn hint(&mut self, strategy: Strategy) -> Result<Hint, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let report = SearchEngine::new(self.dictionary)
            .with_limits(self.limits)
            .search(self.current(), &self.challenge.goal, strategy)
            .map_err(MoveError::Search)?;

        let hint = Hint {
            strategy,
            next: report.next_step().cloned(),
            remaining_steps: report.path_cost(),
        };
        if hint.next.is_some() {
            self.hints_used += 1;
            self.bonus_moves += 1;
        }
        debug!(
            strategy = strategy.short_name(),
            next = ?hint.next.as_ref().map(Word::text),
            "hint"
        );

        self.reports.insert(strategy, report);
        Ok(hint)
    }

    /// The last hint search run with `strategy`
    #[must_use]
    pub fn report(&self, strategy: Strategy) -> Option<&SearchReport> {
        self.reports.get(&strategy)
    }

    /// The player's ladder with every dictionary neighbor of each word on it
    #[must_use]
    pub fn player_graph(&self) -> ExplorationGraph {
        ExplorationGraph::neighborhood(self.dictionary, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::challenge::Difficulty;
    use crate::search::SearchOutcome;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn ladder_dictionary() -> Dictionary {
        Dictionary::from_strs(&["cat", "cot", "cog", "dog", "bat", "cut", "wot"])
    }

    fn challenge(
        start: &str,
        goal: &str,
        difficulty: Option<Difficulty>,
        move_limit: usize,
    ) -> Challenge {
        Challenge {
            start: w(start),
            goal: w(goal),
            difficulty,
            move_limit,
        }
    }

    #[test]
    fn winning_game_scores_per_move() {
        let dictionary = ladder_dictionary();
        let mut game = GameSession::new(&dictionary, challenge("cat", "dog", None, 10));

        assert_eq!(game.play("cot").unwrap(), GameStatus::InProgress);
        assert_eq!(game.play("COG").unwrap(), GameStatus::InProgress);
        assert_eq!(game.play("dog").unwrap(), GameStatus::Won);

        assert_eq!(game.score(), STARTING_SCORE - 3 * MOVE_PENALTY);
        assert_eq!(game.moves_taken(), 3);
        let path: Vec<&str> = game.path().iter().map(Word::text).collect();
        assert_eq!(path, ["cat", "cot", "cog", "dog"]);
        assert_eq!(game.play("cog"), Err(MoveError::GameOver));
    }

    #[test]
    fn running_out_of_moves_loses() {
        let dictionary = ladder_dictionary();
        let mut game = GameSession::new(&dictionary, challenge("cat", "dog", None, 2));

        assert_eq!(game.play("bat").unwrap(), GameStatus::InProgress);
        assert_eq!(game.play("cat").unwrap(), GameStatus::Lost);
        assert_eq!(game.moves_remaining(), 0);
        assert_eq!(game.hint(Strategy::AStar), Err(MoveError::GameOver));
    }

    #[test]
    fn invalid_moves_leave_session_unchanged() {
        let dictionary = ladder_dictionary();
        let mut game = GameSession::new(&dictionary, challenge("cat", "dog", None, 10));

        assert!(matches!(game.play("c4t"), Err(MoveError::InvalidWord(_))));
        assert_eq!(
            game.play("cats"),
            Err(MoveError::WrongLength {
                expected: 3,
                actual: 4,
            })
        );
        assert!(matches!(game.play("cog"), Err(MoveError::NotOneLetter { .. })));
        assert!(matches!(game.play("cat"), Err(MoveError::NotOneLetter { .. })));
        assert_eq!(game.play("cab"), Err(MoveError::NotInDictionary(w("cab"))));

        assert_eq!(game.moves_taken(), 0);
        assert_eq!(game.score(), STARTING_SCORE);
        assert_eq!(game.current(), &w("cat"));
    }

    #[test]
    fn restricted_letters_apply_in_challenge_mode_only() {
        let dictionary = ladder_dictionary();

        let mut game = GameSession::new(
            &dictionary,
            challenge("cot", "dog", Some(Difficulty::Challenge), 20),
        );
        assert_eq!(
            game.play("wot"),
            Err(MoveError::Restricted {
                word: w("wot"),
                rule: Restriction::RestrictedLetter('w'),
            })
        );

        let mut game = GameSession::new(
            &dictionary,
            challenge("cot", "dog", Some(Difficulty::Advanced), 15),
        );
        assert_eq!(game.play("wot").unwrap(), GameStatus::InProgress);
    }

    #[test]
    fn hint_suggests_next_step_and_extends_moves() {
        let dictionary = ladder_dictionary();
        let mut game = GameSession::new(&dictionary, challenge("cat", "dog", None, 10));

        let hint = game.hint(Strategy::AStar).unwrap();
        assert_eq!(hint.next, Some(w("cot")));
        assert_eq!(hint.remaining_steps, Some(3));
        assert_eq!(game.hints_used(), 1);
        assert_eq!(game.move_limit(), 11);
        assert_eq!(game.score(), STARTING_SCORE);

        let report = game.report(Strategy::AStar).unwrap();
        assert!(report.is_found());
        assert!(game.report(Strategy::UniformCost).is_none());
    }

    #[test]
    fn hint_without_path_grants_nothing() {
        let dictionary = Dictionary::from_strs(&["cat", "cot", "dog", "dig"]);
        let mut game = GameSession::new(&dictionary, challenge("cat", "dog", None, 10));

        let hint = game.hint(Strategy::UniformCost).unwrap();
        assert_eq!(hint.next, None);
        assert_eq!(game.move_limit(), 10);
        assert_eq!(
            game.report(Strategy::UniformCost).map(|r| &r.outcome),
            Some(&SearchOutcome::NoPath)
        );
    }

    #[test]
    fn hint_follows_current_word() {
        let dictionary = ladder_dictionary();
        let mut game = GameSession::new(&dictionary, challenge("cat", "dog", None, 10));

        game.play("cot").unwrap();
        let hint = game.hint(Strategy::GreedyBestFirst).unwrap();
        assert_eq!(hint.next, Some(w("cog")));
    }

    #[test]
    fn player_graph_shows_alternatives() {
        let dictionary = ladder_dictionary();
        let mut game = GameSession::new(&dictionary, challenge("cat", "dog", None, 10));
        game.play("cot").unwrap();

        let graph = game.player_graph();
        assert!(graph.contains_edge(&w("cat"), &w("cot")));
        assert!(graph.contains_edge(&w("cat"), &w("bat")));
        assert!(graph.contains_edge(&w("cot"), &w("cog")));
    }

    #[test]
    fn move_error_messages() {
        let err = MoveError::WrongLength {
            expected: 3,
            actual: 4,
        };
        assert_eq!(err.to_string(), "Word must have 3 letters, got 4");

        let err = MoveError::Restricted {
            word: w("jumble"),
            rule: Restriction::BannedWord,
        };
        assert_eq!(err.to_string(), "'jumble' is not allowed: banned word");
    }
}
