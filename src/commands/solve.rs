//! Ladder solving command
//!
//! Runs one strategy on a start/goal pair and returns the full search report.

use anyhow::{Context, Result};
use tracing::info;

use crate::core::{Dictionary, Word};
use crate::search::{SearchEngine, SearchLimits, SearchReport, Strategy};

/// Configuration for solving a ladder
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub start: String,
    pub goal: String,
    pub strategy: Strategy,
    pub limits: SearchLimits,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: String, goal: String) -> Self {
        Self {
            start,
            goal,
            strategy: Strategy::AStar,
            limits: SearchLimits::unbounded(),
        }
    }

    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub const fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Parse start and goal into words
    ///
    /// # Errors
    ///
    /// Returns an error if either input is not a valid word.
    pub fn words(&self) -> Result<(Word, Word)> {
        let start = Word::new(self.start.trim())
            .with_context(|| format!("Invalid start word '{}'", self.start))?;
        let goal = Word::new(self.goal.trim())
            .with_context(|| format!("Invalid goal word '{}'", self.goal))?;
        Ok((start, goal))
    }
}

/// Solve a ladder with the configured strategy
///
/// A search that ends with no path or on a limit still returns `Ok`; the
/// outcome is in the report.
///
/// # Errors
///
/// Returns an error if:
/// - Either word is malformed
/// - The words differ in length
/// - Either word is not in the dictionary
pub fn solve_ladder(config: &SolveConfig, dictionary: &Dictionary) -> Result<SearchReport> {
    let (start, goal) = config.words()?;

    let report = SearchEngine::new(dictionary)
        .with_limits(config.limits)
        .search(&start, &goal, config.strategy)
        .with_context(|| format!("Cannot search from '{start}' to '{goal}'"))?;

    info!(
        strategy = config.strategy.short_name(),
        found = report.is_found(),
        expansions = report.stats.expansions,
        "solve finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchOutcome;
    use crate::wordlists::embedded_dictionary;

    #[test]
    fn solve_finds_shortest_ladder() {
        let dictionary = embedded_dictionary();
        let config = SolveConfig::new("cat".to_string(), "dog".to_string());

        let report = solve_ladder(&config, &dictionary).unwrap();
        assert_eq!(report.strategy, Strategy::AStar);
        assert_eq!(report.path_cost(), Some(3));
    }

    #[test]
    fn solve_normalises_input() {
        let dictionary = embedded_dictionary();
        let config = SolveConfig::new(" COLD ".to_string(), "Warm".to_string())
            .with_strategy(Strategy::UniformCost);

        let report = solve_ladder(&config, &dictionary).unwrap();
        assert_eq!(report.path_cost(), Some(4));
    }

    #[test]
    fn solve_reports_missing_ladder_as_outcome() {
        let dictionary = embedded_dictionary();
        let config = SolveConfig::new("apple".to_string(), "music".to_string());

        let report = solve_ladder(&config, &dictionary).unwrap();
        assert_eq!(report.outcome, SearchOutcome::NoPath);
    }

    #[test]
    fn solve_respects_limits() {
        let dictionary = embedded_dictionary();
        let config = SolveConfig::new("stone".to_string(), "money".to_string())
            .with_limits(SearchLimits::unbounded().with_max_expansions(1));

        let report = solve_ladder(&config, &dictionary).unwrap();
        assert!(matches!(report.outcome, SearchOutcome::LimitReached(_)));
    }

    #[test]
    fn solve_invalid_input_returns_error() {
        let dictionary = embedded_dictionary();

        let config = SolveConfig::new("c4t".to_string(), "dog".to_string());
        assert!(solve_ladder(&config, &dictionary).is_err());

        let config = SolveConfig::new("cat".to_string(), "goat".to_string());
        let err = solve_ladder(&config, &dictionary).unwrap_err();
        assert!(format!("{err:#}").contains("has 3 letters"));

        let config = SolveConfig::new("cat".to_string(), "zzz".to_string());
        assert!(solve_ladder(&config, &dictionary).is_err());
    }
}
