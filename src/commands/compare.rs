//! Strategy comparison command
//!
//! Runs every strategy on the same pair concurrently and lines up the results.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

use super::solve::SolveConfig;
use crate::core::{Dictionary, Word};
use crate::search::{SearchEngine, SearchReport, Strategy};

/// Reports from all strategies on one pair
#[derive(Debug, Clone)]
pub struct Comparison {
    pub start: Word,
    pub goal: Word,
    /// One report per strategy, in [`Strategy::ALL`] order
    pub reports: Vec<SearchReport>,
    pub wall_time: Duration,
}

impl Comparison {
    #[must_use]
    pub fn report(&self, strategy: Strategy) -> Option<&SearchReport> {
        self.reports.iter().find(|r| r.strategy == strategy)
    }

    /// Shortest ladder length found by an optimal strategy
    #[must_use]
    pub fn optimal_cost(&self) -> Option<usize> {
        self.reports
            .iter()
            .filter(|r| r.strategy.is_optimal())
            .filter_map(SearchReport::path_cost)
            .min()
    }

    /// Strategies whose ladder is longer than the optimum
    #[must_use]
    pub fn suboptimal(&self) -> Vec<Strategy> {
        let Some(optimal) = self.optimal_cost() else {
            return Vec::new();
        };
        self.reports
            .iter()
            .filter(|r| r.path_cost().is_some_and(|cost| cost > optimal))
            .map(|r| r.strategy)
            .collect()
    }

    /// Strategy that expanded the fewest nodes while finding a ladder
    #[must_use]
    pub fn fewest_expansions(&self) -> Option<Strategy> {
        self.reports
            .iter()
            .filter(|r| r.is_found())
            .min_by_key(|r| r.stats.expansions)
            .map(|r| r.strategy)
    }
}

/// Run all strategies on the configured pair
///
/// The configured strategy is ignored; limits apply to each search separately.
///
/// # Errors
///
/// Returns an error for malformed words, a length mismatch or words missing
/// from the dictionary.
pub fn compare_strategies(config: &SolveConfig, dictionary: &Dictionary) -> Result<Comparison> {
    let (start, goal) = config.words()?;
    let started = Instant::now();

    let reports = SearchEngine::new(dictionary)
        .with_limits(config.limits)
        .search_all(&start, &goal)
        .with_context(|| format!("Cannot search from '{start}' to '{goal}'"))?;

    let comparison = Comparison {
        start,
        goal,
        reports,
        wall_time: started.elapsed(),
    };
    info!(
        optimal = ?comparison.optimal_cost(),
        wall_us = comparison.wall_time.as_micros() as u64,
        "comparison finished"
    );
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::embedded_dictionary;

    fn compare(dictionary: &Dictionary, start: &str, goal: &str) -> Comparison {
        let config = SolveConfig::new(start.to_string(), goal.to_string());
        compare_strategies(&config, dictionary).unwrap()
    }

    #[test]
    fn compares_all_strategies() {
        let dictionary = embedded_dictionary();
        let comparison = compare(&dictionary, "head", "tail");

        assert_eq!(comparison.reports.len(), 3);
        assert_eq!(comparison.optimal_cost(), Some(5));
        for strategy in Strategy::ALL {
            let report = comparison.report(strategy);
            assert!(report.is_some_and(SearchReport::is_found));
        }
        let astar = comparison.report(Strategy::AStar).unwrap();
        let ucs = comparison.report(Strategy::UniformCost).unwrap();
        assert_eq!(astar.path_cost(), ucs.path_cost());
    }

    #[test]
    fn flags_greedy_detour() {
        let dictionary = Dictionary::from_strs(&[
            "aaaa", "baaa", "bbaa", "bbba", "bbbb", "aaab", "aabb", "cabb", "cbbb",
        ]);
        let comparison = compare(&dictionary, "aaaa", "bbbb");

        assert_eq!(comparison.optimal_cost(), Some(4));
        assert_eq!(comparison.suboptimal(), [Strategy::GreedyBestFirst]);
    }

    #[test]
    fn no_ladder_has_no_optimum() {
        let dictionary = embedded_dictionary();
        let comparison = compare(&dictionary, "apple", "music");

        assert_eq!(comparison.optimal_cost(), None);
        assert!(comparison.suboptimal().is_empty());
        assert_eq!(comparison.fewest_expansions(), None);
    }

    #[test]
    fn astar_expands_no_more_than_ucs() {
        let dictionary = embedded_dictionary();
        let comparison = compare(&dictionary, "cold", "warm");

        let astar = comparison.report(Strategy::AStar).unwrap();
        let ucs = comparison.report(Strategy::UniformCost).unwrap();
        assert!(astar.stats.expansions <= ucs.stats.expansions);
    }

    #[test]
    fn rejects_invalid_pair() {
        let dictionary = embedded_dictionary();
        let config = SolveConfig::new("cat".to_string(), "goat".to_string());
        assert!(compare_strategies(&config, &dictionary).is_err());
    }
}
