//! Benchmark command
//!
//! Runs every strategy over random same-length pairs and aggregates the cost
//! and quality of each.

use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::info;

use crate::core::{Dictionary, Word};
use crate::search::{SearchEngine, SearchLimits, SearchOutcome, SearchReport, Strategy};

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of random pairs
    pub count: usize,
    /// Word length to draw pairs from
    pub length: usize,
    /// Seed for reproducible pairs; random when `None`
    pub seed: Option<u64>,
    pub limits: SearchLimits,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 50,
            length: 4,
            seed: None,
            limits: SearchLimits::unbounded(),
            show_progress: true,
        }
    }
}

/// Aggregate numbers for one strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategySummary {
    pub strategy: Strategy,
    pub solved: usize,
    pub no_path: usize,
    pub limited: usize,
    /// Solved pairs where the ladder was longer than the optimum
    pub suboptimal: usize,
    pub total_expansions: usize,
    pub total_path_cost: usize,
    pub total_time: Duration,
}

impl StrategySummary {
    const fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            solved: 0,
            no_path: 0,
            limited: 0,
            suboptimal: 0,
            total_expansions: 0,
            total_path_cost: 0,
            total_time: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn runs(&self) -> usize {
        self.solved + self.no_path + self.limited
    }

    #[must_use]
    pub fn average_expansions(&self) -> f64 {
        match self.runs() {
            0 => 0.0,
            runs => self.total_expansions as f64 / runs as f64,
        }
    }

    /// Mean ladder length over solved pairs
    #[must_use]
    pub fn average_path_cost(&self) -> f64 {
        match self.solved {
            0 => 0.0,
            solved => self.total_path_cost as f64 / solved as f64,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub pairs: Vec<(Word, Word)>,
    /// One summary per strategy, in [`Strategy::ALL`] order
    pub summaries: Vec<StrategySummary>,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn summary(&self, strategy: Strategy) -> Option<&StrategySummary> {
        self.summaries.iter().find(|s| s.strategy == strategy)
    }

    #[must_use]
    pub fn pairs_per_second(&self) -> f64 {
        self.pairs.len() as f64 / self.duration.as_secs_f64().max(f64::EPSILON)
    }
}

/// Draw `count` random pairs of distinct same-length words
///
/// # Errors
///
/// Returns an error if the dictionary has fewer than two words of `length`.
pub fn random_pairs(
    dictionary: &Dictionary,
    length: usize,
    count: usize,
    seed: Option<u64>,
) -> Result<Vec<(Word, Word)>> {
    let pool = dictionary.words_of_length(length);
    if pool.len() < 2 {
        bail!(
            "Need at least two {length}-letter words, dictionary has {}",
            pool.len()
        );
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut pairs = Vec::with_capacity(count);
    for _ in 0..count {
        let drawn: Vec<&&Word> = pool.choose_multiple(&mut rng, 2).collect();
        if let [start, goal] = drawn[..] {
            pairs.push((Word::clone(start), Word::clone(goal)));
        }
    }
    Ok(pairs)
}

/// Run the benchmark
///
/// Every strategy runs on every pair. Pairs themselves run one after another;
/// the three strategies of a pair run concurrently.
///
/// # Errors
///
/// Returns an error if pairs cannot be drawn or the progress bar template is
/// rejected.
pub fn run_benchmark(config: &BenchmarkConfig, dictionary: &Dictionary) -> Result<BenchmarkResult> {
    let pairs = random_pairs(dictionary, config.length, config.count, config.seed)?;
    let engine = SearchEngine::new(dictionary).with_limits(config.limits);

    let pb = if config.show_progress {
        let pb = ProgressBar::new(pairs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut summaries = Strategy::ALL.map(StrategySummary::new).to_vec();
    let started = Instant::now();

    for (start, goal) in &pairs {
        pb.set_message(format!("{start} → {goal}"));
        let reports = engine.search_all(start, goal)?;

        let optimal = reports
            .iter()
            .filter(|r| r.strategy.is_optimal())
            .filter_map(SearchReport::path_cost)
            .min();

        for (summary, report) in summaries.iter_mut().zip(&reports) {
            summary.total_expansions += report.stats.expansions;
            summary.total_time += report.stats.elapsed;
            match &report.outcome {
                SearchOutcome::Found(_) => {
                    let cost = report.path_cost().unwrap_or_default();
                    summary.solved += 1;
                    summary.total_path_cost += cost;
                    if optimal.is_some_and(|best| cost > best) {
                        summary.suboptimal += 1;
                    }
                }
                SearchOutcome::NoPath => summary.no_path += 1,
                SearchOutcome::LimitReached(_) => summary.limited += 1,
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("done");
    let duration = started.elapsed();
    info!(
        pairs = pairs.len(),
        elapsed_ms = duration.as_millis() as u64,
        "benchmark finished"
    );

    Ok(BenchmarkResult {
        pairs,
        summaries,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::embedded_dictionary;

    fn quiet(count: usize, length: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            length,
            seed: Some(1234),
            show_progress: false,
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn benchmark_runs_every_strategy() {
        let dictionary = embedded_dictionary();
        let result = run_benchmark(&quiet(8, 3), &dictionary).unwrap();

        assert_eq!(result.pairs.len(), 8);
        assert_eq!(result.summaries.len(), 3);
        for summary in &result.summaries {
            assert_eq!(summary.runs(), 8);
        }
    }

    #[test]
    fn optimal_strategies_agree() {
        let dictionary = embedded_dictionary();
        let result = run_benchmark(&quiet(10, 4), &dictionary).unwrap();

        let astar = result.summary(Strategy::AStar).unwrap();
        let ucs = result.summary(Strategy::UniformCost).unwrap();
        let greedy = result.summary(Strategy::GreedyBestFirst).unwrap();

        assert_eq!(astar.solved, ucs.solved);
        assert_eq!(astar.total_path_cost, ucs.total_path_cost);
        assert_eq!(astar.suboptimal, 0);
        assert_eq!(ucs.suboptimal, 0);
        // Every pair solvable by one strategy is solvable by all of them
        assert_eq!(greedy.solved, ucs.solved);
        assert!(greedy.total_path_cost >= ucs.total_path_cost);
    }

    #[test]
    fn seed_makes_pairs_reproducible() {
        let dictionary = embedded_dictionary();
        let first = random_pairs(&dictionary, 5, 5, Some(99)).unwrap();
        let second = random_pairs(&dictionary, 5, 5, Some(99)).unwrap();

        assert_eq!(first, second);
        for (start, goal) in &first {
            assert_ne!(start, goal);
            assert_eq!(start.length(), 5);
            assert_eq!(goal.length(), 5);
        }
    }

    #[test]
    fn limits_are_counted() {
        let dictionary = embedded_dictionary();
        let config = BenchmarkConfig {
            limits: SearchLimits::unbounded().with_max_expansions(0),
            ..quiet(3, 3)
        };
        let result = run_benchmark(&config, &dictionary).unwrap();

        for summary in &result.summaries {
            assert_eq!(summary.limited, 3);
            assert_eq!(summary.total_path_cost, 0);
            assert!(summary.average_path_cost().abs() < f64::EPSILON);
        }
    }

    #[test]
    fn too_few_words_is_an_error() {
        let dictionary = Dictionary::from_strs(&["cat", "stone"]);
        assert!(run_benchmark(&quiet(1, 3), &dictionary).is_err());
        assert!(random_pairs(&dictionary, 9, 1, None).is_err());
    }
}
