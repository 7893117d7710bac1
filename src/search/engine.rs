//! Search entry point and expansion loop

use std::time::{Duration, Instant};

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::error::SearchError;
use super::frontier::PriorityFrontier;
use super::graph::ExplorationGraph;
use super::limits::{Limit, SearchLimits};
use super::neighbors::NeighborGenerator;
use super::node::{NodeStore, SearchNode};
use super::strategy::Strategy;
use crate::core::{Dictionary, Word};

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A ladder from start to goal, both inclusive
    Found(Vec<Word>),
    /// The reachable component was exhausted without meeting the goal
    NoPath,
    /// A budget ran out first; a path may still exist
    LimitReached(Limit),
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose neighbors were generated
    pub expansions: usize,
    /// Nodes pushed onto the frontier, root included
    pub generated: usize,
    /// Frontier pops discarded because the word was already expanded
    pub stale_pops: usize,
    /// Largest frontier size reached
    pub frontier_high_water: usize,
    pub elapsed: Duration,
}

/// Everything a single search produced
///
/// The node store and exploration graph are returned whatever the outcome.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub start: Word,
    pub goal: Word,
    pub outcome: SearchOutcome,
    pub graph: ExplorationGraph,
    pub nodes: NodeStore,
    pub stats: SearchStats,
}

impl SearchReport {
    /// The ladder, if one was found
    #[must_use]
    pub fn path(&self) -> Option<&[Word]> {
        match &self.outcome {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }

    /// Number of steps in the ladder
    #[must_use]
    pub fn path_cost(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }

    /// The word to move to next, if the ladder has at least one step
    #[must_use]
    pub fn next_step(&self) -> Option<&Word> {
        self.path().and_then(|p| p.get(1))
    }
}

/// Runs ladder searches against a shared dictionary
///
/// The engine only borrows the dictionary; every search owns its own frontier,
/// visited set, node store and exploration graph, so one engine can serve
/// concurrent searches.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    dictionary: &'a Dictionary,
    limits: SearchLimits,
}

impl<'a> SearchEngine<'a> {
    /// Create an engine with no search budget
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            limits: SearchLimits::unbounded(),
        }
    }

    #[must_use]
    pub const fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Find a ladder from `start` to `goal`
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] when the words differ in length or either one is
    /// not in the dictionary. No search step runs in that case.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Dictionary, Word};
    /// use word_ladder::search::{SearchEngine, Strategy};
    ///
    /// let dictionary = Dictionary::from_strs(&["cat", "cot", "cog", "dog"]);
    /// let engine = SearchEngine::new(&dictionary);
    ///
    /// let start = Word::new("cat").unwrap();
    /// let goal = Word::new("dog").unwrap();
    /// let report = engine.search(&start, &goal, Strategy::AStar).unwrap();
    ///
    /// let path: Vec<&str> = report.path().unwrap().iter().map(Word::text).collect();
    /// assert_eq!(path, ["cat", "cot", "cog", "dog"]);
    /// ```
    pub fn search(
        &self,
        start: &Word,
        goal: &Word,
        strategy: Strategy,
    ) -> Result<SearchReport, SearchError> {
        self.validate(start, goal)?;

        let started = Instant::now();
        let generator = NeighborGenerator::new(self.dictionary);
        let mut frontier = PriorityFrontier::new(strategy.key_fn());
        let mut visited: FxHashSet<Word> = FxHashSet::default();
        let mut nodes = NodeStore::new();
        let mut graph = ExplorationGraph::new();
        let mut stats = SearchStats::default();

        debug!(
            strategy = strategy.short_name(),
            %start,
            %goal,
            "starting search"
        );

        let root = SearchNode::root(start.clone(), strategy.h_cost(start, goal));
        frontier.push(root);

        let outcome = loop {
            let Some(current) = frontier.pop() else {
                break SearchOutcome::NoPath;
            };

            if visited.contains(&current.state) {
                stats.stale_pops += 1;
                continue;
            }
            visited.insert(current.state.clone());
            graph.add_node(current.state.clone());

            let g_cost = current.g_cost;
            let is_goal = current.state == *goal;
            let current_state = current.state.clone();
            let current_id = nodes.insert(current);

            if is_goal {
                break SearchOutcome::Found(nodes.path_to(current_id));
            }

            if let Some(limit) = self.limits.exceeded(stats.expansions, started.elapsed()) {
                break SearchOutcome::LimitReached(limit);
            }

            stats.expansions += 1;
            let neighbors = generator.neighbors(&current_state);
            trace!(
                word = %current_state,
                g_cost,
                neighbors = neighbors.len(),
                "expanding"
            );

            for neighbor in neighbors {
                graph.add_edge(&current_state, &neighbor);
                if visited.contains(&neighbor) {
                    continue;
                }
                let h_cost = strategy.h_cost(&neighbor, goal);
                frontier.push(SearchNode {
                    state: neighbor,
                    parent: Some(current_id),
                    g_cost: g_cost + 1,
                    h_cost,
                });
            }
        };

        stats.generated = frontier.pushed() as usize;
        stats.frontier_high_water = frontier.high_water();
        stats.elapsed = started.elapsed();

        debug!(
            strategy = strategy.short_name(),
            found = matches!(outcome, SearchOutcome::Found(_)),
            expansions = stats.expansions,
            generated = stats.generated,
            stale_pops = stats.stale_pops,
            elapsed_us = stats.elapsed.as_micros() as u64,
            "search finished"
        );

        Ok(SearchReport {
            strategy,
            start: start.clone(),
            goal: goal.clone(),
            outcome,
            graph,
            nodes,
            stats,
        })
    }

    /// Run every strategy on the same pair concurrently
    ///
    /// Reports come back in [`Strategy::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] for invalid input, as [`Self::search`] does.
    pub fn search_all(&self, start: &Word, goal: &Word) -> Result<Vec<SearchReport>, SearchError> {
        self.validate(start, goal)?;
        Strategy::ALL
            .par_iter()
            .map(|&strategy| self.search(start, goal, strategy))
            .collect()
    }

    fn validate(&self, start: &Word, goal: &Word) -> Result<(), SearchError> {
        if start.length() != goal.length() {
            return Err(SearchError::LengthMismatch {
                start: start.clone(),
                goal: goal.clone(),
            });
        }
        for word in [start, goal] {
            if !self.dictionary.contains(word.text()) {
                return Err(SearchError::NotInDictionary(word.clone()));
            }
        }
        Ok(())
    }
}
