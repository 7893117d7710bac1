//! Word-ladder search
//!
//! One generic best-first loop over an implicit graph whose edges are
//! single-letter substitutions. [`Strategy`] picks the frontier key.

mod engine;
mod error;
mod frontier;
mod graph;
mod heuristic;
mod limits;
mod neighbors;
mod node;
mod strategy;

pub use engine::{SearchEngine, SearchOutcome, SearchReport, SearchStats};
pub use error::SearchError;
pub use frontier::PriorityFrontier;
pub use graph::{Edge, ExplorationGraph};
pub use heuristic::estimate;
pub use limits::{Limit, SearchLimits};
pub use neighbors::NeighborGenerator;
pub use node::{NodeId, NodeStore, SearchNode};
pub use strategy::Strategy;

use crate::core::{Dictionary, Word};

/// Run one unbounded search
///
/// # Errors
///
/// Returns [`SearchError`] when the words differ in length or either one is
/// not in the dictionary.
pub fn search(
    dictionary: &Dictionary,
    start: &Word,
    goal: &Word,
    strategy: Strategy,
) -> Result<SearchReport, SearchError> {
    SearchEngine::new(dictionary).search(start, goal, strategy)
}
