//! Search strategies
//!
//! All three strategies share one search loop and differ only in how a node is
//! scored and keyed in the frontier.

use super::heuristic::estimate;
use super::node::SearchNode;
use crate::core::Word;
use std::fmt;

/// Frontier ordering policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Uniform-cost search: orders by `g_cost`, finds a shortest ladder
    UniformCost,
    /// Greedy best-first search: orders by `h_cost`, fast but not optimal
    GreedyBestFirst,
    /// A*: orders by `g_cost + h_cost`, optimal with the Hamming heuristic
    AStar,
}

impl Strategy {
    /// Every strategy, in menu order
    pub const ALL: [Self; 3] = [Self::AStar, Self::GreedyBestFirst, Self::UniformCost];

    /// Create strategy from name string
    ///
    /// Supported names: "ucs", "uniform-cost", "gbfs", "greedy", "astar", "a*"
    ///
    /// # Examples
    /// ```
    /// use word_ladder::search::Strategy;
    ///
    /// assert_eq!(Strategy::from_name("A*"), Some(Strategy::AStar));
    /// assert_eq!(Strategy::from_name("greedy"), Some(Strategy::GreedyBestFirst));
    /// assert_eq!(Strategy::from_name("dfs"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "ucs" | "uniform-cost" | "uniform" => Some(Self::UniformCost),
            "gbfs" | "greedy" | "best-first" => Some(Self::GreedyBestFirst),
            "astar" | "a*" | "a-star" => Some(Self::AStar),
            _ => None,
        }
    }

    /// Short identifier used on the command line and in exports
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::UniformCost => "ucs",
            Self::GreedyBestFirst => "gbfs",
            Self::AStar => "astar",
        }
    }

    /// Human readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::UniformCost => "Uniform Cost Search",
            Self::GreedyBestFirst => "Greedy Best-First Search",
            Self::AStar => "A* Search",
        }
    }

    /// Whether the first path found is guaranteed to be a shortest one
    #[must_use]
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::GreedyBestFirst)
    }

    /// Whether `h_cost` is computed for this strategy
    #[must_use]
    pub const fn uses_heuristic(self) -> bool {
        !matches!(self, Self::UniformCost)
    }

    /// Heuristic cost of `word` under this strategy
    #[must_use]
    pub fn h_cost(self, word: &Word, goal: &Word) -> u32 {
        if self.uses_heuristic() {
            estimate(word, goal)
        } else {
            0
        }
    }

    /// Frontier key extraction function
    #[must_use]
    pub fn key_fn(self) -> fn(&SearchNode) -> u32 {
        match self {
            Self::UniformCost => |node: &SearchNode| node.g_cost,
            Self::GreedyBestFirst => |node: &SearchNode| node.h_cost,
            Self::AStar => SearchNode::f_cost,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(g_cost: u32, h_cost: u32) -> SearchNode {
        SearchNode {
            state: Word::new("cat").unwrap(),
            parent: None,
            g_cost,
            h_cost,
        }
    }

    #[test]
    fn from_name_accepts_aliases() {
        use Strategy::{AStar, GreedyBestFirst, UniformCost};

        assert_eq!(Strategy::from_name("ucs"), Some(UniformCost));
        assert_eq!(Strategy::from_name("Uniform-Cost"), Some(UniformCost));
        assert_eq!(Strategy::from_name("gbfs"), Some(GreedyBestFirst));
        assert_eq!(Strategy::from_name(" astar "), Some(AStar));
        assert_eq!(Strategy::from_name("bfs"), None);
    }

    #[test]
    fn short_name_round_trips() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::from_name(strategy.short_name()), Some(strategy));
        }
    }

    #[test]
    fn keys_per_strategy() {
        let n = node(2, 5);
        assert_eq!(Strategy::UniformCost.key_fn()(&n), 2);
        assert_eq!(Strategy::GreedyBestFirst.key_fn()(&n), 5);
        assert_eq!(Strategy::AStar.key_fn()(&n), 7);
    }

    #[test]
    fn ucs_ignores_heuristic() {
        let cat = Word::new("cat").unwrap();
        let dog = Word::new("dog").unwrap();
        assert_eq!(Strategy::UniformCost.h_cost(&cat, &dog), 0);
        assert_eq!(Strategy::GreedyBestFirst.h_cost(&cat, &dog), 3);
        assert_eq!(Strategy::AStar.h_cost(&cat, &dog), 3);
    }

    #[test]
    fn only_greedy_is_not_optimal() {
        assert!(Strategy::UniformCost.is_optimal());
        assert!(Strategy::AStar.is_optimal());
        assert!(!Strategy::GreedyBestFirst.is_optimal());
    }
}
