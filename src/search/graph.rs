//! `ExplorationGraph`: every word and transition discovered by a search.
//!
//! This is a reachability record, not a shortest-path tree. An edge is kept
//! whenever an expansion generates a neighbor, even if that neighbor was
//! already reached through another parent. Sets are `BTreeSet`s so exports are
//! deterministic.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use serde::Serialize;

use super::neighbors::NeighborGenerator;
use crate::core::{Dictionary, Word};

/// An undirected edge, stored with its endpoints in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge(Word, Word);

impl Edge {
    #[must_use]
    pub fn new(a: Word, b: Word) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    /// The two endpoints, smaller word first.
    #[must_use]
    pub const fn endpoints(&self) -> (&Word, &Word) {
        (&self.0, &self.1)
    }

    #[must_use]
    pub fn touches(&self, word: &Word) -> bool {
        &self.0 == word || &self.1 == word
    }
}

/// Nodes and undirected edges discovered during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExplorationGraph {
    nodes: BTreeSet<Word>,
    edges: BTreeSet<Edge>,
}

impl ExplorationGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word. Returns `false` if it was already present.
    pub fn add_node(&mut self, word: Word) -> bool {
        self.nodes.insert(word)
    }

    /// Record a transition. Both endpoints are recorded as nodes too.
    ///
    /// Returns `false` if the edge was already present (in either direction).
    pub fn add_edge(&mut self, a: &Word, b: &Word) -> bool {
        if !self.nodes.contains(a) {
            self.nodes.insert(a.clone());
        }
        if !self.nodes.contains(b) {
            self.nodes.insert(b.clone());
        }
        self.edges.insert(Edge::new(a.clone(), b.clone()))
    }

    #[must_use]
    pub fn contains_node(&self, word: &str) -> bool {
        self.nodes.contains(word)
    }

    #[must_use]
    pub fn contains_edge(&self, a: &Word, b: &Word) -> bool {
        self.edges.contains(&Edge::new(a.clone(), b.clone()))
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &Word> {
        self.nodes.iter()
    }

    /// Edges in sorted order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Words adjacent to `word` in this graph.
    #[must_use]
    pub fn adjacent(&self, word: &Word) -> Vec<&Word> {
        self.edges
            .iter()
            .filter_map(|edge| {
                let (a, b) = edge.endpoints();
                if a == word {
                    Some(b)
                } else if b == word {
                    Some(a)
                } else {
                    None
                }
            })
            .collect()
    }

    /// A path plus every dictionary neighbor of each word on it.
    ///
    /// Used to show a player's own ladder in the context of the moves they
    /// could have made.
    #[must_use]
    pub fn neighborhood(dictionary: &Dictionary, path: &[Word]) -> Self {
        let generator = NeighborGenerator::new(dictionary);
        let mut graph = Self::new();

        for word in path {
            graph.add_node(word.clone());
        }
        for pair in path.windows(2) {
            graph.add_edge(&pair[0], &pair[1]);
        }
        for word in path {
            for neighbor in generator.neighbors(word) {
                graph.add_edge(word, &neighbor);
            }
        }
        graph
    }

    /// Render as a Graphviz DOT document.
    ///
    /// Words and edges on `highlight` are drawn emphasised.
    #[must_use]
    pub fn to_dot(&self, title: &str, highlight: Option<&[Word]>) -> String {
        let path = highlight.unwrap_or(&[]);
        let path_edges: BTreeSet<Edge> = path
            .windows(2)
            .map(|pair| Edge::new(pair[0].clone(), pair[1].clone()))
            .collect();

        let mut dot = String::new();
        let _ = writeln!(dot, "graph \"{}\" {{", title.replace('"', "'"));
        let _ = writeln!(dot, "  label=\"{}\";", title.replace('"', "'"));
        dot.push_str("  node [shape=ellipse, style=filled, fillcolor=lightgray];\n");

        for word in &self.nodes {
            if path.contains(word) {
                let _ = writeln!(dot, "  \"{word}\" [fillcolor=lightblue, penwidth=2];");
            } else {
                let _ = writeln!(dot, "  \"{word}\";");
            }
        }
        for edge in &self.edges {
            let (a, b) = edge.endpoints();
            if path_edges.contains(edge) {
                let _ = writeln!(dot, "  \"{a}\" -- \"{b}\" [color=red, penwidth=2];");
            } else {
                let _ = writeln!(dot, "  \"{a}\" -- \"{b}\" [color=gray];");
            }
        }
        dot.push_str("}\n");
        dot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn edges_are_undirected() {
        let mut graph = ExplorationGraph::new();
        assert!(graph.add_edge(&w("cot"), &w("cat")));
        assert!(!graph.add_edge(&w("cat"), &w("cot")));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(&w("cat"), &w("cot")));
        assert!(graph.contains_edge(&w("cot"), &w("cat")));
    }

    #[test]
    fn add_edge_records_endpoints() {
        let mut graph = ExplorationGraph::new();
        graph.add_edge(&w("cat"), &w("cot"));
        assert!(graph.contains_node("cat"));
        assert!(graph.contains_node("cot"));
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn edge_endpoints_sorted() {
        let edge = Edge::new(w("dog"), w("cog"));
        let (a, b) = edge.endpoints();
        assert_eq!((a.text(), b.text()), ("cog", "dog"));
        assert!(edge.touches(&w("dog")));
        assert!(!edge.touches(&w("cat")));
    }

    #[test]
    fn adjacent_lists_both_directions() {
        let mut graph = ExplorationGraph::new();
        graph.add_edge(&w("cat"), &w("cot"));
        graph.add_edge(&w("bat"), &w("cat"));
        graph.add_edge(&w("cot"), &w("cog"));

        let adjacent = graph.adjacent(&w("cat"));
        let texts: Vec<&str> = adjacent.into_iter().map(Word::text).collect();
        assert_eq!(texts, ["bat", "cot"]);
    }

    #[test]
    fn neighborhood_includes_path_and_neighbors() {
        let dictionary = Dictionary::from_strs(&["cat", "cot", "cog", "bat", "dog"]);
        let path = [w("cat"), w("cot")];
        let graph = ExplorationGraph::neighborhood(&dictionary, &path);

        assert!(graph.contains_edge(&w("cat"), &w("cot")));
        assert!(graph.contains_edge(&w("cat"), &w("bat")));
        assert!(graph.contains_edge(&w("cot"), &w("cog")));
        assert!(!graph.contains_node("dog"));
    }

    #[test]
    fn dot_highlights_path() {
        let mut graph = ExplorationGraph::new();
        graph.add_edge(&w("cat"), &w("cot"));
        graph.add_edge(&w("cat"), &w("bat"));

        let dot = graph.to_dot("cat to cot", Some(&[w("cat"), w("cot")]));
        assert!(dot.starts_with("graph \"cat to cot\" {"));
        assert!(dot.contains("\"cat\" -- \"cot\" [color=red, penwidth=2];"));
        assert!(dot.contains("\"bat\" -- \"cat\" [color=gray];"));
        assert!(dot.contains("\"bat\";"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn serializes_nodes_and_edge_pairs() {
        let mut graph = ExplorationGraph::new();
        graph.add_edge(&w("cot"), &w("cat"));

        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nodes": ["cat", "cot"],
                "edges": [["cat", "cot"]],
            })
        );
    }
}
