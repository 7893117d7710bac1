//! Priority frontier with deterministic tie-breaking.
//!
//! One generic queue serves every strategy: the strategy supplies a key
//! extraction function and the frontier orders entries by
//! `(key, word, insertion sequence)` ascending. Equal keys therefore go to the
//! lexicographically smaller word, and equal words to the earlier push.
//!
//! The frontier does not de-duplicate. The same word may sit in it several
//! times with different costs; the engine discards stale entries at pop time.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::node::SearchNode;

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so entries are stored under `Reverse` to pop
/// the smallest key first.
#[derive(Debug)]
struct FrontierEntry<K> {
    key: K,
    sequence: u64,
    node: SearchNode,
}

impl<K: Ord> FrontierEntry<K> {
    fn order(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.node.state.cmp(&other.node.state))
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl<K: Ord> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.order(other) == Ordering::Equal
    }
}

impl<K: Ord> Eq for FrontierEntry<K> {}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order(other)
    }
}

/// Min-priority queue of search nodes.
pub struct PriorityFrontier<K, F> {
    heap: BinaryHeap<Reverse<FrontierEntry<K>>>,
    key_fn: F,
    next_sequence: u64,
    high_water: usize,
}

impl<K, F> PriorityFrontier<K, F>
where
    K: Ord,
    F: Fn(&SearchNode) -> K,
{
    /// Create an empty frontier ordered by `key_fn`.
    #[must_use]
    pub fn new(key_fn: F) -> Self {
        Self {
            heap: BinaryHeap::new(),
            key_fn,
            next_sequence: 0,
            high_water: 0,
        }
    }

    /// Push a node under the key computed for it.
    pub fn push(&mut self, node: SearchNode) {
        let key = (self.key_fn)(&node);
        self.heap.push(Reverse(FrontierEntry {
            key,
            sequence: self.next_sequence,
            node,
        }));
        self.next_sequence += 1;
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pop the entry with the smallest key.
    pub fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub const fn high_water(&self) -> usize {
        self.high_water
    }

    /// Total number of pushes so far.
    #[must_use]
    pub const fn pushed(&self) -> u64 {
        self.next_sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn node(state: &str, g_cost: u32, h_cost: u32) -> SearchNode {
        SearchNode {
            state: Word::new(state).unwrap(),
            parent: None,
            g_cost,
            h_cost,
        }
    }

    fn by_g(node: &SearchNode) -> u32 {
        node.g_cost
    }

    #[test]
    fn pop_returns_lowest_key_first() {
        let mut frontier = PriorityFrontier::new(by_g);
        frontier.push(node("cat", 10, 0));
        frontier.push(node("cot", 5, 0));
        frontier.push(node("cog", 15, 0));

        let order: Vec<u32> = std::iter::from_fn(|| frontier.pop())
            .map(|n| n.g_cost)
            .collect();
        assert_eq!(order, [5, 10, 15]);
    }

    #[test]
    fn key_function_decides_order() {
        let mut frontier = PriorityFrontier::new(|n: &SearchNode| n.h_cost);
        frontier.push(node("cat", 0, 3));
        frontier.push(node("cot", 9, 1));

        assert_eq!(frontier.pop().unwrap().state.text(), "cot");
    }

    #[test]
    fn equal_keys_prefer_smaller_word() {
        let mut frontier = PriorityFrontier::new(by_g);
        frontier.push(node("dog", 1, 0));
        frontier.push(node("cot", 1, 0));
        frontier.push(node("cog", 1, 0));

        let order: Vec<String> = std::iter::from_fn(|| frontier.pop())
            .map(|n| n.state.to_string())
            .collect();
        assert_eq!(order, ["cog", "cot", "dog"]);
    }

    #[test]
    fn equal_key_and_word_prefer_earlier_push() {
        let mut frontier = PriorityFrontier::new(by_g);
        frontier.push(node("cot", 1, 7));
        frontier.push(node("cot", 1, 3));

        assert_eq!(frontier.pop().unwrap().h_cost, 7);
        assert_eq!(frontier.pop().unwrap().h_cost, 3);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut frontier = PriorityFrontier::new(by_g);
        frontier.push(node("cot", 2, 0));
        frontier.push(node("cot", 1, 0));
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn high_water_tracks_max_size() {
        let mut frontier = PriorityFrontier::new(by_g);
        frontier.push(node("cat", 1, 0));
        frontier.push(node("cot", 2, 0));
        frontier.push(node("cog", 3, 0));
        assert_eq!(frontier.high_water(), 3);

        let _ = frontier.pop();
        assert_eq!(frontier.high_water(), 3, "unchanged by pop");
        assert_eq!(frontier.pushed(), 3);
    }

    #[test]
    fn empty_frontier_pops_none() {
        let mut frontier = PriorityFrontier::new(by_g);
        assert!(frontier.is_empty());
        assert!(frontier.pop().is_none());
    }
}
