//! Word Ladder
//!
//! Turn one word into another by changing a single letter at a time, with every
//! intermediate word in the dictionary. Ladders are found by uniform-cost,
//! greedy best-first or A* search over an implicit word graph.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::Word;
//! use word_ladder::search::{SearchEngine, Strategy};
//! use word_ladder::wordlists::embedded_dictionary;
//!
//! let dictionary = embedded_dictionary();
//! let engine = SearchEngine::new(&dictionary);
//!
//! let start = Word::new("cold").unwrap();
//! let goal = Word::new("warm").unwrap();
//! let report = engine.search(&start, &goal, Strategy::AStar).unwrap();
//! assert_eq!(report.path_cost(), Some(4));
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod search;

// Word lists
pub mod wordlists;

// Game rules and scoring
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
