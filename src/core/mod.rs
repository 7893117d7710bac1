//! Core domain types for word ladders
//!
//! Words and the dictionary that defines which of them exist. Everything here is
//! pure and independent of any search strategy.

mod dictionary;
mod word;

pub use dictionary::Dictionary;
pub use word::{Word, WordError};
