//! Dictionary loading utilities
//!
//! Builds a [`Dictionary`] from a word-list file or from the embedded constant.

use crate::core::{Dictionary, Word};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load a dictionary from a file with one word per line
///
/// Blank lines and lines starting with `#` are ignored. Entries that are not
/// purely alphabetic are skipped, so a raw word list with stray punctuation
/// still loads.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = parse_word_list(&content);

    if dictionary.is_empty() {
        warn!(path = %path.display(), "word list contains no usable words");
    } else {
        debug!(path = %path.display(), words = dictionary.len(), "loaded word list");
    }
    Ok(dictionary)
}

/// Parse word-list text into a dictionary
#[must_use]
pub fn parse_word_list(content: &str) -> Dictionary {
    Dictionary::from_words(content.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            None
        } else {
            Word::new(trimmed).ok()
        }
    }))
}

/// Build a dictionary from an embedded string slice
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::dictionary_from_slice;
/// use word_ladder::wordlists::DICTIONARY;
///
/// let dictionary = dictionary_from_slice(DICTIONARY);
/// assert_eq!(dictionary.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_strs(slice)
}
