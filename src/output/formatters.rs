//! Formatting utilities for terminal output

use std::time::Duration;

use crate::core::Word;

/// Join a ladder with arrows
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::output::formatters::format_ladder;
///
/// let ladder: Vec<Word> = ["cat", "cot", "dot"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// assert_eq!(format_ladder(&ladder), "cat → cot → dot");
/// ```
#[must_use]
pub fn format_ladder(path: &[Word]) -> String {
    path.iter().map(Word::text).collect::<Vec<_>>().join(" → ")
}

/// Render `to` with the letter that differs from `from` in upper case
#[must_use]
pub fn format_step(from: &Word, to: &Word) -> String {
    match from.first_difference(to) {
        Some(at) => to
            .text()
            .char_indices()
            .map(|(i, c)| if i == at { c.to_ascii_uppercase() } else { c })
            .collect(),
        None => to.text().to_string(),
    }
}

/// Every step of a ladder with its changed letter marked
#[must_use]
pub fn format_steps(path: &[Word]) -> Vec<String> {
    let Some(first) = path.first() else {
        return Vec::new();
    };
    std::iter::once(first.text().to_string())
        .chain(path.windows(2).map(|pair| format_step(&pair[0], &pair[1])))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Short human readable duration
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", duration.as_secs_f64() * 1_000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
