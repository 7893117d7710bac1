//! Search budgets.

use std::fmt;
use std::time::Duration;

/// Optional caps on how much work one search may do.
///
/// The default is unbounded. Exceeding a cap ends the search with
/// [`SearchOutcome::LimitReached`](super::SearchOutcome::LimitReached), which
/// means "abandoned", not "no path exists".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Hard cap on node expansions.
    pub max_expansions: Option<usize>,
    /// Wall-clock cap for a single search.
    pub time_limit: Option<Duration>,
}

impl SearchLimits {
    /// No caps at all.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_expansions: None,
            time_limit: None,
        }
    }

    #[must_use]
    pub const fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    #[must_use]
    pub const fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// The cap that has been hit, if any.
    #[must_use]
    pub fn exceeded(&self, expansions: usize, elapsed: Duration) -> Option<Limit> {
        if let Some(max) = self.max_expansions
            && expansions >= max
        {
            return Some(Limit::Expansions(max));
        }
        if let Some(limit) = self.time_limit
            && elapsed >= limit
        {
            return Some(Limit::Time(limit));
        }
        None
    }
}

/// Which budget stopped a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Expansions(usize),
    Time(Duration),
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expansions(max) => write!(f, "expansion limit of {max} reached"),
            Self::Time(limit) => write!(f, "time limit of {}ms reached", limit.as_millis()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let limits = SearchLimits::default();
        assert_eq!(limits, SearchLimits::unbounded());
        assert_eq!(limits.exceeded(usize::MAX, Duration::MAX), None);
    }

    #[test]
    fn expansion_cap() {
        let limits = SearchLimits::unbounded().with_max_expansions(10);
        assert_eq!(limits.exceeded(9, Duration::ZERO), None);
        assert_eq!(
            limits.exceeded(10, Duration::ZERO),
            Some(Limit::Expansions(10))
        );
    }

    #[test]
    fn time_cap() {
        let limits = SearchLimits::unbounded().with_time_limit(Duration::from_millis(5));
        assert_eq!(limits.exceeded(0, Duration::from_millis(4)), None);
        assert_eq!(
            limits.exceeded(0, Duration::from_millis(5)),
            Some(Limit::Time(Duration::from_millis(5)))
        );
    }

    #[test]
    fn limit_display() {
        assert_eq!(
            Limit::Expansions(3).to_string(),
            "expansion limit of 3 reached"
        );
        assert_eq!(
            Limit::Time(Duration::from_millis(250)).to_string(),
            "time limit of 250ms reached"
        );
    }
}
