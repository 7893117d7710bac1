//! Export command
//!
//! Serializes a search's exploration graph for external tools: JSON for
//! scripts, Graphviz DOT for rendering.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::core::Word;
use crate::search::{ExplorationGraph, SearchOutcome, SearchReport};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Dot,
}

impl ExportFormat {
    /// Parse a format name
    ///
    /// # Examples
    /// ```
    /// use word_ladder::commands::ExportFormat;
    ///
    /// assert_eq!(ExportFormat::from_name("JSON"), Some(ExportFormat::Json));
    /// assert_eq!(ExportFormat::from_name("graphviz"), Some(ExportFormat::Dot));
    /// assert_eq!(ExportFormat::from_name("png"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "dot" | "graphviz" | "gv" => Some(Self::Dot),
            _ => None,
        }
    }

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Dot => "dot",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    start: &'a Word,
    goal: &'a Word,
    strategy: &'static str,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<String>,
    path: Option<&'a [Word]>,
    path_cost: Option<usize>,
    stats: ExportStats,
    graph: &'a ExplorationGraph,
}

#[derive(Serialize)]
struct ExportStats {
    expansions: usize,
    generated: usize,
    stale_pops: usize,
    frontier_high_water: usize,
    elapsed_us: u64,
}

/// Render a report in the given format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_report(report: &SearchReport, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let (outcome, limit) = match &report.outcome {
                SearchOutcome::Found(_) => ("found", None),
                SearchOutcome::NoPath => ("no_path", None),
                SearchOutcome::LimitReached(limit) => ("limit_reached", Some(limit.to_string())),
            };
            let document = ExportDocument {
                start: &report.start,
                goal: &report.goal,
                strategy: report.strategy.short_name(),
                outcome,
                limit,
                path: report.path(),
                path_cost: report.path_cost(),
                stats: ExportStats {
                    expansions: report.stats.expansions,
                    generated: report.stats.generated,
                    stale_pops: report.stats.stale_pops,
                    frontier_high_water: report.stats.frontier_high_water,
                    elapsed_us: u64::try_from(report.stats.elapsed.as_micros()).unwrap_or(u64::MAX),
                },
                graph: &report.graph,
            };
            let mut json = serde_json::to_string_pretty(&document)?;
            json.push('\n');
            Ok(json)
        }
        ExportFormat::Dot => {
            let title = format!(
                "{} to {} ({})",
                report.start,
                report.goal,
                report.strategy.display_name()
            );
            Ok(report.graph.to_dot(&title, report.path()))
        }
    }
}

/// Render a report and write it to `output`, or stdout when `None`
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn export_report(
    report: &SearchReport,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let rendered = render_report(report, format)?;
    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), %format, "exported search graph");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::search::{SearchEngine, SearchLimits, Strategy};

    fn astar_report(dictionary: &Dictionary, start: &str, goal: &str) -> SearchReport {
        SearchEngine::new(dictionary)
            .search(
                &Word::new(start).unwrap(),
                &Word::new(goal).unwrap(),
                Strategy::AStar,
            )
            .unwrap()
    }

    #[test]
    fn json_contains_path_and_graph() {
        let dictionary = Dictionary::from_strs(&["cat", "cot", "cog", "dog"]);
        let report = astar_report(&dictionary, "cat", "dog");
        let rendered = render_report(&report, ExportFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["strategy"], "astar");
        assert_eq!(value["outcome"], "found");
        assert_eq!(
            value["path"],
            serde_json::json!(["cat", "cot", "cog", "dog"])
        );
        assert_eq!(value["path_cost"], 3);
        assert_eq!(value["stats"]["expansions"], 3);
        assert_eq!(
            value["graph"]["edges"],
            serde_json::json!([["cat", "cot"], ["cog", "cot"], ["cog", "dog"]])
        );
        assert!(value.get("limit").is_none());
    }

    #[test]
    fn json_marks_missing_ladder() {
        let dictionary = Dictionary::from_strs(&["cat", "cot", "dog"]);
        let report = astar_report(&dictionary, "cat", "dog");
        let rendered = render_report(&report, ExportFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["outcome"], "no_path");
        assert!(value["path"].is_null());
    }

    #[test]
    fn json_names_the_limit() {
        let dictionary = Dictionary::from_strs(&["cat", "cot", "cog", "dog"]);
        let report = SearchEngine::new(&dictionary)
            .with_limits(SearchLimits::unbounded().with_max_expansions(1))
            .search(
                &Word::new("cat").unwrap(),
                &Word::new("dog").unwrap(),
                Strategy::UniformCost,
            )
            .unwrap();

        let rendered = render_report(&report, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["outcome"], "limit_reached");
        assert_eq!(value["limit"], "expansion limit of 1 reached");
    }

    #[test]
    fn dot_highlights_found_path() {
        let dictionary = Dictionary::from_strs(&["cat", "cot", "cog", "dog"]);
        let report = astar_report(&dictionary, "cat", "dog");
        let rendered = render_report(&report, ExportFormat::Dot).unwrap();

        assert!(rendered.starts_with("graph \"cat to dog (A* Search)\" {"));
        let highlighted = "\"cog\" -- \"dog\" [color=red, penwidth=2];";
        assert!(rendered.contains(highlighted));
    }

    #[test]
    fn export_writes_file() {
        let dictionary = Dictionary::from_strs(&["cat", "cot"]);
        let file = format!("word_ladder_export_{}.json", std::process::id());
        let path = std::env::temp_dir().join(file);

        let report = astar_report(&dictionary, "cat", "cot");
        export_report(&report, ExportFormat::Json, Some(&path)).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(written.contains("\"outcome\": \"found\""));
    }
}
