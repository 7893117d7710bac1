//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod compare;
pub mod export;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, StrategySummary, run_benchmark};
pub use compare::{Comparison, compare_strategies};
pub use export::{ExportFormat, export_report, render_report};
pub use simple::run_simple;
pub use solve::{SolveConfig, solve_ladder};
