//! Word Ladder - CLI
//!
//! Word ladder game and solver with TUI and CLI modes, comparing uniform-cost,
//! greedy best-first and A* search.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_ladder::{
    commands::{
        BenchmarkConfig, ExportFormat, SolveConfig, analyze_word, compare_strategies,
        export_report, run_benchmark, run_simple, solve_ladder,
    },
    core::Dictionary,
    game::Difficulty,
    output::{print_analysis_result, print_benchmark_result, print_comparison, print_solve_result},
    search::{SearchLimits, Strategy},
    wordlists::{embedded_dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder game and solver using uniform-cost, greedy best-first and A* search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: astar (default), gbfs, ucs
    #[arg(short, long, global = true, default_value = "astar")]
    strategy: String,

    /// Dictionary: 'embedded' (default) or path to a word list file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Stop a search after this many node expansions
    #[arg(long, global = true)]
    max_expansions: Option<usize>,

    /// Stop a search after this many milliseconds
    #[arg(long, global = true)]
    time_limit_ms: Option<u64>,

    /// Log search progress to stderr (`RUST_LOG` overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play {
        /// Difficulty: beginner (default), advanced, challenge
        #[arg(long, default_value = "beginner")]
        difficulty: String,
    },

    /// Simple CLI game (text prompts, no TUI)
    Simple,

    /// Find a ladder between two words
    Solve {
        start: String,
        goal: String,

        /// Show search statistics
        #[arg(long)]
        stats: bool,
    },

    /// Run every strategy on the same pair and compare
    Compare { start: String, goal: String },

    /// Show a word's neighbors and reachability
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark strategies on random pairs
    Benchmark {
        /// Number of random pairs
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Word length of the pairs
        #[arg(short, long, default_value = "4")]
        length: usize,

        /// Seed for reproducible pairs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Export a search's exploration graph
    Export {
        start: String,
        goal: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format: json (default) or dot
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "word_ladder=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dictionary selected by `--dictionary`
fn load_dictionary(source: &str) -> Result<Dictionary> {
    let dictionary = match source {
        "embedded" => embedded_dictionary(),
        path => load_from_file(path).with_context(|| format!("Failed to load word list {path}"))?,
    };
    if dictionary.is_empty() {
        bail!("Dictionary '{source}' contains no words");
    }
    info!(source, words = dictionary.len(), "dictionary loaded");
    Ok(dictionary)
}

fn parse_strategy(name: &str) -> Result<Strategy> {
    Strategy::from_name(name)
        .with_context(|| format!("Unknown strategy '{name}' (expected astar, gbfs or ucs)"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let strategy = parse_strategy(&cli.strategy)?;
    let mut limits = SearchLimits::unbounded();
    if let Some(max) = cli.max_expansions {
        limits = limits.with_max_expansions(max);
    }
    if let Some(ms) = cli.time_limit_ms {
        limits = limits.with_time_limit(Duration::from_millis(ms));
    }

    let dictionary = load_dictionary(&cli.dictionary)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        difficulty: "beginner".to_string(),
    });

    match command {
        Commands::Play { difficulty } => {
            run_play_command(&dictionary, &difficulty, strategy, limits)
        }
        Commands::Simple => run_simple(&dictionary, strategy, limits),
        Commands::Solve { start, goal, stats } => {
            let config = SolveConfig::new(start, goal)
                .with_strategy(strategy)
                .with_limits(limits);
            let report = solve_ladder(&config, &dictionary)?;
            print_solve_result(&report, stats || cli.verbose);
            Ok(())
        }
        Commands::Compare { start, goal } => {
            let config = SolveConfig::new(start, goal).with_limits(limits);
            let comparison = compare_strategies(&config, &dictionary)?;
            print_comparison(&comparison);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            length,
            seed,
        } => {
            println!("Running benchmark on {count} random {length}-letter pairs...");
            let config = BenchmarkConfig {
                count,
                length,
                seed,
                limits,
                show_progress: true,
            };
            let result = run_benchmark(&config, &dictionary)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Export {
            start,
            goal,
            output,
            format,
        } => {
            let format = ExportFormat::from_name(&format)
                .with_context(|| format!("Unknown format '{format}' (expected json or dot)"))?;
            let config = SolveConfig::new(start, goal)
                .with_strategy(strategy)
                .with_limits(limits);
            let report = solve_ladder(&config, &dictionary)?;
            export_report(&report, format, output.as_deref())
        }
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    difficulty: &str,
    strategy: Strategy,
    limits: SearchLimits,
) -> Result<()> {
    use word_ladder::interactive::{App, run_tui};

    let difficulty = Difficulty::from_name(difficulty).with_context(|| {
        format!("Unknown difficulty '{difficulty}' (expected beginner, advanced or challenge)")
    })?;
    let app = App::new(dictionary, difficulty, strategy, limits)?;
    run_tui(app)
}
