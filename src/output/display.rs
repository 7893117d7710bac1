//! Display functions for command results

use super::formatters::{create_progress_bar, format_duration, format_ladder, format_steps};
use crate::commands::{AnalysisResult, BenchmarkResult, Comparison, StrategySummary};
use crate::core::Word;
use crate::search::{SearchOutcome, SearchReport};
use colored::Colorize;

/// Print the result of solving a ladder
pub fn print_solve_result(report: &SearchReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} → {} with {}",
        report.start.text().bright_yellow().bold(),
        report.goal.text().bright_green().bold(),
        report.strategy.display_name().bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());

    match &report.outcome {
        SearchOutcome::Found(path) => {
            println!();
            for (i, step) in format_steps(path).iter().enumerate() {
                println!("  {:>2}. {}", i, step.bright_white().bold());
            }
            println!();
            let steps = report.path_cost().unwrap_or_default();
            let noun = if steps == 1 { "step" } else { "steps" };
            let message = format!("✅ Ladder found in {steps} {noun}");
            println!("{}", message.green().bold());
        }
        SearchOutcome::NoPath => {
            let SearchReport { start, goal, .. } = report;
            let message = format!("❌ No ladder connects '{start}' and '{goal}'");
            println!("\n{}", message.red().bold());
        }
        SearchOutcome::LimitReached(limit) => {
            let message = format!("⏱  Search abandoned: {limit}");
            println!("\n{}", message.yellow().bold());
        }
    }

    if verbose {
        let stats = &report.stats;
        println!("\n📊 {}", "Search statistics:".bright_cyan().bold());
        println!("   Expansions:        {}", stats.expansions);
        println!("   Generated:         {}", stats.generated);
        println!("   Stale pops:        {}", stats.stale_pops);
        println!("   Frontier peak:     {}", stats.frontier_high_water);
        println!(
            "   Explored graph:    {} words, {} edges",
            report.graph.node_count(),
            report.graph.edge_count()
        );
        println!("   Time:              {}", format_duration(stats.elapsed));
    }
}

/// Print all strategies side by side
pub fn print_comparison(comparison: &Comparison) {
    println!("\n{}", "═".repeat(72).cyan());
    println!(
        " {} {} → {} ",
        "STRATEGY COMPARISON:".bright_cyan().bold(),
        comparison.start.text().bright_yellow().bold(),
        comparison.goal.text().bright_green().bold()
    );
    println!("{}", "═".repeat(72).cyan());

    println!(
        "\n   {:<26} {:>6} {:>10} {:>10} {:>10}",
        "Strategy", "Steps", "Expanded", "Generated", "Time"
    );
    let optimal = comparison.optimal_cost();
    for report in &comparison.reports {
        let steps = match (&report.outcome, report.path_cost()) {
            (_, Some(cost)) if optimal.is_some_and(|best| cost > best) => {
                format!("{cost:>6}").yellow().to_string()
            }
            (_, Some(cost)) => format!("{cost:>6}").green().to_string(),
            (SearchOutcome::LimitReached(_), None) => {
                format!("{:>6}", "limit").yellow().to_string()
            }
            _ => format!("{:>6}", "-").red().to_string(),
        };
        println!(
            "   {:<26} {} {:>10} {:>10} {:>10}",
            report.strategy.display_name(),
            steps,
            report.stats.expansions,
            report.stats.generated,
            format_duration(report.stats.elapsed)
        );
    }

    println!();
    for report in &comparison.reports {
        if let Some(path) = report.path() {
            println!(
                "   {:<6} {}",
                report.strategy.short_name().bright_black(),
                format_ladder(path)
            );
        }
    }

    match optimal {
        Some(cost) => {
            let shortest = cost.to_string().bright_green().bold();
            println!("\n   Shortest ladder: {shortest} steps");
        }
        None => println!("\n   {}", "No strategy found a ladder".red()),
    }
    for strategy in comparison.suboptimal() {
        println!(
            "   {} took a longer route",
            strategy.display_name().yellow()
        );
    }
    if let Some(strategy) = comparison.fewest_expansions() {
        println!(
            "   Fewest expansions: {}",
            strategy.display_name().bright_cyan()
        );
    }
    let wall_time = format_duration(comparison.wall_time);
    println!("   Wall time (parallel): {wall_time}");
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n🔗 {} neighbors:", result.degree());
    if result.neighbors.is_empty() {
        println!("   {}", "(none, this word is isolated)".bright_black());
    } else {
        for chunk in result.neighbors.chunks(10) {
            let line: Vec<&str> = chunk.iter().map(Word::text).collect();
            println!("   {}", line.join(" "));
        }
    }

    let bar = create_progress_bar(result.reach(), 1.0, 30);
    println!(
        "\n📊 Among {} words of length {}:",
        result.same_length,
        result.word.length()
    );
    let percent = result.reach() * 100.0;
    let reachable = format!("{} words ({percent:.1}%)", result.component_size);
    println!(
        "   Reachable:   [{}] {}",
        bar.green(),
        reachable.bright_yellow()
    );
    if let Some((word, distance)) = &result.farthest {
        println!(
            "   Farthest:    {} ({} steps away)",
            word.text().bright_white().bold(),
            distance
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(72).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(72).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.pairs.len());
    let seconds = result.duration.as_secs_f64();
    println!("   Time taken:       {seconds:.2}s");
    println!("   Pairs/second:     {:.1}", result.pairs_per_second());

    println!(
        "\n   {:<26} {:>7} {:>8} {:>7} {:>10} {:>11}",
        "Strategy", "Solved", "No path", "Limit", "Avg steps", "Avg expand"
    );
    for summary in &result.summaries {
        println!(
            "   {:<26} {:>7} {:>8} {:>7} {:>10} {:>11}",
            summary.strategy.display_name(),
            summary.solved.to_string().green(),
            summary.no_path,
            summary.limited,
            format!("{:.2}", summary.average_path_cost()).bright_yellow(),
            format!("{:.1}", summary.average_expansions())
        );
    }

    let max_expansions = result
        .summaries
        .iter()
        .map(StrategySummary::average_expansions)
        .fold(0.0_f64, f64::max);

    println!("\n📈 {}", "Average expansions:".bright_cyan().bold());
    for summary in &result.summaries {
        let bar = create_progress_bar(summary.average_expansions(), max_expansions, 40);
        println!(
            "   {:<6} {} {:.1}",
            summary.strategy.short_name(),
            bar.green(),
            summary.average_expansions()
        );
    }

    for summary in result.summaries.iter().filter(|s| s.suboptimal > 0) {
        let pct = summary.suboptimal as f64 / summary.solved.max(1) as f64 * 100.0;
        println!(
            "\n   {} returned a longer ladder on {} pairs ({pct:.1}%)",
            summary.strategy.display_name().yellow(),
            summary.suboptimal
        );
    }
}
