//! Simple interactive CLI mode
//!
//! Text-based ladder game without the TUI

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::{Dictionary, Word};
use crate::game::{Challenge, Difficulty, GameSession, GameStatus};
use crate::output::formatters::{format_ladder, format_step};
use crate::search::{SearchLimits, Strategy};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing the
/// prompt.
pub fn run_simple(dictionary: &Dictionary, strategy: Strategy, limits: SearchLimits) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Word Ladder - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Change one letter at a time to turn the start word into the goal.");
    println!("Every move costs 10 points; a hint gives you one extra move.\n");

    loop {
        let Some(challenge) = choose_challenge(dictionary)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let session = GameSession::new(dictionary, challenge).with_limits(limits);
        if !play_game(session, strategy)? {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        let answer = get_user_input("Play again? (yes/no)")?.map(|a| a.to_lowercase());
        if let Some("yes" | "y") = answer.as_deref() {
            println!("\n🔄 New game!\n");
        } else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
    }
}

/// Ask for a tier or a custom pair; `None` means the player quit
fn choose_challenge(dictionary: &Dictionary) -> Result<Option<Challenge>> {
    loop {
        println!("Choose a challenge:");
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            println!(
                "  {}. {} ({} moves)",
                i + 1,
                difficulty,
                difficulty.move_limit()
            );
        }
        println!("  4. Custom ladder");

        let Some(choice) = get_user_input("Enter 1-4 or 'quit'")? else {
            return Ok(None);
        };

        if matches!(choice.as_str(), "quit" | "q" | "exit") {
            return Ok(None);
        }

        if let Some(difficulty) = Difficulty::from_name(&choice) {
            match Challenge::random_solvable(difficulty, dictionary, &mut rand::rng()) {
                Ok(challenge) => return Ok(Some(challenge)),
                Err(err) => println!("❌ {err}\n"),
            }
            continue;
        }

        if matches!(choice.as_str(), "4" | "custom") {
            let Some(start) = get_user_input("Starting word")? else {
                return Ok(None);
            };
            let Some(goal) = get_user_input("Goal word")? else {
                return Ok(None);
            };
            match Challenge::custom(dictionary, &start, &goal) {
                Ok(challenge) => return Ok(Some(challenge)),
                Err(err) => println!("❌ {err}. Please try again.\n"),
            }
            continue;
        }

        println!("❌ Invalid choice!\n");
    }
}

/// Play one game; returns `false` if the player quit midway
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
fn play_game(mut session: GameSession<'_>, mut strategy: Strategy) -> Result<bool> {
    println!(
        "\nYour challenge: transform '{}' into '{}'",
        session.current().text().bright_yellow().bold(),
        session.goal().text().bright_green().bold()
    );
    println!("Commands: a word to move, 'hint', 'strategy <ucs|gbfs|astar>', 'path', 'quit'\n");

    while !session.status().is_over() {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Current: {}   Goal: {}   Moves left: {}   Score: {}",
            session.current().text().bright_white().bold(),
            session.goal().text().bright_green(),
            session.moves_remaining(),
            session.score()
        );

        let Some(input) = get_user_input("Your move")? else {
            return Ok(false);
        };
        let input = input.to_lowercase();
        let mut parts = input.split_whitespace();

        match (parts.next(), parts.next()) {
            (None, _) => {}
            (Some("quit" | "q" | "exit"), _) => return Ok(false),
            (Some("path" | "p"), _) => println!("  {}", format_ladder(session.path())),
            (Some("strategy" | "s"), name) => {
                match name.and_then(Strategy::from_name) {
                    Some(chosen) => {
                        strategy = chosen;
                        println!("✓ Hints now use {strategy}");
                    }
                    None => println!("❌ Unknown strategy! Use ucs, gbfs or astar"),
                }
            }
            (Some("hint" | "h"), name) => {
                let chosen = name.and_then(Strategy::from_name).unwrap_or(strategy);
                match session.hint(chosen) {
                    Ok(hint) => match hint.next {
                        Some(next) => {
                            println!(
                                "💡 {} suggests {} ({} steps to go, +1 move)",
                                chosen.display_name(),
                                format_step(session.current(), &next).bright_cyan().bold(),
                                hint.remaining_steps.unwrap_or_default()
                            );
                            if let Some(report) = session.report(chosen) {
                                println!(
                                    "   explored {} words, {} transitions",
                                    report.graph.node_count(),
                                    report.graph.edge_count()
                                );
                            }
                        }
                        None => println!("❌ No valid next word found."),
                    },
                    Err(err) => println!("❌ {err}"),
                }
            }
            (Some(word), None) => {
                let from: Word = session.current().clone();
                match session.play(word) {
                    Ok(_) => {
                        if let Some(to) = session.path().last() {
                            println!("✓ {}", format_step(&from, to));
                        }
                    }
                    Err(err) => println!("❌ {err}"),
                }
            }
            (Some(_), Some(_)) => println!("❌ Enter a single word or command"),
        }
    }

    println!("\n{}", "═".repeat(60).bright_cyan());
    if session.status() == GameStatus::Won {
        let banner = "    🎉  L A D D E R   C O M P L E T E !  🎉";
        println!("{}", banner.bright_green().bold());
        let score = session.score().to_string();
        println!("\n  Final score: {}", score.bright_yellow().bold());
    } else {
        println!("{}", "    No more moves available. You lose!".red().bold());
    }
    println!("  Your ladder: {}", format_ladder(session.path()));

    let graph = session.player_graph();
    println!(
        "  Around your ladder: {} words, {} possible transitions",
        graph.node_count(),
        graph.edge_count()
    );
    println!("{}\n", "═".repeat(60).bright_cyan());

    Ok(true)
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
