//! TUI rendering with ratatui
//!
//! Visualizations for the word ladder game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Word;
use crate::game::GameStatus;
use crate::search::{SearchOutcome, estimate};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Left panel
            Constraint::Percentage(45), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🪜 WORD LADDER  {}  →  {}",
        app.session.challenge().start.text().to_uppercase(),
        app.session.goal().text().to_uppercase()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Player ladder
            Constraint::Percentage(40), // Hint
        ])
        .split(area);

    render_ladder(f, app, chunks[0]);
    render_hint(f, app, chunks[1]);
}

/// A word with the letter changed from `previous` highlighted
fn step_spans(word: &Word, previous: Option<&Word>, goal: &Word) -> Vec<Span<'static>> {
    let changed = previous.and_then(|p| p.first_difference(word));
    word.bytes()
        .iter()
        .enumerate()
        .map(|(i, &byte)| {
            let letter = char::from(byte).to_ascii_uppercase().to_string();
            let style = if Some(i) == changed {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if goal.char_at(i) == byte {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            Span::styled(format!("{letter} "), style)
        })
        .collect()
}

fn render_ladder(f: &mut Frame, app: &App, area: Rect) {
    let path = app.session.path();
    let goal = app.session.goal();

    // Show the most recent rungs that fit
    let visible = usize::from(area.height.saturating_sub(3)).max(1);
    let skip = path.len().saturating_sub(visible);

    let mut lines: Vec<Line> = path
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, word)| {
            let previous = i.checked_sub(1).and_then(|p| path.get(p));
            let mut spans = vec![Span::styled(
                format!("{i:>3}. "),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(step_spans(word, previous, goal));
            Line::from(spans)
        })
        .collect();

    if app.session.status() != GameStatus::Won {
        let mut spans = vec![Span::styled(" 🎯  ", Style::default().fg(Color::DarkGray))];
        spans.extend(step_spans(goal, None, goal));
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Your Ladder ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = match (&app.last_hint, app.last_report()) {
        (Some(hint), Some(report)) => {
            let suggestion = hint
                .next
                .as_ref()
                .map_or_else(|| "none".to_string(), |w| w.text().to_uppercase());
            let outcome = match &report.outcome {
                SearchOutcome::Found(path) => format!("ladder of {} steps", path.len() - 1),
                SearchOutcome::NoPath => "no ladder exists".to_string(),
                SearchOutcome::LimitReached(limit) => limit.to_string(),
            };
            vec![
                Line::from(vec![
                    Span::raw("Suggested: "),
                    Span::styled(
                        suggestion,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(format!("Strategy:  {}", hint.strategy.display_name())),
                Line::from(format!("Result:    {outcome}")),
                Line::from(format!(
                    "Explored:  {} words, {} edges",
                    report.graph.node_count(),
                    report.graph.edge_count()
                )),
                Line::from(format!(
                    "Expanded:  {} (frontier peak {})",
                    report.stats.expansions, report.stats.frontier_high_water
                )),
            ]
        }
        _ => vec![Line::from("Press TAB for a hint")],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Hint ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Letters in place
            Constraint::Length(3), // Moves used
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_closeness(f, app, chunks[0]);
    render_moves(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_closeness(f: &mut Frame, app: &App, area: Rect) {
    let current = app.session.current();
    let length = current.length().max(1);
    let off = estimate(current, app.session.goal()) as usize;
    let matching = length.saturating_sub(off);
    let percent = u16::try_from(matching * 100 / length).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Letters In Place ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{matching}/{length}"));
    f.render_widget(gauge, area);
}

fn render_moves(f: &mut Frame, app: &App, area: Rect) {
    let limit = app.session.move_limit().max(1);
    let taken = app.session.moves_taken().min(limit);
    let percent = u16::try_from(taken * 100 / limit).unwrap_or(100);
    let color = if app.session.moves_remaining() <= 2 {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Moves Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{taken}/{limit} | {} hints", app.session.hints_used()));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => {
            let title = if app.session.status() == GameStatus::Won {
                " 🎉 CONGRATULATIONS! 🎉 | 'n' new game | 'd' difficulty | 'q' quit "
            } else {
                " GAME OVER | 'n' new game | 'd' difficulty | 'q' quit "
            };
            (title, "", Color::Green)
        }
        InputMode::Playing => (
            " Next Word | Enter to submit | TAB for hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let mode_text = match app.session.challenge().difficulty {
        Some(difficulty) => format!("Mode: {difficulty}"),
        None => "Mode: Custom".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {} | Best: {}",
        app.stats.total_games,
        app.stats.games_won,
        app.stats
            .best_score
            .map_or_else(|| "-".to_string(), |s| s.to_string())
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let score_text = format!("Score: {}", app.session.score());
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[2]);

    let help_text = format!(
        "←/→: {} | ^N: New | Esc: Quit",
        app.strategy.short_name().to_uppercase()
    );
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
