//! TUI application state and logic

use crate::core::Dictionary;
use crate::game::{Challenge, Difficulty, GameSession, GameStatus, Hint};
use crate::search::{SearchLimits, SearchReport, Strategy};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub session: GameSession<'a>,
    pub difficulty: Difficulty,
    pub strategy: Strategy,
    pub limits: SearchLimits,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub last_hint: Option<Hint>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub best_score: Option<u32>,
}

impl<'a> App<'a> {
    /// Start with a random solvable challenge
    ///
    /// # Errors
    ///
    /// Returns an error if no solvable challenge can be drawn for `difficulty`.
    pub fn new(
        dictionary: &'a Dictionary,
        difficulty: Difficulty,
        strategy: Strategy,
        limits: SearchLimits,
    ) -> Result<Self> {
        let challenge = Challenge::random_solvable(difficulty, dictionary, &mut rand::rng())?;
        Ok(Self::with_challenge(dictionary, challenge, strategy, limits))
    }

    /// Start with a given challenge
    #[must_use]
    pub fn with_challenge(
        dictionary: &'a Dictionary,
        challenge: Challenge,
        strategy: Strategy,
        limits: SearchLimits,
    ) -> Self {
        let difficulty = challenge.difficulty.unwrap_or(Difficulty::Beginner);
        let mut app = Self {
            dictionary,
            session: GameSession::new(dictionary, challenge).with_limits(limits),
            difficulty,
            strategy,
            limits,
            input_buffer: String::new(),
            messages: Vec::new(),
            last_hint: None,
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Playing,
        };
        app.announce_challenge();
        app
    }

    fn announce_challenge(&mut self) {
        let text = format!(
            "Transform '{}' into '{}' in {} moves",
            self.session.current(),
            self.session.goal(),
            self.session.move_limit()
        );
        self.add_message(&text, MessageStyle::Info);
        self.add_message(
            "Type a word and press Enter. TAB for a hint.",
            MessageStyle::Info,
        );
    }

    /// Add a typed letter, up to the ladder's word length
    pub fn push_letter(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.session.current().length() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn submit_word(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if input.is_empty() {
            return;
        }

        match self.session.play(&input) {
            Ok(GameStatus::Won) => {
                self.finish_game();
                let text = format!("🎉 LADDER COMPLETE! Final score: {}", self.session.score());
                self.add_message(&text, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Ok(GameStatus::Lost) => {
                self.finish_game();
                self.add_message("No more moves available. You lose!", MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Ok(GameStatus::InProgress) => {
                let text = format!(
                    "'{input}' accepted, {} moves left",
                    self.session.moves_remaining()
                );
                self.add_message(&text, MessageStyle::Success);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;
        self.stats.total_games += 1;
        if self.session.status() == GameStatus::Won {
            self.stats.games_won += 1;
            let score = self.session.score();
            self.stats.best_score = self.stats.best_score.max(Some(score));
        }
    }

    pub fn request_hint(&mut self) {
        match self.session.hint(self.strategy) {
            Ok(hint) => {
                match &hint.next {
                    Some(next) => {
                        let text = format!(
                            "{} suggests '{next}' ({} steps to go, +1 move)",
                            self.strategy.short_name().to_uppercase(),
                            hint.remaining_steps.unwrap_or_default()
                        );
                        self.add_message(&text, MessageStyle::Success);
                    }
                    None => self.add_message("No valid next word found.", MessageStyle::Error),
                }
                self.last_hint = Some(hint);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Report behind the most recent hint
    #[must_use]
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_hint
            .as_ref()
            .and_then(|hint| self.session.report(hint.strategy))
    }

    pub fn cycle_strategy(&mut self, forward: bool) {
        let all = Strategy::ALL;
        let index = all.iter().position(|&s| s == self.strategy).unwrap_or(0);
        let next = if forward {
            (index + 1) % all.len()
        } else {
            (index + all.len() - 1) % all.len()
        };
        self.strategy = all[next];
        let text = format!("Hints now use {}", self.strategy);
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn cycle_difficulty(&mut self) {
        let all = Difficulty::ALL;
        let index = all.iter().position(|&d| d == self.difficulty).unwrap_or(0);
        self.difficulty = all[(index + 1) % all.len()];
        let text = format!("Next game: {} mode", self.difficulty);
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match Challenge::random_solvable(self.difficulty, self.dictionary, &mut rand::rng()) {
            Ok(challenge) => {
                let session = GameSession::new(self.dictionary, challenge);
                self.session = session.with_limits(self.limits);
                self.input_buffer.clear();
                self.last_hint = None;
                self.messages.clear();
                self.input_mode = InputMode::Playing;
                self.announce_challenge();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('d') => app.cycle_difficulty(),
                    KeyCode::Left => app.cycle_strategy(false),
                    KeyCode::Right => app.cycle_strategy(true),
                    _ => {}
                },
                InputMode::Playing => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('n') if ctrl => app.new_game(),
                    KeyCode::Char('d') if ctrl => app.cycle_difficulty(),
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.request_hint(),
                    KeyCode::Left => app.cycle_strategy(false),
                    KeyCode::Right => app.cycle_strategy(true),
                    KeyCode::Char(c) => app.push_letter(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_word(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
