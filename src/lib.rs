//! # cosmic-quiz
//!
//! A space-themed trivia quiz for the terminal. Questions come in three
//! difficulty tiers; fast correct answers earn a time bonus, and correct
//! answers sometimes earn a (purely cosmetic) power-up.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cosmic_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::load(42)?;
//!     let farewell = quiz.run()?;
//!     println!("{farewell}");
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
pub mod round;
pub mod scoring;
pub mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

pub use app::{App, Notice};
pub use data::{LoadError, load_catalog, parse_catalog};
pub use models::{
    AppState, Catalog, Command, Difficulty, Farewell, PowerUp, Question, QuestionBank, QuestionKind,
};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load the quiz catalog: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A quiz session that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz over the given catalog. `seed` drives question order and
    /// power-up draws.
    pub fn new(catalog: Catalog, seed: u64) -> Self {
        Self {
            app: App::new(catalog, seed),
        }
    }

    /// Create a quiz over the built-in catalog.
    pub fn load(seed: u64) -> Result<Self, QuizError> {
        let catalog = load_catalog()?;
        Ok(Self::new(catalog, seed))
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal until the player quits or declines another
    /// round, then restores it and reports how the session ended.
    pub fn run(mut self) -> Result<Farewell, QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result?;

        Ok(self.app.farewell().unwrap_or(Farewell::Quit))
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    while !app.is_terminated() {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(app, key);
        }
    }

    Ok(())
}

/// Line editing shared by every prompt.
fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => app.input_pop(),
        KeyCode::Esc => app.clear_input(),
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            app.input_push(c)
        }
        _ => {}
    }
}
