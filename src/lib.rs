//! # trivia-quiz
//!
//! A terminal trivia quiz. One batch of questions is fetched from the
//! public trivia API at startup; each question is shown with four answer
//! choices, the correct one rotated into a random slot every round, and a
//! running score is kept as answers are picked.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_quiz::{Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Fetch a batch of questions and play it
//!     let quiz = Quiz::fetch("https://the-trivia-api.com/v2/questions").await?;
//!
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
mod app;
mod models;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use api::FetchError;
pub use app::{AnswerBoard, App, NUM_SLOTS};
pub use models::{AppState, QuizSession, TriviaQuestion};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error fetching questions from the API.
    Fetch(FetchError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Fetch(e) => write!(f, "Failed to fetch questions: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Fetch(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<FetchError> for QuizError {
    fn from(err: FetchError) -> Self {
        QuizError::Fetch(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from an already-fetched question list.
    pub fn new(questions: Vec<TriviaQuestion>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// Fetch a batch of questions from `endpoint` and build a quiz from it.
    ///
    /// This is the only suspension point in the program; everything after
    /// it runs synchronously on the event loop.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use trivia_quiz::Quiz;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let quiz = Quiz::fetch("https://the-trivia-api.com/v2/questions")
    ///     .await
    ///     .expect("Failed to fetch questions");
    /// # }
    /// ```
    pub async fn fetch(endpoint: &str) -> Result<Self, QuizError> {
        let questions = api::fetch_questions(endpoint).await?;
        Ok(Self::new(questions))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
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

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_slot();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_slot();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.answer_selected();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
