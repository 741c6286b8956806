mod question;
mod session;

pub use question::{IncorrectAnswerCount, QuestionBody, RawQuestion, TriviaQuestion};
pub use session::QuizSession;

/// Top-level screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Quiz,
    Result,
}
