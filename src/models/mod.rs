mod catalog;
mod command;
mod difficulty;
mod power_up;
mod question;

pub use catalog::{Catalog, QuestionBank};
pub use command::Command;
pub use difficulty::Difficulty;
pub use power_up::PowerUp;
pub use question::{Question, QuestionKind};

/// Which screen the quiz is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    SelectingDifficulty,
    AskingQuestion,
    RoundComplete,
    Terminated,
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Farewell {
    /// The player typed `quit` (or pressed Ctrl-C).
    Quit,
    /// The player declined to play another round.
    Declined,
}
