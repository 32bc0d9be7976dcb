//! Player-facing wording, kept apart from layout so it can be tested.

use std::fmt;

use crate::app::Notice;
use crate::models::{Difficulty, Farewell, PowerUp};
use crate::round::RoundEvent;

pub const TITLE: &str = "COSMIC QUIZ ADVENTURE";

pub const TAGLINE: [&str; 3] = [
    "Embark on an interstellar journey of knowledge!",
    "Answer questions correctly to earn stardust points",
    "Discover power-ups and climb the leaderboard",
];

pub const MENU_PROMPT: &str = "Enter choice (1-3): ";
pub const ANSWER_PROMPT: &str = "Your answer: ";
pub const ANSWER_COMMANDS: &str = "answer, or 'quit' · 'hint' · 'power-up'  ·  enter submit";
pub const REPLAY_PROMPT: &str = "Would you like to play again? (yes/no): ";

/// How a line of feedback should be coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Failure,
    Reward,
}

pub fn banner_rule() -> String {
    "✨".repeat(20)
}

/// "Time Freezer: Adds 15 seconds to your timer"
pub fn power_up_entry(power_up: &PowerUp) -> String {
    format!("{}: {}", power_up.display_name(), power_up.description)
}

/// "1. Easy (Beginner Cosmonaut)"
pub fn menu_entry(difficulty: Difficulty) -> String {
    format!("{}. {}", difficulty.menu_choice(), difficulty.label())
}

pub fn notice_lines(notice: &Notice) -> Vec<(Tone, String)> {
    match notice {
        Notice::RoundStarted(difficulty) => {
            vec![(Tone::Info, format!("Starting the {} tier. Good luck!", difficulty))]
        }
        Notice::InvalidDifficulty => {
            vec![(Tone::Failure, "Please enter a valid option (1-3)".to_string())]
        }
        Notice::Round(event) => event_lines(event),
    }
}

fn event_lines(event: &RoundEvent) -> Vec<(Tone, String)> {
    match event {
        RoundEvent::Correct { time_bonus, points } => vec![
            (Tone::Success, format!("✓ Correct! Time bonus: +{} points", time_bonus)),
            (Tone::Success, format!("✓ Total earned: {} stardust", points)),
        ],
        RoundEvent::Incorrect { answer } => vec![(
            Tone::Failure,
            format!("✗ Incorrect. The correct answer was {}", answer),
        )],
        RoundEvent::Hint(first) => vec![(
            Tone::Info,
            format!("Hint: The correct answer starts with '{}'", first),
        )],
        RoundEvent::NoHint => vec![(
            Tone::Info,
            "Sorry, no hints available for this question type".to_string(),
        )],
        RoundEvent::PowerUps(held) => {
            vec![(Tone::Info, format!("Active power-ups: {}", held.join(", ")))]
        }
        RoundEvent::NoPowerUps => {
            vec![(Tone::Info, "You don't have any power-ups yet!".to_string())]
        }
        RoundEvent::PowerUpEarned(id) => vec![(
            Tone::Reward,
            format!("🎉 You earned a {} power-up!", id.replace('_', " ")),
        )],
    }
}

pub fn final_score(score: u32) -> String {
    format!("⭐ Round complete! Your final score: {} stardust", score)
}

pub fn questions_answered(asked: usize) -> String {
    format!("📊 Questions answered: {}", asked)
}

impl fmt::Display for Farewell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Farewell::Quit => f.write_str("Thanks for playing!"),
            Farewell::Declined => f.write_str("Thanks for playing Cosmic Quiz Adventure! 🚀"),
        }
    }
}
