use serde::Deserialize;

use super::{Difficulty, PowerUp, Question};

/// Questions grouped by tier, in authored order.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionBank {
    pub easy: Vec<Question>,
    pub medium: Vec<Question>,
    pub hard: Vec<Question>,
}

impl QuestionBank {
    pub fn tier(&self, difficulty: Difficulty) -> &[Question] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

/// Immutable game data: the question bank and the power-up catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub questions: QuestionBank,
    pub power_ups: Vec<PowerUp>,
}
