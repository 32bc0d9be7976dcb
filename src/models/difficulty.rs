use std::fmt;

/// Difficulty tier a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Tiers in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Map a difficulty menu entry ("1"-"3") to its tier.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Difficulty::Easy),
            "2" => Some(Difficulty::Medium),
            "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn menu_choice(self) -> char {
        match self {
            Difficulty::Easy => '1',
            Difficulty::Medium => '2',
            Difficulty::Hard => '3',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Menu label, e.g. "Easy (Beginner Cosmonaut)".
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy (Beginner Cosmonaut)",
            Difficulty::Medium => "Medium (Space Explorer)",
            Difficulty::Hard => "Hard (Astrophysics Expert)",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
