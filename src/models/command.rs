/// A line of input at the question prompt, parsed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Answer(String),
    Quit,
    Hint,
    QueryPowerUps,
}

impl Command {
    /// Parse a raw input line. Surrounding whitespace is ignored and the
    /// command words are matched case-insensitively; anything else is an answer.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        match input.to_lowercase().as_str() {
            "quit" => Command::Quit,
            "hint" => Command::Hint,
            "power-up" => Command::QueryPowerUps,
            _ => Command::Answer(input.to_string()),
        }
    }
}
