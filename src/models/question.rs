use serde::Deserialize;

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Lettered options; the answer token is the option letter.
    MultipleChoice,
    /// No options; the answer token is the expected text.
    FreeText,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub answer: String,
    pub kind: QuestionKind,
}

impl Question {
    /// Case-insensitive exact comparison against the answer token.
    pub fn is_correct(&self, input: &str) -> bool {
        input.to_lowercase() == self.answer.to_lowercase()
    }

    /// First character of the answer token, for question kinds that offer hints.
    pub fn hint(&self) -> Option<char> {
        match self.kind {
            QuestionKind::MultipleChoice => self.answer.chars().next(),
            QuestionKind::FreeText => None,
        }
    }
}
