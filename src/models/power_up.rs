use serde::Deserialize;

/// Cosmetic reward that can be earned after a correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PowerUp {
    pub id: String,
    pub description: String,
}

impl PowerUp {
    /// Title-cased name, e.g. "time_freezer" becomes "Time Freezer".
    pub fn display_name(&self) -> String {
        self.id
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let power_up = PowerUp {
            id: "time_freezer".to_string(),
            description: "Adds 15 seconds to your timer".to_string(),
        };
        assert_eq!(power_up.display_name(), "Time Freezer");

        let power_up = PowerUp {
            id: "skip".to_string(),
            description: String::new(),
        };
        assert_eq!(power_up.display_name(), "Skip");
    }
}
