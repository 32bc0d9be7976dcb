use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Catalog, Difficulty, QuestionKind};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Error type for catalog loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no questions for the {0} tier")]
    EmptyTier(Difficulty),

    #[error("{tier} question {index}: {reason}")]
    InvalidQuestion {
        tier: Difficulty,
        index: usize,
        reason: &'static str,
    },

    #[error("power-up catalog is empty")]
    NoPowerUps,

    #[error("duplicate power-up: {0}")]
    DuplicatePowerUp(String),
}

/// Load the catalog compiled into the binary.
pub fn load_catalog() -> Result<Catalog, LoadError> {
    parse_catalog(EMBEDDED_CATALOG)
}

/// Parse and validate a catalog document.
pub fn parse_catalog(json: &str) -> Result<Catalog, LoadError> {
    let catalog: Catalog = serde_json::from_str(json)?;
    validate(&catalog)?;

    log::debug!(
        "Loaded catalog: {} easy, {} medium, {} hard questions, {} power-ups",
        catalog.questions.easy.len(),
        catalog.questions.medium.len(),
        catalog.questions.hard.len(),
        catalog.power_ups.len()
    );

    Ok(catalog)
}

fn validate(catalog: &Catalog) -> Result<(), LoadError> {
    for tier in Difficulty::ALL {
        let questions = catalog.questions.tier(tier);
        if questions.is_empty() {
            return Err(LoadError::EmptyTier(tier));
        }

        for (index, question) in questions.iter().enumerate() {
            let reason = if question.text.trim().is_empty() {
                Some("question text is empty")
            } else if question.answer.trim().is_empty() {
                Some("answer is empty")
            } else if question.kind == QuestionKind::MultipleChoice && question.options.len() < 2 {
                Some("multiple choice needs at least two options")
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(LoadError::InvalidQuestion { tier, index, reason });
            }
        }
    }

    if catalog.power_ups.is_empty() {
        return Err(LoadError::NoPowerUps);
    }

    let mut seen = HashSet::new();
    for power_up in &catalog.power_ups {
        if !seen.insert(power_up.id.as_str()) {
            return Err(LoadError::DuplicatePowerUp(power_up.id.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTION: &str =
        r#"{"text": "Q?", "options": ["A) x", "B) y"], "answer": "A", "kind": "multiple_choice"}"#;

    fn catalog_json(easy: &str, power_ups: &str) -> String {
        format!(
            r#"{{"questions": {{"easy": [{easy}], "medium": [{QUESTION}], "hard": [{QUESTION}]}},
                "power_ups": [{power_ups}]}}"#
        )
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = load_catalog().unwrap();
        assert_eq!(catalog.questions.tier(Difficulty::Easy).len(), 2);
        assert_eq!(catalog.questions.tier(Difficulty::Medium).len(), 1);
        assert_eq!(catalog.questions.tier(Difficulty::Hard).len(), 1);

        let ids: Vec<&str> = catalog.power_ups.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["time_freezer", "double_points", "skip"]);
    }

    #[test]
    fn test_embedded_planet_question() {
        let catalog = load_catalog().unwrap();
        let planet = catalog
            .questions
            .tier(Difficulty::Easy)
            .iter()
            .find(|q| q.text.contains("largest planet"))
            .unwrap();
        assert_eq!(planet.answer, "B");
        assert_eq!(planet.options[1], "B) Jupiter");
    }

    #[test]
    fn test_rejects_empty_tier() {
        let json = catalog_json("", r#"{"id": "skip", "description": "d"}"#);
        assert!(matches!(
            parse_catalog(&json),
            Err(LoadError::EmptyTier(Difficulty::Easy))
        ));
    }

    #[test]
    fn test_rejects_blank_answer() {
        let easy = r#"{"text": "Q?", "options": ["A) x", "B) y"], "answer": " ",
            "kind": "multiple_choice"}"#;
        let json = catalog_json(easy, r#"{"id": "skip", "description": "d"}"#);
        assert!(matches!(
            parse_catalog(&json),
            Err(LoadError::InvalidQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_multiple_choice_without_options() {
        let easy = r#"{"text": "Q?", "answer": "A", "kind": "multiple_choice"}"#;
        let json = catalog_json(easy, r#"{"id": "skip", "description": "d"}"#);
        assert!(matches!(
            parse_catalog(&json),
            Err(LoadError::InvalidQuestion { .. })
        ));
    }

    #[test]
    fn test_rejects_power_up_problems() {
        let json = catalog_json(QUESTION, "");
        assert!(matches!(parse_catalog(&json), Err(LoadError::NoPowerUps)));

        let dupes = r#"{"id": "skip", "description": "a"}, {"id": "skip", "description": "b"}"#;
        let json = catalog_json(QUESTION, dupes);
        assert!(matches!(
            parse_catalog(&json),
            Err(LoadError::DuplicatePowerUp(id)) if id == "skip"
        ));
    }

    #[test]
    fn test_rejects_missing_tier() {
        let json = r#"{"questions": {"easy": [], "medium": []}, "power_ups": []}"#;
        assert!(matches!(parse_catalog(json), Err(LoadError::Parse(_))));
    }
}
