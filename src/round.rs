//! One round of play on a single difficulty tier.
//!
//! The round owns a shuffled working copy of the tier's questions and the
//! per-round state (score, questions asked, earned power-ups). It knows nothing
//! about rendering; every turn reports what happened as [`RoundEvent`]s.

use std::time::Duration;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::models::{Catalog, Command, Difficulty, PowerUp, Question};
use crate::scoring::score_answer;

/// Chance of earning a power-up after a correct answer.
pub const POWER_UP_CHANCE: f64 = 0.2;

/// Something the player should be told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    Correct { time_bonus: u32, points: u32 },
    Incorrect { answer: String },
    Hint(char),
    NoHint,
    PowerUps(Vec<String>),
    NoPowerUps,
    PowerUpEarned(String),
}

/// Where the round stands after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Re-prompt the current question.
    SameQuestion,
    NextQuestion,
    Complete,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub events: Vec<RoundEvent>,
    pub progress: Progress,
}

pub struct Round {
    difficulty: Difficulty,
    questions: Vec<Question>,
    position: usize,
    score: u32,
    asked: usize,
    power_ups: Vec<String>,
}

impl Round {
    /// Start a round with a freshly shuffled copy of the tier's questions.
    pub fn start<R: Rng>(difficulty: Difficulty, catalog: &Catalog, rng: &mut R) -> Self {
        let mut questions = catalog.questions.tier(difficulty).to_vec();
        questions.shuffle(rng);

        let asked = usize::from(!questions.is_empty());
        log::debug!("Starting {} round with {} questions", difficulty, questions.len());

        Self {
            difficulty,
            questions,
            position: 0,
            score: 0,
            asked,
            power_ups: Vec::new(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    /// 1-based number of the current question.
    pub fn current_question_number(&self) -> usize {
        self.position + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Questions presented so far, including ones skipped with `power-up`.
    pub fn questions_asked(&self) -> usize {
        self.asked
    }

    pub fn power_ups(&self) -> &[String] {
        &self.power_ups
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.questions.len()
    }

    /// Apply one command to the current question. `elapsed` is the time
    /// between showing the prompt and receiving the input.
    pub fn handle<R: Rng>(
        &mut self,
        command: Command,
        elapsed: Duration,
        catalog: &[PowerUp],
        rng: &mut R,
    ) -> Turn {
        let Some(question) = self.current_question() else {
            return Turn {
                events: Vec::new(),
                progress: Progress::Complete,
            };
        };

        match command {
            Command::Quit => Turn {
                events: Vec::new(),
                progress: Progress::Quit,
            },
            Command::Hint => {
                let event = match question.hint() {
                    Some(first) => RoundEvent::Hint(first),
                    None => RoundEvent::NoHint,
                };
                Turn {
                    events: vec![event],
                    progress: Progress::SameQuestion,
                }
            }
            Command::QueryPowerUps => {
                let event = if self.power_ups.is_empty() {
                    RoundEvent::NoPowerUps
                } else {
                    RoundEvent::PowerUps(self.power_ups.clone())
                };
                Turn {
                    events: vec![event],
                    progress: self.advance(),
                }
            }
            Command::Answer(input) => {
                let correct = question.is_correct(&input);
                let answer = question.answer.clone();
                let scored = score_answer(self.score, correct, elapsed);
                self.score = scored.score;

                let mut events = Vec::with_capacity(2);
                if scored.correct {
                    events.push(RoundEvent::Correct {
                        time_bonus: scored.time_bonus,
                        points: scored.points,
                    });
                    if let Some(earned) = self.roll_power_up(catalog, rng) {
                        events.push(RoundEvent::PowerUpEarned(earned));
                    }
                } else {
                    events.push(RoundEvent::Incorrect { answer });
                }

                Turn {
                    events,
                    progress: self.advance(),
                }
            }
        }
    }

    fn roll_power_up<R: Rng>(&mut self, catalog: &[PowerUp], rng: &mut R) -> Option<String> {
        if !rng.random_bool(POWER_UP_CHANCE) {
            return None;
        }

        let earned = catalog.choose(rng)?.id.clone();
        log::debug!("Power-up earned: {}", earned);
        self.power_ups.push(earned.clone());
        Some(earned)
    }

    fn advance(&mut self) -> Progress {
        self.position += 1;
        if self.is_complete() {
            log::debug!("Round complete with score {}", self.score);
            Progress::Complete
        } else {
            self.asked += 1;
            Progress::NextQuestion
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_catalog;
    use crate::models::{QuestionBank, QuestionKind};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn answer_current(round: &mut Round, catalog: &Catalog, input: &str, rng: &mut Pcg32) -> Turn {
        round.handle(
            Command::Answer(input.to_string()),
            Duration::from_secs_f64(2.5),
            &catalog.power_ups,
            rng,
        )
    }

    fn large_catalog(count: usize) -> Catalog {
        let question = |i: usize| Question {
            text: format!("Question {i}"),
            options: vec!["A) yes".to_string(), "B) no".to_string()],
            answer: "A".to_string(),
            kind: QuestionKind::MultipleChoice,
        };
        let catalog = load_catalog().unwrap();
        Catalog {
            questions: QuestionBank {
                easy: (0..count).map(question).collect(),
                medium: Vec::new(),
                hard: Vec::new(),
            },
            power_ups: catalog.power_ups,
        }
    }

    #[test]
    fn test_round_uses_every_question_once() {
        let catalog = large_catalog(20);
        let round = Round::start(Difficulty::Easy, &catalog, &mut rng());

        let mut texts: Vec<&str> = round.questions().iter().map(|q| q.text.as_str()).collect();
        texts.sort_unstable();
        let mut expected: Vec<&str> = catalog
            .questions
            .easy
            .iter()
            .map(|q| q.text.as_str())
            .collect();
        expected.sort_unstable();
        assert_eq!(texts, expected);

        // The catalog itself keeps authored order.
        assert_eq!(catalog.questions.easy[0].text, "Question 0");
        assert_eq!(round.questions_asked(), 1);
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn test_correct_answer_scores_with_time_bonus() {
        let catalog = load_catalog().unwrap();
        let mut rng = rng();
        let mut round = Round::start(Difficulty::Medium, &catalog, &mut rng);

        let turn = answer_current(&mut round, &catalog, "a", &mut rng);
        assert_eq!(
            turn.events[0],
            RoundEvent::Correct {
                time_bonus: 8,
                points: 18
            }
        );
        assert_eq!(turn.progress, Progress::Complete);
        assert_eq!(round.score(), 18);
        assert_eq!(round.questions_asked(), 1);
        assert!(round.is_complete());
    }

    #[test]
    fn test_incorrect_answer_reveals_answer_and_keeps_score() {
        let catalog = load_catalog().unwrap();
        let mut rng = rng();
        let mut round = Round::start(Difficulty::Hard, &catalog, &mut rng);

        let turn = answer_current(&mut round, &catalog, "Einstein", &mut rng);
        assert_eq!(
            turn.events,
            vec![RoundEvent::Incorrect {
                answer: "C".to_string()
            }]
        );
        assert_eq!(round.score(), 0);
        assert!(round.power_ups().is_empty());
    }

    #[test]
    fn test_hint_keeps_the_same_question() {
        let catalog = load_catalog().unwrap();
        let mut rng = rng();
        let mut round = Round::start(Difficulty::Easy, &catalog, &mut rng);
        let before = round.current_question().cloned();

        let turn = round.handle(Command::Hint, Duration::ZERO, &catalog.power_ups, &mut rng);
        assert_eq!(turn.events, vec![RoundEvent::Hint('B')]);
        assert_eq!(turn.progress, Progress::SameQuestion);
        assert_eq!(round.current_question().cloned(), before);
        assert_eq!(round.questions_asked(), 1);
    }

    #[test]
    fn test_free_text_has_no_hint() {
        let mut catalog = large_catalog(1);
        catalog.questions.easy[0].kind = QuestionKind::FreeText;
        let mut rng = rng();
        let mut round = Round::start(Difficulty::Easy, &catalog, &mut rng);

        let turn = round.handle(Command::Hint, Duration::ZERO, &catalog.power_ups, &mut rng);
        assert_eq!(turn.events, vec![RoundEvent::NoHint]);
    }

    #[test]
    fn test_power_up_query_skips_question_without_scoring() {
        let catalog = load_catalog().unwrap();
        let mut rng = rng();
        let mut round = Round::start(Difficulty::Easy, &catalog, &mut rng);

        let turn = round.handle(
            Command::QueryPowerUps,
            Duration::ZERO,
            &catalog.power_ups,
            &mut rng,
        );
        assert_eq!(turn.events, vec![RoundEvent::NoPowerUps]);
        assert_eq!(turn.progress, Progress::NextQuestion);
        assert_eq!(round.score(), 0);
        assert_eq!(round.current_question_number(), 2);
        assert_eq!(round.questions_asked(), 2);
    }

    #[test]
    fn test_quit_stops_without_advancing() {
        let catalog = load_catalog().unwrap();
        let mut rng = rng();
        let mut round = Round::start(Difficulty::Easy, &catalog, &mut rng);

        let turn = round.handle(Command::Quit, Duration::ZERO, &catalog.power_ups, &mut rng);
        assert_eq!(turn.progress, Progress::Quit);
        assert!(turn.events.is_empty());
        assert_eq!(round.current_question_number(), 1);
    }

    #[test]
    fn test_power_ups_follow_correct_answers_at_about_one_in_five() {
        let catalog = large_catalog(2000);
        let mut rng = rng();
        let mut round = Round::start(Difficulty::Easy, &catalog, &mut rng);

        let mut earned_events = 0;
        while !round.is_complete() {
            let turn = answer_current(&mut round, &catalog, "A", &mut rng);
            earned_events += turn
                .events
                .iter()
                .filter(|e| matches!(e, RoundEvent::PowerUpEarned(_)))
                .count();
        }

        let earned = round.power_ups().len();
        assert_eq!(earned, earned_events);
        assert!((250..550).contains(&earned), "earned {earned} of 2000");

        let ids: Vec<&str> = catalog.power_ups.iter().map(|p| p.id.as_str()).collect();
        assert!(round.power_ups().iter().all(|id| ids.contains(&id.as_str())));
    }

    #[test]
    fn test_held_power_ups_are_listed() {
        let catalog = large_catalog(200);
        let mut rng = rng();
        let mut round = Round::start(Difficulty::Easy, &catalog, &mut rng);

        while round.power_ups().is_empty() && !round.is_complete() {
            answer_current(&mut round, &catalog, "a", &mut rng);
        }
        assert!(!round.power_ups().is_empty());

        let held = round.power_ups().to_vec();
        let turn = round.handle(
            Command::QueryPowerUps,
            Duration::ZERO,
            &catalog.power_ups,
            &mut rng,
        );
        assert_eq!(turn.events, vec![RoundEvent::PowerUps(held)]);
    }

    #[test]
    fn test_wrong_answers_never_grant_power_ups() {
        let catalog = large_catalog(500);
        let mut rng = rng();
        let mut round = Round::start(Difficulty::Easy, &catalog, &mut rng);

        while !round.is_complete() {
            answer_current(&mut round, &catalog, "B", &mut rng);
        }
        assert!(round.power_ups().is_empty());
        assert_eq!(round.score(), 0);
        assert_eq!(round.questions_asked(), 500);
    }

    #[test]
    fn test_empty_tier_is_complete_immediately() {
        let catalog = large_catalog(1);
        let mut rng = rng();
        let mut round = Round::start(Difficulty::Hard, &catalog, &mut rng);

        assert!(round.is_complete());
        assert_eq!(round.questions_asked(), 0);
        let turn = answer_current(&mut round, &catalog, "A", &mut rng);
        assert_eq!(turn.progress, Progress::Complete);
    }
}
