use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::models::{AppState, Catalog, Command, Difficulty, Farewell};
use crate::round::{Progress, Round, RoundEvent};

const MAX_INPUT_LENGTH: usize = 64;
const MAX_NOTICES: usize = 50;

/// Feedback shown to the player, newest last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    RoundStarted(Difficulty),
    InvalidDifficulty,
    Round(RoundEvent),
}

pub struct App {
    pub state: AppState,
    catalog: Catalog,
    round: Option<Round>,
    input: String,
    notices: Vec<Notice>,
    prompted_at: Instant,
    farewell: Option<Farewell>,
    rng: Pcg32,
}

impl App {
    pub fn new(catalog: Catalog, seed: u64) -> Self {
        Self {
            state: AppState::SelectingDifficulty,
            catalog,
            round: None,
            input: String::new(),
            notices: Vec::new(),
            prompted_at: Instant::now(),
            farewell: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn farewell(&self) -> Option<Farewell> {
        self.farewell
    }

    pub fn is_terminated(&self) -> bool {
        self.state == AppState::Terminated
    }

    pub fn input_push(&mut self, c: char) {
        if self.input.chars().count() < MAX_INPUT_LENGTH {
            self.input.push(c);
        }
    }

    pub fn input_pop(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Submit the typed line, timed from when the current prompt was shown.
    pub fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input);
        let elapsed = self.prompted_at.elapsed();
        self.submit_line(&line, elapsed);
    }

    /// Feed one line of input to whichever prompt is showing.
    pub fn submit_line(&mut self, line: &str, elapsed: Duration) {
        match self.state {
            AppState::SelectingDifficulty => self.select_difficulty(line),
            AppState::AskingQuestion => self.answer(line, elapsed),
            AppState::RoundComplete => self.replay(line),
            AppState::Terminated => {}
        }
    }

    /// End the session as if `quit` had been typed.
    pub fn quit(&mut self) {
        self.terminate(Farewell::Quit);
    }

    fn select_difficulty(&mut self, line: &str) {
        if Command::parse(line) == Command::Quit {
            self.quit();
            return;
        }

        let Some(difficulty) = Difficulty::from_menu_choice(line) else {
            self.push_notice(Notice::InvalidDifficulty);
            return;
        };

        let round = Round::start(difficulty, &self.catalog, &mut self.rng);
        let complete = round.is_complete();
        self.round = Some(round);
        self.push_notice(Notice::RoundStarted(difficulty));

        if complete {
            self.state = AppState::RoundComplete;
        } else {
            self.state = AppState::AskingQuestion;
            self.prompted_at = Instant::now();
        }
    }

    fn answer(&mut self, line: &str, elapsed: Duration) {
        let Some(round) = self.round.as_mut() else {
            self.state = AppState::SelectingDifficulty;
            return;
        };

        let turn = round.handle(
            Command::parse(line),
            elapsed,
            &self.catalog.power_ups,
            &mut self.rng,
        );
        for event in turn.events {
            self.push_notice(Notice::Round(event));
        }

        match turn.progress {
            Progress::SameQuestion | Progress::NextQuestion => {
                self.prompted_at = Instant::now();
            }
            Progress::Complete => self.state = AppState::RoundComplete,
            Progress::Quit => self.quit(),
        }
    }

    fn replay(&mut self, line: &str) {
        let line = line.trim();
        if line.eq_ignore_ascii_case("yes") {
            log::debug!("Starting another round");
            self.round = None;
            self.notices.clear();
            self.state = AppState::SelectingDifficulty;
        } else {
            self.terminate(Farewell::Declined);
        }
    }

    fn terminate(&mut self, farewell: Farewell) {
        log::info!("Session ended: {:?}", farewell);
        self.farewell = Some(farewell);
        self.state = AppState::Terminated;
    }

    fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
        if self.notices.len() > MAX_NOTICES {
            self.notices.remove(0);
        }
    }
}
