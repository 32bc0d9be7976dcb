//! Points awarded for an answer.
//!
//! A correct answer is worth [`BASE_POINTS`] plus a time bonus that starts at
//! [`MAX_TIME_BONUS`] and drops by one for every whole second taken.

use std::time::Duration;

pub const BASE_POINTS: u32 = 10;
pub const MAX_TIME_BONUS: u32 = 10;

/// Result of scoring one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    /// Running score after this answer.
    pub score: u32,
    pub correct: bool,
    /// Bonus included in `points` (zero when incorrect).
    pub time_bonus: u32,
    /// Points added to the running score.
    pub points: u32,
}

/// `max(0, 10 - floor(elapsed seconds))`.
pub fn time_bonus(elapsed: Duration) -> u32 {
    let whole_seconds = u32::try_from(elapsed.as_secs()).unwrap_or(u32::MAX);
    MAX_TIME_BONUS.saturating_sub(whole_seconds)
}

/// Score one answer against the running total.
pub fn score_answer(score: u32, correct: bool, elapsed: Duration) -> Scored {
    if !correct {
        return Scored {
            score,
            correct,
            time_bonus: 0,
            points: 0,
        };
    }

    let time_bonus = time_bonus(elapsed);
    let points = BASE_POINTS + time_bonus;

    Scored {
        score: score.saturating_add(points),
        correct,
        time_bonus,
        points,
    }
}
