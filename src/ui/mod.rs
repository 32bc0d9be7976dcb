mod quiz;
mod result;
pub mod text;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

use text::Tone;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::SelectingDifficulty => welcome::render(frame, area, app),
        AppState::AskingQuestion => quiz::render(frame, area, app),
        AppState::RoundComplete => result::render(frame, area, app),
        AppState::Terminated => {}
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => Color::Cyan,
        Tone::Success => Color::Green,
        Tone::Failure => Color::Red,
        Tone::Reward => Color::Magenta,
    }
}

/// The last `max_lines` lines of feedback, oldest first.
fn feedback_lines(app: &App, max_lines: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = app
        .notices()
        .iter()
        .rev()
        .flat_map(|notice| text::notice_lines(notice).into_iter().rev())
        .take(max_lines)
        .map(|(tone, text)| Line::from(Span::styled(text, Style::default().fg(tone_color(tone)))))
        .collect();
    lines.reverse();
    lines
}

/// Prompt followed by the typed text and a cursor.
fn input_line<'a>(prompt: &'a str, input: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(prompt, Style::default().fg(Color::White)),
        Span::styled(input, Style::default().fg(Color::Yellow)),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ])
}
