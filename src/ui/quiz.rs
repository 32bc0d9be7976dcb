use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Question;
use crate::round::Round;

use super::text;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(round) = app.round() else {
        return;
    };
    let Some(question) = round.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(question.options.len() as u16 + 2),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_status(frame, chunks[0], round);
    render_question_text(frame, chunks[1], &question.text);
    render_options(frame, chunks[2], question);

    let feedback = Paragraph::new(super::feedback_lines(app, chunks[3].height as usize)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(feedback, chunks[3]);

    let prompt = Paragraph::new(super::input_line(text::ANSWER_PROMPT, app.input()));
    frame.render_widget(prompt, chunks[4]);

    render_controls(frame, chunks[5]);
}

fn render_status(frame: &mut Frame, area: Rect, round: &Round) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let score = Paragraph::new(format!(
        "{}  ·  {} stardust",
        round.difficulty().label(),
        round.score()
    ))
    .fg(Color::Yellow);
    frame.render_widget(score, halves[0]);

    let progress = format!(
        "{}/{}",
        round.current_question_number(),
        round.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, halves[1]);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, question: &Question) {
    let lines: Vec<Line> = question
        .options
        .iter()
        .map(|option| {
            Line::from(Span::styled(
                format!("   {}", option),
                Style::default().fg(Color::Gray),
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(text::ANSWER_COMMANDS)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
