use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

use super::text;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_summary(frame, chunks[1], app);

    let feedback = Paragraph::new(super::feedback_lines(app, chunks[2].height as usize))
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(feedback, chunks[2]);

    let prompt = Paragraph::new(super::input_line(text::REPLAY_PROMPT, app.input()));
    frame.render_widget(prompt, chunks[3]);
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let (score, asked, earned) = app
        .round()
        .map(|round| (round.score(), round.questions_asked(), round.power_ups().to_vec()))
        .unwrap_or_default();

    let earned = if earned.is_empty() {
        "none".to_string()
    } else {
        earned.join(", ")
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            text::final_score(score),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            text::questions_answered(asked),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("Power-ups earned: {}", earned),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}
