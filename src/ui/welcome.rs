use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::Difficulty;

use super::text;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let power_ups = &app.catalog().power_ups;
    let banner_height = 10 + power_ups.len() as u16;

    let chunks = Layout::vertical([
        Constraint::Length(banner_height),
        Constraint::Length(Difficulty::ALL.len() as u16 + 2),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(area);

    render_banner(frame, chunks[0], app);
    render_menu(frame, chunks[1]);

    let prompt = Paragraph::new(super::input_line(text::MENU_PROMPT, app.input()));
    frame.render_widget(prompt, chunks[2]);

    let feedback = Paragraph::new(super::feedback_lines(app, chunks[3].height as usize));
    frame.render_widget(feedback, chunks[3]);
}

fn render_banner(frame: &mut Frame, area: Rect, app: &App) {
    let mut content = vec![
        Line::from(text::banner_rule()),
        Line::from(Span::styled(
            text::TITLE,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(text::banner_rule()),
        Line::from(""),
    ];
    content.extend(
        text::TAGLINE
            .iter()
            .map(|&line| Line::from(line.fg(Color::DarkGray))),
    );
    content.push(Line::from(""));
    content.push(Line::from("Power-ups available:".fg(Color::White)));
    content.extend(app.catalog().power_ups.iter().map(|power_up| {
        Line::from(Span::styled(
            format!("  {}", text::power_up_entry(power_up)),
            Style::default().fg(Color::Magenta),
        ))
    }));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_menu(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Select difficulty:",
        Style::default().fg(Color::White).bold(),
    ))];
    lines.extend(Difficulty::ALL.iter().map(|tier| {
        Line::from(Span::styled(
            text::menu_entry(*tier),
            Style::default().fg(Color::Gray),
        ))
    }));

    frame.render_widget(Paragraph::new(lines), area);
}
