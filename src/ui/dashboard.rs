//! Landing view after a successful login

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    match &app.state.session {
        Some(session) => {
            lines.push(Line::from(Span::styled(
                format!("Welcome back, {}", session.email),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Session     ", label),
                Span::raw(session.id.to_string()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Signed in   ", label),
                Span::raw(session.started_at.format("%Y-%m-%d %H:%M UTC").to_string()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Remembered  ", label),
                Span::raw(if session.remember { "yes" } else { "no" }),
            ]));
        }
        None => lines.push(Line::from(Span::styled("Not signed in", label))),
    }

    if let Some(destination) = &app.state.destination {
        lines.push(Line::from(vec![
            Span::styled("Destination ", label),
            Span::styled(destination.as_str(), Style::default().fg(Color::Cyan)),
        ]));
    }

    let block = Block::default()
        .title(" Dashboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
