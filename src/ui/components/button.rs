//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render the form's submit button.
///
/// While a submission is pending the button shows the busy label and is
/// drawn disabled.
pub fn render_submit_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    busy_label: Option<&str>,
) {
    let (content, border_style, text_style) = match busy_label {
        Some(busy) => (
            busy,
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        ),
        None => (
            label,
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
