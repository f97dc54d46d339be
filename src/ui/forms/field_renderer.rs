//! Field rendering utilities for forms

use crate::state::{FieldCheck, FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Height of one bordered field
pub const FIELD_HEIGHT: u16 = 3;

/// Border colour: focus wins, then the last check result
pub fn border_color(field: &FormField, is_active: bool) -> Color {
    match (is_active, field.check) {
        (_, FieldCheck::Invalid { .. }) => Color::Red,
        (true, _) => Color::Cyan,
        (false, FieldCheck::Valid) => Color::Green,
        (false, FieldCheck::Unchecked) => Color::DarkGray,
    }
}

/// Block title with a marker on required fields
fn title(field: &FormField) -> String {
    if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    // Choice and flag fields are not typed into
    let takes_text = matches!(field.value, FieldValue::Text(_));
    let cursor = if is_active && takes_text { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(title(field))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(field, is_active)));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a muted help or warning line
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let help = Paragraph::new(Span::styled(text, Style::default().fg(color)))
        .wrap(Wrap { trim: true });
    frame.render_widget(help, area);
}
