//! Login form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use super::form_column;
use crate::app::App;
use crate::auth::SubmissionKind;
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the login tab
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let column = form_column(area);
    let form = &app.state.login;

    let block = Block::default()
        .title(" Sign In ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, column);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(FIELD_HEIGHT),  // Remember me
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .margin(1)
        .split(column);

    let fields = [&form.email, &form.password, &form.remember];
    for (field, chunk) in fields.into_iter().zip(chunks.iter()) {
        draw_field(frame, *chunk, field, form.active_field == field.id);
    }

    let busy = app
        .state
        .pending
        .as_ref()
        .filter(|p| p.kind == SubmissionKind::Login)
        .map(|p| p.kind.label());
    render_submit_button(frame, chunks[3], "Sign In", busy);
}
