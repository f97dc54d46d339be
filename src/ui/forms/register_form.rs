//! Registration form rendering
//!
//! Only the fields of the selected audience are drawn. When the terminal is
//! too short for all of them the list scrolls to keep the focused field on
//! screen.

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use super::form_column;
use crate::app::App;
use crate::auth::{SubmissionKind, PASSWORDS_DO_NOT_MATCH};
use crate::state::{Form, RegisterForm, PASSWORD_REQUIREMENTS};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use std::ops::Range;

const REVIEW_NOTICE: &str =
    "Practitioner accounts are reviewed and approved within 24-48 hours.";

/// Rows reserved under the fields for the hint line
const HINT_HEIGHT: u16 = 2;

/// Draw the registration tab
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let column = form_column(area);
    let form = &app.state.register;

    let block = Block::default()
        .title(" Create Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, column);

    let notice_height = if form.controller().shows_review_notice() {
        2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(notice_height), // Review notice
            Constraint::Min(0),                // Fields
            Constraint::Length(HINT_HEIGHT),   // Validation hint
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .margin(1)
        .split(column);

    if notice_height > 0 {
        draw_help_text(frame, chunks[0], REVIEW_NOTICE, Color::Yellow);
    }

    draw_fields(frame, chunks[1], form);

    if let Some(hint) = active_hint(form) {
        draw_help_text(frame, chunks[2], hint, Color::Red);
    }

    let busy = app
        .state
        .pending
        .as_ref()
        .filter(|p| p.kind == SubmissionKind::Registration)
        .map(|p| p.kind.label());
    render_submit_button(frame, chunks[3], "Register", busy);
}

fn draw_fields(frame: &mut Frame, area: Rect, form: &RegisterForm) {
    let order = form.focus_order();
    let capacity = (area.height / FIELD_HEIGHT) as usize;
    let active = order
        .iter()
        .position(|id| *id == form.active_field)
        .unwrap_or(0);

    let window = visible_window(order.len(), active, capacity);
    for (slot, id) in order[window].iter().enumerate() {
        let Some(field) = form.field(*id) else {
            continue;
        };
        let rect = Rect {
            x: area.x,
            y: area.y + slot as u16 * FIELD_HEIGHT,
            width: area.width,
            height: FIELD_HEIGHT,
        };
        draw_field(frame, rect, field, *id == form.active_field);
    }
}

/// Which field indices fit on screen with `active` among them
fn visible_window(len: usize, active: usize, capacity: usize) -> Range<usize> {
    if len <= capacity {
        return 0..len;
    }
    if capacity == 0 {
        return 0..0;
    }
    let start = (active + 1).saturating_sub(capacity).min(len - capacity);
    start..start + capacity
}

/// Advisory text for the password fields
fn active_hint(form: &RegisterForm) -> Option<&'static str> {
    if form.password.check.shows_requirements() {
        Some(PASSWORD_REQUIREMENTS)
    } else if form.confirm_touched && form.confirm_password.check.is_invalid() {
        Some(PASSWORDS_DO_NOT_MATCH)
    } else {
        None
    }
}
