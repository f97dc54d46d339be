//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `login_form`: Login tab
//! - `register_form`: Registration tab with audience-specific fields

mod field_renderer;
mod login_form;
mod register_form;

pub use login_form::draw as draw_login;
pub use register_form::draw as draw_register;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the centered form column
const FORM_WIDTH: u16 = 64;

/// Horizontally center the form column inside `area`
fn form_column(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(FORM_WIDTH.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area);
    chunks[1]
}
