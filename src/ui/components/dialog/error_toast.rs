//! Error toast component

use super::base::{key_hint, render_dialog, Anchor, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render a non-blocking error toast near the bottom of the screen.
/// It disappears on its own; Esc dismisses it early.
pub fn render_error_toast(frame: &mut Frame, message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            accent: Color::Red,
            message,
            hint: Some(key_hint(&["Esc"], "to dismiss")),
            max_width: 50,
            anchor: Anchor::Bottom,
        },
    );
}
