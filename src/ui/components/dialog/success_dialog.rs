//! Success dialog component

use super::base::{key_hint, render_dialog, Anchor, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render the success message; dismissing it runs the follow-up action
pub fn render_success_dialog(frame: &mut Frame, message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Success",
            accent: Color::Green,
            message,
            hint: Some(key_hint(&["Enter", "Esc"], "to continue")),
            max_width: 64,
            anchor: Anchor::Center,
        },
    );
}
