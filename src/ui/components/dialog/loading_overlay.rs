//! Loading overlay shown while a submission is pending

use super::base::{render_dialog, Anchor, DialogConfig};
use crate::state::PendingSubmission;
use ratatui::{style::Color, Frame};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
const FRAME_MS: u128 = 120;

pub fn render_loading_overlay(frame: &mut Frame, pending: &PendingSubmission) {
    let step = pending.started_at.elapsed().as_millis() / FRAME_MS;
    let spinner = SPINNER[(step % SPINNER.len() as u128) as usize];
    let title = format!("{spinner} {}", pending.kind.label());

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            accent: Color::Yellow,
            message: "Please wait.",
            hint: None,
            max_width: 40,
            anchor: Anchor::Center,
        },
    );
}
