//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use dialog::{render_error_toast, render_loading_overlay, render_success_dialog};
