//! Dialog components for TUI

mod base;
mod error_toast;
mod loading_overlay;
mod success_dialog;

pub use error_toast::render_error_toast;
pub use loading_overlay::render_loading_overlay;
pub use success_dialog::render_success_dialog;
