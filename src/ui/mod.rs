//! UI module for rendering the TUI

mod components;
mod dashboard;
mod forms;
mod layout;

use crate::app::App;
use crate::state::{AuthTab, View};
use components::{render_error_toast, render_loading_overlay, render_success_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header_area, main_area) = layout::create_layout(area);

    match &app.state.current_view {
        View::Auth => {
            layout::draw_tabs(frame, header_area, app.state.active_tab);
            match app.state.active_tab {
                AuthTab::Login => forms::draw_login(frame, main_area, app),
                AuthTab::Register => forms::draw_register(frame, main_area, app),
            }
        }
        View::Dashboard => {
            layout::draw_header(frame, header_area, "Dashboard");
            dashboard::draw(frame, main_area, app);
        }
    }

    layout::draw_status_bar(frame, app);

    // Overlays, most urgent last
    if let Some(pending) = &app.state.pending {
        render_loading_overlay(frame, pending);
    }
    if let Some(notification) = &app.state.notification {
        render_error_toast(frame, &notification.message);
    }
    if let Some(success) = &app.state.success {
        render_success_dialog(frame, &success.message);
    }
}
