//! UI module for rendering the TUI

mod components;
mod fade;
pub mod forms;
pub mod layout;
mod summary;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let screen = layout::compute(area, &app.state);

    if let (Some(summary_area), Some(summary)) = (screen.summary, &app.state.summary) {
        summary::draw(frame, summary_area, summary);
    }

    forms::draw_application_form(frame, screen.form, app);
    layout::draw_status_bar(frame, screen.status, app);

    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, app.state.error_queue.len());
    }

    if let Some(fade) = app.fade_state.as_ref().filter(|f| !f.is_complete()) {
        fade::apply_fade(frame.buffer_mut(), area, fade.opacity);
    }
}
