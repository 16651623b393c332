//! Screen layout (summary, form, status bar)

use super::summary;
use crate::app::App;
use crate::state::{AppState, FieldKind, FocusItem};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Regions of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Summary panel, present once a submit has succeeded
    pub summary: Option<Rect>,
    /// Form column plus action panel
    pub form: Rect,
    pub status: Rect,
}

/// Split the screen. The summary takes at most half the height above the form.
pub fn compute(area: Rect, state: &AppState) -> ScreenLayout {
    let summary_height = state
        .summary
        .as_ref()
        .map(|s| summary::desired_height(s).min(area.height / 2))
        .unwrap_or(0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(summary_height), // Summary
            Constraint::Min(0),                 // Form
            Constraint::Length(1),              // Status bar
        ])
        .split(area);

    ScreenLayout {
        summary: (summary_height > 0).then_some(chunks[0]),
        form: chunks[1],
        status: chunks[2],
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    spans.push(Span::styled(
        get_focus_hints(&app.state),
        Style::default().fg(Color::Gray),
    ));

    if !app.state.errors.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} field(s) need attention", app.state.errors.len()),
            Style::default().fg(Color::Red),
        ));
    } else if app.state.summary.is_some() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Submitted", Style::default().fg(Color::Green)));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever has focus
fn get_focus_hints(state: &AppState) -> String {
    if state.has_errors() {
        return "Enter/Esc:dismiss".to_string();
    }
    match state.form.active() {
        FocusItem::Actions => "↑/↓:select  Enter:run  Tab:fields".to_string(),
        FocusItem::Field(field) => match field.kind() {
            FieldKind::Text => format!(
                "Tab:next  S-Tab:prev  type to edit  {}:submit",
                crate::platform::SUBMIT_SHORTCUT
            ),
            FieldKind::Select => "←/→/Space:choose  Tab:next".to_string(),
            FieldKind::Checkbox => "←/→:move  Space:toggle  Tab:next".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ApplicationValues, FieldId, Summary};

    #[test]
    fn test_no_summary_gives_form_full_height() {
        let state = AppState::default();
        let layout = compute(Rect::new(0, 0, 100, 40), &state);
        assert!(layout.summary.is_none());
        assert_eq!(layout.form, Rect::new(0, 0, 100, 39));
        assert_eq!(layout.status, Rect::new(0, 39, 100, 1));
    }

    #[test]
    fn test_summary_sits_above_form() {
        let state = AppState {
            summary: Some(Summary::new(ApplicationValues::default())),
            ..Default::default()
        };
        let layout = compute(Rect::new(0, 0, 100, 40), &state);
        // six rows + borders
        assert_eq!(layout.summary, Some(Rect::new(0, 0, 100, 8)));
        assert_eq!(layout.form.y, 8);
    }

    #[test]
    fn test_summary_capped_at_half_height() {
        let state = AppState {
            summary: Some(Summary::new(ApplicationValues::default())),
            ..Default::default()
        };
        let layout = compute(Rect::new(0, 0, 100, 10), &state);
        assert_eq!(layout.summary.map(|r| r.height), Some(5));
    }

    #[test]
    fn test_hints_follow_focus() {
        let mut state = AppState::default();
        assert!(get_focus_hints(&state).contains("type to edit"));
        state.form.focus(FocusItem::Field(FieldId::AdditionalSkills));
        assert!(get_focus_hints(&state).contains("Space:toggle"));
        state.form.focus(FocusItem::Actions);
        assert!(get_focus_hints(&state).contains("Enter:run"));
        state.push_error("boom".to_string());
        assert_eq!(get_focus_hints(&state), "Enter/Esc:dismiss");
    }
}
