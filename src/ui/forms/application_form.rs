//! Application form rendering with action sidebar

use super::field_renderer::{
    draw_checkbox_group, draw_select_field, draw_text_field, field_height,
};
use crate::app::App;
use crate::state::{parse_interview_time, ApplicationForm, ErrorMap, FieldId, FieldKind, FocusItem};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the action panel on the right
pub const ACTION_PANEL_WIDTH: u16 = 22;

/// Action buttons, top to bottom (index matches `selected_button`)
pub const ACTION_LABELS: [&str; 3] = ["Submit", "Copy Summary", "Quit"];

/// Split the form region into the field column and the action panel
pub fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),                     // Form area
            Constraint::Length(ACTION_PANEL_WIDTH), // Action panel
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Screen areas of the visible fields inside the form panel.
///
/// The column scrolls so the focused field is on screen, starting at its top
/// when it is taller than the panel. Fields scrolled past are left out and
/// the last field may be clipped at the bottom.
pub fn field_areas(area: Rect, form: &ApplicationForm, errors: &ErrorMap) -> Vec<(FieldId, Rect)> {
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    let mut top = 0u16;
    let mut placed = Vec::new();
    for field in form.values.visible_fields() {
        let height = field_height(field, errors.contains_key(&field), inner.width);
        placed.push((field, top, height));
        top += height;
    }

    let offset = form
        .active_field()
        .and_then(|active| placed.iter().find(|(f, _, _)| *f == active))
        .map(|(_, top, height)| (top + height).saturating_sub(inner.height).min(*top))
        .unwrap_or(0);
    let bottom = offset + inner.height;

    placed
        .into_iter()
        .filter(|(_, top, _)| *top >= offset && *top < bottom)
        .map(|(field, top, height)| {
            (
                field,
                Rect {
                    x: inner.x,
                    y: inner.y + (top - offset),
                    width: inner.width,
                    height: height.min(bottom - top),
                },
            )
        })
        .collect()
}

/// Button areas inside the action panel, in `ACTION_LABELS` order
pub fn button_areas(area: Rect) -> Vec<Rect> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let mut constraints: Vec<Constraint> = ACTION_LABELS
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);
    chunks.iter().take(ACTION_LABELS.len()).copied().collect()
}

/// Draw the application form with action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (form_area, action_area) = split(area);
    draw_form(frame, form_area, app);
    draw_action_panel(frame, action_area, app);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let errors = &app.state.errors;

    let form_focused = form.active_field().is_some();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let title = if errors.is_empty() {
        " Job Application ".to_string()
    } else {
        format!(" Job Application ({} to fix) ", errors.len())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    for (field, field_area) in field_areas(area, form, errors) {
        let is_active = form.is_active(FocusItem::Field(field));
        let error = errors.get(&field);
        match field.kind() {
            FieldKind::Text => {
                let value = form.values.text(field).unwrap_or_default();
                let hint = match field {
                    FieldId::PreferredInterviewTime => parse_interview_time(value)
                        .map(|at| at.format("%a %-d %b %Y, %H:%M").to_string()),
                    _ => None,
                };
                draw_text_field(frame, field_area, field, value, is_active, error, hint);
            }
            FieldKind::Select => {
                draw_select_field(frame, field_area, form.values.position, is_active, error);
            }
            FieldKind::Checkbox => {
                draw_checkbox_group(
                    frame,
                    field_area,
                    &form.values.additional_skills,
                    form.skill_cursor,
                    is_active,
                    error,
                );
            }
        }
    }
}

fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = form.is_active(FocusItem::Actions);
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let accents = [Some(Color::Green), Some(Color::Blue), Some(Color::Gray)];
    let has_summary = app.state.summary.is_some();
    for (idx, button_area) in button_areas(area).into_iter().enumerate() {
        let is_enabled = idx != 1 || has_summary;
        render_action_button(
            frame,
            button_area,
            ACTION_LABELS[idx],
            is_focused && form.selected_button == idx,
            is_enabled,
            accents[idx],
        );
    }

    // Shortcut reminder below the buttons
    let buttons_bottom = BUTTON_HEIGHT * ACTION_LABELS.len() as u16 + 1;
    if area.height > buttons_bottom + 2 {
        let hint_area = Rect {
            x: area.x + 1,
            y: area.y + buttons_bottom + 1,
            width: area.width.saturating_sub(2),
            height: 2,
        };
        let hint = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(crate::platform::SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
                Span::raw(": submit"),
            ]),
            Line::from(vec![
                Span::styled(crate::platform::COPY_SHORTCUT, Style::default().fg(Color::Cyan)),
                Span::raw(": copy"),
            ]),
        ])
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, hint_area);
    }
}
