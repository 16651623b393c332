//! Field rendering utilities for forms
//!
//! Stateless renderers for the three input kinds. Each takes the area the
//! field owns, which includes one extra row for the error message when the
//! field has one.

use crate::state::{position_option_label, FieldError, FieldId, Position, Skill, POSITION_OPTIONS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a bordered single-line input
pub const INPUT_HEIGHT: u16 = 3;

/// Checkbox columns in the skills group
pub const SKILL_COLUMNS: usize = 2;

const CURSOR: &str = "▌";
const OPTION_GAP: u16 = 2;

/// Rows taken by the skills group, borders included
pub fn skill_group_height() -> u16 {
    let rows = Skill::ALL.len().div_ceil(SKILL_COLUMNS) as u16;
    rows + 2
}

/// Rows taken by the position select when drawn `width` columns wide
pub fn select_height(width: u16) -> u16 {
    let inner_width = width.saturating_sub(2);
    let rows = option_slots(inner_width)
        .last()
        .map_or(1, |(_, _, row, _)| row + 1);
    rows + 2
}

/// Rows a field needs at the given width, including its error line
pub fn field_height(field: FieldId, has_error: bool, width: u16) -> u16 {
    let base = match field {
        FieldId::AdditionalSkills => skill_group_height(),
        FieldId::Position => select_height(width),
        _ => INPUT_HEIGHT,
    };
    base + u16::from(has_error)
}

/// Lay the position options out left to right, wrapping to a new row when
/// the next option would not fit. Yields (option, x offset, row, width).
fn option_slots(inner_width: u16) -> Vec<(Option<Position>, u16, u16, u16)> {
    let mut slots = Vec::with_capacity(POSITION_OPTIONS.len());
    let (mut x, mut row) = (0u16, 0u16);
    for option in POSITION_OPTIONS {
        let width = 4 + position_option_label(option).chars().count() as u16;
        if x > 0 && x + width > inner_width {
            x = 0;
            row += 1;
        }
        slots.push((option, x, row, width.min(inner_width)));
        x += width + OPTION_GAP;
    }
    slots
}

/// Option cells inside the select's inner area; rows past the bottom are dropped
fn option_cells(inner: Rect) -> Vec<(Option<Position>, Rect)> {
    option_slots(inner.width)
        .into_iter()
        .filter(|(_, _, row, _)| *row < inner.height)
        .map(|(option, x, row, width)| {
            (
                option,
                Rect {
                    x: inner.x + x,
                    y: inner.y + row,
                    width,
                    height: 1,
                },
            )
        })
        .collect()
}

/// Tail of `value` that fits in `width` columns with one column left for the cursor
fn visible_tail(value: &str, width: u16) -> &str {
    let room = usize::from(width.saturating_sub(1));
    let len = value.chars().count();
    if len <= room {
        return value;
    }
    match value.char_indices().nth(len - room) {
        Some((start, _)) => &value[start..],
        None => "",
    }
}

fn border_style(is_active: bool, has_error: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Split a field area into the widget rows and the optional error row
fn split_error_row(area: Rect, widget_height: u16, error: Option<&FieldError>) -> (Rect, Option<Rect>) {
    let widget = Rect {
        height: widget_height.min(area.height),
        ..area
    };
    let error_row = error.and_then(|_| {
        (area.height > widget_height).then(|| Rect {
            y: area.y + widget_height,
            height: 1,
            ..area
        })
    });
    (widget, error_row)
}

fn draw_error(frame: &mut Frame, area: Option<Rect>, error: Option<&FieldError>) {
    if let (Some(area), Some(error)) = (area, error) {
        let line = Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Draw a single-line text input
///
/// `hint` is shown right-aligned in the border, e.g. a parsed preview.
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldId,
    value: &str,
    is_active: bool,
    error: Option<&FieldError>,
    hint: Option<String>,
) {
    let (input_area, error_area) = split_error_row(area, INPUT_HEIGHT, error);

    let content = if value.is_empty() && !is_active {
        let placeholder = field.placeholder().unwrap_or("(empty)");
        Line::from(Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        let text_style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        let (shown, cursor) = if is_active {
            // Scroll so the end of the value and the cursor stay in view
            let inner_width = input_area.width.saturating_sub(2);
            (visible_tail(value, inner_width), CURSOR)
        } else {
            (value, "")
        };
        Line::from(vec![
            Span::styled(shown, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));
    if let Some(hint) = hint {
        block = block.title(
            Line::from(Span::styled(
                format!(" {hint} "),
                Style::default().fg(Color::Green),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(Paragraph::new(content).block(block), input_area);
    draw_error(frame, error_area, error);
}

/// Draw the position select as radio options, wrapping onto more rows when narrow
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    selected: Option<Position>,
    is_active: bool,
    error: Option<&FieldError>,
) {
    let (input_area, error_area) = split_error_row(area, select_height(area.width), error);

    let mut block = Block::default()
        .title(format!(" {} ", FieldId::Position.label()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));
    if is_active {
        block = block.title(Line::from(" ←/→ to choose ").right_aligned());
    }
    let inner = block.inner(input_area);
    frame.render_widget(block, input_area);

    for (option, cell) in option_cells(inner) {
        let is_selected = option == selected;
        let marker = if is_selected { "(•) " } else { "( ) " };
        let style = match (is_selected, is_active) {
            (true, true) => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().add_modifier(Modifier::BOLD),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("{marker}{}", position_option_label(option)),
                style,
            )),
            cell,
        );
    }

    draw_error(frame, error_area, error);
}

/// Which position option sits under a mouse position in a select drawn at `area`
pub fn position_option_at(area: Rect, column: u16, row: u16) -> Option<Option<Position>> {
    let input_area = Rect {
        height: select_height(area.width).min(area.height),
        ..area
    };
    let inner = Block::default().borders(Borders::ALL).inner(input_area);
    option_cells(inner)
        .into_iter()
        .find(|(_, cell)| cell.contains(ratatui::layout::Position::new(column, row)))
        .map(|(option, _)| option)
}

/// Draw the skills checkbox group
pub fn draw_checkbox_group(
    frame: &mut Frame,
    area: Rect,
    selected: &[Skill],
    cursor: usize,
    is_active: bool,
    error: Option<&FieldError>,
) {
    let (group_area, error_area) = split_error_row(area, skill_group_height(), error);

    let mut block = Block::default()
        .title(format!(" {} ", FieldId::AdditionalSkills.label()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));
    if is_active {
        block = block.title(Line::from(" Space to toggle ").right_aligned());
    }
    let inner = block.inner(group_area);
    frame.render_widget(block, group_area);

    for (idx, skill) in Skill::ALL.iter().enumerate() {
        let Some(cell) = skill_cell(inner, idx) else {
            continue;
        };
        let checked = selected.contains(skill);
        let mark = if checked { "[x] " } else { "[ ] " };
        let mut style = if checked {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        if is_active && idx == cursor {
            style = style.fg(Color::Cyan).add_modifier(Modifier::REVERSED);
        }
        frame.render_widget(
            Paragraph::new(Span::styled(format!("{mark}{}", skill.label()), style)),
            cell,
        );
    }

    draw_error(frame, error_area, error);
}

/// Cell of the skill at `index` inside the group's inner area
fn skill_cell(inner: Rect, index: usize) -> Option<Rect> {
    let column_width = inner.width / SKILL_COLUMNS as u16;
    let row = (index / SKILL_COLUMNS) as u16;
    let column = (index % SKILL_COLUMNS) as u16;
    if row >= inner.height || column_width == 0 {
        return None;
    }
    Some(Rect {
        x: inner.x + column * column_width,
        y: inner.y + row,
        width: column_width,
        height: 1,
    })
}

/// Skill under a mouse position, given the area the group was drawn into
pub fn skill_at(area: Rect, column: u16, row: u16) -> Option<Skill> {
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: skill_group_height().saturating_sub(2).min(area.height.saturating_sub(2)),
    };
    Skill::ALL.iter().enumerate().find_map(|(idx, skill)| {
        skill_cell(inner, idx)
            .filter(|cell| {
                column >= cell.x
                    && column < cell.x + cell.width
                    && row >= cell.y
                    && row < cell.y + cell.height
            })
            .map(|_| *skill)
    })
}
