//! Post-submit summary panel

use crate::state::Summary;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows the panel wants: one per summary row plus borders
pub fn desired_height(summary: &Summary) -> u16 {
    summary.rows().len() as u16 + 2
}

/// Draw the summary of the last successful submit
pub fn draw(frame: &mut Frame, area: Rect, summary: &Summary) {
    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = summary
        .rows()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), label_style),
                Span::raw(value),
            ])
        })
        .collect();

    let submitted = format!(" submitted {} ", summary.submitted_at.format("%H:%M:%S"));
    let block = Block::default()
        .title(Span::styled(
            " Form Summary ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .title(Line::from(Span::styled(submitted, Style::default().fg(Color::DarkGray))).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
