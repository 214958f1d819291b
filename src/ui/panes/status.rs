//! Status bar rendering
//!
//! One row at the bottom: the left half shows the live `:`/`/` input echo or
//! the latest status message, the right half the numeric instruction index.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, index: usize) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Paragraph::new(Line::from(Span::styled(
        format!(" {}", message),
        Style::default()
            .bg(DEFAULT_THEME.status_bg)
            .fg(DEFAULT_THEME.fg),
    )))
    .style(Style::default().bg(DEFAULT_THEME.status_bg))
    .alignment(Alignment::Left);
    frame.render_widget(left, halves[0]);

    let right = Paragraph::new(Line::from(Span::styled(
        format!("{:>4} ", index),
        Style::default()
            .bg(DEFAULT_THEME.status_bg)
            .fg(DEFAULT_THEME.fg),
    )))
    .style(Style::default().bg(DEFAULT_THEME.status_bg))
    .alignment(Alignment::Right);
    frame.render_widget(right, halves[1]);
}
