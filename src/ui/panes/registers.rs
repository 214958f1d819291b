//! Register pane rendering with change highlighting
//!
//! The diff is only meaningful for single-step moves: after a jump (`:`,
//! search, home/end) every line would light up, so highlighting is gated on
//! the previous index being adjacent to the current one.  The comparison is
//! always against record `index - 1`, the state one instruction earlier.
//! The program-counter pair (always last) changes every step and is never
//! highlighted.

use crate::trace::{InstructionRecord, TraceStore};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// The record to diff the current one against, or `None` when no
/// highlighting should happen: at index 0, and after any move that was not a
/// single step.
pub fn diff_base<'a>(
    store: &'a TraceStore,
    index: usize,
    previous_index: usize,
) -> Option<&'a InstructionRecord> {
    if index > 0 && previous_index.abs_diff(index) == 1 {
        store.get(index - 1).ok()
    } else {
        None
    }
}

/// Register positions to highlight: exactly those whose pair differs from
/// `previous` at the same position, excluding the program counter (the last
/// pair), which moves every step.
pub fn changed_positions(record: &InstructionRecord, previous: &InstructionRecord) -> Vec<usize> {
    let pc_position = record.registers().len().saturating_sub(1);
    record
        .registers()
        .iter()
        .enumerate()
        .filter(|(position, pair)| {
            *position != pc_position
                && previous
                    .registers()
                    .get(*position)
                    .is_some_and(|old| old != *pair)
        })
        .map(|(position, _)| position)
        .collect()
}

/// Render the register pane for the record at `index`
pub fn render_register_pane(
    frame: &mut Frame,
    area: Rect,
    store: &TraceStore,
    index: usize,
    previous_index: usize,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Registers ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let record = match store.get(index) {
        Ok(record) => record,
        Err(_) => {
            frame.render_widget(block, area);
            return;
        }
    };

    let previous = diff_base(store, index, previous_index);
    let marked = previous
        .map(|p| changed_positions(record, p))
        .unwrap_or_default();

    let lines: Vec<Line> = record
        .registers()
        .iter()
        .enumerate()
        .map(|(position, _)| {
            let text = record.register_line(position).unwrap_or_default();
            if marked.contains(&position) {
                let mut spans = vec![Span::styled(
                    text,
                    Style::default().fg(DEFAULT_THEME.changed),
                )];
                if let Some((_, old_value)) =
                    previous.and_then(|p| p.registers().get(position))
                {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(
                        old_value.clone(),
                        Style::default()
                            .fg(DEFAULT_THEME.stale_fg)
                            .bg(DEFAULT_THEME.stale_bg),
                    ));
                }
                Line::from(spans)
            } else {
                Line::from(Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)))
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
