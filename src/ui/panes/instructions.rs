//! Instruction pane rendering
//!
//! Shows a vertically centered window of disassembly lines around the current
//! index.  Rows outside the trace render a `-` placeholder so the current row
//! stays at a fixed height while stepping near either end.

use crate::trace::TraceStore;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Marker for rows before the first or after the last record
const PLACEHOLDER: &str = "-";
/// Glyph marking the current instruction row
const POINTER: &str = ">";

/// Render the instruction pane centered on `index`
pub fn render_instruction_pane(
    frame: &mut Frame,
    area: Rect,
    store: &TraceStore,
    index: usize,
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
        .title(" Instructions ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_height = area.height.saturating_sub(2) as usize;
    // 2 columns of border plus a 2-column pointer gutter
    let text_width = area.width.saturating_sub(4) as usize;
    if inner_height == 0 {
        frame.render_widget(block, area);
        return;
    }

    let before = inner_height / 2;
    let after = inner_height - before - 1;

    // Rows outside the trace get the placeholder in the muted style.
    let context_row = |record_index: Option<usize>| -> Line {
        match record_index.and_then(|i| store.mnemonic(i)) {
            Some(mnemonic) => Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    mnemonic.chars().take(text_width).collect::<String>(),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ]),
            None => Line::from(vec![
                Span::raw("  "),
                Span::styled(PLACEHOLDER, Style::default().fg(DEFAULT_THEME.comment)),
            ]),
        }
    };

    let mut lines: Vec<Line> = Vec::with_capacity(inner_height);
    for offset in (1..=before).rev() {
        lines.push(context_row(index.checked_sub(offset)));
    }
    lines.push(Line::from(vec![
        Span::styled(POINTER, Style::default().fg(DEFAULT_THEME.fg)),
        Span::raw(" "),
        Span::styled(
            store
                .mnemonic(index)
                .unwrap_or(PLACEHOLDER)
                .chars()
                .take(text_width)
                .collect::<String>(),
            Style::default()
                .fg(DEFAULT_THEME.emphasis)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    for offset in 1..=after {
        let row = index + offset;
        let row = if row < store.len() { Some(row) } else { None };
        lines.push(context_row(row));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
