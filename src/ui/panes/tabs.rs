//! Tabbed pane: stack frames, startup output, and the emulator error stream
//!
//! Only the "Stack Frames" tab is dynamic — its content is reconstructed from
//! the trace prefix on every render.  The "Debug" and "Errors" tabs hold
//! static text captured before the session started and exist only when that
//! text is non-empty.

use crate::trace::{frames_at, TraceStore};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent {
    /// Recomputed call stack for the current index
    StackFrames,
    /// Text fixed at construction time
    Static(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub title: &'static str,
    pub content: TabContent,
}

/// Tab set and cursor for the auxiliary pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabbedPane {
    tabs: Vec<Tab>,
    current: usize,
}

impl TabbedPane {
    /// The stack-frames tab always exists; "Debug" carries the diverted
    /// startup output and "Errors" the emulator's stderr, each only when
    /// non-empty.
    pub fn new(ignored: Option<String>, errors: Option<String>) -> Self {
        let mut tabs = vec![Tab {
            title: "Stack Frames",
            content: TabContent::StackFrames,
        }];
        if let Some(text) = ignored.filter(|t| !t.is_empty()) {
            tabs.push(Tab {
                title: "Debug",
                content: TabContent::Static(text),
            });
        }
        if let Some(text) = errors.filter(|t| !t.is_empty()) {
            tabs.push(Tab {
                title: "Errors",
                content: TabContent::Static(text),
            });
        }
        TabbedPane { tabs, current: 0 }
    }

    /// Cycle the tab cursor with wraparound in either direction
    pub fn rotate(&mut self, direction: isize) {
        let count = self.tabs.len() as isize;
        self.current = (self.current as isize + direction).rem_euclid(count) as usize;
    }

    pub fn current_tab(&self) -> usize {
        self.current
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }
}

/// Render the tabbed pane with its title row of tab names
pub fn render_tabbed_pane(
    frame: &mut Frame,
    area: Rect,
    pane: &TabbedPane,
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

    let mut title_spans = vec![Span::raw(" ")];
    for (i, tab) in pane.tabs().iter().enumerate() {
        let style = match (is_focused, i == pane.current_tab()) {
            (true, true) => Style::default()
                .fg(DEFAULT_THEME.selected_fg)
                .bg(DEFAULT_THEME.selected_bg),
            (true, false) => Style::default().fg(DEFAULT_THEME.emphasis),
            (false, true) => Style::default()
                .fg(DEFAULT_THEME.stale_fg)
                .bg(DEFAULT_THEME.stale_bg),
            (false, false) => Style::default().fg(DEFAULT_THEME.fg),
        };
        title_spans.push(Span::styled(tab.title, style));
        title_spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .title(Line::from(title_spans))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;

    let text: Vec<Line> = match &pane.tabs()[pane.current_tab()].content {
        TabContent::StackFrames => {
            frames_at(store, index, inner_width.saturating_sub(1), inner_height)
                .into_iter()
                .map(|call_frame| {
                    Line::from(Span::styled(
                        call_frame.text,
                        Style::default().fg(DEFAULT_THEME.fg),
                    ))
                })
                .collect()
        }
        TabContent::Static(content) => content
            .lines()
            .take(inner_height)
            .map(|line| Line::from(Span::styled(line, Style::default().fg(DEFAULT_THEME.fg))))
            .collect(),
    };

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_both_directions() {
        let mut pane = TabbedPane::new(Some("startup".into()), None);
        assert_eq!(pane.tab_count(), 2);
        assert_eq!(pane.current_tab(), 0);
        pane.rotate(1);
        assert_eq!(pane.current_tab(), 1);
        pane.rotate(1);
        assert_eq!(pane.current_tab(), 0);
        pane.rotate(-1);
        assert_eq!(pane.current_tab(), 1);
    }

    #[test]
    fn empty_streams_produce_no_tabs() {
        let pane = TabbedPane::new(Some(String::new()), None);
        assert_eq!(pane.tab_count(), 1);
        assert_eq!(pane.tabs()[0].title, "Stack Frames");
    }

    #[test]
    fn errors_tab_exists_when_stderr_is_non_empty() {
        let pane = TabbedPane::new(None, Some("unmapped read\n".into()));
        assert_eq!(pane.tab_count(), 2);
        assert_eq!(pane.tabs()[1].title, "Errors");
    }
}
