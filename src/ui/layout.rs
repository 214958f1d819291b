//! Pane geometry
//!
//! The screen is carved once per frame from the terminal dimensions: a
//! one-row status bar at the bottom, a register column on the left, and the
//! right column split into the tabbed pane (top third) over the instruction
//! pane.  Resize handling is out of scope; the split tracks whatever size
//! ratatui reports at draw time.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Narrowest useful register column; a full register dump line is about this
/// wide, so thirds of a small terminal would clip values.
pub const MIN_REGISTER_WIDTH: u16 = 62;

/// The non-overlapping regions every frame is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneAreas {
    pub registers: Rect,
    pub tabs: Rect,
    pub instructions: Rect,
    pub status: Rect,
}

impl PaneAreas {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let register_width = (area.width / 3).max(MIN_REGISTER_WIDTH);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(register_width), Constraint::Min(0)])
            .split(rows[0]);

        let tabs_height = rows[0].height / 3 + 1;
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(tabs_height), Constraint::Min(0)])
            .split(columns[1]);

        PaneAreas {
            registers: columns[0],
            tabs: right[0],
            instructions: right[1],
            status: rows[1],
        }
    }
}
