//! Main TUI application state and logic

use crate::trace::{SearchResults, TraceStore};
use crate::ui::layout::PaneAreas;
use crate::ui::panes::{self, TabbedPane};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Registers,
    Tabs,
    Instructions,
}

impl FocusedPane {
    /// Move focus to the next pane (registers -> tabs -> instructions)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Registers => FocusedPane::Tabs,
            FocusedPane::Tabs => FocusedPane::Instructions,
            FocusedPane::Instructions => FocusedPane::Registers,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Registers => FocusedPane::Instructions,
            FocusedPane::Tabs => FocusedPane::Registers,
            FocusedPane::Instructions => FocusedPane::Tabs,
        }
    }
}

/// Normal navigation vs capturing a `:` or `/` line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Line { prefix: char, buffer: String },
}

/// The main application state
pub struct App {
    /// The parsed trace being viewed
    pub store: TraceStore,

    /// Tab set for the auxiliary pane
    pub tabs: TabbedPane,

    /// The one cursor into the trace, bounded by [0, len - 1]
    pub current_index: usize,

    /// Index before the last move, for register-diff adjacency
    pub previous_index: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Results of the most recent `/` search
    pub last_search: Option<SearchResults>,

    /// Normal keys or line input capture
    pub input_mode: InputMode,

    /// Status message to display
    pub status_message: String,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create the app over a parsed trace and the emulator's stderr stream
    pub fn new(store: TraceStore, stderr: String) -> Self {
        let ignored = store.ignored_output().map(str::to_string);
        let tabs = TabbedPane::new(ignored, Some(stderr));
        App {
            store,
            tabs,
            current_index: 0,
            previous_index: 0,
            focused_pane: FocusedPane::Instructions,
            last_search: None,
            input_mode: InputMode::Normal,
            status_message: String::from("Ready"),
            should_quit: false,
        }
    }

    /// Run the blocking draw/read loop until quit
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }

        Ok(())
    }

    /// Render every pane in fixed order: registers, tabs, instructions, status
    fn render(&mut self, frame: &mut Frame) {
        let areas = PaneAreas::compute(frame.area());

        panes::render_register_pane(
            frame,
            areas.registers,
            &self.store,
            self.current_index,
            self.previous_index,
            self.focused_pane == FocusedPane::Registers,
        );

        panes::render_tabbed_pane(
            frame,
            areas.tabs,
            &self.tabs,
            &self.store,
            self.current_index,
            self.focused_pane == FocusedPane::Tabs,
        );

        panes::render_instruction_pane(
            frame,
            areas.instructions,
            &self.store,
            self.current_index,
            self.focused_pane == FocusedPane::Instructions,
        );

        let message = match &self.input_mode {
            InputMode::Line { prefix, buffer } => format!("{}{}", prefix, buffer),
            InputMode::Normal => self.status_message.clone(),
        };
        panes::render_status_bar(frame, areas.status, &message, self.current_index);
    }

    /// Handle one key press in either mode
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Line { .. } => self.handle_line_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.focused_pane == FocusedPane::Instructions && self.current_index > 0 {
                    self.set_index(self.current_index - 1);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.focused_pane == FocusedPane::Instructions
                    && self.current_index < self.store.last_index()
                {
                    self.set_index(self.current_index + 1);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if self.focused_pane == FocusedPane::Registers && self.current_index > 0 {
                    self.set_index(self.current_index - 1);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.focused_pane == FocusedPane::Registers
                    && self.current_index < self.store.last_index()
                {
                    self.set_index(self.current_index + 1);
                }
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.set_index(0);
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.set_index(self.store.last_index());
            }
            KeyCode::Char('r') => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Char('R') => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Char('c') => {
                self.tabs.rotate(1);
            }
            KeyCode::Char('C') => {
                self.tabs.rotate(-1);
            }
            KeyCode::Char(':') => {
                self.input_mode = InputMode::Line {
                    prefix: ':',
                    buffer: String::new(),
                };
            }
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Line {
                    prefix: '/',
                    buffer: String::new(),
                };
            }
            KeyCode::Char('n') => {
                if let Some(next) = self
                    .last_search
                    .as_ref()
                    .and_then(|s| s.next_after(self.current_index))
                {
                    self.set_index(next);
                }
            }
            KeyCode::Char('N') => {
                if let Some(prev) = self
                    .last_search
                    .as_ref()
                    .and_then(|s| s.prev_before(self.current_index))
                {
                    self.set_index(prev);
                }
            }
            _ => {}
        }
    }

    fn handle_line_key(&mut self, key: KeyEvent) {
        let InputMode::Line { prefix, buffer } = &mut self.input_mode else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let prefix = *prefix;
                let text = buffer.clone();
                self.input_mode = InputMode::Normal;
                match prefix {
                    ':' => self.jump_to(&text),
                    '/' => self.search_for(&text),
                    _ => {}
                }
            }
            KeyCode::Char(c) => {
                buffer.push(c);
            }
            _ => {}
        }
    }

    /// Confirmed `:` input: jump to the given index, clamped to the trace
    /// bounds.  Non-integer text is discarded silently.
    fn jump_to(&mut self, text: &str) {
        if let Ok(target) = text.trim().parse::<usize>() {
            let target = target.min(self.store.last_index());
            self.set_index(target);
            self.status_message = format!("Jumped to {}", target);
        }
    }

    /// Confirmed `/` input: run the search, report the hit count, and jump
    /// to the first hit after the current index if there is one
    fn search_for(&mut self, query: &str) {
        if query.is_empty() {
            return;
        }
        let results = SearchResults::run(&self.store, query);
        self.status_message = format!("/{} ({})", query, results.len());
        if let Some(first) = results.next_after(self.current_index) {
            self.set_index(first);
        }
        self.last_search = Some(results);
    }

    /// Move the cursor, remembering where it came from for the diff gate
    fn set_index(&mut self, index: usize) {
        self.previous_index = self.current_index;
        self.current_index = index;
    }
}
