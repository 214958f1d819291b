//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into five layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus, line input mode
//! - **[`panes`]** — stateless render functions for each visible pane (registers,
//!   tabbed, instructions, status bar)
//! - **[`layout`]** — pane geometry computed from the terminal dimensions
//! - **[`term`]** — scoped raw-mode/alternate-screen ownership with panic-safe restore
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a parsed
//! [`TraceStore`] and call [`App::run`] to start the event loop.
//!
//! [`TraceStore`]: crate::trace::TraceStore
//! [`App::run`]: app::App::run

pub mod app;
pub mod layout;
pub mod panes;
pub mod term;
pub mod theme;

pub use app::App;
