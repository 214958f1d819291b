//! TUI pane rendering modules
//!
//! One module per visible pane:
//!
//! - [`registers`]: register dump with change highlighting against the previous step
//! - [`instructions`]: centered scrolling window of disassembly lines
//! - [`tabs`]: tabbed pane hosting stack frames, startup output, and errors
//! - [`status`]: bottom status bar with the message area and index readout
//!
//! Render functions are stateless: each takes the trace store, the relevant
//! indices, and a focus flag, and draws into the `Rect` it is given.  The
//! only pane with state of its own is the tabbed pane's cursor, kept in
//! [`tabs::TabbedPane`].

pub mod instructions;
pub mod registers;
pub mod status;
pub mod tabs;

pub use instructions::render_instruction_pane;
pub use registers::render_register_pane;
pub use status::render_status_bar;
pub use tabs::{render_tabbed_pane, TabbedPane};
