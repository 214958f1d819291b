//! # Introduction
//!
//! tracetty runs the binee emulator over a target binary at full verbosity,
//! splits its buffered output into per-instruction records, and navigates
//! them in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Viewing pipeline
//!
//! ```text
//! Emulator → raw streams → TraceStore → TUI
//! ```
//!
//! 1. [`emulator`] — invokes the emulator subprocess once, synchronously, and
//!    buffers both of its output streams.
//! 2. [`trace`] — parses the delimiter-split stdout into an indexed
//!    [`trace::TraceStore`], with call-stack reconstruction and search as
//!    pure functions over it.
//! 3. [`ui`] — ratatui-based TUI: register diffing, the centered instruction
//!    window, the tabbed auxiliary pane, and the key-driven event loop.
//!
//! ## Navigation
//!
//! Stepping: `j`/`k` (instruction pane focused), `h`/`l` (register pane
//! focused), `g`/`G` for the ends.  Focus: `r`/`R`.  Tabs: `c`/`C`.
//! Jump: `:` with an index.  Search: `/`, then `n`/`N`.  Quit: `q`.

pub mod emulator;
pub mod error;
pub mod trace;
pub mod ui;
