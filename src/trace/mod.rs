//! Trace data model
//!
//! Everything the viewer knows about one emulator run lives here:
//!
//! - **[`record`]** — a single instruction snapshot (register pairs + disassembly)
//! - **[`store`]** — the parsed, indexed trace and the diverted startup output
//! - **[`frames`]** — call-stack reconstruction from call/return mnemonics
//! - **[`search`]** — substring search over disassembly lines
//!
//! The trace is parsed once, up front, and is immutable afterwards.  All
//! derived views (frames, search hits, register diffs) are pure functions of
//! the store and an instruction index.

pub mod frames;
pub mod record;
pub mod search;
pub mod store;

pub use frames::{frames_at, CallFrame};
pub use record::InstructionRecord;
pub use search::SearchResults;
pub use store::TraceStore;
