//! Call-stack reconstruction from call/return mnemonics
//!
//! The stack at any index is a pure function of the trace prefix: replaying
//! from record 0, a `call` mnemonic opens a frame (named after the *next*
//! record, the call target's first instruction) and a `ret` mnemonic closes
//! the most recent one.  Nothing is cached; the walk is O(index) and index
//! changes are single-step in the common case.

use crate::trace::store::TraceStore;

/// Substring of a mnemonic line that opens a call frame
pub const CALL_MARKER: &str = "call";
/// Substring of a mnemonic line that closes a call frame
pub const RET_MARKER: &str = "ret";
/// Shown in place of frames dropped when the stack outgrows the pane
pub const ELLIPSIS: &str = "...";

/// One reconstructed call-stack entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    /// The mnemonic line that opened this frame
    pub call_site: String,
    /// Display text: the called location's first mnemonic, width-truncated
    pub text: String,
}

/// Reconstruct the call stack active at `index`, oldest frame first.
///
/// The root frame (record 0's own mnemonic) is synthetic and never popped: an
/// excess of returns over calls stops popping at the root.  When the stack is
/// taller than `max_rows`, the oldest frames are dropped and the new oldest
/// row is replaced with [`ELLIPSIS`].
pub fn frames_at(
    store: &TraceStore,
    index: usize,
    max_width: usize,
    max_rows: usize,
) -> Vec<CallFrame> {
    let root = store.mnemonic(0).unwrap_or_default().to_string();
    let mut frames = vec![CallFrame {
        call_site: root.clone(),
        text: root,
    }];

    for i in 0..index.min(store.len()) {
        let mnemonic = match store.mnemonic(i) {
            Some(m) => m,
            None => break,
        };
        if mnemonic.contains(CALL_MARKER) {
            let body = store.mnemonic(i + 1).unwrap_or("");
            frames.push(CallFrame {
                call_site: mnemonic.to_string(),
                text: truncate(body, max_width),
            });
        }
        if mnemonic.contains(RET_MARKER) && frames.len() > 1 {
            frames.pop();
        }
    }

    if frames.len() > max_rows && max_rows > 0 {
        frames.drain(..frames.len() - max_rows);
        frames[0].text = ELLIPSIS.to_string();
    }

    frames
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
