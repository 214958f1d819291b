//! Error types for the trace viewer
//!
//! This module defines [`ViewerError`], which covers everything that can stop a
//! viewing session before or during the interactive loop.  Navigation mistakes
//! (boundary keys, bad `:` input, searches with no hits) are absorbed as no-ops
//! by the input loop and never become error values.

use std::fmt;
use std::io;

/// Errors that can abort a viewing session
#[derive(Debug)]
pub enum ViewerError {
    /// The emulator produced no parseable instruction records
    EmptyTrace,

    /// A record lookup outside the trace bounds
    IndexOutOfRange { index: usize, length: usize },

    /// The emulator subprocess could not be spawned or collected
    Emulator { command: String, source: io::Error },

    /// The terminal could not be put into (or restored from) raw mode
    Terminal { source: io::Error },
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::EmptyTrace => {
                write!(f, "No instruction records parsed from the emulator output")
            }
            ViewerError::IndexOutOfRange { index, length } => {
                write!(
                    f,
                    "Trace index {} out of range for {} record(s)",
                    index, length
                )
            }
            ViewerError::Emulator { command, source } => {
                write!(f, "Failed to run emulator '{}': {}", command, source)
            }
            ViewerError::Terminal { source } => {
                write!(f, "Terminal setup failed: {}", source)
            }
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewerError::Emulator { source, .. } | ViewerError::Terminal { source } => {
                Some(source)
            }
            _ => None,
        }
    }
}
