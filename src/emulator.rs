//! The external emulator collaborator
//!
//! The viewer never interprets instructions itself: it runs the binee
//! emulator once, synchronously, to completion, and buffers both of its
//! output streams before any parsing happens.  There is no streaming and no
//! second invocation.

use std::process::Command;

use crate::error::ViewerError;

/// Path the emulator binary is expected at
pub const EMULATOR_PATH: &str = "./binee";

/// How to invoke the emulator for one run
#[derive(Debug, Clone)]
pub struct EmulatorInvocation {
    /// Target binary handed to the emulator
    pub target: String,
    /// Show DLL names on function calls (`-d`)
    pub show_dll_names: bool,
    /// Load libraries into the emulated process (`-l`)
    pub load_libraries: bool,
}

/// Both captured output streams of a completed run
#[derive(Debug)]
pub struct EmulatorOutput {
    pub stdout: String,
    pub stderr: String,
}

impl EmulatorInvocation {
    fn command_line(&self) -> String {
        let mut line = format!("{} {} -vv", EMULATOR_PATH, self.target);
        if self.show_dll_names {
            line.push_str(" -d");
        }
        if self.load_libraries {
            line.push_str(" -l");
        }
        line
    }

    /// Run the emulator to completion and collect both streams.
    ///
    /// A failure to spawn or wait is fatal; a non-zero exit status is not,
    /// since the partial trace may still be worth viewing, so it is only
    /// logged.  Output bytes are converted lossily: the delimiter and
    /// register names are ASCII, so framing survives stray bytes.
    pub fn run(&self) -> Result<EmulatorOutput, ViewerError> {
        let mut command = Command::new(EMULATOR_PATH);
        command.arg(&self.target).arg("-vv");
        if self.show_dll_names {
            command.arg("-d");
        }
        if self.load_libraries {
            command.arg("-l");
        }

        log::info!("running emulator: {}", self.command_line());
        let output = command.output().map_err(|source| ViewerError::Emulator {
            command: self.command_line(),
            source,
        })?;

        if !output.status.success() {
            log::warn!("emulator exited with {}", output.status);
        }

        Ok(EmulatorOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
