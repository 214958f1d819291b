//! Terminal lifecycle
//!
//! Raw mode and the alternate screen are held by [`TerminalGuard`] for the
//! whole interactive session and released on every exit path: normal quit via
//! `Drop`, panics via a process-wide hook that restores the terminal before
//! the default handler prints.

use std::io::{self, Stdout, Write};
use std::sync::OnceLock;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::ViewerError;

/// Scoped ownership of the raw-mode terminal and the ratatui handle over it
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.  The panic hook is installed
    /// before any terminal state changes so a failure mid-setup still
    /// restores what was already enabled.
    pub fn acquire() -> Result<Self, ViewerError> {
        install_panic_hook();

        let setup = || -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
            enable_raw_mode()?;
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        };

        match setup() {
            Ok(terminal) => Ok(TerminalGuard { terminal }),
            Err(source) => {
                best_effort_restore();
                Err(ViewerError::Terminal { source })
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        best_effort_restore();
        let _ = self.terminal.show_cursor();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_restore();
            previous(info);
        }));
    });
}

fn best_effort_restore() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
    let _ = disable_raw_mode();
    let _ = stdout.flush();
}
