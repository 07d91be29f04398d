//! Full-screen terminal session
//!
//! Raw mode, the alternate screen and mouse capture are switched on together
//! and undone on drop, so an error in the event loop still restores the shell.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Terminal type used by the interactive commands
pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while a full-screen app runs
#[derive(Debug)]
pub struct TerminalSession {
    terminal: CrosstermTerminal,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen with mouse capture
    pub fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            restore();
            return Err(err);
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => {
                tracing::debug!("terminal session started");
                Ok(Self { terminal })
            }
            Err(err) => {
                restore();
                Err(err)
            }
        }
    }

    /// The ratatui terminal
    pub fn terminal_mut(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
        let _ = self.terminal.show_cursor();
        tracing::debug!("terminal session restored");
    }
}

/// Best-effort restore; each step runs even if an earlier one fails
fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Runs `app` inside a terminal session
pub fn run_fullscreen<F>(app: F) -> io::Result<()>
where
    F: FnOnce(&mut CrosstermTerminal) -> io::Result<()>,
{
    let mut session = TerminalSession::start()?;
    app(session.terminal_mut())
}
