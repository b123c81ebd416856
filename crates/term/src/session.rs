//! TerminalSession: raw-mode lifetime, keypress reads and frame output.
//!
//! Raw mode is process-wide terminal state. It is acquired once in
//! [`TerminalSession::open`] and released exactly once, by [`TerminalSession::close`]
//! or by `Drop` on any other exit path.

use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};
use tracing::{info, warn};

use crate::core::GameState;
use crate::encode::encode_frame;
use crate::error::TerminalError;
use crate::input::read_token_from;
use crate::types::Token;
use crate::viewport::Viewport;

pub struct TerminalSession {
    stdout: io::Stdout,
    stdin: io::Stdin,
    /// Window size captured at open; resizes are not tracked.
    viewport: Viewport,
    buf: Vec<u8>,
    raw: bool,
}

impl TerminalSession {
    /// Capture the window size and switch the terminal to raw mode
    /// (no echo, no line buffering, reads return after a single byte).
    ///
    /// The original attributes are kept by crossterm and put back on close.
    pub fn open() -> Result<Self, TerminalError> {
        let (width, height) = terminal::size().map_err(TerminalError::Config)?;
        terminal::enable_raw_mode().map_err(TerminalError::Config)?;
        info!(width, height, "terminal session opened");

        Ok(Self {
            stdout: io::stdout(),
            stdin: io::stdin(),
            viewport: Viewport::new(width, height),
            buf: Vec::with_capacity(1024),
            raw: true,
        })
    }

    /// Block until a key is pressed.
    pub fn read_token(&mut self) -> Result<Token, TerminalError> {
        read_token_from(&mut self.stdin.lock()).map_err(TerminalError::InputRead)
    }

    /// Redraw the whole screen for `state`.
    pub fn render(&mut self, state: &GameState) -> Result<(), TerminalError> {
        self.buf.clear();
        encode_frame(state, self.viewport, &mut self.buf).map_err(TerminalError::Output)?;
        self.flush_buf()
    }

    /// Show the cursor again and leave raw mode.
    pub fn close(mut self) -> Result<(), TerminalError> {
        self.restore()
    }

    fn restore(&mut self) -> Result<(), TerminalError> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;

        // Output is flushed before the mode switch; leave raw mode even if that fails.
        let shown = self.show_cursor();
        let restored = terminal::disable_raw_mode().map_err(TerminalError::Config);
        info!(ok = restored.is_ok(), "terminal session closed");
        restored.and(shown)
    }

    fn show_cursor(&mut self) -> Result<(), TerminalError> {
        self.buf.clear();
        self.buf
            .queue(cursor::Show)
            .map_err(TerminalError::Output)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<(), TerminalError> {
        self.stdout
            .write_all(&self.buf)
            .and_then(|_| self.stdout.flush())
            .map_err(TerminalError::Output)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A session that never entered raw mode, so tests don't touch the tty.
    fn released() -> TerminalSession {
        TerminalSession {
            stdout: io::stdout(),
            stdin: io::stdin(),
            viewport: Viewport::new(80, 24),
            buf: Vec::new(),
            raw: false,
        }
    }

    #[test]
    fn test_close_after_release_is_a_no_op() {
        assert!(released().close().is_ok());
    }

    #[test]
    fn test_restore_runs_at_most_once() {
        let mut session = released();
        assert!(session.restore().is_ok());
        assert!(session.restore().is_ok());
        assert!(!session.raw);
        assert!(session.buf.is_empty());
    }
}
