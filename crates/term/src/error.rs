use std::io;

use thiserror::Error;

/// Failures of the terminal device. None of them are recoverable.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("failed to read input: {0}")]
    InputRead(io::Error),

    #[error("failed to configure terminal: {0}")]
    Config(io::Error),

    #[error("failed to write to terminal: {0}")]
    Output(io::Error),
}
