//! Runtime configuration.
//!
//! Built from the command line plus the environment. Nothing is persisted.

use std::env;
use std::path::PathBuf;

use crate::types::PlayerMode;

/// Environment variable naming the log file. Logging is off when unset.
pub const LOG_ENV: &str = "TICTACTOE_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub mode: PlayerMode,
    /// Append-mode log file; the terminal itself is the game screen.
    pub log_path: Option<PathBuf>,
}

impl Config {
    pub fn new(mode: PlayerMode) -> Self {
        Self {
            mode,
            log_path: None,
        }
    }

    pub fn with_log_path(mut self, log_path: Option<PathBuf>) -> Self {
        self.log_path = log_path;
        self
    }

    /// Fill in settings from the process environment.
    pub fn with_env(self) -> Self {
        let log_path = env::var_os(LOG_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.with_log_path(log_path)
    }
}
