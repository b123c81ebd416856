//! Terminal tic-tac-toe (workspace facade crate).
//!
//! Re-exports the member crates under `tui_tictactoe::{core,input,term,types}` and
//! holds the binary's own plumbing: flag parsing, runtime configuration and
//! logging setup.

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;

pub mod cli;
pub mod config;
pub mod logging;
