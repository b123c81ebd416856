//! Terminal session and board rendering.
//!
//! [`TerminalSession`] owns raw mode for the lifetime of a game and restores the
//! terminal on close or drop. Drawing goes through [`encode_frame`], which is
//! pure: it turns a [`core::GameState`] into the exact ANSI byte stream, so the
//! output can be checked without a real terminal.

pub mod encode;
pub mod error;
pub mod session;
pub mod viewport;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_types as types;

pub use encode::{encode_frame, EXIT_PROMPT};
pub use error::TerminalError;
pub use session::TerminalSession;
pub use viewport::Viewport;
