//! Terminal input module (engine-facing).
//!
//! Independent of any terminal library: raw keypress bytes are classified into
//! [`crate::types::Token`] by pure functions, and the blocking read works over
//! any [`std::io::Read`] so it can be exercised with in-memory input.

pub mod map;
pub mod reader;

pub use tui_tictactoe_types as types;

pub use map::{classify_byte, classify_bytes};
pub use reader::read_token_from;
