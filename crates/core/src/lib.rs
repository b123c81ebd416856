//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the tic-tac-toe rules and state machine. It has
//! **zero dependencies** on the terminal or any other I/O, so every rule can be
//! driven from plain unit tests.
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 board stored as a flat row-major array, line detection
//! - [`game_state`]: cursor, turn, winner and the input-driven state machine
//! - [`ai`]: single-player opponent hook (no strategy yet)
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::GameState;
//! use tui_tictactoe_types::{Cell, PlayerMode, Token};
//!
//! let mut game = GameState::new(PlayerMode::Two);
//! game.apply_input(Token::MoveRight);
//! game.apply_input(Token::Confirm);
//!
//! assert_eq!(game.board().get(1), Some(Cell::PlayerX));
//! ```

pub mod ai;
pub mod board;
pub mod game_state;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
