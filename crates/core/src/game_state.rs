//! Game state module - manages the complete game state
//!
//! Ties the board to the cursor, the turn and the outcome. All mutation goes
//! through [`GameState::apply_input`], one classified token per call.

use tracing::{debug, info};

use crate::ai;
use crate::board::Board;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    /// Whose move is next. Meaningless once `winner` is terminal.
    turn: Player,
    /// Highlighted cell, always in `0..BOARD_SIZE`.
    cursor: usize,
    /// Monotonic: never leaves a terminal value.
    winner: Winner,
    /// Set on the first input after the game ends, or on abort.
    quit: bool,
    mode: PlayerMode,
}

impl GameState {
    /// Create a new game: empty board, X to move, cursor on the top-left cell
    pub fn new(mode: PlayerMode) -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            cursor: 0,
            winner: Winner::InProgress,
            quit: false,
            mode,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn winner(&self) -> Winner {
        self.winner
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    /// Apply one input token.
    ///
    /// Once the game has an outcome, any token (including [`Token::Other`])
    /// requests quit and nothing else changes. Moves off the grid edge and
    /// confirms on occupied cells are silently ignored.
    pub fn apply_input(&mut self, token: Token) {
        if self.winner.is_terminal() || token == Token::Abort {
            self.quit = true;
            return;
        }

        match token {
            Token::MoveLeft | Token::MoveUp | Token::MoveRight | Token::MoveDown => {
                self.move_cursor(token);
            }
            Token::Confirm => {
                self.submit();
            }
            Token::Abort | Token::Other => {}
        }

        self.evaluate_winner();

        if self.mode == PlayerMode::Single {
            self.opponent_turn();
        }
    }

    /// Move the cursor one cell, staying put at the grid edge
    fn move_cursor(&mut self, token: Token) {
        let (row, col) = Board::coords(self.cursor);
        let last = BOARD_SIDE - 1;
        match token {
            Token::MoveLeft if col > 0 => self.cursor -= 1,
            Token::MoveRight if col < last => self.cursor += 1,
            Token::MoveUp if row > 0 => self.cursor -= BOARD_SIDE,
            Token::MoveDown if row < last => self.cursor += BOARD_SIDE,
            _ => {}
        }
    }

    /// Place the current player's mark under the cursor and pass the turn.
    /// Occupied cells are left alone.
    fn submit(&mut self) {
        if !self.board.is_vacant(self.cursor) {
            return;
        }
        self.board.set(self.cursor, self.turn.mark());
        debug!(player = self.turn.as_str(), cell = self.cursor, "mark placed");
        self.turn = self.turn.other();
    }

    /// Re-check lines and fullness. Only ever moves away from `InProgress`.
    fn evaluate_winner(&mut self) {
        if self.winner.is_terminal() {
            return;
        }

        let outcome = match self.board.line_owner() {
            Some(player) => player.win(),
            None if self.board.is_full() => Winner::Draw,
            None => Winner::InProgress,
        };

        if outcome.is_terminal() {
            info!(outcome = outcome.as_str(), "game finished");
            self.winner = outcome;
        }
    }

    /// Single-player hook: the computer answers a human mark, then X moves again.
    fn opponent_turn(&mut self) {
        if self.winner.is_terminal() || self.turn != Player::O {
            self.turn = Player::X;
            return;
        }

        let vacant = self.board.empty_cells();
        if let Some(index) = ai::choose_move(&self.board, &vacant) {
            if self.board.is_vacant(index) {
                self.board.set(index, Player::O.mark());
                self.evaluate_winner();
            }
        }
        self.turn = Player::X;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(PlayerMode::default())
    }
}
