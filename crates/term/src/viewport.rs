//! Window dimensions and the centering arithmetic derived from them.
//!
//! All positions returned here are 1-based terminal coordinates, the same
//! numbers that end up inside `ESC [ row ; col H`.

use crate::types::{RENDER_HEIGHT, RENDER_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Row of the board's first line.
    pub fn board_top(&self) -> u16 {
        (self.height / 2).saturating_sub(RENDER_HEIGHT / 2 + 1).max(1)
    }

    /// Column of the board's first character.
    pub fn board_left(&self) -> u16 {
        (self.width / 2).saturating_sub(RENDER_WIDTH / 2).max(1)
    }

    /// Row of the end-of-game banner, leaving one blank line under the board.
    pub fn status_row(&self) -> u16 {
        self.board_top() + RENDER_HEIGHT + 1
    }

    pub fn prompt_row(&self) -> u16 {
        self.status_row() + 1
    }

    /// Column that horizontally centers `text` in the window.
    pub fn centered_col(&self, text: &str) -> u16 {
        let half = (text.chars().count() / 2) as u16;
        (self.width / 2).saturating_sub(half).max(1)
    }
}
