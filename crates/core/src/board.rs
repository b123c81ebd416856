//! Board module - manages the game grid
//!
//! The board is a 3x3 grid stored as a flat array in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! -----------
//!  3 | 4 | 5
//! -----------
//!  6 | 7 | 8
//! ```

use arrayvec::ArrayVec;

use crate::types::{Cell, Player, BOARD_SIDE, BOARD_SIZE, LINES};

/// The game board - 9 cells, row = index / 3, col = index % 3
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Row and column of a cell index
    #[inline(always)]
    pub fn coords(index: usize) -> (usize, usize) {
        (index / BOARD_SIDE, index % BOARD_SIDE)
    }

    /// Get cell at index
    /// Returns None if out of bounds
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Set cell at index
    /// Returns false if out of bounds
    pub fn set(&mut self, index: usize, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Check if index is in bounds and empty
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Check whether no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Indices of every empty cell, in ascending order
    pub fn empty_cells(&self) -> ArrayVec<usize, BOARD_SIZE> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of cells holding the given mark
    pub fn count(&self, mark: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// First player found holding a full line, scanning rows, columns, then diagonals
    pub fn line_owner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let first = self.cells[a];
            if first.is_empty() || first != self.cells[b] || first != self.cells[c] {
                return None;
            }
            match first {
                Cell::PlayerX => Some(Player::X),
                Cell::PlayerO => Some(Player::O),
                Cell::Empty => None,
            }
        })
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Create from a flat array
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::PlayerX;
    const O: Cell = Cell::PlayerO;

    #[test]
    fn test_coords_are_row_major() {
        assert_eq!(Board::coords(0), (0, 0));
        assert_eq!(Board::coords(2), (0, 2));
        assert_eq!(Board::coords(3), (1, 0));
        assert_eq!(Board::coords(8), (2, 2));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut board = Board::new();
        assert!(board.set(4, X));
        assert_eq!(board.get(4), Some(X));
        assert!(!board.set(9, O));
        assert_eq!(board.get(9), None);
        assert!(!board.is_vacant(4));
        assert!(board.is_vacant(5));
        assert!(!board.is_vacant(42));
    }

    #[test]
    fn test_empty_cells_and_counts() {
        let board = Board::from_cells([X, O, E, E, X, E, O, E, E]);
        assert_eq!(board.empty_cells().as_slice(), &[2, 3, 5, 7, 8]);
        assert_eq!(board.count(X), 2);
        assert_eq!(board.count(O), 2);
        assert_eq!(board.count(E), 5);
        assert!(!board.is_full());
    }

    #[test]
    fn test_line_owner_each_direction() {
        assert_eq!(
            Board::from_cells([X, X, X, O, O, E, E, E, E]).line_owner(),
            Some(Player::X)
        );
        assert_eq!(
            Board::from_cells([X, O, X, E, O, X, E, O, E]).line_owner(),
            Some(Player::O)
        );
        assert_eq!(
            Board::from_cells([O, X, X, E, O, X, E, E, O]).line_owner(),
            Some(Player::O)
        );
        assert_eq!(
            Board::from_cells([O, O, X, E, X, E, X, E, E]).line_owner(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_no_owner_on_mixed_or_empty_lines() {
        assert_eq!(Board::new().line_owner(), None);
        let full = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(full.line_owner(), None);
        assert!(full.is_full());
    }
}
