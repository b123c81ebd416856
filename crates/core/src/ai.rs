//! Single-player opponent.
//!
//! There is no strategy yet: [`choose_move`] never picks a cell, so in
//! single-player mode the human keeps the turn and only X marks appear.

use crate::board::Board;

/// Pick a cell for the computer player (O) from `vacant`, the board's empty
/// cells in ascending order.
///
/// Always returns `None` until an actual strategy lands here.
pub fn choose_move(_board: &Board, _vacant: &[usize]) -> Option<usize> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_placeholder_never_moves() {
        let board = Board::new();
        assert_eq!(choose_move(&board, &board.empty_cells()), None);
    }

    #[test]
    fn test_full_board_offers_no_cells() {
        use Cell::{PlayerO as O, PlayerX as X};
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        let vacant = board.empty_cells();
        assert!(vacant.is_empty());
        assert_eq!(choose_move(&board, &vacant), None);
    }
}
