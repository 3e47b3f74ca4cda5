//! Dimension invariant: the grid stays inside the size bounds.

use super::Invariant;
use crate::board::Board;
use crate::types::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Invariant: rows and cols are in bounds and match the stored squares.
pub struct DimensionsInBoundsInvariant;

impl Invariant<Board> for DimensionsInBoundsInvariant {
    fn holds(board: &Board) -> bool {
        let bounds = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;
        bounds.contains(&board.rows())
            && bounds.contains(&board.cols())
            && board.squares().len() == board.rows() * board.cols()
    }

    fn description() -> &'static str {
        "Board dimensions are within bounds and never change"
    }
}
