//! Unique identity invariant: no piece appears on two squares.

use super::Invariant;
use crate::board::Board;
use std::collections::HashSet;

/// Invariant: every piece id on the board is distinct.
///
/// A piece's position is implied by the square holding it, so a repeated
/// id would mean one piece stands in two places.
pub struct UniquePieceIdsInvariant;

impl Invariant<Board> for UniquePieceIdsInvariant {
    fn holds(board: &Board) -> bool {
        let mut seen = HashSet::new();
        board.pieces().all(|(_, piece)| seen.insert(piece.id()))
    }

    fn description() -> &'static str {
        "Each piece occupies exactly one square"
    }
}
