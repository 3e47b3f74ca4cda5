//! Product Owner count invariant: at most one per side.

use super::Invariant;
use crate::board::Board;
use crate::types::{PieceType, PlayerColor};
use strum::IntoEnumIterator;

/// Invariant: each color has at most one Product Owner.
///
/// Pieces are only ever removed after setup, so a side can lose its
/// Product Owner but never gain a second one.
pub struct SingleProductOwnerInvariant;

impl Invariant<Board> for SingleProductOwnerInvariant {
    fn holds(board: &Board) -> bool {
        PlayerColor::iter().all(|color| {
            board
                .pieces()
                .filter(|(_, piece)| {
                    piece.kind() == PieceType::ProductOwner && piece.color() == color
                })
                .count()
                <= 1
        })
    }

    fn description() -> &'static str {
        "Each side has at most one Product Owner"
    }
}
