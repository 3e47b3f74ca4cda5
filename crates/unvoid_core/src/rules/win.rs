//! Win detection: a side loses when its Product Owner leaves the board.

use crate::board::Board;
use crate::types::{PieceType, PlayerColor};
use tracing::instrument;

/// True iff a Product Owner of `color` is still on the board.
#[instrument(level = "debug", skip(board))]
pub fn is_product_owner_present(board: &Board, color: PlayerColor) -> bool {
    board
        .pieces()
        .any(|(_, piece)| piece.kind() == PieceType::ProductOwner && piece.color() == color)
}

/// True iff `color` has no Product Owner left, meaning that side has lost.
#[instrument(level = "debug", skip(board))]
pub fn is_player_ousted_of_product_owner(board: &Board, color: PlayerColor) -> bool {
    !is_product_owner_present(board, color)
}
