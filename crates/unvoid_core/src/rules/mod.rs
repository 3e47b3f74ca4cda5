//! Movement and win rules for Unvoid.
//!
//! Rules are pure functions over a [`Board`], kept apart from board storage
//! and from the turn controller so they can be checked in isolation. Each
//! piece type has its own module; [`is_legal_move`] dispatches on
//! [`PieceType`] after the checks shared by every piece.

pub mod designer;
pub mod developer;
pub mod product_owner;
pub mod win;

pub use win::{is_player_ousted_of_product_owner, is_product_owner_present};

use crate::board::Board;
use crate::types::{Piece, PieceType, Position};
use tracing::{instrument, trace};

/// Decides whether `piece` may move from `from` to `to`.
///
/// Shared preconditions come first: `from` and `to` must be on the board,
/// differ, and `to` must not hold a piece of the mover's color. Intermediate squares
/// are never inspected except for the Developer's jumped square.
#[instrument(level = "trace", skip(board, piece), fields(kind = ?piece.kind(), color = ?piece.color()))]
pub fn is_legal_move(board: &Board, from: Position, to: Position, piece: Piece) -> bool {
    if !board.contains(from) {
        trace!("Origin off the board");
        return false;
    }

    let Some(target) = board.get(to) else {
        trace!("Target off the board");
        return false;
    };

    if from == to {
        return false;
    }

    if target.piece().is_some_and(|occupant| occupant.color() == piece.color()) {
        trace!("Target holds a friendly piece");
        return false;
    }

    match piece.kind() {
        PieceType::ProductOwner => product_owner::is_legal(from, to),
        PieceType::Developer => developer::is_legal(board, from, to, piece),
        PieceType::Designer => designer::is_legal(from, to),
    }
}

/// Every square the piece on `from` may move to, row-major.
///
/// Empty when `from` is empty or off the board.
#[instrument(level = "debug", skip(board))]
pub fn legal_targets(board: &Board, from: Position) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    board
        .positions()
        .filter(|&to| is_legal_move(board, from, to, piece))
        .collect()
}
