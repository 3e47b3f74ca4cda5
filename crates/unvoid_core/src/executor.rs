//! Move execution.

use crate::action::{Move, MoveOutcome};
use crate::board::Board;
use crate::contracts::{Contract, MoveContract};
use crate::rules::developer;
use crate::types::{Piece, PieceType, Position, Square};
use tracing::{debug, instrument, warn};

/// Executes a move on a copy of `board`.
///
/// Returns `None` when the move is illegal or `piece` is not on `from`.
/// A Developer jumping an opponent captures the jumped piece; every other
/// move captures whatever stood on `to`.
#[instrument(skip(board, piece), fields(piece = %piece))]
pub fn apply_move(board: &Board, from: Position, to: Position, piece: Piece) -> Option<MoveOutcome> {
    let action = Move::new(piece, from, to);
    if !MoveContract::pre(board, &action) {
        debug!("Rejected illegal move");
        return None;
    }

    let mut next = board.clone();
    let captured = match piece.kind() {
        PieceType::Developer => match developer::jumped_opponent(board, from, to, piece) {
            Some(jumped) => {
                let captured = next.piece_at(jumped);
                next.set(jumped, Square::Empty);
                captured
            }
            None => next.piece_at(to),
        },
        PieceType::ProductOwner | PieceType::Designer => next.piece_at(to),
    };

    next.set(to, Square::Occupied(piece));
    next.set(from, Square::Empty);

    #[cfg(debug_assertions)]
    if let Err(violations) = MoveContract::post(board, &next) {
        for violation in &violations {
            warn!(description = %violation.description, "Postcondition failed");
        }
    }

    match captured {
        Some(captured) => debug!(captured = %captured, "Move executed with capture"),
        None => debug!("Move executed"),
    }

    Some(MoveOutcome {
        board: next,
        captured,
    })
}
