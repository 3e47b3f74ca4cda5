//! Contract-based validation for moves.
//!
//! Contracts pair a precondition on the board before a move with a
//! postcondition relating the board before and after it: {P} move {Q}.

use crate::action::Move;
use crate::board::Board;
use crate::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use crate::rules::is_legal_move;
use tracing::{instrument, trace};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// True when the action may be applied to the state.
    fn pre(state: &S, action: &A) -> bool;

    /// Checks that the transition from `before` to `after` kept every invariant.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the origin square holds the moving piece.
pub struct OriginHoldsPiece;

impl OriginHoldsPiece {
    /// Compares by id so a stale copy of a piece cannot be moved twice.
    #[instrument(level = "trace", skip(board))]
    pub fn check(mov: &Move, board: &Board) -> bool {
        let holds = board
            .piece_at(mov.from)
            .is_some_and(|occupant| occupant.id() == mov.piece.id());
        if !holds {
            trace!("Origin does not hold the moving piece");
        }
        holds
    }
}

/// Composite precondition: the piece is where the move says and the rules allow it.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(level = "trace", skip(board))]
    pub fn check(mov: &Move, board: &Board) -> bool {
        OriginHoldsPiece::check(mov, board) && is_legal_move(board, mov.from, mov.to, mov.piece)
    }
}

/// Contract for executing a move.
///
/// Preconditions:
/// - Origin square holds the piece
/// - The piece's movement rules allow the move
///
/// Postconditions:
/// - Every board invariant holds
/// - Dimensions are unchanged
/// - At most one piece left the board
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, action: &Move) -> bool {
        LegalMove::check(action, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match BoardInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if (before.rows(), before.cols()) != (after.rows(), after.cols()) {
            violations.push(InvariantViolation::new("Board dimensions changed"));
        }

        let removed = before.pieces().count().checked_sub(after.pieces().count());
        if !matches!(removed, Some(0 | 1)) {
            violations.push(InvariantViolation::new(
                "A move removes at most one piece and adds none",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
