//! First-class move types.

use crate::board::Board;
use crate::types::{Piece, Position};
use serde::{Deserialize, Serialize};

/// A piece's intent to travel from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The moving piece.
    pub piece: Piece,
    /// Square the piece leaves.
    pub from: Position,
    /// Square the piece lands on.
    pub to: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.piece, self.from, self.to)
    }
}

/// Result of executing a legal move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Board after the move. The input board is untouched.
    pub board: Board,
    /// Piece removed by the move, if any.
    pub captured: Option<Piece>,
}
