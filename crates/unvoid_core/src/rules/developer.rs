//! Developer movement.
//!
//! A Developer slides up to three squares along a rank, file or diagonal.
//! It captures either by jumping an adjacent opponent (a two-square move
//! over an enemy onto an empty square) or by landing on an opponent one
//! square away. A longer move may never land on an occupied square, even
//! when no jump applies.

use crate::board::Board;
use crate::types::{Piece, Position};
use tracing::trace;

/// Longest Developer move along either axis.
pub const MAX_REACH: i32 = 3;

/// Legality for a Developer, assuming the shared preconditions already hold.
pub fn is_legal(board: &Board, from: Position, to: Position, piece: Piece) -> bool {
    let (dr, dc) = from.abs_delta(to);
    let straight = (dr == 0) != (dc == 0);
    let diagonal = dr == dc;

    if !straight && !diagonal {
        return false;
    }
    if dr > MAX_REACH || dc > MAX_REACH {
        return false;
    }

    let target_occupied = board.piece_at(to).is_some();

    if jumped_opponent(board, from, to, piece).is_some() {
        trace!(%from, %to, "Capturing jump");
        return !target_occupied;
    }

    // Only a one-square move may land on an occupied square.
    !(target_occupied && (dr > 1 || dc > 1))
}

/// The square of the opponent captured by a two-square jump, if this move is one.
///
/// A jump is a move of exactly two squares along a line whose midpoint holds
/// a piece of the other color.
pub fn jumped_opponent(board: &Board, from: Position, to: Position, piece: Piece) -> Option<Position> {
    let (dr, dc) = from.abs_delta(to);
    if dr.max(dc) != 2 {
        return None;
    }

    let mid = from.midpoint(to)?;
    board
        .piece_at(mid)
        .filter(|jumped| jumped.color() != piece.color())
        .map(|_| mid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceType, PlayerColor};

    fn board_with_developer(at: Position) -> (Board, Piece) {
        let mut board = Board::empty(8, 8).unwrap();
        let dev = board
            .place(at, PieceType::Developer, PlayerColor::White)
            .unwrap();
        (board, dev)
    }

    #[test]
    fn test_lines_up_to_three_squares() {
        let from = Position::new(4, 4);
        let (board, dev) = board_with_developer(from);
        for dist in 1..=3 {
            assert!(is_legal(&board, from, Position::new(4 - dist, 4), dev));
            assert!(is_legal(&board, from, Position::new(4, 4 - dist), dev));
            assert!(is_legal(&board, from, Position::new(4 - dist, 4 - dist), dev));
        }
        assert!(!is_legal(&board, from, Position::new(0, 4), dev));
        assert!(!is_legal(&board, from, Position::new(0, 0), dev));
    }

    #[test]
    fn test_off_line_is_illegal() {
        let from = Position::new(4, 4);
        let (board, dev) = board_with_developer(from);
        assert!(!is_legal(&board, from, Position::new(2, 3), dev));
        assert!(!is_legal(&board, from, Position::new(3, 6), dev));
    }

    #[test]
    fn test_jump_over_opponent_onto_empty_square() {
        let from = Position::new(4, 4);
        let (mut board, dev) = board_with_developer(from);
        board.place(Position::new(3, 4), PieceType::Designer, PlayerColor::Black);
        let to = Position::new(2, 4);
        assert!(is_legal(&board, from, to, dev));
        assert_eq!(jumped_opponent(&board, from, to, dev), Some(Position::new(3, 4)));
    }

    #[test]
    fn test_diagonal_jump_over_opponent() {
        let from = Position::new(4, 4);
        let (mut board, dev) = board_with_developer(from);
        board.place(Position::new(5, 5), PieceType::Designer, PlayerColor::Black);
        assert!(is_legal(&board, from, Position::new(6, 6), dev));
    }

    #[test]
    fn test_jump_onto_occupied_square_is_illegal() {
        let from = Position::new(4, 4);
        let (mut board, dev) = board_with_developer(from);
        board.place(Position::new(3, 4), PieceType::Designer, PlayerColor::Black);
        board.place(Position::new(2, 4), PieceType::Developer, PlayerColor::Black);
        assert!(!is_legal(&board, from, Position::new(2, 4), dev));
    }

    #[test]
    fn test_long_move_onto_opponent_is_illegal() {
        let from = Position::new(4, 4);
        let (mut board, dev) = board_with_developer(from);
        board.place(Position::new(2, 4), PieceType::Designer, PlayerColor::Black);
        board.place(Position::new(1, 1), PieceType::Designer, PlayerColor::Black);
        assert!(!is_legal(&board, from, Position::new(2, 4), dev));
        assert!(!is_legal(&board, from, Position::new(1, 1), dev));
    }

    #[test]
    fn test_adjacent_capture_by_landing() {
        let from = Position::new(4, 4);
        let (mut board, dev) = board_with_developer(from);
        board.place(Position::new(3, 3), PieceType::ProductOwner, PlayerColor::Black);
        assert!(is_legal(&board, from, Position::new(3, 3), dev));
    }

    #[test]
    fn test_friendly_midpoint_is_not_a_jump() {
        let from = Position::new(4, 4);
        let (mut board, dev) = board_with_developer(from);
        board.place(Position::new(3, 4), PieceType::Designer, PlayerColor::White);
        let to = Position::new(2, 4);
        assert_eq!(jumped_opponent(&board, from, to, dev), None);
        assert!(is_legal(&board, from, to, dev));
    }

    #[test]
    fn test_three_square_move_ignores_pieces_in_between() {
        let from = Position::new(4, 4);
        let (mut board, dev) = board_with_developer(from);
        board.place(Position::new(3, 4), PieceType::Designer, PlayerColor::Black);
        board.place(Position::new(2, 4), PieceType::Designer, PlayerColor::Black);
        assert!(is_legal(&board, from, Position::new(1, 4), dev));
    }
}
