//! Rectangular Unvoid board and the starting position.

use crate::error::BoardError;
use crate::types::{
    MAX_BOARD_SIZE, MIN_BOARD_SIZE, Piece, PieceId, PieceType, PlayerColor, Position, Square,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A rows x cols grid of squares.
///
/// Dimensions are fixed at construction. Squares are stored row-major.
/// Deserialization applies the same dimension checks as [`Board::empty`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    cols: usize,
    squares: Vec<Square>,
    next_piece_id: u32,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    squares: Vec<Square>,
    next_piece_id: u32,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut board = Self::empty(raw.rows, raw.cols)?;
        if raw.squares.len() != board.squares.len() {
            return Err(BoardError::SquareCountMismatch {
                rows: raw.rows,
                cols: raw.cols,
                found: raw.squares.len(),
            });
        }

        let max_id = raw
            .squares
            .iter()
            .filter_map(|square| square.piece())
            .map(|piece| piece.id().0.saturating_add(1))
            .max()
            .unwrap_or(0);
        board.squares = raw.squares;
        board.next_piece_id = raw.next_piece_id.max(max_id);
        Ok(board)
    }
}

impl Board {
    /// Creates a board with the six starting pieces.
    ///
    /// Black fills row 0 from the right edge (Product Owner, Developer,
    /// Designer); White mirrors it on the last row from the left edge.
    /// Piece ids start at 0 on every new board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if either dimension is
    /// outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let mut board = Self::empty(rows, cols)?;

        if cols > 2 {
            let top = 0;
            let right = cols as i32 - 1;
            board.place(Position::new(top, right), PieceType::ProductOwner, PlayerColor::Black);
            board.place(Position::new(top, right - 1), PieceType::Developer, PlayerColor::Black);
            board.place(Position::new(top, right - 2), PieceType::Designer, PlayerColor::Black);

            let bottom = rows as i32 - 1;
            board.place(Position::new(bottom, 0), PieceType::ProductOwner, PlayerColor::White);
            board.place(Position::new(bottom, 1), PieceType::Developer, PlayerColor::White);
            board.place(Position::new(bottom, 2), PieceType::Designer, PlayerColor::White);
        }

        debug!(rows, cols, pieces = board.pieces().count(), "Starting position ready");
        Ok(board)
    }

    /// Creates a board with no pieces on it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if either dimension is out of range.
    #[instrument]
    pub fn empty(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let valid = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;
        if !valid.contains(&rows) || !valid.contains(&cols) {
            debug!(rows, cols, "Rejected board dimensions");
            return Err(BoardError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            squares: vec![Square::Empty; rows * cols],
            next_piece_id: 0,
        })
    }

    /// Adds a new piece with the next free id.
    ///
    /// Returns `None` when `pos` is off the board or already occupied.
    #[instrument(skip(self), fields(rows = self.rows, cols = self.cols))]
    pub fn place(&mut self, pos: Position, kind: PieceType, color: PlayerColor) -> Option<Piece> {
        let idx = self.index(pos)?;
        if !self.squares[idx].is_empty() {
            debug!(%pos, "Square already occupied");
            return None;
        }

        let piece = Piece::new(PieceId(self.next_piece_id), kind, color);
        self.next_piece_id += 1;
        self.squares[idx] = Square::Occupied(piece);
        Some(piece)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when `pos` lies inside the board.
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Returns the square at `pos`, or `None` off the board.
    pub fn get(&self, pos: Position) -> Option<Square> {
        self.index(pos).map(|idx| self.squares[idx])
    }

    /// Returns the piece at `pos`, if any.
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.get(pos).and_then(|square| square.piece())
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Every piece on the board with its position, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.positions()
            .filter_map(|pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Replaces the contents of a square. Only the move executor changes squares.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        if let Some(idx) = self.index(pos) {
            self.squares[idx] = square;
        }
    }

    /// Builds a board without any checks, for exercising invariants.
    #[cfg(test)]
    pub(crate) fn unchecked(rows: usize, cols: usize, squares: Vec<Square>) -> Self {
        Self {
            rows,
            cols,
            squares,
            next_piece_id: 0,
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let in_rows = pos.row >= 0 && (pos.row as usize) < self.rows;
        let in_cols = pos.col >= 0 && (pos.col as usize) < self.cols;
        (in_rows && in_cols).then(|| pos.row as usize * self.cols + pos.col as usize)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.squares.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for square in row {
                let symbol = square.piece().map_or('.', |piece| piece.symbol());
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_6x6() {
        let board = Board::new(6, 6).unwrap();
        assert_eq!(
            board.to_string(),
            "...gdp\n......\n......\n......\n......\nPDG..."
        );
    }

    #[test]
    fn test_ids_follow_placement_order() {
        let board = Board::new(8, 10).unwrap();
        let black_po = board.piece_at(Position::new(0, 9)).unwrap();
        let white_designer = board.piece_at(Position::new(7, 2)).unwrap();
        assert_eq!(black_po.id(), PieceId(0));
        assert_eq!(white_designer.id(), PieceId(5));
    }

    #[test]
    fn test_ids_restart_on_new_board() {
        let first = Board::new(6, 6).unwrap();
        let second = Board::new(6, 6).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_out_of_range_dimensions() {
        assert_eq!(
            Board::new(5, 8),
            Err(BoardError::InvalidDimensions { rows: 5, cols: 8 })
        );
        assert!(Board::new(8, 13).is_err());
        assert!(Board::empty(0, 0).is_err());
    }

    #[test]
    fn test_get_off_board_is_none() {
        let board = Board::new(6, 6).unwrap();
        assert_eq!(board.get(Position::new(-1, 0)), None);
        assert_eq!(board.get(Position::new(0, 6)), None);
        assert_eq!(board.get(Position::new(2, 2)), Some(Square::Empty));
    }

    #[test]
    fn test_place_refuses_occupied_and_off_board() {
        let mut board = Board::empty(6, 6).unwrap();
        let pos = Position::new(2, 2);
        assert!(board.place(pos, PieceType::Developer, PlayerColor::White).is_some());
        assert!(board.place(pos, PieceType::Designer, PlayerColor::Black).is_none());
        assert!(board.place(Position::new(6, 0), PieceType::Designer, PlayerColor::Black).is_none());
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn test_json_round_trip_keeps_pieces() {
        let board = Board::new(7, 9).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_deserialize_rejects_short_squares() {
        let json = r#"{"rows":6,"cols":6,"squares":[],"next_piece_id":0}"#;
        let err = serde_json::from_str::<Board>(json).unwrap_err();
        assert!(err.to_string().contains("needs 36 squares (got 0)"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_dimensions() {
        let json = serde_json::json!({
            "rows": 6,
            "cols": 0,
            "squares": [],
            "next_piece_id": 0,
        });
        let err = serde_json::from_value::<Board>(json).unwrap_err();
        assert!(err.to_string().contains("between 6 and 12"), "{err}");
    }

    #[test]
    fn test_deserialize_moves_id_sequence_past_existing_pieces() {
        let mut board = Board::empty(6, 6).unwrap();
        board.place(Position::new(0, 0), PieceType::Developer, PlayerColor::Black);
        board.place(Position::new(5, 5), PieceType::Developer, PlayerColor::White);
        let mut json = serde_json::to_value(&board).unwrap();
        json["next_piece_id"] = serde_json::json!(0);

        let mut back: Board = serde_json::from_value(json).unwrap();
        let added = back
            .place(Position::new(3, 3), PieceType::Designer, PlayerColor::White)
            .unwrap();
        assert_eq!(added.id(), PieceId(2));
    }
}
