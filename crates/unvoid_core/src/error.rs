//! Errors raised by the core.
//!
//! Illegal moves are not errors: they surface as `false` from
//! [`is_legal_move`](crate::is_legal_move) and `None` from
//! [`apply_move`](crate::apply_move).

use crate::types::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Error constructing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Rows or columns outside the allowed range.
    #[display(
        "Board dimensions must be between {} and {} (got {}x{})",
        MIN_BOARD_SIZE,
        MAX_BOARD_SIZE,
        rows,
        cols
    )]
    InvalidDimensions {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
    /// Stored squares do not cover a rows x cols grid.
    #[display("Board of {}x{} needs {} squares (got {})", rows, cols, rows * cols, found)]
    SquareCountMismatch {
        /// Declared rows.
        rows: usize,
        /// Declared columns.
        cols: usize,
        /// Number of squares supplied.
        found: usize,
    },
}
