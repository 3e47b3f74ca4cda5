//! Core domain types for Unvoid.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest allowed number of rows or columns.
pub const MIN_BOARD_SIZE: usize = 6;

/// Largest allowed number of rows or columns.
pub const MAX_BOARD_SIZE: usize = 12;

/// Board size used when nothing else is requested.
pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Side controlling a piece.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum PlayerColor {
    /// Moves first, starts in the bottom-left corner.
    White,
    /// Starts in the top-right corner.
    Black,
}

impl PlayerColor {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            PlayerColor::White => PlayerColor::Black,
            PlayerColor::Black => PlayerColor::White,
        }
    }
}

/// The three piece archetypes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum PieceType {
    /// Steps one square in any direction. Losing it loses the game.
    #[strum(to_string = "Product Owner")]
    ProductOwner,
    /// Slides up to three squares in a line and captures by jumping.
    Developer,
    /// Jumps in an L-shape.
    Designer,
}

impl PieceType {
    /// Single-character board symbol (`G` for desiGner, since `D` is taken).
    pub fn symbol(self) -> char {
        match self {
            PieceType::ProductOwner => 'P',
            PieceType::Developer => 'D',
            PieceType::Designer => 'G',
        }
    }
}

/// Stable identity of a piece on one board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("piece-{}", _0)]
pub struct PieceId(pub u32);

/// A game piece. Never mutated; moving it relocates the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    kind: PieceType,
    color: PlayerColor,
}

impl Piece {
    pub(crate) fn new(id: PieceId, kind: PieceType, color: PlayerColor) -> Self {
        Self { id, kind, color }
    }

    /// Returns the piece identity.
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Returns the piece archetype.
    pub fn kind(&self) -> PieceType {
        self.kind
    }

    /// Returns the owning side.
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    /// Board symbol: uppercase for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        match self.color {
            PlayerColor::White => self.kind.symbol(),
            PlayerColor::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.color, self.kind, self.id)
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// No piece.
    #[default]
    Empty,
    /// Holds exactly one piece.
    Occupied(Piece),
}

impl Square {
    /// Returns the occupying piece, if any.
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece) => Some(*piece),
        }
    }

    /// True when no piece is present.
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// Zero-indexed (row, col) coordinate.
///
/// Signed so that positions outside the board can be expressed and rejected
/// like any other illegal input.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Position {
    /// Row index, 0 at the top (Black's back row).
    pub row: i32,
    /// Column index, 0 at the left.
    pub col: i32,
}

impl Position {
    /// Absolute row and column distance to `other`, saturating at `i32::MAX`.
    pub fn abs_delta(self, other: Position) -> (i32, i32) {
        let saturate = |d: u32| i32::try_from(d).unwrap_or(i32::MAX);
        (
            saturate(self.row.abs_diff(other.row)),
            saturate(self.col.abs_diff(other.col)),
        )
    }

    /// max(|Δrow|, |Δcol|).
    #[instrument(level = "trace")]
    pub fn chebyshev_distance(self, other: Position) -> i32 {
        let (dr, dc) = self.abs_delta(other);
        dr.max(dc)
    }

    /// Square halfway between `self` and `other`, if both deltas are even.
    pub fn midpoint(self, other: Position) -> Option<Position> {
        let dr = i64::from(other.row) - i64::from(self.row);
        let dc = i64::from(other.col) - i64::from(self.col);
        if dr % 2 != 0 || dc % 2 != 0 {
            return None;
        }
        let row = i32::try_from(i64::from(self.row) + dr / 2).ok()?;
        let col = i32::try_from(i64::from(self.col) + dc / 2).ok()?;
        Some(Position::new(row, col))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}
