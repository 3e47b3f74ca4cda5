//! Unvoid game logic.
//!
//! Unvoid is a two-player game on a rectangular board between 6x6 and
//! 12x12. Each side has a Product Owner, a Developer and a Designer; a side
//! loses when its Product Owner is captured.
//!
//! # Architecture
//!
//! - **Board**: immutable-by-default grid and the starting position
//! - **Rules**: per-piece legality predicates and win detection
//! - **Executor**: applies a legal move to a copy of the board
//! - **Session**: click-driven turn controller
//!
//! # Example
//!
//! ```
//! use unvoid_core::{GameSession, Position, SessionPhase};
//!
//! let mut session = GameSession::new(8, 8)?;
//! session.click(Position::new(7, 1)); // White Developer
//! session.click(Position::new(4, 1));
//! assert_eq!(session.phase(), SessionPhase::AwaitingSelection);
//! # Ok::<(), unvoid_core::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod executor;
mod session;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveOutcome};
pub use board::Board;
pub use error::BoardError;
pub use executor::apply_move;
pub use rules::{
    is_legal_move, is_player_ousted_of_product_owner, is_product_owner_present, legal_targets,
};
pub use session::{GameSession, PlacedPiece, Selection, SessionPhase, SessionSnapshot};
pub use types::{
    DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Piece, PieceId, PieceType, PlayerColor,
    Position, Square,
};
