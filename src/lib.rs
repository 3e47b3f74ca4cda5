//! Unvoid front ends.
//!
//! The game logic lives in [`unvoid_core`]; this crate adds the ways to
//! play it.
//!
//! # Architecture
//!
//! - **Config**: board size and logging settings from `unvoid.toml`
//! - **Script**: line-oriented driver printing one JSON snapshot per command
//! - **TUI**: keyboard-driven terminal board for two local players
//!
//! # Example
//!
//! ```
//! use unvoid::{GameSession, script};
//!
//! let mut session = GameSession::new(8, 8)?;
//! let mut output = Vec::new();
//! script::run(&mut session, "7 1\n4 1\n".as_bytes(), &mut output)?;
//! assert_eq!(String::from_utf8(output)?.lines().count(), 2);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod script;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Game types
pub use unvoid_core::{
    Board, BoardError, GameSession, Move, MoveOutcome, Piece, PieceId, PieceType, PlayerColor,
    Position, Selection, SessionPhase, SessionSnapshot, Square, apply_move, is_legal_move,
    is_player_ousted_of_product_owner, legal_targets,
};
