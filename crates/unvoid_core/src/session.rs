//! Turn controller: selection, move execution and win declaration.
//!
//! A [`GameSession`] is driven by clicks. The first click selects one of the
//! current player's pieces, the second either moves it or drops the
//! selection. Every operation runs to completion before returning, so the
//! session is never observed half-updated.

use crate::board::Board;
use crate::error::BoardError;
use crate::executor::apply_move;
use crate::rules::{is_legal_move, is_player_ousted_of_product_owner, legal_targets};
use crate::types::{DEFAULT_BOARD_SIZE, Piece, PieceType, PlayerColor, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Phase of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum SessionPhase {
    /// Waiting for the current player to pick a piece.
    AwaitingSelection,
    /// A piece is picked; the next click chooses its destination.
    PieceSelected,
    /// A Product Owner was captured. Terminal.
    GameOver,
}

/// Pending move origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,
    /// A piece of the current player and the square it stands on.
    Selected {
        /// The selected piece.
        piece: Piece,
        /// Where it stands.
        position: Position,
    },
}

/// A two-player game in progress or finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    current_player: PlayerColor,
    selection: Selection,
    winner: Option<PlayerColor>,
    status: String,
    last_capture: Option<Piece>,
}

impl GameSession {
    /// Starts a new game on a fresh rows x cols board with White to move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] for out-of-range sizes.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let board = Board::new(rows, cols)?;
        info!(rows, cols, "Starting new game");
        Ok(Self::from_board(board, PlayerColor::White))
    }

    /// Resumes play from an arbitrary board with `current_player` to move.
    #[instrument(skip(board), fields(rows = board.rows(), cols = board.cols()))]
    pub fn from_board(board: Board, current_player: PlayerColor) -> Self {
        Self {
            board,
            current_player,
            selection: Selection::None,
            winner: None,
            status: turn_message(current_player),
            last_capture: None,
        }
    }

    /// Current phase, derived from the winner and the selection.
    pub fn phase(&self) -> SessionPhase {
        match (self.winner, self.selection) {
            (Some(_), _) => SessionPhase::GameOver,
            (None, Selection::Selected { .. }) => SessionPhase::PieceSelected,
            (None, Selection::None) => SessionPhase::AwaitingSelection,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move (or the side that just won, once the game is over).
    pub fn current_player(&self) -> PlayerColor {
        self.current_player
    }

    /// Pending move origin.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Winner, once a Product Owner has been captured.
    pub fn winner(&self) -> Option<PlayerColor> {
        self.winner
    }

    /// Human-readable status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Piece captured by the most recent move.
    pub fn last_capture(&self) -> Option<Piece> {
        self.last_capture
    }

    /// Legal destinations for the selected piece; empty without a selection.
    pub fn legal_targets(&self) -> Vec<Position> {
        match self.selection {
            Selection::Selected { position, .. } => legal_targets(&self.board, position),
            Selection::None => Vec::new(),
        }
    }

    /// Handles a click on `pos` according to the current phase.
    #[instrument(skip(self), fields(phase = %self.phase(), player = %self.current_player))]
    pub fn click(&mut self, pos: Position) -> &Self {
        match self.phase() {
            SessionPhase::AwaitingSelection => self.select(pos),
            SessionPhase::PieceSelected => self.move_or_deselect(pos),
            SessionPhase::GameOver => {
                debug!("Game over, click ignored");
                &*self
            }
        }
    }

    /// Selects the current player's piece on `pos`.
    ///
    /// Empty, opponent and off-board squares leave the selection cleared and
    /// explain why in the status. A no-op once the game is over.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn select(&mut self, pos: Position) -> &Self {
        if self.winner.is_some() {
            return self;
        }

        let player = self.current_player;
        self.selection = Selection::None;

        let Some(square) = self.board.get(pos) else {
            debug!(%pos, "Selection off the board");
            self.status = format!("That square is off the board. It's {player}'s turn.");
            return self;
        };

        match square.piece() {
            Some(piece) if piece.color() == player => {
                debug!(%pos, piece = %piece, "Piece selected");
                self.selection = Selection::Selected {
                    piece,
                    position: pos,
                };
                self.status = format!("{player}'s turn: {} selected.", piece.kind());
            }
            Some(_) => {
                self.status = format!("Not your piece! It's {player}'s turn.");
            }
            None => {
                self.status =
                    format!("Empty square. Select one of your pieces. It's {player}'s turn.");
            }
        }
        self
    }

    /// Moves the selected piece to `pos`, or drops the selection if the move is illegal.
    ///
    /// Capturing the opponent's Product Owner ends the game with the mover as
    /// winner; any other legal move passes the turn.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn move_or_deselect(&mut self, pos: Position) -> &Self {
        if self.winner.is_some() {
            return self;
        }

        let Selection::Selected { piece, position } = self.selection else {
            self.status = format!("No piece selected. It's {}'s turn.", self.current_player);
            return self;
        };
        self.selection = Selection::None;

        if !is_legal_move(&self.board, position, pos, piece) {
            debug!(from = %position, to = %pos, "Invalid move, selection dropped");
            self.status = "Invalid move. Try again.".to_string();
            return self;
        }

        let Some(outcome) = apply_move(&self.board, position, pos, piece) else {
            warn!(from = %position, to = %pos, "Selected piece no longer on its square");
            self.status = "Invalid move. Try again.".to_string();
            return self;
        };

        let mover = self.current_player;
        let opponent = mover.opponent();
        self.board = outcome.board;
        self.last_capture = outcome.captured;

        if is_player_ousted_of_product_owner(&self.board, opponent) {
            info!(winner = %mover, "Product Owner captured, game over");
            self.winner = Some(mover);
            self.status = format!("{mover} wins by capturing the Product Owner!");
            return self;
        }

        self.current_player = opponent;
        self.status = match outcome.captured {
            Some(captured) => format!(
                "{} captured {}! {}",
                piece.kind(),
                captured.kind(),
                turn_message(opponent)
            ),
            None => turn_message(opponent),
        };
        info!(from = %position, to = %pos, next = %opponent, "Move completed");
        self
    }

    /// Replaces the game with a fresh rows x cols board, White to move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] and leaves the session
    /// untouched when the size is out of range.
    #[instrument(skip(self))]
    pub fn reset(&mut self, rows: usize, cols: usize) -> Result<&Self, BoardError> {
        *self = Self::new(rows, cols)?;
        Ok(&*self)
    }

    /// Serializable view of the session for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            rows: self.board.rows(),
            cols: self.board.cols(),
            grid: self.board.to_string().lines().map(str::to_string).collect(),
            pieces: self
                .board
                .pieces()
                .map(|(position, piece)| PlacedPiece { position, piece })
                .collect(),
            current_player: self.current_player,
            phase: self.phase(),
            selection: self.selection,
            legal_targets: self.legal_targets(),
            winner: self.winner,
            status: self.status.clone(),
            last_capture: self.last_capture,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        match Board::new(DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE) {
            Ok(board) => Self::from_board(board, PlayerColor::White),
            Err(err) => unreachable!("default board size is in range: {err}"),
        }
    }
}

fn turn_message(player: PlayerColor) -> String {
    format!("{player}'s turn")
}

/// A piece and where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedPiece {
    /// Square holding the piece.
    pub position: Position,
    /// The piece.
    pub piece: Piece,
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Board rows.
    pub rows: usize,
    /// Board columns.
    pub cols: usize,
    /// Text rendering of the board, one string per row.
    pub grid: Vec<String>,
    /// Pieces on the board, row-major.
    pub pieces: Vec<PlacedPiece>,
    /// Side to move.
    pub current_player: PlayerColor,
    /// State machine phase.
    pub phase: SessionPhase,
    /// Pending move origin.
    pub selection: Selection,
    /// Legal destinations of the selected piece.
    pub legal_targets: Vec<Position>,
    /// Winner, if the game is over.
    pub winner: Option<PlayerColor>,
    /// Status line.
    pub status: String,
    /// Piece captured by the last move.
    pub last_capture: Option<Piece>,
}

impl SessionSnapshot {
    /// True when the last capture was a Product Owner.
    pub fn ended_by_capture(&self) -> bool {
        self.last_capture
            .is_some_and(|piece| piece.kind() == PieceType::ProductOwner)
    }
}
