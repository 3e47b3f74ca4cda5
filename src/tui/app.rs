//! Application state and logic.

use crossterm::event::KeyCode;
use tracing::{debug, info, warn};
use unvoid_core::{BoardError, GameSession, Position};

use super::input::move_cursor;
use crate::config::GameConfig;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    rows: usize,
    cols: usize,
}

impl App {
    /// Creates a new application with a fresh game of the configured size.
    ///
    /// The cursor starts on the White Product Owner.
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        let rows = *config.rows();
        let cols = *config.cols();
        let session = GameSession::new(rows, cols)?;
        Ok(Self {
            session,
            cursor: Position::new(rows as i32 - 1, 0),
            rows,
            cols,
        })
    }

    /// Gets the current game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Flow::Quit;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                debug!(cursor = %self.cursor, "Click");
                self.session.click(self.cursor);
            }
            KeyCode::Char('r') => self.restart(),
            _ => self.cursor = move_cursor(self.cursor, key, self.rows, self.cols),
        }
        Flow::Continue
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        if let Err(e) = self.session.reset(self.rows, self.cols) {
            // Size was validated when the app was built.
            warn!(error = %e, "Restart failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unvoid_core::SessionPhase;

    #[test]
    fn test_enter_selects_piece_under_cursor() {
        let mut app = App::new(&GameConfig::default()).unwrap();
        assert_eq!(app.cursor(), Position::new(5, 0));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session().phase(), SessionPhase::PieceSelected);
    }

    #[test]
    fn test_keyboard_move_and_restart() {
        let mut app = App::new(&GameConfig::default()).unwrap();
        app.handle_key(KeyCode::Right); // White Developer at (5, 1)
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert!(app.session().board().piece_at(Position::new(3, 1)).is_some());

        app.handle_key(KeyCode::Char('r'));
        assert!(app.session().board().piece_at(Position::new(3, 1)).is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&GameConfig::default()).unwrap();
        assert_eq!(app.handle_key(KeyCode::Char('q')), Flow::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Flow::Quit);
        assert_eq!(app.handle_key(KeyCode::Down), Flow::Continue);
    }
}
