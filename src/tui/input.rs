//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use unvoid_core::Position;

/// Moves cursor based on arrow keys, staying inside a rows x cols board.
pub fn move_cursor(cursor: Position, key: KeyCode, rows: usize, cols: usize) -> Position {
    let last_row = rows.saturating_sub(1) as i32;
    let last_col = cols.saturating_sub(1) as i32;

    let (row, col) = match key {
        KeyCode::Up | KeyCode::Char('k') => (cursor.row - 1, cursor.col),
        KeyCode::Down | KeyCode::Char('j') => (cursor.row + 1, cursor.col),
        KeyCode::Left | KeyCode::Char('h') => (cursor.row, cursor.col - 1),
        KeyCode::Right | KeyCode::Char('l') => (cursor.row, cursor.col + 1),
        _ => return cursor,
    };

    Position::new(row.clamp(0, last_row), col.clamp(0, last_col))
}
