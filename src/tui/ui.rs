//! Stateless UI rendering for the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unvoid_core::{GameSession, PlayerColor, Position, Selection, SessionPhase, Square};

/// Width of one rendered square, in terminal cells.
const CELL_WIDTH: u16 = 3;

/// Renders the board with cursor, selection and legal-target highlights.
pub fn draw(frame: &mut Frame, session: &GameSession, cursor: Position) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Unvoid")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], session, cursor);

    let status_style = match session.phase() {
        SessionPhase::GameOver => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(session.status())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows: move  enter: select/move  r: restart  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, session: &GameSession, cursor: Position) {
    let board = session.board();
    let targets = session.legal_targets();
    let selected = match session.selection() {
        Selection::Selected { position, .. } => Some(position),
        Selection::None => None,
    };

    let lines: Vec<Line> = (0..board.rows() as i32)
        .map(|row| {
            let spans: Vec<Span> = (0..board.cols() as i32)
                .map(|col| {
                    let pos = Position::new(row, col);
                    let square = board.get(pos).unwrap_or_default();
                    let dark = (row + col) % 2 == 1;
                    cell(square, dark, pos == cursor, selected == Some(pos), targets.contains(&pos))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let width = board.cols() as u16 * CELL_WIDTH + 2;
    let height = board.rows() as u16 + 2;
    let board_area = center_rect(area, width, height);

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} to move", session.current_player())),
    );
    frame.render_widget(paragraph, board_area);
}

fn cell(square: Square, dark: bool, cursor: bool, selected: bool, target: bool) -> Span<'static> {
    let (symbol, fg) = match square {
        Square::Empty => ('.', Color::DarkGray),
        Square::Occupied(piece) => {
            let fg = match piece.color() {
                PlayerColor::White => Color::White,
                PlayerColor::Black => Color::Red,
            };
            (piece.symbol(), fg)
        }
    };

    let bg = if cursor {
        Color::Cyan
    } else if selected {
        Color::Blue
    } else if target {
        Color::Green
    } else if dark {
        Color::Black
    } else {
        Color::Reset
    };

    let mut style = Style::default().fg(fg).bg(bg);
    if square.piece().is_some() {
        style = style.add_modifier(Modifier::BOLD);
    }
    Span::styled(format!(" {} ", symbol), style)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
