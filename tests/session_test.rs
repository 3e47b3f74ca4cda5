//! End-to-end tests for click-driven play.

use unvoid::{
    Board, GameSession, PieceType, PlayerColor, Position, Selection, SessionPhase,
};

fn click(session: &mut GameSession, row: i32, col: i32) {
    session.click(Position::new(row, col));
}

#[test]
fn test_opening_sequence_with_developer_jump_on_8x8() {
    let mut session = GameSession::new(8, 8).expect("Failed to start game");

    // White Developer slides three squares up.
    click(&mut session, 7, 1);
    click(&mut session, 4, 1);
    assert_eq!(session.current_player(), PlayerColor::Black);
    assert_eq!(session.status(), "Black's turn");

    // Black Designer hops out.
    click(&mut session, 0, 5);
    click(&mut session, 2, 4);
    assert_eq!(session.current_player(), PlayerColor::White);

    // White Product Owner steps up.
    click(&mut session, 7, 0);
    click(&mut session, 6, 0);

    // Black Designer lands next to the White Developer's diagonal.
    click(&mut session, 2, 4);
    click(&mut session, 3, 2);
    assert_eq!(session.current_player(), PlayerColor::White);

    // White Developer jumps the Designer.
    click(&mut session, 4, 1);
    assert_eq!(session.phase(), SessionPhase::PieceSelected);
    assert!(session.legal_targets().contains(&Position::new(2, 3)));
    click(&mut session, 2, 3);

    assert_eq!(session.status(), "Developer captured Designer! Black's turn");
    assert_eq!(session.current_player(), PlayerColor::Black);
    assert_eq!(session.phase(), SessionPhase::AwaitingSelection);
    assert!(session.board().piece_at(Position::new(3, 2)).is_none());
    assert_eq!(
        session.last_capture().map(|piece| piece.kind()),
        Some(PieceType::Designer)
    );
    assert_eq!(session.board().pieces().count(), 5);

    // Black selects its Product Owner and tries an illegal destination.
    click(&mut session, 0, 7);
    assert_eq!(session.phase(), SessionPhase::PieceSelected);
    click(&mut session, 5, 5);
    assert_eq!(session.status(), "Invalid move. Try again.");
    assert_eq!(session.phase(), SessionPhase::AwaitingSelection);
    assert_eq!(session.selection(), Selection::None);
    assert_eq!(session.current_player(), PlayerColor::Black);
}

#[test]
fn test_capturing_the_product_owner_ends_the_game() {
    let mut board = Board::empty(8, 8).unwrap();
    board.place(Position::new(7, 0), PieceType::ProductOwner, PlayerColor::White);
    board.place(Position::new(4, 4), PieceType::Designer, PlayerColor::White);
    board.place(Position::new(2, 5), PieceType::ProductOwner, PlayerColor::Black);
    board.place(Position::new(0, 0), PieceType::Developer, PlayerColor::Black);
    let mut session = GameSession::from_board(board, PlayerColor::White);

    click(&mut session, 4, 4);
    click(&mut session, 2, 5);

    assert_eq!(session.phase(), SessionPhase::GameOver);
    assert_eq!(session.winner(), Some(PlayerColor::White));
    assert_eq!(
        session.status(),
        "White wins by capturing the Product Owner!"
    );
    assert!(session.snapshot().ended_by_capture());

    // Nothing changes once the game is over.
    let finished = session.clone();
    click(&mut session, 0, 0);
    click(&mut session, 7, 0);
    assert_eq!(session, finished);
}

#[test]
fn test_reset_starts_over_with_new_size() {
    let mut session = GameSession::new(6, 6).unwrap();
    click(&mut session, 5, 1);
    click(&mut session, 4, 1);

    session.reset(10, 7).expect("Reset rejected");
    assert_eq!(session.board().rows(), 10);
    assert_eq!(session.board().cols(), 7);
    assert_eq!(session.current_player(), PlayerColor::White);
    assert_eq!(session.status(), "White's turn");
    assert!(session.reset(3, 3).is_err());
    assert_eq!(session.board().rows(), 10);
}

#[test]
fn test_snapshot_serializes_for_front_ends() {
    let mut session = GameSession::new(6, 6).unwrap();
    click(&mut session, 5, 0);

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["phase"], "PieceSelected");
    assert_eq!(json["current_player"], "White");
    assert_eq!(json["grid"][5], "PDG...");
    assert_eq!(json["legal_targets"].as_array().unwrap().len(), 2);
}
