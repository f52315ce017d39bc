use super::*;

// ==================== PAWN MOVEMENT TESTS ====================

#[test]
fn test_pawn_single_and_double_push_from_start() {
    let game = Game::default();
    let targets = game.legal_destinations(sq("e2"));

    assert_eq!(targets.len(), 2);
    assert!(targets.contains(&sq("e3")));
    assert!(targets.contains(&sq("e4")));
}

#[test]
fn test_pawn_double_push_only_from_start_rank() {
    let mut game = Game::default();
    play_all(&mut game, &["e2e3", "a7a6"]);

    let targets = game.legal_destinations(sq("e3"));
    assert_eq!(targets.as_slice(), &[sq("e4")]);
}

#[test]
fn test_pawn_blocked_by_piece() {
    let game = fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    let targets = game.legal_destinations(sq("e2"));

    assert!(targets.is_empty(), "Blocked pawn cannot push, got {:?}", targets);
}

#[test]
fn test_pawn_double_push_blocked_on_landing_square() {
    let game = fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
    let targets = game.legal_destinations(sq("e2"));

    assert_eq!(targets.as_slice(), &[sq("e3")]);
}

#[test]
fn test_pawn_captures_diagonally() {
    let game = fen("4k3/8/8/3p1p2/4P3/8/8/4K3 w - - 0 1");
    let moves = game.generate_moves(Some(sq("e4")));

    assert!(has_move(&moves, "e4", "d5"));
    assert!(has_move(&moves, "e4", "f5"));
    assert!(has_move(&moves, "e4", "e5"));
    assert_eq!(moves.len(), 3);
}

#[test]
fn test_pawn_cannot_capture_own_piece_or_move_diagonally_to_empty() {
    let game = fen("4k3/8/8/3P4/4P3/8/8/4K3 w - - 0 1");
    assert!(!game.is_valid_move(sq("e4"), sq("d5"), None));
    assert!(!game.is_valid_move(sq("e4"), sq("f5"), None));
}

#[test]
fn test_pawn_cannot_move_backwards() {
    let game = fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
    assert!(!game.is_valid_move(sq("e4"), sq("e3"), None));
}

#[test]
fn test_black_pawn_moves_down() {
    let mut game = Game::default();
    play_all(&mut game, &["a2a3"]);
    let targets = game.legal_destinations(sq("d7"));

    assert!(targets.contains(&sq("d6")));
    assert!(targets.contains(&sq("d5")));
    assert_eq!(targets.len(), 2);
}

#[test]
fn test_pawn_capture_reports_capture() {
    let mut game = Game::default();
    play_all(&mut game, &["e2e4", "d7d5"]);

    let outcome = play(&mut game, "e4d5");
    assert!(outcome.accepted);
    assert!(outcome.captured);
    assert_eq!(game.board().get(sq("d5")), Piece::new(Color::White, Type::Pawn));
}
