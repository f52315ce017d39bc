use super::*;

// ==================== ATTACK DETECTION TESTS ====================

#[test]
fn test_pawn_attacks_only_forward() {
    let mut state = empty_board();
    place_piece(&mut state, "e4", Piece::new(Color::White, Type::Pawn));
    place_piece(&mut state, "d6", Piece::new(Color::Black, Type::Pawn));
    let board = state.position.board;

    assert!(square_attacked(&board, sq("d5")).white);
    assert!(square_attacked(&board, sq("f5")).white);
    assert!(!square_attacked(&board, sq("d3")).white, "White pawns do not attack backwards");
    assert!(!square_attacked(&board, sq("e5")).white, "Pawns do not attack straight ahead");

    assert!(square_attacked(&board, sq("c5")).black);
    assert!(square_attacked(&board, sq("e5")).black);
    assert!(!square_attacked(&board, sq("c7")).black);
}

#[test]
fn test_slider_blocked_by_first_piece() {
    let mut state = empty_board();
    place_piece(&mut state, "a1", Piece::new(Color::White, Type::Rook));
    place_piece(&mut state, "a4", Piece::new(Color::Black, Type::Knight));
    let board = state.position.board;

    assert!(square_attacked(&board, sq("a3")).white);
    assert!(square_attacked(&board, sq("a4")).white);
    assert!(!square_attacked(&board, sq("a5")).white);
    assert!(square_attacked(&board, sq("h1")).white);
}

#[test]
fn test_bishop_and_rook_lines() {
    let mut state = empty_board();
    place_piece(&mut state, "c1", Piece::new(Color::Black, Type::Bishop));
    let board = state.position.board;

    assert!(square_attacked(&board, sq("h6")).black);
    assert!(!square_attacked(&board, sq("c2")).black, "Bishops do not attack along files");
    assert!(!square_attacked(&board, sq("c2")).white);
}

#[test]
fn test_knight_jumps_over_pieces() {
    let mut state = empty_board();
    place_piece(&mut state, "g1", Piece::new(Color::White, Type::Knight));
    place_piece(&mut state, "g2", Piece::new(Color::White, Type::Pawn));
    place_piece(&mut state, "f2", Piece::new(Color::White, Type::Pawn));
    let board = state.position.board;

    assert!(square_attacked(&board, sq("f3")).white);
    assert!(square_attacked(&board, sq("h3")).white);
    assert!(square_attacked(&board, sq("e2")).white);
    assert!(!square_attacked(&board, sq("g3")).white);
}

#[test]
fn test_king_attacks_adjacent_only() {
    let mut state = empty_board();
    place_piece(&mut state, "e8", Piece::new(Color::Black, Type::King));
    let board = state.position.board;

    assert!(square_attacked(&board, sq("d7")).black);
    assert!(square_attacked(&board, sq("f8")).black);
    assert!(!square_attacked(&board, sq("e6")).black);
}

#[test]
fn test_both_colors_reported() {
    let mut state = empty_board();
    place_piece(&mut state, "d1", Piece::new(Color::White, Type::Queen));
    place_piece(&mut state, "d8", Piece::new(Color::Black, Type::Rook));
    let attackers = square_attacked(&state.position.board, sq("d4"));

    assert_eq!(attackers, Attackers { white: true, black: true });
}

#[test]
fn test_king_attacked_without_king_is_false() {
    let mut state = empty_board();
    place_piece(&mut state, "d1", Piece::new(Color::White, Type::Queen));
    assert!(!king_attacked(&state.position.board, Color::Black));
}

#[test]
fn test_attacks_after_early_queen_sortie() {
    let mut game = Game::default();
    play_all(&mut game, &["e2e4", "e7e5", "d1h5"]);
    let board = game.board();

    assert_eq!(square_attacked(board, sq("f7")), Attackers { white: true, black: true });
    assert_eq!(square_attacked(board, sq("e5")), Attackers { white: true, black: false });
    assert!(square_attacked(board, sq("h7")).white);
    assert!(square_attacked(board, sq("g6")).white);
    assert!(!square_attacked(board, sq("h5")).black, "Nothing defends against the queen");
    assert!(!game.is_in_check());
}
