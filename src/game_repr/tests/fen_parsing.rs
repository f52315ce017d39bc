// FEN Parsing Tests
//
// FEN (Forsyth-Edwards Notation) is the textual position format used by the
// command-line referee and by most of the fixtures in this module.

use super::*;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

// ==================== FEN PARSING TEST ====================

#[test]
fn test_default_position_from_fen() {
    let game = fen(STARTING_FEN);

    assert_eq!(*game.position(), Position::default());
    assert_eq!(game.board().get(sq("a1")), Piece::new(Color::White, Type::Rook));
    assert_eq!(game.board().get(sq("e1")), Piece::new(Color::White, Type::King));
    assert_eq!(game.board().get(sq("e8")), Piece::new(Color::Black, Type::King));

    for x in 0..8 {
        assert_eq!(game.board().get(Square::new(x, 1)), Piece::new(Color::White, Type::Pawn));
        assert_eq!(game.board().get(Square::new(x, 6)), Piece::new(Color::Black, Type::Pawn));
    }
}

#[test]
fn test_custom_fen_position() {
    let game = fen("4k3/8/8/8/8/8/8/4K3");

    assert_eq!(game.board().pieces().count(), 2);
    assert!(game.white_turn());
    assert_eq!(game.castling(), CastlingRights::none());
    assert_eq!(game.move_count(), 1);
}

#[test]
fn test_fields_are_read() {
    let game = fen("4k3/8/8/8/8/8/8/4K2R b K - 12 34");

    assert!(!game.white_turn());
    assert!(game.castling().white_short);
    assert!(!game.castling().white_long);
    assert_eq!(game.move_draw_count(), 12);
    assert_eq!(game.move_count(), 34);
}

// ==================== FEN EXPORT TESTS ====================

#[test]
fn test_starting_position_to_fen() {
    assert_eq!(Game::default().to_fen(), STARTING_FEN);
}

#[test]
fn test_fen_round_trip() {
    for text in [
        STARTING_FEN,
        KIWIPETE,
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1",
        "r3k3/8/8/8/8/8/8/4K3 b q - 5 40",
    ] {
        assert_eq!(fen(text).to_fen(), text);
    }
}

#[test]
fn test_fen_after_double_push() {
    let mut game = Game::default();
    play_all(&mut game, &["e2e4"]);

    assert_eq!(
        game.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

// ==================== FEN ERROR TESTS ====================

#[test]
fn test_invalid_fen_errors() {
    assert_eq!(Game::from_fen("").unwrap_err(), FenError::InvalidFen { fen: String::new() });
    assert_eq!(
        Game::from_fen("4k3/8/8/8/8/8/8/4X3 w - - 0 1").unwrap_err(),
        FenError::InvalidPiece('X')
    );
    assert_eq!(
        Game::from_fen("4k3/8/8/8/8/8/4K3 w - - 0 1").unwrap_err(),
        FenError::BadPlacement
    );
    assert_eq!(
        Game::from_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1").unwrap_err(),
        FenError::BadPlacement
    );
    assert_eq!(
        Game::from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").unwrap_err(),
        FenError::InvalidSideToMove("x".to_string())
    );
    assert_eq!(
        Game::from_fen("4k3/8/8/8/8/8/8/4K3 w KX - 0 1").unwrap_err(),
        FenError::InvalidCastling("KX".to_string())
    );
    assert_eq!(
        Game::from_fen("4k3/8/8/8/8/8/8/4K3 w - e4 0 1").unwrap_err(),
        FenError::InvalidEnPassant("e4".to_string())
    );
    assert_eq!(
        Game::from_fen("4k3/8/8/8/8/8/8/4K3 w - - -1 1").unwrap_err(),
        FenError::InvalidCounter("-1".to_string())
    );
    assert_eq!(
        Game::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap_err(),
        FenError::MissingKing
    );
}
