use super::*;

const ROOK_ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const PROMOTION_HEAVY: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
const TALKCHESS: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

#[test]
fn test_perft_rook_endgame() {
    let mut game = fen(ROOK_ENDGAME);
    assert_eq!(perft(&mut game, 1), 14);
    assert_eq!(perft(&mut game, 2), 191);
    assert_eq!(perft(&mut game, 3), 2812);
}

#[test]
fn test_perft_promotion_heavy() {
    let mut game = fen(PROMOTION_HEAVY);
    assert_eq!(perft(&mut game, 1), 6);
    assert_eq!(perft(&mut game, 2), 264);
}

#[test]
fn test_perft_talkchess() {
    let mut game = fen(TALKCHESS);
    assert_eq!(perft(&mut game, 1), 44);
    assert_eq!(perft(&mut game, 2), 1486);
}
