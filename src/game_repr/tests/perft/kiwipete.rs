use super::*;

// Kiwipete: castling both ways, en passant, promotions and pins in one position

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

#[test]
fn test_perft_kiwipete_depth_1() {
    let mut game = fen(KIWIPETE);
    assert_eq!(perft(&mut game, 1), 48);
}

#[test]
fn test_perft_kiwipete_depth_2() {
    let mut game = fen(KIWIPETE);
    assert_eq!(perft(&mut game, 2), 2039);
}
