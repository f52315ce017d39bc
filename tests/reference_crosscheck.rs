//! Cross-checks the legal move generator against the `chess` crate.
//!
//! Both engines walk the same deterministic playout from a handful of
//! well-known positions and must agree on the full legal move list at every ply.

use std::str::FromStr;

use chess_referee::game_repr::{Game, Move};

type MoveKey = (i8, i8, i8, i8, char);

const POSITIONS: [&str; 5] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
];

const PLIES: usize = 60;

fn our_key(mv: &Move) -> MoveKey {
    let promotion = if mv.is_promotion() {
        mv.promotion.to_char().to_ascii_lowercase()
    } else {
        ' '
    };
    (mv.from.x, mv.from.y, mv.to.x, mv.to.y, promotion)
}

fn reference_key(mv: &chess::ChessMove) -> MoveKey {
    let promotion = match mv.get_promotion() {
        Some(chess::Piece::Queen) => 'q',
        Some(chess::Piece::Rook) => 'r',
        Some(chess::Piece::Bishop) => 'b',
        Some(chess::Piece::Knight) => 'n',
        Some(_) => '?',
        None => ' ',
    };
    let (from, to) = (mv.get_source(), mv.get_dest());
    (
        from.get_file().to_index() as i8,
        from.get_rank().to_index() as i8,
        to.get_file().to_index() as i8,
        to.get_rank().to_index() as i8,
        promotion,
    )
}

fn run_playout(fen: &str) {
    let mut game = Game::from_fen(fen).unwrap();
    let mut reference = chess::Board::from_str(fen).unwrap();

    for ply in 0..PLIES {
        let ours = game.generate_moves(None);
        let theirs: Vec<chess::ChessMove> = chess::MoveGen::new_legal(&reference).collect();

        let mut our_keys: Vec<MoveKey> = ours.iter().map(our_key).collect();
        let mut their_keys: Vec<MoveKey> = theirs.iter().map(reference_key).collect();
        our_keys.sort();
        their_keys.sort();
        assert_eq!(our_keys, their_keys, "move lists differ at ply {} of {}\n{}", ply, fen, game.to_fen());

        if ours.is_empty() {
            break;
        }

        let pick = ours[(ply * 13 + 7) % ours.len()];
        let key = our_key(&pick);
        let Some(reference_move) = theirs.iter().find(|m| reference_key(m) == key) else {
            panic!("reference engine is missing {}", pick);
        };

        let promotion = pick.is_promotion().then_some(pick.promotion);
        assert!(game.apply_move(pick.from, pick.to, promotion, false).accepted);
        reference = reference.make_move_new(*reference_move);

        // draws declared by the referee end the comparison
        if game.winner().is_over() {
            break;
        }
    }
}

#[test]
fn test_start_position_playout() {
    run_playout(POSITIONS[0]);
}

#[test]
fn test_kiwipete_playout() {
    run_playout(POSITIONS[1]);
}

#[test]
fn test_rook_endgame_playout() {
    run_playout(POSITIONS[2]);
}

#[test]
fn test_promotion_position_playout() {
    run_playout(POSITIONS[3]);
}

#[test]
fn test_talkchess_playout() {
    run_playout(POSITIONS[4]);
}

#[test]
fn test_first_ply_of_every_position() {
    for fen in POSITIONS {
        let game = Game::from_fen(fen).unwrap();
        let reference = chess::Board::from_str(fen).unwrap();
        assert_eq!(
            game.generate_moves(None).len(),
            chess::MoveGen::new_legal(&reference).len(),
            "{}",
            fen
        );
    }
}
