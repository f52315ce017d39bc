use super::*;
use crate::config::TimeControl;
use crate::error::{FenError, IllegalMove};

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create a state with an empty board, white to move and no castling rights
pub fn empty_board() -> GameState {
    let mut state = GameState::default();
    state.position.board = Board::empty();
    state.position.castling = CastlingRights::none();
    state
}

/// Helper function to place a piece
pub fn place_piece(state: &mut GameState, square: &str, piece: Piece) {
    state.position.board.set(sq(square), piece);
}

/// Helper function to turn a prepared state into a playable game
pub fn game_from(state: GameState) -> Game {
    Game::from_state(state, TimeControl::default())
}

/// Helper function to load a FEN that is known to be valid
pub fn fen(fen: &str) -> Game {
    Game::from_fen(fen).unwrap()
}

pub fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

/// Helper function to play a move in coordinate notation, e.g. `e7e8q`
pub fn play(game: &mut Game, text: &str) -> MoveOutcome {
    let (from, to, promotion) = parse_coordinate_move(text).unwrap();
    let promotion = promotion.map(|t| Piece::new(game.side_to_move(), t));
    game.apply_move(from, to, promotion, false)
}

/// Helper function to play a sequence of moves that must all be accepted
pub fn play_all(game: &mut Game, moves: &[&str]) {
    for text in moves {
        assert!(play(game, text).accepted, "{} should be legal", text);
    }
}

// ==================== TEST MODULES ====================

mod attacks;
mod fen_parsing;
mod pawn_movement;
mod perft;
