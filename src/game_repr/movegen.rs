use log::trace;
use smallvec::SmallVec;

use super::*;

/// Legal destinations of one piece, promotion choices collapsed
pub type Destinations = SmallVec<[Square; 32]>;

impl Game {
    /// Every legal move for the side to move, or only those of the piece on
    /// `origin` when given. An origin that is empty, off the board or holds an
    /// opponent piece yields nothing. Each candidate goes through the same
    /// validation path as a submitted move, so the two can never disagree.
    pub fn generate_moves(&self, origin: Option<Square>) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        self.generate_moves_into(origin, &mut moves);
        trace!("Generated {} moves (origin {:?})", moves.len(), origin);
        moves
    }

    /// Same as [`Game::generate_moves`] but appends to a caller-owned buffer
    pub fn generate_moves_into(&self, origin: Option<Square>, moves: &mut Vec<Move>) {
        for from in self.origins(origin) {
            for (to, promo) in self.position().candidates(from) {
                let promotion = (!promo.is_none()).then_some(promo);
                if let Ok(mv) = self.validate(from, to, promotion) {
                    moves.push(mv);
                }
            }
        }
    }

    /// Squares the piece on `origin` may legally move to
    pub fn legal_destinations(&self, origin: Square) -> Destinations {
        let mut out = Destinations::new();
        for mv in self.generate_moves(Some(origin)) {
            if !out.contains(&mv.to) {
                out.push(mv.to);
            }
        }
        out
    }

    /// Stops at the first legal move found
    pub fn has_legal_moves(&self) -> bool {
        self.origins(None).into_iter().any(|from| {
            self.position()
                .candidates(from)
                .into_iter()
                .any(|(to, promo)| self.validate(from, to, (!promo.is_none()).then_some(promo)).is_ok())
        })
    }

    fn origins(&self, origin: Option<Square>) -> SmallVec<[Square; 16]> {
        let side = self.side_to_move();
        let board = self.board();
        match origin {
            Some(sq) if sq.is_on_board() && board.get(sq).is(side) => SmallVec::from_slice(&[sq]),
            Some(_) => SmallVec::new(),
            None => board
                .pieces()
                .filter(|(_, piece)| piece.color == side)
                .map(|(sq, _)| sq)
                .collect(),
        }
    }
}

/// Counts leaf nodes of the legal move tree to `depth` plies
pub fn perft(game: &mut Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = game.generate_moves(None);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let promotion = mv.is_promotion().then_some(mv.promotion);
        if game.apply_move(mv.from, mv.to, promotion, false).accepted {
            nodes += perft(game, depth - 1);
            game.undo();
        }
    }
    nodes
}
