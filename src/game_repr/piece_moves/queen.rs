use crate::game_repr::{Candidates, Position, Square};

impl Position {
    pub(crate) fn queen_is_valid(&self, from: Square, to: Square) -> bool {
        self.bishop_is_valid(from, to) || self.rook_is_valid(from, to)
    }

    pub(crate) fn queen_targets(&self, from: Square, out: &mut Candidates) {
        self.bishop_targets(from, out);
        self.rook_targets(from, out);
    }
}
