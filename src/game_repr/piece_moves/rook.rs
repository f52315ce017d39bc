use crate::game_repr::{Candidates, Position, Square, ORTHOGONALS};

impl Position {
    pub(crate) fn rook_is_valid(&self, from: Square, to: Square) -> bool {
        let same_file = from.x == to.x && from.y != to.y;
        let same_rank = from.y == to.y && from.x != to.x;
        (same_file || same_rank) && self.board.path_clear(from, to)
    }

    pub(crate) fn rook_targets(&self, from: Square, out: &mut Candidates) {
        self.ray_targets(from, &ORTHOGONALS, out);
    }
}
