use crate::game_repr::{Candidates, Position, Square, DIAGONALS};

impl Position {
    pub(crate) fn bishop_is_valid(&self, from: Square, to: Square) -> bool {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        dx == dy && dx != 0 && self.board.path_clear(from, to)
    }

    pub(crate) fn bishop_targets(&self, from: Square, out: &mut Candidates) {
        self.ray_targets(from, &DIAGONALS, out);
    }
}
