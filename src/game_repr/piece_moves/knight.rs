use crate::game_repr::{Candidates, Position, Square, KNIGHT_OFFSETS};

impl Position {
    pub(crate) fn knight_is_valid(&self, from: Square, to: Square) -> bool {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        (dx == 1 && dy == 2) || (dx == 2 && dy == 1)
    }

    pub(crate) fn knight_targets(&self, from: Square, out: &mut Candidates) {
        self.offset_targets(from, &KNIGHT_OFFSETS, out);
    }
}
