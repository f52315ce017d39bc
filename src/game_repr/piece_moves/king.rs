use crate::game_repr::{square_attacked, Candidates, Color, Piece, Position, Square, Type, KING_OFFSETS};

/// File the king starts on
const KING_FILE: i8 = 4;

impl Position {
    pub(crate) fn king_is_valid(&self, from: Square, to: Square, color: Color) -> bool {
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        if dx.abs().max(dy.abs()) == 1 {
            return true;
        }

        if dy == 0 && dx.abs() == 2 {
            return self.castle_is_valid(from, dx > 0, color);
        }

        false
    }

    /// Castling rights, own rook in its corner, empty squares between king and
    /// rook, and no attacked square on the king's path (its origin included).
    fn castle_is_valid(&self, from: Square, short: bool, color: Color) -> bool {
        if from != Square::new(KING_FILE, color.home_rank()) {
            return false;
        }

        let has_right = if short {
            self.castling.short(color)
        } else {
            self.castling.long(color)
        };
        if !has_right {
            return false;
        }

        let rook_sq = Square::new(if short { 7 } else { 0 }, from.y);
        if self.board.get(rook_sq) != Piece::new(color, Type::Rook) {
            return false;
        }
        if !self.board.path_clear(from, rook_sq) {
            return false;
        }

        let dir = if short { 1 } else { -1 };
        let opponent = color.opposite();
        (0..=2)
            .map(|step| Square::new(from.x + dir * step, from.y))
            .all(|sq| !square_attacked(&self.board, sq).by(opponent))
    }

    pub(crate) fn king_targets(&self, from: Square, color: Color, out: &mut Candidates) {
        self.offset_targets(from, &KING_OFFSETS, out);

        if from == Square::new(KING_FILE, color.home_rank()) {
            out.push((Square::new(KING_FILE + 2, from.y), Piece::none()));
            out.push((Square::new(KING_FILE - 2, from.y), Piece::none()));
        }
    }
}
