use crate::game_repr::{Candidates, Color, Piece, Position, Square, Type};

impl Position {
    pub(crate) fn pawn_is_valid(&self, from: Square, to: Square, color: Color, promotion: Piece) -> bool {
        let dir = color.forward();
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        let geometry_ok = if dx == 0 && dy == dir {
            self.board.is_empty(to)
        } else if dx == 0 && dy == 2 * dir {
            from.y == color.pawn_rank()
                && self.board.is_empty(Square::new(from.x, from.y + dir))
                && self.board.is_empty(to)
        } else if dx.abs() == 1 && dy == dir {
            self.board.get(to).is_enemy_of(color) || self.en_passant_allowed(from, to, color)
        } else {
            false
        };

        if !geometry_ok {
            return false;
        }

        if to.y == color.last_rank() {
            promotion.is(color) && promotion.piece_type.is_promotion_target()
        } else {
            true
        }
    }

    /// The previous move was a double push by an enemy pawn that now stands
    /// beside `from`, and `to` is the square it skipped over
    fn en_passant_allowed(&self, from: Square, to: Square, color: Color) -> bool {
        let last = &self.last_move;
        last.is_double_push()
            && last.moved_piece.color != color
            && last.to.y == from.y
            && (last.to.x - from.x).abs() == 1
            && to.x == last.to.x
            && self.board.is_empty(to)
            && self.board.get(last.to) == last.moved_piece
    }

    pub(crate) fn pawn_targets(&self, from: Square, color: Color, out: &mut Candidates) {
        let dir = color.forward();
        let steps = [(0, dir), (0, 2 * dir), (-1, dir), (1, dir)];

        for to in steps.iter().filter_map(|&(dx, dy)| from.offset(dx, dy)) {
            if to.y == color.last_rank() {
                for piece_type in Type::PROMOTIONS {
                    out.push((to, Piece::new(color, piece_type)));
                }
            } else {
                out.push((to, Piece::none()));
            }
        }
    }
}
