use smallvec::SmallVec;

use super::*;

/*
 * RULES STATE: BOARD PLUS THE FLAGS LEGALITY DEPENDS ON
 */

/// Destination squares a piece could reach by geometry alone, each with the
/// promotion piece to try (`Piece::none()` for ordinary moves)
pub type Candidates = SmallVec<[(Square, Piece); 32]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub white_turn: bool,
    pub castling: CastlingRights,
    /// Last applied move, used for en passant
    pub last_move: Move,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: Board::starting(),
            white_turn: true,
            castling: CastlingRights::all(),
            last_move: Move::initial(),
        }
    }
}

impl Position {
    pub fn side_to_move(&self) -> Color {
        if self.white_turn {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        king_attacked(&self.board, color)
    }

    /// Pseudo-legality of `from -> to`: geometry, occupancy, en passant,
    /// castling conditions and promotion choice. Self-check is not considered.
    /// `promotion` must already be resolved by the caller (`Piece::none()` when not promoting).
    pub fn is_valid_move(&self, from: Square, to: Square, promotion: Piece) -> bool {
        if !from.is_on_board() || !to.is_on_board() || from == to {
            return false;
        }
        let piece = self.board.get(from);
        if piece.is_none() || self.board.get(to).is(piece.color) {
            return false;
        }

        match piece.piece_type {
            Type::Pawn => self.pawn_is_valid(from, to, piece.color, promotion),
            Type::Knight => self.knight_is_valid(from, to),
            Type::Bishop => self.bishop_is_valid(from, to),
            Type::Rook => self.rook_is_valid(from, to),
            Type::Queen => self.queen_is_valid(from, to),
            Type::King => self.king_is_valid(from, to, piece.color),
            Type::None => false,
        }
    }

    /// Geometric candidates for the piece on `from`, to be filtered through full validation
    pub fn candidates(&self, from: Square) -> Candidates {
        let mut out = Candidates::new();
        let piece = self.board.get(from);

        match piece.piece_type {
            Type::Pawn => self.pawn_targets(from, piece.color, &mut out),
            Type::Knight => self.knight_targets(from, &mut out),
            Type::Bishop => self.bishop_targets(from, &mut out),
            Type::Rook => self.rook_targets(from, &mut out),
            Type::Queen => self.queen_targets(from, &mut out),
            Type::King => self.king_targets(from, piece.color, &mut out),
            Type::None => {}
        }

        out
    }

    /// Walks each direction from `from` up to and including the first occupied square
    pub(crate) fn ray_targets(&self, from: Square, dirs: &[(i8, i8)], out: &mut Candidates) {
        for &(dx, dy) in dirs {
            let mut cursor = from.offset(dx, dy);
            while let Some(sq) = cursor {
                out.push((sq, Piece::none()));
                if !self.board.is_empty(sq) {
                    break;
                }
                cursor = sq.offset(dx, dy);
            }
        }
    }

    /// Pushes every on-board square at the given offsets
    pub(crate) fn offset_targets(&self, from: Square, offsets: &[(i8, i8)], out: &mut Candidates) {
        out.extend(
            offsets
                .iter()
                .filter_map(|&(dx, dy)| from.offset(dx, dy))
                .map(|sq| (sq, Piece::none())),
        );
    }
}
