use super::*;

pub const DIAGONALS: [(i8, i8); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Which sides attack a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attackers {
    pub white: bool,
    pub black: bool,
}

impl Attackers {
    pub fn by(&self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn mark(&mut self, color: Color) {
        match color {
            Color::White => self.white = true,
            Color::Black => self.black = true,
        }
    }
}

/// Does the first piece met on a ray attack back along it?
/// `distance` counts empty squares crossed before reaching the piece.
fn ray_attacker(piece: Piece, distance: u8, dir: (i8, i8), diagonal: bool) -> bool {
    match piece.piece_type {
        Type::Queen => true,
        Type::Bishop => diagonal,
        Type::Rook => !diagonal,
        Type::King => distance == 0,
        // a pawn attacks forward, so it must stand behind the square from its own point of view
        Type::Pawn => diagonal && distance == 0 && dir.1 == -piece.color.forward(),
        Type::Knight | Type::None => false,
    }
}

/// Reports whether white and/or black attack `sq` on `board`.
/// Sliders are found by walking the eight rays until the first occupied square,
/// knights by probing their eight offsets directly.
pub fn square_attacked(board: &Board, sq: Square) -> Attackers {
    let mut result = Attackers::default();

    let rays = DIAGONALS
        .iter()
        .map(|&d| (d, true))
        .chain(ORTHOGONALS.iter().map(|&d| (d, false)));

    for (dir, diagonal) in rays {
        let mut distance = 0u8;
        let mut cursor = sq.offset(dir.0, dir.1);
        while let Some(at) = cursor {
            let piece = board.get(at);
            if !piece.is_none() {
                if ray_attacker(piece, distance, dir, diagonal) {
                    result.mark(piece.color);
                }
                break;
            }
            distance += 1;
            cursor = at.offset(dir.0, dir.1);
        }
    }

    for &(dx, dy) in &KNIGHT_OFFSETS {
        if let Some(at) = sq.offset(dx, dy) {
            let piece = board.get(at);
            if piece.piece_type == Type::Knight {
                result.mark(piece.color);
            }
        }
    }

    result
}

/// True when `color`'s king stands on an attacked square.
/// A board without that king is never in check.
pub fn king_attacked(board: &Board, color: Color) -> bool {
    board
        .find_king(color)
        .map_or(false, |king| square_attacked(board, king).by(color.opposite()))
}
