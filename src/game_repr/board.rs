use std::fmt;
use std::ops::{Index, IndexMut};

use super::*;

/// 8x8 grid of pieces stored as `[rank][file]`, rank 0 being white's back rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Piece; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[Piece::none(); 8]; 8],
        }
    }

    /// The standard starting array
    pub fn starting() -> Self {
        let back_rank = [
            Type::Rook,
            Type::Knight,
            Type::Bishop,
            Type::Queen,
            Type::King,
            Type::Bishop,
            Type::Knight,
            Type::Rook,
        ];
        let mut board = Self::empty();
        for (x, &piece_type) in back_rank.iter().enumerate() {
            board.squares[0][x] = Piece::new(Color::White, piece_type);
            board.squares[1][x] = Piece::new(Color::White, Type::Pawn);
            board.squares[6][x] = Piece::new(Color::Black, Type::Pawn);
            board.squares[7][x] = Piece::new(Color::Black, piece_type);
        }
        board
    }

    pub fn from_rows(squares: [[Piece; 8]; 8]) -> Self {
        Self { squares }
    }

    pub fn rows(&self) -> &[[Piece; 8]; 8] {
        &self.squares
    }

    /// `sq` must be on the board.
    pub fn get(&self, sq: Square) -> Piece {
        debug_assert!(sq.is_on_board(), "{:?} is off the board", sq);
        self.squares[sq.y as usize][sq.x as usize]
    }

    /// `sq` must be on the board.
    pub fn set(&mut self, sq: Square, piece: Piece) {
        debug_assert!(sq.is_on_board(), "{:?} is off the board", sq);
        self.squares[sq.y as usize][sq.x as usize] = piece;
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Iterates over every occupied square
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8i8).flat_map(move |y| {
            (0..8i8).filter_map(move |x| {
                let sq = Square::new(x, y);
                let piece = self.get(sq);
                (!piece.is_none()).then_some((sq, piece))
            })
        })
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.piece_type == Type::King)
            .map(|(sq, _)| sq)
    }

    /// True when every square strictly between `from` and `to` is empty.
    /// Only meaningful for squares sharing a rank, file or diagonal.
    pub fn path_clear(&self, from: Square, to: Square) -> bool {
        let dx = (to.x - from.x).signum();
        let dy = (to.y - from.y).signum();
        let mut sq = from;
        loop {
            sq = match sq.offset(dx, dy) {
                Some(next) => next,
                None => return false,
            };
            if sq == to {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
        }
    }

    /// Board after `mv` with all of its board-level effects: capture,
    /// en passant removal, castling rook relocation and promotion.
    /// The receiver is left untouched.
    pub fn after_move(&self, mv: &Move) -> Board {
        let mut next = *self;
        let piece = self.get(mv.from);

        match piece.piece_type {
            Type::Pawn if mv.from.x != mv.to.x && self.is_empty(mv.to) => {
                // en passant: the captured pawn sits beside the mover
                next.set(Square::new(mv.to.x, mv.from.y), Piece::none());
            }
            Type::King if (mv.to.x - mv.from.x).abs() == 2 => {
                let (rook_from, rook_to) = if mv.to.x > mv.from.x {
                    (Square::new(7, mv.from.y), Square::new(mv.to.x - 1, mv.from.y))
                } else {
                    (Square::new(0, mv.from.y), Square::new(mv.to.x + 1, mv.from.y))
                };
                next.set(rook_to, self.get(rook_from));
                next.set(rook_from, Piece::none());
            }
            _ => {}
        }

        let placed = if piece.piece_type == Type::Pawn && !mv.promotion.is_none() {
            mv.promotion
        } else {
            piece
        };
        next.set(mv.to, placed);
        next.set(mv.from, Piece::none());
        next
    }
}

impl Index<Square> for Board {
    type Output = Piece;

    fn index(&self, sq: Square) -> &Piece {
        debug_assert!(sq.is_on_board(), "{:?} is off the board", sq);
        &self.squares[sq.y as usize][sq.x as usize]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Piece {
        debug_assert!(sq.is_on_board(), "{:?} is off the board", sq);
        &mut self.squares[sq.y as usize][sq.x as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..8).rev() {
            write!(f, "{} ", y + 1)?;
            for x in 0..8 {
                write!(f, " {}", self.squares[y][x].to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Castling availability. Each flag only ever goes from true to false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_long: bool,
    pub white_short: bool,
    pub black_long: bool,
    pub black_short: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            white_long: true,
            white_short: true,
            black_long: true,
            black_short: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_long: false,
            white_short: false,
            black_long: false,
            black_short: false,
        }
    }

    pub fn long(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_long,
            Color::Black => self.black_long,
        }
    }

    pub fn short(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_short,
            Color::Black => self.black_short,
        }
    }

    /// The king moved: both rights of that side are gone
    pub fn clear_side(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_long = false;
                self.white_short = false;
            }
            Color::Black => {
                self.black_long = false;
                self.black_short = false;
            }
        }
    }

    /// A rook left (or was captured on) `sq`; clears the right tied to that corner
    pub fn clear_corner(&mut self, sq: Square) {
        match (sq.x, sq.y) {
            (0, 0) => self.white_long = false,
            (7, 0) => self.white_short = false,
            (0, 7) => self.black_long = false,
            (7, 7) => self.black_short = false,
            _ => {}
        }
    }
}
