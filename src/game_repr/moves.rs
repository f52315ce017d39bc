use std::fmt;

use super::{Piece, Type};

/// A board coordinate: `x` is the file (0 = a), `y` the rank (0 = white's back rank)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub x: i8,
    pub y: i8,
}

impl Square {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Returns `None` for coordinates off the board
    pub fn checked(x: i8, y: i8) -> Option<Self> {
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Self { x, y })
        } else {
            None
        }
    }

    pub fn is_on_board(&self) -> bool {
        Self::checked(self.x, self.y).is_some()
    }

    /// Square shifted by `(dx, dy)`; never wraps around an edge
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Self> {
        Self::checked(self.x + dx, self.y + dy)
    }

    /// a1 is dark, so a square is light when file + rank is odd
    pub fn is_light(&self) -> bool {
        (self.x + self.y) % 2 == 1
    }

    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Self::new((file - b'a') as i8, (rank - b'1') as i8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.x, self.y);
        }
        write!(f, "{}{}", (b'a' + self.x as u8) as char, self.y + 1)
    }
}

/// A move that was applied, or a candidate under validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Piece the pawn turns into, `Piece::none()` when not a promotion
    pub promotion: Piece,
    pub moved_piece: Piece,
    /// Marks "no move has been played yet"
    pub initial: bool,
}

impl Default for Move {
    fn default() -> Self {
        Self::initial()
    }
}

impl Move {
    pub fn new(from: Square, to: Square, moved_piece: Piece, promotion: Piece) -> Self {
        Self {
            from,
            to,
            promotion,
            moved_piece,
            initial: false,
        }
    }

    pub fn initial() -> Self {
        Self {
            from: Square::new(0, 0),
            to: Square::new(0, 0),
            promotion: Piece::none(),
            moved_piece: Piece::none(),
            initial: true,
        }
    }

    pub fn is_promotion(&self) -> bool {
        !self.promotion.is_none()
    }

    /// A pawn advanced two ranks with this move
    pub fn is_double_push(&self) -> bool {
        !self.initial
            && self.moved_piece.piece_type == Type::Pawn
            && (self.to.y - self.from.y).abs() == 2
    }

    pub fn is_castle(&self) -> bool {
        !self.initial
            && self.moved_piece.piece_type == Type::King
            && self.from.y == self.to.y
            && (self.to.x - self.from.x).abs() == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.initial {
            return write!(f, "-");
        }
        write!(f, "{}{}", self.from, self.to)?;
        if self.is_promotion() {
            write!(f, "{}", self.promotion.to_char().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

/// Parses coordinate notation such as `e2e4` or `e7e8q`.
/// The promotion letter is returned as a piece type; color is decided by the mover.
pub fn parse_coordinate_move(s: &str) -> Option<(Square, Square, Option<Type>)> {
    let s = s.trim();
    if !s.is_ascii() || !(4..=5).contains(&s.len()) {
        return None;
    }
    let from = Square::from_algebraic(&s[0..2])?;
    let to = Square::from_algebraic(&s[2..4])?;
    let promotion = match s[4..].chars().next() {
        None => None,
        Some(c) => {
            let piece = Piece::from_char(c)?;
            if !piece.piece_type.is_promotion_target() {
                return None;
            }
            Some(piece.piece_type)
        }
    };
    Some((from, to, promotion))
}
