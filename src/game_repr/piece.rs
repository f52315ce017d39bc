#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    None,
}

impl Type {
    /// Pieces a pawn may turn into on the last rank
    pub const PROMOTIONS: [Type; 4] = [Type::Queen, Type::Rook, Type::Knight, Type::Bishop];

    pub fn is_minor(&self) -> bool {
        matches!(self, Type::Knight | Type::Bishop)
    }

    pub fn is_promotion_target(&self) -> bool {
        Self::PROMOTIONS.contains(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Rank direction pawns of this color advance in
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// Rank holding this color's king and rooks at the start
    pub fn home_rank(&self) -> i8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    /// Rank holding this color's pawns at the start
    pub fn pawn_rank(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => 6,
        }
    }

    /// Rank on which this color's pawns must promote
    pub fn last_rank(&self) -> i8 {
        self.opposite().home_rank()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Default for Piece {
    fn default() -> Self {
        Self::none()
    }
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    pub const fn none() -> Self {
        Self {
            color: Color::White,
            piece_type: Type::None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    /// Occupied by a piece of `color`
    pub fn is(&self, color: Color) -> bool {
        !self.is_none() && self.color == color
    }

    /// Occupied by a piece of the opposite color
    pub fn is_enemy_of(&self, color: Color) -> bool {
        self.is(color.opposite())
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        let piece_type = match c.to_ascii_lowercase() {
            'k' => Type::King,
            'q' => Type::Queen,
            'r' => Type::Rook,
            'b' => Type::Bishop,
            'n' => Type::Knight,
            'p' => Type::Pawn,
            _ => return None,
        };
        Some(Self { color, piece_type })
    }

    pub fn to_char(&self) -> char {
        let c = match self.piece_type {
            Type::King => 'k',
            Type::Queen => 'q',
            Type::Rook => 'r',
            Type::Bishop => 'b',
            Type::Knight => 'n',
            Type::Pawn => 'p',
            Type::None => return '.',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Stable one-byte code used by the snapshot payload.
    /// 0 = empty, 1..=6 white K Q R N B P, 7..=12 black in the same order.
    pub fn code(&self) -> u8 {
        let base = match self.piece_type {
            Type::None => return 0,
            Type::King => 1,
            Type::Queen => 2,
            Type::Rook => 3,
            Type::Knight => 4,
            Type::Bishop => 5,
            Type::Pawn => 6,
        };
        match self.color {
            Color::White => base,
            Color::Black => base + 6,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        if code == 0 {
            return Some(Self::none());
        }
        if code > 12 {
            return None;
        }
        let color = if code <= 6 { Color::White } else { Color::Black };
        let piece_type = match (code - 1) % 6 {
            0 => Type::King,
            1 => Type::Queen,
            2 => Type::Rook,
            3 => Type::Knight,
            4 => Type::Bishop,
            _ => Type::Pawn,
        };
        Some(Self { color, piece_type })
    }
}
