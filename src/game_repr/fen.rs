use super::*;
use crate::config::TimeControl;
use crate::error::FenError;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Game {
    /// Builds a game from a FEN string with the default time control.
    ///
    /// Only the piece placement is mandatory. Missing trailing fields default
    /// to white to move, no castling, no en passant, counters 0 and 1.
    /// An en passant target is stored as the double push that created it.
    pub fn from_fen(fen: &str) -> Result<Game, FenError> {
        Self::from_fen_with(fen, TimeControl::default())
    }

    pub fn from_fen_with(fen: &str, time_control: TimeControl) -> Result<Game, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() || parts.len() > 6 {
            return Err(FenError::InvalidFen { fen: fen.to_string() });
        }

        let board = parse_placement(parts[0])?;
        if board.pieces().filter(|(_, p)| p.piece_type == Type::King).count() != 2
            || board.find_king(Color::White).is_none()
            || board.find_king(Color::Black).is_none()
        {
            return Err(FenError::MissingKing);
        }

        let white_turn = match parts.get(1).copied().unwrap_or("w") {
            "w" => true,
            "b" => false,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };
        let side = if white_turn { Color::White } else { Color::Black };

        let castling = parse_castling(parts.get(2).copied().unwrap_or("-"))?;
        let last_move = parse_en_passant(parts.get(3).copied().unwrap_or("-"), &board, side)?;
        let move_draw_count = parse_counter(parts.get(4).copied().unwrap_or("0"))?;
        let move_count = parse_counter(parts.get(5).copied().unwrap_or("1"))?.max(1);

        let mut state = GameState::new(time_control);
        state.position = Position {
            board,
            white_turn,
            castling,
            last_move,
        };
        state.move_draw_count = move_draw_count;
        state.move_count = move_count;

        Ok(Game::from_state(state, time_control))
    }

    pub fn to_fen(&self) -> String {
        let position = self.position();
        let mut fen = String::new();

        for (y, row) in position.board.rows().iter().enumerate().rev() {
            let mut empty = 0;
            for piece in row {
                if piece.is_none() {
                    empty += 1;
                    continue;
                }
                if empty > 0 {
                    fen.push_str(&empty.to_string());
                    empty = 0;
                }
                fen.push(piece.to_char());
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if y > 0 {
                fen.push('/');
            }
        }

        fen.push_str(if position.white_turn { " w " } else { " b " });

        let rights = position.castling;
        let mut castling = String::new();
        for (flag, c) in [
            (rights.white_short, 'K'),
            (rights.white_long, 'Q'),
            (rights.black_short, 'k'),
            (rights.black_long, 'q'),
        ] {
            if flag {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        fen.push_str(&castling);

        let last = position.last_move;
        if last.is_double_push() {
            let skipped = Square::new(last.to.x, (last.from.y + last.to.y) / 2);
            fen.push_str(&format!(" {}", skipped));
        } else {
            fen.push_str(" -");
        }

        fen.push_str(&format!(" {} {}", self.move_draw_count(), self.move_count()));
        fen
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::BadPlacement);
    }

    let mut board = Board::empty();
    for (i, rank) in ranks.iter().enumerate() {
        let y = 7 - i as i8;
        let mut x = 0i8;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::BadPlacement);
                }
                x += skip as i8;
            } else {
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece(c))?;
                let sq = Square::checked(x, y).ok_or(FenError::BadPlacement)?;
                board.set(sq, piece);
                x += 1;
            }
            if x > 8 {
                return Err(FenError::BadPlacement);
            }
        }
        if x != 8 {
            return Err(FenError::BadPlacement);
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        match c {
            'K' => rights.white_short = true,
            'Q' => rights.white_long = true,
            'k' => rights.black_short = true,
            'q' => rights.black_long = true,
            _ => return Err(FenError::InvalidCastling(field.to_string())),
        }
    }
    Ok(rights)
}

/// Turns the en passant target into the double push that produced it.
/// The pushed pawn must actually stand beyond the target square.
fn parse_en_passant(field: &str, board: &Board, side_to_move: Color) -> Result<Move, FenError> {
    if field == "-" {
        return Ok(Move::initial());
    }
    let invalid = || FenError::InvalidEnPassant(field.to_string());

    let target = Square::from_algebraic(field).ok_or_else(invalid)?;
    let pusher = side_to_move.opposite();
    let dir = pusher.forward();
    if target.y != pusher.pawn_rank() + dir {
        return Err(invalid());
    }

    let from = Square::new(target.x, target.y - dir);
    let to = Square::new(target.x, target.y + dir);
    let pawn = Piece::new(pusher, Type::Pawn);
    if board.get(to) != pawn || !board.is_empty(target) || !board.is_empty(from) {
        return Err(invalid());
    }
    Ok(Move::new(from, to, pawn, Piece::none()))
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    field
        .parse::<u32>()
        .map_err(|_| FenError::InvalidCounter(field.to_string()))
}
