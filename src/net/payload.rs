use bytemuck::{Pod, Zeroable};

use crate::error::SnapshotError;
use crate::game_repr::{CastlingRights, ChessClock, GameState, Move, Piece, Position, Square, Winner};

/// Byte layout of one game snapshot as it travels through the relay.
/// Native endianness, no padding: 120 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SnapshotPayload {
    white_ms: f64,
    black_ms: f64,
    increment_ms: f64,
    started_at_ms: f64,
    move_draw_count: u32,
    move_count: u32,
    /// Piece codes, `[rank * 8 + file]`
    board: [u8; 64],
    /// from.x, from.y, to.x, to.y, promotion, moved piece, initial, unused
    last_move: [u8; 8],
    /// white_turn, white_long, white_short, black_long, black_short, winner, im_white, unused
    flags: [u8; 8],
}

pub const PAYLOAD_SIZE: usize = std::mem::size_of::<SnapshotPayload>();

impl SnapshotPayload {
    pub fn from_state(state: &GameState) -> Self {
        let position = &state.position;

        let mut board = [0u8; 64];
        for (sq, piece) in position.board.pieces() {
            board[sq.y as usize * 8 + sq.x as usize] = piece.code();
        }

        let mv = position.last_move;
        let last_move = [
            mv.from.x as u8,
            mv.from.y as u8,
            mv.to.x as u8,
            mv.to.y as u8,
            mv.promotion.code(),
            mv.moved_piece.code(),
            mv.initial as u8,
            0,
        ];

        let rights = position.castling;
        let flags = [
            position.white_turn as u8,
            rights.white_long as u8,
            rights.white_short as u8,
            rights.black_long as u8,
            rights.black_short as u8,
            state.winner.code(),
            state.im_white as u8,
            0,
        ];

        Self {
            white_ms: state.clock.white_ms,
            black_ms: state.clock.black_ms,
            increment_ms: state.clock.increment_ms,
            started_at_ms: state.clock.started_at_ms,
            move_draw_count: state.move_draw_count,
            move_count: state.move_count,
            board,
            last_move,
            flags,
        }
    }

    /// Rebuilds the state, rejecting any byte that does not map to a valid value
    pub fn to_state(&self) -> Result<GameState, SnapshotError> {
        let mut position = Position::default();
        for (i, &code) in self.board.iter().enumerate() {
            let sq = Square::new((i % 8) as i8, (i / 8) as i8);
            position.board.set(sq, piece(code)?);
        }

        let lm = &self.last_move;
        position.last_move = Move {
            from: square(lm[0], lm[1])?,
            to: square(lm[2], lm[3])?,
            promotion: piece(lm[4])?,
            moved_piece: piece(lm[5])?,
            initial: flag(lm[6])?,
        };

        let f = &self.flags;
        position.white_turn = flag(f[0])?;
        position.castling = CastlingRights {
            white_long: flag(f[1])?,
            white_short: flag(f[2])?,
            black_long: flag(f[3])?,
            black_short: flag(f[4])?,
        };
        let winner = Winner::from_code(f[5]).ok_or(SnapshotError::InvalidWinner(f[5]))?;

        Ok(GameState {
            position,
            move_draw_count: self.move_draw_count,
            move_count: self.move_count,
            clock: ChessClock {
                white_ms: self.white_ms,
                black_ms: self.black_ms,
                increment_ms: self.increment_ms,
                started_at_ms: self.started_at_ms,
            },
            winner,
            im_white: flag(f[6])?,
        })
    }
}

fn piece(code: u8) -> Result<Piece, SnapshotError> {
    Piece::from_code(code).ok_or(SnapshotError::InvalidPiece(code))
}

fn flag(byte: u8) -> Result<bool, SnapshotError> {
    match byte {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(SnapshotError::InvalidFlag(other)),
    }
}

fn square(x: u8, y: u8) -> Result<Square, SnapshotError> {
    Square::checked(x as i8, y as i8).ok_or(SnapshotError::InvalidSquare { x, y })
}

/// Serializes a snapshot into its fixed-size byte form
pub fn encode_snapshot(state: &GameState) -> Vec<u8> {
    bytemuck::bytes_of(&SnapshotPayload::from_state(state)).to_vec()
}

/// Parses and validates a snapshot. `bytes` must be exactly [`PAYLOAD_SIZE`] long.
pub fn decode_snapshot(bytes: &[u8]) -> Result<GameState, SnapshotError> {
    if bytes.len() != PAYLOAD_SIZE {
        return Err(SnapshotError::WrongSize {
            expected: PAYLOAD_SIZE,
            found: bytes.len(),
        });
    }
    let payload: SnapshotPayload = bytemuck::try_pod_read_unaligned(bytes).map_err(|_| SnapshotError::WrongSize {
        expected: PAYLOAD_SIZE,
        found: bytes.len(),
    })?;
    payload.to_state()
}
