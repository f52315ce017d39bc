use std::fmt;

use log::{debug, info};

use super::*;
use crate::config::TimeControl;
use crate::error::IllegalMove;

/// Half-move counter value at which the fifty-move rule ends the game
pub const FIFTY_MOVE_PLIES: u32 = 100;

/// Outcome tag of a game. Anything but `None` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Winner {
    #[default]
    None,
    /// White won by checkmate
    White,
    /// Black won by checkmate
    Black,
    /// White won because Black's flag fell
    WhiteOnTime,
    /// Black won because White's flag fell
    BlackOnTime,
    DrawStalemate,
    DrawInsufficientMaterial,
    DrawThreefoldRepetition,
    Draw50Move,
}

impl Winner {
    const ALL: [Winner; 9] = [
        Winner::None,
        Winner::White,
        Winner::Black,
        Winner::WhiteOnTime,
        Winner::BlackOnTime,
        Winner::DrawStalemate,
        Winner::DrawInsufficientMaterial,
        Winner::DrawThreefoldRepetition,
        Winner::Draw50Move,
    ];

    pub fn is_over(&self) -> bool {
        *self != Winner::None
    }

    pub fn checkmate_by(color: Color) -> Self {
        match color {
            Color::White => Winner::White,
            Color::Black => Winner::Black,
        }
    }

    pub fn on_time(color: Color) -> Self {
        match color {
            Color::White => Winner::WhiteOnTime,
            Color::Black => Winner::BlackOnTime,
        }
    }

    /// The side that won, `None` for draws and unfinished games
    pub fn winning_color(&self) -> Option<Color> {
        match self {
            Winner::White | Winner::WhiteOnTime => Some(Color::White),
            Winner::Black | Winner::BlackOnTime => Some(Color::Black),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.is_over() && self.winning_color().is_none()
    }

    /// Stable one-byte code used by the snapshot payload
    pub fn code(&self) -> u8 {
        Self::ALL.iter().position(|w| w == self).unwrap_or(0) as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Winner::None => "Game in progress",
            Winner::White => "White won by checkmate!",
            Winner::Black => "Black won by checkmate!",
            Winner::WhiteOnTime => "White won on time",
            Winner::BlackOnTime => "Black won on time",
            Winner::DrawStalemate => "Draw by stalemate.",
            Winner::DrawInsufficientMaterial => "Draw by insufficient material.",
            Winner::DrawThreefoldRepetition => "Draw by repetition.",
            Winner::Draw50Move => "Draw by 50 move.",
        };
        f.write_str(text)
    }
}

/// Everything a snapshot holds: the aggregate minus the history log
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub position: Position,
    /// Plies since the last pawn move or capture
    pub move_draw_count: u32,
    /// Full-move number, starts at 1 and grows after each black move
    pub move_count: u32,
    pub clock: ChessClock,
    pub winner: Winner,
    /// This peer plays the white pieces in an online game
    pub im_white: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(TimeControl::default())
    }
}

impl GameState {
    pub fn new(time_control: TimeControl) -> Self {
        Self {
            position: Position::default(),
            move_draw_count: 0,
            move_count: 1,
            clock: ChessClock::new(time_control),
            winner: Winner::None,
            im_white: false,
        }
    }

    /// Positions are the same for repetition purposes when the board and all
    /// four castling rights match
    pub fn same_position(&self, other: &GameState) -> bool {
        self.position.board == other.position.board && self.position.castling == other.position.castling
    }
}

/// Result of a move attempt as seen by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub accepted: bool,
    pub captured: bool,
}

/// The authoritative game: current state, its history and the clock settings
/// `new_game` resets to.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    history: History,
    time_control: TimeControl,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(TimeControl::default())
    }
}

impl Game {
    pub fn new(time_control: TimeControl) -> Self {
        let state = GameState::new(time_control);
        Self {
            history: History::new(state.clone()),
            state,
            time_control,
        }
    }

    /// Starts a game from an arbitrary state; the state becomes the first snapshot
    pub fn from_state(state: GameState, time_control: TimeControl) -> Self {
        Self {
            history: History::new(state.clone()),
            state,
            time_control,
        }
    }

    /// Back to the starting position with fresh clocks and a one-entry history.
    /// The local color claim survives.
    pub fn new_game(&mut self) {
        let im_white = self.state.im_white;
        self.state = GameState::new(self.time_control);
        self.state.im_white = im_white;
        self.history = History::new(self.state.clone());
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn time_control(&self) -> TimeControl {
        self.time_control
    }

    pub fn position(&self) -> &Position {
        &self.state.position
    }

    pub fn board(&self) -> &Board {
        &self.state.position.board
    }

    pub fn winner(&self) -> Winner {
        self.state.winner
    }

    pub fn white_turn(&self) -> bool {
        self.state.position.white_turn
    }

    pub fn side_to_move(&self) -> Color {
        self.state.position.side_to_move()
    }

    pub fn castling(&self) -> CastlingRights {
        self.state.position.castling
    }

    pub fn last_move(&self) -> Move {
        self.state.position.last_move
    }

    pub fn move_draw_count(&self) -> u32 {
        self.state.move_draw_count
    }

    pub fn move_count(&self) -> u32 {
        self.state.move_count
    }

    pub fn clock(&self) -> &ChessClock {
        &self.state.clock
    }

    pub fn im_white(&self) -> bool {
        self.state.im_white
    }

    pub fn set_im_white(&mut self, im_white: bool) {
        self.state.im_white = im_white;
    }

    /// Is the side to move in check?
    pub fn is_in_check(&self) -> bool {
        self.state.position.is_in_check(self.side_to_move())
    }

    /// Pseudo-legality of a candidate on the committed board, self-check ignored
    pub fn is_valid_move(&self, from: Square, to: Square, promotion: Option<Piece>) -> bool {
        if !from.is_on_board() || !to.is_on_board() {
            return false;
        }
        let piece = self.board().get(from);
        match resolve_promotion(piece, to, promotion) {
            Ok(promotion) => self.state.position.is_valid_move(from, to, promotion),
            Err(_) => false,
        }
    }

    /// Full validation without touching any state: turn and ownership checks,
    /// promotion resolution, piece rules, castling out of check, and a
    /// simulation on a copy of the board to reject self-check.
    pub fn validate(&self, from: Square, to: Square, promotion: Option<Piece>) -> Result<Move, IllegalMove> {
        if self.state.winner.is_over() {
            return Err(IllegalMove::GameOver(self.state.winner));
        }
        for sq in [from, to] {
            if !sq.is_on_board() {
                return Err(IllegalMove::OffBoard(sq));
            }
        }

        let position = &self.state.position;
        let piece = position.board.get(from);
        if piece.is_none() {
            return Err(IllegalMove::EmptySquare(from));
        }
        if piece.color != position.side_to_move() {
            return Err(IllegalMove::WrongSide(from));
        }

        let promotion = resolve_promotion(piece, to, promotion)?;

        let mv = Move::new(from, to, piece, promotion);

        if mv.is_castle() && position.is_in_check(piece.color) {
            return Err(IllegalMove::CastleOutOfCheck);
        }

        if !position.is_valid_move(from, to, promotion) {
            return Err(IllegalMove::RuleViolation { from, to });
        }

        let simulated = position.board.after_move(&mv);
        if king_attacked(&simulated, piece.color) {
            return Err(IllegalMove::LeavesKingInCheck);
        }

        Ok(mv)
    }

    /// Validates and, unless `simulate` is set, commits the move.
    /// In simulate mode nothing is touched: no board, history, clocks or counters.
    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
        simulate: bool,
    ) -> Result<MoveOutcome, IllegalMove> {
        let mv = self.validate(from, to, promotion)?;
        let target = self.board().get(to);
        let en_passant = mv.moved_piece.piece_type == Type::Pawn && from.x != to.x && target.is_none();
        let captured = !target.is_none() || en_passant;

        if !simulate {
            self.commit(mv, captured);
            self.detect_game_end();
        }

        Ok(MoveOutcome {
            accepted: true,
            captured,
        })
    }

    /// The sole mutation entry point for callers: a rejected move leaves the
    /// game exactly as it was.
    pub fn apply_move(&mut self, from: Square, to: Square, promotion: Option<Piece>, simulate: bool) -> MoveOutcome {
        match self.try_move(from, to, promotion, simulate) {
            Ok(outcome) => outcome,
            Err(reason) => {
                debug!("Rejected {}{}: {}", from, to, reason);
                MoveOutcome::default()
            }
        }
    }

    fn commit(&mut self, mv: Move, captured: bool) {
        let mover = mv.moved_piece.color;
        let state = &mut self.state;
        let position = &mut state.position;
        let target = position.board.get(mv.to);

        position.board = position.board.after_move(&mv);

        match mv.moved_piece.piece_type {
            Type::King => position.castling.clear_side(mover),
            Type::Rook => position.castling.clear_corner(mv.from),
            _ => {}
        }
        if target.piece_type == Type::Rook && mv.to.y == target.color.home_rank() {
            position.castling.clear_corner(mv.to);
        }

        position.last_move = mv;
        position.white_turn = !position.white_turn;

        if mv.moved_piece.piece_type == Type::Pawn || captured {
            state.move_draw_count = 0;
        } else {
            state.move_draw_count = state.move_draw_count.saturating_add(1);
        }
        if mover == Color::Black {
            state.move_count = state.move_count.saturating_add(1);
        }
        state.clock.add_increment(mover);

        debug!("Committed {} ({:?} {:?})", mv, mover, mv.moved_piece.piece_type);
    }

    /// Terminal checks for the side that is now to move, then the snapshot append
    fn detect_game_end(&mut self) {
        let side = self.side_to_move();

        let winner = if !self.has_legal_moves() {
            if self.is_in_check() {
                Winner::checkmate_by(side.opposite())
            } else {
                Winner::DrawStalemate
            }
        } else if self.state.move_draw_count >= FIFTY_MOVE_PLIES {
            Winner::Draw50Move
        } else if is_insufficient_material(self.board()) {
            Winner::DrawInsufficientMaterial
        } else if self.history.repetitions(&self.state) >= 2 {
            Winner::DrawThreefoldRepetition
        } else {
            Winner::None
        };

        if winner.is_over() {
            info!("{}", winner);
        }
        self.state.winner = winner;
        self.history.push(self.state.clone());
    }

    /// Steps back one move. The start snapshot is never discarded, so this is
    /// a no-op (returning false) when no move has been recorded.
    /// The running clock timestamp and the local color claim are kept.
    pub fn undo(&mut self) -> bool {
        let started_at_ms = self.state.clock.started_at_ms;
        let im_white = self.state.im_white;

        match self.history.pop() {
            Some(previous) => {
                self.state = previous.clone();
                self.state.clock.started_at_ms = started_at_ms;
                self.state.im_white = im_white;
                true
            }
            None => false,
        }
    }

    /// Starts the clock if it is not running yet
    pub fn start_clock(&mut self, now_ms: f64) {
        if !self.state.clock.is_running() {
            self.state.clock.started_at_ms = now_ms;
        }
    }

    /// Polls the clock: charges elapsed time to the side to move and ends the
    /// game on flag-fall. Returns true if this tick ended the game.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.state.winner.is_over() {
            return false;
        }
        let side = self.side_to_move();
        if self.state.clock.tick(side, now_ms) {
            self.state.winner = Winner::on_time(side.opposite());
            info!("{}", self.state.winner);
            return true;
        }
        false
    }

    /// Overwrites the local state with a snapshot received from the peer.
    /// History is left alone; see [`Game::record_snapshot`].
    pub fn import_snapshot(&mut self, incoming: &GameState, now_ms: f64) {
        let started_at_ms = if incoming.clock.is_running() { now_ms } else { 0.0 };
        // Both peers must never believe they are white
        let im_white = self.state.im_white && !incoming.im_white;

        self.state = GameState {
            position: incoming.position,
            move_draw_count: incoming.move_draw_count,
            move_count: incoming.move_count,
            clock: ChessClock {
                started_at_ms,
                ..incoming.clock
            },
            winner: incoming.winner,
            im_white,
        };
        debug!(
            "Imported snapshot: last move {}, winner {:?}",
            self.state.position.last_move, self.state.winner
        );
    }

    /// Appends the current state to the history log
    pub fn record_snapshot(&mut self) {
        self.history.push(self.state.clone());
    }
}

/// Picks the piece a pawn turns into. A promotion is required exactly when a
/// pawn lands on its last rank; a piece supplied for any other move is ignored.
fn resolve_promotion(piece: Piece, to: Square, promotion: Option<Piece>) -> Result<Piece, IllegalMove> {
    if piece.piece_type != Type::Pawn || to.y != piece.color.last_rank() {
        return Ok(Piece::none());
    }
    match promotion {
        Some(p) if p.is(piece.color) && p.piece_type.is_promotion_target() => Ok(p),
        _ => Err(IllegalMove::InvalidPromotion),
    }
}
