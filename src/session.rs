//! A local game session: the authoritative [`Game`] shared between UI input,
//! relay messages and the clock poll.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::{IllegalMove, SnapshotError};
use crate::game_repr::{Destinations, Game, MoveOutcome, Piece, Square, Type};
use crate::net::{decode_snapshot, encode_snapshot, ClientMessageType, Envelope, ServerMessageType};

type TimeSource = Box<dyn Fn() -> f64 + Send + Sync>;

/// Milliseconds since the Unix epoch
pub fn wall_clock_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

pub struct Session {
    game: Arc<Mutex<Game>>,
    config: SessionConfig,
    player_id: Option<i64>,
    sequence: i16,
    now: TimeSource,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_time_source(config, wall_clock_ms)
    }

    /// Same as [`Session::new`] with an injected "now" in milliseconds
    pub fn with_time_source(config: SessionConfig, now: impl Fn() -> f64 + Send + Sync + 'static) -> Self {
        Self {
            game: Arc::new(Mutex::new(Game::new(config.time_control))),
            config,
            player_id: None,
            sequence: 0,
            now: Box::new(now),
        }
    }

    /// Shared handle to the game, e.g. for a render thread
    pub fn game(&self) -> Arc<Mutex<Game>> {
        Arc::clone(&self.game)
    }

    /// Locks the game. A panic elsewhere while holding the lock leaves the
    /// game in a consistent state, since every mutation is validated first.
    pub fn lock(&self) -> MutexGuard<'_, Game> {
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn player_id(&self) -> Option<i64> {
        self.player_id
    }

    /// May the local user move now?
    pub fn is_my_turn(&self) -> bool {
        self.may_move(&self.lock())
    }

    fn may_move(&self, game: &Game) -> bool {
        self.config.allow_both_sides || !game.clock().is_running() || game.im_white() == game.white_turn()
    }

    /// Plays a local move. On success returns the outcome and the update to
    /// forward to the relay.
    pub fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Type>,
    ) -> Result<(MoveOutcome, Envelope), IllegalMove> {
        let now = (self.now)();

        let outcome = {
            let mut game = self.lock();
            if !self.may_move(&game) {
                return Err(IllegalMove::NotYourTurn);
            }
            let promotion = promotion.map(|t| Piece::new(game.side_to_move(), t));
            let mover_is_white = game.white_turn();
            let outcome = game.try_move(from, to, promotion, false)?;

            if !game.clock().is_running() {
                game.start_clock(now);
                if !self.config.allow_both_sides {
                    game.set_im_white(mover_is_white);
                }
            }
            outcome
        };

        Ok((outcome, self.update_envelope()))
    }

    pub fn legal_destinations(&self, origin: Square) -> Destinations {
        self.lock().legal_destinations(origin)
    }

    /// Clock poll; true when this tick ended the game on time
    pub fn tick(&self) -> bool {
        let now = (self.now)();
        self.lock().tick(now)
    }

    pub fn undo(&mut self) -> Option<Envelope> {
        let undone = self.lock().undo();
        undone.then(|| self.update_envelope())
    }

    pub fn new_game(&mut self) -> Envelope {
        self.lock().new_game();
        self.update_envelope()
    }

    pub fn connect(&mut self) -> Envelope {
        let seq = self.next_sequence();
        Envelope::client(ClientMessageType::Connection, self.player_id.unwrap_or(0), seq, Vec::new())
    }

    pub fn alive(&mut self) -> Envelope {
        let seq = self.next_sequence();
        Envelope::client(ClientMessageType::Alive, self.player_id.unwrap_or(0), seq, Vec::new())
    }

    /// Handles one message from the relay. Returns a reply to send back, if any.
    pub fn receive(&mut self, envelope: &Envelope) -> Result<Option<Envelope>, SnapshotError> {
        match envelope.server_type()? {
            ServerMessageType::Connection => {
                info!("Connected to relay as player {}", envelope.sender_player_id);
                self.player_id = Some(envelope.sender_player_id);
                Ok(None)
            }
            ServerMessageType::NewPlayer => {
                if self.is_own(envelope) {
                    return Ok(None);
                }
                info!("Player {} joined", envelope.sender_player_id);
                let moves_played = !self.lock().last_move().initial;
                Ok(moves_played.then(|| self.update_envelope()))
            }
            ServerMessageType::Update => {
                if self.is_own(envelope) {
                    return Ok(None);
                }
                let state = decode_snapshot(&envelope.payload)?;
                let now = (self.now)();
                let mut game = self.lock();
                game.import_snapshot(&state, now);
                game.record_snapshot();
                debug!("Applied update {} from player {}", envelope.sequence_index, envelope.sender_player_id);
                Ok(None)
            }
            ServerMessageType::Disconnect => {
                warn!("Player {} disconnected", envelope.sender_player_id);
                Ok(None)
            }
            ServerMessageType::Alive => Ok(None),
        }
    }

    fn is_own(&self, envelope: &Envelope) -> bool {
        self.player_id == Some(envelope.sender_player_id)
    }

    fn next_sequence(&mut self) -> i16 {
        let seq = self.sequence;
        self.sequence = self.sequence.wrapping_add(1);
        seq
    }

    fn update_envelope(&mut self) -> Envelope {
        let payload = encode_snapshot(self.lock().state());
        let seq = self.next_sequence();
        Envelope::client(ClientMessageType::Update, self.player_id.unwrap_or(0), seq, payload)
    }
}
