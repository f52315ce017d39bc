//! Chess rules referee: move legality, execution, termination detection,
//! history with undo, game clocks and the snapshot format exchanged with a relay.

pub mod config;
pub mod error;
pub mod game_repr;
pub mod net;
pub mod session;

pub use config::{SessionConfig, TimeControl};
pub use error::{FenError, IllegalMove, SnapshotError};
pub use game_repr::{Game, GameState, MoveOutcome, Winner};
pub use session::Session;
