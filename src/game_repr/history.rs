use super::*;

/// Append-only log of full game snapshots.
///
/// `repetition_index` is the watermark: the earliest snapshot a new position
/// may repeat. A pawn move or capture makes every older position unreachable,
/// so pushing a snapshot whose half-move counter is 0 moves the watermark to
/// that snapshot. The watermark never exceeds the index of the newest snapshot.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<GameState>,
    repetition_index: usize,
}

impl History {
    /// Starts a log whose first entry is the game's start state
    pub fn new(start: GameState) -> Self {
        Self {
            snapshots: vec![start],
            repetition_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn watermark(&self) -> usize {
        self.repetition_index
    }

    pub fn latest(&self) -> Option<&GameState> {
        self.snapshots.last()
    }

    pub fn snapshots(&self) -> &[GameState] {
        &self.snapshots
    }

    /// How many snapshots already in the log repeat `state`'s position
    /// (board and all four castling rights), looking only as far back as the
    /// watermark would allow once `state` is pushed.
    pub fn repetitions(&self, state: &GameState) -> usize {
        let start = if state.move_draw_count == 0 {
            self.snapshots.len()
        } else {
            self.repetition_index
        };

        self.snapshots[start..]
            .iter()
            .filter(|old| old.same_position(state))
            .count()
    }

    pub fn push(&mut self, state: GameState) {
        if state.move_draw_count == 0 {
            self.repetition_index = self.snapshots.len();
        }
        self.snapshots.push(state);
    }

    /// Drops the newest snapshot unless it is the start state.
    /// Returns the snapshot that is now the newest, or `None` if nothing was dropped.
    pub fn pop(&mut self) -> Option<&GameState> {
        if self.snapshots.len() <= 1 {
            return None;
        }
        self.snapshots.pop();
        // Rescan from the beginning; the old watermark may point past the end
        self.repetition_index = 0;
        self.snapshots.last()
    }
}
