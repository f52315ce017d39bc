// Perft (performance test) counts every leaf of the legal move tree and
// compares against published node counts.

use super::*;

mod kiwipete;
mod middle_game;
mod starting_position;
