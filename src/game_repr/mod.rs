mod attacks;
mod board;
mod clock;
mod fen;
mod game;
mod history;
mod material;
mod movegen;
mod moves;
mod piece;
mod piece_moves;
mod position;

#[cfg(test)]
mod tests;

pub use attacks::*;
pub use board::*;
pub use clock::*;
pub use fen::STARTING_FEN;
pub use game::*;
pub use history::*;
pub use material::*;
pub use movegen::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
