//! One legality predicate and one candidate generator per piece kind.
//! `Position::is_valid_move` and `Position::candidates` dispatch here, so the
//! checker and the generator always share the same rules.

pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;
