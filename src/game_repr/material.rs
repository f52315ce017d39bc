use smallvec::SmallVec;

use super::*;

/// Detects the material combinations this referee declares drawn.
///
/// # Insufficient Material Cases
///
/// - King vs King
/// - King and Bishop vs King
/// - King and Knight vs King
/// - King and Bishop vs King and Bishop, both bishops on the same square color
///
/// Every other combination is left to the players, including two knights
/// against a bare king and opposite-colored bishops.
pub fn is_insufficient_material(board: &Board) -> bool {
    let mut white: SmallVec<[(Square, Type); 16]> = SmallVec::new();
    let mut black: SmallVec<[(Square, Type); 16]> = SmallVec::new();

    for (sq, piece) in board.pieces() {
        if piece.piece_type == Type::King {
            continue;
        }
        match piece.color {
            Color::White => white.push((sq, piece.piece_type)),
            Color::Black => black.push((sq, piece.piece_type)),
        }
    }

    match (white.as_slice(), black.as_slice()) {
        ([], []) => true,
        ([(_, minor)], []) | ([], [(_, minor)]) => minor.is_minor(),
        ([(a, Type::Bishop)], [(b, Type::Bishop)]) => a.is_light() == b.is_light(),
        _ => false,
    }
}
