use super::*;

#[test]
fn test_perft_starting_position_depth_1() {
    let mut game = Game::default();
    assert_eq!(perft(&mut game, 1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let mut game = Game::default();
    assert_eq!(perft(&mut game, 2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let mut game = Game::default();
    assert_eq!(perft(&mut game, 3), 8902);
}

#[test]
fn test_perft_leaves_game_untouched() {
    let mut game = Game::default();
    perft(&mut game, 2);

    assert_eq!(*game.position(), Position::default());
    assert_eq!(game.history().len(), 1);
}
