use std::io::{self, BufRead, Write};

use log::{error, info};

use chess_referee::config::{SessionConfig, TimeControl};
use chess_referee::game_repr::{parse_coordinate_move, Game, Square};
use chess_referee::session::Session;

const HELP: &str = "commands: <from><to>[promotion] | moves <square> | undo | new | fen [FEN] | help | quit";

fn main() {
    env_logger::init();

    let mut session = Session::new(SessionConfig::hot_seat(TimeControl::default()));
    info!("Referee started");

    print_board(&session);
    println!("{}", HELP);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("Failed to read input: {}", err);
                break;
            }
        };
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else { continue };

        match command {
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "new" => {
                session.new_game();
                print_board(&session);
            }
            "undo" => {
                if session.undo().is_none() {
                    println!("nothing to undo");
                }
                print_board(&session);
            }
            "moves" => match words.next().and_then(Square::from_algebraic) {
                Some(origin) => {
                    let targets: Vec<String> = session
                        .legal_destinations(origin)
                        .iter()
                        .map(|sq| sq.to_string())
                        .collect();
                    println!("{}: {}", origin, targets.join(" "));
                }
                None => println!("usage: moves <square>"),
            },
            "fen" => {
                let rest: Vec<&str> = words.collect();
                if rest.is_empty() {
                    println!("{}", session.lock().to_fen());
                    continue;
                }
                let tc = session.config().time_control;
                match Game::from_fen_with(&rest.join(" "), tc) {
                    Ok(game) => {
                        *session.lock() = game;
                        print_board(&session);
                    }
                    Err(err) => println!("{}", err),
                }
            }
            text => match parse_coordinate_move(text) {
                Some((from, to, promotion)) => match session.submit_move(from, to, promotion) {
                    Ok((outcome, _update)) => {
                        if outcome.captured {
                            println!("capture");
                        }
                        print_board(&session);
                    }
                    Err(reason) => println!("illegal move: {}", reason),
                },
                None => println!("unknown command, {}", HELP),
            },
        }
        session.tick();
        let _ = io::stdout().flush();
    }
}

fn print_board(session: &Session) {
    let game = session.lock();
    println!("{}", game.board());
    if game.winner().is_over() {
        println!("{}", game.winner());
    } else {
        let side = if game.white_turn() { "White" } else { "Black" };
        let check = if game.is_in_check() { " (check)" } else { "" };
        println!("{} to move{}", side, check);
    }
}
