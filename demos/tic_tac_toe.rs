extern crate minimax_lib;

use minimax_lib::board::{Board, GameOutcome, Mark};
use minimax_lib::game::{Command, GameObserver, GameSession};
use minimax_lib::random::{RandomGenerator, StandardRandomGenerator};
use std::io::{self, BufRead, Write};

/// Prints transitions the way a front end would play a sound for them.
struct ConsoleObserver;

impl GameObserver for ConsoleObserver {
    fn on_win(&mut self, winner: Mark, line: [u8; 3]) {
        println!("{winner:?} completes {line:?}");
    }

    fn on_draw(&mut self) {
        println!("Nobody completes a line");
    }
}

fn main() -> io::Result<()> {
    // `--auto N` lets a random X play N games against the AI
    let args: Vec<String> = std::env::args().collect();
    if let Some(games) = args
        .iter()
        .position(|arg| arg == "--auto")
        .and_then(|i| args.get(i + 1))
        .and_then(|n| n.parse::<u32>().ok())
    {
        self_play(games);
        return Ok(());
    }

    let mut session = GameSession::builder()
        .with_observer(Box::new(ConsoleObserver))
        .build();
    println!("You are X. Keys 1-9 play a cell, r resets, q quits.");
    print_board(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let Some(key) = line.trim().chars().next() else {
            continue;
        };
        if key == 'q' {
            break;
        }
        let Some(command) = Command::from_key(key) else {
            println!("Unknown key {key:?}");
            continue;
        };

        match session.handle(command) {
            Ok(_) => {
                if session.is_ai_turn() {
                    if let Err(error) = session.play_ai() {
                        println!("AI could not move: {error}");
                    }
                }
            }
            Err(error) => println!("{error}"),
        }

        print_board(&session);
        if !session.is_active() {
            let scores = session.scores();
            println!("Score X {} - O {}. Press r for a new game.", scores.x, scores.o);
        }
        io::stdout().flush()?;
    }

    Ok(())
}

fn self_play(games: u32) {
    let mut random = StandardRandomGenerator;
    let mut session = GameSession::default();
    let mut draws = 0;

    for _ in 0..games {
        while session.is_active() {
            let event = if session.is_ai_turn() {
                session.play_ai()
            } else {
                let moves = session.board().get_available_moves();
                match random.choose(&moves) {
                    Some(&index) => session.play(index),
                    None => break,
                }
            };
            match event {
                Ok(event) if event.outcome == GameOutcome::Draw => draws += 1,
                Ok(_) => {}
                Err(error) => {
                    println!("{error}");
                    break;
                }
            }
        }
        session.reset_game();
    }

    let scores = session.scores();
    println!(
        "{games} games: X won {}, O won {}, {draws} draws",
        scores.x, scores.o
    );
}

fn print_board(session: &GameSession) {
    println!("{}\n", session.board());
}
