//! Console interface to the Woodpusher engine.
//!
//! Offers the three classic modes: human vs human, human vs engine, and
//! engine vs engine. Human moves are entered in coordinate notation.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use woodpusher_engine::chess::{ChessMove, Color};
use woodpusher_engine::search;
use woodpusher_engine::{Board, Position};

const DEFAULT_DEPTH: u32 = 3;

/// Two material-only engines can shuffle pieces forever, and no repetition
/// rule is tracked, so engine games are capped.
const MAX_PLIES: usize = 400;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum PlayerKind {
    Human,
    Engine,
}

enum InputKind {
    Exit,
    Newgame,
    Help,
    Error,
    Undo,
    Eval,
    Depth(u32),
    GameMove(ChessMove),
}

impl From<&str> for InputKind {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if let Ok(mv) = ChessMove::from_str(s) {
            return Self::GameMove(mv);
        }
        if let Some(arg) = s.strip_prefix("depth") {
            return match arg.trim().parse() {
                Ok(n) if n > 0 => Self::Depth(n),
                _ => Self::Error,
            };
        }
        match s {
            "exit" | "quit" => Self::Exit,
            "newgame" | "ng" => Self::Newgame,
            "help" => Self::Help,
            "undo" => Self::Undo,
            "eval" => Self::Eval,
            _ => Self::Error,
        }
    }
}

fn main() -> io::Result<()> {
    println!("Woodpusher CLI 0.1.0\n");
    let stdin = io::stdin();

    loop {
        match select_mode(&stdin)? {
            Some((white, black)) => {
                if !play_game(&stdin, white, black)? {
                    break;
                }
            }
            None => break,
        }
    }
    Ok(())
}

/// Show the game mode menu and read a selection.
/// Returns the (White, Black) player kinds, or None to quit.
fn select_mode(stdin: &io::Stdin) -> io::Result<Option<(PlayerKind, PlayerKind)>> {
    use PlayerKind::*;

    println!("Select a game mode:");
    println!("  1) human vs human");
    println!("  2) human vs engine");
    println!("  3) engine vs engine");
    println!("  (exit to quit)");

    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            return Ok(None);
        }

        match input.trim() {
            "1" => return Ok(Some((Human, Human))),
            "2" => return Ok(Some((Human, Engine))),
            "3" => return Ok(Some((Engine, Engine))),
            "exit" | "quit" => return Ok(None),
            other => println!("{other}: enter 1, 2, 3 or exit"),
        }
    }
}

/// Play one game from the start position until it ends or the user leaves.
/// Returns false when the user wants to quit the program entirely.
fn play_game(stdin: &io::Stdin, white: PlayerKind, black: PlayerKind) -> io::Result<bool> {
    let mut board = Board::start_position();
    let mut depth = DEFAULT_DEPTH;
    let mut input = String::new();

    loop {
        println!("\n{}\n", board);

        if let Some(result) = board.result() {
            let (white_score, black_score) = result.scores();
            println!("{result}");
            println!("Final score: White {white_score} - Black {black_score}");
            return Ok(true);
        }
        if board.plies() >= MAX_PLIES {
            println!("Game stopped after {} moves.", MAX_PLIES / 2);
            return Ok(true);
        }

        let side = board.side_to_move();
        let to_move = match side {
            Color::White => white,
            Color::Black => black,
        };

        match to_move {
            PlayerKind::Engine => {
                let result = search::search(&mut board, depth);
                match result.best_move {
                    Some(mv) => {
                        println!(
                            "{} plays {}  (score {}, {} nodes, {} ms)",
                            side_name(side),
                            mv,
                            result.score,
                            result.nodes,
                            result.elapsed.as_millis()
                        );
                        board.push(mv);
                    }
                    // result() above already catches terminal positions.
                    None => return Ok(true),
                }
            }
            PlayerKind::Human => {
                print!("{} to move > ", side_name(side));
                io::stdout().flush()?;
                input.clear();
                if stdin.lock().read_line(&mut input)? == 0 {
                    return Ok(false);
                }

                match InputKind::from(input.as_str()) {
                    InputKind::Exit => return Ok(false),
                    InputKind::Newgame => {
                        board.reset();
                        println!("New game");
                    }
                    InputKind::Help => print_help(),
                    InputKind::Eval => {
                        println!("Static evaluation: {} cp", board.evaluate());
                    }
                    InputKind::Depth(n) => {
                        depth = n;
                        println!("Engine search depth set to {depth}");
                    }
                    InputKind::Undo => {
                        if board.plies() == 0 {
                            println!("Nothing to undo");
                            continue;
                        }
                        board.pop();
                        // Take back the engine reply too, so the human is
                        // back on move.
                        let opponent = match board.side_to_move() {
                            Color::White => white,
                            Color::Black => black,
                        };
                        if opponent == PlayerKind::Engine && board.plies() > 0 {
                            board.pop();
                        }
                    }
                    InputKind::GameMove(mv) => {
                        if let Err(err) = board.try_push(mv) {
                            println!("{err}");
                        }
                    }
                    InputKind::Error => {
                        println!("Unrecognized input, type help for commands");
                    }
                }
            }
        }
    }
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn print_help() {
    println!("Commands:");
    println!("  e2e4, e7e8q   play a move in coordinate notation");
    println!("  undo          take back your last move");
    println!("  eval          show the static material evaluation");
    println!("  depth <n>     set the engine search depth (default {DEFAULT_DEPTH})");
    println!("  newgame, ng   restart from the start position");
    println!("  help          show this message");
    println!("  exit, quit    leave the program");
}
