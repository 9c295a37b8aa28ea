use clap::Parser;
use eight_puzzle_solver::engine::{Board, Game, BOARD_SIZE, DEFAULT_START_GRID};
use eight_puzzle_solver::logging;
use eight_puzzle_solver::solver::solve;
use eight_puzzle_solver::utils::board_from_str;
use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Starting board, rows separated by '/'. Defaults to "345/276/180".
    #[clap(short, long)]
    board: Option<String>,

    /// Pause between moves when the solver plays, in milliseconds
    #[clap(short, long, default_value_t = 500)]
    delay_ms: u64,
}

/// Lets the solver finish the puzzle from the current position and replays
/// its moves one at a time.
fn auto_solve(game: &mut Game, delay: Duration) {
    let Some(solution) = solve(game.board()) else {
        println!("No solution found! This board cannot reach the goal.");
        return;
    };
    info!(moves = solution.len(), "replaying solver moves");

    for direction in solution.moves {
        thread::sleep(delay);
        if !game.apply_direction(direction) {
            println!("Solver move {} could not be applied.", direction);
            return;
        }
        println!("{}\n{}\n", direction, game.board());
    }
    println!("Puzzle solved automatically!");
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    let initial_board = match args.board.as_deref() {
        Some(text) => match board_from_str(text) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("Invalid board: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => match Board::from_grid(DEFAULT_START_GRID) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("Invalid default board: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };
    let mut game = Game::new_with_board(initial_board);
    let delay = Duration::from_millis(args.delay_ms);
    println!("Welcome to the 8-puzzle!");

    loop {
        println!("---------------------");
        println!("Steps: {}", game.steps());
        println!("{}", game.board());

        if game.is_solved() {
            println!("---------------------");
            println!("You solved the puzzle in {} steps!", game.steps());
            break;
        }

        print!("Enter a tile to slide (row col), 's' to auto-solve, 'u' to undo, 'q' to quit: ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => {
                println!("Error reading input. Please try again.");
                continue;
            }
        }

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "u" => {
                if game.undo_last_move() {
                    println!("Move undone.");
                } else {
                    println!("Cannot undo further (already at initial state).");
                }
            }
            "s" => auto_solve(&mut game, delay),
            trimmed => {
                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                let coords = match parts.as_slice() {
                    [r, c] => r.parse::<usize>().ok().zip(c.parse::<usize>().ok()),
                    _ => None,
                };
                match coords {
                    Some((r, c)) if r < BOARD_SIZE && c < BOARD_SIZE => {
                        if !game.process_move(r, c) {
                            println!("Tile ({}, {}) is not next to the blank.", r, c);
                        }
                    }
                    Some(_) => println!(
                        "Invalid coordinates: row and column must be between 0 and {}.",
                        BOARD_SIZE - 1
                    ),
                    None => println!("Invalid input format. Use 'row col', 's', 'u', or 'q'."),
                }
            }
        }
    }
    ExitCode::SUCCESS
}
