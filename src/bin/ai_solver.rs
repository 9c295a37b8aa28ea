use clap::{Parser, ValueEnum};
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::{manhattan_distance, misplaced_tiles};
use eight_puzzle_solver::logging;
use eight_puzzle_solver::solver::{solve_with_heuristic, Heuristic};
use eight_puzzle_solver::utils::board_from_str;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicKind {
    Manhattan,
    Misplaced,
}

impl HeuristicKind {
    fn function(self) -> Heuristic {
        match self {
            HeuristicKind::Manhattan => manhattan_distance,
            HeuristicKind::Misplaced => misplaced_tiles,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board given inline, rows separated by '/', e.g. "345/276/180"
    #[clap(short, long, conflicts_with = "board_file")]
    board: Option<String>,

    /// Heuristic used to order the search
    #[clap(long, value_enum, default_value = "manhattan")]
    heuristic: HeuristicKind,

    /// Path to a board file (three rows of three tiles, 0 or '.' for the blank)
    #[clap(required_unless_present = "board")]
    board_file: Option<PathBuf>,
}

fn read_board(args: &Args) -> Result<Board, String> {
    let content = match (&args.board, &args.board_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?,
        (None, None) => return Err("No board given".to_string()),
    };
    board_from_str(&content).map_err(|e| format!("Invalid board format: {}", e))
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    let board = match read_board(&args) {
        Ok(board) => board,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    println!("Initial board state:\n{}\n", board);
    if !board.is_solvable() {
        warn!("board fails the parity check; the search will exhaust the state space");
    }
    info!(heuristic = ?args.heuristic, "searching");

    let started = Instant::now();
    let result = solve_with_heuristic(&board, args.heuristic.function());
    let elapsed = started.elapsed();

    let Some(solution) = result else {
        println!("No solution found.");
        info!(elapsed_ms = elapsed.as_millis() as u64, "search finished");
        return ExitCode::FAILURE;
    };

    println!("Moves ({}):", solution.len());
    if solution.is_empty() {
        println!("  Already solved.");
    } else {
        for (i, label) in solution.labels().iter().enumerate() {
            println!("  Move {}: {}", i + 1, label);
        }
    }
    info!(
        nodes_expanded = solution.nodes_expanded,
        nodes_generated = solution.nodes_generated,
        elapsed_ms = elapsed.as_millis() as u64,
        "search finished"
    );

    match board.apply_moves(&solution.moves) {
        Ok(final_board) => {
            println!("\nFinal board state:\n{}", final_board);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Solution failed to replay: {}", e);
            ExitCode::FAILURE
        }
    }
}
