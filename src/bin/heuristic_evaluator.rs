use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::{manhattan_distance, misplaced_tiles};
use eight_puzzle_solver::logging;
use eight_puzzle_solver::solver::{solve_with_heuristic, Heuristic};
use std::collections::HashMap;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of scrambled boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: u64,

    /// Seed of the first board; board i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Random blank moves applied to the goal to build each board
    #[clap(long, default_value_t = 40)]
    scramble_steps: usize,
}

#[derive(Default)]
struct Totals {
    moves: Vec<usize>,
    expanded: Vec<usize>,
}

fn average(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<usize>() as f64 / values.len() as f64
}

fn main() {
    logging::init();
    let args = Args::parse();

    let heuristics: Vec<(&str, Heuristic)> = vec![
        ("MANHATTAN", manhattan_distance),
        ("MISPLACED", misplaced_tiles),
    ];
    let mut totals: HashMap<&str, Totals> = HashMap::new();

    info!(boards = args.boards, seed = args.seed, "starting heuristic evaluation");

    for board_idx in 0..args.boards {
        let seed = args.seed + board_idx;
        let board = Board::scrambled(seed, args.scramble_steps);
        println!("\nEvaluating Board {} (Seed: {})", board_idx, seed);

        for (name, heuristic) in &heuristics {
            let Some(solution) = solve_with_heuristic(&board, *heuristic) else {
                warn!(seed, heuristic = *name, "scrambled board reported unsolvable");
                continue;
            };
            println!(
                "  Heuristic: {:<10}, Moves: {:<4}, Expanded: {}",
                name,
                solution.len(),
                solution.nodes_expanded
            );
            let entry = totals.entry(*name).or_default();
            entry.moves.push(solution.len());
            entry.expanded.push(solution.nodes_expanded);
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);

    let mut summary: Vec<(&str, f64, f64)> = totals
        .iter()
        .map(|(name, t)| (*name, average(&t.moves), average(&t.expanded)))
        .collect();
    summary.sort_by(|a, b| a.2.total_cmp(&b.2));

    for (name, avg_moves, avg_expanded) in summary {
        println!(
            "Heuristic {:<10}: Average Moves = {:.2}, Average Expanded = {:.1}",
            name, avg_moves, avg_expanded
        );
    }
}
