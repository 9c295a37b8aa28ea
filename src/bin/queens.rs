use clap::Parser;
use eight_puzzle_solver::logging;
use eight_puzzle_solver::queens::solve_n_queens;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board size (number of queens)
    #[clap(allow_negative_numbers = true)]
    n: i64,

    /// Only print the number of solutions
    #[clap(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    let started = Instant::now();
    let result = match solve_n_queens(args.n) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let elapsed = started.elapsed();

    if !args.quiet {
        println!("\nSolutions:");
        for (i, solution) in result.all().iter().enumerate() {
            println!("Solution {}: {:?}", i + 1, solution);
        }
    }
    println!("Number of solutions: {}", result.len());
    println!("Time taken for {}: {:.6} seconds", args.n, elapsed.as_secs_f64());
    info!(
        n = args.n,
        discovered = result.discovered().len(),
        mirrored = result.mirrored().len(),
        "n-queens finished"
    );
    ExitCode::SUCCESS
}
