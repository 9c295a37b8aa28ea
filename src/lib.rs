//! # 8-Puzzle Solver Library
//!
//! This library provides the board model for the 8-puzzle and a best-first
//! (branch and bound) solver that finds a move sequence from any solvable
//! board to the goal `[[1, 2, 3], [4, 5, 6], [7, 8, 0]]`. It also ships a
//! small backtracking N-Queens solver.
//!
//! It is used by four binaries:
//! - `human_player`: play the puzzle on the console, or let the solver
//!   finish it and replay the moves.
//! - `ai_solver`: takes a board and prints the solver's move sequence.
//! - `heuristic_evaluator`: compares heuristics on seeded scrambled boards.
//! - `queens`: prints every N-Queens placement for a given `n`.
//!
//! ## Modules
//! - `engine`: `Board`, `Direction` and the `Game` play session.
//! - `solver`: `solve` and friends for the 8-puzzle.
//! - `heuristics`: Manhattan distance and misplaced-tiles estimates.
//! - `queens`: `solve_n_queens` and a placement validator.
//! - `utils`: parsing boards and move lists from text.
//! - `error`: the crate's `PuzzleError`.
//! - `logging`: `tracing` subscriber setup for the binaries.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod logging;
pub mod queens;
pub mod solver;
pub mod utils;

pub use crate::error::{PuzzleError, Result};
