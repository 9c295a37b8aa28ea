//! Backtracking N-Queens search with mirrored expansion.
//!
//! Queens are placed row by row. Three marker arrays (columns, down
//! diagonals keyed by `row - col`, up diagonals keyed by `row + col`) make the
//! attack test O(1).
use crate::error::{PuzzleError, Result};
use tracing::debug;

/// All placements found for one board size.
///
/// `solution[row] == col` for every solution. The first half holds the
/// solutions discovered by the search, the second half their column-wise
/// mirror images in the same order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueensSolutions {
    n: usize,
    discovered: usize,
    solutions: Vec<Vec<usize>>,
}

impl QueensSolutions {
    pub fn board_size(&self) -> usize {
        self.n
    }

    /// Solutions found by the search, before mirroring.
    pub fn discovered(&self) -> &[Vec<usize>] {
        &self.solutions[..self.discovered]
    }

    /// Mirror images of [`discovered`](Self::discovered), index for index.
    pub fn mirrored(&self) -> &[Vec<usize>] {
        &self.solutions[self.discovered..]
    }

    /// Discovered solutions followed by their mirrors.
    pub fn all(&self) -> &[Vec<usize>] {
        &self.solutions
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn into_solutions(self) -> Vec<Vec<usize>> {
        self.solutions
    }
}

struct Placement {
    n: usize,
    columns: Vec<bool>,
    down_diagonals: Vec<bool>,
    up_diagonals: Vec<bool>,
    queens: Vec<usize>,
    found: Vec<Vec<usize>>,
}

impl Placement {
    fn new(n: usize) -> Self {
        Placement {
            n,
            columns: vec![false; n],
            down_diagonals: vec![false; 2 * n],
            up_diagonals: vec![false; 2 * n],
            queens: vec![0; n],
            found: Vec::new(),
        }
    }

    fn place(&mut self, row: usize) {
        if row == self.n {
            self.found.push(self.queens.clone());
            return;
        }

        // Intentional ordering bias, not a defect: row 0 scans from column 0,
        // deeper rows start at n/2 and wrap around. Only the discovery order
        // changes; every column is still tried.
        let start = if row == 0 { 0 } else { self.n / 2 };
        for offset in 0..self.n {
            let col = (start + offset) % self.n;
            let down = row + self.n - 1 - col;
            let up = row + col;
            if self.columns[col] || self.down_diagonals[down] || self.up_diagonals[up] {
                continue;
            }

            self.queens[row] = col;
            self.set(col, down, up, true);
            self.place(row + 1);
            self.set(col, down, up, false);
        }
    }

    fn set(&mut self, col: usize, down: usize, up: usize, value: bool) {
        self.columns[col] = value;
        self.down_diagonals[down] = value;
        self.up_diagonals[up] = value;
    }
}

/// Finds every placement of `n` non-attacking queens, then appends the
/// mirror image (`col -> n - 1 - col`) of each one.
///
/// The mirrored copies are not de-duplicated against the discovered set, so a
/// placement that is its own mirror shows up twice. That doubling is part of
/// the tool's output contract.
///
/// The marker arrays are sized from `n`, and the search is exponential, so in
/// practice `n` is limited to small boards (roughly `n <= 14`). Sizes whose
/// arrays cannot be allocated abort on allocation failure.
///
/// # Errors
/// Returns `NegativeQueenCount` if `n < 0`.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::queens::solve_n_queens;
///
/// let result = solve_n_queens(4).unwrap();
/// assert_eq!(result.discovered().len(), 2);
/// assert_eq!(result.len(), 4);
/// ```
pub fn solve_n_queens(n: i64) -> Result<QueensSolutions> {
    let n = usize::try_from(n).map_err(|_| PuzzleError::NegativeQueenCount(n))?;

    let mut placement = Placement::new(n);
    placement.place(0);
    let mut solutions = placement.found;
    let discovered = solutions.len();

    let mirrored: Vec<Vec<usize>> = solutions
        .iter()
        .map(|solution| solution.iter().map(|&col| n - 1 - col).collect())
        .collect();
    solutions.extend(mirrored);

    debug!(n, discovered, total = solutions.len(), "n-queens search finished");
    Ok(QueensSolutions {
        n,
        discovered,
        solutions,
    })
}

/// Checks that `solution` puts one queen per row with no two sharing a column
/// or a diagonal.
pub fn is_valid_placement(solution: &[usize]) -> bool {
    let n = solution.len();
    if solution.iter().any(|&col| col >= n) {
        return false;
    }
    for (r1, &c1) in solution.iter().enumerate() {
        for (r2, &c2) in solution.iter().enumerate().skip(r1 + 1) {
            if c1 == c2 || r2 - r1 == c1.abs_diff(c2) {
                return false;
            }
        }
    }
    true
}
