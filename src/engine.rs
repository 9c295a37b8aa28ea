//! Core board model for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Direction`: the four ways the blank can slide.
//! - `Board`: an immutable, validated 3x3 arrangement of tiles `0..=8`
//!   where `0` is the blank. Every move produces a new `Board`.
//! - `Game`: a mutable play session over a `Board`, with history for undo.
//!   This is what a presentation layer drives.
use crate::error::{PuzzleError, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Side length of the board. The puzzle is always 3x3.
pub const BOARD_SIZE: usize = 3;

/// The solved arrangement.
pub const GOAL_GRID: [[u8; BOARD_SIZE]; BOARD_SIZE] = [[1, 2, 3], [4, 5, 6], [7, 8, 0]];

/// Starting arrangement used by the interactive player when none is given.
pub const DEFAULT_START_GRID: [[u8; BOARD_SIZE]; BOARD_SIZE] = [[3, 4, 5], [2, 7, 6], [1, 8, 0]];

/// Direction the blank moves in.
///
/// `Up` swaps the blank with the tile above it, `Left` with the tile to its
/// left, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions in the order the solver expands them.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Row and column offset of the blank for this move.
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    /// The move label used at the solver boundary.
    ///
    /// ```
    /// use eight_puzzle_solver::engine::Direction;
    /// assert_eq!(Direction::Up.label(), "Up");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Up => "Up",
            Direction::Down => "Down",
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns the direction that moves the blank from `blank` onto `target`,
    /// if the two cells are orthogonally adjacent.
    pub fn between(blank: (usize, usize), target: (usize, usize)) -> Option<Direction> {
        Direction::ALL.into_iter().find(|dir| {
            let (dr, dc) = dir.delta();
            blank.0.checked_add_signed(dr) == Some(target.0)
                && blank.1.checked_add_signed(dc) == Some(target.1)
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(PuzzleError::UnknownMove(s.trim().to_string())),
        }
    }
}

/// A validated 3x3 board.
///
/// Holds each value in `0..=8` exactly once. Boards are `Copy` and never
/// mutated in place; moves return new boards, which keeps them usable as
/// visited-set keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[u8; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Returns the solved board.
    pub fn goal() -> Self {
        Board { grid: GOAL_GRID }
    }

    /// Creates a board from a fixed-size grid, checking that every value in
    /// `0..=8` appears exactly once.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// assert!(Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]).is_ok());
    /// assert!(Board::from_grid([[1, 1, 3], [4, 5, 6], [7, 8, 0]]).is_err());
    /// assert!(Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 9, 0]]).is_err());
    /// ```
    pub fn from_grid(grid: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self> {
        let mut seen = [false; BOARD_SIZE * BOARD_SIZE];
        for (r, row) in grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let slot = seen.get_mut(value as usize).ok_or(PuzzleError::TileOutOfRange {
                    row: r,
                    col: c,
                    value: value as i64,
                })?;
                if *slot {
                    return Err(PuzzleError::DuplicateTile(value));
                }
                *slot = true;
            }
        }
        Ok(Board { grid })
    }

    /// Creates a board from loosely shaped rows of integers.
    ///
    /// Fails with `InvalidShape` unless there are exactly three rows of three
    /// values, and with `TileOutOfRange` or `DuplicateTile` if the values are
    /// not a permutation of `0..=8`.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(PuzzleError::InvalidShape(format!(
                "expected {} rows, found {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut grid = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != BOARD_SIZE {
                return Err(PuzzleError::InvalidShape(format!(
                    "row {} has {} tiles, expected {}",
                    r,
                    row.len(),
                    BOARD_SIZE
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                grid[r][c] = u8::try_from(value)
                    .ok()
                    .filter(|v| (*v as usize) < BOARD_SIZE * BOARD_SIZE)
                    .ok_or(PuzzleError::TileOutOfRange { row: r, col: c, value })?;
            }
        }
        Board::from_grid(grid)
    }

    /// Generates a solvable board by walking the blank `steps` random moves
    /// away from the goal. The same seed always yields the same board.
    pub fn scrambled(seed: u64, steps: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal();
        for _ in 0..steps {
            let options: Vec<Board> = Direction::ALL
                .iter()
                .filter_map(|dir| board.neighbor(*dir))
                .collect();
            board = options[rng.gen_range(0..options.len())];
        }
        board
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is not below `BOARD_SIZE`.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    pub fn grid(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Row and column of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        for (r, row) in self.grid.iter().enumerate() {
            if let Some(c) = row.iter().position(|&v| v == 0) {
                return (r, c);
            }
        }
        unreachable!("a validated board always holds a blank")
    }

    pub fn is_goal(&self) -> bool {
        self.grid == GOAL_GRID
    }

    /// Returns the board produced by sliding the blank in `direction`, or
    /// `None` if the blank would leave the grid. `self` is left untouched.
    pub fn neighbor(&self, direction: Direction) -> Option<Board> {
        let (r, c) = self.blank_position();
        let (dr, dc) = direction.delta();
        let nr = r.checked_add_signed(dr).filter(|&v| v < BOARD_SIZE)?;
        let nc = c.checked_add_signed(dc).filter(|&v| v < BOARD_SIZE)?;

        let mut grid = self.grid;
        grid[r][c] = grid[nr][nc];
        grid[nr][nc] = 0;
        Some(Board { grid })
    }

    /// Like [`Board::neighbor`], but reports an off-grid move as an error.
    pub fn apply_move(&self, direction: Direction) -> Result<Board> {
        self.neighbor(direction)
            .ok_or(PuzzleError::IllegalMove(direction))
    }

    /// Replays a move sequence from this board.
    ///
    /// ```
    /// use eight_puzzle_solver::engine::{Board, Direction};
    /// let start = Board::from_grid([[1, 2, 3], [4, 5, 6], [0, 7, 8]]).unwrap();
    /// let end = start.apply_moves(&[Direction::Right, Direction::Right]).unwrap();
    /// assert!(end.is_goal());
    /// ```
    pub fn apply_moves(&self, moves: &[Direction]) -> Result<Board> {
        moves
            .iter()
            .try_fold(*self, |board, &direction| board.apply_move(direction))
    }

    /// Checks the sliding-tile parity invariant.
    ///
    /// A board can reach the goal iff the parity of its cell permutation
    /// equals the parity of the blank's Manhattan distance from the
    /// bottom-right corner.
    pub fn is_solvable(&self) -> bool {
        const CELLS: usize = BOARD_SIZE * BOARD_SIZE;
        let mut target = [0usize; CELLS];
        for (i, slot) in target.iter_mut().enumerate() {
            let value = self.grid[i / BOARD_SIZE][i % BOARD_SIZE] as usize;
            *slot = if value == 0 { CELLS - 1 } else { value - 1 };
        }

        let mut visited = [false; CELLS];
        let mut cycles = 0;
        for start in 0..CELLS {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = target[i];
            }
        }
        let permutation_parity = (CELLS - cycles) % 2;

        let (r, c) = self.blank_position();
        let blank_parity = ((BOARD_SIZE - 1 - r) + (BOARD_SIZE - 1 - c)) % 2;

        permutation_parity == blank_parity
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|&v| if v == 0 { ".".to_string() } else { v.to_string() })
                .collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// A play session over a board, as driven by a presentation layer.
///
/// The session owns its own copy of the board and a history of previous
/// boards so moves can be undone.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::{Board, Direction, Game};
/// let start = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
/// let mut game = Game::new_with_board(start);
///
/// // Clicking the 8 slides it into the blank.
/// assert!(game.process_move(2, 2));
/// assert!(game.is_solved());
///
/// assert!(game.undo_last_move());
/// assert!(game.apply_direction(Direction::Right));
/// assert_eq!(game.steps(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    steps: u32,
    history: Vec<Board>,
}

impl Game {
    pub fn new_with_board(initial_board: Board) -> Self {
        Game {
            board: initial_board,
            steps: 0,
            history: vec![initial_board],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves applied and not undone.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_goal()
    }

    /// Handles a click on the tile at `(r, c)`.
    ///
    /// The tile swaps with the blank only when the two are orthogonally
    /// adjacent. Returns `false` and leaves the board unchanged otherwise.
    pub fn process_move(&mut self, r: usize, c: usize) -> bool {
        if r >= BOARD_SIZE || c >= BOARD_SIZE {
            return false;
        }
        match Direction::between(self.board.blank_position(), (r, c)) {
            Some(direction) => self.apply_direction(direction),
            None => false,
        }
    }

    /// Slides the blank in `direction`. Returns `false` if that would leave
    /// the grid.
    pub fn apply_direction(&mut self, direction: Direction) -> bool {
        match self.board.neighbor(direction) {
            Some(next) => {
                self.board = next;
                self.steps += 1;
                self.history.push(next);
                true
            }
            None => false,
        }
    }

    /// Reverts the last move. Returns `false` when already at the initial board.
    pub fn undo_last_move(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        if let Some(previous) = self.history.last() {
            self.board = *previous;
            self.steps -= 1;
        }
        true
    }
}
