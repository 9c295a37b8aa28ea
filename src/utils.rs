use crate::engine::{Board, Direction, BOARD_SIZE};
use crate::error::{PuzzleError, Result};

/// Parses an array of string slices into a `Board`.
///
/// Each string slice is one row, starting from row 0. A row may be written
/// compactly as three characters (`"123"`, with `.` or `_` allowed for the
/// blank) or as integers separated by whitespace or commas (`"1 2 3"`,
/// `"1,2,3"`).
///
/// # Returns
/// * `Ok(Board)` if the rows describe a valid board.
/// * `Err(PuzzleError)` if:
///     - a row contains a character that is not a tile,
///     - the shape is not 3x3,
///     - the values are not a permutation of `0..=8`.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["123", "4 5 6", "78."]).unwrap();
/// assert!(board.is_goal());
///
/// assert!(board_from_str_array(&["12X", "456", "780"]).is_err());
/// assert!(board_from_str_array(&["123", "456"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board> {
    let rows = s
        .iter()
        .enumerate()
        .map(|(r, row_str)| parse_row(r, row_str))
        .collect::<Result<Vec<Vec<i64>>>>()?;
    Board::from_rows(&rows)
}

fn parse_row(r: usize, row_str: &str) -> Result<Vec<i64>> {
    let row_str = row_str.trim();
    let separated = row_str.contains(|ch: char| ch.is_whitespace() || ch == ',');

    if !separated {
        return row_str
            .chars()
            .enumerate()
            .map(|(c, ch)| match ch {
                '.' | '_' => Ok(0),
                _ => ch
                    .to_digit(10)
                    .map(i64::from)
                    .ok_or(PuzzleError::UnrecognizedCharacter { ch, row: r, col: c }),
            })
            .collect();
    }

    row_str
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(c, token)| match token {
            "." | "_" => Ok(0),
            _ => token.parse::<i64>().map_err(|_| {
                let ch = token
                    .chars()
                    .find(|ch| !ch.is_ascii_digit() && *ch != '-')
                    .unwrap_or(' ');
                PuzzleError::UnrecognizedCharacter { ch, row: r, col: c }
            }),
        })
        .collect()
}

/// Parses a whole board from one string.
///
/// Rows are separated by newlines or `/`; blank lines are ignored, so the
/// contents of a board file can be passed directly.
///
/// ```
/// use eight_puzzle_solver::utils::board_from_str;
/// assert!(board_from_str("123/456/780").unwrap().is_goal());
/// assert!(board_from_str("1 2 3\n\n4 5 6\n7 8 0\n").unwrap().is_goal());
/// ```
pub fn board_from_str(s: &str) -> Result<Board> {
    let rows: Vec<&str> = s
        .split(|ch: char| ch == '\n' || ch == '/')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if rows.len() != BOARD_SIZE {
        return Err(PuzzleError::InvalidShape(format!(
            "expected {} rows, found {}",
            BOARD_SIZE,
            rows.len()
        )));
    }
    board_from_str_array(&rows)
}

/// Parses move labels separated by whitespace or commas.
///
/// ```
/// use eight_puzzle_solver::engine::Direction;
/// use eight_puzzle_solver::utils::parse_moves;
/// assert_eq!(
///     parse_moves("Up, left down").unwrap(),
///     vec![Direction::Up, Direction::Left, Direction::Down]
/// );
/// ```
pub fn parse_moves(s: &str) -> Result<Vec<Direction>> {
    s.split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse::<Direction>)
        .collect()
}
