use crate::engine::{Board, BOARD_SIZE};

/// Goal `(row, col)` of a tile value.
///
/// Tile `v` belongs at `((v - 1) / 3, (v - 1) % 3)`. Returns `None` for the
/// blank, which is not scored.
pub fn goal_position(tile: u8) -> Option<(usize, usize)> {
    let index = (tile as usize).checked_sub(1)?;
    Some((index / BOARD_SIZE, index % BOARD_SIZE))
}

/// Sum over all non-blank tiles of the Manhattan distance between the tile's
/// current cell and its goal cell.
///
/// Admissible and consistent for the sliding-tile puzzle; this is the
/// heuristic the solver uses by default.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::manhattan_distance;
///
/// assert_eq!(manhattan_distance(&Board::goal()), 0);
/// let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [0, 7, 8]]).unwrap();
/// assert_eq!(manhattan_distance(&board), 2);
/// ```
pub fn manhattan_distance(board: &Board) -> u32 {
    let mut distance = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if let Some((goal_r, goal_c)) = goal_position(board.get_tile(r, c)) {
                distance += (r.abs_diff(goal_r) + c.abs_diff(goal_c)) as u32;
            }
        }
    }
    distance
}

/// Counts non-blank tiles that are not on their goal cell.
///
/// Weaker than [`manhattan_distance`] but still admissible. Only used to
/// compare search effort between heuristics.
pub fn misplaced_tiles(board: &Board) -> u32 {
    let mut count = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            match goal_position(board.get_tile(r, c)) {
                Some(goal) if goal != (r, c) => count += 1,
                _ => {}
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Direction;

    #[test]
    fn test_goal_position() {
        assert_eq!(goal_position(1), Some((0, 0)));
        assert_eq!(goal_position(3), Some((0, 2)));
        assert_eq!(goal_position(4), Some((1, 0)));
        assert_eq!(goal_position(8), Some((2, 1)));
    }

    #[test]
    fn test_goal_position_of_blank_is_none() {
        assert_eq!(goal_position(0), None);
    }

    #[test]
    fn test_manhattan_distance_known_board() {
        // 8 at (0,0) belongs at (2,1): 3. 1 at (2,2) belongs at (0,0): 4.
        let board = Board::from_grid([[8, 2, 3], [4, 5, 6], [7, 0, 1]]).unwrap();
        assert_eq!(manhattan_distance(&board), 7);
    }

    #[test]
    fn test_manhattan_ignores_blank() {
        let board = Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        // 5 is one row low, 8 is one column right; the blank is not counted.
        assert_eq!(manhattan_distance(&board), 2);
    }

    #[test]
    fn test_manhattan_changes_by_one_per_move() {
        let board = Board::scrambled(11, 30);
        let h = manhattan_distance(&board) as i64;
        for dir in Direction::ALL {
            if let Some(next) = board.neighbor(dir) {
                let diff = (manhattan_distance(&next) as i64 - h).abs();
                assert_eq!(diff, 1, "a single slide moves exactly one tile one cell");
            }
        }
    }

    #[test]
    fn test_misplaced_tiles() {
        assert_eq!(misplaced_tiles(&Board::goal()), 0);
        let board = Board::from_grid([[8, 2, 3], [4, 5, 6], [7, 0, 1]]).unwrap();
        assert_eq!(misplaced_tiles(&board), 2);
        assert!(misplaced_tiles(&board) <= manhattan_distance(&board));
    }
}
