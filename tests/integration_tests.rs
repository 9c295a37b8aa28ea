use eight_puzzle_solver::engine::{Board, Direction, Game};
use eight_puzzle_solver::queens::{is_valid_placement, solve_n_queens};
use eight_puzzle_solver::solver::{solve, solve_rows};
use eight_puzzle_solver::utils::{board_from_str, parse_moves};
use eight_puzzle_solver::PuzzleError;

#[test]
fn solver_moves_replay_to_goal_on_scrambled_boards() {
    for seed in 0..15 {
        let start = Board::scrambled(seed, 50);
        let solution = solve(&start).expect("random walks from the goal are solvable");
        let end = start
            .apply_moves(&solution.moves)
            .expect("every solver move stays on the board");
        assert!(end.is_goal(), "seed {} ended at\n{}", seed, end);
    }
}

#[test]
fn solution_labels_round_trip_through_the_text_boundary() {
    let start = board_from_str("345/276/180").unwrap();
    let solution = solve(&start).unwrap();

    let text = solution.labels().join(" ");
    let moves = parse_moves(&text).unwrap();
    assert_eq!(moves, solution.moves);
}

#[test]
fn game_replays_solver_output_like_a_presentation_layer() {
    let start = Board::scrambled(42, 30);
    let solution = solve(&start).unwrap();

    let mut game = Game::new_with_board(start);
    for direction in &solution.moves {
        assert!(game.apply_direction(*direction));
    }
    assert!(game.is_solved());
    assert_eq!(game.steps() as usize, solution.len());
}

#[test]
fn malformed_boards_fail_before_search() {
    let wrong_shape: Vec<Vec<i64>> = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![0]];
    assert!(matches!(
        solve_rows(&wrong_shape),
        Err(PuzzleError::InvalidShape(_))
    ));

    let missing_blank = [[1i64, 2, 3], [4, 5, 6], [7, 8, 8]];
    assert_eq!(solve_rows(&missing_blank), Err(PuzzleError::DuplicateTile(8)));
}

#[test]
fn classic_unsolvable_board_has_no_solution() {
    let board = board_from_str("123/456/870").unwrap();
    assert!(!board.is_solvable());
    assert!(solve(&board).is_none());
}

#[test]
fn one_move_from_goal_returns_that_move() {
    let goal = Board::goal();
    for direction in Direction::ALL {
        if let Some(near) = goal.neighbor(direction) {
            let solution = solve(&near).unwrap();
            assert_eq!(solution.moves, vec![direction.opposite()]);
        }
    }
}

#[test]
fn queens_counts_and_validity() {
    let expected_discovered = [(0, 1), (1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (6, 4), (8, 92)];
    for (n, count) in expected_discovered {
        let result = solve_n_queens(n).unwrap();
        assert_eq!(result.discovered().len(), count, "n = {}", n);
        assert_eq!(result.len(), 2 * count, "n = {}", n);
        for solution in result.all() {
            assert_eq!(solution.len(), n as usize);
            assert!(is_valid_placement(solution), "n = {}: {:?}", n, solution);
        }
    }
}

#[test]
fn queens_is_deterministic_and_rejects_negative() {
    assert_eq!(solve_n_queens(6).unwrap(), solve_n_queens(6).unwrap());
    assert_eq!(solve_n_queens(-3), Err(PuzzleError::NegativeQueenCount(-3)));
}
