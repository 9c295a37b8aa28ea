//! Best-first (branch and bound) search for the 8-puzzle.
//!
//! Nodes are ordered by `f = g + h`, where `g` is the number of moves from the
//! start and `h` is a heuristic estimate (Manhattan distance by default).
//! Boards are recorded in a visited set when they are expanded, and children
//! whose board was already expanded are not pushed again.
//!
//! Duplicate boards that are still waiting in the frontier are NOT merged.
//! This is intentional: merging them would change which of several equal-cost
//! paths is returned. The price is that a shortest solution is not strictly
//! guaranteed. Do not tighten this into strict A* without changing the
//! documented contract.
use crate::engine::{Board, Direction};
use crate::error::Result;
use crate::heuristics::manhattan_distance;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use tracing::debug;

/// Heuristic function used to order the frontier.
pub type Heuristic = fn(&Board) -> u32;

/// A solution found by the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Blank moves from the initial board to the goal, in order.
    pub moves: Vec<Direction>,
    /// Nodes popped from the frontier and expanded.
    pub nodes_expanded: usize,
    /// Nodes created, including the root.
    pub nodes_generated: usize,
}

impl Solution {
    /// The moves as `"Up"`, `"Down"`, `"Left"` or `"Right"` labels.
    pub fn labels(&self) -> Vec<&'static str> {
        self.moves.iter().map(|m| m.label()).collect()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

type NodeId = usize;

struct SearchNode {
    board: Board,
    parent: Option<NodeId>,
    action: Option<Direction>,
    depth: u32,
    cost: u32,
}

/// Owns every node created during one search. Parent links are indices into
/// this arena and are only walked backwards, to rebuild the path.
struct SearchArena {
    nodes: Vec<SearchNode>,
}

impl SearchArena {
    fn new() -> Self {
        SearchArena { nodes: Vec::new() }
    }

    fn push(
        &mut self,
        board: Board,
        parent: Option<NodeId>,
        action: Option<Direction>,
        depth: u32,
        heuristic: Heuristic,
    ) -> NodeId {
        let cost = depth + heuristic(&board);
        self.nodes.push(SearchNode {
            board,
            parent,
            action,
            depth,
            cost,
        });
        self.nodes.len() - 1
    }

    fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    fn path_to(&self, id: NodeId) -> Vec<Direction> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            if let Some(action) = node.action {
                path.push(action);
            }
            current = node.parent;
        }
        path.reverse();
        path
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Min-priority queue on `(cost, insertion order)`.
///
/// Equal-cost nodes come out in the order they were pushed, which makes every
/// search reproducible.
struct Frontier {
    heap: BinaryHeap<Reverse<(u32, u64, NodeId)>>,
    next_seq: u64,
}

impl Frontier {
    fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, cost: u32, id: NodeId) {
        self.heap.push(Reverse((cost, self.next_seq, id)));
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, _, id))| id)
    }
}

/// Solves `initial` using the Manhattan distance heuristic.
///
/// Returns `None` if the goal is unreachable, which happens exactly when the
/// board fails the parity invariant. Unsolvable boards are only discovered by
/// exhausting the state space.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::solver::solve;
///
/// let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
/// let solution = solve(&board).unwrap();
/// assert_eq!(solution.labels(), vec!["Right"]);
/// ```
pub fn solve(initial: &Board) -> Option<Solution> {
    solve_with_heuristic(initial, manhattan_distance)
}

/// Validates raw rows and then solves them.
///
/// Malformed input is rejected before any search happens.
pub fn solve_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Option<Solution>> {
    let board = Board::from_rows(rows)?;
    Ok(solve(&board))
}

/// Pushes every in-bounds child of `current` whose board has not been
/// expanded yet.
///
/// Only `visited` is consulted. A child whose board is already waiting in the
/// frontier is pushed again, so the same board may sit there more than once.
fn expand(
    arena: &mut SearchArena,
    frontier: &mut Frontier,
    visited: &HashSet<Board>,
    current: NodeId,
    heuristic: Heuristic,
) {
    let (board, depth) = {
        let node = arena.get(current);
        (node.board, node.depth)
    };
    for direction in Direction::ALL {
        let Some(child) = board.neighbor(direction) else {
            continue;
        };
        if visited.contains(&child) {
            continue;
        }
        let id = arena.push(child, Some(current), Some(direction), depth + 1, heuristic);
        frontier.push(arena.get(id).cost, id);
    }
}

/// Best-first search ordered by `depth + heuristic(board)`.
pub fn solve_with_heuristic(initial: &Board, heuristic: Heuristic) -> Option<Solution> {
    let mut arena = SearchArena::new();
    let mut frontier = Frontier::new();
    let mut visited: HashSet<Board> = HashSet::new();
    let mut nodes_expanded = 0;

    let root = arena.push(*initial, None, None, 0, heuristic);
    frontier.push(arena.get(root).cost, root);
    debug!(start = %initial, h = arena.get(root).cost, "search started");

    while let Some(current) = frontier.pop() {
        let board = arena.get(current).board;

        if board.is_goal() {
            let moves = arena.path_to(current);
            debug!(
                moves = moves.len(),
                nodes_expanded,
                nodes_generated = arena.len(),
                "goal reached"
            );
            return Some(Solution {
                moves,
                nodes_expanded,
                nodes_generated: arena.len(),
            });
        }

        visited.insert(board);
        nodes_expanded += 1;
        expand(&mut arena, &mut frontier, &visited, current, heuristic);
    }

    debug!(
        nodes_expanded,
        nodes_generated = arena.len(),
        "frontier exhausted without reaching the goal"
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PuzzleError;
    use crate::heuristics::misplaced_tiles;

    fn board(grid: [[u8; 3]; 3]) -> Board {
        Board::from_grid(grid).unwrap()
    }

    #[test]
    fn test_goal_yields_empty_sequence() {
        let solution = solve(&Board::goal()).expect("goal is solvable");
        assert!(solution.is_empty());
        assert_eq!(solution.nodes_expanded, 0);
        assert_eq!(solution.nodes_generated, 1);
    }

    #[test]
    fn test_one_move_away() {
        let cases = [
            ([[1, 2, 3], [4, 5, 6], [7, 0, 8]], "Right"),
            ([[1, 2, 3], [4, 5, 0], [7, 8, 6]], "Down"),
        ];
        for (grid, expected) in cases {
            let solution = solve(&board(grid)).unwrap();
            assert_eq!(solution.labels(), vec![expected], "board {:?}", grid);
        }
    }

    #[test]
    fn test_replay_reaches_goal() {
        let start = board([[3, 4, 5], [2, 7, 6], [1, 8, 0]]);
        let solution = solve(&start).expect("board has even parity");
        let end = start.apply_moves(&solution.moves).unwrap();
        assert!(end.is_goal(), "replay ended at\n{}", end);
    }

    #[test]
    fn test_forced_two_moves() {
        let start = board([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);
        let solution = solve(&start).unwrap();
        assert_eq!(solution.moves, vec![Direction::Right, Direction::Right]);
    }

    #[test]
    fn test_unsolvable_board_returns_none() {
        let start = board([[1, 2, 3], [4, 5, 6], [8, 7, 0]]);
        assert!(solve(&start).is_none());
    }

    #[test]
    fn test_solve_is_deterministic() {
        let start = Board::scrambled(3, 60);
        let first = solve(&start).unwrap();
        let second = solve(&start).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_initial_board_not_mutated() {
        let start = board([[3, 4, 5], [2, 7, 6], [1, 8, 0]]);
        let copy = start;
        let _ = solve(&start);
        assert_eq!(start, copy);
    }

    #[test]
    fn test_other_heuristic_also_reaches_goal() {
        let start = Board::scrambled(5, 25);
        let solution = solve_with_heuristic(&start, misplaced_tiles).unwrap();
        assert!(start.apply_moves(&solution.moves).unwrap().is_goal());
    }

    #[test]
    fn test_solve_rows_validates_first() {
        let bad = [[1i64, 2, 3], [4, 5, 6], [7, 7, 0]];
        assert_eq!(solve_rows(&bad), Err(PuzzleError::DuplicateTile(7)));

        let unsolvable = [[1i64, 2, 3], [4, 5, 6], [8, 7, 0]];
        assert_eq!(solve_rows(&unsolvable), Ok(None));

        let near = [[1i64, 2, 3], [4, 5, 6], [7, 0, 8]];
        let solution = solve_rows(&near).unwrap().unwrap();
        assert_eq!(solution.labels(), vec!["Right"]);
    }

    #[test]
    fn test_frontier_breaks_ties_by_insertion_order() {
        let mut frontier = Frontier::new();
        frontier.push(5, 10);
        frontier.push(3, 11);
        frontier.push(5, 12);
        frontier.push(3, 13);
        let order: Vec<NodeId> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(order, vec![11, 13, 10, 12]);
    }

    #[test]
    fn test_expand_keeps_duplicate_frontier_boards() {
        let mut arena = SearchArena::new();
        let mut frontier = Frontier::new();
        let visited = HashSet::new();

        // The goal is already queued from another path but not yet expanded.
        let queued = arena.push(Board::goal(), None, None, 3, manhattan_distance);
        frontier.push(arena.get(queued).cost, queued);

        let near = board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        let parent = arena.push(near, None, None, 0, manhattan_distance);
        expand(&mut arena, &mut frontier, &visited, parent, manhattan_distance);

        let queued_boards: Vec<Board> = std::iter::from_fn(|| frontier.pop())
            .map(|id| arena.get(id).board)
            .collect();
        let goal_entries = queued_boards.iter().filter(|b| b.is_goal()).count();
        assert_eq!(goal_entries, 2, "queued boards are not merged");
        // Left, Right and Up are in bounds from the bottom middle.
        assert_eq!(queued_boards.len(), 4);
    }

    #[test]
    fn test_expand_skips_expanded_boards() {
        let mut arena = SearchArena::new();
        let mut frontier = Frontier::new();
        let mut visited = HashSet::new();
        visited.insert(Board::goal());

        let near = board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        let parent = arena.push(near, None, None, 0, manhattan_distance);
        expand(&mut arena, &mut frontier, &visited, parent, manhattan_distance);

        let boards: Vec<Board> = std::iter::from_fn(|| frontier.pop())
            .map(|id| arena.get(id).board)
            .collect();
        assert_eq!(boards.len(), 2);
        assert!(boards.iter().all(|b| !b.is_goal()));
    }

    #[test]
    fn test_hard_board_search_effort_is_stable() {
        // Node counts depend on duplicates staying in the frontier; merging
        // them changes both numbers.
        let start = board([[8, 6, 7], [2, 5, 4], [3, 0, 1]]);
        let solution = solve(&start).unwrap();
        assert_eq!(solution.len(), 31);
        assert_eq!(solution.nodes_expanded, 23911);
        assert_eq!(solution.nodes_generated, 35697);
        assert!(start.apply_moves(&solution.moves).unwrap().is_goal());
    }

    #[test]
    fn test_arena_path_reconstruction() {
        let mut arena = SearchArena::new();
        let start = board([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);
        let root = arena.push(start, None, None, 0, manhattan_distance);
        let mid_board = start.neighbor(Direction::Right).unwrap();
        let mid = arena.push(mid_board, Some(root), Some(Direction::Right), 1, manhattan_distance);
        let end_board = mid_board.neighbor(Direction::Right).unwrap();
        let end = arena.push(end_board, Some(mid), Some(Direction::Right), 2, manhattan_distance);

        assert_eq!(arena.get(root).cost, 2);
        assert_eq!(arena.get(end).cost, 2);
        assert_eq!(arena.path_to(end), vec![Direction::Right, Direction::Right]);
        assert!(arena.path_to(root).is_empty());
    }
}
