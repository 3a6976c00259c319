//! Win condition checking on the torus
//!
//! A stone wins when the line through it, in one of four directions, holds
//! at least `needed` consecutive stones of its color. Lines wrap across both
//! seams, so every scan is bounded by the direction's cycle length on the
//! board; otherwise a fully occupied ring would be walked forever.

use crate::board::{cycle_length, Board, Cell, Move, Stone};

/// Direction vectors for line checking, in priority order
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Along the ring (u)
    (0, 1),  // Around the tube (v)
    (1, 1),  // Diagonal
    (1, -1), // Anti-diagonal
];

/// Outcome of a win check for one move
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WinResult {
    /// Winning player, `Stone::Empty` when there is no win
    pub winner: Stone,
    /// Direction of the winning line
    pub direction: Option<(i32, i32)>,
    /// Length of the whole run through the move
    pub count: usize,
    /// Exactly `needed` cells in line order, empty when there is no win
    pub winning_cells: Vec<Cell>,
}

impl WinResult {
    /// Neutral result: no winner
    pub fn none() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_win(&self) -> bool {
        self.winner != Stone::Empty
    }
}

/// Contiguous same-color run through a move along one direction
struct LineRun {
    /// Cells in line order, backward end first
    cells: Vec<Cell>,
    /// Position of the move inside `cells`
    move_index: usize,
}

/// Walk from `origin` by `(di, dj)` while cells hold `player`, at most
/// `max_steps` times.
fn walk(board: &Board, origin: Cell, player: Stone, di: i32, dj: i32, max_steps: usize) -> Vec<Cell> {
    let mut run = Vec::new();
    let mut cell = origin;
    for _ in 0..max_steps {
        cell = cell.step(di, dj, 1);
        if board.get(cell) != player {
            break;
        }
        run.push(cell);
    }
    run
}

fn collect_line(board: &Board, mv: Move, di: i32, dj: i32) -> LineRun {
    let max_steps = cycle_length(board.u_size(), board.v_size(), di, dj) - 1;
    let origin = mv.cell();

    let mut cells = walk(board, origin, mv.player, -di, -dj, max_steps);
    cells.reverse();
    let move_index = cells.len();
    cells.push(origin);
    cells.extend(walk(board, origin, mv.player, di, dj, max_steps));

    LineRun { cells, move_index }
}

/// Pick the `needed` cells to report from a run of at least `needed`.
///
/// The window must contain the move and fit inside the run; among those the
/// earliest start is taken.
pub fn select_winning_window(cells: &[Cell], move_index: usize, needed: usize) -> &[Cell] {
    let start_min = (move_index + 1).saturating_sub(needed);
    let start_max = move_index.min(cells.len().saturating_sub(needed));
    let start = start_min.min(start_max);
    &cells[start..start + needed]
}

/// Check whether `last_move` completes a line of `needed` stones.
///
/// Directions are tried in [`DIRECTIONS`] order and the first qualifying one
/// is reported. A missing move or an empty-stone move never wins.
pub fn check_win(board: &Board, last_move: Option<Move>, needed: usize) -> WinResult {
    let mv = match last_move {
        Some(mv) if mv.player.is_player() => mv,
        _ => return WinResult::none(),
    };

    for (di, dj) in DIRECTIONS {
        let run = collect_line(board, mv, di, dj);
        let count = run.cells.len();
        if count >= needed {
            return WinResult {
                winner: mv.player,
                direction: Some((di, dj)),
                count,
                winning_cells: select_winning_window(&run.cells, run.move_index, needed).to_vec(),
            };
        }
    }

    WinResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(i, j) in cells {
            board.place_stone(Cell::new(i, j), stone);
        }
    }

    fn cells(list: &[(u8, u8)]) -> Vec<Cell> {
        list.iter().map(|&(i, j)| Cell::new(i, j)).collect()
    }

    fn mv(i: u8, j: u8, player: Stone) -> Option<Move> {
        Some(Move::new(Cell::new(i, j), player))
    }

    #[test]
    fn test_five_along_ring() {
        let mut board = Board::new();
        let line = [(5, 3), (6, 3), (7, 3), (8, 3), (9, 3)];
        place_all(&mut board, &line, Stone::One);

        let result = check_win(&board, mv(9, 3, Stone::One), 5);
        assert_eq!(result.winner, Stone::One);
        assert_eq!(result.direction, Some((1, 0)));
        assert_eq!(result.count, 5);
        assert_eq!(result.winning_cells, cells(&line));
    }

    #[test]
    fn test_five_around_tube() {
        let mut board = Board::new();
        let line = [(10, 1), (10, 2), (10, 3), (10, 4), (10, 5)];
        place_all(&mut board, &line, Stone::Two);

        let result = check_win(&board, mv(10, 5, Stone::Two), 5);
        assert_eq!(result.winner, Stone::Two);
        assert_eq!(result.direction, Some((0, 1)));
        assert_eq!(result.winning_cells, cells(&line));
    }

    #[test]
    fn test_five_diagonal() {
        let mut board = Board::new();
        let line = [(2, 1), (3, 2), (4, 3), (5, 4), (6, 5)];
        place_all(&mut board, &line, Stone::One);

        let result = check_win(&board, mv(6, 5, Stone::One), 5);
        assert_eq!(result.winner, Stone::One);
        assert_eq!(result.direction, Some((1, 1)));
        assert_eq!(result.winning_cells, cells(&line));
    }

    #[test]
    fn test_five_anti_diagonal() {
        let mut board = Board::new();
        let line = [(4, 6), (5, 5), (6, 4), (7, 3), (8, 2)];
        place_all(&mut board, &line, Stone::Two);

        let result = check_win(&board, mv(8, 2, Stone::Two), 5);
        assert_eq!(result.winner, Stone::Two);
        assert_eq!(result.direction, Some((1, -1)));
        assert_eq!(result.winning_cells, cells(&line));
    }

    #[test]
    fn test_five_across_i_seam() {
        let mut board = Board::new();
        let line = [(14, 4), (15, 4), (0, 4), (1, 4), (2, 4)];
        place_all(&mut board, &line, Stone::One);

        let result = check_win(&board, mv(0, 4, Stone::One), 5);
        assert_eq!(result.winner, Stone::One);
        assert_eq!(result.winning_cells, cells(&line));
    }

    #[test]
    fn test_five_across_j_seam() {
        let mut board = Board::new();
        let line = [(7, 6), (7, 7), (7, 0), (7, 1), (7, 2)];
        place_all(&mut board, &line, Stone::Two);

        let result = check_win(&board, mv(7, 0, Stone::Two), 5);
        assert_eq!(result.winner, Stone::Two);
        assert_eq!(result.winning_cells, cells(&line));
    }

    #[test]
    fn test_diagonal_across_both_seams() {
        let mut board = Board::new();
        let line = [(14, 6), (15, 7), (0, 0), (1, 1), (2, 2)];
        place_all(&mut board, &line, Stone::One);

        let result = check_win(&board, mv(15, 7, Stone::One), 5);
        assert_eq!(result.direction, Some((1, 1)));
        assert_eq!(result.winning_cells, cells(&line));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(1, 0), (2, 0), (3, 0), (4, 0)], Stone::One);

        let result = check_win(&board, mv(4, 0, Stone::One), 5);
        assert_eq!(result.winner, Stone::Empty);
        assert_eq!(result.direction, None);
        assert_eq!(result.count, 0);
        assert!(result.winning_cells.is_empty());
    }

    #[test]
    fn test_opponent_stone_breaks_run() {
        let mut board = Board::new();
        place_all(&mut board, &[(1, 2), (2, 2), (4, 2), (5, 2)], Stone::One);
        place_all(&mut board, &[(3, 2)], Stone::Two);

        assert!(!check_win(&board, mv(5, 2, Stone::One), 5).is_win());
    }

    #[test]
    fn test_no_move_or_empty_player() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)], Stone::One);

        assert_eq!(check_win(&board, None, 5), WinResult::none());
        assert_eq!(check_win(&board, mv(2, 0, Stone::Empty), 5), WinResult::none());
    }

    #[test]
    fn test_overline_window_contains_move() {
        let mut board = Board::new();
        let run: Vec<(u8, u8)> = (3..10).map(|i| (i, 5)).collect();
        place_all(&mut board, &run, Stone::One);

        // Move in the middle of a seven-stone run: earliest window holding it.
        let result = check_win(&board, mv(6, 5, Stone::One), 5);
        assert_eq!(result.count, 7);
        assert_eq!(result.winning_cells, cells(&[(3, 5), (4, 5), (5, 5), (6, 5), (7, 5)]));

        // Move at the far end: window must end on it.
        let result = check_win(&board, mv(9, 5, Stone::One), 5);
        assert_eq!(result.winning_cells, cells(&[(5, 5), (6, 5), (7, 5), (8, 5), (9, 5)]));

        // Move at the near end: window starts on it.
        let result = check_win(&board, mv(3, 5, Stone::One), 5);
        assert_eq!(result.winning_cells, cells(&[(3, 5), (4, 5), (5, 5), (6, 5), (7, 5)]));
    }

    #[test]
    fn test_full_ring_terminates() {
        let mut board = Board::new();
        let ring: Vec<(u8, u8)> = (0..8).map(|j| (3, j)).collect();
        place_all(&mut board, &ring, Stone::Two);

        // Each walk stops after cycle_length - 1 = 7 steps.
        let result = check_win(&board, mv(3, 0, Stone::Two), 5);
        assert_eq!(result.direction, Some((0, 1)));
        assert_eq!(result.count, 15);
        assert_eq!(result.winning_cells, cells(&[(3, 4), (3, 5), (3, 6), (3, 7), (3, 0)]));
    }

    #[test]
    fn test_first_direction_wins_ties() {
        let mut board = Board::new();
        // Cross through (8, 4): ring line and tube line both complete.
        let ring: Vec<(u8, u8)> = (6..11).map(|i| (i, 4)).collect();
        let tube: Vec<(u8, u8)> = (2..7).map(|j| (8, j)).collect();
        place_all(&mut board, &ring, Stone::One);
        place_all(&mut board, &tube, Stone::One);

        let result = check_win(&board, mv(8, 4, Stone::One), 5);
        assert_eq!(result.direction, Some((1, 0)));
        assert_eq!(result.winning_cells, cells(&ring));
    }

    #[test]
    fn test_custom_needed() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (1, 0), (2, 0)], Stone::One);
        let result = check_win(&board, mv(1, 0, Stone::One), 3);
        assert_eq!(result.winning_cells, cells(&[(0, 0), (1, 0), (2, 0)]));
        assert!(!check_win(&board, mv(1, 0, Stone::One), 4).is_win());
    }

    #[test]
    fn test_select_window_rule() {
        let run = cells(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]);
        assert_eq!(select_winning_window(&run, 0, 5), &run[0..5]);
        assert_eq!(select_winning_window(&run, 2, 5), &run[0..5]);
        assert_eq!(select_winning_window(&run, 5, 5), &run[1..6]);
    }
}
