use crate::game::{Cell, GameOutcome, GameState, Player, DIRECTIONS};

/// Bonus added to the board size when scoring a Player One win.
pub const WIN_BONUS: i32 = 20;

/// Trait for scoring a position from Player One's point of view.
///
/// Implementations must not recurse into successors.
pub trait Evaluator: Send {
    fn evaluate(&self, state: &GameState) -> i32;
}

/// Score for a finished game: Player One wins score higher the fewer pieces
/// were placed, a Player Two win is -1 and a draw is 0.
pub fn terminal_score(state: &GameState, outcome: GameOutcome) -> i32 {
    match outcome {
        GameOutcome::Winner(Player::One) => {
            (state.rows() * state.cols()) as i32 + WIN_BONUS - state.piece_count() as i32
        }
        GameOutcome::Winner(Player::Two) => -1,
        GameOutcome::Draw => 0,
    }
}

/// Heuristic that credits Player One's longest run still able to grow to
/// `win_length`.
///
/// Only Player One's potential is rewarded; Player Two is served by the
/// minimizing side of the search.
pub struct LongestRunEvaluator;

impl LongestRunEvaluator {
    /// Credited length of the Player One run starting at (row, col) in
    /// direction (dr, dc). Each end capped by a Player Two piece costs one;
    /// a run boxed into fewer than `win_length` usable cells is worth 0.
    fn credit(state: &GameState, row: usize, col: usize, dr: isize, dc: isize) -> usize {
        let board = state.board();
        let len = board.run_length(row, col, dr, dc);

        let (r0, c0) = (row as isize, col as isize);
        let before = (r0 - dr, c0 - dc);
        let after = (r0 + dr * len as isize, c0 + dc * len as isize);

        let open_cells = |(mut r, mut c): (isize, isize), sr: isize, sc: isize| {
            let mut n = 0;
            while matches!(board.get_signed(r, c), Some(cell) if cell != Cell::Two) {
                n += 1;
                r += sr;
                c += sc;
            }
            n
        };
        let room = open_cells(before, -dr, -dc) + len + open_cells(after, dr, dc);
        if room < state.win_length() {
            return 0;
        }

        let capped = [before, after]
            .iter()
            .filter(|&&(r, c)| board.get_signed(r, c) == Some(Cell::Two))
            .count();
        len.saturating_sub(capped)
    }
}

impl Evaluator for LongestRunEvaluator {
    fn evaluate(&self, state: &GameState) -> i32 {
        if let Some(outcome) = state.winner() {
            return terminal_score(state, outcome);
        }

        let board = state.board();
        let mut best = 0;
        for row in 0..state.rows() {
            for col in 0..state.cols() {
                if board.get(row, col) != Cell::One {
                    continue;
                }
                for &(dr, dc) in &DIRECTIONS {
                    if board.is_run_start(row, col, dr, dc) {
                        best = best.max(Self::credit(state, row, col, dr, dc));
                    }
                }
            }
        }
        best as i32
    }
}
