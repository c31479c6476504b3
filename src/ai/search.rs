use std::fmt;

use crate::game::{GameState, Player};

/// How many more plies a search may expand before falling back to the
/// evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    /// Search to the end of the game.
    Unbounded,
    /// Search at most this many more plies.
    Plies(u32),
}

impl Depth {
    /// True once a bounded search has no plies left.
    pub fn is_exhausted(self) -> bool {
        self == Depth::Plies(0)
    }

    /// Budget for the children of a node. Unbounded stays unbounded.
    pub fn decrement(self) -> Depth {
        match self {
            Depth::Unbounded => Depth::Unbounded,
            Depth::Plies(n) => Depth::Plies(n.saturating_sub(1)),
        }
    }
}

impl From<Option<u32>> for Depth {
    fn from(depth: Option<u32>) -> Self {
        depth.map_or(Depth::Unbounded, Depth::Plies)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depth::Unbounded => write!(f, "unbounded"),
            Depth::Plies(n) => write!(f, "{n}"),
        }
    }
}

/// A game-tree search producing utility values from Player One's point of
/// view (higher is better for Player One).
pub trait SearchStrategy: Send {
    fn value(&mut self, state: &GameState, depth: Depth) -> i32;

    /// Nodes expanded by the most recent call to `value`.
    fn nodes(&self) -> u64;

    fn name(&self) -> &str;
}

/// A root move together with its searched value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMove {
    pub column: usize,
    pub state: GameState,
    pub value: i32,
}

/// Score every root move in successor order and keep the best for the
/// player to move. Only a strictly better value replaces the incumbent, so
/// ties go to the lowest column.
pub fn select_best<S: SearchStrategy + ?Sized>(
    strategy: &mut S,
    state: &GameState,
    depth: Depth,
) -> Option<ScoredMove> {
    let player = state.next_player();
    let mut best: Option<ScoredMove> = None;

    for (column, child) in state.successors() {
        let value = strategy.value(&child, depth);
        log::debug!(
            "{}: column {column} -> {value} ({} nodes)",
            strategy.name(),
            strategy.nodes()
        );
        let better = match &best {
            None => true,
            Some(incumbent) => match player {
                Player::One => value > incumbent.value,
                Player::Two => value < incumbent.value,
            },
        };
        if better {
            best = Some(ScoredMove {
                column,
                state: child,
                value,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scores a child by the column its last piece went into.
    struct ColumnScore(Vec<i32>);

    impl SearchStrategy for ColumnScore {
        fn value(&mut self, state: &GameState, _depth: Depth) -> i32 {
            let col = (0..state.cols())
                .find(|&c| state.board().column_height(c) > 0)
                .unwrap_or(0);
            self.0[col]
        }

        fn nodes(&self) -> u64 {
            1
        }

        fn name(&self) -> &str {
            "ColumnScore"
        }
    }

    #[test]
    fn depth_decrements_to_zero() {
        let d = Depth::Plies(2);
        assert!(!d.is_exhausted());
        assert_eq!(d.decrement(), Depth::Plies(1));
        assert!(d.decrement().decrement().is_exhausted());
        assert_eq!(Depth::Plies(0).decrement(), Depth::Plies(0));
    }

    #[test]
    fn unbounded_never_exhausts() {
        assert!(!Depth::Unbounded.is_exhausted());
        assert_eq!(Depth::Unbounded.decrement(), Depth::Unbounded);
        assert_eq!(Depth::from(None), Depth::Unbounded);
        assert_eq!(Depth::from(Some(3)), Depth::Plies(3));
        assert_eq!(Depth::Unbounded.to_string(), "unbounded");
    }

    #[test]
    fn maximizer_takes_first_best() {
        let mut s = ColumnScore(vec![1, 5, 3, 5, 0, 2, 5]);
        let best = select_best(&mut s, &GameState::initial(), Depth::Plies(1)).unwrap();
        assert_eq!(best.column, 1);
        assert_eq!(best.value, 5);
        assert_eq!(best.state, GameState::initial().apply_move(1).unwrap());
    }

    #[test]
    fn minimizer_takes_first_lowest() {
        let state = GameState::new(3, 3, 3).unwrap().apply_move(0).unwrap();
        // Lowest non-empty column is always 0 here, so every child ties
        let mut s = ColumnScore(vec![4, 4, 4]);
        let best = select_best(&mut s, &state, Depth::Plies(1)).unwrap();
        assert_eq!(best.column, 0);
        assert_eq!(best.value, 4);
    }

    #[test]
    fn minimizer_replaces_with_strictly_lower() {
        // With the opening piece in the last column, each child scores by
        // its own column
        let state = GameState::new(3, 3, 3).unwrap().apply_move(2).unwrap();
        assert_eq!(state.next_player(), Player::Two);

        let mut s = ColumnScore(vec![4, 1, 3]);
        let best = select_best(&mut s, &state, Depth::Plies(1)).unwrap();
        assert_eq!(best.column, 1);
        assert_eq!(best.value, 1);
        assert_eq!(best.state, state.apply_move(1).unwrap());

        let mut s = ColumnScore(vec![4, 2, 1]);
        let best = select_best(&mut s, &state, Depth::Plies(1)).unwrap();
        assert_eq!((best.column, best.value), (2, 1));
    }

    #[test]
    fn no_moves_on_full_board() {
        let state = GameState::from_rows(&["XOX", "OXO"], 3).unwrap();
        let mut s = ColumnScore(vec![0, 0, 0]);
        assert!(select_best(&mut s, &state, Depth::Unbounded).is_none());
    }
}
