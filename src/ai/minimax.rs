use crate::game::{GameState, Player};

use super::evaluation::{Evaluator, LongestRunEvaluator};
use super::search::{Depth, SearchStrategy};

/// Plain minimax: Player One maximizes, Player Two minimizes, every child is
/// expanded.
pub struct Minimax {
    evaluator: Box<dyn Evaluator>,
    nodes: u64,
}

impl Minimax {
    pub fn new() -> Self {
        Self::with_evaluator(Box::new(LongestRunEvaluator))
    }

    pub fn with_evaluator(evaluator: Box<dyn Evaluator>) -> Self {
        Minimax { evaluator, nodes: 0 }
    }

    /// Utility value of `state`, searching at most `depth` plies.
    pub fn search(&mut self, state: &GameState, depth: Depth) -> i32 {
        self.nodes = 0;
        self.minimax(state, depth)
    }

    fn minimax(&mut self, state: &GameState, depth: Depth) -> i32 {
        self.nodes += 1;

        if depth.is_exhausted() || state.winner().is_some() {
            return self.evaluator.evaluate(state);
        }

        let next = depth.decrement();
        match state.next_player() {
            Player::One => {
                let mut max_value = i32::MIN;
                for (_, child) in state.successors() {
                    max_value = max_value.max(self.minimax(&child, next));
                }
                max_value
            }
            Player::Two => {
                let mut min_value = i32::MAX;
                for (_, child) in state.successors() {
                    min_value = min_value.min(self.minimax(&child, next));
                }
                min_value
            }
        }
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStrategy for Minimax {
    fn value(&mut self, state: &GameState, depth: Depth) -> i32 {
        self.search(state, depth)
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
