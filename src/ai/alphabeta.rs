use crate::game::{GameState, Player};

use super::evaluation::{Evaluator, LongestRunEvaluator};
use super::search::{Depth, SearchStrategy};

/// Which cutoff test the pruning search applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PruneRule {
    /// Classical alpha-beta: bounds are inherited from every ancestor and the
    /// siblings left after a cutoff are reported as pruned. Returns the same
    /// value as plain minimax.
    #[default]
    Bounded,
    /// Single-level test: a child worse than its parent's running best stops
    /// the parent at once. The stopping child (plus whatever it pruned) is
    /// reported. No bounds are passed down, so the value can differ from
    /// minimax.
    Sibling,
}

impl std::str::FromStr for PruneRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bounded" | "classic" => Ok(PruneRule::Bounded),
            "sibling" | "shallow" => Ok(PruneRule::Sibling),
            other => Err(format!("unknown prune rule '{other}' (expected bounded or sibling)")),
        }
    }
}

/// Value of a pruning search plus the states it never expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneResult {
    pub value: i32,
    pub pruned: Vec<GameState>,
}

impl PruneResult {
    fn leaf(value: i32) -> Self {
        PruneResult {
            value,
            pruned: Vec::new(),
        }
    }
}

/// Minimax with pruning. Children are always visited in successor order, so
/// the pruned states are reproducible.
pub struct AlphaBeta {
    evaluator: Box<dyn Evaluator>,
    rule: PruneRule,
    nodes: u64,
    last_pruned: Vec<GameState>,
}

impl AlphaBeta {
    pub fn new(rule: PruneRule) -> Self {
        Self::with_evaluator(rule, Box::new(LongestRunEvaluator))
    }

    pub fn with_evaluator(rule: PruneRule, evaluator: Box<dyn Evaluator>) -> Self {
        AlphaBeta {
            evaluator,
            rule,
            nodes: 0,
            last_pruned: Vec::new(),
        }
    }

    pub fn rule(&self) -> PruneRule {
        self.rule
    }

    /// States pruned by the most recent `search_prune`.
    pub fn last_pruned(&self) -> &[GameState] {
        &self.last_pruned
    }

    /// Utility value of `state` and the states skipped while computing it.
    pub fn search_prune(&mut self, state: &GameState, depth: Depth) -> PruneResult {
        self.nodes = 0;
        let result = match self.rule {
            PruneRule::Bounded => self.bounded(state, depth, i32::MIN, i32::MAX),
            PruneRule::Sibling => self.sibling(state, depth),
        };
        self.last_pruned = result.pruned.clone();
        result
    }

    fn bounded(
        &mut self,
        state: &GameState,
        depth: Depth,
        mut alpha: i32,
        mut beta: i32,
    ) -> PruneResult {
        self.nodes += 1;

        if depth.is_exhausted() || state.winner().is_some() {
            return PruneResult::leaf(self.evaluator.evaluate(state));
        }

        let next = depth.decrement();
        let player = state.next_player();
        let mut best = match player {
            Player::One => i32::MIN,
            Player::Two => i32::MAX,
        };
        let mut pruned = Vec::new();

        let mut children = state.successors().into_iter();
        while let Some((_, child)) = children.next() {
            let result = self.bounded(&child, next, alpha, beta);
            pruned.extend(result.pruned);

            match player {
                Player::One => {
                    best = best.max(result.value);
                    alpha = alpha.max(result.value);
                }
                Player::Two => {
                    best = best.min(result.value);
                    beta = beta.min(result.value);
                }
            }

            if alpha >= beta {
                pruned.extend(children.by_ref().map(|(_, skipped)| skipped));
                break;
            }
        }

        PruneResult {
            value: best,
            pruned,
        }
    }

    fn sibling(&mut self, state: &GameState, depth: Depth) -> PruneResult {
        self.nodes += 1;

        if depth.is_exhausted() || state.winner().is_some() {
            return PruneResult::leaf(self.evaluator.evaluate(state));
        }

        let next = depth.decrement();
        let player = state.next_player();
        let mut best = match player {
            Player::One => i32::MIN,
            Player::Two => i32::MAX,
        };

        for (_, child) in state.successors() {
            let result = self.sibling(&child, next);
            let worse = match player {
                Player::One => result.value < best,
                Player::Two => result.value > best,
            };
            if worse {
                let mut pruned = result.pruned;
                pruned.push(child);
                return PruneResult {
                    value: best,
                    pruned,
                };
            }
            best = match player {
                Player::One => best.max(result.value),
                Player::Two => best.min(result.value),
            };
        }

        PruneResult::leaf(best)
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new(PruneRule::default())
    }
}

impl SearchStrategy for AlphaBeta {
    fn value(&mut self, state: &GameState, depth: Depth) -> i32 {
        let result = self.search_prune(state, depth);
        log::debug!(
            "{:?} pruning skipped {} states ({} nodes)",
            self.rule,
            result.pruned.len(),
            self.nodes
        );
        result.value
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }

    fn name(&self) -> &str {
        match self.rule {
            PruneRule::Bounded => "AlphaBeta",
            PruneRule::Sibling => "AlphaBeta (sibling)",
        }
    }
}
