use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::AgentError;
use crate::game::GameState;

use super::agent::{Agent, Move};
use super::search::Depth;

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn get_move(&mut self, state: &GameState, _depth: Depth) -> Result<Move, AgentError> {
        let mut successors = state.successors();
        if successors.is_empty() {
            return Err(AgentError::NoLegalMoves);
        }
        let idx = self.rng.random_range(0..successors.len());
        Ok(successors.swap_remove(idx))
    }

    fn name(&self) -> &str {
        "Random"
    }
}
