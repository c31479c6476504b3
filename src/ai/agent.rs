use crate::error::AgentError;
use crate::game::GameState;

use super::search::Depth;

/// A move chosen by an agent: the column and the state it produces.
pub type Move = (usize, GameState);

/// Universal interface for everything that can play a turn.
pub trait Agent {
    /// Choose a column for the player to move in `state`. Search agents
    /// honour `depth`; the others ignore it.
    fn get_move(&mut self, state: &GameState, depth: Depth) -> Result<Move, AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
