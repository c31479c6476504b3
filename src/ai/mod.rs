//! Agents and the search engines behind them.

mod agent;
mod agent_kind;
mod alphabeta;
mod computer;
mod evaluation;
mod human;
mod minimax;
mod random;
mod search;

pub use agent::{Agent, Move};
pub use agent_kind::AgentKind;
pub use alphabeta::{AlphaBeta, PruneResult, PruneRule};
pub use computer::{ComputerAgent, ComputerPruneAgent};
pub use evaluation::{terminal_score, Evaluator, LongestRunEvaluator, WIN_BONUS};
pub use human::{HumanAgent, ReadLine};
pub use minimax::Minimax;
pub use random::RandomAgent;
pub use search::{select_best, Depth, ScoredMove, SearchStrategy};
