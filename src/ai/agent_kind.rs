use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

use super::agent::Agent;
use super::alphabeta::PruneRule;
use super::computer::{ComputerAgent, ComputerPruneAgent};
use super::human::HumanAgent;
use super::random::RandomAgent;

/// The agent variants a game can be set up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AgentKind {
    Random,
    Human,
    Computer,
    Prune,
}

impl AgentKind {
    /// Build a fresh agent of this kind. `seed` fixes the random agent's
    /// choices; `rule` selects the pruning variant.
    pub fn build(self, rule: PruneRule, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::Random => Box::new(seed.map_or_else(RandomAgent::new, RandomAgent::seeded)),
            AgentKind::Human => Box::new(HumanAgent::stdio()),
            AgentKind::Computer => Box::new(ComputerAgent::new()),
            AgentKind::Prune => Box::new(ComputerPruneAgent::pruning(rule)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::Human => "human",
            AgentKind::Computer => "computer",
            AgentKind::Prune => "prune",
        }
    }
}

impl FromStr for AgentKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "random" => Ok(AgentKind::Random),
            "h" | "human" => Ok(AgentKind::Human),
            "c" | "computer" | "minimax" => Ok(AgentKind::Computer),
            "p" | "prune" | "alphabeta" => Ok(AgentKind::Prune),
            _ => Err(ConfigError::UnknownAgent(s.to_string())),
        }
    }
}

impl TryFrom<String> for AgentKind {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AgentKind> for String {
    fn from(kind: AgentKind) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
