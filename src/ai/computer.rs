use crate::error::AgentError;
use crate::game::GameState;

use super::agent::{Agent, Move};
use super::alphabeta::{AlphaBeta, PruneRule};
use super::minimax::Minimax;
use super::search::{select_best, Depth, SearchStrategy};

/// Search-driven agent. The search itself is a separate strategy object so
/// minimax and pruning can be swapped and tested on their own.
pub struct ComputerAgent<S = Minimax> {
    strategy: S,
}

/// Computer agent backed by alpha-beta pruning.
pub type ComputerPruneAgent = ComputerAgent<AlphaBeta>;

impl ComputerAgent<Minimax> {
    pub fn new() -> Self {
        Self::with_strategy(Minimax::new())
    }
}

impl Default for ComputerAgent<Minimax> {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerAgent<AlphaBeta> {
    pub fn pruning(rule: PruneRule) -> Self {
        Self::with_strategy(AlphaBeta::new(rule))
    }
}

impl<S: SearchStrategy> ComputerAgent<S> {
    pub fn with_strategy(strategy: S) -> Self {
        ComputerAgent { strategy }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<S: SearchStrategy> Agent for ComputerAgent<S> {
    fn get_move(&mut self, state: &GameState, depth: Depth) -> Result<Move, AgentError> {
        let best =
            select_best(&mut self.strategy, state, depth).ok_or(AgentError::NoLegalMoves)?;
        log::debug!(
            "{} picked column {} with value {} at depth {depth}",
            self.strategy.name(),
            best.column,
            best.value
        );
        Ok((best.column, best.state))
    }

    fn name(&self) -> &str {
        self.strategy.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::{GameOutcome, Player};

    fn play(columns: &[usize]) -> GameState {
        columns.iter().fold(GameState::initial(), |s, &col| {
            s.apply_move(col).unwrap()
        })
    }

    #[test]
    fn selects_legal_move_with_best_value() {
        let state = GameState::initial();
        let mut agent = ComputerAgent::new();
        let (column, next) = agent.get_move(&state, Depth::Plies(3)).unwrap();
        assert!(state.legal_moves().contains(&column));
        assert_eq!(next, state.apply_move(column).unwrap());

        let mut minimax = Minimax::new();
        let chosen = minimax.search(&next, Depth::Plies(3));
        for (_, sibling) in state.successors() {
            assert!(chosen >= minimax.search(&sibling, Depth::Plies(3)));
        }
    }

    #[test]
    fn takes_winning_move() {
        // Player One has three along the bottom; column 3 wins
        let state = play(&[0, 0, 1, 1, 2, 2]);
        for depth in [Depth::Plies(0), Depth::Plies(2)] {
            let (column, next) = ComputerAgent::new().get_move(&state, depth).unwrap();
            assert_eq!(column, 3, "Should take winning move at col 3");
            assert_eq!(next.winner(), Some(GameOutcome::Winner(Player::One)));
        }
    }

    #[test]
    fn blocks_opponent_win() {
        // Player Two has [0, 1, 2] on the bottom row; column 3 must be blocked
        let state = play(&[6, 0, 6, 1, 5, 2]);
        let (column, _) = ComputerAgent::new()
            .get_move(&state, Depth::Plies(1))
            .unwrap();
        assert_eq!(column, 3, "Should block opponent's winning move at col 3");
    }

    #[test]
    fn player_two_takes_winning_move() {
        let state = play(&[6, 0, 6, 1, 5, 2, 4]);
        let (column, next) = ComputerPruneAgent::pruning(PruneRule::Bounded)
            .get_move(&state, Depth::Plies(2))
            .unwrap();
        assert_eq!(column, 3);
        assert_eq!(next.winner(), Some(GameOutcome::Winner(Player::Two)));
    }

    #[test]
    fn pruning_agent_agrees_with_minimax_agent() {
        let mut plain = ComputerAgent::new();
        let mut pruning = ComputerPruneAgent::pruning(PruneRule::Bounded);
        let mut state = GameState::new(4, 5, 3).unwrap();
        while state.winner().is_none() {
            let a = plain.get_move(&state, Depth::Plies(4)).unwrap();
            let b = pruning.get_move(&state, Depth::Plies(4)).unwrap();
            assert_eq!(a, b);
            state = a.1;
        }
    }

    #[test]
    fn no_moves_on_full_board() {
        let state = GameState::from_rows(&["XOX", "OXO"], 3).unwrap();
        assert!(matches!(
            ComputerAgent::new().get_move(&state, Depth::Unbounded),
            Err(AgentError::NoLegalMoves)
        ));
    }

    #[test]
    fn beats_random_agent() {
        let games_per_side = 10;
        let mut wins = 0;

        for seed in 0..games_per_side * 2 {
            let computer_first = seed % 2 == 0;
            let mut computer = ComputerPruneAgent::pruning(PruneRule::Bounded);
            let mut random = RandomAgent::seeded(seed);
            let mut state = GameState::initial();

            while state.winner().is_none() {
                let computer_turn = (state.next_player() == Player::One) == computer_first;
                let (_, next) = if computer_turn {
                    computer.get_move(&state, Depth::Plies(2)).unwrap()
                } else {
                    random.get_move(&state, Depth::Plies(2)).unwrap()
                };
                state = next;
            }

            let computer_player = if computer_first { Player::One } else { Player::Two };
            if state.winner() == Some(GameOutcome::Winner(computer_player)) {
                wins += 1;
            }
        }

        let total = games_per_side * 2;
        assert!(
            wins * 10 > total * 7,
            "Computer should beat random >70% of the time, got {wins}/{total}"
        );
    }

    #[test]
    fn names_follow_strategy() {
        assert_eq!(ComputerAgent::new().name(), "Minimax");
        assert_eq!(ComputerPruneAgent::pruning(PruneRule::Bounded).name(), "AlphaBeta");
        assert_eq!(
            ComputerPruneAgent::pruning(PruneRule::Sibling).name(),
            "AlphaBeta (sibling)"
        );
    }
}
