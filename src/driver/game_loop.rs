use crate::ai::{Agent, Depth};
use crate::error::AgentError;
use crate::game::{GameOutcome, GameState, Player};

/// A single move as it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub turn: usize,
    pub player: Player,
    pub column: usize,
}

/// Result of playing a game to completion.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<MoveRecord>,
    pub outcome: GameOutcome,
    pub final_state: GameState,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            GameOutcome::Winner(p) => Some(p),
            GameOutcome::Draw => None,
        }
    }
}

/// Play from `start` until the game ends, asking whichever agent owns the
/// next move. `on_move` sees every move and the state it produced.
pub fn play_game(
    player_one: &mut dyn Agent,
    player_two: &mut dyn Agent,
    depth: Depth,
    start: GameState,
    mut on_move: impl FnMut(&MoveRecord, &GameState),
) -> Result<GameRecord, AgentError> {
    log::info!(
        "{} vs {} on {}x{} (win length {}, depth {depth})",
        player_one.name(),
        player_two.name(),
        start.rows(),
        start.cols(),
        start.win_length()
    );

    let mut state = start;
    let mut moves = Vec::new();

    let outcome = loop {
        if let Some(outcome) = state.winner() {
            break outcome;
        }

        let player = state.next_player();
        let agent: &mut dyn Agent = match player {
            Player::One => &mut *player_one,
            Player::Two => &mut *player_two,
        };

        let (column, next) = agent.get_move(&state, depth)?;
        let legal = state.legal_moves();
        if !legal.contains(&column) {
            return Err(AgentError::IllegalMove { column, legal });
        }
        if next != state.apply_move(column)? {
            return Err(AgentError::StateMismatch { column });
        }

        let record = MoveRecord {
            turn: moves.len(),
            player,
            column,
        };
        on_move(&record, &next);
        moves.push(record);
        state = next;
    };

    log::info!("game over after {} moves: {outcome:?}", moves.len());

    Ok(GameRecord {
        moves,
        outcome,
        final_state: state,
    })
}
