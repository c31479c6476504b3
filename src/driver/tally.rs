use crate::game::Player;

use super::GameRecord;

/// Running results over a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesTally {
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
    total_moves: usize,
}

impl SeriesTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: &GameRecord) {
        match game.winner() {
            Some(Player::One) => self.player_one_wins += 1,
            Some(Player::Two) => self.player_two_wins += 1,
            None => self.draws += 1,
        }
        self.total_moves += game.moves.len();
    }

    pub fn games(&self) -> usize {
        self.player_one_wins + self.player_two_wins + self.draws
    }

    /// Fraction of games won by `player`.
    pub fn win_rate(&self, player: Player) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        let wins = match player {
            Player::One => self.player_one_wins,
            Player::Two => self.player_two_wins,
        };
        wins as f64 / games as f64
    }

    /// Average game length in moves.
    pub fn average_length(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / games as f64
    }
}
