use super::board::Cell;

/// The two sides. Player One always moves first and is the maximizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::One,
            Player::Two => Cell::Two,
        }
    }

    /// +1 for Player One, -1 for Player Two.
    pub fn sign(self) -> i32 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_sign() {
        assert_eq!(Player::One.sign(), 1);
        assert_eq!(Player::Two.sign(), -1);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::One.name(), "Player 1");
        assert_eq!(Player::Two.name(), "Player 2");
    }
}
