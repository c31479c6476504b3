//! Core game logic: gravity board, players and the immutable game state.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DIRECTIONS};
pub use player::Player;
pub use state::{GameOutcome, GameState, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH};
