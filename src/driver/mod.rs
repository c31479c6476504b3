//! Turn loop that pits two agents against each other, plus series results.

mod game_loop;
mod tally;

pub use game_loop::{play_game, GameRecord, MoveRecord};
pub use tally::SeriesTally;
