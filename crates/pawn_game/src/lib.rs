// Turn orchestration on top of pawn_core
pub mod game;
pub mod player;

pub use game::{Game, Status, TurnError, EXIT_COMMAND};
pub use player::Player;
