// Core pawn-game logic modules
pub mod board;
pub mod moves;
pub mod pawn;
pub mod position;

// Re-export main types for convenience
pub use board::{Board, PawnId};
pub use moves::{Move, MoveError, MoveKind, ParseMoveError};
pub use pawn::{Color, Pawn};
pub use position::{ParseSquareError, Position, SIZE};
