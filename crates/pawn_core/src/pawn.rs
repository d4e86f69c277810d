use std::fmt;

use crate::{Board, Move, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward step. White pawns march toward rank 8 at the
    /// top of the grid, black pawns toward rank 1 at the bottom.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The home rank, where the two-square advance is still available.
    pub fn start_row(&self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// The opponent's back rank; reaching it wins the game.
    pub fn last_row(&self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// One-letter code used in the board rendering.
    pub fn code(&self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A single pawn. Pawns live in the board's arena and are tracked by
/// handle, so two pawns of the same color are still distinct pieces.
#[derive(Debug, Clone)]
pub struct Pawn {
    color: Color,
    position: Position,
}

impl Pawn {
    pub fn new(color: Color, position: Position) -> Self {
        Self { color, position }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, to: Position) {
        self.position = to;
    }

    /// True once this pawn stands on the opponent's back rank.
    pub fn has_reached_last_row(&self) -> bool {
        self.position.row() == self.color.last_row()
    }

    /// Every move this pawn may legally make on the given board: a forward
    /// push onto an empty square, a diagonal step onto an enemy pawn, and
    /// the two-square advance while still on the home rank.
    ///
    /// The two-square advance checks only its destination, not the square
    /// it skips over.
    pub fn valid_moves(&self, board: &Board) -> Vec<Move> {
        let forward = self.color.forward();

        let mut candidates = Vec::with_capacity(4);
        candidates.extend(self.position.offset(forward, 0));
        candidates.extend(self.position.offset(forward, -1));
        candidates.extend(self.position.offset(forward, 1));
        if self.position.row() == self.color.start_row() {
            candidates.extend(self.position.offset(2 * forward, 0));
        }

        candidates.retain(|&to| match board.pawn_at(to) {
            None => to.col() == self.position.col(),
            Some((_, occupant)) => {
                to.col() != self.position.col() && occupant.color() != self.color
            }
        });

        candidates
            .into_iter()
            .map(|to| Move::push(self.position, to))
            .collect()
    }
}
