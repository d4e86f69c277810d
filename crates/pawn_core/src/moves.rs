use std::fmt;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::{Board, ParseSquareError, PawnId, Position};

/// A from-to transition on the board.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    from: Position,
    to: Position,
    kind: MoveKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// An ordinary push or diagonal capture; any occupant of the
    /// destination square is taken.
    Push,
    /// An en-passant capture. The captured pawn is not on the destination
    /// square, so it is carried by handle.
    EnPassant { captured: PawnId },
}

/// Two moves are the same move when they connect the same squares; the
/// kind only records how a capture resolves. A parsed command can
/// therefore match a pending en-passant offer.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("`{0}` is not a move, expected four characters like `e2e4`")]
    Pattern(String),
    #[error(transparent)]
    Square(#[from] ParseSquareError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no pawn on {0}")]
    VacantFrom(Position),
    #[error("the en-passant victim is no longer on the board")]
    MissingVictim,
}

impl Move {
    pub fn push(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Push,
        }
    }

    pub fn en_passant(from: Position, to: Position, captured: PawnId) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::EnPassant { captured },
        }
    }

    pub fn from(&self) -> Position {
        self.from
    }

    pub fn to(&self) -> Position {
        self.to
    }

    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// A straight two-square advance, the only move that opens an
    /// en-passant window.
    pub fn is_double_advance(&self) -> bool {
        self.from.col() == self.to.col() && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// Carry the move out: remove whichever pawn it captures, then
    /// relocate the mover. Validation happens before application, so a
    /// missing mover here is a defect, not user error.
    pub fn apply(&self, board: &mut Board) -> Result<(), MoveError> {
        match self.kind {
            MoveKind::EnPassant { captured } => {
                if !board.remove(captured) {
                    return Err(MoveError::MissingVictim);
                }
            }
            MoveKind::Push => {
                if let Some((occupant, _)) = board.pawn_at(self.to) {
                    board.remove(occupant);
                }
            }
        }

        let (mover, _) = board
            .pawn_at(self.from)
            .ok_or(MoveError::VacantFrom(self.from))?;
        board
            .pawn_mut(mover)
            .ok_or(MoveError::VacantFrom(self.from))?
            .set_position(self.to);
        debug!("moved {} to {}", self.from, self.to);
        Ok(())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(ParseMoveError::Pattern(s.to_string()));
        }
        let (from, to) = s.split_at(2);
        Ok(Self::push(from.parse()?, to.parse()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
