use std::fmt;

use log::debug;

use crate::{Color, Pawn, Position, SIZE};

/// Stable handle to a pawn in the board's arena. Handles stay valid for
/// the whole game; looking up a captured pawn simply yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PawnId(pub(crate) usize);

/// The board owns every live pawn. Captured pawns leave a tombstoned slot
/// behind so that the remaining handles keep their meaning.
#[derive(Debug, Clone, Default)]
pub struct Board {
    slots: Vec<Option<Pawn>>,
}

impl Board {
    /// A fresh board with eight pawns per side on their home ranks.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for col in 0..SIZE {
            for color in [Color::White, Color::Black] {
                let home = Position::new(color.start_row(), col).unwrap();
                board.spawn(Pawn::new(color, home));
            }
        }
        board
    }

    /// A board with no pawns on it.
    pub fn empty() -> Self {
        Self {
            slots: Vec::with_capacity(2 * SIZE as usize),
        }
    }

    /// Put a pawn on the board. The square must be vacant.
    pub fn spawn(&mut self, pawn: Pawn) -> PawnId {
        debug_assert!(
            self.pawn_at(pawn.position()).is_none(),
            "two pawns on {}",
            pawn.position()
        );
        self.slots.push(Some(pawn));
        PawnId(self.slots.len() - 1)
    }

    pub fn pawn(&self, id: PawnId) -> Option<&Pawn> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub(crate) fn pawn_mut(&mut self, id: PawnId) -> Option<&mut Pawn> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// The occupant of a square, if any. A linear scan: the board never
    /// holds more than sixteen pawns.
    pub fn pawn_at(&self, position: Position) -> Option<(PawnId, &Pawn)> {
        self.pawns().find(|(_, pawn)| pawn.position() == position)
    }

    /// All live pawns, with their handles.
    pub fn pawns(&self) -> impl Iterator<Item = (PawnId, &Pawn)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(n, slot)| slot.as_ref().map(|pawn| (PawnId(n), pawn)))
    }

    /// All live pawns of one color.
    pub fn pawns_of(&self, color: Color) -> impl Iterator<Item = (PawnId, &Pawn)> {
        self.pawns().filter(move |(_, pawn)| pawn.color() == color)
    }

    /// Take a pawn off the board for good. Returns whether it was present.
    pub fn remove(&mut self, id: PawnId) -> bool {
        match self.slots.get_mut(id.0).and_then(Option::take) {
            Some(pawn) => {
                debug!("{} pawn removed from {}", pawn.color(), pawn.position());
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Board {
    /// Fixed-width grid, rank 8 at the top, one-letter color codes and
    /// file labels underneath.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "  +---+---+---+---+---+---+---+---+";
        writeln!(f, "{RULE}")?;
        for row in 0..SIZE {
            write!(f, "{} |", SIZE - row)?;
            for col in 0..SIZE {
                let square = Position::new(row, col).unwrap();
                match self.pawn_at(square) {
                    Some((_, pawn)) => write!(f, " {} |", pawn.color().code())?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{RULE}")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
