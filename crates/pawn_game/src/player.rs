use pawn_core::{Board, Color, Pawn, PawnId};

/// A participant in the match. Players hold no pieces themselves; they
/// query the board for their pawns on demand.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn pawns<'a>(&self, board: &'a Board) -> impl Iterator<Item = (PawnId, &'a Pawn)> {
        board.pawns_of(self.color)
    }
}
