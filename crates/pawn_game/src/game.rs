use log::{debug, info};
use thiserror::Error;

use pawn_core::{Board, Color, Move, MoveError, ParseMoveError, Position};

use crate::Player;

/// Command that abandons the match, matched case-insensitively.
pub const EXIT_COMMAND: &str = "exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Color),
    Stalemate,
    Exited,
}

/// Recoverable per-turn failures. None of these consume the turn; the
/// same player is prompted again with the board untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    #[error("Invalid input: {0}")]
    Malformed(#[from] ParseMoveError),
    #[error("Invalid input: no {0} pawn on {1}")]
    NotYourPawn(Color, Position),
    #[error("Invalid input: {0} is not a legal move")]
    Illegal(Move),
    #[error("Invalid input: the game is over")]
    GameOver,
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// The turn state machine. Owns the board, the two players (current
/// mover first) and the en-passant offers opened by the previous move.
pub struct Game {
    board: Board,
    players: [Player; 2],
    pending_en_passant: Vec<Move>,
    status: Status,
}

impl Game {
    pub fn new(white: impl Into<String>, black: impl Into<String>) -> Self {
        Self::with_board(Board::new(), white, black)
    }

    /// A game over an arbitrary board, White to move. The regular
    /// constructor sets up the standard sixteen pawns.
    pub fn with_board(board: Board, white: impl Into<String>, black: impl Into<String>) -> Self {
        Self {
            board,
            players: [
                Player::new(white, Color::White),
                Player::new(black, Color::Black),
            ],
            pending_en_passant: Vec::new(),
            status: Status::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The player whose move it is.
    pub fn current_player(&self) -> &Player {
        &self.players[0]
    }

    pub fn player(&self, color: Color) -> &Player {
        self.players
            .iter()
            .find(|player| player.color() == color)
            .unwrap()
    }

    /// En-passant captures open to the current player. Valid only until
    /// the next move is applied.
    pub fn en_passant_offers(&self) -> &[Move] {
        &self.pending_en_passant
    }

    /// Resolve one raw command line. Recoverable errors leave the game
    /// untouched; an accepted move advances the state machine and returns
    /// the resulting status.
    pub fn play(&mut self, command: &str) -> Result<Status, TurnError> {
        if self.status != Status::InProgress {
            return Err(TurnError::GameOver);
        }

        let command = command.trim();
        if command.eq_ignore_ascii_case(EXIT_COMMAND) {
            info!("match abandoned");
            self.status = Status::Exited;
            return Ok(self.status);
        }

        let wanted: Move = command.parse()?;
        let mover = self.current_player().color();
        let (_, pawn) = self
            .board
            .pawn_at(wanted.from())
            .filter(|(_, pawn)| pawn.color() == mover)
            .ok_or(TurnError::NotYourPawn(mover, wanted.from()))?;

        // The pending offers are searched first: an en-passant command
        // names a diagonal step onto an empty square, which plain move
        // generation would reject.
        let resolved = self
            .pending_en_passant
            .iter()
            .copied()
            .chain(pawn.valid_moves(&self.board))
            .find(|candidate| *candidate == wanted)
            .ok_or(TurnError::Illegal(wanted))?;

        resolved.apply(&mut self.board)?;
        debug!("{mover} played {resolved}");

        self.refresh_en_passant(resolved, mover);

        let reached_last_row = self
            .board
            .pawn_at(resolved.to())
            .map_or(false, |(_, pawn)| pawn.has_reached_last_row());
        let opponent = mover.opposite();

        if reached_last_row || self.board.pawns_of(opponent).next().is_none() {
            info!("{mover} wins");
            self.status = Status::Won(mover);
        } else if self.pending_en_passant.is_empty() && !self.has_any_move(opponent) {
            info!("stalemate, {opponent} has no legal move");
            self.status = Status::Stalemate;
        } else {
            self.players.swap(0, 1);
        }

        Ok(self.status)
    }

    /// Rebuild the en-passant offers after a move. Offers never survive
    /// more than one turn: the list is cleared and only refilled when the
    /// move just played was a two-square advance with an enemy pawn
    /// directly beside its destination.
    fn refresh_en_passant(&mut self, played: Move, mover: Color) {
        self.pending_en_passant.clear();
        if !played.is_double_advance() {
            return;
        }
        let Some((advanced, _)) = self.board.pawn_at(played.to()) else {
            return;
        };
        // The capturer lands on the square the advance skipped over.
        let Some(landing) = played.to().offset(-mover.forward(), 0) else {
            return;
        };
        for side in [-1, 1] {
            let Some(beside) = played.to().offset(0, side) else {
                continue;
            };
            if let Some((_, neighbour)) = self.board.pawn_at(beside) {
                if neighbour.color() != mover {
                    debug!("en passant open: {beside} takes on {landing}");
                    self.pending_en_passant
                        .push(Move::en_passant(beside, landing, advanced));
                }
            }
        }
    }

    fn has_any_move(&self, color: Color) -> bool {
        self.board
            .pawns_of(color)
            .any(|(_, pawn)| !pawn.valid_moves(&self.board).is_empty())
    }
}
