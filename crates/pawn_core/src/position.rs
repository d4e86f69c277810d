use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Board edge length.
pub const SIZE: u8 = 8;

/// A square on the board. Row 0 is rank 8 (black's back rank), row 7 is
/// rank 1; column 0 is file 'a'. Both coordinates are always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not a square, expected a file a-h and a rank 1-8")]
pub struct ParseSquareError(String);

impl Position {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < SIZE && col < SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// The square `rows` down and `cols` right of this one, if it is still
    /// on the board.
    pub fn offset(&self, rows: i8, cols: i8) -> Option<Self> {
        let row = self.row as i8 + rows;
        let col = self.col as i8 + cols;
        if (0..SIZE as i8).contains(&row) && (0..SIZE as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

impl FromStr for Position {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => Ok(Self {
                row: SIZE - 1 - (rank as u8 - b'1'),
                col: file as u8 - b'a',
            }),
            _ => Err(ParseSquareError(s.to_string())),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col) as char,
            (b'1' + (SIZE - 1 - self.row)) as char
        )
    }
}
