//! Board square representation.

use std::fmt;

/// Number of rows and columns on a standard board, used for naming squares.
const NAMED_SIZE: i32 = 8;

/// A (row, column) coordinate on the board.
///
/// Squares carry no validity range of their own: arithmetic may step off
/// any board, and whether a square is usable is decided against a board's
/// dimensions. Row 0 is White's back rank, column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: i32,
    col: i32,
}

impl Square {
    /// Creates the square at the given row and column.
    #[inline]
    pub const fn at(row: i32, col: i32) -> Self {
        Square { row, col }
    }

    /// Returns the row.
    #[inline]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Returns the column.
    #[inline]
    pub const fn col(self) -> i32 {
        self.col
    }

    /// Returns the square shifted by the given row and column deltas.
    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Square::at(self.row + d_row, self.col + d_col)
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Square::at((rank - b'1') as i32, (file - b'a') as i32))
    }

    /// Returns the algebraic name of this square, or `None` if it lies
    /// off a standard 8x8 board.
    pub fn to_algebraic(self) -> Option<String> {
        if !(0..NAMED_SIZE).contains(&self.row) || !(0..NAMED_SIZE).contains(&self.col) {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + self.row as u8) as char;
        Some(format!("{}{}", file, rank))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
