//! Move generation.
//!
//! Every piece kind runs the same pipeline: enumerate geometric candidates
//! ignoring the board, keep those [`on_board`], classify them by occupancy
//! with [`obstructed_colour`], and, for pieces moving along rays, drop those
//! whose path is blocked according to [`obstructed_path`].

mod leapers;
mod path;
mod pawn;
mod sliders;

use chess_core::{PieceKind, Square};
use tracing::trace;

use crate::Board;

pub use path::{obstructed_colour, obstructed_path, on_board};
pub use pawn::en_passant_possible;

/// A list of destination squares with a fixed maximum capacity.
///
/// No piece has more than 64 raw candidates, so a fixed-size array avoids
/// heap allocations during move generation.
#[derive(Clone)]
pub struct SquareList {
    squares: [Square; Self::MAX_SQUARES],
    len: usize,
}

impl SquareList {
    /// Maximum number of squares held.
    pub const MAX_SQUARES: usize = 64;

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        SquareList {
            squares: [Square::at(0, 0); Self::MAX_SQUARES],
            len: 0,
        }
    }

    /// Adds a square to the list.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!(self.len < Self::MAX_SQUARES);
        self.squares[self.len] = sq;
        self.len += 1;
    }

    /// Returns the number of squares.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the squares.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    /// Returns true if `sq` is in the list.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    /// Returns an iterator over the squares.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }

    /// Clears the list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Retains only squares for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Square) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.squares[read]) {
                self.squares[write] = self.squares[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for SquareList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for SquareList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for SquareList {}

impl std::ops::Index<usize> for SquareList {
    type Output = Square;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.squares[index]
    }
}

impl Extend<Square> for SquareList {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for sq in iter {
            self.push(sq);
        }
    }
}

impl FromIterator<Square> for SquareList {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut list = SquareList::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for SquareList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates every destination for the piece standing on `from`.
///
/// Returns an empty list if `from` is empty. Moves that leave the mover's
/// own king in check are not filtered out.
pub fn available_moves(board: &Board, from: Square) -> SquareList {
    let Some(piece) = board.get_piece(from) else {
        return SquareList::new();
    };

    let moves = match piece.kind() {
        PieceKind::Pawn => pawn::pawn_moves(board, from, piece),
        PieceKind::Knight => leapers::knight_moves(board, from, piece),
        PieceKind::Bishop => sliders::bishop_moves(board, from, piece),
        PieceKind::Rook => sliders::rook_moves(board, from, piece),
        PieceKind::Queen => sliders::queen_moves(board, from, piece),
        PieceKind::King => leapers::king_moves(board, from, piece),
    };

    trace!(%piece, %from, count = moves.len(), "generated moves");
    moves
}
