//! Pieces with identity and first-move bookkeeping.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};

use chess_core::{PieceKind, Player, Square};

use crate::movegen::{self, SquareList};
use crate::{Board, BoardError, MoveOutcome};

static NEXT_PIECE_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of a piece, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u32);

impl PieceId {
    fn next() -> Self {
        PieceId(NEXT_PIECE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A chess piece.
///
/// A `Piece` is a small copyable handle: the board owns the canonical copy
/// in the slot the piece occupies, and equality is by [`PieceId`] only. A
/// copy held by the caller therefore still finds "its" piece on the board
/// after the board's copy has been updated by a move.
#[derive(Debug, Clone, Copy)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    player: Player,
    /// Turn on which the piece was first relocated, `None` while unmoved.
    first_moved_on: Option<u32>,
}

impl Piece {
    /// Creates a new, unmoved piece with a fresh identity.
    pub fn new(kind: PieceKind, player: Player) -> Self {
        Piece {
            id: PieceId::next(),
            kind,
            player,
            first_moved_on: None,
        }
    }

    pub fn pawn(player: Player) -> Self {
        Self::new(PieceKind::Pawn, player)
    }

    pub fn knight(player: Player) -> Self {
        Self::new(PieceKind::Knight, player)
    }

    pub fn bishop(player: Player) -> Self {
        Self::new(PieceKind::Bishop, player)
    }

    pub fn rook(player: Player) -> Self {
        Self::new(PieceKind::Rook, player)
    }

    pub fn queen(player: Player) -> Self {
        Self::new(PieceKind::Queen, player)
    }

    pub fn king(player: Player) -> Self {
        Self::new(PieceKind::King, player)
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the turn on which this piece first moved, if it has moved.
    #[inline]
    pub fn first_moved_on(&self) -> Option<u32> {
        self.first_moved_on
    }

    /// Returns true once the piece has been relocated by a move.
    #[inline]
    pub fn has_moved(&self) -> bool {
        self.first_moved_on.is_some()
    }

    /// Stamps the first-move turn; later moves leave it unchanged.
    pub(crate) fn record_move(&mut self, turn: u32) {
        if self.first_moved_on.is_none() {
            self.first_moved_on = Some(turn);
        }
    }

    /// Returns every square this piece may move to on `board`.
    ///
    /// The result is empty when the piece has no destinations.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PieceNotFound`] if the piece is not on the board.
    pub fn available_moves(&self, board: &Board) -> Result<SquareList, BoardError> {
        let from = board.find_piece(self)?;
        Ok(movegen::available_moves(board, from))
    }

    /// Moves this piece to `to`, wherever it currently stands.
    ///
    /// The move is applied as given; use [`available_moves`](Self::available_moves)
    /// first to check it.
    pub fn move_to(&self, board: &mut Board, to: Square) -> Result<MoveOutcome, BoardError> {
        let from = board.find_piece(self)?;
        board.move_piece(from, to)
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.player, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pieces_are_unmoved_and_distinct() {
        let a = Piece::pawn(Player::White);
        let b = Piece::pawn(Player::White);
        assert!(!a.has_moved());
        assert_eq!(a.first_moved_on(), None);
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn equality_is_by_identity() {
        let a = Piece::rook(Player::Black);
        let mut moved = a;
        moved.record_move(3);
        assert_eq!(a, moved);
        assert!(moved.has_moved());
    }

    #[test]
    fn first_move_is_only_recorded_once() {
        let mut knight = Piece::knight(Player::White);
        knight.record_move(0);
        knight.record_move(4);
        assert_eq!(knight.first_moved_on(), Some(0));
    }

    #[test]
    fn constructors_set_kind() {
        assert_eq!(Piece::bishop(Player::White).kind(), PieceKind::Bishop);
        assert_eq!(Piece::queen(Player::White).kind(), PieceKind::Queen);
        assert_eq!(Piece::king(Player::Black).kind(), PieceKind::King);
        assert_eq!(Piece::king(Player::Black).player(), Player::Black);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Piece::queen(Player::Black)), "Black Queen");
    }

    #[test]
    fn unplaced_piece_has_no_moves() {
        let board = Board::empty();
        let pawn = Piece::pawn(Player::White);
        assert_eq!(
            pawn.available_moves(&board).unwrap_err(),
            BoardError::PieceNotFound(pawn.id())
        );
    }
}
