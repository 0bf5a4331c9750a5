//! Board state: piece placement, turn counter and player to move.

use std::fmt;

use chess_core::{PieceKind, Player, Square};
use thiserror::Error;
use tracing::debug;

use crate::movegen::en_passant_possible;
use crate::{Piece, PieceId};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Errors raised by board queries and mutations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("piece {0} is not on the board")]
    PieceNotFound(PieceId),

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("square {0} is off the board")]
    OffBoard(Square),

    #[error("piece {id} is already placed on {square}")]
    AlreadyPlaced { id: PieceId, square: Square },
}

/// A piece removed from the board by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub piece: Piece,
    /// Square the captured piece stood on.
    pub square: Square,
}

/// Result of applying a move with [`Board::move_piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The moved piece, as it stands after the move.
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// Turn counter value at the time of the move.
    pub turn: u32,
    pub captured: Option<Capture>,
}

impl MoveOutcome {
    /// Returns true if the captured piece did not stand on the destination.
    pub fn is_en_passant(&self) -> bool {
        self.captured.is_some_and(|c| c.square != self.to)
    }
}

/// An 8x8 chess board.
///
/// Each slot holds at most one piece and a piece occupies at most one slot.
/// `turn` starts at 0 and is incremented by every applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    turn: u32,
    current_player: Player,
}

impl Board {
    /// Creates an empty board with White to move on turn 0.
    pub fn empty() -> Self {
        Board {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            turn: 0,
            current_player: Player::White,
        }
    }

    /// Creates a board with the standard starting array.
    pub fn at_starting_position() -> Self {
        const BACK_ROW: [PieceKind; BOARD_SIZE] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for player in Player::ALL {
            let back = player.back_row() as usize;
            let pawns = player.pawn_home_row() as usize;
            for (col, kind) in BACK_ROW.into_iter().enumerate() {
                board.grid[back][col] = Some(Piece::new(kind, player));
                board.grid[pawns][col] = Some(Piece::pawn(player));
            }
        }
        board
    }

    /// Returns the number of rows (and columns).
    #[inline]
    pub const fn size(&self) -> i32 {
        BOARD_SIZE as i32
    }

    /// Returns the number of moves applied so far.
    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the player whose move is next.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Overrides the player to move (position setup).
    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    fn slot(square: Square) -> Option<(usize, usize)> {
        let row = usize::try_from(square.row()).ok()?;
        let col = usize::try_from(square.col()).ok()?;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some((row, col))
    }

    /// Returns the piece on `square`, or `None` if it is empty or off the board.
    pub fn get_piece(&self, square: Square) -> Option<&Piece> {
        let (row, col) = Self::slot(square)?;
        self.grid[row][col].as_ref()
    }

    /// Places `piece` on `square`, returning whatever stood there before.
    ///
    /// Intended for position setup; it does not advance the turn. Placing a
    /// piece on the square it already occupies keeps the board's copy, with
    /// its first-move turn, and returns `None`.
    ///
    /// # Errors
    ///
    /// Fails if `square` is off the board or the piece already stands on
    /// another square.
    pub fn set_piece(&mut self, square: Square, piece: Piece) -> Result<Option<Piece>, BoardError> {
        let (row, col) = Self::slot(square).ok_or(BoardError::OffBoard(square))?;
        if let Ok(existing) = self.find_piece(&piece) {
            if existing != square {
                return Err(BoardError::AlreadyPlaced {
                    id: piece.id(),
                    square: existing,
                });
            }
            return Ok(None);
        }
        Ok(self.grid[row][col].replace(piece))
    }

    /// Removes and returns the piece on `square`.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let (row, col) = Self::slot(square)?;
        self.grid[row][col].take()
    }

    /// Returns the square `piece` stands on.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PieceNotFound`] if the piece is not placed.
    pub fn find_piece(&self, piece: &Piece) -> Result<Square, BoardError> {
        self.pieces()
            .find(|(_, p)| *p == piece)
            .map(|(square, _)| square)
            .ok_or(BoardError::PieceNotFound(piece.id()))
    }

    /// Iterates over all placed pieces with their squares, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.as_ref()
                    .map(|piece| (Square::at(row as i32, col as i32), piece))
            })
        })
    }

    /// Moves the piece on `from` to `to`.
    ///
    /// Captures whatever stands on `to`. A pawn moving diagonally onto an
    /// empty square with en passant available instead removes the enemy pawn
    /// beside it, on `from`'s row in `to`'s column. The moved piece gets its
    /// first-move turn stamped, the turn counter advances and the mover's
    /// opponent becomes the player to move.
    ///
    /// The move is not checked against the piece's movement rules.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<MoveOutcome, BoardError> {
        let (to_row, to_col) = Self::slot(to).ok_or(BoardError::OffBoard(to))?;
        let mut piece = *self.get_piece(from).ok_or(BoardError::EmptySquare(from))?;

        let en_passant = piece.kind() == PieceKind::Pawn
            && from.col() != to.col()
            && self.get_piece(to).is_none()
            && en_passant_possible(self, from, to);
        let captured_on = if en_passant {
            Square::at(from.row(), to.col())
        } else {
            to
        };

        self.remove_piece(from);
        let captured = self.remove_piece(captured_on).map(|piece| Capture {
            piece,
            square: captured_on,
        });
        if en_passant {
            debug!(%from, %to, captured = %captured_on, "en passant capture");
        }

        let turn = self.turn;
        piece.record_move(turn);
        self.grid[to_row][to_col] = Some(piece);
        self.turn += 1;
        self.current_player = piece.player().opponent();

        debug!(%piece, %from, %to, turn, captured = captured.is_some(), "applied move");
        Ok(MoveOutcome {
            piece,
            from,
            to,
            turn,
            captured,
        })
    }

    /// Renders the board with row 7 at the top, using ASCII letters or
    /// Unicode figurines.
    pub fn render(&self, unicode: bool) -> String {
        let mut out = String::new();
        for row in (0..BOARD_SIZE).rev() {
            out.push_str(&format!("{} ", row + 1));
            for col in 0..BOARD_SIZE {
                let c = match &self.grid[row][col] {
                    Some(piece) if unicode => piece.kind().glyph(piece.player()),
                    Some(piece) => piece.kind().symbol(piece.player()),
                    None => '.',
                };
                out.push(' ');
                out.push(c);
            }
            out.push('\n');
        }
        out.push_str("   a b c d e f g h\n");
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::at_starting_position()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
