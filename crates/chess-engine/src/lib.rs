//! Chess board model and move generation.
//!
//! This crate provides:
//! - [`Board`] - an 8x8 grid of pieces with a turn counter and the player to move
//! - [`Piece`] - a piece with identity, owner and first-move bookkeeping
//! - [`movegen`] - per-piece move generation with shared path helpers
//! - [`Game`] - move validation and history on top of a board
//!
//! # Architecture
//!
//! Move generation is a set of pure functions over a borrowed [`Board`].
//! Each piece kind enumerates its geometric candidates, then filters them
//! through the shared helpers: [`on_board`], [`obstructed_colour`] and
//! [`obstructed_path`]. The board is only ever mutated by
//! [`Board::move_piece`], which callers invoke after picking a move from the
//! generated set.
//!
//! # Example
//!
//! ```
//! use chess_core::{Player, Square};
//! use chess_engine::{Board, Piece};
//!
//! let mut board = Board::empty();
//! let pawn = Piece::pawn(Player::White);
//! board.set_piece(Square::at(1, 4), pawn).unwrap();
//!
//! let moves = pawn.available_moves(&board).unwrap();
//! assert!(moves.contains(Square::at(2, 4)));
//! assert!(moves.contains(Square::at(3, 4)));
//!
//! pawn.move_to(&mut board, Square::at(3, 4)).unwrap();
//! assert_eq!(board.turn(), 1);
//! assert_eq!(board.current_player(), Player::Black);
//! ```

mod board;
mod game;
pub mod movegen;
mod piece;

pub use board::{Board, BoardError, Capture, MoveOutcome, BOARD_SIZE};
pub use game::{Game, GameError};
pub use movegen::{
    available_moves, en_passant_possible, obstructed_colour, obstructed_path, on_board, SquareList,
};
pub use piece::{Piece, PieceId};
