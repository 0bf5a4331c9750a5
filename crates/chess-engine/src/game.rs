//! Game management with move validation and history.
//!
//! The [`Game`] struct sits between a front end and the [`Board`]: it checks
//! that a requested move belongs to the player to move and is among the
//! piece's generated destinations before applying it, and it records every
//! applied move.

use chess_core::{Player, Square};
use thiserror::Error;
use tracing::info;

use crate::movegen::{self, SquareList};
use crate::{Board, BoardError, MoveOutcome};

/// Error type for game operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    /// There is no piece on the origin square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The piece on the origin square belongs to the player not on move.
    #[error("the piece on {square} belongs to {owner}, but {to_move} is to move")]
    NotYourPiece {
        square: Square,
        owner: Player,
        to_move: Player,
    },
    /// The destination is not among the piece's available moves.
    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A game in progress on a single board.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: Vec<MoveOutcome>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::at_starting_position())
    }

    /// Creates a game from a prepared board.
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    /// Returns the destinations of the piece on `square`, empty if there is
    /// no piece there.
    pub fn legal_moves_from(&self, square: Square) -> SquareList {
        movegen::available_moves(&self.board, square)
    }

    /// Returns true if the player to move has at least one available move.
    pub fn has_moves(&self) -> bool {
        let to_move = self.current_player();
        self.board
            .pieces()
            .filter(|(_, piece)| piece.player() == to_move)
            .any(|(square, _)| !self.legal_moves_from(square).is_empty())
    }

    /// Moves the piece on `from` to `to` after validating the move.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, GameError> {
        let piece = self
            .board
            .get_piece(from)
            .ok_or(GameError::EmptySquare(from))?;

        let to_move = self.current_player();
        if piece.player() != to_move {
            return Err(GameError::NotYourPiece {
                square: from,
                owner: piece.player(),
                to_move,
            });
        }

        if !self.legal_moves_from(from).contains(to) {
            return Err(GameError::IllegalMove { from, to });
        }

        let outcome = self.board.move_piece(from, to)?;
        if let Some(capture) = outcome.captured {
            info!(
                "{} on {} captured by {} from {}",
                capture.piece, capture.square, outcome.piece, from
            );
        }
        self.history.push(outcome);
        Ok(outcome)
    }

    /// Returns the applied moves, oldest first.
    pub fn history(&self) -> &[MoveOutcome] {
        &self.history
    }

    /// Returns the most recently applied move.
    pub fn last_move(&self) -> Option<&MoveOutcome> {
        self.history.last()
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }
}
