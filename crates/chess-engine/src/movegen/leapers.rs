//! Knight and king moves.
//!
//! Both pieces jump to a fixed set of squares, so no path tracing applies.

use chess_core::Square;

use super::path::{obstructed_colour, on_board};
use super::SquareList;
use crate::{Board, Piece};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn leaps(board: &Board, from: Square, piece: &Piece, offsets: &[(i32, i32)]) -> SquareList {
    let player = piece.player();
    let mut moves: SquareList = offsets
        .iter()
        .map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .collect();
    moves.retain(|&sq| on_board(board, sq));
    moves.retain(|&sq| obstructed_colour(board, sq) != Some(player));
    moves
}

pub(super) fn knight_moves(board: &Board, from: Square, knight: &Piece) -> SquareList {
    leaps(board, from, knight, &KNIGHT_OFFSETS)
}

pub(super) fn king_moves(board: &Board, from: Square, king: &Piece) -> SquareList {
    leaps(board, from, king, &KING_OFFSETS)
}
