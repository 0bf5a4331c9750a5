//! Pawn moves and en passant.

use chess_core::{PieceKind, Square};

use super::path::{obstructed_colour, obstructed_path, on_board};
use super::SquareList;
use crate::{Board, Piece};

pub(super) fn pawn_moves(board: &Board, from: Square, pawn: &Piece) -> SquareList {
    let player = pawn.player();
    let forward = player.pawn_direction();

    // Advances never capture.
    let mut moves = SquareList::new();
    moves.push(from.offset(forward, 0));
    if from.row() == player.pawn_home_row() && !pawn.has_moved() {
        moves.push(from.offset(2 * forward, 0));
    }
    moves.retain(|&sq| on_board(board, sq));
    moves.retain(|&sq| obstructed_colour(board, sq).is_none());

    let mut captures = SquareList::new();
    captures.push(from.offset(forward, 1));
    captures.push(from.offset(forward, -1));
    captures.retain(|&sq| on_board(board, sq));
    captures.retain(|&sq| match obstructed_colour(board, sq) {
        Some(owner) => owner != player,
        None => en_passant_possible(board, from, sq),
    });

    moves.extend(captures.iter().copied());
    moves.retain(|&sq| !obstructed_path(board, from, sq));
    moves
}

/// Returns true if the pawn on `from` may capture en passant by moving to
/// `target`.
///
/// The captured pawn stands beside the attacker: on `from`'s row, in
/// `target`'s column. It must belong to the opponent, must have made its
/// first move on the turn just played and must stand two rows ahead of its
/// home row, so that first move was a double step past `target`.
pub fn en_passant_possible(board: &Board, from: Square, target: Square) -> bool {
    let Some(attacker) = board.get_piece(from) else {
        return false;
    };
    if attacker.kind() != PieceKind::Pawn {
        return false;
    }
    let Some(last_turn) = board.turn().checked_sub(1) else {
        return false;
    };

    let side = Square::at(from.row(), target.col());
    board.get_piece(side).is_some_and(|victim| {
        let victim_player = victim.player();
        victim.kind() == PieceKind::Pawn
            && victim_player != attacker.player()
            && side.row() == victim_player.pawn_home_row() + 2 * victim_player.pawn_direction()
            && victim.first_moved_on() == Some(last_turn)
    })
}
