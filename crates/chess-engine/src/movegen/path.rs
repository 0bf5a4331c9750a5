//! Bounds, occupancy and ray-obstruction helpers shared by all pieces.

use chess_core::{Player, Square};
use tracing::warn;

use crate::Board;

/// Returns true if `square` lies within the board's rows and columns.
#[inline]
pub fn on_board(board: &Board, square: Square) -> bool {
    let size = board.size();
    (0..size).contains(&square.row()) && (0..size).contains(&square.col())
}

/// Returns the owner of the piece on `square`, or `None` if it is empty.
///
/// Distinguishes the three cases move generation cares about: an empty
/// square, a square held by the mover (blocks, never a destination) and a
/// square held by the opponent (a capture, which ends a ray).
#[inline]
pub fn obstructed_colour(board: &Board, square: Square) -> Option<Player> {
    board.get_piece(square).map(|piece| piece.player())
}

/// Returns true if `target` lies on a rank, file or diagonal through `from`.
fn is_ray(from: Square, target: Square) -> bool {
    let d_row = target.row() - from.row();
    let d_col = target.col() - from.col();
    (d_row, d_col) != (0, 0) && (d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs())
}

/// Returns true if a piece on the squares strictly between `from` and
/// `target` blocks the straight line joining them.
///
/// The occupant of `target` itself is not considered; callers classify it
/// with [`obstructed_colour`]. `target` must lie on a rank, file or diagonal
/// through `from`; any other target is reported as obstructed.
pub fn obstructed_path(board: &Board, from: Square, target: Square) -> bool {
    if !is_ray(from, target) {
        warn!(%from, %target, "path query for a target off every ray");
        return true;
    }

    let d_row = (target.row() - from.row()).signum();
    let d_col = (target.col() - from.col()).signum();
    let mut check = from;
    for _ in 0..board.size() {
        check = check.offset(d_row, d_col);
        if check == target {
            return false;
        }
        if obstructed_colour(board, check).is_some() {
            return true;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Piece;

    #[test]
    fn on_board_bounds() {
        let board = Board::empty();
        assert!(on_board(&board, Square::at(0, 0)));
        assert!(on_board(&board, Square::at(7, 7)));
        assert!(!on_board(&board, Square::at(8, 0)));
        assert!(!on_board(&board, Square::at(0, 8)));
        assert!(!on_board(&board, Square::at(-1, 3)));
        assert!(!on_board(&board, Square::at(3, -1)));
    }

    #[test]
    fn obstructed_colour_reports_owner() {
        let mut board = Board::empty();
        board.set_piece(Square::at(2, 2), Piece::bishop(Player::Black)).unwrap();
        assert_eq!(obstructed_colour(&board, Square::at(2, 2)), Some(Player::Black));
        assert_eq!(obstructed_colour(&board, Square::at(2, 3)), None);
        assert_eq!(obstructed_colour(&board, Square::at(9, 9)), None);
    }

    #[test]
    fn clear_paths() {
        let board = Board::empty();
        let from = Square::at(3, 3);
        assert!(!obstructed_path(&board, from, Square::at(3, 7)));
        assert!(!obstructed_path(&board, from, Square::at(0, 3)));
        assert!(!obstructed_path(&board, from, Square::at(6, 6)));
        assert!(!obstructed_path(&board, from, Square::at(0, 6)));
        assert!(!obstructed_path(&board, from, Square::at(4, 4)));
    }

    #[test]
    fn blocker_between_obstructs() {
        let mut board = Board::empty();
        board.set_piece(Square::at(3, 5), Piece::pawn(Player::White)).unwrap();
        let from = Square::at(3, 3);
        assert!(!obstructed_path(&board, from, Square::at(3, 4)));
        assert!(!obstructed_path(&board, from, Square::at(3, 5)));
        assert!(obstructed_path(&board, from, Square::at(3, 6)));
        assert!(obstructed_path(&board, from, Square::at(3, 7)));
    }

    #[test]
    fn target_occupant_is_ignored() {
        let mut board = Board::empty();
        board.set_piece(Square::at(5, 5), Piece::rook(Player::Black)).unwrap();
        assert!(!obstructed_path(&board, Square::at(2, 2), Square::at(5, 5)));
    }

    #[test]
    fn non_ray_targets_are_obstructed() {
        let board = Board::empty();
        let from = Square::at(3, 3);
        assert!(obstructed_path(&board, from, Square::at(5, 4)));
        assert!(obstructed_path(&board, from, Square::at(0, 7)));
        assert!(obstructed_path(&board, from, from));
    }

    #[test]
    fn rays_are_bounded_by_board_size() {
        let board = Board::empty();
        assert!(obstructed_path(&board, Square::at(0, 0), Square::at(0, 9)));
        assert!(!obstructed_path(&board, Square::at(0, 0), Square::at(0, 8)));
    }
}
