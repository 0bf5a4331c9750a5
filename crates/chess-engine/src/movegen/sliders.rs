//! Rook, bishop and queen moves.

use chess_core::Square;

use super::path::{obstructed_colour, obstructed_path, on_board};
use super::SquareList;
use crate::{Board, Piece};

/// Every square sharing a row or column with `from`, `from` included.
fn line_candidates(board: &Board, from: Square) -> impl Iterator<Item = Square> {
    let (row, col) = (from.row(), from.col());
    (0..board.size()).flat_map(move |i| [Square::at(row, i), Square::at(i, col)])
}

/// Every square on the two diagonals through `from`, ignoring board edges.
fn diagonal_candidates(board: &Board, from: Square) -> impl Iterator<Item = Square> {
    (1..board.size()).flat_map(move |d| {
        [
            from.offset(d, d),
            from.offset(d, -d),
            from.offset(-d, d),
            from.offset(-d, -d),
        ]
    })
}

/// Keeps the candidates a sliding piece can actually reach: on the board,
/// not held by its own side, and with a clear ray from `from`.
fn reachable(board: &Board, from: Square, piece: &Piece, mut moves: SquareList) -> SquareList {
    let player = piece.player();
    moves.retain(|&sq| on_board(board, sq));
    moves.retain(|&sq| obstructed_colour(board, sq) != Some(player));
    moves.retain(|&sq| !obstructed_path(board, from, sq));
    moves
}

pub(super) fn rook_moves(board: &Board, from: Square, rook: &Piece) -> SquareList {
    reachable(board, from, rook, line_candidates(board, from).collect())
}

pub(super) fn bishop_moves(board: &Board, from: Square, bishop: &Piece) -> SquareList {
    reachable(board, from, bishop, diagonal_candidates(board, from).collect())
}

pub(super) fn queen_moves(board: &Board, from: Square, queen: &Piece) -> SquareList {
    let candidates = line_candidates(board, from).chain(diagonal_candidates(board, from));
    reachable(board, from, queen, candidates.collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Player;

    fn place(board: &mut Board, sq: Square, piece: Piece) -> Piece {
        board.set_piece(sq, piece).unwrap();
        piece
    }

    #[test]
    fn rook_on_empty_board_covers_rank_and_file() {
        let mut board = Board::empty();
        let from = Square::at(3, 4);
        let rook = place(&mut board, from, Piece::rook(Player::Black));
        let moves = rook_moves(&board, from, &rook);
        assert_eq!(moves.len(), 14);
        for i in 0..8 {
            if i != 4 {
                assert!(moves.contains(Square::at(3, i)));
            }
            if i != 3 {
                assert!(moves.contains(Square::at(i, 4)));
            }
        }
        assert!(!moves.contains(from));
    }

    #[test]
    fn rook_stops_before_own_piece() {
        let mut board = Board::empty();
        let from = Square::at(0, 0);
        let rook = place(&mut board, from, Piece::rook(Player::White));
        place(&mut board, Square::at(0, 3), Piece::knight(Player::White));
        let moves = rook_moves(&board, from, &rook);
        assert!(moves.contains(Square::at(0, 1)));
        assert!(moves.contains(Square::at(0, 2)));
        assert!(!moves.contains(Square::at(0, 3)));
        assert!(!moves.contains(Square::at(0, 4)));
        assert!(moves.contains(Square::at(7, 0)));
    }

    #[test]
    fn bishop_on_empty_board() {
        let mut board = Board::empty();
        let from = Square::at(3, 3);
        let bishop = place(&mut board, from, Piece::bishop(Player::White));
        let moves = bishop_moves(&board, from, &bishop);
        assert_eq!(moves.len(), 13);
        assert!(moves.contains(Square::at(0, 0)));
        assert!(moves.contains(Square::at(7, 7)));
        assert!(moves.contains(Square::at(0, 6)));
        assert!(moves.contains(Square::at(6, 0)));
        assert!(!moves.contains(Square::at(3, 4)));
    }

    #[test]
    fn bishop_captures_and_stops() {
        let mut board = Board::empty();
        let from = Square::at(0, 2);
        let bishop = place(&mut board, from, Piece::bishop(Player::White));
        place(&mut board, Square::at(2, 4), Piece::pawn(Player::Black));
        let moves = bishop_moves(&board, from, &bishop);
        assert!(moves.contains(Square::at(1, 3)));
        assert!(moves.contains(Square::at(2, 4)));
        assert!(!moves.contains(Square::at(3, 5)));
        assert!(moves.contains(Square::at(2, 0)));
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let mut board = Board::empty();
        let from = Square::at(3, 3);
        let queen = place(&mut board, from, Piece::queen(Player::White));
        place(&mut board, Square::at(5, 5), Piece::pawn(Player::Black));
        place(&mut board, Square::at(3, 1), Piece::pawn(Player::White));

        let moves = queen_moves(&board, from, &queen);
        let rook = rook_moves(&board, from, &queen);
        let bishop = bishop_moves(&board, from, &queen);
        assert_eq!(moves.len(), rook.len() + bishop.len());
        for sq in rook.iter().chain(bishop.iter()) {
            assert!(moves.contains(*sq));
        }
        assert!(moves.contains(Square::at(5, 5)));
        assert!(!moves.contains(Square::at(6, 6)));
        assert!(!moves.contains(Square::at(3, 0)));
    }

    #[test]
    fn queen_in_corner() {
        let mut board = Board::empty();
        let from = Square::at(0, 0);
        let queen = place(&mut board, from, Piece::queen(Player::Black));
        assert_eq!(queen_moves(&board, from, &queen).len(), 21);
    }
}
