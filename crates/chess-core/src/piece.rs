//! Piece variant representation.

use crate::Player;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the index of this piece kind (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the ASCII letter for this piece, upper-case for White.
    pub const fn symbol(self, player: Player) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match player {
            Player::White => c.to_ascii_uppercase(),
            Player::Black => c,
        }
    }

    /// Returns the Unicode chess figurine for this piece.
    pub const fn glyph(self, player: Player) -> char {
        match (player, self) {
            (Player::White, PieceKind::Pawn) => '♙',
            (Player::White, PieceKind::Knight) => '♘',
            (Player::White, PieceKind::Bishop) => '♗',
            (Player::White, PieceKind::Rook) => '♖',
            (Player::White, PieceKind::Queen) => '♕',
            (Player::White, PieceKind::King) => '♔',
            (Player::Black, PieceKind::Pawn) => '♟',
            (Player::Black, PieceKind::Knight) => '♞',
            (Player::Black, PieceKind::Bishop) => '♝',
            (Player::Black, PieceKind::Rook) => '♜',
            (Player::Black, PieceKind::Queen) => '♛',
            (Player::Black, PieceKind::King) => '♚',
        }
    }

    /// Returns true if this piece moves along rays (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols() {
        assert_eq!(PieceKind::Pawn.symbol(Player::White), 'P');
        assert_eq!(PieceKind::Pawn.symbol(Player::Black), 'p');
        assert_eq!(PieceKind::King.symbol(Player::White), 'K');
        assert_eq!(PieceKind::Knight.symbol(Player::Black), 'n');
    }

    #[test]
    fn glyphs_differ_per_player() {
        for kind in PieceKind::ALL {
            assert_ne!(kind.glyph(Player::White), kind.glyph(Player::Black));
        }
        assert_eq!(PieceKind::Rook.glyph(Player::Black), '♜');
    }

    #[test]
    fn is_slider() {
        assert!(!PieceKind::Pawn.is_slider());
        assert!(!PieceKind::Knight.is_slider());
        assert!(PieceKind::Bishop.is_slider());
        assert!(PieceKind::Rook.is_slider());
        assert!(PieceKind::Queen.is_slider());
        assert!(!PieceKind::King.is_slider());
    }

    #[test]
    fn index_matches_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
