//! Player representation.

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// Both players, White first.
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// Returns the other player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row step of a pawn advance (+1 for White, -1 for Black).
    #[inline]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Returns the row from which this player's pawns may double-step.
    #[inline]
    pub const fn pawn_home_row(self) -> i32 {
        match self {
            Player::White => 1,
            Player::Black => 6,
        }
    }

    /// Returns the row holding this player's pieces at the start of a game.
    #[inline]
    pub const fn back_row(self) -> i32 {
        match self {
            Player::White => 0,
            Player::Black => 7,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent() {
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent(), Player::White);
    }

    #[test]
    fn player_index() {
        assert_eq!(Player::White.index(), 0);
        assert_eq!(Player::Black.index(), 1);
    }

    #[test]
    fn pawn_geometry() {
        assert_eq!(Player::White.pawn_direction(), 1);
        assert_eq!(Player::Black.pawn_direction(), -1);
        assert_eq!(Player::White.pawn_home_row(), 1);
        assert_eq!(Player::Black.pawn_home_row(), 6);
    }

    #[test]
    fn home_row_is_one_step_from_back_row() {
        for player in Player::ALL {
            assert_eq!(
                player.back_row() + player.pawn_direction(),
                player.pawn_home_row()
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Player::White), "White");
        assert_eq!(format!("{}", Player::Black), "Black");
    }
}
