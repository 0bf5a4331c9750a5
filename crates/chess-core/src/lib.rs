//! Core types for chess.
//!
//! This crate provides the value types shared by the engine and its
//! front ends:
//! - [`Player`] for the two sides
//! - [`Square`] for board coordinates
//! - [`PieceKind`] for the six piece variants

mod piece;
mod player;
mod square;

pub use piece::PieceKind;
pub use player::Player;
pub use square::Square;
