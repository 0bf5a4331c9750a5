//! Parsing of the commands typed at the prompt.

use chess_core::Square;
use thiserror::Error;

/// Errors for input lines that are not a valid command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("'{0}' is not a square (expected a file a-h and a rank 1-8, e.g. e2)")]
    InvalidSquare(String),

    #[error("'{0}' expects {1}")]
    MissingArgument(&'static str, &'static str),

    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
}

/// A command entered by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the piece on `from` to `to` ("e2e4" or "e2 e4").
    Move { from: Square, to: Square },
    /// List the destinations of the piece on a square.
    Moves(Square),
    /// Print the board again.
    Board,
    Help,
    Quit,
    /// A blank line.
    Empty,
}

impl Command {
    /// Parses one input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts.as_slice() {
            [] => Ok(Command::Empty),
            ["quit" | "exit"] => Ok(Command::Quit),
            ["help" | "?"] => Ok(Command::Help),
            ["board"] => Ok(Command::Board),
            ["moves", square] => Ok(Command::Moves(parse_square(square)?)),
            ["moves"] => Err(CommandError::MissingArgument("moves", "a square")),
            [from, to] => Ok(Command::Move {
                from: parse_square(from)?,
                to: parse_square(to)?,
            }),
            [word] if word.len() == 4 && word.is_ascii() => Ok(Command::Move {
                from: parse_square(&word[..2])?,
                to: parse_square(&word[2..])?,
            }),
            _ => Err(CommandError::Unknown(input.trim().to_string())),
        }
    }
}

fn parse_square(s: &str) -> Result<Square, CommandError> {
    Square::from_algebraic(s).ok_or_else(|| CommandError::InvalidSquare(s.to_string()))
}
