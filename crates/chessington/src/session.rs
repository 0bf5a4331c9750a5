//! The interactive game loop.

use std::io::{self, BufRead, Write};

use chess_core::Square;
use chess_engine::{Game, MoveOutcome};
use tracing::debug;

use crate::command::Command;
use crate::config::Config;

const HELP: &str = "\
Commands:
  e2e4 | e2 e4   move the piece on e2 to e4
  moves e2       list where the piece on e2 can go
  board          print the board
  help           show this message
  quit           leave the game
";

/// Drives a [`Game`] from line-based input, writing prompts and boards to
/// `output`.
pub struct Session<W: Write> {
    game: Game,
    config: Config,
    output: W,
}

impl<W: Write> Session<W> {
    pub fn new(game: Game, config: Config, output: W) -> Self {
        Session {
            game,
            config,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands until `quit`, end of input, or the side to move has
    /// no moves left.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        self.print_board()?;
        self.prompt()?;

        for line in input.lines() {
            let line = line?;
            debug!(input = %line.trim(), "read command");
            let keep_going = match Command::parse(&line) {
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    true
                }
            };
            if !keep_going {
                break;
            }
            if !self.game.has_moves() {
                writeln!(
                    self.output,
                    "{} has no available moves. Game over.",
                    self.game.current_player()
                )?;
                break;
            }
            self.prompt()?;
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> io::Result<bool> {
        match command {
            Command::Quit => return Ok(false),
            Command::Empty => {}
            Command::Help => write!(self.output, "{}", HELP)?,
            Command::Board => self.print_board()?,
            Command::Moves(square) => self.print_moves(square)?,
            Command::Move { from, to } => match self.game.make_move(from, to) {
                Ok(outcome) => {
                    self.report(&outcome)?;
                    self.print_board()?;
                    if self.config.hints {
                        self.print_hints()?;
                    }
                }
                Err(e) => {
                    debug!(%from, %to, error = %e, "rejected move");
                    writeln!(self.output, "{}", e)?;
                }
            },
        }
        Ok(true)
    }

    fn report(&mut self, outcome: &MoveOutcome) -> io::Result<()> {
        write!(
            self.output,
            "{}. {} {}-{}",
            outcome.turn + 1,
            outcome.piece,
            outcome.from,
            outcome.to
        )?;
        if let Some(capture) = outcome.captured {
            write!(self.output, ", takes {} on {}", capture.piece, capture.square)?;
            if outcome.is_en_passant() {
                write!(self.output, " en passant")?;
            }
        }
        writeln!(self.output)
    }

    fn print_board(&mut self) -> io::Result<()> {
        let text = self.game.board().render(self.config.unicode);
        write!(self.output, "{}", text)
    }

    fn print_moves(&mut self, square: Square) -> io::Result<()> {
        let moves = self.game.legal_moves_from(square);
        if moves.is_empty() {
            return writeln!(self.output, "no moves from {}", square);
        }
        let names: Vec<String> = moves.iter().map(|sq| sq.to_string()).collect();
        writeln!(self.output, "{}: {}", square, names.join(" "))
    }

    fn print_hints(&mut self) -> io::Result<()> {
        let to_move = self.game.current_player();
        let movable: Vec<String> = self
            .game
            .board()
            .pieces()
            .filter(|(_, piece)| piece.player() == to_move)
            .filter(|(square, _)| !self.game.legal_moves_from(*square).is_empty())
            .map(|(square, _)| square.to_string())
            .collect();
        writeln!(self.output, "movable: {}", movable.join(" "))
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.output, "{} to move> ", self.game.current_player())?;
        self.output.flush()
    }
}
