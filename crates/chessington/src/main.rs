//! Chessington - two-player chess in the terminal.
//!
//! Reads moves such as `e2e4` from standard input and prints the board
//! after each one. Log output goes to standard error and is controlled by
//! `RUST_LOG`.

mod command;
mod config;
mod session;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chess_engine::Game;
use clap::Parser;
use config::Config;
use session::Session;
use tracing_subscriber::EnvFilter;

/// Chessington - two-player chess in the terminal.
#[derive(Parser)]
#[command(name = "chessington")]
#[command(about = "Play chess against a friend in the terminal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = Config::DEFAULT_PATH)]
    config: PathBuf,

    /// Draw pieces with Unicode figurines
    #[arg(long)]
    unicode: bool,

    /// List movable pieces after every move
    #[arg(long)]
    hints: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut config = Config::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    config.unicode |= args.unicode;
    config.hints |= args.hints;
    tracing::info!(?config, "starting game");

    let stdin = io::stdin();
    let mut session = Session::new(Game::new(), config, io::stdout());
    session.run(stdin.lock())?;

    tracing::info!(plies = session.game().ply_count(), "game finished");
    Ok(())
}
