//! Command-line interface for the tic-tac-toe terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Log file path (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable "Play Again" while a game is still in progress
    #[arg(long)]
    pub allow_mid_game_reset: bool,
}
