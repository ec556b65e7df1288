//! Command-line interface for the tic-tac-toe TUI.

use std::path::PathBuf;

use clap::Parser;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Strictly Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config (board size and players)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length, overriding the config file
    #[arg(short, long)]
    pub board_size: Option<usize>,

    /// File that receives tracing output
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.board_size.is_none());
        assert_eq!(cli.log_file, PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from(["tictactoe", "-b", "4", "--config", "game.toml"]).unwrap();
        assert_eq!(cli.board_size, Some(4));
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }
}
