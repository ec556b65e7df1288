//! Strictly Tic-Tac-Toe - terminal front end
//!
//! Renders one [`GameState`](strictly_tictactoe::GameState) and turns
//! clicks and key presses into moves. Everything runs on one thread: each
//! event is handled to completion before the screen is redrawn.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod terminal;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use strictly_tictactoe::{GameConfig, GameState};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::{Action, App};
use cli::{Cli, DEFAULT_CONFIG_PATH};
use terminal::TerminalSession;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    info!("Starting Strictly Tic-Tac-Toe");

    let game = load_game(&cli)?;
    let mut app = App::new(game);

    let res = {
        let mut session = TerminalSession::enter().context("Failed to set up terminal")?;
        run(&mut session, &mut app)
    };

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        rounds_won = app.game().scoreboard().total(),
        "Exiting"
    );
    res
}

/// Logs to a file so tracing output never draws over the board.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}

/// Builds the game from `--config`, `./tictactoe.toml`, or the defaults.
#[instrument(skip(cli), fields(config = ?cli.config, board_size = ?cli.board_size))]
fn load_game(cli: &Cli) -> Result<GameState> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => GameConfig::from_file(DEFAULT_CONFIG_PATH)?,
        None => {
            debug!("No config file, using defaults");
            GameConfig::default()
        }
    };

    let config = match cli.board_size {
        Some(size) => config.with_board_size(size),
        None => config,
    };

    let game = config.build()?;
    ui::ensure_drawable(game.board_size())?;
    Ok(game)
}

/// Draw, wait for one event, handle it, repeat.
#[instrument(skip_all)]
fn run(session: &mut TerminalSession, app: &mut App) -> Result<()> {
    let terminal = session.terminal_mut();
    let board_size = app.game().board_size();

    while !app.should_quit() {
        let mut layout = None;
        terminal.draw(|f| layout = Some(ui::draw(f, app)))?;

        let action = match event::read()? {
            // Skip key release events (some terminals report both).
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                input::key_action(key, board_size)
            }
            Event::Mouse(mouse) => layout
                .as_ref()
                .map_or(Action::None, |layout| input::mouse_action(mouse, layout)),
            _ => Action::None,
        };

        app.handle(action);
    }

    Ok(())
}
