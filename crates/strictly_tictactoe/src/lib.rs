//! Strictly Tic-Tac-Toe - game state for a two-player board game.
//!
//! The crate knows nothing about presentation. A front end owns one
//! [`GameState`], forwards each click as a [`Coord`] to
//! [`GameState::play`] (or drives [`GameState::validate_move`] and
//! [`GameState::apply_move`] itself), then re-reads the state to redraw.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Coord, GameState, Seat, Turn};
//!
//! let mut game = GameState::standard();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     game.play(Coord::new(row, col));
//! }
//! let turn = game.play(Coord::new(0, 2));
//! assert!(matches!(turn, Turn::Won { seat: Seat::First, .. }));
//! assert_eq!(game.score(Seat::First), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod error;
mod game;
mod player;
mod win;

pub use board::{Board, Cell, Coord, Square};
pub use config::{GameConfig, PlayerConfig};
pub use error::{ConfigError, MIN_BOARD_SIZE, SetupError, SetupErrorKind};
pub use game::{DEFAULT_BOARD_SIZE, GameState, Move, RoundStatus, Scoreboard, Turn};
pub use player::{Player, PlayerColor, Seat};
pub use win::{WinCombo, first_complete, winning_combos};
