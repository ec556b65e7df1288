//! Setup and configuration errors.
//!
//! Gameplay itself never errors; a bad move is simply rejected by
//! [`GameState::validate_move`](crate::GameState::validate_move).

use derive_more::{Display, Error};
use tracing::instrument;

/// Smallest accepted board side. A 1×1 board collapses all four lines
/// onto the same cell.
pub const MIN_BOARD_SIZE: usize = 2;

/// What was wrong with the requested setup.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SetupErrorKind {
    /// Board side below [`MIN_BOARD_SIZE`].
    #[display("board size {} is below the minimum of {}", _0, MIN_BOARD_SIZE)]
    BoardTooSmall(usize),
    /// Not exactly two players were configured.
    #[display("expected exactly 2 players, got {}", _0)]
    PlayerCount(usize),
    /// Both players share a label.
    #[display("both players use the label '{}'", _0)]
    DuplicateLabel(char),
    /// A label that would render as nothing.
    #[display("player label must be a visible glyph")]
    BlankLabel,
}

/// Game could not be set up.
#[derive(Debug, Clone, Display, Error)]
#[display("Setup error: {} at {}:{}", kind, file, line)]
pub struct SetupError {
    /// What went wrong.
    pub kind: SetupErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SetupError {
    /// Creates a new setup error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: SetupErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Configuration file could not be read or parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
