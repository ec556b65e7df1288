//! Players, seats and the colors they draw with.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Display color of a player's marks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerColor {
    /// Black.
    Black,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White.
    White,
}

impl TryFrom<String> for PlayerColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PlayerColor::from_str(value.trim()).map_err(|_| {
            let known: Vec<String> = PlayerColor::iter().map(|c| c.to_string()).collect();
            format!("unknown color '{}', expected one of: {}", value, known.join(", "))
        })
    }
}

impl From<PlayerColor> for String {
    fn from(color: PlayerColor) -> Self {
        color.to_string()
    }
}

/// One of the two places at the table.
///
/// The first seat moves first in a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Seat {
    /// The player who opens the first round.
    #[default]
    First,
    /// The other player.
    Second,
}

impl Seat {
    /// Both seats, in turn order.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// Returns the seat that moves after this one.
    pub fn next(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into a two-slot table (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// A participant: ordinal, display name, mark label and color.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// 1-based ordinal used for default naming.
    ordinal: u32,
    /// Display name.
    name: String,
    /// Glyph placed on the board.
    label: char,
    /// Color used to draw the label.
    color: PlayerColor,
}

impl Player {
    /// Creates a player named `Player {ordinal}`.
    #[instrument]
    pub fn new(ordinal: u32, label: char, color: PlayerColor) -> Self {
        Self {
            ordinal,
            name: format!("Player {}", ordinal),
            label,
            color,
        }
    }

    /// Creates a player with an explicit display name.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn named(ordinal: u32, name: impl AsRef<str>, label: char, color: PlayerColor) -> Self {
        Self {
            ordinal,
            name: name.as_ref().to_string(),
            label,
            color,
        }
    }

    /// The stock pairing: X in blue against O in red.
    pub fn default_pair() -> [Player; 2] {
        [
            Player::new(1, 'X', PlayerColor::Blue),
            Player::new(2, 'O', PlayerColor::Red),
        ]
    }
}
