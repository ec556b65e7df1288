//! Game state machine: moves, turns, winner and score tally.
//!
//! A round runs `InProgress → {InProgress, Won, Tied}`. `Won` and `Tied`
//! are terminal until [`GameState::reset_game`] clears the board. Scores
//! survive resets.

use crate::board::{Board, Coord};
use crate::error::{MIN_BOARD_SIZE, SetupError, SetupErrorKind};
use crate::player::{Player, Seat};
use crate::win::{WinCombo, first_complete, winning_combos};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default side length of the board.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// One player's action: put `label` on `coord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Target cell.
    pub coord: Coord,
    /// Label to place.
    pub label: char,
}

impl Move {
    /// Creates a move at `(row, col)`.
    pub fn new(row: usize, col: usize, label: char) -> Self {
        Self {
            coord: Coord::new(row, col),
            label,
        }
    }
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Moves are still accepted.
    InProgress,
    /// The seat completed a line.
    Won(Seat),
    /// Board is full and nobody completed a line.
    Tied,
}

/// What a single click did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Occupied cell, off-board coordinate, or the round is already won.
    Rejected,
    /// Move accepted; `next` is now to play.
    Continue {
        /// Seat whose turn it is now.
        next: Seat,
    },
    /// Move completed `combo` for `seat`.
    Won {
        /// The winning seat.
        seat: Seat,
        /// First completed line in enumeration order.
        combo: WinCombo,
    },
    /// Move filled the board without a line.
    Tied,
}

/// Cumulative win count per seat, kept across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard([u32; 2]);

impl Scoreboard {
    /// Wins recorded for `seat`.
    pub fn get(&self, seat: Seat) -> u32 {
        self.0[seat.index()]
    }

    /// Rounds won by anyone.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    fn record_win(&mut self, seat: Seat) {
        self.0[seat.index()] += 1;
    }
}

/// Complete game state: board, players, turn, winner and scores.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current: Seat,
    winner: Option<Seat>,
    winning_combo: Option<WinCombo>,
    combos: Vec<WinCombo>,
    scores: Scoreboard,
}

impl GameState {
    /// Creates a game for `players` on a `board_size`×`board_size` board.
    ///
    /// The first player in the array moves first.
    ///
    /// # Errors
    ///
    /// Fails when the board size is below [`MIN_BOARD_SIZE`], or when a
    /// label is blank or shared by both players.
    #[instrument(skip(players), fields(
        first = %players[0].label(),
        second = %players[1].label(),
    ))]
    pub fn new(players: [Player; 2], board_size: usize) -> Result<Self, SetupError> {
        if board_size < MIN_BOARD_SIZE {
            return Err(SetupError::new(SetupErrorKind::BoardTooSmall(board_size)));
        }
        for player in &players {
            let label = *player.label();
            if label.is_whitespace() || label.is_control() {
                return Err(SetupError::new(SetupErrorKind::BlankLabel));
            }
        }
        if players[0].label() == players[1].label() {
            return Err(SetupError::new(SetupErrorKind::DuplicateLabel(
                *players[0].label(),
            )));
        }

        info!("Creating game");
        Ok(Self::assemble(players, board_size))
    }

    /// X (blue) against O (red) on a 3×3 board.
    #[instrument]
    pub fn standard() -> Self {
        Self::assemble(Player::default_pair(), DEFAULT_BOARD_SIZE)
    }

    fn assemble(players: [Player; 2], board_size: usize) -> Self {
        Self {
            board: Board::new(board_size),
            players,
            current: Seat::First,
            winner: None,
            winning_combo: None,
            combos: winning_combos(board_size),
            scores: Scoreboard::default(),
        }
    }

    /// True iff the target cell is on the board, empty, and no winner has
    /// been declared.
    #[instrument(skip_all, fields(coord = %mv.coord, label = %mv.label))]
    pub fn validate_move(&self, mv: &Move) -> bool {
        self.board.is_empty(mv.coord) && !self.has_winner()
    }

    /// Places the move's label and checks every line for a win.
    ///
    /// Lines are scanned rows, columns, then the two diagonals; the first
    /// complete one is recorded and the current player's score goes up by
    /// one. Call [`validate_move`](Self::validate_move) first: a move that
    /// fails validation is logged and ignored.
    #[instrument(skip_all, fields(coord = %mv.coord, label = %mv.label, seat = ?self.current))]
    pub fn apply_move(&mut self, mv: &Move) {
        if !self.validate_move(mv) {
            warn!("Ignoring move that failed validation");
            return;
        }

        self.board.mark(mv.coord, mv.label);
        debug!(board = %self.board, "Move applied");

        if let Some(combo) = first_complete(&self.combos, &self.board) {
            self.winner = Some(self.current);
            self.winning_combo = Some(combo.clone());
            self.scores.record_win(self.current);
            info!(
                winner = %self.current_player().name(),
                score = self.scores.get(self.current),
                "Round won"
            );
        }
    }

    /// True iff every cell is marked and no winner was declared.
    pub fn is_tie(&self) -> bool {
        self.board.is_full() && !self.has_winner()
    }

    /// True once a line has been completed this round.
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// Hands the turn to the other player.
    #[instrument(skip(self), fields(from = ?self.current))]
    pub fn switch_player(&mut self) {
        self.current = self.current.next();
    }

    /// Starts a new round on an empty board.
    ///
    /// Scores and the player rotation are left as they are.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.clear();
        self.winner = None;
        self.winning_combo = None;
        info!(
            first = self.scores.get(Seat::First),
            second = self.scores.get(Seat::Second),
            "Round reset"
        );
    }

    /// The move the current player would make at `coord`.
    pub fn current_move(&self, coord: Coord) -> Move {
        Move {
            coord,
            label: *self.current_player().label(),
        }
    }

    /// Plays the current player's label at `coord`.
    ///
    /// Runs validate, apply, the win and tie checks, and switches players
    /// only when the round goes on. A rejected move changes nothing.
    #[instrument(skip(self))]
    pub fn play(&mut self, coord: Coord) -> Turn {
        let mv = self.current_move(coord);
        if !self.validate_move(&mv) {
            debug!("Move rejected");
            return Turn::Rejected;
        }

        self.apply_move(&mv);

        if let (Some(seat), Some(combo)) = (self.winner, &self.winning_combo) {
            return Turn::Won {
                seat,
                combo: combo.clone(),
            };
        }
        if self.is_tie() {
            info!("Round tied");
            return Turn::Tied;
        }

        self.switch_player();
        Turn::Continue { next: self.current }
    }

    /// Where the current round stands.
    pub fn status(&self) -> RoundStatus {
        if let Some(seat) = self.winner {
            RoundStatus::Won(seat)
        } else if self.is_tie() {
            RoundStatus::Tied
        } else {
            RoundStatus::InProgress
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Both players, first seat first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Seat whose turn it is. After a win this is the winner unless the
    /// caller switched players again.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// The winner of the current round, if any.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|seat| self.player(seat))
    }

    /// Seat that won the current round, if any.
    pub fn winning_seat(&self) -> Option<Seat> {
        self.winner
    }

    /// The completed line, if the round is won.
    pub fn winning_combo(&self) -> Option<&WinCombo> {
        self.winning_combo.as_ref()
    }

    /// Every line that can win on this board, in scan order.
    pub fn winning_combos(&self) -> &[WinCombo] {
        &self.combos
    }

    /// Wins recorded for `seat`.
    pub fn score(&self, seat: Seat) -> u32 {
        self.scores.get(seat)
    }

    /// The full score tally.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scores
    }
}
