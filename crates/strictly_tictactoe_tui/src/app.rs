//! Application state and logic.

use strictly_tictactoe::{Coord, GameState, Seat, Turn};
use tracing::{debug, info, instrument};

use crate::input::Direction;

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the current player's label at a cell.
    Play(Coord),
    /// Play at the keyboard cursor.
    PlayCursor,
    /// Move the keyboard cursor one cell.
    MoveCursor(Direction),
    /// Clear the board for a new round.
    Restart,
    /// Leave the application.
    Quit,
    /// Nothing to do.
    None,
}

/// Top-of-window message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// Before the first move.
    Ready,
    /// Round in progress; the seat is to play.
    Turn(Seat),
    /// The seat won the round.
    Won(Seat),
    /// The round ended with a full board.
    Tied,
    /// Board was just cleared.
    Restarted,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Coord,
    banner: Banner,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `game`.
    #[instrument(skip(game), fields(board_size = game.board_size()))]
    pub fn new(game: GameState) -> Self {
        let center = game.board_size() / 2;
        Self {
            game,
            cursor: Coord::new(center, center),
            banner: Banner::Ready,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Cell the keyboard cursor is on.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the current banner.
    pub fn banner(&self) -> Banner {
        self.banner
    }

    /// True once the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Play(coord) => self.play(coord),
            Action::PlayCursor => self.play(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = direction.step(self.cursor, self.game.board_size());
            }
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::None => {}
        }
    }

    fn play(&mut self, coord: Coord) {
        self.banner = match self.game.play(coord) {
            Turn::Rejected => {
                debug!(%coord, "Click ignored");
                return;
            }
            Turn::Continue { next } => Banner::Turn(next),
            Turn::Won { seat, .. } => Banner::Won(seat),
            Turn::Tied => Banner::Tied,
        };
        self.cursor = coord;
        debug!(banner = ?self.banner, "Move applied to UI state");
    }

    /// Restarts the round, keeping the scores.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset_game();
        self.banner = Banner::Restarted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::Square;

    #[test]
    fn test_banner_follows_turns() {
        let mut app = App::new(GameState::standard());
        assert_eq!(app.banner(), Banner::Ready);

        app.handle(Action::Play(Coord::new(0, 0)));
        assert_eq!(app.banner(), Banner::Turn(Seat::Second));
    }

    #[test]
    fn test_rejected_click_changes_nothing() {
        let mut app = App::new(GameState::standard());
        app.handle(Action::Play(Coord::new(0, 0)));
        let cursor = app.cursor();

        app.handle(Action::Play(Coord::new(0, 0)));
        assert_eq!(app.banner(), Banner::Turn(Seat::Second));
        assert_eq!(app.cursor(), cursor);
        assert_eq!(
            app.game().board().get(Coord::new(0, 0)),
            Some(Square::Marked('X'))
        );
    }

    #[test]
    fn test_win_then_restart() {
        let mut app = App::new(GameState::standard());
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            app.handle(Action::Play(Coord::new(row, col)));
        }
        assert_eq!(app.banner(), Banner::Won(Seat::First));

        app.handle(Action::Restart);
        assert_eq!(app.banner(), Banner::Restarted);
        assert!(!app.game().has_winner());
        assert_eq!(app.game().score(Seat::First), 1);
    }

    #[test]
    fn test_full_board_shows_tie() {
        let mut app = App::new(GameState::standard());
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            app.handle(Action::Play(Coord::new(row, col)));
        }
        assert_eq!(app.banner(), Banner::Tied);
        assert_eq!(app.game().current_seat(), Seat::First);

        app.handle(Action::Play(Coord::new(1, 1)));
        assert_eq!(app.banner(), Banner::Tied);
    }

    #[test]
    fn test_cursor_play_and_quit() {
        let mut app = App::new(GameState::standard());
        assert_eq!(app.cursor(), Coord::new(1, 1));

        app.handle(Action::MoveCursor(Direction::Up));
        app.handle(Action::PlayCursor);
        assert_eq!(
            app.game().board().get(Coord::new(0, 1)),
            Some(Square::Marked('X'))
        );

        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
