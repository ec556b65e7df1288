//! Stateless UI rendering and click geometry.
//!
//! [`ScreenLayout`] is computed once per frame and used both to draw and
//! to resolve mouse clicks, so a click always lands on what was drawn.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{Coord, GameState, PlayerColor, Seat, Square};

use crate::app::{App, Banner};

/// Largest board side the grid is drawn for.
pub const MAX_BOARD_SIZE: usize = 9;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const CELL_GAP: u16 = 1;

const MENU_TITLE: &str = " File ";
const MENU_SEPARATOR: &str = "│";
const MENU_RESTART: &str = " Restart ";
const MENU_EXIT: &str = " Exit ";

/// Clickable thing under the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Coord),
    /// The `Restart` menu item.
    Restart,
    /// The `Exit` menu item.
    Exit,
}

/// Screen regions for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    menu: Rect,
    restart: Rect,
    exit: Rect,
    display: Rect,
    scores: Rect,
    help: Rect,
    cells: Vec<(Coord, Rect)>,
}

/// Fails for boards too wide to draw as a grid of buttons.
pub fn ensure_drawable(board_size: usize) -> anyhow::Result<()> {
    anyhow::ensure!(
        board_size <= MAX_BOARD_SIZE,
        "board size {} exceeds the maximum of {} the terminal view can draw",
        board_size,
        MAX_BOARD_SIZE
    );
    Ok(())
}

fn text_width(text: &str) -> u16 {
    text.chars().count() as u16
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

impl ScreenLayout {
    /// Splits `area` for a board of `size`×`size` cells.
    pub fn new(area: Rect, size: usize) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Menu
                Constraint::Length(3), // Display
                Constraint::Min(0),    // Board
                Constraint::Length(4), // Scoreboard
                Constraint::Length(1), // Help
            ])
            .split(area);
        let menu = chunks[0];

        let restart_x = menu.x + text_width(MENU_TITLE) + text_width(MENU_SEPARATOR);
        let restart = Rect::new(restart_x, menu.y, text_width(MENU_RESTART), 1).intersection(menu);
        let exit_x = restart_x + text_width(MENU_RESTART) + text_width(MENU_SEPARATOR);
        let exit = Rect::new(exit_x, menu.y, text_width(MENU_EXIT), 1).intersection(menu);

        Self {
            menu,
            restart,
            exit,
            display: chunks[1],
            scores: chunks[3],
            help: chunks[4],
            cells: cell_rects(chunks[2], size),
        }
    }

    /// What sits at terminal position `(x, y)`.
    pub fn hit(&self, x: u16, y: u16) -> Option<Hit> {
        if contains(self.restart, x, y) {
            return Some(Hit::Restart);
        }
        if contains(self.exit, x, y) {
            return Some(Hit::Exit);
        }
        self.cells
            .iter()
            .find(|(_, rect)| contains(*rect, x, y))
            .map(|(coord, _)| Hit::Cell(*coord))
    }

    /// Screen area of a cell, if it fits on screen.
    #[cfg(test)]
    pub fn cell_rect(&self, coord: Coord) -> Option<Rect> {
        self.cells
            .iter()
            .find(|(c, _)| *c == coord)
            .map(|(_, rect)| *rect)
    }

    /// Area of the `Restart` menu item.
    #[cfg(test)]
    pub fn restart(&self) -> Rect {
        self.restart
    }

    /// Area of the `Exit` menu item.
    #[cfg(test)]
    pub fn exit(&self) -> Rect {
        self.exit
    }
}

/// Centers the grid in `area` and clips cells that do not fit.
fn cell_rects(area: Rect, size: usize) -> Vec<(Coord, Rect)> {
    let n = size as u16;
    let grid_width = n * CELL_WIDTH + n.saturating_sub(1) * CELL_GAP;
    let grid_height = n * CELL_HEIGHT;
    let x0 = area.x + area.width.saturating_sub(grid_width) / 2;
    let y0 = area.y + area.height.saturating_sub(grid_height) / 2;

    let mut cells = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let x = x0 + col as u16 * (CELL_WIDTH + CELL_GAP);
            let y = y0 + row as u16 * CELL_HEIGHT;
            let rect = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(area);
            if !rect.is_empty() {
                cells.push((Coord::new(row, col), rect));
            }
        }
    }
    cells
}

/// Maps a player color to a terminal color.
pub fn color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Black => Color::Black,
        PlayerColor::Red => Color::Red,
        PlayerColor::Green => Color::Green,
        PlayerColor::Yellow => Color::Yellow,
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Magenta => Color::Magenta,
        PlayerColor::Cyan => Color::Cyan,
        PlayerColor::White => Color::White,
    }
}

fn label_color(game: &GameState, label: char) -> Color {
    game.players()
        .iter()
        .find(|p| *p.label() == label)
        .map(|p| color(*p.color()))
        .unwrap_or(Color::Reset)
}

/// Draws the whole screen and returns the layout that was used.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let game = app.game();
    let layout = ScreenLayout::new(frame.area(), game.board_size());

    draw_menu(frame, &layout);
    draw_display(frame, layout.display, app);
    for (coord, rect) in &layout.cells {
        draw_cell(frame, *rect, app, *coord);
    }
    draw_scoreboard(frame, layout.scores, game);

    let help = if game.board_size() == 3 {
        "Click a cell, press 1-9, or arrows + Enter | R: Restart | Q: Quit"
    } else {
        "Click a cell or arrows + Enter | R: Restart | Q: Quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    layout
}

fn draw_menu(frame: &mut Frame, layout: &ScreenLayout) {
    let item = Style::default().fg(Color::Black).bg(Color::Gray);
    let line = Line::from(vec![
        Span::styled(MENU_TITLE, item.add_modifier(Modifier::BOLD)),
        Span::styled(MENU_SEPARATOR, item),
        Span::styled(MENU_RESTART, item),
        Span::styled(MENU_SEPARATOR, item),
        Span::styled(MENU_EXIT, item),
    ]);
    frame.render_widget(Paragraph::new(line), layout.menu);
}

/// Banner text and color for the top display.
pub fn banner_text(banner: Banner, game: &GameState) -> (String, Color) {
    let label = |seat: Seat| *game.player(seat).label();
    match banner {
        Banner::Ready => ("Ready?".to_string(), Color::Reset),
        Banner::Turn(seat) => (format!("{}'s turn!", label(seat)), Color::Reset),
        Banner::Won(seat) => (
            format!("Player {} won!", label(seat)),
            color(*game.player(seat).color()),
        ),
        Banner::Tied => ("Tied game!".to_string(), Color::Red),
        Banner::Restarted => ("Are you ready?".to_string(), Color::Reset),
    }
}

fn draw_display(frame: &mut Frame, area: Rect, app: &App) {
    let (text, fg) = banner_text(app.banner(), app.game());
    let display = Paragraph::new(text)
        .style(Style::default().fg(fg).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(display, area);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, coord: Coord) {
    let game = app.game();

    let (symbol, mut style) = match game.board().get(coord) {
        Some(Square::Marked(label)) => (
            label.to_string(),
            Style::default()
                .fg(label_color(game, label))
                .add_modifier(Modifier::BOLD),
        ),
        _ => (String::new(), Style::default()),
    };

    if game
        .winning_combo()
        .is_some_and(|combo| combo.contains(coord))
    {
        style = style.bg(Color::Yellow);
    }

    let border = if coord == app.cursor() {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new(symbol)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(button, area);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, game: &GameState) {
    let block = Block::default().borders(Borders::ALL).title("Score:");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (seat, column) in Seat::ALL.into_iter().zip(columns.iter()) {
        let player = game.player(seat);
        let lines = vec![
            Line::from(Span::styled(
                player.name().clone(),
                Style::default()
                    .fg(color(*player.color()))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(game.score(seat).to_string()),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), *column);
    }
}
