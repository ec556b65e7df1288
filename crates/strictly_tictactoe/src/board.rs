//! Square grid of cells.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A `(row, col)` position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Zero-based row, top to bottom.
    pub row: usize,
    /// Zero-based column, left to right.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Contents of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Holds a player's label.
    Marked(char),
}

impl Square {
    /// Returns the label, if any.
    pub fn label(self) -> Option<char> {
        match self {
            Square::Empty => None,
            Square::Marked(label) => Some(label),
        }
    }

    /// True for [`Square::Empty`].
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// A coordinate together with what sits on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coord: Coord,
    square: Square,
}

impl Cell {
    /// A fresh empty cell.
    pub fn empty(coord: Coord) -> Self {
        Self {
            coord,
            square: Square::Empty,
        }
    }

    /// Where this cell sits.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// What this cell holds.
    pub fn square(&self) -> Square {
        self.square
    }

    /// The label on this cell, if any.
    pub fn label(&self) -> Option<char> {
        self.square.label()
    }
}

/// N×N board stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of `size`×`size` cells.
    ///
    /// Size validation happens in [`GameState::new`](crate::GameState::new).
    #[instrument]
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Cell::empty(Coord::new(row, col))))
            .collect();
        Self { size, cells }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True if `coord` lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.size + coord.col)
    }

    /// Returns the cell at `coord`, or `None` when off the board.
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    /// Returns the square at `coord`, or `None` when off the board.
    pub fn get(&self, coord: Coord) -> Option<Square> {
        self.cell(coord).map(Cell::square)
    }

    /// True if `coord` is on the board and nothing is there yet.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Square::Empty))
    }

    /// True when every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.square.is_empty())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Marks the cell at `coord`. Returns false when off the board.
    pub(crate) fn mark(&mut self, coord: Coord, label: char) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i].square = Square::Marked(label);
                true
            }
            None => false,
        }
    }

    /// Replaces every cell with a fresh empty one.
    #[instrument(skip(self), fields(size = self.size))]
    pub(crate) fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::empty(cell.coord);
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let line: String = row
                .iter()
                .map(|c| c.label().unwrap_or('.'))
                .collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
