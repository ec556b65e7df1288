//! Win detection over the precomputed line set.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from board
//! storage so the game state can compose them.

use crate::board::{Board, Coord, Square};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::instrument;

/// A full line of coordinates that wins when uniformly marked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinCombo(Vec<Coord>);

impl WinCombo {
    /// Coordinates in line order.
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    /// True if `coord` is part of this line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }

    /// Returns the shared label if every cell of the line holds it.
    pub fn uniform_label(&self, board: &Board) -> Option<char> {
        let labels: HashSet<Option<Square>> =
            self.0.iter().map(|&coord| board.get(coord)).collect();
        match labels.into_iter().collect::<Vec<_>>().as_slice() {
            [Some(Square::Marked(label))] => Some(*label),
            _ => None,
        }
    }
}

impl From<Vec<Coord>> for WinCombo {
    fn from(coords: Vec<Coord>) -> Self {
        Self(coords)
    }
}

/// Builds the 2N+2 lines for an N×N board.
///
/// Order: rows top to bottom, columns left to right, the diagonal from
/// `(0, 0)`, then the diagonal from `(0, N-1)`.
#[instrument]
pub fn winning_combos(size: usize) -> Vec<WinCombo> {
    let rows = (0..size).map(|row| (0..size).map(|col| Coord::new(row, col)).collect::<Vec<_>>());
    let cols = (0..size).map(|col| (0..size).map(|row| Coord::new(row, col)).collect::<Vec<_>>());
    let first_diagonal: Vec<Coord> = (0..size).map(|i| Coord::new(i, i)).collect();
    let second_diagonal: Vec<Coord> = (0..size).map(|i| Coord::new(i, size - 1 - i)).collect();

    rows.chain(cols)
        .chain([first_diagonal, second_diagonal])
        .map(WinCombo)
        .collect()
}

/// Returns the first line in `combos` that is complete on `board`.
#[instrument(skip_all)]
pub fn first_complete<'a>(combos: &'a [WinCombo], board: &Board) -> Option<&'a WinCombo> {
    combos.iter().find(|combo| combo.uniform_label(board).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pairs: &[(usize, usize)]) -> Vec<Coord> {
        pairs.iter().copied().map(Coord::from).collect()
    }

    #[test]
    fn test_combo_count_and_shape() {
        for size in 2..=9 {
            let combos = winning_combos(size);
            assert_eq!(combos.len(), 2 * size + 2, "size {}", size);
            for combo in &combos {
                assert_eq!(combo.coords().len(), size);
                let unique: HashSet<_> = combo.coords().iter().collect();
                assert_eq!(unique.len(), size, "duplicate coordinate in {:?}", combo);
            }
        }
    }

    #[test]
    fn test_three_by_three_enumeration_order() {
        let combos = winning_combos(3);
        assert_eq!(combos[0].coords(), coords(&[(0, 0), (0, 1), (0, 2)]));
        assert_eq!(combos[2].coords(), coords(&[(2, 0), (2, 1), (2, 2)]));
        assert_eq!(combos[3].coords(), coords(&[(0, 0), (1, 0), (2, 0)]));
        assert_eq!(combos[5].coords(), coords(&[(0, 2), (1, 2), (2, 2)]));
        assert_eq!(combos[6].coords(), coords(&[(0, 0), (1, 1), (2, 2)]));
        assert_eq!(combos[7].coords(), coords(&[(0, 2), (1, 1), (2, 0)]));
    }

    #[test]
    fn test_empty_line_is_not_uniform() {
        let board = Board::new(3);
        assert!(winning_combos(3).iter().all(|c| c.uniform_label(&board).is_none()));
    }

    #[test]
    fn test_mixed_line_is_not_uniform() {
        let mut board = Board::new(3);
        board.mark(Coord::new(0, 0), 'X');
        board.mark(Coord::new(0, 1), 'O');
        board.mark(Coord::new(0, 2), 'X');
        assert_eq!(winning_combos(3)[0].uniform_label(&board), None);
    }

    #[test]
    fn test_partial_line_is_not_uniform() {
        let mut board = Board::new(3);
        board.mark(Coord::new(0, 0), 'X');
        board.mark(Coord::new(0, 1), 'X');
        assert_eq!(winning_combos(3)[0].uniform_label(&board), None);
    }

    #[test]
    fn test_second_diagonal_wins() {
        let mut board = Board::new(3);
        for (row, col) in [(0, 2), (1, 1), (2, 0)] {
            board.mark(Coord::new(row, col), 'O');
        }
        let combos = winning_combos(3);
        let won = first_complete(&combos, &board).expect("diagonal should be complete");
        assert_eq!(won, &combos[7]);
        assert_eq!(won.uniform_label(&board), Some('O'));
    }

    #[test]
    fn test_first_match_in_enumeration_order() {
        // Row 0 and column 0 both complete; the row comes first.
        let mut board = Board::new(3);
        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)] {
            board.mark(Coord::new(row, col), 'X');
        }
        let combos = winning_combos(3);
        assert_eq!(first_complete(&combos, &board), Some(&combos[0]));
    }
}
