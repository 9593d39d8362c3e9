use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Optional value for every cell of a [`SquareGrid`].
///
/// Storage is a dense row-major array, so `filter` and `find` visit cells in row-major order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BoardSnapshot<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct GameBoard<T> {
    grid: SquareGrid,
    values: Array2<Option<T>>,
}

/// Unchecked wire form of [`GameBoard`].
#[derive(Deserialize)]
struct BoardSnapshot<T> {
    grid: SquareGrid,
    values: Array2<Option<T>>,
}

impl<T> TryFrom<BoardSnapshot<T>> for GameBoard<T> {
    type Error = GameError;

    fn try_from(BoardSnapshot { grid, values }: BoardSnapshot<T>) -> Result<Self> {
        let size = usize::from(grid.width());
        if values.dim() != (size, size) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { grid, values })
    }
}

impl<T> GameBoard<T> {
    pub fn new(width: Coord) -> Result<Self> {
        let grid = SquareGrid::new(width)?;
        let size = usize::from(width);
        let values = Array2::from_shape_simple_fn([size, size], || None);
        Ok(Self { grid, values })
    }

    pub fn grid(&self) -> &SquareGrid {
        &self.grid
    }

    pub fn width(&self) -> Coord {
        self.grid.width()
    }

    /// Value at `cell`, `None` also for cells outside the grid.
    pub fn get(&self, cell: Cell) -> Option<&T> {
        if !self.grid.contains(cell) {
            return None;
        }
        self.values[cell.to_nd_index()].as_ref()
    }

    pub fn get_at(&self, row: Coord, col: Coord) -> Result<Option<&T>> {
        let cell = self.grid.cell(row, col)?;
        Ok(self.get(cell))
    }

    /// Writes to cells outside the grid are dropped.
    pub fn set(&mut self, cell: Cell, value: Option<T>) {
        if !self.grid.contains(cell) {
            log::warn!("Ignoring write to {cell:?}, outside of {0}x{0} board", self.width());
            return;
        }
        self.values[cell.to_nd_index()] = value;
    }

    /// Removes the value at `cell`, returning what was there.
    pub fn take(&mut self, cell: Cell) -> Option<T> {
        if !self.grid.contains(cell) {
            return None;
        }
        self.values[cell.to_nd_index()].take()
    }

    pub fn clear(&mut self) {
        self.values.map_inplace(|value| *value = None);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Option<&T>)> + '_ {
        self.grid
            .all_cells()
            .iter()
            .map(|&cell| (cell, self.get(cell)))
    }

    pub fn values_row_major(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        self.values.iter().map(Option::as_ref)
    }

    pub fn filter(&self, predicate: impl Fn(Option<&T>) -> bool) -> Vec<Cell> {
        self.iter()
            .filter(|&(_, value)| predicate(value))
            .map(|(cell, _)| cell)
            .collect()
    }

    pub fn find(&self, predicate: impl Fn(Option<&T>) -> bool) -> Option<Cell> {
        self.iter()
            .find(|&(_, value)| predicate(value))
            .map(|(cell, _)| cell)
    }

    pub fn any(&self, predicate: impl Fn(Option<&T>) -> bool) -> bool {
        self.values_row_major().any(predicate)
    }

    pub fn all(&self, predicate: impl Fn(Option<&T>) -> bool) -> bool {
        self.values_row_major().all(predicate)
    }

    pub fn empty_cells(&self) -> Vec<Cell> {
        self.filter(|value| value.is_none())
    }
}

impl<T: Clone + PartialEq> GameBoard<T> {
    /// Slides the values of `line` toward its first cell, merging equal neighbors once.
    ///
    /// Returns whether any cell of the line changed.
    pub fn move_line(&mut self, line: &[Cell], merge: impl FnMut(T) -> T) -> bool {
        let before: Vec<Option<T>> = line.iter().map(|&cell| self.get(cell).cloned()).collect();
        let mut merged = move_and_merge_equal(before.iter().cloned(), merge).into_iter();

        let mut changed = false;
        for (&cell, old) in line.iter().zip(before) {
            let new = merged.next();
            if new != old {
                changed = true;
            }
            self.set(cell, new);
        }
        changed
    }
}

impl<T> Index<Cell> for GameBoard<T> {
    type Output = Option<T>;

    /// # Panics
    /// Panics if `cell` is outside the grid, use [`GameBoard::get`] to check instead.
    fn index(&self, cell: Cell) -> &Self::Output {
        assert!(self.grid.contains(cell), "{cell:?} is outside the board");
        &self.values[cell.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn board(width: Coord) -> GameBoard<Tile> {
        GameBoard::new(width).unwrap()
    }

    #[test]
    fn starts_empty() {
        let board = board(3);

        assert!(board.all(|value| value.is_none()));
        assert!(!board.any(|value| value.is_some()));
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn set_then_get() {
        let mut board = board(2);
        let cell = Cell::new(2, 1);

        board.set(cell, Some(8));

        assert_eq!(board.get(cell), Some(&8));
        assert_eq!(board[cell], Some(8));
        assert_eq!(board.get_at(2, 1), Ok(Some(&8)));
        assert_eq!(board.get(Cell::new(1, 1)), None);

        board.set(cell, None);
        assert_eq!(board.get(cell), None);
    }

    #[test]
    fn get_at_fails_outside_grid() {
        let board = board(2);

        assert_eq!(
            board.get_at(3, 1),
            Err(GameError::InvalidCoordinate { row: 3, col: 1 })
        );
    }

    #[test]
    fn queries_visit_cells_row_major() {
        let mut board = board(2);
        board.set(Cell::new(2, 2), Some(4));
        board.set(Cell::new(1, 2), Some(4));
        board.set(Cell::new(2, 1), Some(2));

        assert_eq!(
            board.filter(|value| value == Some(&4)),
            vec![Cell::new(1, 2), Cell::new(2, 2)]
        );
        assert_eq!(board.find(|value| value == Some(&4)), Some(Cell::new(1, 2)));
        assert_eq!(board.find(|value| value == Some(&16)), None);
        assert!(board.any(|value| value == Some(&2)));
        assert!(!board.all(|value| value.is_some()));
        assert_eq!(board.empty_cells(), vec![Cell::new(1, 1)]);
    }

    #[test]
    fn move_line_pads_with_empty_cells() {
        let mut board = board(4);
        let line = board.grid().line(1, Direction::Left);
        board.set(Cell::new(1, 2), Some(2));
        board.set(Cell::new(1, 4), Some(2));

        assert!(board.move_line(&line, |v| v * 2));
        assert_eq!(board[Cell::new(1, 1)], Some(4));
        assert_eq!(board[Cell::new(1, 2)], None);
        assert_eq!(board[Cell::new(1, 4)], None);
    }

    #[test]
    fn move_line_reports_unchanged_line() {
        let mut board = board(4);
        let line = board.grid().line(1, Direction::Left);
        board.set(Cell::new(1, 1), Some(2));
        board.set(Cell::new(1, 2), Some(4));

        assert!(!board.move_line(&line, |v| v * 2));
        assert_eq!(board[Cell::new(1, 1)], Some(2));
        assert_eq!(board[Cell::new(1, 2)], Some(4));
    }

    #[test]
    fn cells_outside_grid_read_as_empty_and_ignore_writes() {
        let mut board = board(4);
        let outside = [Cell::new(0, 1), Cell::new(1, 0), Cell::new(5, 5)];

        for cell in outside {
            board.set(cell, Some(2));
            assert_eq!(board.get(cell), None);
            assert_eq!(board.take(cell), None);
        }
        assert!(board.all(|value| value.is_none()));
    }

    #[test]
    #[should_panic]
    fn index_outside_grid_panics() {
        let board = board(2);
        let _ = board[Cell::new(0, 1)];
    }

    #[test]
    fn snapshot_with_mismatched_values_is_rejected() {
        let small = serde_json::to_string(&board(2)).unwrap();
        let mut board = board(4);
        board.set(Cell::new(1, 1), Some(2));
        let json = serde_json::to_string(&board).unwrap();
        let small_values = &small[small.find("\"values\"").unwrap()..];
        let tampered = [&json[..json.find("\"values\"").unwrap()], small_values].concat();

        assert!(serde_json::from_str::<GameBoard<Tile>>(&tampered).is_err());
        assert_eq!(serde_json::from_str::<GameBoard<Tile>>(&json).unwrap(), board);
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut board = board(2);
        board.set(Cell::new(1, 1), Some(2));
        board.set(Cell::new(2, 2), Some(2));

        board.clear();

        assert!(board.all(|value| value.is_none()));
    }
}
