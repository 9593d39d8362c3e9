use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed square coordinate space. Owns every [`Cell`] of the board in row-major order.
///
/// Serialized as its width alone, cells are rebuilt on load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Coord", into = "Coord")]
pub struct SquareGrid {
    width: Coord,
    cells: Vec<Cell>,
}

impl SquareGrid {
    pub fn new(width: Coord) -> Result<Self> {
        if width == 0 || width > MAX_WIDTH {
            return Err(GameError::InvalidWidth);
        }

        let cells = (1..=width)
            .flat_map(|row| (1..=width).map(move |col| Cell::new(row, col)))
            .collect();
        Ok(Self { width, cells })
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn len(&self) -> CellCount {
        mult(self.width, self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (1..=self.width).contains(&cell.row) && (1..=self.width).contains(&cell.col)
    }

    pub fn cell_at(&self, row: Coord, col: Coord) -> Option<Cell> {
        let cell = Cell::new(row, col);
        self.contains(cell).then_some(cell)
    }

    pub fn cell(&self, row: Coord, col: Coord) -> Result<Cell> {
        self.cell_at(row, col)
            .ok_or(GameError::InvalidCoordinate { row, col })
    }

    pub fn all_cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of `row` in the order given by `cols`, dropping columns that do not exist.
    pub fn row(&self, row: Coord, cols: impl IntoIterator<Item = Coord>) -> Vec<Cell> {
        cols.into_iter()
            .filter_map(|col| self.cell_at(row, col))
            .collect()
    }

    /// Cells of `col` in the order given by `rows`, dropping rows that do not exist.
    pub fn column(&self, rows: impl IntoIterator<Item = Coord>, col: Coord) -> Vec<Cell> {
        rows.into_iter()
            .filter_map(|row| self.cell_at(row, col))
            .collect()
    }

    /// The row or column numbered `index`, ordered so that sliding toward the start of the
    /// sequence moves values physically in `direction`.
    pub fn line(&self, index: Coord, direction: Direction) -> Vec<Cell> {
        use Direction::*;

        let width = self.width;
        match direction {
            Left => self.row(index, 1..=width),
            Right => self.row(index, (1..=width).rev()),
            Up => self.column(1..=width, index),
            Down => self.column((1..=width).rev(), index),
        }
    }

    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        apply_delta(cell, direction.delta())
            .and_then(|Cell { row, col }| self.cell_at(row, col))
    }

    pub fn iter_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(cell, direction))
    }
}

impl TryFrom<Coord> for SquareGrid {
    type Error = GameError;

    fn try_from(width: Coord) -> Result<Self> {
        Self::new(width)
    }
}

impl From<SquareGrid> for Coord {
    fn from(grid: SquareGrid) -> Self {
        grid.width
    }
}

/// Applies `delta` to `cell`, returning a value only when no coordinate underflows.
fn apply_delta(cell: Cell, (d_row, d_col): (i8, i8)) -> Option<Cell> {
    let row = cell.row.checked_add_signed(d_row)?;
    let col = cell.col.checked_add_signed(d_col)?;
    Some(Cell::new(row, col))
}
