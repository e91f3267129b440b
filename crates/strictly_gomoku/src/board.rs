//! Rectangular gomoku board.

use crate::{Action, Cell, InvalidConfiguration, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Dimensions of a board, `rows × cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{rows}x{cols}")]
pub struct BoardSize {
    rows: usize,
    cols: usize,
}

impl BoardSize {
    /// Creates a `rows × cols` size.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Creates a square size with the given side length.
    pub const fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Row-major index of a coordinate, or `None` off the board.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col).then(|| row * self.cols + col)
    }

    /// Rejects sizes with a zero dimension.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.rows == 0 {
            return Err(InvalidConfiguration::ZeroRows);
        }
        if self.cols == 0 {
            return Err(InvalidConfiguration::ZeroCols);
        }
        Ok(())
    }
}

impl From<usize> for BoardSize {
    fn from(side: usize) -> Self {
        Self::square(side)
    }
}

impl From<(usize, usize)> for BoardSize {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

/// A `rows × cols` grid of cells in row-major order.
///
/// The number of empty cells is tracked on every write, so fullness
/// checks never rescan the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
    empty: usize,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let count = size.cell_count();
        Self {
            size,
            cells: vec![Cell::Empty; count],
            empty: count,
        }
    }

    /// Builds a board from rows of numeric cell values (`0`, `1`, `-1`).
    #[instrument(skip(rows))]
    pub fn from_values<R: AsRef<[i8]>>(rows: &[R]) -> Result<Self, InvalidConfiguration> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let size = BoardSize::new(rows.len(), cols);
        size.validate()?;

        let mut board = Self::new(size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(InvalidConfiguration::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::from_value(value)
                    .ok_or(InvalidConfiguration::InvalidCell { row, col, value })?;
                board.set(row, col, cell);
            }
        }
        Ok(board)
    }

    /// Returns the board dimensions.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the cell at the given coordinate, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.size.index(row, col).map(|i| self.cells[i])
    }

    /// Gets the cell targeted by an action.
    pub fn at(&self, action: Action) -> Option<Cell> {
        self.get(action.row, action.col)
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Writes a cell, returning the previous value, or `None` off the board.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Option<Cell> {
        let i = self.size.index(row, col)?;
        let previous = std::mem::replace(&mut self.cells[i], cell);
        match (previous.is_empty(), cell.is_empty()) {
            (true, false) => self.empty -= 1,
            (false, true) => self.empty += 1,
            _ => {}
        }
        Some(previous)
    }

    /// Places a player's mark.
    ///
    /// # Panics
    ///
    /// Panics if the action is off the board.
    pub(crate) fn place(&mut self, action: Action, player: Player) {
        let previous = self.set(action.row, action.col, Cell::Occupied(player));
        assert!(previous.is_some(), "placing outside the board at {action}");
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.empty
    }

    /// Counts empty cells by scanning the grid.
    pub fn scan_empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.empty == 0
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Coordinates of the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Action> + '_ {
        let cols = self.size.cols();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(move |(i, _)| Action::new(i / cols, i % cols))
    }

    /// The board as rows of numeric cell values.
    pub fn to_values(&self) -> Vec<Vec<i8>> {
        self.cells
            .chunks(self.size.cols().max(1))
            .map(|row| row.iter().map(|c| c.value()).collect())
            .collect()
    }
}
