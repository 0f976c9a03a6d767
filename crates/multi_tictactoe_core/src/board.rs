//! Rectangular game board.

use super::error::{GameError, GameErrorKind};
use super::types::{Cell, Coord, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// `cols` x `rows` tic-tac-toe board.
///
/// Cells are stored column-major: the cell at `(col, row)` lives at index
/// `col * rows + row`, and its label is that index plus one. Labels are
/// assigned once at construction and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board with every cell open, labeled `1..=cols*rows`.
    #[instrument]
    pub fn new(cols: usize, rows: usize) -> Result<Self, GameError> {
        if cols < 1 || rows < 1 {
            return Err(GameError::config(format!(
                "board must have at least one column and one row, got {} x {}",
                cols, rows
            )));
        }
        let count = cols.checked_mul(rows).ok_or_else(|| {
            GameError::config(format!("board of {} x {} cells is too large", cols, rows))
        })?;

        let cells = (1..=count).map(Cell::Open).collect();
        debug!(cols, rows, count, "Board created");
        Ok(Self { cols, rows, cells })
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.col < self.cols && coord.row < self.rows
    }

    fn index(&self, coord: Coord) -> Result<usize, GameError> {
        if self.contains(coord) {
            Ok(coord.col * self.rows + coord.row)
        } else {
            Err(GameError::new(GameErrorKind::OutOfBounds {
                col: coord.col,
                row: coord.row,
            }))
        }
    }

    fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index / self.rows, index % self.rows)
    }

    /// Returns the state of the cell at `coord`.
    pub fn cell_at(&self, coord: Coord) -> Result<Cell, GameError> {
        let index = self.index(coord)?;
        Ok(self.cells[index])
    }

    /// Checks if the cell at `coord` is open. Off-board cells are not.
    pub fn is_open(&self, coord: Coord) -> bool {
        self.cell_at(coord).map(|cell| cell.is_open()).unwrap_or(false)
    }

    /// Finds the open cell whose label is exactly `label`.
    ///
    /// Matching is textual: `"5"` finds label 5, while `"05"`, `"+5"` and
    /// `" 5"` find nothing. Labels of occupied cells are never matched.
    #[instrument(skip(self))]
    pub fn find_open_cell_by_label(&self, label: &str) -> Option<Coord> {
        let number: usize = label.parse().ok()?;
        if number.to_string() != label || number == 0 {
            return None;
        }
        let index = number - 1;
        match self.cells.get(index) {
            Some(Cell::Open(found)) if *found == number => Some(self.coord_of(index)),
            _ => None,
        }
    }

    /// Like [`Board::find_open_cell_by_label`], but reports a miss as
    /// [`GameErrorKind::InvalidMoveInput`].
    #[track_caller]
    pub fn require_open_cell_by_label(&self, label: &str) -> Result<Coord, GameError> {
        self.find_open_cell_by_label(label)
            .ok_or_else(|| GameError::new(GameErrorKind::InvalidMoveInput(label.to_string())))
    }

    /// Claims the cell at `coord` for `symbol`.
    #[instrument(skip(self))]
    pub fn occupy(&mut self, coord: Coord, symbol: Symbol) -> Result<(), GameError> {
        let index = self.index(coord)?;
        match self.cells[index] {
            Cell::Open(_) => {
                self.cells[index] = Cell::Occupied(symbol);
                Ok(())
            }
            Cell::Occupied(_) => Err(GameError::new(GameErrorKind::CellAlreadyOccupied {
                col: coord.col,
                row: coord.row,
            })),
        }
    }

    /// Iterates the coordinates of open cells in column-major order.
    pub fn open_cells(&self) -> OpenCells<'_> {
        OpenCells {
            board: self,
            next: 0,
        }
    }

    /// Labels of the open cells in column-major order.
    pub fn open_labels(&self) -> Vec<usize> {
        self.cells.iter().filter_map(Cell::label).collect()
    }

    /// Returns true when no cell is open.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_open())
    }

    /// Cells of one column, top to bottom, or `None` past the last column.
    pub fn column(&self, col: usize) -> Option<&[Cell]> {
        if col >= self.cols {
            return None;
        }
        let start = col * self.rows;
        self.cells.get(start..start + self.rows)
    }
}

/// Lazy iterator over the open cells of a [`Board`].
///
/// Holds a shared borrow, so the board cannot change underneath it.
#[derive(Debug, Clone)]
pub struct OpenCells<'a> {
    board: &'a Board,
    next: usize,
}

impl Iterator for OpenCells<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while self.next < self.board.cells.len() {
            let index = self.next;
            self.next += 1;
            if self.board.cells[index].is_open() {
                return Some(self.board.coord_of(index));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.board.cells.len() - self.next))
    }
}
