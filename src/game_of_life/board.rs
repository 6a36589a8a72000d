//! Fixed-size toroidal board

use super::BoardError;
use itertools::iproduct;
use std::fmt;

/// A Game of Life board whose edges wrap around to the opposite side.
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row. Any integer pair
/// is accepted and folded back onto the grid, so the cell left of column 0 is
/// column `columns - 1`. Dimensions are fixed once the board exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Create an all-dead board
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::InvalidDimensions { rows, columns });
        }

        let len = rows
            .checked_mul(columns)
            .filter(|&len| len <= i64::MAX as usize)
            .ok_or(BoardError::Allocation { rows, columns })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| BoardError::Allocation { rows, columns })?;
        cells.resize(len, false);

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Create a board with the given cells alive
    pub fn from_living_cells<I>(rows: usize, columns: usize, living: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut board = Self::new(rows, columns)?;
        for (x, y) in living {
            board.set(x, y, true);
        }
        Ok(board)
    }

    /// An all-dead board with the same dimensions as this one.
    ///
    /// The dimensions were already allocated once, so this does not go through
    /// the fallible path in [`Board::new`].
    pub(crate) fn blank_like(&self) -> Self {
        Self {
            rows: self.rows,
            columns: self.columns,
            cells: vec![false; self.cells.len()],
        }
    }

    pub(crate) fn from_raw(rows: usize, columns: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row-major view of the cell states
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Fold arbitrary coordinates onto the grid
    #[inline]
    pub fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        (
            x.rem_euclid(self.columns as i64) as usize,
            y.rem_euclid(self.rows as i64) as usize,
        )
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> usize {
        let (col, row) = self.wrap(x, y);
        row * self.columns + col
    }

    pub fn get(&self, x: i64, y: i64) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: i64, y: i64, value: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    pub fn toggle(&mut self, x: i64, y: i64) {
        let idx = self.index(x, y);
        self.cells[idx] ^= true;
    }

    /// Count living cells among the 8 wrapped neighbours of `(x, y)`
    pub fn count_neighbors(&self, x: i64, y: i64) -> u8 {
        let (x, y) = self.wrap(x, y);
        let (x, y) = (x as i64, y as i64);
        iproduct!(-1i64..=1, -1i64..=1)
            .filter(|&offset| offset != (0, 0))
            .filter(|&(dx, dy)| self.get(x + dx, y + dy))
            .count() as u8
    }

    /// Produce a new board where the cell at `(x, y)` has moved to `(x + dx, y + dy)`.
    ///
    /// Cells pushed past one edge come back in on the opposite edge, so the
    /// population is unchanged.
    pub fn shift(&self, dx: i64, dy: i64) -> Board {
        // Reduce first so `x + dx` stays in range for any offset
        let (dx, dy) = self.wrap(dx, dy);
        let (dx, dy) = (dx as i64, dy as i64);

        let mut shifted = self.blank_like();
        for y in 0..self.rows as i64 {
            for x in 0..self.columns as i64 {
                shifted.set(x + dx, y + dy, self.get(x, y));
            }
        }
        shifted
    }

    /// Coordinates of all living cells, column by column
    pub fn living_cells(&self) -> Vec<(i64, i64)> {
        iproduct!(0..self.columns as i64, 0..self.rows as i64)
            .filter(|&(x, y)| self.get(x, y))
            .collect()
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows as i64 {
            for x in 0..self.columns as i64 {
                let symbol = if self.get(x, y) { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
