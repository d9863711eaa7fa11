//! Terminal grid: fixed-size 2D cell storage with a write cursor.
//!
//! The `Grid` stores `lines` rows of `cols` cells, indexed top to bottom.
//! Writing text and scrolling live in the `editing` and `scroll`
//! submodules. Resizing discards content; there is no reflow.

mod editing;
mod row;
mod scroll;

use std::ops::{Index, IndexMut};

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::index::Point;

pub use row::Row;

/// Columns of a freshly constructed surface grid.
pub const DEFAULT_COLS: usize = 80;

/// Lines of a freshly constructed surface grid.
pub const DEFAULT_LINES: usize = 25;

/// The 2D terminal cell grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Visible rows (index 0 = top of screen).
    rows: Vec<Row>,
    cols: usize,
    lines: usize,
    /// Logical write position, always inside `[0, cols) x [0, lines)`.
    cursor: Point,
}

impl Grid {
    /// Create a blank grid with the cursor at the origin.
    pub fn new(cols: usize, lines: usize) -> Result<Self> {
        if cols == 0 || lines == 0 {
            return Err(Error::InvalidDimension { cols, lines });
        }
        Ok(Self {
            rows: (0..lines).map(|_| Row::new(cols)).collect(),
            cols,
            lines,
            cursor: Point::default(),
        })
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of visible lines.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Current write cursor.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Move the write cursor, clamping it into the grid.
    pub fn set_cursor(&mut self, point: Point) {
        self.cursor = point.clamp_to(self.cols, self.lines);
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &Row> {
        self.rows.iter()
    }

    /// Replace the grid with blank storage of the new size.
    ///
    /// All prior content is lost. The cursor is clamped into the new
    /// extent. Zero dimensions are rejected and leave the grid untouched.
    pub fn resize(&mut self, cols: usize, lines: usize) -> Result<()> {
        if cols == 0 || lines == 0 {
            return Err(Error::InvalidDimension { cols, lines });
        }
        log::debug!("grid resize {}x{} -> {cols}x{lines}", self.cols, self.lines);
        self.rows = (0..lines).map(|_| Row::new(cols)).collect();
        self.cols = cols;
        self.lines = lines;
        self.cursor = self.cursor.clamp_to(cols, lines);
        Ok(())
    }

    /// Bounds-checked cell read.
    pub fn get(&self, col: usize, line: usize) -> Result<&Cell> {
        self.check_bounds(col, line)?;
        Ok(&self.rows[line][col])
    }

    /// Bounds-checked cell write.
    ///
    /// The wide-glyph pairing is kept intact whatever `cell` carries:
    /// - overwriting either half of a wide glyph blanks the other half;
    /// - a `WIDE_CHAR` lead gets a fresh continuation at `col + 1`, or is
    ///   stored as a narrow cell in the last column;
    /// - a `WIDE_CHAR_SPACER` is only kept right of a wide lead, otherwise
    ///   it is stored as a plain blank.
    pub fn set(&mut self, col: usize, line: usize, cell: Cell) -> Result<()> {
        self.check_bounds(col, line)?;
        self.store(line, col, cell);
        Ok(())
    }

    fn check_bounds(&self, col: usize, line: usize) -> Result<()> {
        if col >= self.cols || line >= self.lines {
            return Err(Error::OutOfBounds {
                col,
                line,
                cols: self.cols,
                lines: self.lines,
            });
        }
        Ok(())
    }
}

impl Default for Grid {
    /// An 80x25 blank grid.
    fn default() -> Self {
        Self {
            rows: (0..DEFAULT_LINES).map(|_| Row::new(DEFAULT_COLS)).collect(),
            cols: DEFAULT_COLS,
            lines: DEFAULT_LINES,
            cursor: Point::default(),
        }
    }
}

impl Index<usize> for Grid {
    type Output = Row;

    fn index(&self, line: usize) -> &Row {
        &self.rows[line]
    }
}

impl IndexMut<usize> for Grid {
    fn index_mut(&mut self, line: usize) -> &mut Row {
        &mut self.rows[line]
    }
}
