//! Terminal grid row.

use std::ops::{Index, IndexMut};

use crate::cell::{Cell, CellFlags};

/// One row of cells in the terminal grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    inner: Vec<Cell>,
}

impl Row {
    /// Create a new row of `cols` default cells.
    pub fn new(cols: usize) -> Self {
        Self {
            inner: vec![Cell::default(); cols],
        }
    }

    /// Number of columns in this row.
    pub fn cols(&self) -> usize {
        self.inner.len()
    }

    /// The cells of this row, left to right.
    pub fn cells(&self) -> &[Cell] {
        &self.inner
    }

    /// Reset every cell to the default blank cell.
    pub fn reset(&mut self) {
        self.inner.fill(Cell::default());
    }

    /// Returns `true` if every cell is visually empty.
    pub fn is_blank(&self) -> bool {
        self.inner.iter().all(Cell::is_empty)
    }

    /// Visible text of the row: one char per lead cell, spacers skipped.
    pub fn text(&self) -> String {
        self.inner
            .iter()
            .filter(|c| !c.flags.contains(CellFlags::WIDE_CHAR_SPACER))
            .map(|c| c.ch)
            .collect()
    }
}

impl Index<usize> for Row {
    type Output = Cell;

    fn index(&self, col: usize) -> &Cell {
        &self.inner[col]
    }
}

impl IndexMut<usize> for Row {
    fn index_mut(&mut self, col: usize) -> &mut Cell {
        &mut self.inner[col]
    }
}
