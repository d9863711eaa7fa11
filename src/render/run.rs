//! Style runs: maximal stretches of one row drawn with a single call.

use vte::ansi::Color;

use crate::cell::{Cell, CellStyle};

/// Everything that forces a new draw call when it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RunKey {
    pub fg: Color,
    pub bg: Color,
    pub style: CellStyle,
}

impl RunKey {
    pub fn of(cell: &Cell) -> Self {
        Self {
            fg: cell.fg,
            bg: cell.bg,
            style: cell.style,
        }
    }
}

/// An open run being accumulated during a row scan.
#[derive(Debug)]
pub(super) struct Run {
    pub key: RunKey,
    /// First column of the run.
    pub start: usize,
    /// One past the last column covered (continuation cells included).
    pub end: usize,
    pub text: String,
}

impl Run {
    pub fn open(col: usize, key: RunKey) -> Self {
        Self {
            key,
            start: col,
            end: col,
            text: String::new(),
        }
    }

    /// Add a lead cell's glyph; the run now covers through its full width.
    pub fn push(&mut self, col: usize, cell: &Cell) {
        self.text.push(cell.ch);
        self.end = col + cell.width();
    }

    /// Stretch the run over a continuation cell at `col`.
    pub fn cover(&mut self, col: usize) {
        self.end = self.end.max(col + 1);
    }

    pub fn cols(&self) -> usize {
        self.end - self.start
    }
}
