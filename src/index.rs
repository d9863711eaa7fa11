//! Grid coordinates.
//!
//! `Point` addresses one cell by column and line. Ordering is row-major
//! (line first, then column), which is the reading order selection
//! normalization relies on.

use std::cmp::Ordering;
use std::fmt;

/// A cell coordinate: `col` in `[0, cols)`, `line` in `[0, lines)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub col: usize,
    pub line: usize,
}

impl Point {
    /// Create a point at the given column and line.
    pub const fn new(col: usize, line: usize) -> Self {
        Self { col, line }
    }

    /// Clamp into a `cols` x `lines` extent.
    ///
    /// Both dimensions must be at least 1.
    pub fn clamp_to(self, cols: usize, lines: usize) -> Self {
        Self {
            col: self.col.min(cols.saturating_sub(1)),
            line: self.line.min(lines.saturating_sub(1)),
        }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.line)
    }
}
