//! Text selection over the cell grid.
//!
//! A selection is a pair of caret positions plus an `active` flag that is
//! set while a pointer drag is in progress. Carets sit *between* cells: a
//! point `(col, line)` is the left edge of that cell, and `col` may equal
//! the grid width to mean "end of line". The covered range is therefore
//! half-open: a selection from `(2, 0)` to `(3, 0)` covers exactly one cell,
//! and a selection whose ends coincide covers nothing.

mod text;

pub use text::extract_text;

use crate::index::Point;

/// Anchor/head selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Where the drag started.
    anchor: Point,
    /// Where the drag currently is.
    head: Point,
    active: bool,
}

impl Selection {
    /// An empty, inactive selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag at `point`: both ends collapse onto it.
    pub fn begin(&mut self, point: Point) {
        self.anchor = point;
        self.head = point;
        self.active = true;
    }

    /// Move the head while a drag is active. Ignored otherwise.
    pub fn extend(&mut self, point: Point) {
        if self.active {
            self.head = point;
        }
    }

    /// Finish the drag. The range stays until cleared.
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Drop the range entirely.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Select every cell of a `cols` x `lines` grid.
    pub fn select_all(&mut self, cols: usize, lines: usize) {
        self.anchor = Point::new(0, 0);
        self.head = Point::new(cols, lines.saturating_sub(1));
        self.active = false;
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn head(&self) -> Point {
        self.head
    }

    /// Whether the selection covers no cells.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// The ends ordered in reading order: `start <= end` by line, then column.
    pub fn normalize(&self) -> (Point, Point) {
        if self.anchor <= self.head {
            (self.anchor, self.head)
        } else {
            (self.head, self.anchor)
        }
    }

    /// Half-open column range `[from, to)` covered on `line` of a grid `cols` wide.
    ///
    /// Returns `None` when the line is outside the selection or the range is
    /// empty on it.
    pub fn line_span(&self, line: usize, cols: usize) -> Option<(usize, usize)> {
        if self.is_empty() {
            return None;
        }
        let (start, end) = self.normalize();
        if line < start.line || line > end.line {
            return None;
        }
        let from = (if line == start.line { start.col } else { 0 }).min(cols);
        let to = (if line == end.line { end.col } else { cols }).min(cols);
        (from < to).then_some((from, to))
    }

    /// Whether the cell at `point` lies inside the selection.
    pub fn contains(&self, point: Point) -> bool {
        if self.is_empty() {
            return false;
        }
        let (start, end) = self.normalize();
        start <= point && point < end
    }
}
