//! Scrolling.

use super::Grid;

impl Grid {
    /// Discard the top row and append a blank row at the bottom.
    ///
    /// Reuses the discarded row's allocation. The cursor is not moved;
    /// callers that scroll because of an overflowing write keep their
    /// line pinned to the last row.
    pub fn scroll_up(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.reset();
        }
    }

    /// Move down one line from `line`, scrolling when it would leave the grid.
    ///
    /// Returns the new line index.
    pub(super) fn advance_line(&mut self, line: usize) -> usize {
        if line + 1 >= self.lines {
            self.scroll_up();
            self.lines - 1
        } else {
            line + 1
        }
    }
}
