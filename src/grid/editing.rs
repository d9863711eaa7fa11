//! Writing text into the grid.

use crate::cell::{Cell, CellFlags, Pen, char_width};
use crate::index::Point;

use super::Grid;

impl Grid {
    /// Write `text` at the cursor using `pen`.
    ///
    /// `\n` returns to column 0 of the next line. Wide glyphs never split
    /// across rows: if fewer than two columns remain, the glyph wraps first.
    /// Reaching the right edge wraps eagerly, and any advance past the last
    /// line scrolls the grid up. The cursor ends after the last glyph.
    pub fn write_text(&mut self, text: &str, pen: &Pen) {
        let mut col = self.cursor.col;
        let mut line = self.cursor.line;

        for ch in text.chars() {
            if ch == '\n' {
                col = 0;
                line = self.advance_line(line);
                continue;
            }

            let width = char_width(ch);

            // A wide glyph can never fit a one-column grid; wrapping would
            // loop forever, so drop it.
            if width > self.cols {
                log::trace!("dropping wide glyph {ch:?} on {}-column grid", self.cols);
                continue;
            }

            if col + width > self.cols {
                col = 0;
                line = self.advance_line(line);
            }

            self.put_cell(line, col, ch, width, pen);

            col += width;
            if col >= self.cols {
                col = 0;
                line = self.advance_line(line);
            }
        }

        self.cursor = Point::new(col, line);
    }

    /// Store one glyph (plus its continuation when wide) at `(col, line)`.
    fn put_cell(&mut self, line: usize, col: usize, ch: char, width: usize, pen: &Pen) {
        let mut cell = Cell::new(ch, pen);
        if width == 2 {
            cell.flags = CellFlags::WIDE_CHAR;
        }
        self.store(line, col, cell);
    }

    /// Write `cell` at an in-bounds `(col, line)`, normalizing its wide flags.
    pub(super) fn store(&mut self, line: usize, col: usize, mut cell: Cell) {
        if cell.flags.contains(CellFlags::WIDE_CHAR) {
            cell.flags.remove(CellFlags::WIDE_CHAR_SPACER);
            if col + 1 >= self.cols {
                log::trace!("wide lead {:?} at last column stored as narrow", cell.ch);
                cell.flags.remove(CellFlags::WIDE_CHAR);
            }
        }

        if cell.flags.contains(CellFlags::WIDE_CHAR_SPACER) {
            cell.ch = ' ';
            let after_lead =
                col > 0 && self.rows[line][col - 1].flags.contains(CellFlags::WIDE_CHAR);
            if after_lead {
                // The slot already belongs to that lead; only its look changes.
                self.rows[line][col] = cell;
                return;
            }
            cell.flags.remove(CellFlags::WIDE_CHAR_SPACER);
        }

        self.clear_wide_char_at(line, col);
        if cell.flags.contains(CellFlags::WIDE_CHAR) {
            self.clear_wide_char_at(line, col + 1);
            self.rows[line][col + 1] = Cell::spacer();
        }
        self.rows[line][col] = cell;
    }

    /// Break up any wide glyph pair that a write at `(col, line)` would split.
    ///
    /// Overwriting a continuation blanks its lead; overwriting a lead
    /// blanks its continuation.
    pub(super) fn clear_wide_char_at(&mut self, line: usize, col: usize) {
        if col >= self.cols {
            return;
        }

        let flags = self.rows[line][col].flags;

        if flags.contains(CellFlags::WIDE_CHAR_SPACER) && col > 0 {
            let prev = &mut self.rows[line][col - 1];
            prev.ch = ' ';
            prev.flags.remove(CellFlags::WIDE_CHAR);
        }

        if flags.contains(CellFlags::WIDE_CHAR) && col + 1 < self.cols {
            self.rows[line][col + 1] = Cell::default();
        }
    }
}
