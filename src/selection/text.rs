//! Text extraction from a grid selection.

use crate::grid::{Grid, Row};

use super::Selection;

/// Extract the selected text from `grid`.
///
/// Rows are joined with `\n` and trailing whitespace is trimmed from the
/// result. Continuation cells contribute nothing, except when one is the
/// first cell of a row's range (its lead glyph lies outside the selection):
/// it then stands in as a single space so the column is not lost.
pub fn extract_text(grid: &Grid, selection: &Selection) -> String {
    if selection.is_empty() {
        return String::new();
    }

    let (start, end) = selection.normalize();
    let last_line = end.line.min(grid.lines().saturating_sub(1));
    let mut result = String::new();

    for line in start.line..=last_line {
        if let Some((from, to)) = selection.line_span(line, grid.cols()) {
            push_cells(&mut result, &grid[line], from, to);
        }
        if line < last_line {
            result.push('\n');
        }
    }

    result.truncate(result.trim_end().len());
    result
}

/// Append the glyphs of cells `[from, to)` of `row`.
fn push_cells(out: &mut String, row: &Row, from: usize, to: usize) {
    let mut col = from;
    while col < to {
        let cell = &row[col];
        match cell.width() {
            0 => {
                if col == from {
                    out.push(' ');
                }
                col += 1;
            }
            width => {
                out.push(cell.ch);
                col += width;
            }
        }
    }
}
