//! Run-batched grid rendering.
//!
//! Shaping text per cell is too expensive for interactive redraw, so each
//! row is scanned once and horizontally contiguous cells sharing the same
//! colors and style are coalesced into a single text draw (plus one
//! background fill when the run's background is not the default). Draw
//! calls scale with style transitions rather than with cell count.
//!
//! Per row, background fills precede text. Selection highlights are
//! emitted after every row so they always sit on top.

mod draw;
mod run;

pub use draw::{CellMetrics, DrawList, DrawOp, Rect, Rgba, Span};

use crate::cell::{Cell, DEFAULT_BG};
use crate::grid::{Grid, Row};
use crate::selection::Selection;

use run::{Run, RunKey};

/// Default selection highlight: ARGB(128, 0, 120, 215).
pub const DEFAULT_SELECTION_COLOR: Rgba = Rgba::new(0, 120, 215, 128);

/// Turns a grid and selection into an ordered draw list.
#[derive(Debug)]
pub struct RunRenderer {
    metrics: CellMetrics,
    selection_color: Rgba,
    /// Text ops of the row being scanned, held back until its fills are out.
    row_text: Vec<DrawOp>,
}

impl RunRenderer {
    pub fn new(metrics: CellMetrics, selection_color: Rgba) -> Self {
        Self {
            metrics,
            selection_color,
            row_text: Vec::new(),
        }
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    pub fn set_metrics(&mut self, metrics: CellMetrics) {
        self.metrics = metrics;
    }

    pub fn selection_color(&self) -> Rgba {
        self.selection_color
    }

    pub fn set_selection_color(&mut self, color: Rgba) {
        self.selection_color = color;
    }

    /// Render `grid` and `selection` into `out`, replacing its contents.
    pub fn render(&mut self, grid: &Grid, selection: &Selection, out: &mut DrawList) {
        out.clear();

        for (line, row) in grid.rows().enumerate() {
            self.render_row(line, row, out);
        }

        if !selection.is_empty() {
            for line in 0..grid.lines() {
                if let Some((from, to)) = selection.line_span(line, grid.cols()) {
                    let span = Span {
                        line,
                        col: from,
                        cols: to - from,
                    };
                    out.push(DrawOp::Selection {
                        span,
                        rect: self.metrics.span_rect(span),
                        color: self.selection_color,
                    });
                }
            }
        }

        log::trace!(
            "rendered {}x{} grid into {} draw ops",
            grid.cols(),
            grid.lines(),
            out.len()
        );
    }

    fn render_row(&mut self, line: usize, row: &Row, out: &mut DrawList) {
        let mut open: Option<Run> = None;

        for (col, cell) in row.cells().iter().enumerate() {
            if cell.width() == 0 {
                // The lead cell already drew this glyph; a continuation only
                // matters on its own when it carries a background.
                match open.as_mut() {
                    Some(run) => run.cover(col),
                    None if cell.has_custom_bg() => self.fill_cell(line, col, cell, out),
                    None => {}
                }
                continue;
            }

            let key = RunKey::of(cell);
            if open.as_ref().is_some_and(|run| run.key != key) {
                if let Some(run) = open.take() {
                    self.flush(line, run, out);
                }
            }
            open.get_or_insert_with(|| Run::open(col, key))
                .push(col, cell);
        }

        if let Some(run) = open.take() {
            self.flush(line, run, out);
        }
        out.append(&mut self.row_text);
    }

    /// Close `run`: its background fill goes out now, its text after the row.
    fn flush(&mut self, line: usize, run: Run, out: &mut DrawList) {
        let span = Span {
            line,
            col: run.start,
            cols: run.cols(),
        };
        let rect = self.metrics.span_rect(span);
        if run.key.bg != DEFAULT_BG {
            out.push(DrawOp::Fill {
                span,
                rect,
                color: run.key.bg,
            });
        }
        self.row_text.push(DrawOp::Text {
            span,
            rect,
            text: run.text,
            fg: run.key.fg,
            style: run.key.style,
        });
    }

    fn fill_cell(&self, line: usize, col: usize, cell: &Cell, out: &mut DrawList) {
        let span = Span { line, col, cols: 1 };
        out.push(DrawOp::Fill {
            span,
            rect: self.metrics.span_rect(span),
            color: cell.bg,
        });
    }
}
