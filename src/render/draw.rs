//! Draw operations handed to the render backend.
//!
//! The renderer is backend-agnostic: it produces an ordered `DrawList` of
//! fills and styled text runs in pixel space, and the embedding host
//! replays them on whatever canvas it owns.

use vte::ansi::Color;

use crate::cell::CellStyle;
use crate::error::{Error, Result};
use crate::index::Point;

/// Pixel size of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_width: f32,
    pub cell_height: f32,
}

impl CellMetrics {
    pub const fn new(cell_width: f32, cell_height: f32) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Heuristic cell size for a monospace font of `font_size` points.
    ///
    /// Width is 0.6 and height 1.2 of the font size, floored to whole
    /// pixels. This is an approximation, not measured glyph metrics.
    pub fn estimate(font_size: f32) -> Self {
        Self {
            cell_width: (font_size * 0.6).floor(),
            cell_height: (font_size * 1.2).floor(),
        }
    }

    /// Pixel rectangle covering `cols` cells starting at `(col, line)`.
    pub fn span_rect(&self, span: Span) -> Rect {
        Rect {
            x: span.col as f32 * self.cell_width,
            y: span.line as f32 * self.cell_height,
            width: span.cols as f32 * self.cell_width,
            height: self.cell_height,
        }
    }

    /// Caret position nearest to pixel `(x, y)`, clamped to the grid.
    ///
    /// Columns round to the closest cell edge (so the result may equal
    /// `cols`); lines truncate to the row under the pointer.
    pub fn caret_at(&self, x: f32, y: f32, cols: usize, lines: usize) -> Point {
        let col = if self.cell_width > 0.0 {
            (x / self.cell_width).round().max(0.0) as usize
        } else {
            0
        };
        let line = if self.cell_height > 0.0 {
            (y / self.cell_height).floor().max(0.0) as usize
        } else {
            0
        };
        Point::new(col.min(cols), line.min(lines.saturating_sub(1)))
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A horizontal run of cells on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub col: usize,
    pub cols: usize,
}

/// 8-bit RGBA color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` (opaque) or `#RRGGBBAA`. The `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let invalid = || Error::InvalidColor(s.to_owned());
        if !hex.is_ascii() || !matches!(hex.len(), 6 | 8) {
            return Err(invalid());
        }
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(invalid)
        };
        let alpha = if hex.len() == 8 { channel(6)? } else { 0xff };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

/// One draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Solid background fill.
    Fill { span: Span, rect: Rect, color: Color },
    /// A run of glyphs sharing one style, drawn from the span's left edge.
    Text {
        span: Span,
        rect: Rect,
        text: String,
        fg: Color,
        style: CellStyle,
    },
    /// Translucent selection highlight layered over everything else.
    Selection { span: Span, rect: Rect, color: Rgba },
}

impl DrawOp {
    /// The cells this op covers.
    pub fn span(&self) -> Span {
        match self {
            Self::Fill { span, .. } | Self::Text { span, .. } | Self::Selection { span, .. } => {
                *span
            }
        }
    }
}

/// Ordered draw calls for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing buffer, clearing its contents but keeping its allocation.
    pub fn from_buffer(mut buf: Vec<DrawOp>) -> Self {
        buf.clear();
        Self { ops: buf }
    }

    /// Consume the list, returning the underlying buffer for reuse.
    pub fn into_buffer(self) -> Vec<DrawOp> {
        self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub(crate) fn append(&mut self, ops: &mut Vec<DrawOp>) {
        self.ops.append(ops);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawOp> {
        self.ops.iter()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawOp;
    type IntoIter = std::slice::Iter<'a, DrawOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
