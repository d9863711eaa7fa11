//! Terminal cell types.
//!
//! A `Cell` is one grid position's full visual state: glyph, colors, style,
//! and display width. Wide glyphs occupy a lead cell flagged `WIDE_CHAR`
//! plus one `WIDE_CHAR_SPACER` continuation cell immediately to its right.
//! Cells are small and `Copy`.

use bitflags::bitflags;
use unicode_width::UnicodeWidthChar;
use vte::ansi::{Color, NamedColor};

/// Default foreground color (resolved by the render backend's palette).
pub const DEFAULT_FG: Color = Color::Named(NamedColor::Foreground);

/// Default background color (resolved by the render backend's palette).
pub const DEFAULT_BG: Color = Color::Named(NamedColor::Background);

bitflags! {
    /// Internal per-cell layout flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        /// Lead cell of a width-2 glyph.
        const WIDE_CHAR        = 1 << 0;
        /// Continuation cell to the right of a `WIDE_CHAR` lead.
        const WIDE_CHAR_SPACER = 1 << 1;
    }
}

/// Font weight override for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Font slant override for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSlant {
    Normal,
    Italic,
}

/// Line decoration drawn with the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    Underline,
    Strikethrough,
    Overline,
}

/// Text style of a cell.
///
/// `None` in any field means "inherit the surface's ambient font", never
/// "uninitialized". Two cells belong to the same render run only when their
/// styles compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub weight: Option<FontWeight>,
    pub slant: Option<FontSlant>,
    pub decoration: Option<Decoration>,
}

impl CellStyle {
    /// Style with an explicit bold weight.
    pub const fn bold() -> Self {
        Self {
            weight: Some(FontWeight::Bold),
            slant: None,
            decoration: None,
        }
    }

    /// Style with an explicit italic slant.
    pub const fn italic() -> Self {
        Self {
            weight: None,
            slant: Some(FontSlant::Italic),
            decoration: None,
        }
    }

    /// This style with the given decoration.
    #[must_use]
    pub const fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    pub fn is_bold(&self) -> bool {
        self.weight == Some(FontWeight::Bold)
    }

    pub fn is_italic(&self) -> bool {
        self.slant == Some(FontSlant::Italic)
    }
}

/// Colors and style applied to text written into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub fg: Color,
    pub bg: Color,
    pub style: CellStyle,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
            style: CellStyle::default(),
        }
    }
}

/// One character position in the terminal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The glyph stored in this cell. Blank and continuation cells hold `' '`.
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub style: CellStyle,
    pub flags: CellFlags,
}

const _: () = assert!(size_of::<Cell>() <= 24);

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
            style: CellStyle::default(),
            flags: CellFlags::empty(),
        }
    }
}

impl Cell {
    /// A cell holding `ch` drawn with `pen`.
    pub fn new(ch: char, pen: &Pen) -> Self {
        Self {
            ch,
            fg: pen.fg,
            bg: pen.bg,
            style: pen.style,
            flags: CellFlags::empty(),
        }
    }

    /// Transparent continuation cell for the right half of a wide glyph.
    pub fn spacer() -> Self {
        Self {
            flags: CellFlags::WIDE_CHAR_SPACER,
            ..Self::default()
        }
    }

    /// Returns `true` if this cell is visually empty (space, default colors, no style).
    pub fn is_empty(&self) -> bool {
        self.ch == ' '
            && self.fg == DEFAULT_FG
            && self.bg == DEFAULT_BG
            && self.style == CellStyle::default()
            && self.flags.is_empty()
    }

    /// Display width: 2 for a wide lead, 0 for a continuation, 1 otherwise.
    pub fn width(&self) -> usize {
        if self.flags.contains(CellFlags::WIDE_CHAR) {
            2
        } else if self.flags.contains(CellFlags::WIDE_CHAR_SPACER) {
            0
        } else {
            1
        }
    }

    /// Whether the background differs from the default and needs a fill.
    pub fn has_custom_bg(&self) -> bool {
        self.bg != DEFAULT_BG
    }
}

/// Column width of `ch` when written into the grid.
///
/// Zero-width and control characters are clamped to 1; only East Asian
/// wide and fullwidth characters (and wide emoji) get 2.
pub fn char_width(ch: char) -> usize {
    match UnicodeWidthChar::width(ch) {
        Some(2) => 2,
        _ => 1,
    }
}
