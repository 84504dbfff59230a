//! Screen cells and Unicode display width.

use smallvec::SmallVec;
use unicode_width::UnicodeWidthChar;

use super::color::StyleAttr;

/// Maximum number of width-0 combining marks a single cell stores.
///
/// Anything beyond this is dropped rather than grown without bound — see
/// spec §5's "no unbounded per-operation allocation".
pub const MAX_COMBINING: usize = 2;

/// A Unicode scalar value plus its computed terminal display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codepoint {
    pub ch: char,
    pub width: u8,
}

impl Codepoint {
    /// Classify `ch` into a `Codepoint`, computing its display width.
    ///
    /// Width 0 = combining mark, 2 = East Asian Wide / emoji, 1 otherwise.
    #[must_use]
    pub fn new(ch: char) -> Self {
        let width = match ch.width() {
            Some(w) => w as u8,
            // `UnicodeWidthChar::width` returns `None` for control
            // characters; this layer never sees those (spec §3: "Control
            // characters are not codepoints at this layer"), but treat
            // them as zero-width rather than panicking.
            None => 0,
        };
        Self { ch, width }
    }

    #[must_use]
    pub fn is_combining(self) -> bool {
        self.width == 0
    }
}

/// A single character cell in the screen grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub combining: SmallVec<[char; MAX_COMBINING]>,
    pub style: StyleAttr,
    /// True if this cell is the right half of a wide glyph; carries no
    /// printable glyph of its own (invariant 2).
    pub wide_cont: bool,
    pub dirty: bool,
}

impl Cell {
    #[must_use]
    pub fn blank(style: StyleAttr) -> Self {
        Self {
            ch: ' ',
            combining: SmallVec::new(),
            style,
            wide_cont: false,
            dirty: false,
        }
    }

    /// Attach a width-0 combining mark to this cell, dropping it silently
    /// once `MAX_COMBINING` marks are already attached.
    pub fn push_combining(&mut self, ch: char) {
        if self.combining.len() < MAX_COMBINING {
            self.combining.push(ch);
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(StyleAttr::reset())
    }
}
