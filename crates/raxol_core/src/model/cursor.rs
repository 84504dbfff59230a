//! Cursor position/state and G-set charset state.

use raxol_vterm::event::cursor::CursorStyle;

/// One of the four designatable character sets, `G0..G3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GSet {
    G0,
    G1,
    G2,
    G3,
}

/// Recognized designated charsets (SCS final bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetId {
    /// `B` — ASCII.
    Ascii,
    /// `0` — DEC Special Graphics (line-drawing).
    DecSpecialGraphics,
    /// `A` — UK national.
    Uk,
}

impl Default for CharsetId {
    fn default() -> Self {
        Self::Ascii
    }
}

/// `{g0, g1, g2, g3, gl, gr, single_shift}` per spec §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetState {
    pub g0: CharsetId,
    pub g1: CharsetId,
    pub g2: CharsetId,
    pub g3: CharsetId,
    pub gl: GSet,
    pub gr: GSet,
    pub single_shift: Option<GSet>,
}

impl Default for CharsetState {
    fn default() -> Self {
        Self {
            g0: CharsetId::Ascii,
            g1: CharsetId::Ascii,
            g2: CharsetId::Ascii,
            g3: CharsetId::Ascii,
            gl: GSet::G0,
            gr: GSet::G1,
            single_shift: None,
        }
    }
}

impl CharsetState {
    #[must_use]
    pub fn slot(&self, set: GSet) -> CharsetId {
        match set {
            GSet::G0 => self.g0,
            GSet::G1 => self.g1,
            GSet::G2 => self.g2,
            GSet::G3 => self.g3,
        }
    }

    pub fn designate(&mut self, set: GSet, charset: CharsetId) {
        match set {
            GSet::G0 => self.g0 = charset,
            GSet::G1 => self.g1 = charset,
            GSet::G2 => self.g2 = charset,
            GSet::G3 => self.g3 = charset,
        }
    }

    /// Charset currently invoked for the next printable byte, honoring a
    /// pending single shift (consumed by the caller after one use).
    #[must_use]
    pub fn active(&self) -> CharsetId {
        match self.single_shift {
            Some(set) => self.slot(set),
            None => self.slot(self.gl),
        }
    }
}

/// `{row, col, style, visible, pending_wrap, origin_relative}` per spec §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: u16,
    pub col: u16,
    /// DECSCUSR shape (block/underline/bar, blink on/off) — not to be
    /// confused with `current_style` below, the SGR text attributes.
    pub style: CursorStyle,
    pub visible: bool,
    /// The DEC VT100 "last column" wrap-next-char latch.
    pub pending_wrap: bool,
    pub origin_relative: bool,
    /// SGR attributes applied to the next printed character.
    pub current_style: crate::model::color::StyleAttr,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            style: CursorStyle::Default,
            visible: true,
            pending_wrap: false,
            origin_relative: false,
            current_style: crate::model::color::StyleAttr::reset(),
        }
    }
}

impl Cursor {
    /// The SGR style that should be stamped onto the next printed cell.
    #[must_use]
    pub fn style_attr(&self) -> crate::model::color::StyleAttr {
        self.current_style
    }
}

/// DECSC/DECRC snapshot: `{row, col, style, charset_state,
/// origin_relative, autowrap}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedCursor {
    pub row: u16,
    pub col: u16,
    pub style: crate::model::color::StyleAttr,
    pub charset_state: CharsetState,
    pub origin_relative: bool,
    pub autowrap: bool,
}

impl Default for SavedCursor {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            style: crate::model::color::StyleAttr::reset(),
            charset_state: CharsetState::default(),
            origin_relative: false,
            autowrap: true,
        }
    }
}
