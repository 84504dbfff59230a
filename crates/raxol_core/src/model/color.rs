//! Cell colors and style attributes (SGR state).

/// A terminal color: the default (themeable) color, a 256-entry palette
/// index, or a direct 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Indexed(u8),
    TrueColor(u8, u8, u8),
}

/// Underline style, SGR 4 / 4:2 / 4:3 / 21.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
    Curly,
}

/// Select Graphic Rendition state for a single cell.
///
/// Kept small and `Copy`: a cell carries one of these by value rather than
/// a reference, so printing a run of text is a cheap field copy per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleAttr {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub faint: bool,
    pub italic: bool,
    pub underline: Underline,
    pub blink: bool,
    pub reverse: bool,
    pub strikethrough: bool,
    pub conceal: bool,
    pub overline: bool,
}

impl StyleAttr {
    pub const fn reset() -> Self {
        Self {
            fg: Color::Default,
            bg: Color::Default,
            bold: false,
            faint: false,
            italic: false,
            underline: Underline::None,
            blink: false,
            reverse: false,
            strikethrough: false,
            conceal: false,
            overline: false,
        }
    }
}
