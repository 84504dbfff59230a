//! Cursor movement and control commands.

crate::terminal_mode!(
    /// Cursor Origin Mode (`DECOM`).
    ///
    /// If set, the origin of the coordinate system is relative to the
    /// current scroll region.
    ///
    /// The origin is used by cursor positioning commands such as
    /// [`CursorPosition`], [`CursorVerticalAbsolute`], [`CursorHorizontalAbsolute`], and
    /// cursor position reports.
    ///
    /// When this mode is set, certain sequences will force the cursor to be
    /// in the scrolling region, including carriage return, next line,
    /// cursor next/previous line operations.
    ///
    /// If set, the cursor is moved to the top left of the current scroll
    /// region.
    ///
    /// See <https://terminalguide.namepad.de/mode/p6/> for
    /// terminal support specifics.
    RelativeCursorOriginMode, private = '?', params = ["6"]
);

crate::terminal_mode!(
    /// Cursor Blinking (`ATT610_BLINK`).
    ///
    /// If set, the cursor is blinking.
    ///
    /// This mode interacts with the blinking part of the Select Cursor Style
    /// (`DECSCUSR`) setting. In xterm, this mode is synchronized with the
    /// blinking part of the cursor style. In urxvt, this mode is additive to
    /// the cursor style setting.
    ///
    /// See also [`SetCursorStyle`] for a more widely supported alternative.
    ///
    /// See <https://terminalguide.namepad.de/mode/p12/> for
    /// terminal support specifics.
    CursorBlinking, private = '?', params = ["12"]
);

crate::terminal_mode!(
    /// Cursor Visibility Mode (`DECTCEM`).
    ///
    /// Set visibility of the cursor.
    ///
    /// If set, the cursor is visible. If reset, the cursor is hidden.
    ///
    /// See <https://terminalguide.namepad.de/mode/p25/> for
    /// terminal support specifics.
    CursorVisibility, private = '?', params = ["25"]
);

/// Save cursor (`DECSC`).
///
/// Save cursor position and other state.
///
/// The primary and alternate screen have distinct save state.
///
/// The following state is saved:
///   * the state of [`RelativeCursorOriginMode`]
///     (but not its saved state for restore mode);
///   * the current attributes;
///   * the current cursor position, relative to the
///     origin set via cursor origin;
///   * pending wrap state;
///   * GL and GR character sets;
///   * G0, G1, G2, G3 character sets.
///
/// One saved state is kept per screen (main / alternative). If for the
/// current screen state was already saved it is overwritten.
///
/// The state can be restored using [`RestoreCursor`].
///
/// See <https://terminalguide.namepad.de/seq/a_esc_a7/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(esc, finalbyte = '7')]
pub struct SaveCursor;

/// Restore cursor (`DECRC`).
///
/// Restore cursor position and other state previously saved by
/// [`SaveCursor`]. If no save was done previously, values are reset to
/// their hard reset values.
///
/// See <https://terminalguide.namepad.de/seq/a_esc_a8/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(esc, finalbyte = '8')]
pub struct RestoreCursor;

/// Backspace (`BS`).
///
/// Move the cursor one position to the left.
///
/// This unsets the pending wrap state without wrapping.
///
/// See <https://terminalguide.namepad.de/seq/c_bs/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(c0, code = 0x08)]
pub struct Backspace;

/// Horizontal Tab (`TAB`).
///
/// Move the cursor to the next tab stop, or the right-most column if
/// there are no more tab stops. Tab stops are set with
/// [`HorizontalTabSet`].
///
/// See <https://terminalguide.namepad.de/seq/c_tab/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(c0, code = 0x09)]
pub struct HorizontalTab;

/// Line Feed (`LF`).
///
/// Moves the cursor down one line if Line Feed mode is unset (like
/// [`Index`]), or down one line and to the left-most column if set
/// (like [`NextLine`]).
///
/// See <https://terminalguide.namepad.de/seq/c_lf/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(c0, code = 0x0A)]
pub struct LineFeed;

/// Vertical Tab (`VT`).
///
/// Move the cursor down one line (same as [`LineFeed`]).
///
/// See <https://terminalguide.namepad.de/seq/c_vt/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(c0, code = 0x0B)]
pub struct VerticalTab;

/// Form Feed (`FF`).
///
/// Move the cursor down one line (same as [`LineFeed`]).
///
/// See <https://terminalguide.namepad.de/seq/c_ff/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(c0, code = 0x0C)]
pub struct FormFeed;

/// Carriage Return (`CR`).
///
/// Move the cursor to the left-most column, or the left margin if left
/// and right margin mode is set and a left margin is set.
///
/// This unsets the pending wrap state without wrapping.
///
/// See <https://terminalguide.namepad.de/seq/c_cr/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(c0, code = 0x0D)]
pub struct CarriageReturn;

/// Set Cursor Position (`CUP`).
///
/// Move cursor to the position indicated by `row` and `column`, 1-based.
/// Values of 0 are adjusted to 1; values beyond the screen are clamped.
///
/// This unsets the pending wrap state without wrapping.
///
/// If cursor origin mode is set the position is relative to the current
/// scroll region.
///
/// See <https://terminalguide.namepad.de/seq/csi_ch/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, finalbyte = 'H')]
pub struct CursorPosition {
    pub row: u16,
    pub col: u16,
}

/// Back Index (`DECBI`).
///
/// If the cursor is not on the left-most column of the scroll region
/// this is the same as [`CursorLeft`] with `amount = 1`. At the
/// left-most column, content of the scroll region shifts right and a
/// blank column is inserted. Does not change the cursor position.
///
/// See <https://terminalguide.namepad.de/seq/a_esc_a6/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(esc, finalbyte = '6')]
pub struct BackIndex;

/// Forward Index (`DECFI`).
///
/// Mirror of [`BackIndex`]: moves right, or shifts the scroll region
/// content left at the right-most column. Does not change the cursor
/// position.
///
/// See <https://terminalguide.namepad.de/seq/a_esc_a9/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(esc, finalbyte = '9')]
pub struct ForwardIndex;

/// Index (`IND`).
///
/// Move the cursor to the next line in the scrolling region, scrolling
/// the region up if the cursor is on its bottom-most line.
///
/// This unsets the pending wrap state without wrapping.
///
/// See <https://terminalguide.namepad.de/seq/a_esc_cd/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(esc, finalbyte = 'D')]
pub struct Index;

/// Next Line (`NEL`).
///
/// Equivalent to [`CarriageReturn`] followed by [`Index`].
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(esc, finalbyte = 'E')]
pub struct NextLine;

/// Horizontal Tab Set (`HTS`).
///
/// Mark the current column as a tab stop.
///
/// See <https://terminalguide.namepad.de/seq/a_esc_ch/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(esc, finalbyte = 'H')]
pub struct HorizontalTabSet;

/// Reverse Index (`RI`).
///
/// Mirror of [`Index`]: moves the cursor up one line, scrolling the
/// region down if the cursor is on its top-most line.
///
/// This unsets the pending wrap state without wrapping.
///
/// See <https://terminalguide.namepad.de/seq/a_esc_cm/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(esc, finalbyte = 'M')]
pub struct ReverseIndex;

/// Cursor Up (`CUU`).
///
/// Move cursor up by `amount` lines, stopping at the top of the current
/// scroll region (or the screen, if the cursor started above it).
///
/// See <https://terminalguide.namepad.de/seq/csi_ca/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, finalbyte = 'A')]
pub struct CursorUp(pub u16);

/// Cursor Down (`CUD`).
///
/// Move cursor down by `amount` lines, stopping at the bottom of the
/// current scroll region (or the screen, if the cursor started below
/// it).
///
/// See <https://terminalguide.namepad.de/seq/csi_cb/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, finalbyte = 'B')]
pub struct CursorDown(pub u16);

/// Cursor Left (`CUB`).
///
/// Move the cursor left `amount` cells, stopping at the left margin of
/// the current scroll region (or the screen edge).
///
/// See <https://terminalguide.namepad.de/seq/csi_cd/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, finalbyte = 'D')]
pub struct CursorLeft(pub u16);

/// Cursor Right (`CUF`).
///
/// Move the cursor right `amount` columns, stopping at the right margin
/// of the current scroll region (or the screen edge).
///
/// See <https://terminalguide.namepad.de/seq/csi_cc/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, finalbyte = 'C')]
pub struct CursorRight(pub u16);

/// Cursor Next Line (`CNL`).
///
/// Move `amount` lines down and to the beginning of the line.
///
/// See <https://terminalguide.namepad.de/seq/csi_ce/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, finalbyte = 'E')]
pub struct CursorNextLine(pub u16);

/// Cursor Previous Line (`CPL`).
///
/// Move `amount` lines up and to the beginning of the line.
///
/// See <https://terminalguide.namepad.de/seq/csi_cf/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, finalbyte = 'F')]
pub struct CursorPreviousLine(pub u16);

/// Cursor Horizontal Absolute (`CHA`).
///
/// Move the cursor to column `col`, 1-based, on the current line.
///
/// See <https://terminalguide.namepad.de/seq/csi_cg/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, finalbyte = 'G')]
pub struct CursorHorizontalAbsolute(pub u16);

/// Cursor Horizontal Forward Tabulation (`CHT`).
///
/// Invoke horizontal tab `amount` times.
///
/// See <https://terminalguide.namepad.de/seq/csi_ci/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, finalbyte = 'I')]
pub struct CursorHorizontalForwardTab {
    pub amount: u16,
}

/// Cursor Horizontal Backward Tabulation (`CBT`).
///
/// Move the cursor to the `amount`-th previous tab stop.
///
/// See <https://terminalguide.namepad.de/seq/csi_cz/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, finalbyte = 'Z')]
pub struct CursorHorizontalBackwardTab(pub u16);

/// Cursor Horizontal Position Relative (`HPR`).
///
/// Move cursor right by `amount` columns; same motion as [`CursorRight`].
///
/// See <https://terminalguide.namepad.de/seq/csi_ca/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, finalbyte = 'a')]
pub struct CursorHorizontalRelative(pub u16);

/// Cursor Vertical Position Absolute (`VPA`).
///
/// Move the cursor to row `row`, 1-based, on the current column.
///
/// See <https://terminalguide.namepad.de/seq/csi_cd/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, finalbyte = 'd')]
pub struct CursorVerticalAbsolute(pub u16);

/// Cursor Vertical Position Relative (`VPR`).
///
/// Move cursor down by `amount` lines; same motion as [`CursorDown`].
///
/// See <https://terminalguide.namepad.de/seq/csi_ce/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, finalbyte = 'e')]
pub struct CursorVerticalRelative(pub u16);

/// Cursor style variants for `DECSCUSR`.
///
/// See <https://terminalguide.namepad.de/seq/csi_cq/> for
/// terminal support specifics.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[repr(u8)]
pub enum CursorStyle {
    /// Default cursor style (usually blinking block).
    #[default]
    Default = 0,
    /// Blinking block cursor.
    BlinkingBlock = 1,
    /// Steady (non-blinking) block cursor.
    SteadyBlock = 2,
    /// Blinking underline cursor.
    BlinkingUnderline = 3,
    /// Steady underline cursor.
    SteadyUnderline = 4,
    /// Blinking bar (vertical line) cursor.
    BlinkingBar = 5,
    /// Steady bar cursor.
    SteadyBar = 6,
}

impl From<u16> for CursorStyle {
    fn from(value: u16) -> Self {
        match value {
            1 => CursorStyle::BlinkingBlock,
            2 => CursorStyle::SteadyBlock,
            3 => CursorStyle::BlinkingUnderline,
            4 => CursorStyle::SteadyUnderline,
            5 => CursorStyle::BlinkingBar,
            6 => CursorStyle::SteadyBar,
            _ => CursorStyle::Default,
        }
    }
}

/// Select Cursor Style (`DECSCUSR`).
///
/// Set the cursor style (shape and blinking) with a value 0-6; see
/// [`CursorStyle`].
///
/// See <https://terminalguide.namepad.de/seq/csi_sq_t_space/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, intermediate = " ", finalbyte = 'q')]
pub struct SetCursorStyle(pub u16);

/// Request Cursor Style (`DECRQSS` - `DECSCUSR`).
///
/// Request the current cursor style via DEC Request Status String. The
/// terminal replies with a DCS sequence containing the current style.
///
/// See <https://terminalguide.namepad.de/seq/dcs-dollar-q-space-q/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(dcs, intermediate = "$", finalbyte = 'q', data = " q")]
pub struct RequestCursorStyle;

/// Request Cursor Position Report (`CPR`).
///
/// Request the current cursor position. The terminal replies with
/// `CSI <row> ; <column> R`, relative to the scroll region if
/// [`RelativeCursorOriginMode`] is set.
///
/// See <https://terminalguide.namepad.de/seq/csi_sn-6/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, params = ["6"], finalbyte = 'n')]
pub struct RequestCursorPosition;

/// Request Tab Stop Report (`DECTABSR`).
///
/// Request a report of the currently set tab stops. The terminal
/// replies with a DCS sequence listing the tab stop columns separated
/// by `/`.
///
/// See <https://terminalguide.namepad.de/seq/csi_sw_t_dollar-2/> for
/// terminal support specifics.
#[derive(
    Debug,
    PartialOrd,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    vtansi::derive::AnsiOutput,
)]
#[vtansi(csi, params = ["2"], intermediate = "$", finalbyte = 'w')]
pub struct RequestTabStopReport;
