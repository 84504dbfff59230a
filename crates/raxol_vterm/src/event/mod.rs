//! Terminal event sequences.

pub mod charset;
pub mod clipboard;
pub mod cursor;
pub mod dsr;
pub mod keyboard;
pub mod mode;
pub mod mouse;
pub mod screen;
pub mod scroll;
pub mod terminal;
pub mod window;

// Re-export module-level input event enums
pub use mouse::MouseEvent;

// Re-export commonly used types
pub use keyboard::{
    KeyCode, KeyEvent, KeyModifiers, KeyboardEnhancementFlags,
    KeyboardEnhancementFlagsQuery, KeyboardEnhancementFlagsResponse,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};

use vt_push_parser::event::VTEvent;

/// Unparsed or unrecognized terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedInputEvent<'a>(pub &'a VTEvent<'a>);

better_any::tid! {UnrecognizedInputEvent<'a>}

impl vtansi::AnsiEncode for UnrecognizedInputEvent<'_> {
    #[inline]
    fn encode_ansi_into<W: std::io::Write + ?Sized>(
        &self,
        sink: &mut W,
    ) -> Result<usize, vtansi::EncodeError> {
        self.0.write_to(sink).map_err(vtansi::EncodeError::IOError)
    }
}

impl<'a> vtansi::AnsiEvent<'a> for UnrecognizedInputEvent<'a> {
    fn ansi_control_kind(&self) -> Option<vtansi::AnsiControlFunctionKind> {
        match self.0 {
            VTEvent::Raw(_) => None,
            VTEvent::C0(_) => Some(vtansi::AnsiControlFunctionKind::Byte),
            VTEvent::Csi(_) => Some(vtansi::AnsiControlFunctionKind::Csi),
            VTEvent::Ss2(_)
            | VTEvent::Ss3(_)
            | VTEvent::Esc(_)
            | VTEvent::EscInvalid(_) => {
                Some(vtansi::AnsiControlFunctionKind::Esc)
            }

            VTEvent::DcsStart(_)
            | VTEvent::DcsData(_)
            | VTEvent::DcsEnd(_)
            | VTEvent::DcsCancel => Some(vtansi::AnsiControlFunctionKind::Dcs),

            VTEvent::OscStart
            | VTEvent::OscData(_)
            | VTEvent::OscEnd { .. }
            | VTEvent::OscCancel => Some(vtansi::AnsiControlFunctionKind::Osc),
        }
    }

    fn ansi_direction(&self) -> vtansi::AnsiControlDirection {
        vtansi::AnsiControlDirection::Input
    }

    fn terse_fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unrecognized({:?})", self.0)
    }

    vtansi::impl_ansi_event_encode!();
}

/// Unparsed or unrecognized terminal event observed on the output
/// (host-to-terminal) side, e.g. a CSI final byte with no registered
/// handler such as `m` (SGR).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedOutputEvent<'a>(pub &'a VTEvent<'a>);

better_any::tid! {UnrecognizedOutputEvent<'a>}

impl vtansi::AnsiEncode for UnrecognizedOutputEvent<'_> {
    #[inline]
    fn encode_ansi_into<W: std::io::Write + ?Sized>(
        &self,
        sink: &mut W,
    ) -> Result<usize, vtansi::EncodeError> {
        self.0.write_to(sink).map_err(vtansi::EncodeError::IOError)
    }
}

impl<'a> vtansi::AnsiEvent<'a> for UnrecognizedOutputEvent<'a> {
    fn ansi_control_kind(&self) -> Option<vtansi::AnsiControlFunctionKind> {
        match self.0 {
            VTEvent::Raw(_) => None,
            VTEvent::C0(_) => Some(vtansi::AnsiControlFunctionKind::Byte),
            VTEvent::Csi(_) => Some(vtansi::AnsiControlFunctionKind::Csi),
            VTEvent::Ss2(_)
            | VTEvent::Ss3(_)
            | VTEvent::Esc(_)
            | VTEvent::EscInvalid(_) => {
                Some(vtansi::AnsiControlFunctionKind::Esc)
            }

            VTEvent::DcsStart(_)
            | VTEvent::DcsData(_)
            | VTEvent::DcsEnd(_)
            | VTEvent::DcsCancel => Some(vtansi::AnsiControlFunctionKind::Dcs),

            VTEvent::OscStart
            | VTEvent::OscData(_)
            | VTEvent::OscEnd { .. }
            | VTEvent::OscCancel => Some(vtansi::AnsiControlFunctionKind::Osc),
        }
    }

    fn ansi_direction(&self) -> vtansi::AnsiControlDirection {
        vtansi::AnsiControlDirection::Output
    }

    fn terse_fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unrecognized({:?})", self.0)
    }

    vtansi::impl_ansi_event_encode!();
}

/// A Device Control String the output registry has no concrete type for
/// (in practice: Sixel graphics, `DCS <params> q <payload> ST`). Unlike
/// [`UnrecognizedOutputEvent`], this owns its header and payload so it can
/// outlive the borrowed [`VTEvent`] the push-parser only hands out at
/// `DcsEnd` time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedDcsEvent {
    pub private: Option<u8>,
    pub intermediates: Vec<u8>,
    pub final_byte: u8,
    pub payload: Vec<u8>,
}

better_any::tid! {UnrecognizedDcsEvent}

impl vtansi::AnsiEncode for UnrecognizedDcsEvent {
    #[inline]
    fn encode_ansi_into<W: std::io::Write + ?Sized>(
        &self,
        sink: &mut W,
    ) -> Result<usize, vtansi::EncodeError> {
        let mut n = vtansi::write_bytes_into(sink, b"\x1bP")?;
        if let Some(private) = self.private {
            n += vtansi::write_byte_into(sink, private)?;
        }
        n += vtansi::write_bytes_into(sink, &self.intermediates)?;
        n += vtansi::write_byte_into(sink, self.final_byte)?;
        n += vtansi::write_bytes_into(sink, &self.payload)?;
        n += vtansi::write_bytes_into(sink, b"\x1b\\")?;
        Ok(n)
    }
}

impl<'a> vtansi::AnsiEvent<'a> for UnrecognizedDcsEvent {
    fn ansi_control_kind(&self) -> Option<vtansi::AnsiControlFunctionKind> {
        Some(vtansi::AnsiControlFunctionKind::Dcs)
    }

    fn ansi_direction(&self) -> vtansi::AnsiControlDirection {
        vtansi::AnsiControlDirection::Output
    }

    fn terse_fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "UnrecognizedDcs(final={:?}, {} byte payload)",
            self.final_byte as char,
            self.payload.len()
        )
    }

    vtansi::impl_ansi_event_encode!();
}
