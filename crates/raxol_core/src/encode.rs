//! Input Encoder: logical key events to host-bound byte sequences (spec
//! §4.7). The reverse direction from the Byte Decoder/Parser — instead of
//! turning host bytes into events, this turns application-level key
//! events into the bytes a host program expects on its input stream.
//!
//! Grounded on `vtinput::encode`'s buffer-writing idiom (`write_into!`,
//! `write_str_into`) and on `vtinput::event::KeyEvent`'s own `Encode` impl
//! for the xterm sequence tables (arrow/function-key CSI vs SS3 forms,
//! the `1 + shift|2*alt|4*ctrl` modifier parameter). `LogicalKey`/`KeyMods`
//! are deliberately a separate, narrower vocabulary rather than a
//! re-export of `vtinput::event::{KeyCode, KeyModifiers}`: those carry
//! kitty-keyboard-protocol and mouse variants that are parsed-input
//! concerns, out of this core's scope (spec.md §4.7 only names
//! `Char(cp) | Named(enum)` with `{ctrl, alt, shift, meta}`).

use bitflags::bitflags;

use vtinput::encode::{EncodeError, write_str_into};
use vtinput::write_into;

use crate::model::emulator::Emulator;

bitflags! {
    /// `{ctrl, alt, shift, meta}` per spec.md §4.7.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyMods: u8 {
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
        const META  = 0b1000;
    }
}

impl KeyMods {
    /// xterm modifier parameter: `1 + (shift|2*alt|4*ctrl|8*meta)`.
    fn param(self) -> u32 {
        1 + u32::from(self.contains(KeyMods::SHIFT))
            + 2 * u32::from(self.contains(KeyMods::ALT))
            + 4 * u32::from(self.contains(KeyMods::CTRL))
            + 8 * u32::from(self.contains(KeyMods::META))
    }
}

/// A logical key: either a printable Unicode scalar or one of the named
/// control/navigation/function keys spec.md §4.7 enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Char(char),
    Named(NamedKey),
}

/// `Named ∈ {ArrowUp, ArrowDown, ArrowLeft, ArrowRight, Home, End, Insert,
/// Delete, PageUp, PageDown, F1..F24, Backspace, Tab, Enter, Escape}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Insert,
    Delete,
    PageUp,
    PageDown,
    F(u8),
    Backspace,
    Tab,
    Enter,
    Escape,
}

/// A single logical key press plus the modifiers held at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: LogicalKey,
    pub mods: KeyMods,
}

impl KeyEvent {
    #[must_use]
    pub fn new(key: LogicalKey, mods: KeyMods) -> Self {
        Self { key, mods }
    }
}

/// Map Ctrl+&lt;char&gt; to its canonical ASCII control byte, e.g. Ctrl-A
/// -> 0x01. Mirrors `vtinput::event::control_code_for`.
fn control_code_for(c: char) -> Option<u8> {
    match c {
        '@' | ' ' => Some(0x00),
        'a'..='z' | 'A'..='Z' => Some((c as u8 | 0x20) & 0x1f),
        '[' => Some(0x1b),
        '\\' => Some(0x1c),
        ']' => Some(0x1d),
        '^' => Some(0x1e),
        '_' => Some(0x1f),
        '?' => Some(0x7f),
        _ => None,
    }
}

/// Write a `CSI N~` / `CSI N;mod~` tilde sequence (Insert/Delete/PageUp/
/// PageDown/F5+).
fn write_tilde_seq(buf: &mut [u8], code: u32, mod_param: u32) -> Result<usize, EncodeError> {
    if mod_param == 1 {
        write_into!(buf, "\x1b[{code}~")
    } else {
        write_into!(buf, "\x1b[{code};{mod_param}~")
    }
}

/// Write a final-byte sequence for arrows/Home/End: `SS3`/`CSI <final>`
/// unmodified, `CSI 1;mod <final>` when modifiers are held.
fn write_cursor_seq(
    buf: &mut [u8],
    final_byte: u8,
    application_cursor: bool,
    mod_param: u32,
) -> Result<usize, EncodeError> {
    if mod_param == 1 {
        let prefix: &[u8] = if application_cursor { b"\x1bO" } else { b"\x1b[" };
        if buf.len() < prefix.len() + 1 {
            return Err(EncodeError::BufferOverflow(prefix.len() + 1));
        }
        buf[..prefix.len()].copy_from_slice(prefix);
        buf[prefix.len()] = final_byte;
        Ok(prefix.len() + 1)
    } else {
        write_into!(buf, "\x1b[1;{mod_param}{}", final_byte as char)
    }
}

impl Emulator {
    /// Encode one logical key press into the bytes the host program
    /// expects on its input stream (spec.md §4.7). Honors the active
    /// buffer's DECCKM setting for arrow/Home/End application-cursor
    /// encoding. Never splits a single key's bytes across a suspension
    /// point — the full sequence is built and returned in one call.
    #[must_use]
    pub fn key_to_bytes(&self, event: KeyEvent) -> Vec<u8> {
        let mut buf = [0u8; 32];
        let n = self.encode_key_into(event, &mut buf).unwrap_or(0);
        buf[..n].to_vec()
    }

    fn encode_key_into(&self, event: KeyEvent, buf: &mut [u8]) -> Result<usize, EncodeError> {
        let mods = event.mods;
        let alt_prefix = mods.contains(KeyMods::ALT);
        let mod_param = mods.param();

        match event.key {
            LogicalKey::Char(mut c) => {
                if mods.contains(KeyMods::SHIFT) && c.is_ascii_lowercase() {
                    c = c.to_ascii_uppercase();
                }

                if mods.contains(KeyMods::CTRL) {
                    if let Some(ctrl) = control_code_for(c) {
                        let mut pos = 0;
                        if alt_prefix {
                            if buf.is_empty() {
                                return Err(EncodeError::BufferOverflow(2));
                            }
                            buf[pos] = 0x1b;
                            pos += 1;
                        }
                        if pos >= buf.len() {
                            return Err(EncodeError::BufferOverflow(pos + 1));
                        }
                        buf[pos] = ctrl;
                        return Ok(pos + 1);
                    }
                }

                let mut pos = 0;
                if alt_prefix {
                    if buf.is_empty() {
                        return Err(EncodeError::BufferOverflow(1));
                    }
                    buf[pos] = 0x1b;
                    pos += 1;
                }
                let mut tmp = [0u8; 4];
                let s = c.encode_utf8(&mut tmp);
                if pos + s.len() > buf.len() {
                    return Err(EncodeError::BufferOverflow(pos + s.len()));
                }
                buf[pos..pos + s.len()].copy_from_slice(s.as_bytes());
                Ok(pos + s.len())
            }

            LogicalKey::Named(NamedKey::Enter) => {
                if mod_param > 1 {
                    write_into!(buf, "\x1b[13;{mod_param}u")
                } else if alt_prefix {
                    if buf.len() < 2 {
                        return Err(EncodeError::BufferOverflow(2));
                    }
                    buf[0] = 0x1b;
                    buf[1] = b'\r';
                    Ok(2)
                } else {
                    if buf.is_empty() {
                        return Err(EncodeError::BufferOverflow(1));
                    }
                    buf[0] = b'\r';
                    Ok(1)
                }
            }

            LogicalKey::Named(NamedKey::Backspace) => {
                if buf.is_empty() {
                    return Err(EncodeError::BufferOverflow(1));
                }
                buf[0] = 0x7f;
                Ok(1)
            }

            LogicalKey::Named(NamedKey::Tab) => {
                if mods.contains(KeyMods::SHIFT) {
                    write_str_into(buf, "\x1b[Z")
                } else {
                    if buf.is_empty() {
                        return Err(EncodeError::BufferOverflow(1));
                    }
                    buf[0] = b'\t';
                    Ok(1)
                }
            }

            LogicalKey::Named(NamedKey::Escape) => {
                if buf.is_empty() {
                    return Err(EncodeError::BufferOverflow(1));
                }
                buf[0] = 0x1b;
                Ok(1)
            }

            LogicalKey::Named(
                key @ (NamedKey::ArrowUp
                | NamedKey::ArrowDown
                | NamedKey::ArrowLeft
                | NamedKey::ArrowRight
                | NamedKey::Home
                | NamedKey::End),
            ) => {
                let final_byte = match key {
                    NamedKey::ArrowUp => b'A',
                    NamedKey::ArrowDown => b'B',
                    NamedKey::ArrowRight => b'C',
                    NamedKey::ArrowLeft => b'D',
                    NamedKey::Home => b'H',
                    NamedKey::End => b'F',
                    _ => unreachable!(),
                };
                let application_cursor = self.active_buf().modes.decckm;
                write_cursor_seq(buf, final_byte, application_cursor, mod_param)
            }

            LogicalKey::Named(NamedKey::Insert) => write_tilde_seq(buf, 2, mod_param),
            LogicalKey::Named(NamedKey::Delete) => write_tilde_seq(buf, 3, mod_param),
            LogicalKey::Named(NamedKey::PageUp) => write_tilde_seq(buf, 5, mod_param),
            LogicalKey::Named(NamedKey::PageDown) => write_tilde_seq(buf, 6, mod_param),

            LogicalKey::Named(NamedKey::F(n)) if (1..=4).contains(&n) => {
                let letter = match n {
                    1 => b'P',
                    2 => b'Q',
                    3 => b'R',
                    4 => b'S',
                    _ => unreachable!(),
                };
                if mod_param == 1 {
                    if buf.len() < 3 {
                        return Err(EncodeError::BufferOverflow(3));
                    }
                    buf[0] = 0x1b;
                    buf[1] = b'O';
                    buf[2] = letter;
                    Ok(3)
                } else {
                    write_into!(buf, "\x1b[1;{mod_param}{}", letter as char)
                }
            }

            LogicalKey::Named(NamedKey::F(n)) => {
                let code = match n {
                    5 => 15,
                    6 => 17,
                    7 => 18,
                    8 => 19,
                    9 => 20,
                    10 => 21,
                    11 => 23,
                    12 => 24,
                    13 => 25,
                    14 => 26,
                    15 => 28,
                    16 => 29,
                    17 => 31,
                    18 => 32,
                    19 => 33,
                    20 => 34,
                    // F21-F24: no standard xterm sequence; accepted, no bytes.
                    _ => return Ok(0),
                };
                write_tilde_seq(buf, code, mod_param)
            }
        }
    }

    /// Wrap a pasted chunk with bracketed-paste markers (`CSI 200~` ...
    /// `CSI 201~`) when mode 2004 is enabled on the active buffer;
    /// otherwise pass the bytes through unchanged (spec.md §4.7).
    #[must_use]
    pub fn encode_paste(&self, text: &[u8]) -> Vec<u8> {
        if !self.active_buf().modes.bracketed_paste {
            return text.to_vec();
        }
        let mut out = Vec::with_capacity(text.len() + 12);
        out.extend_from_slice(b"\x1b[200~");
        out.extend_from_slice(text);
        out.extend_from_slice(b"\x1b[201~");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyEvent, KeyMods, LogicalKey, NamedKey};
    use crate::config::Config;
    use crate::model::emulator::Emulator;

    fn emu() -> Emulator {
        Emulator::new(Config::new(10, 20)).unwrap()
    }

    #[test]
    fn plain_char() {
        let emu = emu();
        let bytes = emu.key_to_bytes(KeyEvent::new(LogicalKey::Char('a'), KeyMods::empty()));
        assert_eq!(bytes, b"a");
    }

    #[test]
    fn ctrl_letter_is_control_byte() {
        let emu = emu();
        let bytes = emu.key_to_bytes(KeyEvent::new(LogicalKey::Char('a'), KeyMods::CTRL));
        assert_eq!(bytes, vec![0x01]);
    }

    #[test]
    fn alt_prefixes_escape() {
        let emu = emu();
        let bytes = emu.key_to_bytes(KeyEvent::new(LogicalKey::Char('x'), KeyMods::ALT));
        assert_eq!(bytes, b"\x1bx");
    }

    #[test]
    fn arrow_normal_cursor_mode() {
        let emu = emu();
        let bytes = emu.key_to_bytes(KeyEvent::new(
            LogicalKey::Named(NamedKey::ArrowUp),
            KeyMods::empty(),
        ));
        assert_eq!(bytes, b"\x1b[A");
    }

    #[test]
    fn arrow_application_cursor_mode() {
        let mut emu = emu();
        emu.feed_bytes(b"\x1b[?1h");
        let bytes = emu.key_to_bytes(KeyEvent::new(
            LogicalKey::Named(NamedKey::ArrowUp),
            KeyMods::empty(),
        ));
        assert_eq!(bytes, b"\x1bOA");
    }

    #[test]
    fn modified_arrow_always_csi() {
        let mut emu = emu();
        emu.feed_bytes(b"\x1b[?1h");
        let bytes = emu.key_to_bytes(KeyEvent::new(
            LogicalKey::Named(NamedKey::ArrowRight),
            KeyMods::SHIFT,
        ));
        assert_eq!(bytes, b"\x1b[1;2C");
    }

    #[test]
    fn function_key_f1_is_ss3() {
        let emu = emu();
        let bytes = emu.key_to_bytes(KeyEvent::new(LogicalKey::Named(NamedKey::F(1)), KeyMods::empty()));
        assert_eq!(bytes, b"\x1bOP");
    }

    #[test]
    fn function_key_f5_is_tilde() {
        let emu = emu();
        let bytes = emu.key_to_bytes(KeyEvent::new(LogicalKey::Named(NamedKey::F(5)), KeyMods::empty()));
        assert_eq!(bytes, b"\x1b[15~");
    }

    #[test]
    fn paste_wrapped_when_bracketed_paste_on() {
        let mut emu = emu();
        emu.feed_bytes(b"\x1b[?2004h");
        assert_eq!(emu.encode_paste(b"hi"), b"\x1b[200~hi\x1b[201~");
    }

    #[test]
    fn paste_passthrough_when_bracketed_paste_off() {
        let emu = emu();
        assert_eq!(emu.encode_paste(b"hi"), b"hi");
    }
}
