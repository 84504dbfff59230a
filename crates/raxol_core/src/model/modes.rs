//! Standard and DEC-private terminal modes (spec §6 "Recognized Modes").

use std::collections::HashMap;

/// Boolean terminal modes. Every mode named in spec.md §6 gets a field;
/// anything else is accepted and stored generically (spec §3: "others are
/// accepted and stored but have no behavioral effect beyond echo in
/// DECRQM").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modes {
    /// 4, public — IRM, insert/replace.
    pub irm: bool,
    /// 20, public — LNM, auto-LF.
    pub lnm: bool,
    /// `?1` — DECCKM, cursor-key application mode.
    pub decckm: bool,
    /// `?3` — DECCOLM, 132-column switch.
    pub decolm: bool,
    /// `?6` — DECOM, origin mode.
    pub decom: bool,
    /// `?7` — DECAWM, autowrap. Default on.
    pub decawm: bool,
    /// `?25` — DECTCEM, cursor visibility. Default on.
    pub dectcem: bool,
    /// `?5` — DECSCNM, reverse video (swap default fg/bg for rendering).
    pub decscnm: bool,
    /// `?47` — legacy alternate screen (no cursor save/clear).
    pub alt_47: bool,
    /// `?1047` — alternate screen, clears on exit.
    pub alt_1047: bool,
    /// `?1049` — alternate screen with cursor save/restore.
    pub alt_1049: bool,
    /// `?1000` — mouse down/up tracking.
    pub mouse_1000: bool,
    /// `?1002` — mouse click-and-drag tracking.
    pub mouse_1002: bool,
    /// `?1003` — mouse any-event tracking.
    pub mouse_1003: bool,
    /// `?1006` — SGR mouse reporting encoding.
    pub mouse_1006: bool,
    /// `?1015` — rxvt mouse reporting encoding.
    pub mouse_1015: bool,
    /// `?2004` — bracketed paste.
    pub bracketed_paste: bool,
    /// `?12` — cursor blink.
    pub cursor_blink: bool,
    /// Unrecognized mode numbers, keyed by `(private_marker, number)`.
    other: HashMap<(Option<u8>, u16), bool>,
}

impl Default for Modes {
    fn default() -> Self {
        Self {
            irm: false,
            lnm: false,
            decckm: false,
            decolm: false,
            decom: false,
            decawm: true,
            dectcem: true,
            decscnm: false,
            alt_47: false,
            alt_1047: false,
            alt_1049: false,
            mouse_1000: false,
            mouse_1002: false,
            mouse_1003: false,
            mouse_1006: false,
            mouse_1015: false,
            bracketed_paste: false,
            cursor_blink: false,
            other: HashMap::new(),
        }
    }
}

impl Modes {
    /// Whether any mouse-reporting mode is currently on.
    #[must_use]
    pub fn mouse_enabled(&self) -> bool {
        self.mouse_1000 || self.mouse_1002 || self.mouse_1003
    }

    pub fn set(&mut self, private: Option<u8>, number: u16, value: bool) {
        let is_dec = private == Some(b'?');
        match (is_dec, number) {
            (false, 4) => self.irm = value,
            (false, 20) => self.lnm = value,
            (true, 1) => self.decckm = value,
            (true, 3) => self.decolm = value,
            (true, 6) => self.decom = value,
            (true, 7) => self.decawm = value,
            (true, 25) => self.dectcem = value,
            (true, 5) => self.decscnm = value,
            (true, 47) => self.alt_47 = value,
            (true, 1047) => self.alt_1047 = value,
            (true, 1049) => self.alt_1049 = value,
            (true, 1000) => self.mouse_1000 = value,
            (true, 1002) => self.mouse_1002 = value,
            (true, 1003) => self.mouse_1003 = value,
            (true, 1006) => self.mouse_1006 = value,
            (true, 1015) => self.mouse_1015 = value,
            (true, 2004) => self.bracketed_paste = value,
            (true, 12) => self.cursor_blink = value,
            _ => {
                self.other.insert((private, number), value);
            }
        }
    }

    #[must_use]
    pub fn get(&self, private: Option<u8>, number: u16) -> bool {
        let is_dec = private == Some(b'?');
        match (is_dec, number) {
            (false, 4) => self.irm,
            (false, 20) => self.lnm,
            (true, 1) => self.decckm,
            (true, 3) => self.decolm,
            (true, 6) => self.decom,
            (true, 7) => self.decawm,
            (true, 25) => self.dectcem,
            (true, 5) => self.decscnm,
            (true, 47) => self.alt_47,
            (true, 1047) => self.alt_1047,
            (true, 1049) => self.alt_1049,
            (true, 1000) => self.mouse_1000,
            (true, 1002) => self.mouse_1002,
            (true, 1003) => self.mouse_1003,
            (true, 1006) => self.mouse_1006,
            (true, 1015) => self.mouse_1015,
            (true, 2004) => self.bracketed_paste,
            (true, 12) => self.cursor_blink,
            _ => *self.other.get(&(private, number)).unwrap_or(&false),
        }
    }
}
