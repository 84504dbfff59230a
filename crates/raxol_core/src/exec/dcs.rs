//! `DECRQSS` responses and Sixel/unrecognized DCS payload stashing (spec
//! §4.3 "DCS").
//!
//! `vtansi` already registers the five `DECRQSS` query forms as concrete
//! output event types (`RequestTextAttributes`, `RequestCursorStyle`,
//! `RequestTopBottomMargins`, `RequestLeftRightMargins`,
//! `RequestVTConformanceLevel`); this module answers them from live
//! buffer state. Everything else that reaches a DCS terminator without a
//! registered type — in practice, Sixel graphics — arrives here as
//! [`UnrecognizedDcsEvent`] and is accepted but not rasterized.

use raxol_vterm::event::UnrecognizedDcsEvent;

use crate::model::emulator::Emulator;

impl Emulator {
    /// `DECRQSS` reply to an SGR query: `DCS 1 $ r <params> m ST`.
    pub(crate) fn report_text_attributes(&mut self) {
        let style = self.active_buf().cursor.current_style;
        let params = sgr_params(&style);
        let response = format!("\x1bP1$r{params}m\x1b\\");
        self.queue_response(response.as_bytes());
    }

    /// `DECRQSS` reply to a `DECSCUSR` query: `DCS 1 $ r <Ps> SP q ST`.
    pub(crate) fn report_cursor_style(&mut self) {
        let style = self.active_buf().cursor.style as u8;
        let response = format!("\x1bP1$r{style} q\x1b\\");
        self.queue_response(response.as_bytes());
    }

    /// `DECRQSS` reply to a `DECSTBM` query: `DCS 1 $ r <Pt> ; <Pb> r ST`.
    pub(crate) fn report_top_bottom_margins(&mut self) {
        let region = self.active_buf().scroll_region;
        let response = format!(
            "\x1bP1$r{};{}r\x1b\\",
            region.top + 1,
            region.bottom + 1
        );
        self.queue_response(response.as_bytes());
    }

    /// `DECRQSS` reply to a `DECSLRM` query: `DCS 1 $ r <Pl> ; <Pr> s ST`.
    pub(crate) fn report_left_right_margins(&mut self) {
        let cols = self.cols;
        let region = self.active_buf().scroll_region;
        let response = format!(
            "\x1bP1$r{};{}s\x1b\\",
            region.left_col() + 1,
            region.right_col(cols) + 1
        );
        self.queue_response(response.as_bytes());
    }

    /// `DECSCL`: select the VT conformance level and (optionally) the C1
    /// control encoding.
    pub(crate) fn select_conformance_level(
        &mut self,
        level: u16,
        c1_encoding: Option<u8>,
    ) {
        self.conformance_level = (level, c1_encoding);
    }

    /// `DECRQSS` reply to a `DECSCL` query:
    /// `DCS 1 $ r <level> ; <c1_encoding> " p ST`.
    pub(crate) fn report_conformance_level(&mut self) {
        let (level, c1) = self.conformance_level;
        let response = match c1 {
            Some(c1) => format!("\x1bP1$r{level};{c1}\"p\x1b\\"),
            None => format!("\x1bP1$r{level}\"p\x1b\\"),
        };
        self.queue_response(response.as_bytes());
    }

    /// Accept a Sixel (or other unregistered DCS) payload: stash the raw
    /// bytes keyed by the cursor's current row, capped at
    /// `config.dcs_payload_limit`. Never rasterized — see spec §4.3.
    pub(crate) fn stash_dcs_payload(&mut self, event: &UnrecognizedDcsEvent) {
        let limit = self.config.dcs_payload_limit as usize;
        let mut payload = event.payload.clone();
        payload.truncate(limit);
        let row = self.active_buf().cursor.row;
        self.active_buf_mut().graphics.insert(row, payload.clone());
        self.last_dcs_payload = Some(payload);
    }
}

/// Render a `StyleAttr` back into the semicolon-delimited SGR parameter
/// list `DECRQSS`'s SGR query reports, e.g. `0;1;4;31;44`.
fn sgr_params(style: &crate::model::color::StyleAttr) -> String {
    use crate::model::color::{Color, Underline};

    let mut parts = vec!["0".to_string()];
    if style.bold {
        parts.push("1".into());
    }
    if style.faint {
        parts.push("2".into());
    }
    if style.italic {
        parts.push("3".into());
    }
    match style.underline {
        Underline::Single => parts.push("4".into()),
        Underline::Double => parts.push("21".into()),
        Underline::Curly => parts.push("4:3".into()),
        Underline::None => {}
    }
    if style.blink {
        parts.push("5".into());
    }
    if style.reverse {
        parts.push("7".into());
    }
    if style.conceal {
        parts.push("8".into());
    }
    if style.strikethrough {
        parts.push("9".into());
    }
    match style.fg {
        Color::Default => {}
        Color::Indexed(n) if n < 8 => parts.push((30 + n).to_string()),
        Color::Indexed(n) if n < 16 => parts.push((90 + (n - 8)).to_string()),
        Color::Indexed(n) => parts.push(format!("38;5;{n}")),
        Color::TrueColor(r, g, b) => parts.push(format!("38;2;{r};{g};{b}")),
    }
    match style.bg {
        Color::Default => {}
        Color::Indexed(n) if n < 8 => parts.push((40 + n).to_string()),
        Color::Indexed(n) if n < 16 => parts.push((100 + (n - 8)).to_string()),
        Color::Indexed(n) => parts.push(format!("48;5;{n}")),
        Color::TrueColor(r, g, b) => parts.push(format!("48;2;{r};{g};{b}")),
    }
    if style.overline {
        parts.push("53".into());
    }
    parts.join(";")
}

#[cfg(test)]
mod tests {
    use super::sgr_params;
    use crate::model::color::{Color, StyleAttr, Underline};

    #[test]
    fn reset_style_reports_bare_zero() {
        assert_eq!(sgr_params(&StyleAttr::reset()), "0");
    }

    #[test]
    fn bold_and_indexed_fg() {
        let style = StyleAttr {
            bold: true,
            fg: Color::Indexed(1),
            ..StyleAttr::reset()
        };
        assert_eq!(sgr_params(&style), "0;1;31");
    }

    #[test]
    fn truecolor_bg_and_curly_underline() {
        let style = StyleAttr {
            underline: Underline::Curly,
            bg: Color::TrueColor(10, 20, 30),
            ..StyleAttr::reset()
        };
        assert_eq!(sgr_params(&style), "0;4:3;48;2;10;20;30");
    }
}
