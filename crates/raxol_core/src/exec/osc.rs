//! OSC (Operating System Command) dispatch: palette queries/sets,
//! default fg/bg, hyperlinks, and clipboard metadata (spec §4.3 "OSC").
//!
//! `handle_osc_event` runs unconditionally for every output event
//! `handle_event` sees, after the main CSI/C0/ESC dispatch table — OSC
//! payloads with a registered `vtansi` type arrive here as concrete
//! structs via `downcast_ref`, the same way CSI events arrive in
//! `exec::mod`. OSC 0/1/2 (title/icon name) are registered types too,
//! but are simple enough to stay in the main dispatch table.

use better_any::TidExt;
use xparsecolor::XColor;

use raxol_vterm::event::clipboard::{ClipboardAccess, ClipboardAccessResponse};
use raxol_vterm::event::color::{
    RequestOrSetSpecialTextBackgroundColor, RequestOrSetSpecialTextForegroundColor,
    RequestOrSetTerminalPaletteColor, ResetPaletteColors, SpecialTextBackgroundColorResponse,
    SpecialTextForegroundColorResponse, TerminalColorAction, TerminalPaletteColor,
    TerminalPaletteColorResponse,
};
use raxol_vterm::event::terminal::Hyperlink;

use crate::model::color::Color;
use crate::model::emulator::Emulator;

/// Conventional xterm default foreground/background when no OSC 10/11
/// override is in effect. Indexed/truecolor cells already carry an
/// explicit color; only `Color::Default` cells fall back to these.
const DEFAULT_FG_RGB: (u8, u8, u8) = (229, 229, 229);
const DEFAULT_BG_RGB: (u8, u8, u8) = (0, 0, 0);

fn color_to_rgb(color: Color, fallback: (u8, u8, u8)) -> (u8, u8, u8) {
    match color {
        Color::TrueColor(r, g, b) => (r, g, b),
        Color::Indexed(_) | Color::Default => fallback,
    }
}

impl Emulator {
    pub(crate) fn handle_osc_event(&mut self, event: &dyn vtansi::AnsiEvent) {
        if let Some(ev) = event.downcast_ref::<RequestOrSetTerminalPaletteColor>() {
            self.handle_palette_color(ev);
        } else if let Some(ev) = event.downcast_ref::<RequestOrSetSpecialTextForegroundColor>() {
            self.handle_special_foreground(ev);
        } else if let Some(ev) = event.downcast_ref::<RequestOrSetSpecialTextBackgroundColor>() {
            self.handle_special_background(ev);
        } else if let Some(ev) = event.downcast_ref::<Hyperlink>() {
            self.handle_hyperlink(ev);
        } else if let Some(ev) = event.downcast_ref::<ClipboardAccess>() {
            self.handle_clipboard(ev);
        } else if let Some(ev) = event.downcast_ref::<ResetPaletteColors>() {
            self.handle_reset_palette(ev);
        }
    }

    /// OSC 4: query or set one indexed palette entry. Index `-1`/`-2` are
    /// an iTerm2 extension aliasing the default fg/bg (spec §4.3 "OSC").
    fn handle_palette_color(&mut self, ev: &RequestOrSetTerminalPaletteColor) {
        let index = ev.index();
        match ev.action() {
            TerminalColorAction::Query => {
                let rgb = match index {
                    -1 => color_to_rgb(self.default_fg, DEFAULT_FG_RGB),
                    -2 => color_to_rgb(self.default_bg, DEFAULT_BG_RGB),
                    0..=255 => self.palette[index as usize],
                    _ => return,
                };
                let color = TerminalPaletteColor::new(&XColor::from_rgb8(rgb.0, rgb.1, rgb.2));
                self.queue_encoded(&TerminalPaletteColorResponse { index, color });
            }
            TerminalColorAction::Set(xcolor) => {
                let rgb = xcolor.to_rgb8();
                match index {
                    -1 => self.default_fg = Color::TrueColor(rgb.0, rgb.1, rgb.2),
                    -2 => self.default_bg = Color::TrueColor(rgb.0, rgb.1, rgb.2),
                    0..=255 => self.palette[index as usize] = rgb,
                    _ => {}
                }
            }
        }
    }

    fn handle_special_foreground(&mut self, ev: &RequestOrSetSpecialTextForegroundColor) {
        match ev.action() {
            TerminalColorAction::Query => {
                let rgb = color_to_rgb(self.default_fg, DEFAULT_FG_RGB);
                let color = TerminalPaletteColor::new(&XColor::from_rgb8(rgb.0, rgb.1, rgb.2));
                self.queue_encoded(&SpecialTextForegroundColorResponse(color));
            }
            TerminalColorAction::Set(xcolor) => {
                let rgb = xcolor.to_rgb8();
                self.default_fg = Color::TrueColor(rgb.0, rgb.1, rgb.2);
            }
        }
    }

    fn handle_special_background(&mut self, ev: &RequestOrSetSpecialTextBackgroundColor) {
        match ev.action() {
            TerminalColorAction::Query => {
                let rgb = color_to_rgb(self.default_bg, DEFAULT_BG_RGB);
                let color = TerminalPaletteColor::new(&XColor::from_rgb8(rgb.0, rgb.1, rgb.2));
                self.queue_encoded(&SpecialTextBackgroundColorResponse(color));
            }
            TerminalColorAction::Set(xcolor) => {
                let rgb = xcolor.to_rgb8();
                self.default_bg = Color::TrueColor(rgb.0, rgb.1, rgb.2);
            }
        }
    }

    /// OSC 8: an empty `uri` closes the currently open hyperlink.
    fn handle_hyperlink(&mut self, ev: &Hyperlink) {
        if ev.uri.is_empty() {
            self.hyperlink = None;
        } else {
            self.hyperlink = Some((ev.params.to_string(), ev.uri.to_string()));
        }
    }

    /// OSC 52: `data == "?"` is a query, anything else (including an
    /// empty string) sets the slot verbatim. The payload is opaque to
    /// the core — callers decide how to interpret/decode it.
    fn handle_clipboard(&mut self, ev: &ClipboardAccess) {
        if ev.data == "?" {
            if let Some(data) = self.clipboard.get(ev.selection) {
                self.queue_encoded(&ClipboardAccessResponse {
                    selection: ev.selection,
                    data,
                });
            }
        } else {
            self.clipboard.insert(ev.selection.to_string(), ev.data.to_string());
        }
    }

    /// OSC 104: reset one or more indexed palette entries to the
    /// construction-time palette; an empty index list resets all 256.
    fn handle_reset_palette(&mut self, ev: &ResetPaletteColors) {
        let initial = self.config.initial_palette;
        if ev.indices.is_empty() {
            self.palette = initial;
            return;
        }
        for part in ev.indices.split(';') {
            if let Ok(index) = part.parse::<usize>() {
                if let Some(rgb) = initial.get(index) {
                    self.palette[index] = *rgb;
                }
            }
        }
    }
}
