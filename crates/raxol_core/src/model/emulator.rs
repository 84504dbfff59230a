//! The top-level owner of both buffers, the scrollback, and the pending
//! response queue (spec §3 `Emulator`, §5 concurrency model).

use std::collections::{HashMap, VecDeque};

use raxol_vterm::parser::output::TerminalOutputParser;

use crate::config::{Config, ConfigError};

use super::buffer::{Buffer, BufferKind};
use super::color::Color;
use super::color::StyleAttr;
use super::scrollback::Scrollback;

/// Newtype so a fresh default parser can be swapped in/out of `Emulator`
/// while a `feed_bytes` call is in flight (see `Emulator::feed_bytes`).
/// `Default` yields an unbounded parser; `Emulator::new` immediately
/// replaces it with one capped per `config.{osc,dcs}_payload_limit`
/// (spec §5 "Memory": "transient ... OSC/DCS payload buffers have hard
/// caps").
pub(crate) struct OutputParser(pub TerminalOutputParser);

impl Default for OutputParser {
    fn default() -> Self {
        Self(TerminalOutputParser::new())
    }
}

/// `{dimensions, active_buffer, primary, alternate, scrollback,
/// pending_osc/dcs state, parser_state, input_encoder_mode, device_attrs,
/// pending_responses}` per spec §3.
pub struct Emulator {
    pub(crate) rows: u16,
    pub(crate) cols: u16,
    pub(crate) active: BufferKind,
    pub(crate) primary: Buffer,
    pub(crate) alternate: Buffer,
    pub(crate) scrollback: Scrollback,
    pub(crate) config: Config,
    pub(crate) output_parser: OutputParser,
    /// Bytes queued for the host program (DA1/DSR/DECRQSS/OSC-query
    /// responses), drained between feeds.
    pub(crate) pending_responses: VecDeque<u8>,
    pub(crate) window_title: String,
    pub(crate) icon_name: String,
    pub(crate) bell_count: u32,
    /// Saved primary-buffer cursor across a 1049 alt-screen entry/exit.
    pub(crate) saved_primary_cursor: Option<super::cursor::Cursor>,
    /// 256-entry indexed palette, mutable at runtime via OSC 4/104
    /// (starts out a copy of `config.initial_palette`).
    pub(crate) palette: [(u8, u8, u8); 256],
    /// OSC 10/11 default fg/bg, distinct from `config.default_{fg,bg}` so a
    /// runtime `OSC 10;#rrggbb ST` doesn't mutate the construction config.
    pub(crate) default_fg: Color,
    pub(crate) default_bg: Color,
    /// OSC 52 clipboard metadata slot, keyed by selection letter
    /// (`c`/`p`/`s`/`0`-`7`). The core never touches the OS clipboard.
    pub(crate) clipboard: HashMap<String, String>,
    /// OSC 8 hyperlink currently open for newly printed cells, if any.
    pub(crate) hyperlink: Option<(String, String)>,
    /// `CSI 22 t` / `CSI 23 t` title/icon-name stack.
    pub(crate) title_stack: Vec<(String, String)>,
    /// Last unrecognized DCS payload accepted and stashed (Sixel and
    /// similar), capped at `config.dcs_payload_limit`. The core does not
    /// rasterize it — see spec §4.3 "DCS".
    pub(crate) last_dcs_payload: Option<Vec<u8>>,
    /// `(level, c1_encoding)` from the last `DECSCL` (`CSI Ps SP t`),
    /// reported back verbatim by `DECRQSS`'s conformance-level query.
    pub(crate) conformance_level: (u16, Option<u8>),
}

impl Emulator {
    /// Construct a fresh `Emulator`. Initial state: fully cleared, default
    /// style, default modes (autowrap on, origin off, cursor visible,
    /// primary buffer active, default charsets, tab stops every 8
    /// columns) — per spec §3 "Lifecycles".
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let Config {
            rows,
            cols,
            scrollback_capacity,
            initial_palette,
            default_fg,
            default_bg,
            osc_payload_limit,
            dcs_payload_limit,
            ..
        } = config;
        let output_parser = OutputParser(TerminalOutputParser::with_payload_limits(
            osc_payload_limit as usize,
            dcs_payload_limit as usize,
        ));
        Ok(Self {
            rows,
            cols,
            active: BufferKind::Primary,
            primary: Buffer::new(rows, cols),
            alternate: Buffer::new(rows, cols),
            scrollback: Scrollback::new(scrollback_capacity as usize),
            config,
            output_parser,
            pending_responses: VecDeque::new(),
            window_title: String::new(),
            icon_name: String::new(),
            bell_count: 0,
            saved_primary_cursor: None,
            palette: initial_palette,
            default_fg,
            default_bg,
            clipboard: HashMap::new(),
            hyperlink: None,
            title_stack: Vec::new(),
            last_dcs_payload: None,
            conformance_level: (64, Some(1)),
        })
    }

    #[must_use]
    pub fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn active_kind(&self) -> BufferKind {
        self.active
    }

    pub(crate) fn active_buf(&self) -> &Buffer {
        match self.active {
            BufferKind::Primary => &self.primary,
            BufferKind::Alternate => &self.alternate,
        }
    }

    pub(crate) fn active_buf_mut(&mut self) -> &mut Buffer {
        match self.active {
            BufferKind::Primary => &mut self.primary,
            BufferKind::Alternate => &mut self.alternate,
        }
    }

    #[must_use]
    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    pub(crate) fn queue_response(&mut self, bytes: &[u8]) {
        self.pending_responses.extend(bytes.iter().copied());
    }

    /// Queue a registered `vtansi` response type's wire encoding. Encoding
    /// only fails for I/O errors, which can't happen writing into a `Vec`.
    pub(crate) fn queue_encoded<E: vtansi::AnsiEncode>(&mut self, ev: &E) {
        if let Ok(bytes) = ev.encode_ansi() {
            self.pending_responses.extend(bytes);
        }
    }

    /// Drain bytes queued for the host program (spec §5/§6: "drained by
    /// the owner between feeds").
    pub fn take_pending_responses(&mut self) -> Vec<u8> {
        self.pending_responses.drain(..).collect()
    }

    pub(crate) fn ring_bell(&mut self) {
        self.bell_count = self.bell_count.saturating_add(1);
    }

    /// Feed a chunk of raw bytes (host program output) through the parser
    /// and executor. Total over its input: never returns an error (spec
    /// §7 "feed_bytes is total").
    pub fn feed_bytes(&mut self, bytes: &[u8]) {
        let mut parser = std::mem::take(&mut self.output_parser);
        parser.0.feed_with(bytes, &mut |event| self.handle_event(event));
        self.output_parser = parser;
    }

    /// Switch the active buffer (DEC alternate-screen modes). `save_cursor`
    /// additionally stashes/restores the primary cursor (mode 1049).
    pub(crate) fn enter_alternate(&mut self, save_cursor: bool, clear: bool) {
        if self.active == BufferKind::Alternate {
            return;
        }
        if save_cursor {
            self.saved_primary_cursor = Some(self.primary.cursor);
        }
        self.active = BufferKind::Alternate;
        if clear {
            let style = StyleAttr::reset();
            for r in 0..self.alternate.rows() {
                self.alternate.clear_row(r, style);
            }
            self.alternate.cursor = Default::default();
        }
    }

    pub(crate) fn exit_alternate(&mut self, restore_cursor: bool) {
        if self.active == BufferKind::Primary {
            return;
        }
        self.active = BufferKind::Primary;
        if restore_cursor {
            if let Some(cursor) = self.saved_primary_cursor.take() {
                self.primary.cursor = cursor;
            }
        }
    }

    /// Resize both buffers to `(rows, cols)` per spec §4.5.
    pub fn resize(&mut self, rows: u16, cols: u16) {
        if rows == 0 || cols == 0 {
            return;
        }
        let reflow = self.config.reflow_on_resize;
        crate::exec::resize::resize_buffer(
            &mut self.primary,
            &mut self.scrollback,
            rows,
            cols,
            reflow,
            true,
        );
        crate::exec::resize::resize_buffer(
            &mut self.alternate,
            &mut self.scrollback,
            rows,
            cols,
            reflow,
            false,
        );
        self.rows = rows;
        self.cols = cols;
    }
}
