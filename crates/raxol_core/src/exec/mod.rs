//! The executor: turns parsed `vtansi` events into buffer mutations
//! (spec §4.3 "Executor / Command Dispatcher").
//!
//! `Emulator::handle_event` is the single entry point `feed_bytes` drives
//! for every event the parser recognizes. Everything here is total: an
//! unrecognized or out-of-range parameter is a no-op, never a panic.

pub mod charset;
pub mod cursor;
pub mod dcs;
pub mod erase;
pub mod modes;
pub mod osc;
pub mod printer;
pub mod resize;
pub mod sgr;

use better_any::TidExt;
use vt_push_parser::event::VTEvent;

use raxol_vterm::event::{
    PlainText, UnrecognizedDcsEvent, UnrecognizedOutputEvent,
    cursor::{
        BackIndex, Backspace, CarriageReturn, CursorDown,
        CursorHorizontalAbsolute, CursorHorizontalBackwardTab,
        CursorHorizontalForwardTab, CursorHorizontalRelative, CursorLeft,
        CursorNextLine, CursorPosition, CursorPreviousLine, CursorRight,
        CursorUp, CursorVerticalAbsolute, CursorVerticalRelative, FormFeed,
        ForwardIndex, HorizontalTab, HorizontalTabSet, Index, LineFeed,
        NextLine, RequestCursorPosition, RequestCursorStyle,
        RequestTabStopReport, RestoreCursor, ReverseIndex, SaveCursor,
        SetCursorStyle, VerticalTab,
    },
    screen::{
        DeleteCharacter, DeleteColumn, DeleteLine, EraseDisplayAbove,
        EraseDisplayBelow, EraseDisplayComplete, EraseDisplayScrollback,
        EraseLineComplete, EraseLineLeft, EraseLineRight, FillScreenWithE,
        InsertColumn, InsertLine,
    },
    scroll::{
        RequestLeftRightMargins, RequestTopBottomMargins, ScrollDown,
        ScrollUp, SetLeftAndRightMargins, SetTopAndBottomMargins,
    },
    terminal::{
        Bell, BracketedPasteEnd, BracketedPasteStart, FullReset,
        RequestPrimaryDeviceAttributes, RequestTextAttributes,
        RequestVTConformanceLevel, SelectVTConformanceLevel,
    },
    window::{
        SetIconName, SetIconNameOwned, SetTitle, SetTitleAndIconName,
        SetTitleAndIconNameOwned, SetTitleOwned,
    },
};

use crate::model::emulator::Emulator;

macro_rules! dispatch {
    ($self:ident, $event:ident, { $($ty:ty => $body:expr),* $(,)? }) => {
        $(
            if let Some(ev) = $event.downcast_ref::<$ty>() {
                #[allow(clippy::redundant_closure_call)]
                return ($body)($self, ev);
            }
        )*
    };
}

impl Emulator {
    pub(crate) fn handle_event(&mut self, event: &dyn vtansi::AnsiEvent) {
        if let Some(text) = event.downcast_ref::<PlainText>() {
            self.print_str(text.0);
            return;
        }

        dispatch!(self, event, {
            Backspace => |s: &mut Self, _: &Backspace| s.backspace(),
            HorizontalTab => |s: &mut Self, _: &HorizontalTab| s.horizontal_tab(),
            LineFeed => |s: &mut Self, _: &LineFeed| s.line_feed(),
            VerticalTab => |s: &mut Self, _: &VerticalTab| s.line_feed(),
            FormFeed => |s: &mut Self, _: &FormFeed| s.line_feed(),
            CarriageReturn => |s: &mut Self, _: &CarriageReturn| s.carriage_return(),
            Bell => |s: &mut Self, _: &Bell| s.ring_bell(),

            Index => |s: &mut Self, _: &Index| s.index_cursor(),
            ReverseIndex => |s: &mut Self, _: &ReverseIndex| s.reverse_index(),
            NextLine => |s: &mut Self, _: &NextLine| { s.carriage_return(); s.index_cursor(); },
            BackIndex => |s: &mut Self, _: &BackIndex| s.back_index(),
            ForwardIndex => |s: &mut Self, _: &ForwardIndex| s.forward_index(),
            HorizontalTabSet => |s: &mut Self, _: &HorizontalTabSet| s.set_tab_stop(),

            CursorUp => |s: &mut Self, e: &CursorUp| s.cursor_up(e.0.max(1)),
            CursorDown => |s: &mut Self, e: &CursorDown| s.cursor_down(e.0.max(1)),
            CursorLeft => |s: &mut Self, e: &CursorLeft| s.cursor_left(e.0.max(1)),
            CursorRight => |s: &mut Self, e: &CursorRight| s.cursor_right(e.0.max(1)),
            CursorNextLine => |s: &mut Self, e: &CursorNextLine| {
                s.cursor_down(e.0.max(1));
                s.carriage_return();
            },
            CursorPreviousLine => |s: &mut Self, e: &CursorPreviousLine| {
                s.cursor_up(e.0.max(1));
                s.carriage_return();
            },
            CursorHorizontalAbsolute => |s: &mut Self, e: &CursorHorizontalAbsolute| {
                s.cursor_col_absolute(e.0.saturating_sub(1));
            },
            CursorHorizontalRelative => |s: &mut Self, e: &CursorHorizontalRelative| {
                s.cursor_right(e.0.max(1));
            },
            CursorVerticalAbsolute => |s: &mut Self, e: &CursorVerticalAbsolute| {
                s.cursor_row_absolute(e.0.saturating_sub(1));
            },
            CursorVerticalRelative => |s: &mut Self, e: &CursorVerticalRelative| {
                s.cursor_down(e.0.max(1));
            },
            CursorHorizontalForwardTab => |s: &mut Self, e: &CursorHorizontalForwardTab| {
                s.forward_tab(e.amount.max(1));
            },
            CursorHorizontalBackwardTab => |s: &mut Self, e: &CursorHorizontalBackwardTab| {
                s.backward_tab(e.0.max(1));
            },
            CursorPosition => |s: &mut Self, e: &CursorPosition| s.cursor_position(e.row, e.col),
            SaveCursor => |s: &mut Self, _: &SaveCursor| s.save_cursor(),
            RestoreCursor => |s: &mut Self, _: &RestoreCursor| s.restore_cursor(),
            SetCursorStyle => |s: &mut Self, e: &SetCursorStyle| {
                s.active_buf_mut().cursor.style =
                    raxol_vterm::event::cursor::CursorStyle::from(e.0);
            },
            RequestCursorPosition => |s: &mut Self, _: &RequestCursorPosition| s.report_cursor_position(),
            RequestCursorStyle => |s: &mut Self, _: &RequestCursorStyle| s.report_cursor_style(),
            RequestTabStopReport => |s: &mut Self, _: &RequestTabStopReport| s.report_tab_stops(),
            RequestTextAttributes => |s: &mut Self, _: &RequestTextAttributes| s.report_text_attributes(),
            RequestTopBottomMargins => |s: &mut Self, _: &RequestTopBottomMargins| s.report_top_bottom_margins(),
            RequestLeftRightMargins => |s: &mut Self, _: &RequestLeftRightMargins| s.report_left_right_margins(),
            RequestVTConformanceLevel => |s: &mut Self, _: &RequestVTConformanceLevel| s.report_conformance_level(),
            SelectVTConformanceLevel => |s: &mut Self, e: &SelectVTConformanceLevel| {
                s.select_conformance_level(e.level, e.c1_encoding);
            },

            EraseDisplayBelow => |s: &mut Self, _: &EraseDisplayBelow| s.erase_display(crate::exec::erase::EraseDisplay::Below),
            EraseDisplayAbove => |s: &mut Self, _: &EraseDisplayAbove| s.erase_display(crate::exec::erase::EraseDisplay::Above),
            EraseDisplayComplete => |s: &mut Self, _: &EraseDisplayComplete| s.erase_display(crate::exec::erase::EraseDisplay::Complete),
            EraseDisplayScrollback => |s: &mut Self, _: &EraseDisplayScrollback| s.erase_display(crate::exec::erase::EraseDisplay::Scrollback),
            EraseLineRight => |s: &mut Self, _: &EraseLineRight| s.erase_line(crate::exec::erase::EraseLine::Right),
            EraseLineLeft => |s: &mut Self, _: &EraseLineLeft| s.erase_line(crate::exec::erase::EraseLine::Left),
            EraseLineComplete => |s: &mut Self, _: &EraseLineComplete| s.erase_line(crate::exec::erase::EraseLine::Complete),

            InsertLine => |s: &mut Self, e: &InsertLine| s.insert_lines(e.0.max(1)),
            DeleteLine => |s: &mut Self, e: &DeleteLine| s.delete_lines(e.0.max(1)),
            DeleteCharacter => |s: &mut Self, e: &DeleteCharacter| s.delete_chars(e.0.max(1)),
            InsertColumn => |s: &mut Self, e: &InsertColumn| s.insert_columns(e.0.max(1)),
            DeleteColumn => |s: &mut Self, e: &DeleteColumn| s.delete_columns(e.0.max(1)),
            FillScreenWithE => |s: &mut Self, _: &FillScreenWithE| s.fill_screen_with_e(),

            SetTopAndBottomMargins => |s: &mut Self, e: &SetTopAndBottomMargins| s.set_top_bottom_margins(e.top, e.bottom),
            SetLeftAndRightMargins => |s: &mut Self, e: &SetLeftAndRightMargins| s.set_left_right_margins(e.left, e.right),
            ScrollUp => |s: &mut Self, e: &ScrollUp| s.scroll_up(e.0.max(1)),
            ScrollDown => |s: &mut Self, e: &ScrollDown| s.scroll_down(e.0.max(1)),

            BracketedPasteStart => |s: &mut Self, _: &BracketedPasteStart| {},
            BracketedPasteEnd => |s: &mut Self, _: &BracketedPasteEnd| {},
            FullReset => |s: &mut Self, _: &FullReset| s.full_reset(),
            RequestPrimaryDeviceAttributes => |s: &mut Self, _: &RequestPrimaryDeviceAttributes| s.report_primary_device_attributes(),

            SetTitle => |s: &mut Self, e: &SetTitle| s.window_title = e.title.to_string(),
            SetTitleOwned => |s: &mut Self, e: &SetTitleOwned| s.window_title = e.title.clone(),
            SetIconName => |s: &mut Self, e: &SetIconName| s.icon_name = e.name.to_string(),
            SetIconNameOwned => |s: &mut Self, e: &SetIconNameOwned| s.icon_name = e.name.clone(),
            SetTitleAndIconName => |s: &mut Self, e: &SetTitleAndIconName| {
                s.window_title = e.title.to_string();
                s.icon_name = e.title.to_string();
            },
            SetTitleAndIconNameOwned => |s: &mut Self, e: &SetTitleAndIconNameOwned| {
                s.window_title = e.title.clone();
                s.icon_name = e.title.clone();
            },
        });

        self.handle_charset_event(event);
        self.handle_mode_event(event);
        self.handle_osc_event(event);

        if let Some(dcs) = event.downcast_ref::<UnrecognizedDcsEvent>() {
            self.stash_dcs_payload(dcs);
            return;
        }

        if let Some(unrecognized) = event.downcast_ref::<UnrecognizedOutputEvent>() {
            self.handle_unrecognized(unrecognized.0);
            return;
        }

        tracing::trace!(kind = ?event.ansi_control_kind(), "unhandled output event");
    }

    fn handle_unrecognized(&mut self, vt: &VTEvent) {
        match vt {
            VTEvent::Csi(csi) => {
                if csi.final_byte == b'm' {
                    self.apply_sgr(csi);
                    return;
                }
                if csi.final_byte == b'n' && csi.private.is_none() {
                    self.handle_dsr(csi);
                    return;
                }
                if csi.final_byte == b'g' {
                    self.handle_tbc(csi);
                    return;
                }
                if csi.final_byte == b'X' {
                    let n = (&csi.params)
                        .into_iter()
                        .next()
                        .and_then(|b| atoi_simd::parse::<u16>(b).ok())
                        .unwrap_or(1)
                        .max(1);
                    self.erase_chars(n);
                    return;
                }
                tracing::trace!(final_byte = csi.final_byte as char, "unhandled CSI");
            }
            VTEvent::DcsEnd(_) => {
                // Reached only when a DCS terminates with no captured
                // header (e.g. a cancelled/malformed sequence): nothing
                // usable to stash.
                tracing::trace!("DCS terminated with no header");
            }
            _ => {
                tracing::trace!(?vt, "unhandled event");
            }
        }
    }

    /// `CSI Ps n` DSR queries not covered by a registered event type.
    fn handle_dsr(&mut self, csi: &vt_push_parser::event::CSI) {
        let first = (&csi.params).into_iter().next();
        match first.and_then(|b| atoi_simd::parse::<u16>(b).ok()) {
            Some(5) => self.queue_response(b"\x1b[0n"),
            Some(6) => self.report_cursor_position(),
            _ => {}
        }
    }

    /// `CSI Ps g` TBC: clear tab stop(s).
    fn handle_tbc(&mut self, csi: &vt_push_parser::event::CSI) {
        let ps = (&csi.params)
            .into_iter()
            .next()
            .and_then(|b| atoi_simd::parse::<u16>(b).ok())
            .unwrap_or(0);
        let buf = self.active_buf_mut();
        match ps {
            0 => {
                let col = buf.cursor.col;
                buf.tab_stops.remove(&col);
            }
            3 => buf.tab_stops.clear(),
            _ => {}
        }
    }
}
