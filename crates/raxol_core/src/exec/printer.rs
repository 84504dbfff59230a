//! Printing a character — the hot path, spec §4.4.

use crate::model::cell::{Cell, Codepoint};
use crate::model::cursor::CharsetId;
use crate::model::emulator::Emulator;

/// Map a 7-bit byte through the DEC Special Graphics (line-drawing) set.
/// Only bytes `0x5F..=0x7E` have a defined mapping; anything else passes
/// through unchanged.
fn dec_special_graphics(byte: u8) -> char {
    match byte {
        0x5F => ' ',
        0x60 => '\u{25C6}', // ◆
        0x61 => '\u{2592}', // ▒
        0x62 => '\u{2409}', // HT
        0x63 => '\u{240C}', // FF
        0x64 => '\u{240D}', // CR
        0x65 => '\u{240A}', // LF
        0x66 => '\u{00B0}', // °
        0x67 => '\u{00B1}', // ±
        0x68 => '\u{2424}', // NL
        0x69 => '\u{240B}', // VT
        0x6A => '\u{2518}', // ┘
        0x6B => '\u{2510}', // ┐
        0x6C => '\u{250C}', // ┌
        0x6D => '\u{2514}', // └
        0x6E => '\u{253C}', // ┼
        0x6F => '\u{23BA}',
        0x70 => '\u{23BB}',
        0x71 => '\u{2500}', // ─
        0x72 => '\u{23BC}',
        0x73 => '\u{23BD}',
        0x74 => '\u{251C}', // ├
        0x75 => '\u{2524}', // ┤
        0x76 => '\u{2534}', // ┴
        0x77 => '\u{252C}', // ┬
        0x78 => '\u{2502}', // │
        0x79 => '\u{2264}', // ≤
        0x7A => '\u{2265}', // ≥
        0x7B => '\u{03C0}', // π
        0x7C => '\u{2260}', // ≠
        0x7D => '\u{00A3}', // £
        0x7E => '\u{00B7}', // ·
        other => other as char,
    }
}

impl Emulator {
    /// Translate `ch` through the currently active G-set, then print it
    /// at the cursor, applying the full hot-path algorithm in spec §4.4.
    pub(crate) fn print_str(&mut self, text: &str) {
        for ch in text.chars() {
            let translated = if ch.is_ascii() && ch as u32 >= 0x20 {
                match self.active_buf().charset_state.active() {
                    CharsetId::DecSpecialGraphics => {
                        dec_special_graphics(ch as u8)
                    }
                    CharsetId::Ascii | CharsetId::Uk => ch,
                }
            } else {
                ch
            };
            self.print_codepoint(Codepoint::new(translated));
            // A single-shift charset only applies to the next printable.
            let buf = self.active_buf_mut();
            if buf.charset_state.single_shift.is_some() && !ch.is_whitespace()
            {
                buf.charset_state.single_shift = None;
            }
        }
    }

    fn print_codepoint(&mut self, cp: Codepoint) {
        let cols = self.cols;
        let style_for_row;
        {
            let buf = self.active_buf();
            style_for_row = buf.cursor.style_attr();
        }

        if cp.is_combining() {
            self.attach_combining(cp.ch);
            return;
        }

        let buf = self.active_buf_mut();

        // Step 2: consume a pending wrap before placing anything new.
        if buf.cursor.pending_wrap && buf.modes.decawm {
            let row = buf.cursor.row;
            buf.set_row_wrapped(row, true);
            self.index_cursor();
            self.carriage_return();
        }

        let buf = self.active_buf_mut();
        let width = u16::from(cp.width.max(1));
        let at_last_col = buf.cursor.col + width > cols;

        if at_last_col && width == 2 && !buf.modes.decawm {
            // Truncate: replace only the last cell.
            let row = buf.cursor.row;
            let col = cols - 1;
            *buf.cell_mut(row, col) = Cell { ch: cp.ch, style: style_for_row, ..Cell::blank(style_for_row) };
            buf.mark_dirty(row);
            return;
        }
        if at_last_col && width == 2 && buf.modes.decawm {
            let row = buf.cursor.row;
            buf.set_row_wrapped(row, true);
            self.index_cursor();
            self.carriage_return();
        }

        let buf = self.active_buf_mut();
        if buf.modes.irm {
            self.shift_insert(width);
        }

        let buf = self.active_buf_mut();
        let row = buf.cursor.row;
        let col = buf.cursor.col;
        self.unlink_wide_neighbors(row, col);
        let buf = self.active_buf_mut();
        *buf.cell_mut(row, col) = Cell { ch: cp.ch, style: style_for_row, ..Cell::blank(style_for_row) };
        if width == 2 && col + 1 < cols {
            let mut cont = Cell::blank(style_for_row);
            cont.wide_cont = true;
            *buf.cell_mut(row, col + 1) = cont;
        }
        buf.mark_dirty(row);

        buf.cursor.col += width;
        if buf.cursor.col >= cols {
            if buf.modes.decawm {
                buf.cursor.pending_wrap = true;
            }
            buf.cursor.col = cols - 1;
        }
    }

    /// Writing onto either half of a wide cell nulls the other half, to
    /// preserve invariant 2.
    fn unlink_wide_neighbors(&mut self, row: u16, col: u16) {
        let cols = self.cols;
        let buf = self.active_buf_mut();
        if buf.cell(row, col).wide_cont && col > 0 {
            let style = buf.cell(row, col - 1).style;
            *buf.cell_mut(row, col - 1) = Cell::blank(style);
        }
        if col + 1 < cols {
            let right_is_cont = buf.cell(row, col + 1).wide_cont;
            if right_is_cont {
                let style = buf.cell(row, col).style;
                *buf.cell_mut(row, col + 1) = Cell::blank(style);
            }
        }
    }

    fn attach_combining(&mut self, ch: char) {
        let buf = self.active_buf_mut();
        let row = buf.cursor.row;
        let col = buf.cursor.col.saturating_sub(1);
        buf.cell_mut(row, col).push_combining(ch);
        buf.mark_dirty(row);
    }

    /// Shift cells from the cursor to the right margin right by `width`,
    /// dropping overflow (spec §4.4 step 4).
    fn shift_insert(&mut self, width: u16) {
        let cols = self.cols;
        let buf = self.active_buf_mut();
        let row = buf.cursor.row;
        let col = buf.cursor.col;
        let right_margin = buf.scroll_region.right_col(cols);
        let style = buf.cursor.style_attr();
        let row_cells = buf.row_mut(row);
        let end = (right_margin as usize + 1).min(row_cells.len());
        let start = col as usize;
        if start >= end {
            return;
        }
        let shift = width as usize;
        let mut i = end;
        while i > start + shift {
            row_cells[i - 1] = row_cells[i - 1 - shift].clone();
            i -= 1;
        }
        for cell in &mut row_cells[start..(start + shift).min(end)] {
            *cell = Cell::blank(style);
        }
        buf.mark_dirty(row);
    }
}
