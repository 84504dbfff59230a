//! Erase/insert/delete line and character operations, and region
//! scrolling (spec §4.3 "ED/EL/IL/DL/ICH/DCH/ECH" and "Scroll regions").

use crate::model::cell::Cell;
use crate::model::color::StyleAttr;
use crate::model::emulator::Emulator;

pub(crate) enum EraseDisplay {
    Below,
    Above,
    Complete,
    Scrollback,
}

pub(crate) enum EraseLine {
    Right,
    Left,
    Complete,
}

impl Emulator {
    pub(crate) fn erase_display(&mut self, mode: EraseDisplay) {
        let rows = self.rows;
        let style = StyleAttr::reset();
        let buf = self.active_buf_mut();
        let (row, col) = (buf.cursor.row, buf.cursor.col);
        match mode {
            EraseDisplay::Below => {
                for c in col..buf.cols() {
                    *buf.cell_mut(row, c) = Cell::blank(style);
                }
                buf.mark_dirty(row);
                for r in (row + 1)..rows {
                    buf.clear_row(r, style);
                }
            }
            EraseDisplay::Above => {
                for c in 0..=col.min(buf.cols().saturating_sub(1)) {
                    *buf.cell_mut(row, c) = Cell::blank(style);
                }
                buf.mark_dirty(row);
                for r in 0..row {
                    buf.clear_row(r, style);
                }
            }
            EraseDisplay::Complete => {
                for r in 0..rows {
                    buf.clear_row(r, style);
                }
            }
            EraseDisplay::Scrollback => {
                self.scrollback = crate::model::scrollback::Scrollback::new(
                    self.config.scrollback_capacity as usize,
                );
            }
        }
    }

    pub(crate) fn erase_line(&mut self, mode: EraseLine) {
        let style = StyleAttr::reset();
        let buf = self.active_buf_mut();
        let row = buf.cursor.row;
        let col = buf.cursor.col;
        let cols = buf.cols();
        let range = match mode {
            EraseLine::Right => col..cols,
            EraseLine::Left => 0..(col + 1).min(cols),
            EraseLine::Complete => 0..cols,
        };
        for c in range {
            *buf.cell_mut(row, c) = Cell::blank(style);
        }
        buf.mark_dirty(row);
    }

    pub(crate) fn insert_lines(&mut self, n: u16) {
        let style = StyleAttr::reset();
        let buf = self.active_buf_mut();
        let region = buf.scroll_region;
        if buf.cursor.row < region.top || buf.cursor.row > region.bottom {
            return;
        }
        let top = buf.cursor.row;
        buf.shift_rows_down(top, region.bottom, n, style);
    }

    pub(crate) fn delete_lines(&mut self, n: u16) {
        let style = StyleAttr::reset();
        let buf = self.active_buf_mut();
        let region = buf.scroll_region;
        if buf.cursor.row < region.top || buf.cursor.row > region.bottom {
            return;
        }
        let top = buf.cursor.row;
        buf.shift_rows_up(top, region.bottom, n, style);
    }

    pub(crate) fn delete_chars(&mut self, n: u16) {
        let style = StyleAttr::reset();
        let buf = self.active_buf_mut();
        let row = buf.cursor.row;
        let col = buf.cursor.col;
        let right = buf.scroll_region.right_col(buf.cols());
        let row_cells = buf.row_mut(row);
        let end = (right as usize + 1).min(row_cells.len());
        let start = col as usize;
        if start >= end {
            return;
        }
        let shift = (n as usize).min(end - start);
        row_cells.copy_within((start + shift)..end, start);
        for cell in &mut row_cells[(end - shift)..end] {
            *cell = Cell::blank(style);
        }
        buf.mark_dirty(row);
    }

    pub(crate) fn erase_chars(&mut self, n: u16) {
        let style = StyleAttr::reset();
        let buf = self.active_buf_mut();
        let row = buf.cursor.row;
        let col = buf.cursor.col;
        let cols = buf.cols();
        let end = (col + n).min(cols);
        for c in col..end {
            *buf.cell_mut(row, c) = Cell::blank(style);
        }
        buf.mark_dirty(row);
    }

    pub(crate) fn insert_columns(&mut self, n: u16) {
        let style = StyleAttr::reset();
        let cols = self.cols;
        let buf = self.active_buf_mut();
        let region = buf.scroll_region;
        let right = region.right_col(cols);
        let col = buf.cursor.col;
        for r in region.top..=region.bottom {
            let row_cells = buf.row_mut(r);
            let end = (right as usize + 1).min(row_cells.len());
            let start = (col as usize).min(end);
            let shift = (n as usize).min(end - start);
            let mut i = end;
            while i > start + shift {
                row_cells[i - 1] = row_cells[i - 1 - shift].clone();
                i -= 1;
            }
            for cell in &mut row_cells[start..(start + shift).min(end)] {
                *cell = Cell::blank(style);
            }
            buf.mark_dirty(r);
        }
    }

    pub(crate) fn delete_columns(&mut self, n: u16) {
        let style = StyleAttr::reset();
        let cols = self.cols;
        let buf = self.active_buf_mut();
        let region = buf.scroll_region;
        let right = region.right_col(cols);
        let col = buf.cursor.col;
        for r in region.top..=region.bottom {
            let row_cells = buf.row_mut(r);
            let end = (right as usize + 1).min(row_cells.len());
            let start = (col as usize).min(end);
            if start >= end {
                continue;
            }
            let shift = (n as usize).min(end - start);
            row_cells.copy_within((start + shift)..end, start);
            for cell in &mut row_cells[(end - shift)..end] {
                *cell = Cell::blank(style);
            }
            buf.mark_dirty(r);
        }
    }

    /// DECALN: fill the whole screen with `E`, resetting margins.
    pub(crate) fn fill_screen_with_e(&mut self) {
        let rows = self.rows;
        let cols = self.cols;
        let style = StyleAttr::reset();
        let buf = self.active_buf_mut();
        for r in 0..rows {
            for c in 0..cols {
                *buf.cell_mut(r, c) =
                    Cell { ch: 'E', style, ..Cell::blank(style) };
            }
            buf.mark_dirty(r);
        }
        buf.scroll_region = crate::model::scroll_region::ScrollRegion::full(rows);
        buf.cursor.row = 0;
        buf.cursor.col = 0;
    }

    pub(crate) fn set_top_bottom_margins(&mut self, top: u16, bottom: u16) {
        let rows = self.rows;
        let buf = self.active_buf_mut();
        let (top, bottom) = if top == 0 || bottom == 0 || top >= bottom {
            (0, rows.saturating_sub(1))
        } else {
            (top.saturating_sub(1), (bottom - 1).min(rows.saturating_sub(1)))
        };
        buf.scroll_region.top = top;
        buf.scroll_region.bottom = bottom;
        buf.cursor.row = if buf.modes.decom { top } else { 0 };
        buf.cursor.col = 0;
    }

    pub(crate) fn set_left_right_margins(&mut self, left: u16, right: u16) {
        let cols = self.cols;
        let buf = self.active_buf_mut();
        if left == 0 || right == 0 || left >= right {
            buf.scroll_region.left = None;
            buf.scroll_region.right = None;
        } else {
            buf.scroll_region.left = Some(left.saturating_sub(1));
            buf.scroll_region.right =
                Some((right - 1).min(cols.saturating_sub(1)));
        }
        buf.cursor.row = if buf.modes.decom { buf.scroll_region.top } else { 0 };
        buf.cursor.col = if buf.modes.decom {
            buf.scroll_region.left_col()
        } else {
            0
        };
    }

    /// `SU`: scroll the region's content up `n` rows, evicting into
    /// scrollback only when the region spans the full buffer width and
    /// this is the primary buffer.
    pub(crate) fn scroll_up(&mut self, n: u16) {
        let style = StyleAttr::reset();
        let is_primary = self.active_kind() == crate::model::buffer::BufferKind::Primary;
        let rows = self.rows;
        let buf = self.active_buf_mut();
        let region = buf.scroll_region;
        let evicted = buf.shift_rows_up(region.top, region.bottom, n, style);
        let is_full_height = region.top == 0 && region.bottom == rows.saturating_sub(1);
        if is_primary && region.is_full_width() && is_full_height {
            for row in evicted {
                self.scrollback.append_row(row);
            }
        }
    }

    /// `SD`: scroll the region's content down `n` rows.
    pub(crate) fn scroll_down(&mut self, n: u16) {
        let style = StyleAttr::reset();
        let buf = self.active_buf_mut();
        let region = buf.scroll_region;
        buf.shift_rows_down(region.top, region.bottom, n, style);
    }

    pub(crate) fn full_reset(&mut self) {
        let rows = self.rows;
        let cols = self.cols;
        let config = self.config.clone();
        self.primary = crate::model::buffer::Buffer::new(rows, cols);
        self.alternate = crate::model::buffer::Buffer::new(rows, cols);
        self.active = crate::model::buffer::BufferKind::Primary;
        self.scrollback =
            crate::model::scrollback::Scrollback::new(config.scrollback_capacity as usize);
        self.window_title.clear();
        self.icon_name.clear();
        self.bell_count = 0;
        self.saved_primary_cursor = None;
        self.palette = config.initial_palette;
        self.default_fg = config.default_fg;
        self.default_bg = config.default_bg;
        self.clipboard.clear();
        self.hyperlink = None;
        self.title_stack.clear();
        self.last_dcs_payload = None;
        self.conformance_level = (64, Some(1));
    }
}
