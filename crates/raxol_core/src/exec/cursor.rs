//! Cursor movement, line feed/index, tab stops, save/restore (spec §4.3
//! cursor-movement and C0 tables).

use crate::model::cursor::SavedCursor;
use crate::model::emulator::Emulator;

impl Emulator {
    pub(crate) fn backspace(&mut self) {
        let buf = self.active_buf_mut();
        buf.cursor.pending_wrap = false;
        if buf.cursor.col > 0 {
            buf.cursor.col -= 1;
        }
    }

    pub(crate) fn horizontal_tab(&mut self) {
        let cols = self.cols;
        let buf = self.active_buf_mut();
        let next = buf
            .tab_stops
            .range((buf.cursor.col + 1)..)
            .next()
            .copied()
            .unwrap_or(cols - 1);
        buf.cursor.col = next.min(cols - 1);
        buf.cursor.pending_wrap = false;
    }

    pub(crate) fn forward_tab(&mut self, count: u16) {
        for _ in 0..count {
            self.horizontal_tab();
        }
    }

    pub(crate) fn backward_tab(&mut self, count: u16) {
        let buf = self.active_buf_mut();
        for _ in 0..count {
            let prev = buf
                .tab_stops
                .range(..buf.cursor.col)
                .next_back()
                .copied()
                .unwrap_or(0);
            buf.cursor.col = prev;
        }
        buf.cursor.pending_wrap = false;
    }

    pub(crate) fn set_tab_stop(&mut self) {
        let buf = self.active_buf_mut();
        let col = buf.cursor.col;
        buf.tab_stops.insert(col);
    }

    /// `CR`: column 0 (or the left margin, honoring DECOM/DECLRMM).
    pub(crate) fn carriage_return(&mut self) {
        let buf = self.active_buf_mut();
        buf.cursor.col = if buf.modes.decom && buf.scroll_region.left.is_some() {
            buf.scroll_region.left_col()
        } else {
            0
        };
        buf.cursor.pending_wrap = false;
    }

    /// `IND`/LF-equivalent: move down one row in the scroll region,
    /// scrolling the region up when the cursor sits on its bottom row.
    pub(crate) fn index_cursor(&mut self) {
        let rows = self.rows;
        let buf = self.active_buf_mut();
        let region = buf.scroll_region;
        let in_region = buf.cursor.row >= region.top && buf.cursor.row <= region.bottom;
        buf.cursor.pending_wrap = false;

        if in_region && buf.cursor.row == region.bottom {
            self.scroll_up(1);
        } else if buf.cursor.row + 1 < rows {
            self.active_buf_mut().cursor.row += 1;
        }
    }

    /// `LF`/`VT`/`FF`: index, plus a carriage-return when `LNM` is set
    /// (spec §4.3 C0 controls: "column unchanged unless LNM set").
    pub(crate) fn line_feed(&mut self) {
        self.index_cursor();
        if self.active_buf().modes.lnm {
            self.carriage_return();
        }
    }

    /// `RI`: mirror of `index_cursor`, moving up and scrolling down.
    pub(crate) fn reverse_index(&mut self) {
        let buf = self.active_buf_mut();
        let region = buf.scroll_region;
        let in_region = buf.cursor.row >= region.top && buf.cursor.row <= region.bottom;
        buf.cursor.pending_wrap = false;

        if in_region && buf.cursor.row == region.top {
            self.scroll_down(1);
        } else if buf.cursor.row > 0 {
            self.active_buf_mut().cursor.row -= 1;
        }
    }

    /// `DECBI`: move left one column within the scroll region, stopping
    /// at its left-most column (column shifting within the region is not
    /// modeled, matching the narrower scope of `Buffer`'s row-shift API).
    pub(crate) fn back_index(&mut self) {
        let buf = self.active_buf_mut();
        let left = buf.scroll_region.left_col();
        if buf.cursor.col > left {
            buf.cursor.col -= 1;
        }
    }

    /// `DECFI`: mirror of `back_index`.
    pub(crate) fn forward_index(&mut self) {
        let cols = self.cols;
        let buf = self.active_buf_mut();
        let region = buf.scroll_region;
        let right = region.right_col(cols);
        if buf.cursor.col < right {
            buf.cursor.col += 1;
        }
    }

    pub(crate) fn cursor_up(&mut self, n: u16) {
        let buf = self.active_buf_mut();
        let top = if buf.cursor.row >= buf.scroll_region.top {
            buf.scroll_region.top
        } else {
            0
        };
        buf.cursor.row = buf.cursor.row.saturating_sub(n).max(top);
        buf.cursor.pending_wrap = false;
    }

    pub(crate) fn cursor_down(&mut self, n: u16) {
        let rows = self.rows;
        let buf = self.active_buf_mut();
        let bottom = if buf.cursor.row <= buf.scroll_region.bottom {
            buf.scroll_region.bottom
        } else {
            rows - 1
        };
        buf.cursor.row = (buf.cursor.row + n).min(bottom);
        buf.cursor.pending_wrap = false;
    }

    pub(crate) fn cursor_left(&mut self, n: u16) {
        let buf = self.active_buf_mut();
        let left = if buf.cursor.col >= buf.scroll_region.left_col() {
            buf.scroll_region.left_col()
        } else {
            0
        };
        buf.cursor.col = buf.cursor.col.saturating_sub(n).max(left);
        buf.cursor.pending_wrap = false;
    }

    pub(crate) fn cursor_right(&mut self, n: u16) {
        let cols = self.cols;
        let buf = self.active_buf_mut();
        let right = if buf.cursor.col <= buf.scroll_region.right_col(cols) {
            buf.scroll_region.right_col(cols)
        } else {
            cols - 1
        };
        buf.cursor.col = (buf.cursor.col + n).min(right);
        buf.cursor.pending_wrap = false;
    }

    pub(crate) fn cursor_col_absolute(&mut self, col: u16) {
        let cols = self.cols;
        let buf = self.active_buf_mut();
        buf.cursor.col = col.min(cols.saturating_sub(1));
        buf.cursor.pending_wrap = false;
    }

    pub(crate) fn cursor_row_absolute(&mut self, row: u16) {
        let rows = self.rows;
        let buf = self.active_buf_mut();
        buf.cursor.row = row.min(rows.saturating_sub(1));
        buf.cursor.pending_wrap = false;
    }

    /// `CUP`/`HVP`: absolute position, honoring DECOM/DECLRMM offsets.
    pub(crate) fn cursor_position(&mut self, row: u16, col: u16) {
        let rows = self.rows;
        let cols = self.cols;
        let buf = self.active_buf_mut();
        let region = buf.scroll_region;

        let (row_base, row_max) = if buf.modes.decom {
            (region.top, region.bottom)
        } else {
            (0, rows.saturating_sub(1))
        };
        let (col_base, col_max) = if buf.modes.decom && region.left.is_some() {
            (region.left_col(), region.right_col(cols))
        } else {
            (0, cols.saturating_sub(1))
        };

        let row = row.saturating_sub(1);
        let col = col.saturating_sub(1);
        buf.cursor.row = (row_base + row).min(row_max);
        buf.cursor.col = (col_base + col).min(col_max);
        buf.cursor.pending_wrap = false;
    }

    pub(crate) fn save_cursor(&mut self) {
        let buf = self.active_buf_mut();
        buf.saved_cursor = SavedCursor {
            row: buf.cursor.row,
            col: buf.cursor.col,
            style: buf.cursor.current_style,
            charset_state: buf.charset_state,
            origin_relative: buf.modes.decom,
            autowrap: buf.modes.decawm,
        };
    }

    pub(crate) fn restore_cursor(&mut self) {
        let buf = self.active_buf_mut();
        let saved = buf.saved_cursor;
        buf.cursor.row = saved.row;
        buf.cursor.col = saved.col;
        buf.cursor.current_style = saved.style;
        buf.charset_state = saved.charset_state;
        buf.modes.decom = saved.origin_relative;
        buf.modes.decawm = saved.autowrap;
        buf.cursor.pending_wrap = false;
    }

    pub(crate) fn report_cursor_position(&mut self) {
        let buf = self.active_buf();
        let row = buf.cursor.row + 1;
        let col = buf.cursor.col + 1;
        let response = format!("\x1b[{row};{col}R");
        self.queue_response(response.as_bytes());
    }

    pub(crate) fn report_tab_stops(&mut self) {
        let buf = self.active_buf();
        let stops: Vec<String> =
            buf.tab_stops.iter().map(u16::to_string).collect();
        let response = format!("\x1bP2$u{}\x1b\\", stops.join("/"));
        self.queue_response(response.as_bytes());
    }

    pub(crate) fn report_primary_device_attributes(&mut self) {
        self.queue_response(b"\x1b[?62;22c");
    }
}
