//! Renderer-facing read-only view over the emulator (spec §4.8).
//!
//! `Emulator::snapshot` is the single operation a renderer calls once per
//! frame: it returns the visible grid, cursor, and rendering-relevant
//! mode flags, and resets the pending-bell counter and dirty-rows bitmap
//! as a side effect of being taken. Scrollback access is separate
//! (`Emulator::scrollback_len`/`scrollback_row`) since it isn't part of
//! the "what changed this frame" contract.

use raxol_vterm::event::cursor::CursorStyle;

use crate::model::buffer::{Buffer, BufferKind};
use crate::model::cell::Cell;
use crate::model::emulator::Emulator;

/// Cursor state relevant to rendering: position, visibility, and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub row: u16,
    pub col: u16,
    pub visible: bool,
    pub style: CursorStyle,
}

/// A consistent, read-only view of the visible grid plus metadata a
/// renderer needs, taken at one instant (spec §4.8). Borrows the
/// `Emulator` it was taken from, so it cannot outlive a subsequent
/// `feed_bytes`/`resize` call — the borrow checker enforces the "no
/// mutation visible mid-snapshot" guarantee in §5 at compile time rather
/// than at runtime.
#[derive(Debug)]
pub struct Snapshot<'a> {
    buffer: &'a Buffer,
    pub rows: u16,
    pub cols: u16,
    pub cursor: CursorSnapshot,
    /// `DECSCNM`: renderer should swap default fg/bg when drawing.
    pub reverse_video: bool,
    pub alternate_active: bool,
    pub window_title: &'a str,
    /// Bell rings since the previous snapshot; reset to 0 by taking this
    /// snapshot.
    pub bell_count: u32,
    /// Rows mutated since the previous snapshot, in ascending order;
    /// reset by taking this snapshot.
    pub dirty_rows: Vec<u16>,
}

impl<'a> Snapshot<'a> {
    #[must_use]
    pub fn cell(&self, row: u16, col: u16) -> &Cell {
        self.buffer.cell(row, col)
    }

    #[must_use]
    pub fn row(&self, row: u16) -> &[Cell] {
        self.buffer.row(row)
    }

    #[must_use]
    pub fn is_row_dirty(&self, row: u16) -> bool {
        self.dirty_rows.contains(&row)
    }
}

impl Emulator {
    /// Take a snapshot of the currently active buffer. Resets the bell
    /// counter and the active buffer's dirty-rows bitmap (spec §4.8: "a
    /// dirty-rows bitmap since the last snapshot").
    pub fn snapshot(&mut self) -> Snapshot<'_> {
        let bell_count = std::mem::take(&mut self.bell_count);
        let active = self.active;

        let dirty_rows: Vec<u16> = {
            let buf = match active {
                BufferKind::Primary => &mut self.primary,
                BufferKind::Alternate => &mut self.alternate,
            };
            let rows: Vec<u16> =
                buf.dirty_rows.iter_set().map(|r| r as u16).collect();
            buf.dirty_rows.clear();
            rows
        };

        let buf: &Buffer = match active {
            BufferKind::Primary => &self.primary,
            BufferKind::Alternate => &self.alternate,
        };

        let cursor = CursorSnapshot {
            row: buf.cursor.row,
            col: buf.cursor.col,
            visible: buf.cursor.visible && buf.modes.dectcem,
            style: buf.cursor.style,
        };

        Snapshot {
            buffer: buf,
            rows: self.rows,
            cols: self.cols,
            cursor,
            reverse_video: buf.modes.decscnm,
            alternate_active: active == BufferKind::Alternate,
            window_title: &self.window_title,
            bell_count,
            dirty_rows,
        }
    }

    /// Current number of rows held in scrollback (spec §4.8: "a separate
    /// operation returns the current scrollback length").
    #[must_use]
    pub fn scrollback_len(&self) -> usize {
        self.scrollback.len()
    }

    /// Row-wise scrollback access, `0` = most recently evicted. Rows are
    /// stored at the width they were evicted with (spec §4.6); the
    /// caller is responsible for truncating/padding to the current
    /// width.
    #[must_use]
    pub fn scrollback_row(&self, index_from_newest: usize) -> Option<&[Cell]> {
        self.scrollback.row_at(index_from_newest).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::model::emulator::Emulator;

    #[test]
    fn snapshot_resets_bell_and_dirty_rows() {
        let mut emu = Emulator::new(Config::new(4, 10)).unwrap();
        emu.feed_bytes(b"hi\x07");

        let snap = emu.snapshot();
        assert_eq!(snap.bell_count, 1);
        assert!(snap.is_row_dirty(0));
        drop(snap);

        let snap2 = emu.snapshot();
        assert_eq!(snap2.bell_count, 0);
        assert!(snap2.dirty_rows.is_empty());
    }

    #[test]
    fn snapshot_reflects_alternate_buffer_switch() {
        let mut emu = Emulator::new(Config::new(4, 10)).unwrap();
        emu.feed_bytes(b"\x1b[?1049h");
        let snap = emu.snapshot();
        assert!(snap.alternate_active);
    }

    #[test]
    fn snapshot_reverse_video_tracks_decscnm() {
        let mut emu = Emulator::new(Config::new(4, 10)).unwrap();
        emu.feed_bytes(b"\x1b[?5h");
        assert!(emu.snapshot().reverse_video);
        emu.feed_bytes(b"\x1b[?5l");
        assert!(!emu.snapshot().reverse_video);
    }

    #[test]
    fn scrollback_row_access_after_scroll() {
        let mut emu = Emulator::new(Config::new(2, 10)).unwrap();
        emu.feed_bytes(b"first\r\nsecond\r\nthird");
        assert!(emu.scrollback_len() >= 1);
        assert!(emu.scrollback_row(0).is_some());
    }
}
