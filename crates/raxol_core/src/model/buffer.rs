//! The 2-D grid of cells plus the per-buffer state that travels with it.

use std::collections::{BTreeSet, HashMap};

use super::cell::Cell;
use super::color::StyleAttr;
use super::cursor::{CharsetState, Cursor, SavedCursor};
use super::dirty::DirtyRows;
use super::modes::Modes;
use super::scroll_region::ScrollRegion;

/// One of the two screens an `Emulator` owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    Primary,
    Alternate,
}

/// `{cells, cursor, saved_cursor, charset_state, modes, scroll_region,
/// tab_stops, dirty_rows}` per spec §3.
#[derive(Debug, Clone)]
pub struct Buffer {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
    /// Per-row auto-wrap flag, consulted by resize reflow (§4.5).
    wrapped: Vec<bool>,
    pub cursor: Cursor,
    pub saved_cursor: SavedCursor,
    pub charset_state: CharsetState,
    pub modes: Modes,
    pub scroll_region: ScrollRegion,
    pub tab_stops: BTreeSet<u16>,
    pub dirty_rows: DirtyRows,
    /// Raw Sixel/unrecognized DCS payloads, keyed by the row the cursor
    /// was on when they were stashed (spec §4.3 "DCS": accepted, not
    /// rasterized).
    pub graphics: HashMap<u16, Vec<u8>>,
}

impl Buffer {
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        let cells = vec![Cell::default(); rows as usize * cols as usize];
        Self {
            rows,
            cols,
            cells,
            wrapped: vec![false; rows as usize],
            cursor: Cursor::default(),
            saved_cursor: SavedCursor::default(),
            charset_state: CharsetState::default(),
            modes: Modes::default(),
            scroll_region: ScrollRegion::full(rows),
            tab_stops: default_tab_stops(cols),
            dirty_rows: DirtyRows::new(rows as usize),
            graphics: HashMap::new(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    fn index(&self, row: u16, col: u16) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    #[must_use]
    pub fn cell(&self, row: u16, col: u16) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    pub fn cell_mut(&mut self, row: u16, col: u16) -> &mut Cell {
        let idx = self.index(row, col);
        &mut self.cells[idx]
    }

    #[must_use]
    pub fn row(&self, row: u16) -> &[Cell] {
        let start = row as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    pub fn row_mut(&mut self, row: u16) -> &mut [Cell] {
        let start = row as usize * self.cols as usize;
        let cols = self.cols as usize;
        &mut self.cells[start..start + cols]
    }

    pub fn mark_dirty(&mut self, row: u16) {
        self.dirty_rows.mark(row as usize);
    }

    #[must_use]
    pub fn row_wrapped(&self, row: u16) -> bool {
        self.wrapped.get(row as usize).copied().unwrap_or(false)
    }

    pub fn set_row_wrapped(&mut self, row: u16, wrapped: bool) {
        if let Some(slot) = self.wrapped.get_mut(row as usize) {
            *slot = wrapped;
        }
    }

    /// Replace a row in-place with blanks of `style`, without touching the
    /// wrapped flag (callers that clear-via-scroll manage that flag
    /// themselves).
    pub fn clear_row(&mut self, row: u16, style: StyleAttr) {
        for cell in self.row_mut(row) {
            *cell = Cell::blank(style);
        }
        self.mark_dirty(row);
    }

    /// Move `n` rows worth of cells by `rows`*cols cells, used by
    /// scroll_up/scroll_down and resize row insertion. Returns the evicted
    /// rows (as owned `Vec<Cell>` rows) when scrolling up within the full
    /// buffer, so the caller can push them onto scrollback.
    pub fn shift_rows_up(
        &mut self,
        top: u16,
        bottom: u16,
        n: u16,
        fill_style: StyleAttr,
    ) -> Vec<Vec<Cell>> {
        let n = n.min(bottom - top + 1);
        let mut evicted = Vec::with_capacity(n as usize);
        for r in top..top + n {
            evicted.push(self.row(r).to_vec());
        }
        for r in top..=bottom {
            let src = r + n;
            if src <= bottom {
                let (src_start, dst_start) = (
                    src as usize * self.cols as usize,
                    r as usize * self.cols as usize,
                );
                let cols = self.cols as usize;
                self.cells.copy_within(src_start..src_start + cols, dst_start);
                let src_wrapped = self.wrapped[src as usize];
                self.wrapped[r as usize] = src_wrapped;
            } else {
                self.clear_row(r, fill_style);
                self.wrapped[r as usize] = false;
            }
            self.mark_dirty(r);
        }
        evicted
    }

    /// Replace the grid wholesale with `rows'` rows of `cols'` cells each,
    /// used by resize reflow (`exec::resize`). `cell_rows` must contain
    /// exactly `rows` rows of exactly `cols` cells; `wrapped` must have
    /// `rows` entries.
    pub(crate) fn rebuild(
        &mut self,
        rows: u16,
        cols: u16,
        cell_rows: Vec<Vec<Cell>>,
        wrapped: Vec<bool>,
    ) {
        self.rows = rows;
        self.cols = cols;
        self.cells = cell_rows.into_iter().flatten().collect();
        self.wrapped = wrapped;
        self.dirty_rows.resize(rows as usize);
        for r in 0..rows {
            self.mark_dirty(r);
        }
        self.graphics.clear();
    }

    pub fn shift_rows_down(
        &mut self,
        top: u16,
        bottom: u16,
        n: u16,
        fill_style: StyleAttr,
    ) {
        let n = n.min(bottom - top + 1);
        let mut r = bottom;
        loop {
            if r >= top + n {
                let src = r - n;
                let (src_start, dst_start) = (
                    src as usize * self.cols as usize,
                    r as usize * self.cols as usize,
                );
                let cols = self.cols as usize;
                self.cells.copy_within(src_start..src_start + cols, dst_start);
                self.wrapped[r as usize] = self.wrapped[src as usize];
            } else {
                self.clear_row(r, fill_style);
                self.wrapped[r as usize] = false;
            }
            self.mark_dirty(r);
            if r == top {
                break;
            }
            r -= 1;
        }
    }
}

pub(crate) fn default_tab_stops(cols: u16) -> BTreeSet<u16> {
    (0..cols).step_by(8).collect()
}
