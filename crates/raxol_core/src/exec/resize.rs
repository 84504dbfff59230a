//! Reflow on resize (spec §4.5 "Resize contract"): rewrap continuing
//! lines at the new width, then grow/shrink the row count against
//! scrollback.

use crate::model::buffer::{self, Buffer};
use crate::model::cell::Cell;
use crate::model::color::StyleAttr;
use crate::model::scrollback::Scrollback;

/// Resize `buf` to `(new_rows, new_cols)` in place.
///
/// `allow_scrollback` is true only for the primary buffer: the alternate
/// screen never reads from or writes to scrollback (spec §4.6).
pub(crate) fn resize_buffer(
    buf: &mut Buffer,
    scrollback: &mut Scrollback,
    new_rows: u16,
    new_cols: u16,
    reflow: bool,
    allow_scrollback: bool,
) {
    let old_rows = buf.rows();
    let old_cols = buf.cols();
    let style = StyleAttr::reset();

    // Track which content row/col the cursor sits on through the reflow,
    // so it lands on the same logical character afterward.
    let cursor_row = buf.cursor.row.min(old_rows.saturating_sub(1));
    let cursor_col = buf.cursor.col;

    let (mut content, mut cursor_content_row, cursor_content_col) =
        if reflow && new_cols != old_cols {
            rewrap(buf, old_rows, old_cols, new_cols, cursor_row, cursor_col)
        } else {
            truncate_or_pad(buf, old_rows, new_cols, cursor_row, cursor_col)
        };

    fit_row_count(
        &mut content,
        scrollback,
        new_rows,
        new_cols,
        allow_scrollback,
        &mut cursor_content_row,
        style,
    );

    let (cell_rows, wrapped): (Vec<Vec<Cell>>, Vec<bool>) =
        content.into_iter().map(|row| (row.cells, row.wrapped)).unzip();
    buf.rebuild(new_rows, new_cols, cell_rows, wrapped);

    buf.cursor.row = cursor_content_row.min(new_rows.saturating_sub(1));
    buf.cursor.col = cursor_content_col.min(new_cols.saturating_sub(1));
    buf.cursor.pending_wrap = false;

    buf.scroll_region.clamp(new_rows, new_cols);

    if new_cols != old_cols {
        buf.tab_stops = buffer::default_tab_stops(new_cols);
    } else {
        buf.tab_stops.retain(|&c| c < new_cols);
    }
}

struct ContentRow {
    cells: Vec<Cell>,
    wrapped: bool,
}

/// Concatenate auto-wrapped continuation runs into logical lines, then
/// re-split each at `new_cols`, carrying the cursor's logical position
/// along with it.
fn rewrap(
    buf: &Buffer,
    old_rows: u16,
    old_cols: u16,
    new_cols: u16,
    cursor_row: u16,
    cursor_col: u16,
) -> (Vec<ContentRow>, u16, u16) {
    let mut out = Vec::with_capacity(old_rows as usize);
    let mut cursor_target: Option<(u16, u16)> = None;

    let mut run: Vec<Cell> = Vec::new();
    let mut run_cursor_offset: Option<usize> = None;
    let mut r = 0u16;
    while r < old_rows {
        let start_of_run = run.is_empty();
        if start_of_run && r == cursor_row {
            run_cursor_offset = Some(cursor_col.min(old_cols) as usize);
        } else if !start_of_run && r == cursor_row {
            run_cursor_offset = Some(run.len() + cursor_col.min(old_cols) as usize);
        }
        run.extend_from_slice(buf.row(r));
        let continues = buf.row_wrapped(r) && r + 1 < old_rows;
        if !continues {
            let split = split_logical_line(&run, new_cols, run_cursor_offset);
            if let Some((row_idx, col)) = split.cursor {
                cursor_target = Some((out.len() as u16 + row_idx as u16, col));
            }
            out.extend(split.rows);
            run = Vec::new();
            run_cursor_offset = None;
        }
        r += 1;
    }

    let (row, col) = cursor_target.unwrap_or((0, 0));
    (out, row, col)
}

struct LogicalSplit {
    rows: Vec<ContentRow>,
    cursor: Option<(usize, u16)>,
}

fn split_logical_line(
    line: &[Cell],
    new_cols: u16,
    cursor_offset: Option<usize>,
) -> LogicalSplit {
    let new_cols = new_cols.max(1) as usize;
    let chunk_count = line.len().div_ceil(new_cols).max(1);
    let mut rows = Vec::with_capacity(chunk_count);
    for i in 0..chunk_count {
        let start = i * new_cols;
        let end = (start + new_cols).min(line.len());
        let mut cells: Vec<Cell> = line[start..end].to_vec();
        cells.resize(new_cols, Cell::blank(StyleAttr::reset()));
        rows.push(ContentRow { cells, wrapped: i + 1 < chunk_count });
    }
    let cursor = cursor_offset.map(|offset| {
        let row_idx = (offset / new_cols).min(chunk_count.saturating_sub(1));
        let col = (offset % new_cols) as u16;
        (row_idx, col)
    });
    LogicalSplit { rows, cursor }
}

/// Column-unchanged (or reflow-disabled) fallback: keep every row as-is,
/// truncating or padding each to `new_cols`.
fn truncate_or_pad(
    buf: &Buffer,
    old_rows: u16,
    new_cols: u16,
    cursor_row: u16,
    cursor_col: u16,
) -> (Vec<ContentRow>, u16, u16) {
    let mut out = Vec::with_capacity(old_rows as usize);
    for r in 0..old_rows {
        let mut cells = buf.row(r).to_vec();
        cells.resize(new_cols as usize, Cell::blank(StyleAttr::reset()));
        out.push(ContentRow { cells, wrapped: buf.row_wrapped(r) });
    }
    (out, cursor_row, cursor_col.min(new_cols.saturating_sub(1)))
}

/// Fit `content` into exactly `new_rows` rows, shifting the surplus or
/// deficit against `scrollback` when `allow_scrollback` (spec §4.5 "Rows").
fn fit_row_count(
    content: &mut Vec<ContentRow>,
    scrollback: &mut Scrollback,
    new_rows: u16,
    new_cols: u16,
    allow_scrollback: bool,
    cursor_row: &mut u16,
    style: StyleAttr,
) {
    let new_rows = new_rows as usize;

    if content.len() > new_rows {
        let excess = content.len() - new_rows;
        let max_from_top = (*cursor_row as usize).min(excess);
        let from_top = if allow_scrollback { max_from_top } else { 0 };
        for row in content.drain(..from_top) {
            scrollback.append_row(fit_row_width(row.cells, new_cols, style));
        }
        *cursor_row -= from_top as u16;
        let remaining_excess = content.len().saturating_sub(new_rows);
        if remaining_excess > 0 {
            content.truncate(new_rows);
            *cursor_row = (*cursor_row as usize).min(new_rows.saturating_sub(1)) as u16;
        }
    } else if content.len() < new_rows {
        let mut deficit = new_rows - content.len();
        if allow_scrollback {
            let mut pulled = Vec::new();
            while deficit > 0 {
                match scrollback.pop_newest() {
                    Some(row) => {
                        pulled.push(ContentRow {
                            cells: fit_row_width(row, new_cols, style),
                            wrapped: false,
                        });
                        deficit -= 1;
                    }
                    None => break,
                }
            }
            *cursor_row += pulled.len() as u16;
            pulled.reverse();
            content.splice(0..0, pulled);
        }
        while content.len() < new_rows {
            content.push(ContentRow {
                cells: vec![Cell::blank(style); new_cols as usize],
                wrapped: false,
            });
        }
    }
}

fn fit_row_width(mut row: Vec<Cell>, cols: u16, style: StyleAttr) -> Vec<Cell> {
    row.resize(cols as usize, Cell::blank(style));
    row
}
