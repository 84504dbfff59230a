//! End-to-end scenarios against the public `Emulator` API, one per
//! literal case in spec.md §8 plus a handful of the universal invariants
//! it names (P2/P3/P5/P6/P7).

use pretty_assertions::assert_eq;

use raxol_core::model::color::Color;
use raxol_core::{Config, Emulator};

fn emu(rows: u16, cols: u16) -> Emulator {
    Emulator::new(Config::new(rows, cols)).unwrap()
}

#[test]
fn plain_text() {
    let mut e = emu(24, 80);
    e.feed_bytes(b"Hello");

    let snap = e.snapshot();
    let row = snap.row(0);
    assert_eq!(row[0].ch, 'H');
    assert_eq!(row[1].ch, 'e');
    assert_eq!(row[2].ch, 'l');
    assert_eq!(row[3].ch, 'l');
    assert_eq!(row[4].ch, 'o');
    assert_eq!(row[5].ch, ' ');
    assert_eq!(snap.cursor.row, 0);
    assert_eq!(snap.cursor.col, 5);
    assert_eq!(snap.dirty_rows, vec![0]);
}

#[test]
fn sgr_then_reset_then_text() {
    let mut e = emu(24, 80);
    e.feed_bytes(b"\x1b[31mRed\x1b[0m Normal");

    let snap = e.snapshot();
    let row = snap.row(0);
    assert_eq!(row[0].ch, 'R');
    assert_eq!(row[0].style.fg, Color::Indexed(1));
    assert_eq!(row[1].style.fg, Color::Indexed(1));
    assert_eq!(row[2].style.fg, Color::Indexed(1));
    // The space and "Normal" were printed after `CSI 0 m`: default style.
    assert_eq!(row[3].style.fg, Color::Default);
    assert_eq!(row[4].ch, 'N');
    assert_eq!(row[4].style.fg, Color::Default);
    assert_eq!(snap.cursor.col, 10);
}

#[test]
fn autowrap_sets_pending_then_wraps_on_next_char() {
    let mut e = emu(24, 80);
    e.feed_bytes(&vec![b'X'; 80]);
    {
        let snap = e.snapshot();
        assert_eq!(snap.cursor.row, 0);
        assert_eq!(snap.cursor.col, 79);
        assert_eq!(snap.row(0)[79].ch, 'X');
    }

    e.feed_bytes(b"X");
    let snap = e.snapshot();
    assert_eq!(snap.cursor.row, 1);
    assert_eq!(snap.cursor.col, 1);
    assert_eq!(snap.row(1)[0].ch, 'X');
}

#[test]
fn scroll_into_scrollback_bounded_by_capacity() {
    let mut e = Emulator::new({
        let mut c = Config::new(24, 80);
        c.scrollback_capacity = 10;
        c
    })
    .unwrap();

    for k in 1..=30 {
        e.feed_bytes(format!("L{k}\r\n").as_bytes());
    }

    // Rows 0..22 fill with L1..L23 without scrolling; row 23 only
    // becomes the scroll-triggering bottom row once it's written to, so
    // the region scrolls once per line from L24 through L30 — 7
    // evictions total, comfortably under the capacity of 10.
    assert_eq!(e.scrollback_len(), 7);

    let snap = e.snapshot();
    assert_eq!(snap.cursor.row, 23);
    assert_eq!(snap.cursor.col, 0);
    let second_to_last_row = snap.row(22);
    assert_eq!(second_to_last_row[0].ch, 'L');
    assert_eq!(second_to_last_row[1].ch, '3');
    assert_eq!(second_to_last_row[2].ch, '0');
    assert_eq!(snap.row(23)[0].ch, ' ');
}

#[test]
fn alt_buffer_1049_round_trip() {
    let mut e = emu(24, 80);
    e.feed_bytes(b"before");
    let before_cursor = e.snapshot().cursor;
    let before_row0: Vec<char> = e.snapshot().row(0).iter().map(|c| c.ch).collect();

    e.feed_bytes(b"\x1b[?1049h");
    assert!(e.snapshot().alternate_active);
    e.feed_bytes(b"ALT SCREEN CONTENT");

    e.feed_bytes(b"\x1b[?1049l");
    let snap = e.snapshot();
    assert!(!snap.alternate_active);
    assert_eq!(snap.cursor.row, before_cursor.row);
    assert_eq!(snap.cursor.col, before_cursor.col);
    let after_row0: Vec<char> = snap.row(0).iter().map(|c| c.ch).collect();
    assert_eq!(after_row0, before_row0);
}

#[test]
fn cup_honors_decom_scroll_region() {
    let mut e = emu(24, 80);
    e.feed_bytes(b"\x1b[5;10r"); // DECSTBM: region rows 5..10 (1-based)
    e.feed_bytes(b"\x1b[?6h"); // DECOM on
    e.feed_bytes(b"\x1b[1;1H"); // CUP to region-relative (1,1)

    let snap = e.snapshot();
    // Region row 1 == absolute row 5 (one-based) == index 4.
    assert_eq!(snap.cursor.row, 4);
    assert_eq!(snap.cursor.col, 0);
}

#[test]
fn wide_cell_write_repairs_neighbors() {
    let mut e = emu(5, 10);
    e.feed_bytes("你".as_bytes());
    {
        let snap = e.snapshot();
        assert_eq!(snap.row(0)[0].ch, '你');
        assert!(snap.row(0)[1].wide_cont);
        assert_eq!(snap.cursor.col, 2);
    }

    // Overwriting the wide cell's left half with a narrow char must
    // repair the stranded continuation cell (invariant 2).
    e.feed_bytes(b"\x1b[1;1Ha");
    let snap = e.snapshot();
    assert_eq!(snap.row(0)[0].ch, 'a');
    assert!(!snap.row(0)[1].wide_cont);
}

#[test]
fn printable_ascii_count_invariant() {
    let mut e = emu(10, 40);
    e.feed_bytes(b"\x1b[?7l"); // DECAWM off
    let text: Vec<u8> = std::iter::repeat(b'a').take(57).collect();
    e.feed_bytes(&text);

    let snap = e.snapshot();
    assert_eq!(snap.cursor.row, 0);
    assert_eq!(snap.cursor.col, 39); // min(L, cols-1) with L=57, cols=40
}

#[test]
fn resize_round_trip_preserves_content_without_truncation() {
    let mut e = emu(24, 80);
    e.feed_bytes(b"hello world");
    let before: Vec<char> = e.snapshot().row(0).iter().map(|c| c.ch).collect();

    e.resize(24, 120);
    e.resize(24, 80);

    let after: Vec<char> = e.snapshot().row(0).iter().map(|c| c.ch).collect();
    assert_eq!(before, after);
}

#[test]
fn sgr_reset_is_idempotent() {
    let mut e = emu(5, 10);
    e.feed_bytes(b"\x1b[31;1m\x1b[0m\x1b[0mX");
    let snap = e.snapshot();
    assert_eq!(snap.row(0)[0].style, raxol_core::model::color::StyleAttr::reset());
}

fn all_chars(e: &mut Emulator, rows: u16) -> Vec<char> {
    let snap = e.snapshot();
    (0..rows).flat_map(|r| snap.row(r).iter().map(|c| c.ch)).collect()
}

#[test]
fn ed_2_then_cup_home_is_idempotent() {
    let mut e = emu(5, 10);
    e.feed_bytes(b"stuff here\x1b[2J\x1b[H");
    let first = all_chars(&mut e, 5);
    e.feed_bytes(b"\x1b[2J\x1b[H");
    let second = all_chars(&mut e, 5);
    assert_eq!(first, second);
    let snap = e.snapshot();
    assert_eq!(snap.cursor.row, 0);
    assert_eq!(snap.cursor.col, 0);
}

#[test]
fn bell_count_and_dirty_rows_reset_on_snapshot() {
    let mut e = emu(5, 10);
    e.feed_bytes(b"a\x07b\x07\x07");
    let snap = e.snapshot();
    assert_eq!(snap.bell_count, 3);
    drop(snap);
    assert_eq!(e.snapshot().bell_count, 0);
}

#[test]
fn device_status_report_is_queued_for_the_host() {
    let mut e = emu(5, 10);
    e.feed_bytes(b"\x1b[6n");
    let resp = e.take_pending_responses();
    assert_eq!(resp, b"\x1b[1;1R");
}

#[test]
fn dcs_payload_is_stashed_not_rasterized() {
    let mut e = emu(5, 10);
    e.feed_bytes(b"\x1bPq#0;2;0;0;0#0!10~-\x1b\\");
    // Accepted without panicking or corrupting subsequent parsing.
    e.feed_bytes(b"after");
    let snap = e.snapshot();
    assert_eq!(snap.row(0)[0].ch, 'a');
}
