//! Bounded, append-only history of evicted rows.

use std::collections::VecDeque;

use super::cell::Cell;

pub type Row = Vec<Cell>;

/// Bounded FIFO of rows scrolled off the top of the primary buffer's scroll
/// region. Stored at the width they were evicted with (spec §4.6: "never
/// re-wrapped by resize").
#[derive(Debug, Clone)]
pub struct Scrollback {
    capacity: usize,
    rows: VecDeque<Row>,
}

impl Scrollback {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity, rows: VecDeque::with_capacity(capacity.min(256)) }
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.rows.len() > capacity {
            self.rows.pop_front();
        }
    }

    pub fn append_row(&mut self, row: Row) {
        if self.capacity == 0 {
            return;
        }
        if self.rows.len() == self.capacity {
            self.rows.pop_front();
        }
        self.rows.push_back(row);
    }

    /// Pop the single most-recently-evicted row, for resize growth pulling
    /// rows back into the primary buffer.
    pub fn pop_newest(&mut self) -> Option<Row> {
        self.rows.pop_back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row access by index from newest (0 = most recently evicted).
    #[must_use]
    pub fn row_at(&self, index_from_newest: usize) -> Option<&Row> {
        let len = self.rows.len();
        let idx = len.checked_sub(1)?.checked_sub(index_from_newest)?;
        self.rows.get(idx)
    }
}
