//! Dirty-row tracking: a growable bitset over row indices.
//!
//! Shaped like the word-packed flag sets the teacher builds with
//! `bitflags` elsewhere (`CursorStateFlags`, `LinuxCursorStyleFlags`) —
//! rows are packed as bits of `u64` words rather than one `bool` per row.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirtyRows {
    words: Vec<u64>,
}

impl DirtyRows {
    #[must_use]
    pub fn new(rows: usize) -> Self {
        let word_count = rows.div_ceil(64);
        Self { words: vec![0; word_count] }
    }

    pub fn resize(&mut self, rows: usize) {
        self.words.resize(rows.div_ceil(64), 0);
    }

    pub fn mark(&mut self, row: usize) {
        if let Some(word) = self.words.get_mut(row / 64) {
            *word |= 1 << (row % 64);
        }
    }

    #[must_use]
    pub fn is_dirty(&self, row: usize) -> bool {
        self.words
            .get(row / 64)
            .is_some_and(|word| word & (1 << (row % 64)) != 0)
    }

    pub fn clear(&mut self) {
        for word in &mut self.words {
            *word = 0;
        }
    }

    #[must_use]
    pub fn iter_set(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            (0..64).filter_map(move |bit| {
                (word & (1 << bit) != 0).then_some(wi * 64 + bit)
            })
        })
    }
}
