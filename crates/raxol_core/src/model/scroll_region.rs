//! Vertical (and optional horizontal, DECLRMM) scroll region.

/// `{top, bottom}` rows, inclusive, 0-indexed, plus an optional
/// `{left, right}` horizontal region when DECLRMM is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRegion {
    pub top: u16,
    pub bottom: u16,
    pub left: Option<u16>,
    pub right: Option<u16>,
}

impl ScrollRegion {
    #[must_use]
    pub fn full(rows: u16) -> Self {
        Self {
            top: 0,
            bottom: rows.saturating_sub(1),
            left: None,
            right: None,
        }
    }

    #[must_use]
    pub fn left_col(&self) -> u16 {
        self.left.unwrap_or(0)
    }

    #[must_use]
    pub fn right_col(&self, cols: u16) -> u16 {
        self.right.unwrap_or(cols.saturating_sub(1))
    }

    /// Whether this region spans the entire buffer width — the condition
    /// under which a primary-buffer scroll evicts into scrollback.
    #[must_use]
    pub fn is_full_width(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Clamp to the new dimensions, invariant 3 (`top <= bottom < rows`).
    pub fn clamp(&mut self, rows: u16, cols: u16) {
        self.bottom = self.bottom.min(rows.saturating_sub(1));
        self.top = self.top.min(self.bottom);
        if let Some(r) = self.right {
            self.right = Some(r.min(cols.saturating_sub(1)));
        }
        if let Some(l) = self.left {
            self.left = Some(l.min(self.right_col(cols)));
        }
    }
}
