#![forbid(unsafe_code)]

//! Incremental disclosure window.
//!
//! The window is a requested prefix length. It starts at [`BATCH_SIZE`],
//! grows by [`BATCH_SIZE`] each time the viewport reaches the bottom, and
//! snaps back to [`BATCH_SIZE`] whenever the sort or filter changes. The
//! only upper bound is the length of the collection being sliced: asking for
//! more rows than exist is clamped, never an error.

/// Initial window size and growth step.
pub const BATCH_SIZE: usize = 10;

/// Requested prefix length into the sorted, filtered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleWindow {
    requested: usize,
}

impl Default for VisibleWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibleWindow {
    /// A window of one batch.
    pub const fn new() -> Self {
        Self {
            requested: BATCH_SIZE,
        }
    }

    /// The requested size (may exceed the rows available).
    pub const fn requested(&self) -> usize {
        self.requested
    }

    /// Back to one batch.
    pub fn reset(&mut self) {
        self.requested = BATCH_SIZE;
    }

    /// Request one more batch.
    pub fn grow(&mut self) {
        self.requested = self.requested.saturating_add(BATCH_SIZE);
    }

    /// Grow only if rows beyond the current window exist.
    ///
    /// Returns `true` if the window grew.
    pub fn grow_within(&mut self, total: usize) -> bool {
        if self.is_exhausted(total) {
            return false;
        }
        self.grow();
        true
    }

    /// True once every one of `total` rows is inside the window.
    pub const fn is_exhausted(&self, total: usize) -> bool {
        self.requested >= total
    }

    /// Number of rows shown out of `total`.
    pub fn visible_len(&self, total: usize) -> usize {
        self.requested.min(total)
    }

    /// The visible prefix of `rows`.
    pub fn visible_slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        &rows[..self.visible_len(rows.len())]
    }
}
