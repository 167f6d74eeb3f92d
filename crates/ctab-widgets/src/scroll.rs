#![forbid(unsafe_code)]

//! Scroll position and the "reached the bottom" test.

/// Slack, in rows, when deciding whether the viewport touches the bottom.
pub const BOTTOM_EPSILON: f64 = 0.5;

/// A snapshot of a scrollable region.
///
/// All three values are non-negative and measured in the same unit (rows
/// for the terminal table).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollGeometry {
    /// Distance scrolled from the top.
    pub offset: f64,
    /// Height of the visible part.
    pub viewport: f64,
    /// Height of the whole content.
    pub content: f64,
}

impl ScrollGeometry {
    /// Geometry from raw measurements.
    pub const fn new(offset: f64, viewport: f64, content: f64) -> Self {
        Self {
            offset,
            viewport,
            content,
        }
    }

    /// Geometry of a row-based list.
    pub fn from_rows(offset: usize, viewport: usize, content: usize) -> Self {
        Self::new(offset as f64, viewport as f64, content as f64)
    }

    /// True when the bottom edge of the viewport has reached the end of the
    /// content. Zero viewport or zero content never counts.
    pub fn is_at_bottom(&self) -> bool {
        if self.viewport <= 0.0 || self.content <= 0.0 {
            return false;
        }
        self.offset + self.viewport + BOTTOM_EPSILON >= self.content
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> f64 {
        (self.content - self.viewport).max(0.0)
    }
}

/// Largest first-row index for `content` rows in a `viewport`-row window.
pub(crate) fn max_row_offset(content: usize, viewport: usize) -> usize {
    content.saturating_sub(viewport)
}
