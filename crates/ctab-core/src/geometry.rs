#![forbid(unsafe_code)]

//! Geometric primitives.

/// A rectangle in terminal cell coordinates (0-indexed, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Split off the top `rows` lines.
    ///
    /// Returns `(top, rest)`. `top` is clamped to the available height.
    pub fn split_top(&self, rows: u16) -> (Rect, Rect) {
        let taken = rows.min(self.height);
        let top = Rect::new(self.x, self.y, self.width, taken);
        let rest = Rect::new(
            self.x,
            self.y.saturating_add(taken),
            self.width,
            self.height - taken,
        );
        (top, rest)
    }

    /// Split off the bottom `rows` lines.
    ///
    /// Returns `(rest, bottom)`. `bottom` is clamped to the available height.
    pub fn split_bottom(&self, rows: u16) -> (Rect, Rect) {
        let taken = rows.min(self.height);
        let rest = Rect::new(self.x, self.y, self.width, self.height - taken);
        let bottom = Rect::new(self.x, self.bottom() - taken, self.width, taken);
        (rest, bottom)
    }

    /// The single row at `offset` lines below the top edge.
    ///
    /// Returns an empty rectangle when `offset` is outside the area.
    pub fn row(&self, offset: u16) -> Rect {
        if offset >= self.height {
            return Rect::new(self.x, self.bottom(), self.width, 0);
        }
        Rect::new(self.x, self.y + offset, self.width, 1)
    }
}
