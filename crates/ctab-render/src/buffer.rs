#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! Cells are stored row-major (`index = y * width + x`). Width and height are
//! fixed at creation; a terminal resize allocates a new buffer. Clusters of
//! more than one code point live in the buffer's [`GraphemePool`].
//!
//! # Example
//!
//! ```
//! use ctab_render::buffer::Buffer;
//! use ctab_render::style::Style;
//!
//! let mut buf = Buffer::new(8, 1);
//! buf.draw_str(0, 0, "Hi", Style::new(), 8);
//! assert_eq!(buf.to_text(), "Hi      ");
//! ```

use ctab_core::geometry::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::cell::{Cell, CellContent, GraphemeId};
use crate::grapheme_pool::GraphemePool;
use crate::style::Style;

/// A 2D grid of terminal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    pool: GraphemePool,
}

impl Buffer {
    /// Create a buffer filled with empty cells.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
            pool: GraphemePool::new(),
        }
    }

    /// Width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The whole buffer as a rectangle.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Cell at `(x, y)`, or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Mutable cell at `(x, y)`, or `None` out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Replace the cell at `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// The cells of row `y` (empty slice when out of bounds).
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Fill `rect` (clipped to the buffer) with `cell`.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                self.set(x, y, cell);
            }
        }
    }

    /// Reset every cell to empty and forget interned clusters.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.pool.clear();
    }

    /// The cluster behind `id`, if this buffer interned it.
    pub fn grapheme(&self, id: GraphemeId) -> Option<&str> {
        self.pool.get(id)
    }

    /// Text drawn in `cell`, or `None` for empty and continuation cells.
    ///
    /// `cell` must come from this buffer for grapheme ids to resolve.
    pub fn cell_text<'a>(&'a self, cell: &'a Cell, scratch: &'a mut [u8; 4]) -> Option<&'a str> {
        match cell.content {
            CellContent::Char(c) => Some(c.encode_utf8(scratch)),
            CellContent::Grapheme(id) => self.pool.get(id),
            CellContent::Empty | CellContent::Continuation => None,
        }
    }

    /// Apply `style` to every cell in `rect`, keeping content.
    pub fn set_style(&mut self, rect: Rect, style: Style) {
        if style.is_empty() {
            return;
        }
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    style.apply_to(cell);
                }
            }
        }
    }

    /// Draw `text` starting at `(x, y)`, stopping before `max_x`.
    ///
    /// Wide graphemes take their full width (head cell plus continuation
    /// cells) and are skipped entirely if they would cross `max_x`.
    /// Returns the column after the last drawn grapheme.
    pub fn draw_str(&mut self, mut x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
        let max_x = max_x.min(self.width);
        for grapheme in text.graphemes(true) {
            if x >= max_x {
                break;
            }
            let w = UnicodeWidthStr::width(grapheme);
            if w == 0 {
                continue;
            }
            let w = w as u16;
            if x.saturating_add(w) > max_x {
                break;
            }
            let mut chars = grapheme.chars();
            let content = match (chars.next(), chars.next()) {
                (Some(c), None) => CellContent::Char(c),
                (Some(_), Some(_)) => CellContent::Grapheme(self.pool.intern(grapheme)),
                (None, _) => continue,
            };
            let mut head = self.get(x, y).copied().unwrap_or_default();
            head.content = content;
            style.apply_to(&mut head);
            self.set(x, y, head);
            for dx in 1..w {
                let mut tail = Cell::CONTINUATION;
                tail.bg = head.bg;
                self.set(x + dx, y, tail);
            }
            x += w;
        }
        x
    }

    /// Plain-text dump, rows joined by `\n`; empty cells become spaces and
    /// continuation cells are skipped.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            if y > 0 {
                out.push('\n');
            }
            out.push_str(&self.row_text(y));
        }
        out
    }

    /// Plain text of a single row.
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::with_capacity(self.width as usize);
        let mut scratch = [0u8; 4];
        for cell in self.row_cells(y) {
            if cell.is_continuation() {
                continue;
            }
            out.push_str(self.cell_text(cell, &mut scratch).unwrap_or(" "));
        }
        out
    }
}
