#![forbid(unsafe_code)]

//! Terminal cells.
//!
//! A [`Cell`] is one column of one row: its content, colors, and attribute
//! flags. Characters wider than one column occupy a head cell followed by
//! [`CellContent::Continuation`] cells.

/// Reference to a grapheme cluster interned in a
/// [`GraphemePool`](crate::grapheme_pool::GraphemePool).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphemeId(u32);

impl GraphemeId {
    pub(crate) const fn new(slot: u32) -> Self {
        Self(slot)
    }

    /// Slot index in the owning pool.
    #[inline]
    pub const fn slot(self) -> u32 {
        self.0
    }
}

/// What a cell displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellContent {
    /// Nothing drawn; presented as a space.
    #[default]
    Empty,
    /// A single character.
    Char(char),
    /// A multi-code-point cluster, resolved through the buffer's pool.
    Grapheme(GraphemeId),
    /// Trailing column of a wide character drawn in a cell to the left.
    Continuation,
}

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's default color.
    #[default]
    Reset,
    /// A 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self::Rgb(255, 255, 255);
    /// Pure red.
    pub const RED: Self = Self::Rgb(255, 0, 0);
    /// Pure blue.
    pub const BLUE: Self = Self::Rgb(0, 0, 255);
    /// CSS `lightblue` (`#ADD8E6`).
    pub const LIGHT_BLUE: Self = Self::Rgb(0xAD, 0xD8, 0xE6);

    /// Parse a `#RRGGBB` hex string.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

bitflags::bitflags! {
    /// Cell attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD      = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM       = 0b0000_0010;
        /// Italic.
        const ITALIC    = 0b0000_0100;
        /// Underline.
        const UNDERLINE = 0b0000_1000;
        /// Swap foreground and background.
        const REVERSE   = 0b0001_0000;
    }
}

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// Content.
    pub content: CellContent,
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Attribute flags.
    pub attrs: StyleFlags,
}

impl Cell {
    /// Continuation cell for the trailing columns of a wide character.
    pub const CONTINUATION: Self = Self {
        content: CellContent::Continuation,
        fg: Color::Reset,
        bg: Color::Reset,
        attrs: StyleFlags::empty(),
    };

    /// A cell holding `c` with default colors.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self {
            content: CellContent::Char(c),
            fg: Color::Reset,
            bg: Color::Reset,
            attrs: StyleFlags::empty(),
        }
    }

    /// The character in this cell, if any.
    #[inline]
    pub const fn as_char(&self) -> Option<char> {
        match self.content {
            CellContent::Char(c) => Some(c),
            _ => None,
        }
    }

    /// The interned cluster in this cell, if any.
    #[inline]
    pub const fn grapheme_id(&self) -> Option<GraphemeId> {
        match self.content {
            CellContent::Grapheme(id) => Some(id),
            _ => None,
        }
    }

    /// Check if nothing is drawn here.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.content, CellContent::Empty)
    }

    /// Check if this is the tail of a wide character.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        matches!(self.content, CellContent::Continuation)
    }

    /// Set the foreground color.
    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color.
    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_empty() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.fg, Color::Reset);
        assert_eq!(cell.as_char(), None);
    }

    #[test]
    fn from_char_round_trips() {
        let cell = Cell::from_char('Q').with_fg(Color::BLUE);
        assert_eq!(cell.as_char(), Some('Q'));
        assert_eq!(cell.fg, Color::BLUE);
        assert!(!cell.is_continuation());
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#ADD8E6"), Some(Color::LIGHT_BLUE));
        assert_eq!(Color::from_hex("#add8e6"), Some(Color::LIGHT_BLUE));
        assert_eq!(Color::from_hex("ADD8E6"), None);
        assert_eq!(Color::from_hex("#ADD8E"), None);
        assert_eq!(Color::from_hex("#GGGGGG"), None);
    }
}
