#![forbid(unsafe_code)]

//! Partial styles.
//!
//! A [`Style`] only carries the properties it sets. Applying it to a cell
//! overwrites those properties and leaves the rest untouched, so a row style
//! can be layered under a column style.

use crate::cell::{Cell, Color, StyleFlags};

/// Foreground, background, and attribute overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground override.
    pub fg: Option<Color>,
    /// Background override.
    pub bg: Option<Color>,
    /// Attributes added on top of the cell's own.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// An empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add bold.
    #[must_use]
    pub fn bold(self) -> Self {
        self.add_attrs(StyleFlags::BOLD)
    }

    /// Add dim.
    #[must_use]
    pub fn dim(self) -> Self {
        self.add_attrs(StyleFlags::DIM)
    }

    /// Add reverse video.
    #[must_use]
    pub fn reverse(self) -> Self {
        self.add_attrs(StyleFlags::REVERSE)
    }

    fn add_attrs(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default() | flags);
        self
    }

    /// True if this style sets nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Check for an attribute flag.
    #[must_use]
    pub fn has_attr(&self, flag: StyleFlags) -> bool {
        self.attrs.is_some_and(|a| a.contains(flag))
    }

    /// Layer `other` on top of `self`; `other` wins where both set a property.
    #[must_use]
    pub fn patch(self, other: Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: match (self.attrs, other.attrs) {
                (Some(a), Some(b)) => Some(a | b),
                (a, b) => b.or(a),
            },
        }
    }

    /// Apply to a cell, preserving its content.
    pub fn apply_to(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
        if let Some(attrs) = self.attrs {
            cell.attrs |= attrs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style_is_noop() {
        let mut cell = Cell::from_char('x').with_fg(Color::RED);
        Style::new().apply_to(&mut cell);
        assert_eq!(cell, Cell::from_char('x').with_fg(Color::RED));
    }

    #[test]
    fn apply_sets_only_given_properties() {
        let mut cell = Cell::from_char('x').with_bg(Color::LIGHT_BLUE);
        Style::new().fg(Color::WHITE).bold().apply_to(&mut cell);
        assert_eq!(cell.fg, Color::WHITE);
        assert_eq!(cell.bg, Color::LIGHT_BLUE);
        assert!(cell.attrs.contains(StyleFlags::BOLD));
        assert_eq!(cell.as_char(), Some('x'));
    }

    #[test]
    fn patch_prefers_overlay() {
        let base = Style::new().fg(Color::BLUE).bg(Color::WHITE).dim();
        let merged = base.patch(Style::new().fg(Color::RED).bold());
        assert_eq!(merged.fg, Some(Color::RED));
        assert_eq!(merged.bg, Some(Color::WHITE));
        assert!(merged.has_attr(StyleFlags::BOLD));
        assert!(merged.has_attr(StyleFlags::DIM));
    }
}
