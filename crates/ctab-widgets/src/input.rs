#![forbid(unsafe_code)]

//! Single-line search box.
//!
//! Editing is grapheme-aware: the cursor is a grapheme index and deletions
//! remove whole graphemes. When the value is wider than the area the view
//! scrolls horizontally to keep the cursor visible.

use ctab_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
use ctab_core::geometry::Rect;
use ctab_render::{Buffer, Cell, Style};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::Widget;

/// A single-line text input with a placeholder.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    /// Text value.
    value: String,
    /// Cursor position (grapheme index).
    cursor: usize,
    /// Shown while the value is empty.
    placeholder: String,
    /// Placeholder style.
    placeholder_style: Style,
    /// Cursor cell style.
    cursor_style: Style,
}

impl SearchInput {
    /// An empty input with a reversed cursor cell.
    pub fn new() -> Self {
        Self {
            cursor_style: Style::new().reverse(),
            placeholder_style: Style::new().dim(),
            ..Self::default()
        }
    }

    /// Set the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replace the value and put the cursor at its end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.grapheme_count();
    }

    /// Clear the value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Cursor position (grapheme index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert `text` at the cursor. Line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let clean: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .filter(|c| !c.is_control())
            .collect();
        if clean.is_empty() {
            return;
        }
        let at = self.grapheme_byte_offset(self.cursor);
        self.value.insert_str(at, &clean);
        self.cursor += clean.graphemes(true).count();
    }

    /// Terminal column of the cursor when rendered into `area`.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let (_, cursor_x) = self.scroll_and_cursor(area.width);
        (area.x + cursor_x, area.y)
    }

    // --- Event handling ---

    /// Handle a terminal event.
    ///
    /// Returns `true` if the value or cursor changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key)
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat =>
            {
                self.handle_key(key)
            }
            Event::Paste(text) => {
                let before = self.value.len();
                self.insert_str(text);
                self.value.len() != before
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(Modifiers::CTRL);

        match key.code {
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(Modifiers::ALT) => {
                self.insert_char(c);
                true
            }
            // Ctrl+U: clear the line
            KeyCode::Char('u') if ctrl => {
                let changed = !self.value.is_empty();
                self.clear();
                changed
            }
            // Ctrl+W: delete the word before the cursor
            KeyCode::Char('w') if ctrl => self.delete_word_back(),
            KeyCode::Backspace if ctrl => self.delete_word_back(),
            KeyCode::Backspace => self.delete_char_back(),
            KeyCode::Delete => self.delete_char_forward(),
            KeyCode::Left if self.cursor > 0 => {
                self.cursor -= 1;
                true
            }
            KeyCode::Right if self.cursor < self.grapheme_count() => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }

    // --- Editing operations ---

    fn insert_char(&mut self, c: char) {
        let at = self.grapheme_byte_offset(self.cursor);
        let before = self.grapheme_count();
        self.value.insert(at, c);
        // A combining mark joins the previous grapheme instead of adding one.
        if self.grapheme_count() > before {
            self.cursor += 1;
        }
    }

    fn delete_char_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.grapheme_byte_offset(self.cursor - 1);
        let end = self.grapheme_byte_offset(self.cursor);
        self.value.drain(start..end);
        self.cursor -= 1;
        true
    }

    fn delete_char_forward(&mut self) -> bool {
        if self.cursor >= self.grapheme_count() {
            return false;
        }
        let start = self.grapheme_byte_offset(self.cursor);
        let end = self.grapheme_byte_offset(self.cursor + 1);
        self.value.drain(start..end);
        true
    }

    fn delete_word_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let is_space = |g: &str| g.chars().all(char::is_whitespace);
        let mut pos = self.cursor;
        while pos > 0 && is_space(graphemes[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !is_space(graphemes[pos - 1]) {
            pos -= 1;
        }
        let start = self.grapheme_byte_offset(pos);
        let end = self.grapheme_byte_offset(self.cursor);
        self.value.drain(start..end);
        self.cursor = pos;
        true
    }

    // --- Helpers ---

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn grapheme_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Horizontal scroll (in cells) and the cursor column relative to the
    /// area, for an area `width` cells wide.
    fn scroll_and_cursor(&self, width: u16) -> (usize, u16) {
        let cursor_cells: usize = self
            .value
            .graphemes(true)
            .take(self.cursor)
            .map(UnicodeWidthStr::width)
            .sum();
        let width = usize::from(width.max(1));
        // Keep one cell free for the cursor itself.
        let scroll = (cursor_cells + 1).saturating_sub(width);
        let column = cursor_cells - scroll;
        (scroll, u16::try_from(column).unwrap_or(u16::MAX))
    }
}

impl Widget for SearchInput {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "SearchInput",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        let line = area.row(0);

        if self.value.is_empty() {
            buf.draw_str(
                line.x,
                line.y,
                &self.placeholder,
                self.placeholder_style,
                line.right(),
            );
        } else {
            let (scroll, _) = self.scroll_and_cursor(line.width);
            let mut skipped = 0usize;
            let mut x = line.x;
            for grapheme in self.value.graphemes(true) {
                let w = UnicodeWidthStr::width(grapheme);
                if skipped < scroll {
                    skipped += w;
                    continue;
                }
                x = buf.draw_str(x, line.y, grapheme, Style::new(), line.right());
                if x >= line.right() {
                    break;
                }
            }
        }

        let (cx, cy) = self.cursor_position(line);
        if cx < line.right()
            && let Some(cell) = buf.get_mut(cx, cy)
        {
            if cell.is_continuation() {
                *cell = Cell::from_char(' ');
            }
            self.cursor_style.apply_to(cell);
        }
    }
}
