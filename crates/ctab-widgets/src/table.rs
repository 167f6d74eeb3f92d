#![forbid(unsafe_code)]

//! Scrollable table with an optional one-line header.

use ctab_core::geometry::Rect;
use ctab_render::{Buffer, Style};

use crate::StatefulWidget;
use crate::scroll::max_row_offset;

/// Column width rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Exactly this many cells (less if the table is too narrow).
    Fixed(u16),
    /// An equal share of whatever the fixed columns leave.
    Fill,
}

/// One cell: text plus a style layered over the row style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    text: String,
    style: Style,
}

impl TableCell {
    /// A cell with the given text and no style of its own.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::new(),
        }
    }

    /// Set the cell style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The cell text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for TableCell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TableCell {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A row in a table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<TableCell>,
    style: Style,
}

impl Row {
    /// Create a new row from an iterator of cell contents.
    pub fn new(cells: impl IntoIterator<Item = impl Into<TableCell>>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            style: Style::new(),
        }
    }

    /// Set the row style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The row's cells.
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }
}

/// Blank cells between adjacent columns.
const COLUMN_SPACING: u16 = 1;

/// A widget to display data in a table.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Row>,
    widths: Vec<Constraint>,
    header: Option<Row>,
}

impl Table {
    /// Create a new table with the given rows and column width constraints.
    pub fn new(
        rows: impl IntoIterator<Item = Row>,
        widths: impl IntoIterator<Item = Constraint>,
    ) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            widths: widths.into_iter().collect(),
            header: None,
        }
    }

    /// Set the header row.
    #[must_use]
    pub fn header(mut self, header: Row) -> Self {
        self.header = Some(header);
        self
    }

    /// Number of body rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no body rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve the width constraints for a table `width` cells wide.
    ///
    /// Returns `(x offset, width)` per column, relative to the table's left
    /// edge. Columns that do not fit get zero width.
    pub fn column_layout(&self, width: u16) -> Vec<(u16, u16)> {
        column_layout(&self.widths, COLUMN_SPACING, width)
    }

    /// The column under terminal column `x`, for a table rendered in `area`.
    ///
    /// Gaps between columns belong to no column.
    pub fn column_at(&self, area: Rect, x: u16) -> Option<usize> {
        if x < area.x || x >= area.right() {
            return None;
        }
        let rel = x - area.x;
        self.column_layout(area.width)
            .iter()
            .position(|&(start, w)| w > 0 && rel >= start && rel < start + w)
    }

    /// Height of the header (0 or 1).
    pub fn header_height(&self) -> u16 {
        u16::from(self.header.is_some())
    }

    /// Split `area` into `(header, body)`.
    pub fn areas(&self, area: Rect) -> (Rect, Rect) {
        area.split_top(self.header_height())
    }

    fn render_row(&self, row: &Row, columns: &[(u16, u16)], line: Rect, buf: &mut Buffer) {
        buf.set_style(line, row.style);
        for (cell, &(start, width)) in row.cells.iter().zip(columns) {
            if width == 0 {
                continue;
            }
            let x = line.x + start;
            buf.draw_str(x, line.y, &cell.text, cell.style, x + width);
        }
    }
}

fn column_layout(widths: &[Constraint], spacing: u16, width: u16) -> Vec<(u16, u16)> {
    let gap_count = u16::try_from(widths.len().saturating_sub(1)).unwrap_or(u16::MAX);
    let gaps = spacing.saturating_mul(gap_count);
    let fixed: u16 = widths
        .iter()
        .map(|c| match c {
            Constraint::Fixed(w) => *w,
            Constraint::Fill => 0,
        })
        .fold(0u16, u16::saturating_add);
    let fills = widths.iter().filter(|c| **c == Constraint::Fill).count() as u16;
    let spare = width.saturating_sub(fixed).saturating_sub(gaps);
    let (share, mut extra) = if fills == 0 {
        (0, 0)
    } else {
        (spare / fills, spare % fills)
    };

    let mut x = 0u16;
    let mut out = Vec::with_capacity(widths.len());
    for constraint in widths {
        let wanted = match constraint {
            Constraint::Fixed(w) => *w,
            Constraint::Fill => {
                let bonus = u16::from(extra > 0);
                extra = extra.saturating_sub(1);
                share + bonus
            }
        };
        let w = wanted.min(width.saturating_sub(x));
        out.push((x, w));
        x = x.saturating_add(w).saturating_add(spacing).min(width);
    }
    out
}

/// Mutable state for a [`Table`] widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableState {
    /// Scroll offset (first visible row index).
    pub offset: usize,
    /// Body height in rows at the last render.
    pub viewport: usize,
}

impl TableState {
    /// Largest useful offset for `rows` body rows.
    pub fn max_offset(&self, rows: usize) -> usize {
        max_row_offset(rows, self.viewport)
    }

    /// Move the offset by `delta` rows, clamped to `[0, max_offset(rows)]`.
    ///
    /// Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, delta: isize, rows: usize) -> bool {
        let max = self.max_offset(rows);
        let target = self.offset.saturating_add_signed(delta).min(max);
        let changed = target != self.offset;
        self.offset = target;
        changed
    }

    /// Jump to the first row.
    pub fn scroll_to_top(&mut self) -> bool {
        let changed = self.offset != 0;
        self.offset = 0;
        changed
    }

    /// Jump so the last row is at the bottom of the viewport.
    pub fn scroll_to_bottom(&mut self, rows: usize) -> bool {
        let max = self.max_offset(rows);
        let changed = self.offset != max;
        self.offset = max;
        changed
    }
}

impl StatefulWidget for Table {
    type State = TableState;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Table",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }

        let (header_area, body) = self.areas(area);
        state.viewport = usize::from(body.height);
        state.offset = state.offset.min(state.max_offset(self.rows.len()));

        let columns = self.column_layout(area.width);

        if let Some(header) = &self.header {
            self.render_row(header, &columns, header_area, buf);
        }

        for (i, row) in self
            .rows
            .iter()
            .skip(state.offset)
            .take(state.viewport)
            .enumerate()
        {
            // `take(viewport)` keeps `i` below `body.height`.
            let line = body.row(i as u16);
            self.render_row(row, &columns, line, buf);
        }
    }
}
