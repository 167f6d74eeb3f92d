#![forbid(unsafe_code)]

//! Presenter: state-tracked ANSI emission.
//!
//! The presenter keeps the last frame it wrote. Each call to
//! [`Presenter::present`] compares the new buffer against it and only emits
//! the cells that changed, grouped into runs so cursor moves stay rare. Style
//! escapes are only written when the style actually differs from the one the
//! terminal is already using. A size change forces a full repaint.
//!
//! Output is wrapped in synchronized-update markers and flushed once.

use std::io::{self, Write};

use crossterm::style::{
    Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, queue, terminal};

use crate::buffer::Buffer;
use crate::cell::{Cell, CellContent, Color, StyleFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pen {
    fg: Color,
    bg: Color,
    attrs: StyleFlags,
}

impl Pen {
    fn of(cell: &Cell) -> Self {
        Self {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs,
        }
    }
}

/// Writes buffers to a terminal.
#[derive(Debug)]
pub struct Presenter<W: Write> {
    writer: W,
    previous: Option<Buffer>,
    pen: Option<Pen>,
}

impl<W: Write> Presenter<W> {
    /// Create a presenter that has not drawn anything yet.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            previous: None,
            pen: None,
        }
    }

    /// Forget the last frame so the next present repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
        self.pen = None;
    }

    /// Borrow the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Draw `buf`, emitting only what changed since the previous frame.
    ///
    /// Returns the number of cells written.
    pub fn present(&mut self, buf: &Buffer) -> io::Result<usize> {
        let _span = ctab_core::debug_span!("present", w = buf.width(), h = buf.height()).entered();

        queue!(self.writer, terminal::BeginSynchronizedUpdate)?;

        let previous = self
            .previous
            .take()
            .filter(|prev| prev.width() == buf.width() && prev.height() == buf.height());
        let full = previous.is_none();
        if full {
            queue!(
                self.writer,
                SetAttribute(Attribute::Reset),
                terminal::Clear(terminal::ClearType::All)
            )?;
            self.pen = None;
        }

        let mut written = 0usize;
        for y in 0..buf.height() {
            let row = buf.row_cells(y);
            let changed = |x: usize| {
                previous
                    .as_ref()
                    .is_none_or(|prev| !same_cell(prev, &prev.row_cells(y)[x], buf, &row[x]))
            };

            let mut x = 0usize;
            while x < row.len() {
                if !changed(x) || row[x].is_continuation() {
                    x += 1;
                    continue;
                }
                queue!(self.writer, cursor::MoveTo(x as u16, y))?;
                // Emit a run until the next unchanged cell.
                while x < row.len() && changed(x) {
                    let cell = &row[x];
                    if !cell.is_continuation() {
                        self.write_cell(buf, cell)?;
                        written += 1;
                    }
                    x += 1;
                }
            }
        }

        queue!(
            self.writer,
            SetAttribute(Attribute::Reset),
            terminal::EndSynchronizedUpdate
        )?;
        self.pen = None;
        self.writer.flush()?;

        ctab_core::trace!(cells = written, full, "frame presented");
        self.previous = Some(buf.clone());
        Ok(written)
    }

    fn write_cell(&mut self, buf: &Buffer, cell: &Cell) -> io::Result<()> {
        let pen = Pen::of(cell);
        if self.pen != Some(pen) {
            queue!(
                self.writer,
                SetAttribute(Attribute::Reset),
                SetForegroundColor(to_crossterm(pen.fg)),
                SetBackgroundColor(to_crossterm(pen.bg))
            )?;
            for (flag, attr) in [
                (StyleFlags::BOLD, Attribute::Bold),
                (StyleFlags::DIM, Attribute::Dim),
                (StyleFlags::ITALIC, Attribute::Italic),
                (StyleFlags::UNDERLINE, Attribute::Underlined),
                (StyleFlags::REVERSE, Attribute::Reverse),
            ] {
                if pen.attrs.contains(flag) {
                    queue!(self.writer, SetAttribute(attr))?;
                }
            }
            self.pen = Some(pen);
        }
        let mut scratch = [0u8; 4];
        let text = buf.cell_text(cell, &mut scratch).unwrap_or(" ");
        self.writer.write_all(text.as_bytes())
    }
}

/// Cells from two buffers look the same on screen. Grapheme ids are
/// buffer-local, so clusters compare by text.
fn same_cell(prev_buf: &Buffer, prev: &Cell, buf: &Buffer, cell: &Cell) -> bool {
    if Pen::of(prev) != Pen::of(cell) {
        return false;
    }
    match (prev.content, cell.content) {
        (CellContent::Grapheme(a), CellContent::Grapheme(b)) => {
            prev_buf.grapheme(a) == buf.grapheme(b)
        }
        (a, b) => a == b,
    }
}

fn to_crossterm(color: Color) -> CtColor {
    match color {
        Color::Reset => CtColor::Reset,
        Color::Rgb(r, g, b) => CtColor::Rgb { r, g, b },
    }
}
