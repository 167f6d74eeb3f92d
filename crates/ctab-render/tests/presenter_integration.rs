//! Presenter behavior across frames: wide graphemes, resizes, and the
//! escape sequences that reach the terminal.

use ctab_core::geometry::Rect;
use ctab_render::buffer::Buffer;
use ctab_render::cell::{Cell, Color};
use ctab_render::presenter::Presenter;
use ctab_render::style::Style;

fn output(presenter: &Presenter<Vec<u8>>) -> String {
    String::from_utf8_lossy(presenter.writer()).into_owned()
}

#[test]
fn wide_icon_occupies_two_cells_and_writes_once() {
    let mut buf = Buffer::new(6, 1);
    let end = buf.draw_str(0, 0, "🎓 A", Style::new(), 6);
    assert_eq!(end, 4);
    assert!(buf.get(1, 0).is_some_and(Cell::is_continuation));
    assert_eq!(buf.row_text(0), "🎓 A  ");

    let mut presenter = Presenter::new(Vec::new());
    // Six cells, one of which is a continuation.
    assert_eq!(presenter.present(&buf).unwrap(), 5);
    assert_eq!(output(&presenter).matches('🎓').count(), 1);
}

#[test]
fn wide_grapheme_is_not_split_at_the_edge() {
    let mut buf = Buffer::new(4, 1);
    let end = buf.draw_str(2, 0, "x📚", Style::new(), 4);
    assert_eq!(end, 3);
    assert_eq!(buf.row_text(0), "  x ");
}

#[test]
fn changed_colors_emit_rgb_sequences() {
    let mut buf = Buffer::new(8, 1);
    let mut presenter = Presenter::new(Vec::new());
    presenter.present(&buf).unwrap();

    buf.draw_str(0, 0, "Yes", Style::new().fg(Color::RED), 8);
    let written = presenter.present(&buf).unwrap();
    assert_eq!(written, 3);
    // 24-bit foreground red.
    assert!(output(&presenter).contains("\x1b[38;2;255;0;0m"));
}

#[test]
fn header_background_fills_styled_area() {
    let mut buf = Buffer::new(10, 2);
    let header = Rect::new(0, 0, 10, 1);
    buf.fill(header, Cell::default().with_bg(Color::LIGHT_BLUE));
    buf.draw_str(0, 0, "Fees", Style::new().fg(Color::WHITE), 10);

    for x in 0..10 {
        assert_eq!(buf.get(x, 0).map(|c| c.bg), Some(Color::LIGHT_BLUE));
    }
    assert_eq!(buf.get(0, 0).map(|c| c.fg), Some(Color::WHITE));
    assert_eq!(buf.get(0, 1).map(|c| c.bg), Some(Color::Reset));
}

#[test]
fn size_change_forces_full_repaint() {
    let mut presenter = Presenter::new(Vec::new());
    presenter.present(&Buffer::new(4, 2)).unwrap();
    assert_eq!(presenter.present(&Buffer::new(4, 2)).unwrap(), 0);
    assert_eq!(presenter.present(&Buffer::new(5, 3)).unwrap(), 15);
}

#[test]
fn invalidate_repaints_same_size_frame() {
    let buf = Buffer::new(3, 3);
    let mut presenter = Presenter::new(Vec::new());
    presenter.present(&buf).unwrap();
    presenter.invalidate();
    assert_eq!(presenter.present(&buf).unwrap(), 9);
}

#[test]
fn output_is_wrapped_in_synchronized_update() {
    let mut presenter = Presenter::new(Vec::new());
    presenter.present(&Buffer::new(2, 1)).unwrap();
    let out = output(&presenter);
    assert!(out.starts_with("\x1b[?2026h"));
    assert!(out.ends_with("\x1b[?2026l"));
}
