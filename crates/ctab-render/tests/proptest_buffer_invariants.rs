//! Property-based invariant tests for [`Buffer`] drawing and presentation.
//!
//! 1. `draw_str` never writes outside `[x, max_x)` on its row.
//! 2. Every wide head is followed by its continuation cells.
//! 3. A first present writes every non-continuation cell; a repeat writes none.

use ctab_render::buffer::Buffer;
use ctab_render::presenter::Presenter;
use ctab_render::style::Style;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'Z', ' ', 'é', '🎓', '日']), 0..24)
        .prop_map(String::from_iter)
}

fn width_of(c: char) -> u16 {
    if c == '🎓' || c == '日' { 2 } else { 1 }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Drawing stays inside its span
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn draw_str_is_clipped(
        text in text_strategy(),
        width in 1u16..=30,
        height in 1u16..=4,
        x in 0u16..=32,
        max_x in 0u16..=40,
    ) {
        let y = height - 1;
        let mut buf = Buffer::new(width, height);
        let end = buf.draw_str(x, y, &text, Style::new(), max_x);

        let limit = max_x.min(width);
        prop_assert!(end >= x);
        prop_assert!(end == x || end <= limit);

        for cx in 0..width {
            let touched = cx >= x && cx < end;
            let empty = buf.get(cx, y).is_some_and(|c| c.is_empty());
            prop_assert_eq!(empty, !touched, "cell {} (x={}, end={})", cx, x, end);
        }
        for cy in 0..y {
            prop_assert!(buf.row_cells(cy).iter().all(|c| c.is_empty()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Wide heads own their continuations
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn wide_heads_are_followed_by_continuations(text in text_strategy(), width in 1u16..=30) {
        let mut buf = Buffer::new(width, 1);
        buf.draw_str(0, 0, &text, Style::new(), width);

        let row = buf.row_cells(0);
        let mut x = 0usize;
        while x < row.len() {
            match row[x].as_char() {
                Some(c) => {
                    let w = width_of(c) as usize;
                    for dx in 1..w {
                        prop_assert!(row[x + dx].is_continuation());
                    }
                    x += w;
                }
                None => {
                    prop_assert!(!row[x].is_continuation(), "orphan continuation at {}", x);
                    x += 1;
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Presenter cell accounting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn present_counts_cells(text in text_strategy(), width in 1u16..=30, height in 1u16..=4) {
        let mut buf = Buffer::new(width, height);
        for y in 0..height {
            buf.draw_str(y, y, &text, Style::new(), width);
        }
        let expected = (0..height)
            .flat_map(|y| buf.row_cells(y).iter())
            .filter(|c| !c.is_continuation())
            .count();

        let mut presenter = Presenter::new(Vec::new());
        prop_assert_eq!(presenter.present(&buf).unwrap(), expected);
        prop_assert_eq!(presenter.present(&buf).unwrap(), 0);
    }
}
