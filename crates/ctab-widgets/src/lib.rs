#![forbid(unsafe_code)]

//! Widgets for the ctab college table.
//!
//! [`view::IncrementalTableView`] is the composed screen: a search box over a
//! sortable table that discloses rows in batches as the user scrolls to the
//! bottom. The smaller widgets it is built from are usable on their own.

pub mod decoration;
pub mod input;
pub mod scroll;
pub mod table;
pub mod view;

pub use decoration::{Decoration, FixedIcon, ICONS, RandomIcons};
pub use input::SearchInput;
pub use scroll::{BOTTOM_EPSILON, ScrollGeometry};
pub use table::{Constraint, Row, Table, TableCell, TableState};
pub use view::{Column, IncrementalTableView};

use ctab_core::geometry::Rect;
use ctab_render::Buffer;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a [`Buffer`] within a given [`Rect`] and
/// must not touch cells outside it.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;

    /// Render the widget into the buffer with mutable state.
    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State);
}
