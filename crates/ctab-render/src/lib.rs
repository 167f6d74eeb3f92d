#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, styles, and the ANSI presenter.

pub mod buffer;
pub mod cell;
pub mod grapheme_pool;
pub mod presenter;
pub mod style;

pub use buffer::Buffer;
pub use cell::{Cell, CellContent, Color, GraphemeId, StyleFlags};
pub use grapheme_pool::GraphemePool;
pub use style::Style;
