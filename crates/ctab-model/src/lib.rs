#![forbid(unsafe_code)]

//! Data model for the incremental college table.
//!
//! The view is always a pure function of four inputs:
//!
//! ```text
//! source ──sort(policy)──▶ ──filter(term)──▶ ──prefix(window)──▶ visible rows
//! ```
//!
//! [`pipeline::project`] runs the whole chain in one call. Interactive
//! callers cache the sorted and filtered order ([`pipeline::order`]) and
//! only re-slice it when the window grows.

pub mod college;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod sort;
pub mod window;

pub use college::{College, Review};
pub use dataset::Dataset;
pub use error::{DatasetError, DatasetResult};
pub use filter::SearchFilter;
pub use pipeline::{Projection, order, project};
pub use sort::{SortDirection, SortKey, SortPolicy};
pub use window::{BATCH_SIZE, VisibleWindow};
