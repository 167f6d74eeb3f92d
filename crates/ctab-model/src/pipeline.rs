#![forbid(unsafe_code)]

//! The sort → filter → window pipeline.
//!
//! [`project`] is the whole derivation as one pure function. Nothing here
//! holds state: callers own the policy, filter, and window and re-run the
//! pipeline after each change.

use crate::college::College;
use crate::filter::SearchFilter;
use crate::sort::{SortPolicy, sort_indices};

/// The rows a view should display.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    /// Visible rows, in display order.
    pub rows: Vec<&'a College>,
    /// How many records pass the filter (the length the window grows toward).
    pub total_matches: usize,
}

impl Projection<'_> {
    /// True when every match is visible.
    pub fn is_complete(&self) -> bool {
        self.rows.len() == self.total_matches
    }
}

/// Sorted, filtered positions into `source`.
pub fn order(source: &[College], policy: SortPolicy, filter: &SearchFilter) -> Vec<usize> {
    let _span = ctab_core::trace_span!(
        "pipeline_order",
        rows = source.len(),
        key = %policy.key
    )
    .entered();

    let mut indices = sort_indices(source, policy);
    filter.retain_indices(source, &mut indices);
    indices
}

/// Sort `source` by `policy`, keep the rows matching `filter`, and take the
/// first `window_size` of them.
pub fn project<'a>(
    source: &'a [College],
    policy: SortPolicy,
    filter: &SearchFilter,
    window_size: usize,
) -> Projection<'a> {
    let ordered = order(source, policy, filter);
    let rows = ordered
        .iter()
        .take(window_size)
        .map(|&i| &source[i])
        .collect();
    Projection {
        rows,
        total_matches: ordered.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::{SortDirection, SortKey};
    use crate::window::VisibleWindow;

    fn sample() -> Vec<College> {
        vec![
            College::new(1, "Alpha").with_rating(4.0),
            College::new(2, "Beta").with_rating(2.0),
            College::new(3, "Alphabet").with_rating(5.0),
        ]
    }

    #[test]
    fn sort_then_filter_then_window() {
        let source = sample();
        let policy = SortPolicy::new(SortKey::Rating, SortDirection::Ascending);

        let sorted = project(&source, policy, &SearchFilter::default(), 10);
        let names: Vec<&str> = sorted.rows.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Beta", "Alpha", "Alphabet"]);

        let filtered = project(
            &source,
            policy,
            &SearchFilter::new("alpha"),
            VisibleWindow::new().requested(),
        );
        let names: Vec<&str> = filtered.rows.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Alphabet"]);
        assert_eq!(filtered.total_matches, 2);
        assert!(filtered.is_complete());
    }

    #[test]
    fn window_truncates() {
        let source: Vec<College> = (1..=25).map(|i| College::new(i, format!("C{i}"))).collect();
        let projection = project(&source, SortPolicy::default(), &SearchFilter::default(), 10);
        assert_eq!(projection.rows.len(), 10);
        assert_eq!(projection.total_matches, 25);
        assert!(!projection.is_complete());
        assert_eq!(projection.rows[9].id, 10);
    }

    #[test]
    fn no_matches() {
        let source = sample();
        let projection = project(&source, SortPolicy::default(), &SearchFilter::new("zzz"), 10);
        assert!(projection.rows.is_empty());
        assert_eq!(projection.total_matches, 0);
        assert!(projection.is_complete());
    }

    #[test]
    fn order_matches_projection() {
        let source = sample();
        let policy = SortPolicy::new(SortKey::Name, SortDirection::Descending);
        let filter = SearchFilter::new("a");
        let positions = order(&source, policy, &filter);
        let projection = project(&source, policy, &filter, usize::MAX);
        let from_positions: Vec<u32> = positions.iter().map(|&i| source[i].id).collect();
        let from_projection: Vec<u32> = projection.rows.iter().map(|c| c.id).collect();
        assert_eq!(from_positions, from_projection);
    }
}
