#![forbid(unsafe_code)]

//! Search filtering.

use crate::college::College;

/// Case-insensitive substring match against the college name.
///
/// Any string is a valid term; the empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
    needle: String,
}

impl SearchFilter {
    /// A filter for `term`.
    pub fn new(term: impl Into<String>) -> Self {
        let term = term.into();
        let needle = term.to_lowercase();
        Self { term, needle }
    }

    /// The term as typed.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// True when the filter lets every record through.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether `college` passes the filter.
    pub fn matches(&self, college: &College) -> bool {
        self.is_empty() || college.name.to_lowercase().contains(&self.needle)
    }

    /// Keep the matching entries of `indices` (positions into `source`),
    /// preserving their order.
    pub fn retain_indices(&self, source: &[College], indices: &mut Vec<usize>) {
        if self.is_empty() {
            return;
        }
        indices.retain(|&i| self.matches(&source[i]));
    }

    /// Matching records, in input order.
    pub fn apply<'a>(&self, rows: impl IntoIterator<Item = &'a College>) -> Vec<&'a College> {
        rows.into_iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<College> {
        vec![
            College::new(1, "Alpha"),
            College::new(2, "Beta"),
            College::new(3, "Alphabet"),
        ]
    }

    #[test]
    fn matches_case_insensitively() {
        let filter = SearchFilter::new("ALPHA");
        assert!(filter.matches(&College::new(1, "alphabet soup")));
        assert!(filter.matches(&College::new(1, "The Alpha School")));
        assert!(!filter.matches(&College::new(1, "Beta")));
        assert_eq!(filter.term(), "ALPHA");
    }

    #[test]
    fn empty_term_matches_all() {
        let source = sample();
        let filter = SearchFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&source).len(), 3);
    }

    #[test]
    fn apply_preserves_order() {
        let source = sample();
        let ids: Vec<u32> = SearchFilter::new("alpha")
            .apply(source.iter().rev())
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, [3, 1]);
    }

    #[test]
    fn retain_indices_filters_in_place() {
        let source = sample();
        let mut indices = vec![2, 1, 0];
        SearchFilter::new("bet").retain_indices(&source, &mut indices);
        // "Beta" and "Alphabet" both contain "bet".
        assert_eq!(indices, [2, 1]);
    }

    #[test]
    fn whitespace_is_literal() {
        let filter = SearchFilter::new(" ");
        assert!(!filter.is_empty());
        assert!(filter.matches(&College::new(1, "Two Words")));
        assert!(!filter.matches(&College::new(2, "Oneword")));
    }

    #[test]
    fn non_ascii_lowercasing() {
        let filter = SearchFilter::new("ÉCOLE");
        assert!(filter.matches(&College::new(1, "École Polytechnique")));
    }
}
