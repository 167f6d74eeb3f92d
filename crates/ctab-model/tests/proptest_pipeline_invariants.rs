//! Property-based invariant tests for the sort → filter → window pipeline.
//!
//! 1. Rating-ascending output is non-decreasing among present ratings, with
//!    absent ratings at the tail.
//! 2. Every visible row matches the search term, and every source row that
//!    matches is among the matches (nothing is dropped).
//! 3. Growing past the end leaves the slice unchanged.
//! 4. Resetting after growth yields `min(10, matches)` rows.
//! 5. Header toggles follow the two-state cycle per column.
//! 6. Sorting is a permutation of the source.

use ctab_model::{
    BATCH_SIZE, College, SearchFilter, SortDirection, SortKey, SortPolicy, VisibleWindow, order,
    project,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const NAMES: &[&str] = &[
    "Alpha", "alphabet", "Beta", "Gamma", "ALPHA Institute", "Delta", "Omega", "Epsilon",
];

fn college_strategy() -> impl Strategy<Value = College> {
    (
        0usize..NAMES.len(),
        proptest::option::of(0.0f64..10.0),
        proptest::option::of(0.0f64..500_000.0),
        any::<bool>(),
    )
        .prop_map(|(name, rating, fees, featured)| {
            let mut college = College::new(0, NAMES[name]).with_featured(featured);
            college.rating = rating;
            college.fees = fees;
            college
        })
}

fn source_strategy() -> impl Strategy<Value = Vec<College>> {
    proptest::collection::vec(college_strategy(), 0..60).prop_map(|mut rows| {
        for (i, row) in rows.iter_mut().enumerate() {
            row.id = i as u32 + 1;
        }
        rows
    })
}

fn key_strategy() -> impl Strategy<Value = SortKey> {
    proptest::sample::select(SortKey::ALL.to_vec())
}

fn term_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(vec!["", "a", "alpha", "ALPHA", "bet", "zzz", " "])
        .prop_map(str::to_owned)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Sort correctness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rating_ascending_is_ordered(source in source_strategy(), grows in 0usize..8) {
        let policy = SortPolicy::new(SortKey::Rating, SortDirection::Ascending);
        let mut window = VisibleWindow::new();
        for _ in 0..grows {
            window.grow();
        }
        let projection = project(&source, policy, &SearchFilter::default(), window.requested());

        let mut seen_missing = false;
        for pair in projection.rows.windows(2) {
            match (pair[0].rating, pair[1].rating) {
                (Some(a), Some(b)) => prop_assert!(a <= b, "{a} before {b}"),
                (None, Some(_)) => prop_assert!(false, "missing rating before a present one"),
                _ => {}
            }
            seen_missing |= pair[0].rating.is_none();
            prop_assert!(!(seen_missing && pair[1].rating.is_some()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Filter correctness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn filter_is_exact(source in source_strategy(), term in term_strategy(), key in key_strategy()) {
        let filter = SearchFilter::new(term.clone());
        let needle = term.to_lowercase();
        let projection = project(&source, SortPolicy::new(key, SortDirection::Ascending), &filter, usize::MAX);

        for row in &projection.rows {
            prop_assert!(row.name.to_lowercase().contains(&needle));
        }
        let expected = source
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(projection.total_matches, expected);
        prop_assert_eq!(projection.rows.len(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Growth past the end is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn growth_past_end_is_stable(source in source_strategy(), term in term_strategy()) {
        let policy = SortPolicy::default();
        let filter = SearchFilter::new(term);
        let ordered = order(&source, policy, &filter);

        let mut window = VisibleWindow::new();
        while !window.is_exhausted(ordered.len()) {
            window.grow();
        }
        let before = window.visible_slice(&ordered).to_vec();
        prop_assert_eq!(before.len(), ordered.len());

        window.grow();
        window.grow();
        prop_assert_eq!(window.visible_slice(&ordered), before.as_slice());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Reset after growth
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reset_returns_to_one_batch(source in source_strategy(), term in term_strategy()) {
        let mut window = VisibleWindow::new();
        window.grow();
        window.grow();
        prop_assert_eq!(window.requested(), 30);

        window.reset();
        let projection = project(&source, SortPolicy::default(), &SearchFilter::new(term), window.requested());
        prop_assert_eq!(projection.rows.len(), projection.total_matches.min(BATCH_SIZE));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Toggle cycle
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn toggle_cycle(start in key_strategy(), desc in any::<bool>(), next in key_strategy()) {
        let direction = if desc { SortDirection::Descending } else { SortDirection::Ascending };
        let policy = SortPolicy::new(start, direction);

        let same = policy.toggled(start);
        prop_assert_eq!(same.key, start);
        prop_assert_eq!(same.direction, direction.flipped());
        prop_assert_eq!(same.toggled(start), policy);

        if next != start {
            prop_assert_eq!(policy.toggled(next), SortPolicy::new(next, SortDirection::Ascending));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Sorting permutes the source
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sort_is_a_permutation(source in source_strategy(), key in key_strategy(), desc in any::<bool>()) {
        let direction = if desc { SortDirection::Descending } else { SortDirection::Ascending };
        let mut ids: Vec<u32> = project(&source, SortPolicy::new(key, direction), &SearchFilter::default(), usize::MAX)
            .rows
            .iter()
            .map(|c| c.id)
            .collect();
        ids.sort_unstable();
        let expected: Vec<u32> = source.iter().map(|c| c.id).collect();
        prop_assert_eq!(ids, expected);
    }
}
