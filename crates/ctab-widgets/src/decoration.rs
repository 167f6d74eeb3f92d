#![forbid(unsafe_code)]

//! Per-row icons.
//!
//! The icon shown beside each college name is cosmetic. It is drawn through
//! the [`Decoration`] trait so the random choice can be seeded or replaced
//! outright in tests. Nothing else in the view reads it.

use std::collections::HashMap;

use ctab_model::College;

/// The icon set rows draw from.
pub const ICONS: [&str; 5] = ["🎓", "📚", "🏫", "🎒", "📖"];

/// Picks an icon for a row.
pub trait Decoration {
    /// Icon for `college`.
    fn icon(&mut self, college: &College) -> &'static str;
}

/// Always the same icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIcon(pub &'static str);

impl Default for FixedIcon {
    fn default() -> Self {
        Self(ICONS[0])
    }
}

impl Decoration for FixedIcon {
    fn icon(&mut self, _college: &College) -> &'static str {
        self.0
    }
}

/// Random icons from [`ICONS`], drawn from a seeded LCG.
///
/// Each record keeps the icon it was first given, so repainting does not
/// shuffle the column.
#[derive(Debug, Clone)]
pub struct RandomIcons {
    state: u64,
    assigned: HashMap<u32, &'static str>,
}

impl RandomIcons {
    /// Generator with the given seed. Equal seeds give equal sequences.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed,
            assigned: HashMap::new(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn next_index(&mut self, bound: usize) -> usize {
        // Low bits of an LCG cycle quickly; take the high ones.
        ((self.next_u64() >> 33) % bound as u64) as usize
    }
}

impl Decoration for RandomIcons {
    fn icon(&mut self, college: &College) -> &'static str {
        if let Some(&icon) = self.assigned.get(&college.id) {
            return icon;
        }
        let icon = ICONS[self.next_index(ICONS.len())];
        self.assigned.insert(college.id, icon);
        icon
    }
}
