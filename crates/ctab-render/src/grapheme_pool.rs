#![forbid(unsafe_code)]

//! Interning for multi-code-point grapheme clusters.
//!
//! Most cells hold a single `char`. Clusters that need more (combining
//! marks, ZWJ emoji, flags) are interned here and referenced from the cell
//! by a [`GraphemeId`], which keeps [`Cell`](crate::cell::Cell) `Copy`.
//!
//! A pool belongs to one [`Buffer`](crate::buffer::Buffer); ids are only
//! meaningful against the pool that issued them.

use std::collections::HashMap;

use crate::cell::GraphemeId;

/// Deduplicating store of grapheme clusters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphemePool {
    slots: Vec<Box<str>>,
    lookup: HashMap<Box<str>, GraphemeId>,
}

impl GraphemePool {
    /// An empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for `text`, adding it if it is not already present.
    pub fn intern(&mut self, text: &str) -> GraphemeId {
        if let Some(&id) = self.lookup.get(text) {
            return id;
        }
        let id = GraphemeId::new(self.slots.len() as u32);
        self.slots.push(text.into());
        self.lookup.insert(text.into(), id);
        id
    }

    /// The cluster behind `id`, or `None` if this pool did not issue it.
    pub fn get(&self, id: GraphemeId) -> Option<&str> {
        self.slots.get(id.slot() as usize).map(|s| &**s)
    }

    /// Number of distinct clusters.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop every cluster. Ids issued before are no longer valid.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.lookup.clear();
    }
}
