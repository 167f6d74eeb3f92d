#![forbid(unsafe_code)]

//! Loading the source collection.
//!
//! A dataset is a JSON array of [`College`] records. Once loaded it is frozen
//! in an `Arc<[College]>` and only ever read.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use crate::college::College;
use crate::error::{DatasetError, DatasetResult};

const BUILTIN_JSON: &str = include_str!("../data/colleges.json");

/// An immutable, validated collection of colleges.
#[derive(Debug, Clone)]
pub struct Dataset {
    colleges: Arc<[College]>,
}

impl Dataset {
    /// Build a dataset from records already in memory.
    ///
    /// # Errors
    ///
    /// [`DatasetError::DuplicateId`] if two records share an id.
    pub fn from_colleges(colleges: Vec<College>) -> DatasetResult<Self> {
        let mut seen = HashSet::with_capacity(colleges.len());
        for college in &colleges {
            if !seen.insert(college.id) {
                ctab_core::warn!(id = college.id, "duplicate college id in dataset");
                return Err(DatasetError::DuplicateId(college.id));
            }
        }
        ctab_core::debug!(rows = colleges.len(), "dataset loaded");
        Ok(Self {
            colleges: colleges.into(),
        })
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> DatasetResult<Self> {
        Self::from_colleges(serde_json::from_str(json)?)
    }

    /// Parse a JSON array of records from a reader.
    pub fn from_reader(reader: impl Read) -> DatasetResult<Self> {
        Self::from_colleges(serde_json::from_reader(reader)?)
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// The sample dataset compiled into the crate.
    pub fn builtin() -> DatasetResult<Self> {
        Self::from_json_str(BUILTIN_JSON)
    }

    /// Shared handle to the records, in source order.
    pub fn colleges(&self) -> Arc<[College]> {
        Arc::clone(&self.colleges)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.colleges.len()
    }

    /// True if there are no records.
    pub fn is_empty(&self) -> bool {
        self.colleges.is_empty()
    }
}
