#![forbid(unsafe_code)]

//! Dataset loading errors.
//!
//! Sorting, filtering, and windowing cannot fail; only getting the records
//! into memory can.

use std::fmt;
use std::io;

/// Errors raised while loading a dataset.
#[derive(Debug)]
pub enum DatasetError {
    /// The dataset file could not be read.
    Io(io::Error),
    /// The input is not a JSON array of college records.
    Parse(serde_json::Error),
    /// Two records share an identifier.
    DuplicateId(u32),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(e) => write!(f, "I/O error: {e}"),
            DatasetError::Parse(e) => write!(f, "invalid dataset: {e}"),
            DatasetError::DuplicateId(id) => write!(f, "duplicate college id {id}"),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(e) => Some(e),
            DatasetError::Parse(e) => Some(e),
            DatasetError::DuplicateId(_) => None,
        }
    }
}

impl From<io::Error> for DatasetError {
    fn from(e: io::Error) -> Self {
        DatasetError::Io(e)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        DatasetError::Parse(e)
    }
}

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;
