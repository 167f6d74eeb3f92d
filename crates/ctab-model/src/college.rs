#![forbid(unsafe_code)]

//! The college record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of the table.
///
/// `id` and `name` are required. The numeric columns may be absent in the
/// source data; absent values render as blank and sort after present ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct College {
    /// Unique, stable identifier.
    pub id: u32,
    /// Display name; the search box matches against this.
    pub name: String,
    /// Rating, typically 0–5.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Fee amount.
    #[serde(default)]
    pub fees: Option<f64>,
    /// User review score, numeric or free text.
    #[serde(default, rename = "userReview")]
    pub user_review: Option<Review>,
    /// Highlighted in the table when set.
    #[serde(default)]
    pub featured: bool,
}

impl College {
    /// A record with only the required fields set.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            rating: None,
            fees: None,
            user_review: None,
            featured: false,
        }
    }

    /// Set the rating.
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the fees.
    #[must_use]
    pub fn with_fees(mut self, fees: f64) -> Self {
        self.fees = Some(fees);
        self
    }

    /// Set the user review.
    #[must_use]
    pub fn with_review(mut self, review: impl Into<Review>) -> Self {
        self.user_review = Some(review.into());
        self
    }

    /// Set the featured flag.
    #[must_use]
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }
}

/// A user review: either a numeric score or a free-text grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Review {
    /// Numeric score, e.g. `8.7`.
    Score(f64),
    /// Text review, e.g. `"Excellent"` or `"8.7/10"`.
    Text(String),
}

impl From<f64> for Review {
    fn from(score: f64) -> Self {
        Review::Score(score)
    }
}

impl From<&str> for Review {
    fn from(text: &str) -> Self {
        Review::Text(text.to_owned())
    }
}

impl From<String> for Review {
    fn from(text: String) -> Self {
        Review::Text(text)
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Review::Score(score) => write!(f, "{score}"),
            Review::Text(text) => f.write_str(text),
        }
    }
}

/// Render an optional number the way the table shows it (blank when absent).
pub fn display_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
