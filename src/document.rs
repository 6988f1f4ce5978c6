//! Document value types shared by the index and the search paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a document. Negative ids are rejected at insertion; the
/// signed type exists so that the rejection is expressible.
pub type DocId = i64;

/// Moderation status attached to every document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// A scored search hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier of the matched document.
    pub id: DocId,

    /// Accumulated TF-IDF relevance for the query.
    pub relevance: f64,

    /// Mean rating of the document.
    pub rating: i32,
}

impl Document {
    /// Create a new scored hit.
    pub fn new(id: DocId, relevance: f64, rating: i32) -> Self {
        Document {
            id,
            relevance,
            rating,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Arithmetic mean of the supplied ratings, truncated toward zero.
/// An empty list yields 0.
pub fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}
