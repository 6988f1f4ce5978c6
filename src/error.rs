//! Error types for the minnow library.
//!
//! Every fallible operation in the crate returns [`Result`], and every
//! failure is a [`MinnowError`]. A failed call never leaves the engine in a
//! partially mutated state.

use thiserror::Error;

use crate::document::DocId;

/// The main error type for minnow operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MinnowError {
    /// A term contains control characters, or is a bare/double dash where a
    /// plain term is required.
    #[error("invalid term {0:?}")]
    InvalidTerm(String),

    /// A query uses malformed minus syntax (`-` on its own or `--term`).
    #[error("malformed query term {0:?}")]
    MalformedQuery(String),

    /// A document with this id has already been added.
    #[error("document id {0} is already in the index")]
    DuplicateId(DocId),

    /// Document ids must be non-negative.
    #[error("document id {0} is negative")]
    NegativeId(DocId),

    /// The id does not refer to a live document.
    #[error("unknown document id {0}")]
    UnknownDoc(DocId),
}

/// Result type alias for operations that may fail with [`MinnowError`].
pub type Result<T> = std::result::Result<T, MinnowError>;

impl MinnowError {
    /// Create a new invalid-term error.
    pub fn invalid_term<S: Into<String>>(term: S) -> Self {
        MinnowError::InvalidTerm(term.into())
    }

    /// Create a new malformed-query error.
    pub fn malformed_query<S: Into<String>>(term: S) -> Self {
        MinnowError::MalformedQuery(term.into())
    }
}
