//! Query evaluation: TF-IDF ranking and per-document matching.

pub mod matcher;
pub mod searcher;

pub use matcher::match_document;
pub use searcher::{find_top, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};
