//! # Minnow
//!
//! A compact in-memory full-text search engine for short documents.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - TF-IDF relevance ranking with deterministic tie-breaking
//! - Plus/minus query terms and stop-word filtering
//! - Sequential and parallel execution policies for search, match and removal
//! - Batched parallel query evaluation
//! - Duplicate-document detection
//!
//! ## Example
//!
//! ```
//! use minnow::document::DocumentStatus;
//! use minnow::engine::SearchEngine;
//!
//! let mut engine = SearchEngine::new("in the").unwrap();
//! engine
//!     .add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3])
//!     .unwrap();
//!
//! let found = engine.find_top_documents("cat").unwrap();
//! assert_eq!(found[0].id, 42);
//! ```

pub mod analysis;
pub mod document;
pub mod engine;
pub mod error;
pub mod index;
pub mod paginate;
pub mod parallel;
pub mod request_log;
pub mod search;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
