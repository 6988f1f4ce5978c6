//! Text analysis: word splitting, term validation and query parsing.

pub mod query;
pub mod tokenizer;

pub use query::{parse_query, Query};
pub use tokenizer::{is_valid_word, split_words};
