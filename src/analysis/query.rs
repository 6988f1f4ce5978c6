//! Query parsing.
//!
//! A raw query is a space-separated list of terms. A leading `-` marks a
//! minus term: documents containing it are excluded from the result. Stop
//! words are dropped before validation so that e.g. a stop-worded `-the`
//! never reaches the index.

use ahash::AHashSet;

use crate::analysis::tokenizer::{has_control_bytes, split_words};
use crate::error::{MinnowError, Result};

/// A parsed query. Both term lists are sorted and deduplicated, and borrow
/// from the raw query text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<'a> {
    /// Terms that must contribute to relevance.
    pub plus: Vec<&'a str>,

    /// Terms whose presence excludes a document.
    pub minus: Vec<&'a str>,
}

/// Parse `text` into a [`Query`], discarding stop words.
///
/// Fails with [`MinnowError::MalformedQuery`] on a bare `-` or a `--`
/// prefix, and with [`MinnowError::InvalidTerm`] if a term contains
/// control characters.
pub fn parse_query<'a>(text: &'a str, stop_words: &AHashSet<String>) -> Result<Query<'a>> {
    let mut query = Query::default();
    for token in split_words(text) {
        let (word, is_minus) = match token.strip_prefix('-') {
            Some(stripped) => {
                if stripped.is_empty() || stripped.starts_with('-') {
                    return Err(MinnowError::malformed_query(token));
                }
                (stripped, true)
            }
            None => (token, false),
        };
        if stop_words.contains(word) {
            continue;
        }
        if has_control_bytes(word) {
            return Err(MinnowError::invalid_term(word));
        }
        if is_minus {
            query.minus.push(word);
        } else {
            query.plus.push(word);
        }
    }
    query.plus.sort_unstable();
    query.plus.dedup();
    query.minus.sort_unstable();
    query.minus.dedup();
    Ok(query)
}
