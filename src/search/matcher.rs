//! Per-document query matching.
//!
//! Reports which plus terms of a query occur in one given document. Any
//! minus-term hit short-circuits to an empty match, the document's status
//! is returned either way.

use rayon::prelude::*;

use crate::analysis::query::parse_query;
use crate::document::{DocId, DocumentStatus};
use crate::error::{MinnowError, Result};
use crate::index::store::{IndexStore, Term};
use crate::parallel::ExecutionPolicy;

/// Match `raw_query` against one document.
///
/// Returns the sorted, deduplicated plus terms occurring in the document,
/// or an empty list if any minus term occurs in it. Fails with
/// [`MinnowError::UnknownDoc`] when `id` has no indexed terms.
pub fn match_document(
    store: &IndexStore,
    raw_query: &str,
    id: DocId,
    policy: ExecutionPolicy,
) -> Result<(Vec<Term>, DocumentStatus)> {
    let doc_terms = store.doc_terms(id).ok_or(MinnowError::UnknownDoc(id))?;
    let status = store
        .meta(id)
        .map(|meta| meta.status)
        .ok_or(MinnowError::UnknownDoc(id))?;
    let query = parse_query(raw_query, store.stop_words())?;

    let matched = match policy {
        ExecutionPolicy::Sequential => {
            if query.minus.iter().any(|word| doc_terms.contains_key(*word)) {
                return Ok((Vec::new(), status));
            }
            // query terms are already sorted and unique
            query
                .plus
                .iter()
                .filter_map(|word| doc_terms.get_key_value(*word))
                .map(|(term, _)| term.clone())
                .collect()
        }
        ExecutionPolicy::Parallel => {
            if query
                .minus
                .par_iter()
                .any(|word| doc_terms.contains_key(*word))
            {
                return Ok((Vec::new(), status));
            }
            let mut matched: Vec<Term> = query
                .plus
                .par_iter()
                .filter_map(|word| doc_terms.get_key_value(*word))
                .map(|(term, _)| term.clone())
                .collect();
            matched.par_sort_unstable();
            matched.dedup();
            matched
        }
    };
    Ok((matched, status))
}
