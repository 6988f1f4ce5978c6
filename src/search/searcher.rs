//! TF-IDF ranking.
//!
//! For every plus term the ranker accumulates `tf * ln(N / df)` into the
//! matching documents, drops every document containing a minus term, sorts
//! by relevance with an epsilon tie-break on rating, and truncates to the
//! top five.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::analysis::query::{parse_query, Query};
use crate::document::{DocId, Document, DocumentStatus};
use crate::error::Result;
use crate::index::store::IndexStore;
use crate::parallel::{ConcurrentMap, ExecutionPolicy};

/// Maximum number of documents returned by a single search.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Two relevances closer than this are considered equal and the tie is
/// broken by rating.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Rank the documents accepted by `predicate` against `raw_query` and
/// return at most [`MAX_RESULT_DOCUMENT_COUNT`] hits.
///
/// The sequential and parallel policies return identical results.
pub fn find_top<P>(
    store: &IndexStore,
    raw_query: &str,
    predicate: P,
    policy: ExecutionPolicy,
) -> Result<Vec<Document>>
where
    P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
{
    let query = parse_query(raw_query, store.stop_words())?;
    let mut response = match policy {
        ExecutionPolicy::Sequential => find_all_sequential(store, &query, &predicate),
        ExecutionPolicy::Parallel => find_all_parallel(store, &query, &predicate),
    };
    match policy {
        ExecutionPolicy::Sequential => response.sort_by(compare_documents),
        ExecutionPolicy::Parallel => response.par_sort_by(compare_documents),
    }
    response.truncate(MAX_RESULT_DOCUMENT_COUNT);
    Ok(response)
}

/// Relevance descending; ties within [`RELEVANCE_EPSILON`] fall back to
/// rating descending, then ascending id for a fully deterministic order.
fn compare_documents(lhs: &Document, rhs: &Document) -> Ordering {
    if (lhs.relevance - rhs.relevance).abs() < RELEVANCE_EPSILON {
        rhs.rating
            .cmp(&lhs.rating)
            .then_with(|| lhs.id.cmp(&rhs.id))
    } else {
        rhs.relevance
            .partial_cmp(&lhs.relevance)
            .unwrap_or(Ordering::Equal)
    }
}

fn inverse_document_freq(store: &IndexStore, containing_docs: usize) -> f64 {
    (store.document_count() as f64 / containing_docs as f64).ln()
}

fn collect_documents(store: &IndexStore, relevance: BTreeMap<DocId, f64>) -> Vec<Document> {
    relevance
        .into_iter()
        .filter_map(|(id, relevance)| {
            store
                .meta(id)
                .map(|meta| Document::new(id, relevance, meta.rating))
        })
        .collect()
}

fn find_all_sequential<P>(store: &IndexStore, query: &Query<'_>, predicate: &P) -> Vec<Document>
where
    P: Fn(DocId, DocumentStatus, i32) -> bool,
{
    let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
    for word in &query.plus {
        let Some(postings) = store.postings(word) else {
            continue;
        };
        let idf = inverse_document_freq(store, postings.len());
        for (&id, &tf) in postings {
            let Some(meta) = store.meta(id) else {
                continue;
            };
            if predicate(id, meta.status, meta.rating) {
                *relevance.entry(id).or_insert(0.0) += tf * idf;
            }
        }
    }
    for word in &query.minus {
        let Some(postings) = store.postings(word) else {
            continue;
        };
        for id in postings.keys() {
            relevance.remove(id);
        }
    }
    collect_documents(store, relevance)
}

fn find_all_parallel<P>(store: &IndexStore, query: &Query<'_>, predicate: &P) -> Vec<Document>
where
    P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
{
    let accumulator: ConcurrentMap<DocId, f64> = ConcurrentMap::new();
    query.plus.par_iter().for_each(|word| {
        let Some(postings) = store.postings(word) else {
            return;
        };
        let idf = inverse_document_freq(store, postings.len());
        for (&id, &tf) in postings {
            let Some(meta) = store.meta(id) else {
                continue;
            };
            if predicate(id, meta.status, meta.rating) {
                *accumulator.access(id) += tf * idf;
            }
        }
    });
    query.minus.par_iter().for_each(|word| {
        let Some(postings) = store.postings(word) else {
            return;
        };
        for &id in postings.keys() {
            accumulator.erase(id);
        }
    });
    collect_documents(store, accumulator.build_ordinary_map())
}
