//! The public search engine facade.
//!
//! [`SearchEngine`] owns the index store and exposes every operation of
//! the crate: document mutation, ranked search, matching, batched query
//! evaluation and duplicate removal. During queries the store is read-only,
//! so `&self` methods are safe to call from many threads at once;
//! mutations take `&mut self`.

use std::collections::btree_set;
use std::collections::BTreeMap;
use std::iter::Copied;

use ahash::AHashSet;
use log::warn;
use rayon::prelude::*;

use crate::analysis::tokenizer::{is_valid_word, split_words};
use crate::document::{DocId, Document, DocumentStatus};
use crate::error::{MinnowError, Result};
use crate::index::dedup;
use crate::index::store::{IndexStore, Term};
use crate::parallel::ExecutionPolicy;
use crate::search::{matcher, searcher};

/// An in-memory TF-IDF search engine over short documents.
#[derive(Debug, Default)]
pub struct SearchEngine {
    store: IndexStore,
}

impl SearchEngine {
    /// Create an engine from a space-separated stop-word string.
    ///
    /// Fails with [`MinnowError::InvalidTerm`] if any stop word is not a
    /// valid term.
    pub fn new(stop_words: &str) -> Result<Self> {
        Self::with_stop_words(split_words(stop_words))
    }

    /// Create an engine from a collection of stop words.
    pub fn with_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = AHashSet::new();
        for word in stop_words {
            let word = word.as_ref();
            if !is_valid_word(word) {
                return Err(MinnowError::invalid_term(word));
            }
            words.insert(word.to_string());
        }
        Ok(SearchEngine {
            store: IndexStore::new(words),
        })
    }

    /// Add a document with the given id, text, status and ratings.
    ///
    /// The stored rating is the mean of `ratings`, truncated toward zero.
    pub fn add_document(
        &mut self,
        id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        self.store.add(id, text, status, ratings)
    }

    /// Search among [`DocumentStatus::Actual`] documents, sequentially.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with_status(
            raw_query,
            DocumentStatus::Actual,
            ExecutionPolicy::Sequential,
        )
    }

    /// Search among documents with the given status.
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
        policy: ExecutionPolicy,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_by(
            raw_query,
            move |_, document_status, _| document_status == status,
            policy,
        )
    }

    /// Search among documents accepted by an arbitrary predicate over
    /// `(id, status, rating)`.
    pub fn find_top_documents_by<P>(
        &self,
        raw_query: &str,
        predicate: P,
        policy: ExecutionPolicy,
    ) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        searcher::find_top(&self.store, raw_query, predicate, policy)
    }

    /// Which plus terms of `raw_query` occur in document `id`; empty if
    /// any minus term does.
    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocId,
    ) -> Result<(Vec<Term>, DocumentStatus)> {
        self.match_document_with_policy(raw_query, id, ExecutionPolicy::Sequential)
    }

    /// [`Self::match_document`] under an explicit execution policy.
    pub fn match_document_with_policy(
        &self,
        raw_query: &str,
        id: DocId,
        policy: ExecutionPolicy,
    ) -> Result<(Vec<Term>, DocumentStatus)> {
        matcher::match_document(&self.store, raw_query, id, policy)
    }

    /// Remove a live document.
    pub fn remove_document(&mut self, id: DocId) -> Result<()> {
        self.remove_document_with_policy(id, ExecutionPolicy::Sequential)
    }

    /// [`Self::remove_document`] under an explicit execution policy.
    pub fn remove_document_with_policy(
        &mut self,
        id: DocId,
        policy: ExecutionPolicy,
    ) -> Result<()> {
        self.store.remove(id, policy)
    }

    /// Term frequencies of a document; empty for an id with no indexed
    /// terms.
    pub fn word_frequencies(&self, id: DocId) -> BTreeMap<Term, f64> {
        self.store.word_frequencies(id)
    }

    /// Number of live documents.
    pub fn document_count(&self) -> usize {
        self.store.document_count()
    }

    /// Live document ids in ascending order.
    pub fn ids(&self) -> Copied<btree_set::Iter<'_, DocId>> {
        self.store.ids()
    }

    /// Evaluate many queries in parallel. The outer order matches the
    /// input order. A query that fails to parse contributes an empty
    /// result; the error is logged.
    pub fn process_queries(&self, queries: &[String]) -> Vec<Vec<Document>> {
        queries
            .par_iter()
            .map(|raw_query| match self.find_top_documents(raw_query) {
                Ok(found) => found,
                Err(error) => {
                    warn!("dropping query {raw_query:?} from batch: {error}");
                    Vec::new()
                }
            })
            .collect()
    }

    /// Like [`Self::process_queries`], flattened in the same order.
    pub fn process_queries_joined(&self, queries: &[String]) -> Vec<Document> {
        self.process_queries(queries).into_iter().flatten().collect()
    }

    /// Remove every document whose term-set duplicates an earlier one,
    /// reporting removed ids through `sink`. The smallest id of every
    /// duplicate class survives.
    pub fn remove_duplicates(&mut self, sink: impl FnMut(DocId)) {
        dedup::remove_duplicates(&mut self.store, sink);
    }
}

impl<'a> IntoIterator for &'a SearchEngine {
    type Item = DocId;
    type IntoIter = Copied<btree_set::Iter<'a, DocId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids()
    }
}
