//! The index store and its mutators.
//!
//! Two mirrored indices are kept: term → (doc → tf) for query-time scoring
//! and doc → (term → tf) for O(|doc|) matching and removal. Every public
//! mutation either completes or leaves the store untouched; validation
//! happens before the first write.
//!
//! Terms are interned as `Arc<str>`: each distinct term is allocated once
//! and both indices share the allocation.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use ahash::AHashSet;
use log::debug;
use rayon::prelude::*;

use crate::analysis::tokenizer::{is_valid_word, split_words};
use crate::document::{average_rating, DocId, DocumentStatus};
use crate::error::{MinnowError, Result};
use crate::parallel::ExecutionPolicy;

/// An interned term. Shared between the two indices and handed out by the
/// matcher.
pub type Term = Arc<str>;

/// Per-document metadata retained by the store.
#[derive(Debug, Clone)]
pub struct DocumentMeta {
    /// Mean rating, truncated toward zero.
    pub rating: i32,

    /// Moderation status.
    pub status: DocumentStatus,

    /// The document text as supplied at insertion.
    pub content: String,
}

/// The in-memory index over all live documents.
#[derive(Debug, Default)]
pub struct IndexStore {
    stop_words: AHashSet<String>,
    term_to_docs: BTreeMap<Term, BTreeMap<DocId, f64>>,
    doc_to_terms: BTreeMap<DocId, BTreeMap<Term, f64>>,
    docs: BTreeMap<DocId, DocumentMeta>,
    added_ids: BTreeSet<DocId>,
}

impl IndexStore {
    /// Create an empty store with a fixed stop-word set. Stop words are
    /// never indexed and never admitted into queries.
    pub fn new(stop_words: AHashSet<String>) -> Self {
        IndexStore {
            stop_words,
            ..IndexStore::default()
        }
    }

    /// The stop-word set the store was built with.
    pub fn stop_words(&self) -> &AHashSet<String> {
        &self.stop_words
    }

    /// Number of live documents, including ones with empty content.
    pub fn document_count(&self) -> usize {
        self.docs.len()
    }

    /// Live document ids in ascending order.
    pub fn ids(&self) -> std::iter::Copied<std::collections::btree_set::Iter<'_, DocId>> {
        self.added_ids.iter().copied()
    }

    /// Metadata of a live document.
    pub fn meta(&self, id: DocId) -> Option<&DocumentMeta> {
        self.docs.get(&id)
    }

    /// The doc → tf postings of a term, if any document contains it.
    pub fn postings(&self, word: &str) -> Option<&BTreeMap<DocId, f64>> {
        self.term_to_docs.get(word)
    }

    /// The term → tf map of a document, if it has indexed content.
    pub fn doc_terms(&self, id: DocId) -> Option<&BTreeMap<Term, f64>> {
        self.doc_to_terms.get(&id)
    }

    /// All distinct indexed terms, in ascending order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.term_to_docs.keys()
    }

    /// Term frequencies of a document, or an empty map for an id that is
    /// not indexed. Returned by value; there is no hidden fallback state.
    pub fn word_frequencies(&self, id: DocId) -> BTreeMap<Term, f64> {
        self.doc_to_terms.get(&id).cloned().unwrap_or_default()
    }

    /// Add a document.
    ///
    /// Fails with [`MinnowError::NegativeId`] for a negative id,
    /// [`MinnowError::DuplicateId`] for an id already live, and
    /// [`MinnowError::InvalidTerm`] for any invalid token in `text`.
    /// On failure the store is unchanged.
    pub fn add(
        &mut self,
        id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if id < 0 {
            return Err(MinnowError::NegativeId(id));
        }
        if self.docs.contains_key(&id) {
            return Err(MinnowError::DuplicateId(id));
        }
        let tokens = split_words(text);
        for token in &tokens {
            if !is_valid_word(token) {
                return Err(MinnowError::invalid_term(*token));
            }
        }
        let words: Vec<&str> = tokens
            .into_iter()
            .filter(|word| !self.stop_words.contains(*word))
            .collect();

        if !words.is_empty() {
            let tf_increment = 1.0 / words.len() as f64;
            let mut term_freqs: BTreeMap<Term, f64> = BTreeMap::new();
            for word in words {
                let term = self.intern(word);
                *term_freqs.entry(term).or_insert(0.0) += tf_increment;
            }
            for (term, tf) in &term_freqs {
                self.term_to_docs
                    .entry(term.clone())
                    .or_default()
                    .insert(id, *tf);
            }
            debug!("indexed document {id} with {} distinct terms", term_freqs.len());
            self.doc_to_terms.insert(id, term_freqs);
        } else {
            debug!("indexed document {id} with no searchable terms");
        }

        self.docs.insert(
            id,
            DocumentMeta {
                rating: average_rating(ratings),
                status,
                content: text.to_string(),
            },
        );
        self.added_ids.insert(id);
        Ok(())
    }

    /// Remove a live document. Fails with [`MinnowError::UnknownDoc`] if
    /// the id is not live; the store is unchanged in that case.
    ///
    /// Posting maps that become empty are deleted eagerly, so no term ever
    /// maps to an empty doc-map.
    pub fn remove(&mut self, id: DocId, policy: ExecutionPolicy) -> Result<()> {
        if !self.docs.contains_key(&id) {
            return Err(MinnowError::UnknownDoc(id));
        }
        let doc_terms = self.doc_to_terms.remove(&id).unwrap_or_default();
        match policy {
            ExecutionPolicy::Sequential => {
                for term in doc_terms.keys() {
                    let emptied = match self.term_to_docs.get_mut(term) {
                        Some(postings) => {
                            postings.remove(&id);
                            postings.is_empty()
                        }
                        None => false,
                    };
                    if emptied {
                        self.term_to_docs.remove(term);
                    }
                }
            }
            ExecutionPolicy::Parallel => {
                // Unlink disjoint posting maps concurrently, then sweep
                // emptied entries.
                let doomed: AHashSet<&Term> = doc_terms.keys().collect();
                let touched: Vec<&mut BTreeMap<DocId, f64>> = self
                    .term_to_docs
                    .iter_mut()
                    .filter(|(term, _)| doomed.contains(term))
                    .map(|(_, postings)| postings)
                    .collect();
                touched.into_par_iter().for_each(|postings| {
                    postings.remove(&id);
                });
                for term in doc_terms.keys() {
                    if self
                        .term_to_docs
                        .get(term)
                        .is_some_and(|postings| postings.is_empty())
                    {
                        self.term_to_docs.remove(term);
                    }
                }
            }
        }
        self.docs.remove(&id);
        self.added_ids.remove(&id);
        debug!("removed document {id}");
        Ok(())
    }

    /// Reuse the index's allocation for `word` if it is already interned.
    fn intern(&self, word: &str) -> Term {
        match self.term_to_docs.get_key_value(word) {
            Some((term, _)) => term.clone(),
            None => Term::from(word),
        }
    }
}
