//! Duplicate-document detection.
//!
//! Two documents are duplicates when they index the same set of terms,
//! regardless of frequencies. The scan walks live ids in ascending order,
//! so the smallest id of every equivalence class survives.

use ahash::AHashSet;
use log::debug;

use crate::document::DocId;
use crate::index::store::{IndexStore, Term};
use crate::parallel::ExecutionPolicy;

/// Remove every document whose term-set duplicates an earlier one.
/// Each removed id is reported through `sink`.
pub fn remove_duplicates(store: &mut IndexStore, mut sink: impl FnMut(DocId)) {
    let mut seen: AHashSet<Vec<Term>> = AHashSet::new();
    let mut to_remove: Vec<DocId> = Vec::new();
    for id in store.ids() {
        // BTreeMap keys come out sorted, so equal term-sets produce equal
        // signatures.
        let signature: Vec<Term> = store
            .doc_terms(id)
            .map(|terms| terms.keys().cloned().collect())
            .unwrap_or_default();
        if !seen.insert(signature) {
            to_remove.push(id);
        }
    }
    for id in to_remove {
        if store.remove(id, ExecutionPolicy::Sequential).is_ok() {
            debug!("found duplicate document id {id}");
            sink(id);
        }
    }
}
