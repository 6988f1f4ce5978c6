//! A short-term logbook of search requests.
//!
//! Records the last day's worth of requests (one request per minute of a
//! day) and how many of them returned no documents. Hosts use this to spot
//! query streams that never find anything.

use std::collections::VecDeque;

use crate::document::{DocId, Document, DocumentStatus};
use crate::engine::SearchEngine;
use crate::error::Result;
use crate::parallel::ExecutionPolicy;

/// Size of the sliding request window.
pub const REQUESTS_PER_DAY: usize = 1_440;

#[derive(Debug, Clone, Copy)]
struct RequestRecord {
    empty_result: bool,
}

/// A bounded FIFO of recent requests against one engine.
///
/// A request that fails to parse propagates its error and is not logged.
#[derive(Debug)]
pub struct RequestLog<'a> {
    engine: &'a SearchEngine,
    requests: VecDeque<RequestRecord>,
    no_result_count: usize,
}

impl<'a> RequestLog<'a> {
    /// Create an empty log over `engine`.
    pub fn new(engine: &'a SearchEngine) -> Self {
        RequestLog {
            engine,
            requests: VecDeque::new(),
            no_result_count: 0,
        }
    }

    /// Run the default search (actual documents) and log the outcome.
    pub fn add_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let found = self.engine.find_top_documents(raw_query)?;
        self.log_request(found.is_empty());
        Ok(found)
    }

    /// Run a status-filtered search and log the outcome.
    pub fn add_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        let found = self.engine.find_top_documents_with_status(
            raw_query,
            status,
            ExecutionPolicy::Sequential,
        )?;
        self.log_request(found.is_empty());
        Ok(found)
    }

    /// Run a predicate-filtered search and log the outcome.
    pub fn add_request_by<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let found =
            self.engine
                .find_top_documents_by(raw_query, predicate, ExecutionPolicy::Sequential)?;
        self.log_request(found.is_empty());
        Ok(found)
    }

    /// How many requests in the current window found nothing.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }

    fn log_request(&mut self, empty_result: bool) {
        if empty_result {
            self.no_result_count += 1;
        }
        self.requests.push_back(RequestRecord { empty_result });
        if self.requests.len() > REQUESTS_PER_DAY {
            if let Some(oldest) = self.requests.pop_front() {
                if oldest.empty_result {
                    self.no_result_count -= 1;
                }
            }
        }
    }
}
