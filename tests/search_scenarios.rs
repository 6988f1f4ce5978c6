#[cfg(test)]
mod tests {
    use minnow::document::{DocId, Document, DocumentStatus};
    use minnow::engine::SearchEngine;
    use minnow::paginate::paginate;
    use minnow::parallel::ExecutionPolicy;
    use minnow::request_log::RequestLog;
    use minnow::search::MAX_RESULT_DOCUMENT_COUNT;

    fn ids(found: &[Document]) -> Vec<DocId> {
        found.iter().map(|doc| doc.id).collect()
    }

    #[test]
    fn test_stop_words_are_excluded_from_search() {
        let mut engine = SearchEngine::new("in the").unwrap();
        engine
            .add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3])
            .unwrap();

        assert!(engine.find_top_documents("in").unwrap().is_empty());

        let found = engine.find_top_documents("the cat").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 42);
        assert!(found[0].relevance > 0.0);
        assert_eq!(found[0].rating, 2);
    }

    #[test]
    fn test_minus_words_exclude_documents() {
        let mut engine = SearchEngine::new("in the").unwrap();
        engine
            .add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3])
            .unwrap();
        engine
            .add_document(
                43,
                "the big brown deogi named shen city",
                DocumentStatus::Actual,
                &[0, 1, 2],
            )
            .unwrap();

        assert_eq!(engine.find_top_documents("city").unwrap().len(), 2);
        assert_eq!(ids(&engine.find_top_documents("city -big").unwrap()), [42]);
    }

    fn ranking_corpus() -> SearchEngine {
        let mut engine = SearchEngine::new("a").unwrap();
        engine
            .add_document(42, "a b c d", DocumentStatus::Actual, &[1, 2, 3])
            .unwrap();
        engine
            .add_document(43, "b c d e", DocumentStatus::Actual, &[0, 1, 2])
            .unwrap();
        engine
            .add_document(0, "c d e f n", DocumentStatus::Actual, &[0, 1, 2])
            .unwrap();
        engine
            .add_document(1, "d e f g k l m", DocumentStatus::Actual, &[0, 1, 2])
            .unwrap();
        engine
            .add_document(2, "e f g z", DocumentStatus::Actual, &[0, 1, 2])
            .unwrap();
        engine
    }

    #[test]
    fn test_relevance_ranking_order() {
        let engine = ranking_corpus();
        assert_eq!(ids(&engine.find_top_documents("e f").unwrap()), [2, 0, 1, 43]);
    }

    #[test]
    fn test_rating_orders_equal_relevance() {
        let mut engine = SearchEngine::new("").unwrap();
        engine
            .add_document(10, "night owl", DocumentStatus::Actual, &[2, 2, 2])
            .unwrap();
        engine
            .add_document(11, "night owl", DocumentStatus::Actual, &[9, 9, 9])
            .unwrap();
        engine
            .add_document(12, "night owl", DocumentStatus::Actual, &[4, 4, 4])
            .unwrap();

        assert_eq!(ids(&engine.find_top_documents("owl").unwrap()), [11, 12, 10]);
    }

    #[test]
    fn test_match_reports_minus_hit_as_empty() {
        let mut engine = SearchEngine::new("in the").unwrap();
        engine
            .add_document(
                43,
                "the big brown deogi named shen city",
                DocumentStatus::Irrelevant,
                &[0, 1, 2],
            )
            .unwrap();

        let (matched, status) = engine.match_document("deogi -brown", 43).unwrap();
        assert!(matched.is_empty());
        assert_eq!(status, DocumentStatus::Irrelevant);

        let (matched, _) = engine.match_document("deogi shen -absent", 43).unwrap();
        let words: Vec<&str> = matched.iter().map(|term| term.as_ref()).collect();
        assert_eq!(words, ["deogi", "shen"]);
    }

    #[test]
    fn test_duplicates_keep_smallest_id() {
        let mut engine = SearchEngine::new("").unwrap();
        engine
            .add_document(3, "pair of socks", DocumentStatus::Actual, &[1])
            .unwrap();
        engine
            .add_document(7, "socks of pair", DocumentStatus::Actual, &[2])
            .unwrap();
        engine
            .add_document(5, "pair pair of socks socks", DocumentStatus::Actual, &[3])
            .unwrap();

        let mut removed = Vec::new();
        engine.remove_duplicates(|id| removed.push(id));

        assert_eq!(removed, [5, 7]);
        let live: Vec<DocId> = engine.ids().collect();
        assert_eq!(live, [3]);
    }

    #[test]
    fn test_idf_numeric_value() {
        // 5 documents; "e" appears in 4 of them; doc 43 has length 4.
        let engine = ranking_corpus();
        let found = engine.find_top_documents("e").unwrap();
        let hit = found.iter().find(|doc| doc.id == 43).unwrap();
        assert!((hit.relevance - 0.055_786).abs() < 1e-6);
    }

    #[test]
    fn test_policies_return_equal_results() {
        let engine = ranking_corpus();
        for query in ["e f", "b -z", "c d e", "nothing here", ""] {
            let sequential = engine
                .find_top_documents_with_status(
                    query,
                    DocumentStatus::Actual,
                    ExecutionPolicy::Sequential,
                )
                .unwrap();
            let parallel = engine
                .find_top_documents_with_status(
                    query,
                    DocumentStatus::Actual,
                    ExecutionPolicy::Parallel,
                )
                .unwrap();
            assert_eq!(sequential, parallel, "policies disagree on {query:?}");
        }
        for id in [0, 1, 2, 42, 43] {
            let sequential = engine
                .match_document_with_policy("c d -q", id, ExecutionPolicy::Sequential)
                .unwrap();
            let parallel = engine
                .match_document_with_policy("c d -q", id, ExecutionPolicy::Parallel)
                .unwrap();
            assert_eq!(sequential, parallel, "match policies disagree on doc {id}");
        }
    }

    #[test]
    fn test_top_k_cap_holds() {
        let mut engine = SearchEngine::new("").unwrap();
        for id in 0..20 {
            engine
                .add_document(id, "shared word", DocumentStatus::Actual, &[id as i32])
                .unwrap();
        }
        let found = engine.find_top_documents("word").unwrap();
        assert_eq!(found.len(), MAX_RESULT_DOCUMENT_COUNT);
        // highest mean ratings win the tie
        assert_eq!(ids(&found), [19, 18, 17, 16, 15]);
    }

    #[test]
    fn test_batched_queries_match_single_queries() {
        let engine = ranking_corpus();
        let queries = vec![
            "e f".to_string(),
            "b".to_string(),
            "missing".to_string(),
            "c -n".to_string(),
        ];
        let batched = engine.process_queries(&queries);
        for (raw_query, batch_result) in queries.iter().zip(&batched) {
            let single = engine.find_top_documents(raw_query).unwrap();
            assert_eq!(&single, batch_result);
        }
        let joined = engine.process_queries_joined(&queries);
        let flattened: Vec<Document> = batched.into_iter().flatten().collect();
        assert_eq!(joined, flattened);
    }

    #[test]
    fn test_removal_affects_ranking_and_idf() {
        let mut engine = ranking_corpus();
        engine.remove_document(2).unwrap();
        let found = engine.find_top_documents("e f").unwrap();
        assert_eq!(ids(&found), [0, 1, 43]);
        assert_eq!(engine.document_count(), 4);
    }

    #[test]
    fn test_request_log_scenario() {
        let mut engine = SearchEngine::new("and in at").unwrap();
        engine
            .add_document(1, "curly cat curly tail", DocumentStatus::Actual, &[7, 2, 7])
            .unwrap();
        engine
            .add_document(2, "curly dog and fancy collar", DocumentStatus::Actual, &[1, 2, 3])
            .unwrap();
        engine
            .add_document(3, "big cat fancy collar", DocumentStatus::Actual, &[1, 2, 8])
            .unwrap();

        let mut log = RequestLog::new(&engine);
        for _ in 0..1_439 {
            log.add_request("empty request").unwrap();
        }
        log.add_request("curly dog").unwrap();
        log.add_request("big collar").unwrap();
        log.add_request("curly cat").unwrap();
        assert_eq!(log.no_result_requests(), 1_437);
    }

    #[test]
    fn test_paginated_results() {
        let mut engine = SearchEngine::new("").unwrap();
        for id in 0..4 {
            engine
                .add_document(id, "page filler", DocumentStatus::Actual, &[id as i32])
                .unwrap();
        }
        let found = engine.find_top_documents("filler").unwrap();
        let pages = paginate(&found, 3);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages.pages()[0].len(), 3);
        assert_eq!(pages.pages()[1].len(), 1);
    }
}
