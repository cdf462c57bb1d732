//! Invariants of search, filtering and replies over the built-in set.

use crate::respond::respond;
use crate::search::{filter_by_category, match_records};
use crate::types::{FaqRecord, KnowledgeBase, ALL_CATEGORY};

#[cfg(test)]
mod tests {
    use super::*;

    /// Position of each result in the base; panics if a result is foreign.
    fn positions(base: &KnowledgeBase, results: &[&FaqRecord]) -> Vec<usize> {
        results
            .iter()
            .map(|r| {
                base.records()
                    .iter()
                    .position(|b| b.id == r.id)
                    .expect("result not in base")
            })
            .collect()
    }

    /// A spread of queries: every word of every question, plus odd inputs.
    fn sample_queries(base: &KnowledgeBase) -> Vec<String> {
        let mut queries: Vec<String> = base
            .records()
            .iter()
            .flat_map(|r| r.question.split_whitespace().map(|w| w.to_string()))
            .collect();
        queries.extend(
            ["a", "SUB", "lease agreement", "zzz", "?", "'", "summer", "Ü"]
                .iter()
                .map(|s| s.to_string()),
        );
        queries
    }

    #[test]
    fn test_every_question_matches_its_record() {
        let base = KnowledgeBase::builtin();
        for record in base.records() {
            let results = match_records(&record.question, &base);
            assert!(
                results.iter().any(|r| r.id == record.id),
                "record {} not found by its own question",
                record.id
            );
        }
    }

    #[test]
    fn test_results_are_ordered_subsets() {
        let base = KnowledgeBase::builtin();
        for query in sample_queries(&base) {
            let results = match_records(&query, &base);
            let pos = positions(&base, &results);
            assert!(
                pos.windows(2).all(|w| w[0] < w[1]),
                "query {:?} broke base order: {:?}",
                query,
                pos
            );
        }
    }

    #[test]
    fn test_blank_queries_return_base() {
        let base = KnowledgeBase::builtin();
        for query in ["", " ", "\t", "\n  \r\n"] {
            let results: Vec<FaqRecord> =
                match_records(query, &base).into_iter().cloned().collect();
            assert_eq!(results, base.records());
        }
    }

    #[test]
    fn test_all_category_returns_base() {
        let base = KnowledgeBase::builtin();
        let results: Vec<FaqRecord> = filter_by_category(ALL_CATEGORY, &base)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(results, base.records());
    }

    #[test]
    fn test_category_results_share_the_label() {
        let base = KnowledgeBase::builtin();
        let mut covered = 0;
        for category in base.categories().iter().skip(1) {
            let results = filter_by_category(category, &base);
            assert!(results.iter().all(|r| &r.category == category));
            covered += results.len();
        }
        assert_eq!(covered, base.len());
    }

    #[test]
    fn test_respond_is_deterministic() {
        let base = KnowledgeBase::builtin();
        for query in sample_queries(&base) {
            assert_eq!(respond(&query, &base), respond(&query, &base));
        }
    }

    #[test]
    fn test_base_is_unchanged_by_queries() {
        let base = KnowledgeBase::builtin();
        let snapshot = base.clone();
        for query in sample_queries(&base) {
            let _ = match_records(&query, &base);
            let _ = respond(&query, &base);
        }
        assert_eq!(base, snapshot);
    }
}
