//! FAQ search and browsing.
//!
//! Two selection modes feed the FAQ list: a free-text search over
//! question, answer and keywords, and an exact category filter. Neither
//! scores or reorders records; results keep knowledge-base order.

use crate::types::{FaqRecord, KnowledgeBase, ALL_CATEGORY};
use serde::{Deserialize, Serialize};

/// Return the records relevant to `query`.
///
/// Matching is a case-insensitive substring test against the question, the
/// answer and each keyword, so "apart" matches "apartment". A blank query
/// returns every record.
pub fn match_records<'a>(query: &str, base: &'a KnowledgeBase) -> Vec<&'a FaqRecord> {
    if query.trim().is_empty() {
        return base.records().iter().collect();
    }

    let needle = query.to_lowercase();
    let matches: Vec<&FaqRecord> = base
        .records()
        .iter()
        .filter(|record| is_match(record, &needle))
        .collect();

    tracing::debug!("Query {:?} matched {} FAQ records", query, matches.len());
    matches
}

/// `needle` must already be lowercase.
fn is_match(record: &FaqRecord, needle: &str) -> bool {
    record.question.to_lowercase().contains(needle)
        || record.answer.to_lowercase().contains(needle)
        || record
            .keywords
            .iter()
            .any(|keyword| keyword.to_lowercase().contains(needle))
}

/// Return the records tagged with `category`, or all records for `"All"`.
///
/// Labels compare exactly. An unknown label yields no records.
pub fn filter_by_category<'a>(category: &str, base: &'a KnowledgeBase) -> Vec<&'a FaqRecord> {
    if category == ALL_CATEGORY {
        return base.records().iter().collect();
    }

    base.records()
        .iter()
        .filter(|record| record.category == category)
        .collect()
}

/// Selection state of an FAQ list: a search box and a category picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqView {
    pub query: String,
    pub category: String,
}

impl Default for FaqView {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORY.to_string(),
        }
    }
}

impl FaqView {
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    /// Whether the search box takes precedence over the category picker.
    pub fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    /// Records to display. A non-empty query wins over the selected category.
    pub fn results<'a>(&self, base: &'a KnowledgeBase) -> Vec<&'a FaqRecord> {
        if self.is_searching() {
            match_records(&self.query, base)
        } else {
            filter_by_category(&self.category, base)
        }
    }

    /// List heading for `count` displayed records.
    pub fn heading(&self, count: usize) -> String {
        if self.is_searching() {
            format!("Search Results ({})", count)
        } else if self.category == ALL_CATEGORY {
            format!("All Questions ({})", count)
        } else {
            format!("{} ({})", self.category, count)
        }
    }
}
