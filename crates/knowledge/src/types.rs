//! Knowledge base type definitions.

use faqdesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Reserved category label meaning "no category restriction".
///
/// Never assigned to a record; only used as a filter value.
pub const ALL_CATEGORY: &str = "All";

/// A single question/answer entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    /// Unique identifier, stable for the lifetime of the base
    pub id: String,

    /// Question as displayed to the user
    pub question: String,

    /// Answer as displayed to the user
    pub answer: String,

    /// Category label from the base's category list
    pub category: String,

    /// Lowercase hints that widen matching beyond question and answer text
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl FaqRecord {
    /// Create a record with the given fields.
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
        keywords: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// An immutable, validated collection of FAQ records.
///
/// Built once and then shared by reference with the matcher, the category
/// filter and the responder. Nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeBase {
    records: Vec<FaqRecord>,
    categories: Vec<String>,
}

impl KnowledgeBase {
    /// Build a knowledge base from records and an optional category list.
    ///
    /// When `categories` is `None` the list is derived from the records in
    /// order of first appearance. `"All"` is always the first published
    /// category. Keywords are lowercased.
    ///
    /// # Errors
    /// Returns `AppError::Knowledge` for duplicate ids, blank questions or
    /// answers, records tagged `"All"`, duplicate category labels, or a
    /// record whose category is missing from the declared list.
    pub fn new(mut records: Vec<FaqRecord>, categories: Option<Vec<String>>) -> AppResult<Self> {
        let mut seen_ids = HashSet::new();
        for record in &mut records {
            if !seen_ids.insert(record.id.clone()) {
                return Err(AppError::Knowledge(format!(
                    "Duplicate FAQ id '{}'",
                    record.id
                )));
            }
            if record.question.trim().is_empty() {
                return Err(AppError::Knowledge(format!(
                    "FAQ '{}' has an empty question",
                    record.id
                )));
            }
            if record.answer.trim().is_empty() {
                return Err(AppError::Knowledge(format!(
                    "FAQ '{}' has an empty answer",
                    record.id
                )));
            }
            if record.category == ALL_CATEGORY {
                return Err(AppError::Knowledge(format!(
                    "FAQ '{}' uses the reserved category '{}'",
                    record.id, ALL_CATEGORY
                )));
            }
            for keyword in &mut record.keywords {
                *keyword = keyword.to_lowercase();
            }
        }

        let declared = match categories {
            Some(list) => list,
            None => {
                let mut derived: Vec<String> = Vec::new();
                for record in &records {
                    if !derived.contains(&record.category) {
                        derived.push(record.category.clone());
                    }
                }
                derived
            }
        };

        let mut published = vec![ALL_CATEGORY.to_string()];
        let mut seen_categories = HashSet::new();
        for category in declared {
            if !seen_categories.insert(category.clone()) {
                return Err(AppError::Knowledge(format!(
                    "Duplicate category '{}'",
                    category
                )));
            }
            if category != ALL_CATEGORY {
                published.push(category);
            }
        }

        if let Some(orphan) = records
            .iter()
            .find(|r| !seen_categories.contains(&r.category))
        {
            return Err(AppError::Knowledge(format!(
                "FAQ '{}' has category '{}' which is not in the category list",
                orphan.id, orphan.category
            )));
        }

        Ok(Self {
            records,
            categories: published,
        })
    }

    /// Assemble a base from records already known to pass `new`'s checks.
    pub(crate) fn from_trusted(records: Vec<FaqRecord>, categories: &[&str]) -> Self {
        let mut published = vec![ALL_CATEGORY.to_string()];
        published.extend(categories.iter().map(|c| c.to_string()));
        Self {
            records,
            categories: published,
        }
    }

    /// All records in their original order.
    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    /// Published category labels, starting with `"All"`.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Whether `category` is a published label (including `"All"`).
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&FaqRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
