//! Knowledge file loading and export.
//!
//! A knowledge file holds a `records` list and an optional `categories`
//! list. Files ending in `.json` are read as JSON, everything else as YAML.

use crate::types::{FaqRecord, KnowledgeBase, ALL_CATEGORY};
use faqdesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk layout of a knowledge file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct KnowledgeFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    categories: Option<Vec<String>>,

    records: Vec<FaqRecord>,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Load and validate a knowledge base from a YAML or JSON file.
pub fn load_knowledge_base(path: &Path) -> AppResult<KnowledgeBase> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Knowledge(format!("Failed to read knowledge file {:?}: {}", path, e))
    })?;

    let file: KnowledgeFile = if is_json(path) {
        serde_json::from_str(&content).map_err(|e| {
            AppError::Knowledge(format!("Failed to parse knowledge file {:?}: {}", path, e))
        })?
    } else {
        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Knowledge(format!("Failed to parse knowledge file {:?}: {}", path, e))
        })?
    };

    let base = KnowledgeBase::new(file.records, file.categories)
        .map_err(|e| AppError::Knowledge(format!("Invalid knowledge file {:?}: {}", path, e)))?;

    tracing::debug!(
        "Loaded {} FAQ records in {} categories from {:?}",
        base.len(),
        base.categories().len() - 1,
        path
    );

    Ok(base)
}

/// Write a knowledge base to `path` as YAML.
pub fn save_knowledge_base(path: &Path, base: &KnowledgeBase) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = KnowledgeFile {
        categories: Some(
            base.categories()
                .iter()
                .filter(|c| c.as_str() != ALL_CATEGORY)
                .cloned()
                .collect(),
        ),
        records: base.records().to_vec(),
    };

    let yaml = serde_yaml::to_string(&file)?;
    fs::write(path, yaml).map_err(|e| {
        AppError::Knowledge(format!("Failed to write knowledge file {:?}: {}", path, e))
    })?;

    tracing::debug!("Exported {} FAQ records to {:?}", base.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const YAML: &str = r#"
records:
  - id: a
    question: How do refunds work?
    answer: Refunds are issued within five days.
    category: Payment
    keywords: [Refund, Money]
  - id: b
    question: Where do I post a listing?
    answer: Use the Post Sublease page.
    category: Listing
"#;

    #[test]
    fn test_load_yaml_derives_categories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("faq.yaml");
        fs::write(&path, YAML).unwrap();

        let base = load_knowledge_base(&path).unwrap();
        assert_eq!(base.len(), 2);
        assert_eq!(base.categories(), &["All", "Payment", "Listing"]);
        assert_eq!(base.get("a").unwrap().keywords, vec!["refund", "money"]);
        assert!(base.get("b").unwrap().keywords.is_empty());
    }

    #[test]
    fn test_load_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("faq.json");
        fs::write(
            &path,
            r#"{"categories":["Payment"],"records":[{"id":"1","question":"Fees?","answer":"Small.","category":"Payment"}]}"#,
        )
        .unwrap();

        let base = load_knowledge_base(&path).unwrap();
        assert_eq!(base.records()[0].question, "Fees?");
    }

    #[test]
    fn test_invalid_records_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("faq.yaml");
        fs::write(
            &path,
            "records:\n  - {id: x, question: Q, answer: A, category: All}\n",
        )
        .unwrap();

        let err = load_knowledge_base(&path).unwrap_err();
        assert!(matches!(err, AppError::Knowledge(_)));
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_knowledge_base(&temp.path().join("absent.yaml"));
        assert!(matches!(result, Err(AppError::Knowledge(_))));
    }

    #[test]
    fn test_export_then_load_builtin() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("faq.yaml");
        let builtin = KnowledgeBase::builtin();

        save_knowledge_base(&path, &builtin).unwrap();
        let loaded = load_knowledge_base(&path).unwrap();

        assert_eq!(loaded, builtin);
    }
}
