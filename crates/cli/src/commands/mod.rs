//! Command handlers for the FAQ desk CLI.
//!
//! This module organizes all CLI commands into separate submodules and
//! holds the helpers they share.

pub mod ask;
pub mod browse;
pub mod chat;
pub mod export;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use browse::{BrowseCommand, CategoriesCommand, SearchCommand};
pub use chat::ChatCommand;
pub use export::ExportCommand;

use faqdesk_core::{config::AppConfig, AppError, AppResult};
use faqdesk_knowledge::{load_knowledge_base, FaqRecord, KnowledgeBase};

/// Shown when a list comes back empty.
pub const NO_RESULTS: &str = "No FAQs found matching your search criteria.";

/// Load the configured knowledge file, or the built-in FAQ set.
pub fn load_base(config: &AppConfig) -> AppResult<KnowledgeBase> {
    match config.knowledge_path() {
        Some(path) => {
            tracing::info!("Loading knowledge file {:?}", path);
            load_knowledge_base(&path)
        }
        None => {
            tracing::debug!("Using built-in FAQ set");
            Ok(KnowledgeBase::builtin())
        }
    }
}

/// Print a JSON value to stdout.
pub fn print_json(value: &serde_json::Value) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Serialization(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

/// Print a headed FAQ list in plain text.
pub fn print_records(heading: &str, records: &[&FaqRecord], with_answers: bool) {
    println!("{}", heading);
    println!();

    if records.is_empty() {
        println!("{}", NO_RESULTS);
        return;
    }

    for record in records {
        println!("[{}] {} ({})", record.id, record.question, record.category);
        if with_answers {
            println!("    {}", record.answer);
            println!();
        }
    }
}
