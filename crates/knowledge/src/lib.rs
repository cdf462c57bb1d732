//! FAQ knowledge base, search and chat replies.
//!
//! The knowledge base is built once and passed by reference to every
//! operation. Searching, filtering and responding are pure functions of
//! their inputs and never fail.

pub mod loader;
pub mod respond;
pub mod search;
pub mod seed;
pub mod transcript;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use loader::{load_knowledge_base, save_knowledge_base};
pub use respond::{respond, Responder};
pub use search::{filter_by_category, match_records, FaqView};
pub use transcript::{ChatSession, Message, Role};
pub use types::{FaqRecord, KnowledgeBase, ALL_CATEGORY};
