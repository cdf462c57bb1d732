//! Chat replies built from the FAQ set.
//!
//! The first matching record answers the message. When nothing matches,
//! a few fixed keyword triggers are tried in order, then a generic reply.

use crate::search::match_records;
use crate::types::KnowledgeBase;

/// Opens a reply built from a matched FAQ answer.
pub const MATCH_LEAD_IN: &str = "Great question! ";

/// Closes a reply built from a matched FAQ answer.
pub const MATCH_TRAILER: &str = "\n\nWould you like to see more related FAQs? You can check the FAQ section for more detailed information.";

/// Reply to greetings.
pub const GREETING_REPLY: &str =
    "Hello! I'm here to help you with any questions about SubLease Pro. What would you like to know?";

/// Reply to requests for help.
pub const HELP_REPLY: &str = "I can help you with various topics including:\n• Listing your property\n• Finding subleases\n• Payment and verification\n• Documentation requirements\n• Student housing questions\n\nWhat specific area would you like help with?";

/// Reply to questions about contacting support.
pub const SUPPORT_REPLY: &str = "For additional support, you can:\n• Check our comprehensive FAQ section\n• Email us at support@subleasepro.com\n• Use our contact form in the app\n\nI'm also here to answer any immediate questions!";

/// Reply when nothing else applies.
pub const FALLBACK_REPLY: &str = "I understand you're asking about that topic. While I may not have a specific answer, I recommend checking our FAQ section or contacting our support team for detailed assistance. Is there anything else I can help you with?";

/// Keyword triggers tried in order; the first hit wins.
const TRIGGERS: [(&[&str], &str); 3] = [
    (&["hello", "hi"], GREETING_REPLY),
    (&["help"], HELP_REPLY),
    (&["contact", "support"], SUPPORT_REPLY),
];

/// Produce the assistant's reply to `message`.
///
/// Blank messages never match a record (a blank search would otherwise
/// "match" the first one) and end at the generic reply.
pub fn respond(message: &str, base: &KnowledgeBase) -> String {
    if !message.trim().is_empty() {
        if let Some(best) = match_records(message, base).first() {
            tracing::debug!("Answering from FAQ '{}'", best.id);
            return format!("{}{}{}", MATCH_LEAD_IN, best.answer, MATCH_TRAILER);
        }
    }

    let lower = message.to_lowercase();
    for (keywords, reply) in TRIGGERS {
        if keywords.iter().any(|k| lower.contains(k)) {
            tracing::debug!("Answering from keyword trigger {:?}", keywords);
            return reply.to_string();
        }
    }

    tracing::debug!("No FAQ or trigger matched; using fallback reply");
    FALLBACK_REPLY.to_string()
}

/// Answers chat messages from one knowledge base.
#[derive(Debug, Clone, Copy)]
pub struct Responder<'a> {
    base: &'a KnowledgeBase,
}

impl<'a> Responder<'a> {
    pub fn new(base: &'a KnowledgeBase) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &'a KnowledgeBase {
        self.base
    }

    pub fn reply(&self, message: &str) -> String {
        respond(message, self.base)
    }
}
