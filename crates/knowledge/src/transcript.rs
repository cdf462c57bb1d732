//! In-memory chat transcript.
//!
//! A session lives as long as the conversation and is never persisted.

use crate::respond::Responder;
use crate::types::KnowledgeBase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// First message of every session.
pub const WELCOME_MESSAGE: &str = "Hi! I'm here to help you with SubLease Pro. You can ask me questions or browse our FAQ below. How can I assist you today?";

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// An append-only conversation with the FAQ assistant.
#[derive(Debug, Clone)]
pub struct ChatSession<'a> {
    responder: Responder<'a>,
    messages: Vec<Message>,
}

impl<'a> ChatSession<'a> {
    /// Start a session whose transcript holds only the welcome message.
    pub fn new(base: &'a KnowledgeBase) -> Self {
        Self {
            responder: Responder::new(base),
            messages: vec![Message::new(Role::Assistant, WELCOME_MESSAGE)],
        }
    }

    /// Submit a user message and record the assistant's reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn send(&mut self, text: &str) -> Option<&Message> {
        if text.trim().is_empty() {
            tracing::debug!("Ignoring blank chat message");
            return None;
        }

        let reply = self.responder.reply(text);
        self.messages.push(Message::new(Role::User, text));
        self.messages.push(Message::new(Role::Assistant, reply));
        self.messages.last()
    }

    /// Ask a specific FAQ: its question as the user, its answer verbatim as the reply.
    pub fn ask_record(&mut self, id: &str) -> Option<&Message> {
        let record = self.responder.base().get(id)?;

        self.messages.push(Message::new(Role::User, record.question.as_str()));
        self.messages.push(Message::new(Role::Assistant, record.answer.as_str()));
        self.messages.last()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::respond::{respond, GREETING_REPLY};

    #[test]
    fn test_session_starts_with_welcome() {
        let base = KnowledgeBase::builtin();
        let session = ChatSession::new(&base);

        assert_eq!(session.len(), 1);
        assert!(!session.is_empty());
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.messages()[0].content, WELCOME_MESSAGE);
    }

    #[test]
    fn test_send_appends_user_and_reply() {
        let base = KnowledgeBase::builtin();
        let mut session = ChatSession::new(&base);

        let reply = session.send("hello there").unwrap().clone();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, GREETING_REPLY);

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "hello there");
        assert_ne!(messages[1].id, messages[2].id);
        assert!(messages[1].created_at <= messages[2].created_at);
    }

    #[test]
    fn test_blank_send_is_ignored() {
        let base = KnowledgeBase::builtin();
        let mut session = ChatSession::new(&base);

        assert!(session.send("").is_none());
        assert!(session.send("  \n").is_none());
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_reply_matches_responder() {
        let base = KnowledgeBase::builtin();
        let mut session = ChatSession::new(&base);

        let content = session.send("utilities").unwrap().content.clone();
        assert_eq!(content, respond("utilities", &base));
    }

    #[test]
    fn test_ask_record_uses_raw_answer() {
        let base = KnowledgeBase::builtin();
        let mut session = ChatSession::new(&base);

        let reply = session.ask_record("3").unwrap().content.clone();
        let record = base.get("3").unwrap();
        assert_eq!(reply, record.answer);
        assert_eq!(session.messages()[1].content, record.question);
    }

    #[test]
    fn test_ask_unknown_record() {
        let base = KnowledgeBase::builtin();
        let mut session = ChatSession::new(&base);

        assert!(session.ask_record("404").is_none());
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_message_serializes_with_lowercase_role() {
        let message = Message::new(Role::Assistant, "ok");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "assistant");
        assert!(json.get("createdAt").is_some());
    }
}
