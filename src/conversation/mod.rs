//! Conversation types
//!
//! A conversation is an ordered log of role-tagged messages owned by the
//! caller. Nothing in this crate mutates a conversation it is handed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum message length accepted at the service boundary
pub const MAX_CONTENT_CHARS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Length of the content in characters (not bytes)
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Check the content against a caller-chosen character limit.
    ///
    /// Returns the actual length on failure so the caller can report it.
    pub fn validate_length(&self, limit: usize) -> Result<(), usize> {
        let len = self.char_len();
        if len > limit {
            Err(len)
        } else {
            Ok(())
        }
    }
}

/// Find the most recent message authored by the user.
///
/// Trailing assistant and system messages are skipped.
pub fn last_user_message(messages: &[Message]) -> Option<&Message> {
    messages.iter().rev().find(|m| m.role == Role::User)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
        }
    }

    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            id: Uuid::new_v4(),
            messages,
        }
    }

    pub fn with_system(mut self, prompt: &str) -> Self {
        self.messages.push(Message::system(prompt));
        self
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn add_user(&mut self, content: &str) {
        self.push(Message::user(content));
    }

    pub fn add_assistant(&mut self, content: &str) {
        self.push(Message::assistant(content));
    }

    pub fn last_user_message(&self) -> Option<&Message> {
        last_user_message(&self.messages)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_user_message_skips_trailing_replies() {
        let mut conversation = Conversation::new().with_system("be kind");
        conversation.add_user("first");
        conversation.add_assistant("reply");
        conversation.add_user("second");
        conversation.add_assistant("another reply");
        conversation.push(Message::system("note"));

        let last = conversation.last_user_message().unwrap();
        assert_eq!(last.content, "second");
    }

    #[test]
    fn test_no_user_message() {
        let conversation = Conversation::new().with_system("prompt");
        assert!(conversation.last_user_message().is_none());
        assert!(last_user_message(&[]).is_none());
    }

    #[test]
    fn test_validate_length_counts_chars() {
        // Multi-byte characters count once each
        let message = Message::user("é".repeat(MAX_CONTENT_CHARS));
        assert!(message.validate_length(MAX_CONTENT_CHARS).is_ok());

        let message = Message::user("a".repeat(MAX_CONTENT_CHARS + 1));
        assert_eq!(
            message.validate_length(MAX_CONTENT_CHARS),
            Err(MAX_CONTENT_CHARS + 1)
        );
    }

    #[test]
    fn test_deserialize_without_timestamp() {
        let message: Message =
            serde_json::from_str(r#"{"role": "user", "content": "hello"}"#).unwrap();
        assert_eq!(message.role, Role::User);
        assert_eq!(message.content, "hello");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}
