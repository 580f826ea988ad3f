//! Conversation turn entity.
//!
//! Turns are immutable records of the user/assistant exchange within a
//! session. The raw message text is recorded as-is; validation of what the
//! customer said is the dialogue engine's problem, not the history's.

use crate::domain::foundation::{MessageId, Timestamp};
use serde::{Deserialize, Serialize};

/// Role of a turn's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Customer input.
    User,
    /// Engine response.
    Assistant,
}

/// An immutable turn within a session's conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Unique identifier for this turn.
    id: MessageId,

    /// Who authored the turn.
    role: Role,

    /// The raw text of the turn.
    content: String,

    /// When the turn was recorded.
    created_at: Timestamp,
}

impl Turn {
    /// Creates a new turn with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content: content.into(),
            created_at: Timestamp::now(),
        }
    }

    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Returns the turn id.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the author role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the turn text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the turn was recorded.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
