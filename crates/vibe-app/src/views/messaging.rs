//! # Messaging View State
//!
//! Direct-message conversations with the other party snapshotted inline.
//! `last_message` always mirrors the tail of `messages` whenever the log is
//! non-empty; `send_message` maintains that in a single step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vibe_core::{ConversationId, MessageId, UserId};

// ============================================================================
// Conversation Types
// ============================================================================

/// Denormalized identity of the other conversation party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantSnapshot {
    /// Participant's user id
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Avatar URL
    pub avatar: String,
}

/// Summary of the newest message, kept on the conversation for list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastMessage {
    /// Message text
    pub content: String,
    /// When it was sent
    pub timestamp: DateTime<Utc>,
}

/// A direct message. Append-only; owned by its conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier
    pub id: MessageId,
    /// Who sent it
    pub sender_id: UserId,
    /// Who it was sent to
    pub receiver_id: UserId,
    /// Message text
    pub content: String,
    /// When it was sent
    pub timestamp: DateTime<Utc>,
    /// Whether the recipient has read it
    pub read: bool,
}

/// A conversation with one other participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Conversation identifier
    pub id: ConversationId,
    /// The other party
    pub participant: ParticipantSnapshot,
    /// Mirror of the newest message; `Some` whenever `messages` is non-empty
    pub last_message: Option<LastMessage>,
    /// Unread message count
    pub unread_count: u32,
    /// Message log in send order
    pub messages: Vec<Message>,
}

// ============================================================================
// MessagingState
// ============================================================================

/// Messaging state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagingState {
    conversations: Vec<Conversation>,
}

impl MessagingState {
    /// Create an empty messaging state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from seed conversations, preserving their order.
    pub fn from_conversations(conversations: Vec<Conversation>) -> Self {
        Self { conversations }
    }

    /// All conversations.
    #[must_use]
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Get a conversation by id.
    pub fn conversation(&self, id: &ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == *id)
    }

    /// Get a mutable conversation by id.
    pub fn conversation_mut(&mut self, id: &ConversationId) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == *id)
    }

    /// Append a message to a conversation and mirror `last_message` from it.
    ///
    /// The receiver is the conversation's participant, the message starts
    /// unread, and the unread counter is untouched - it tracks messages the
    /// other party sent, not our own. Returns whether the conversation was
    /// found.
    pub fn send_message(
        &mut self,
        conversation_id: &ConversationId,
        sender_id: UserId,
        content: impl Into<String>,
    ) -> bool {
        let Some(conversation) = self.conversation_mut(conversation_id) else {
            return false;
        };

        let content = content.into();
        let message = Message {
            id: MessageId::new(),
            sender_id,
            receiver_id: conversation.participant.id,
            content: content.clone(),
            timestamp: Utc::now(),
            read: false,
        };
        conversation.last_message = Some(LastMessage {
            content,
            timestamp: message.timestamp,
        });
        conversation.messages.push(message);
        true
    }

    /// Clear a conversation's unread counter and mark every message read.
    ///
    /// Idempotent. Returns whether the conversation was found.
    pub fn mark_as_read(&mut self, conversation_id: &ConversationId) -> bool {
        let Some(conversation) = self.conversation_mut(conversation_id) else {
            return false;
        };
        conversation.unread_count = 0;
        for message in &mut conversation.messages {
            message.read = true;
        }
        true
    }

    /// Total unread count across all conversations.
    #[must_use]
    pub fn total_unread_count(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread_count).sum()
    }
}
