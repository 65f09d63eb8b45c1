//! Core identifier types for the Vibe application.
//!
//! Every domain entity (user, post, comment, conversation, message, event)
//! is identified by a typed wrapper over a UUID. Typed identifiers keep the
//! stores from accepting a post id where a conversation id is expected, and
//! give fixtures and tests deterministic constructors.

pub mod identifiers;

pub use identifiers::{CommentId, ConversationId, EventId, MessageId, PostId, UserId};
