//! # View State Module
//!
//! The state stores the frontends read from and mutate through. Each store
//! exclusively owns one domain collection; nested entities (comments,
//! messages) are owned by their parent record and have no independent
//! lifecycle.

pub mod events;
pub mod feed;
pub mod messaging;
pub mod session;

// Re-export state types for convenience
pub use events::{Event, EventCategory, EventsState};
pub use feed::{
    AuthorSnapshot, Comment, CommentDraft, EventRef, FeedState, MediaAttachment, MediaKind, Post,
    PostDraft,
};
pub use messaging::{
    Conversation, LastMessage, Message, MessagingState, ParticipantSnapshot,
};
pub use session::{
    ProfilePatch, RegistrationDraft, SessionState, UserProfile, DEFAULT_AVATAR_URL,
};
