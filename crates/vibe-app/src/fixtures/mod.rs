//! # Mock Fixtures
//!
//! Static seed data the stores start from. All identities are deterministic
//! (entropy-derived), so tests can refer to fixture users and records by
//! the same constructors; timestamp offsets are relative to the `now` the
//! caller passes in.

pub mod conversations;
pub mod events;
pub mod posts;
pub mod profile;

pub use conversations::seed_conversations;
pub use events::seed_events;
pub use posts::seed_posts;
pub use profile::seed_profile;

use vibe_core::UserId;

/// Fixture identities, shared across the seed data.
pub mod users {
    use super::UserId;

    /// Sarah Johnson - the default profile
    pub fn sarah() -> UserId {
        UserId::new_from_entropy([1u8; 32])
    }

    /// Marcus Thompson - community leader
    pub fn marcus() -> UserId {
        UserId::new_from_entropy([2u8; 32])
    }

    /// Jennifer Lee - education coordinator
    pub fn jennifer() -> UserId {
        UserId::new_from_entropy([3u8; 32])
    }

    /// David Williams - volunteer
    pub fn david() -> UserId {
        UserId::new_from_entropy([4u8; 32])
    }

    /// Amara Okafor - volunteer
    pub fn amara() -> UserId {
        UserId::new_from_entropy([5u8; 32])
    }
}

/// Fixture avatar URLs.
pub(crate) mod avatars {
    pub const SARAH: &str =
        "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&h=200&fit=crop";
    pub const MARCUS: &str =
        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&h=200&fit=crop";
    pub const JENNIFER: &str =
        "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=200&h=200&fit=crop";
    pub const DAVID: &str =
        "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=200&h=200&fit=crop";
}
