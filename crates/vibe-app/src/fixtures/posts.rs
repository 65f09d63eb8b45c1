//! Feed post fixtures

use crate::fixtures::{avatars, users};
use crate::views::{AuthorSnapshot, Comment, MediaAttachment, MediaKind, Post};
use chrono::{DateTime, Duration, Utc};
use vibe_core::{CommentId, PostId};

/// Seed posts for the feed, newest-first, with timestamps at fixed offsets
/// before `now`.
pub fn seed_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post {
            id: PostId::new_from_entropy([11u8; 32]),
            author: AuthorSnapshot::with_role(
                users::marcus(),
                "Marcus Thompson",
                avatars::MARCUS,
                "Community Leader",
            ),
            content: "Amazing turnout at today's beach cleanup! We collected over 500 pounds \
                      of trash and made our coastline beautiful again. Thank you to all the \
                      volunteers who came out! 🌊"
                .to_string(),
            timestamp: now - Duration::hours(2),
            likes: vec![users::sarah(), users::jennifer(), users::david()],
            comments: vec![Comment {
                id: CommentId::new_from_entropy([41u8; 32]),
                author: AuthorSnapshot::new(users::sarah(), "Sarah Johnson", avatars::SARAH),
                content: "So proud to be part of this initiative!".to_string(),
                timestamp: now - Duration::hours(1),
            }],
            media: vec![MediaAttachment {
                kind: MediaKind::Image,
                uri: "https://images.unsplash.com/photo-1618477461853-cf6ed80faba5?w=800&h=600&fit=crop"
                    .to_string(),
            }],
            event: None,
        },
        Post {
            id: PostId::new_from_entropy([12u8; 32]),
            author: AuthorSnapshot::with_role(
                users::jennifer(),
                "Jennifer Lee",
                avatars::JENNIFER,
                "Education Coordinator",
            ),
            content: "Looking for volunteers to help with our after-school tutoring program \
                      next week. If you have experience in math or science, we'd love to have \
                      you! DM me for details."
                .to_string(),
            timestamp: now - Duration::hours(5),
            likes: vec![users::sarah(), users::marcus()],
            comments: Vec::new(),
            media: Vec::new(),
            event: None,
        },
        Post {
            id: PostId::new_from_entropy([13u8; 32]),
            author: AuthorSnapshot::with_role(
                users::david(),
                "David Williams",
                avatars::DAVID,
                "Volunteer",
            ),
            content: "Just completed my 100th volunteer hour! This journey has been incredibly \
                      rewarding. Thank you to this amazing community for all the opportunities \
                      to give back."
                .to_string(),
            timestamp: now - Duration::hours(24),
            likes: vec![
                users::sarah(),
                users::marcus(),
                users::jennifer(),
                users::amara(),
            ],
            comments: vec![Comment {
                id: CommentId::new_from_entropy([42u8; 32]),
                author: AuthorSnapshot::new(users::marcus(), "Marcus Thompson", avatars::MARCUS),
                content: "Congratulations David! Well deserved!".to_string(),
                timestamp: now - Duration::hours(23),
            }],
            media: Vec::new(),
            event: None,
        },
    ]
}
