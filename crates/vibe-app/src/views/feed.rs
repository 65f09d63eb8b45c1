//! # Feed View State
//!
//! The ordered list of posts with their nested likes and comments. The feed
//! is newest-first by insertion: `add_post` prepends, and insertion order is
//! authoritative - posts are never re-sorted by timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vibe_core::{CommentId, EventId, PostId, UserId};

// ============================================================================
// Post Types
// ============================================================================

/// Denormalized author identity embedded in posts and comments.
///
/// A snapshot, not a reference: renaming a user later does not rewrite what
/// they already posted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSnapshot {
    /// Author's user id
    pub id: UserId,
    /// Display name at posting time
    pub name: String,
    /// Avatar URL at posting time
    pub avatar: String,
    /// Community role shown next to the name, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl AuthorSnapshot {
    /// Snapshot without a role (comment authors).
    pub fn new(id: UserId, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: avatar.into(),
            role: None,
        }
    }

    /// Snapshot with a role label.
    pub fn with_role(
        id: UserId,
        name: impl Into<String>,
        avatar: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: avatar.into(),
            role: Some(role.into()),
        }
    }
}

/// Kind of media attached to a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image
    Image,
    /// Video clip
    Video,
}

/// A media attachment on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAttachment {
    /// Attachment kind
    pub kind: MediaKind,
    /// Where the media lives
    pub uri: String,
}

/// Reference from a post to the event it talks about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRef {
    /// Event identifier
    pub id: EventId,
    /// Event name at posting time
    pub name: String,
    /// Event date at posting time
    pub date: String,
    /// Event location at posting time
    pub location: String,
}

/// A comment on a post. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier
    pub id: CommentId,
    /// Who wrote it
    pub author: AuthorSnapshot,
    /// Comment text
    pub content: String,
    /// When it was written
    pub timestamp: DateTime<Utc>,
}

/// A feed post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier
    pub id: PostId,
    /// Who posted it
    pub author: AuthorSnapshot,
    /// Post text
    pub content: String,
    /// When it was created
    pub timestamp: DateTime<Utc>,
    /// Ids of users who liked the post; each id appears at most once
    pub likes: Vec<UserId>,
    /// Comments in insertion order
    pub comments: Vec<Comment>,
    /// Attached media
    #[serde(default)]
    pub media: Vec<MediaAttachment>,
    /// Event this post refers to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<EventRef>,
}

/// Caller-supplied fields for a new post; the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct PostDraft {
    /// Who is posting
    pub author: AuthorSnapshot,
    /// Post text
    pub content: String,
    /// Attached media
    pub media: Vec<MediaAttachment>,
    /// Event reference
    pub event: Option<EventRef>,
}

impl PostDraft {
    /// A plain text post.
    pub fn text(author: AuthorSnapshot, content: impl Into<String>) -> Self {
        Self {
            author,
            content: content.into(),
            media: Vec::new(),
            event: None,
        }
    }
}

/// Caller-supplied fields for a new comment.
#[derive(Debug, Clone)]
pub struct CommentDraft {
    /// Who is commenting
    pub author: AuthorSnapshot,
    /// Comment text
    pub content: String,
}

// ============================================================================
// FeedState
// ============================================================================

/// Feed state.
///
/// All mutations are synchronous total functions: a missing post id leaves
/// the state unchanged and reports `false`, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedState {
    posts: Vec<Post>,
}

impl FeedState {
    /// Create an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a feed from seed posts, preserving their order.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Posts, newest-first.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Get a post by id.
    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == *id)
    }

    /// Get a mutable post by id.
    pub fn post_mut(&mut self, id: &PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == *id)
    }

    /// Number of posts in the feed.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the feed is empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Create a post from a draft and prepend it to the feed.
    ///
    /// Assigns a fresh id and timestamp; likes and comments start empty.
    /// Returns the new post.
    pub fn add_post(&mut self, draft: PostDraft) -> &Post {
        let post = Post {
            id: PostId::new(),
            author: draft.author,
            content: draft.content,
            timestamp: Utc::now(),
            likes: Vec::new(),
            comments: Vec::new(),
            media: draft.media,
            event: draft.event,
        };
        self.posts.insert(0, post);
        &self.posts[0]
    }

    /// Toggle a user's like on a post.
    ///
    /// Removes the id if present, appends it otherwise; two consecutive
    /// calls restore the original like set. Returns whether the post was
    /// found.
    pub fn toggle_like(&mut self, post_id: &PostId, user_id: UserId) -> bool {
        let Some(post) = self.post_mut(post_id) else {
            return false;
        };
        if post.likes.contains(&user_id) {
            post.likes.retain(|id| *id != user_id);
        } else {
            post.likes.push(user_id);
        }
        true
    }

    /// Append a comment to a post, assigning a fresh id and timestamp.
    ///
    /// Returns whether the post was found.
    pub fn add_comment(&mut self, post_id: &PostId, draft: CommentDraft) -> bool {
        let Some(post) = self.post_mut(post_id) else {
            return false;
        };
        post.comments.push(Comment {
            id: CommentId::new(),
            author: draft.author,
            content: draft.content,
            timestamp: Utc::now(),
        });
        true
    }

    /// Remove a post. Returns whether it existed.
    pub fn delete_post(&mut self, post_id: &PostId) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != *post_id);
        self.posts.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_author(seed: u8) -> AuthorSnapshot {
        AuthorSnapshot::new(
            UserId::new_from_entropy([seed; 32]),
            format!("User {}", seed),
            "https://example.com/avatar.png",
        )
    }

    #[test]
    fn test_add_post_prepends_with_empty_nests() {
        let mut feed = FeedState::new();
        feed.add_post(PostDraft::text(test_author(1), "first"));
        let post = feed.add_post(PostDraft::text(test_author(2), "second"));

        assert_eq!(post.content, "second");
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
        assert_eq!(feed.posts()[0].content, "second");
        assert_eq!(feed.posts()[1].content, "first");
    }

    #[test]
    fn test_add_post_carries_media_and_event_reference() {
        let mut feed = FeedState::new();
        let draft = PostDraft {
            author: test_author(1),
            content: "Sign up for the cleanup!".to_string(),
            media: vec![MediaAttachment {
                kind: MediaKind::Image,
                uri: "https://example.com/cleanup.png".to_string(),
            }],
            event: Some(EventRef {
                id: EventId::new_from_entropy([61; 32]),
                name: "Coastal Cleanup Day".to_string(),
                date: "2026-08-15".to_string(),
                location: "Hellshire Beach".to_string(),
            }),
        };

        let post = feed.add_post(draft);
        assert_eq!(post.media.len(), 1);
        assert_eq!(post.media[0].kind, MediaKind::Image);
        assert_eq!(
            post.event.as_ref().unwrap().name,
            "Coastal Cleanup Day"
        );
    }

    #[test]
    fn test_toggle_like_is_an_involution() {
        let mut feed = FeedState::new();
        let post_id = feed.add_post(PostDraft::text(test_author(1), "hello")).id;
        let liker = UserId::new_from_entropy([9; 32]);

        assert!(feed.toggle_like(&post_id, liker));
        assert_eq!(feed.post(&post_id).unwrap().likes, vec![liker]);

        assert!(feed.toggle_like(&post_id, liker));
        assert!(feed.post(&post_id).unwrap().likes.is_empty());
    }

    #[test]
    fn test_toggle_like_keeps_ids_unique() {
        let mut feed = FeedState::new();
        let post_id = feed.add_post(PostDraft::text(test_author(1), "hello")).id;
        let liker = UserId::new_from_entropy([9; 32]);
        let other = UserId::new_from_entropy([10; 32]);

        feed.toggle_like(&post_id, liker);
        feed.toggle_like(&post_id, other);
        feed.toggle_like(&post_id, liker);
        feed.toggle_like(&post_id, liker);

        let likes = &feed.post(&post_id).unwrap().likes;
        assert_eq!(likes.iter().filter(|id| **id == liker).count(), 1);
        assert_eq!(likes.iter().filter(|id| **id == other).count(), 1);
    }

    #[test]
    fn test_toggle_like_missing_post_is_noop() {
        let mut feed = FeedState::new();
        feed.add_post(PostDraft::text(test_author(1), "hello"));
        let snapshot = feed.clone();

        let missing = PostId::new_from_entropy([200; 32]);
        assert!(!feed.toggle_like(&missing, UserId::new_from_entropy([9; 32])));
        assert_eq!(feed.posts(), snapshot.posts());
    }

    #[test]
    fn test_add_comment_appends_in_order() {
        let mut feed = FeedState::new();
        let post_id = feed.add_post(PostDraft::text(test_author(1), "hello")).id;

        assert!(feed.add_comment(
            &post_id,
            CommentDraft {
                author: test_author(2),
                content: "first".to_string(),
            }
        ));
        assert!(feed.add_comment(
            &post_id,
            CommentDraft {
                author: test_author(3),
                content: "second".to_string(),
            }
        ));

        let comments = &feed.post(&post_id).unwrap().comments;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].content, "first");
        assert_eq!(comments[1].content, "second");
        assert_ne!(comments[0].id, comments[1].id);
    }

    #[test]
    fn test_add_comment_missing_post_leaves_feed_unchanged() {
        let mut feed = FeedState::new();
        feed.add_post(PostDraft::text(test_author(1), "hello"));
        let snapshot = feed.clone();

        let missing = PostId::new_from_entropy([200; 32]);
        let found = feed.add_comment(
            &missing,
            CommentDraft {
                author: test_author(2),
                content: "lost".to_string(),
            },
        );

        assert!(!found);
        assert_eq!(feed.posts(), snapshot.posts());
    }

    #[test]
    fn test_delete_post() {
        let mut feed = FeedState::new();
        let keep = feed.add_post(PostDraft::text(test_author(1), "keep")).id;
        let gone = feed.add_post(PostDraft::text(test_author(2), "gone")).id;

        assert!(feed.delete_post(&gone));
        assert!(!feed.delete_post(&gone));
        assert_eq!(feed.len(), 1);
        assert!(feed.post(&keep).is_some());
    }
}
