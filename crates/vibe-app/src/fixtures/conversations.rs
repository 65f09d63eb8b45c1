//! Conversation fixtures

use crate::fixtures::{avatars, users};
use crate::views::{Conversation, LastMessage, Message, ParticipantSnapshot};
use chrono::{DateTime, Duration, Utc};
use vibe_core::{ConversationId, MessageId};

/// Seed conversations for the messaging store.
///
/// Two threads from Sarah's perspective: an active one with Marcus carrying
/// two unread messages, and a settled one with Jennifer.
pub fn seed_conversations(now: DateTime<Utc>) -> Vec<Conversation> {
    vec![marcus_thread(now), jennifer_thread(now)]
}

fn marcus_thread(now: DateTime<Utc>) -> Conversation {
    let messages = vec![
        Message {
            id: MessageId::new_from_entropy([31u8; 32]),
            sender_id: users::marcus(),
            receiver_id: users::sarah(),
            content: "Hey! Are you coming to the cleanup event tomorrow?".to_string(),
            timestamp: now - Duration::hours(2),
            read: true,
        },
        Message {
            id: MessageId::new_from_entropy([32u8; 32]),
            sender_id: users::sarah(),
            receiver_id: users::marcus(),
            content: "Yes! I'll be there at 9 AM".to_string(),
            timestamp: now - Duration::minutes(90),
            read: true,
        },
        Message {
            id: MessageId::new_from_entropy([33u8; 32]),
            sender_id: users::marcus(),
            receiver_id: users::sarah(),
            content: "Perfect! See you there".to_string(),
            timestamp: now - Duration::hours(1),
            read: false,
        },
        Message {
            id: MessageId::new_from_entropy([34u8; 32]),
            sender_id: users::marcus(),
            receiver_id: users::sarah(),
            content: "Great job at the event today!".to_string(),
            timestamp: now - Duration::minutes(30),
            read: false,
        },
    ];
    let tail = &messages[messages.len() - 1];
    Conversation {
        id: ConversationId::new_from_entropy([21u8; 32]),
        participant: ParticipantSnapshot {
            id: users::marcus(),
            name: "Marcus Thompson".to_string(),
            avatar: avatars::MARCUS.to_string(),
        },
        last_message: Some(LastMessage {
            content: tail.content.clone(),
            timestamp: tail.timestamp,
        }),
        unread_count: 2,
        messages,
    }
}

fn jennifer_thread(now: DateTime<Utc>) -> Conversation {
    let messages = vec![
        Message {
            id: MessageId::new_from_entropy([35u8; 32]),
            sender_id: users::sarah(),
            receiver_id: users::jennifer(),
            content: "I'd love to help with the tutoring program".to_string(),
            timestamp: now - Duration::hours(4),
            read: true,
        },
        Message {
            id: MessageId::new_from_entropy([36u8; 32]),
            sender_id: users::jennifer(),
            receiver_id: users::sarah(),
            content: "Thanks for your interest!".to_string(),
            timestamp: now - Duration::hours(3),
            read: true,
        },
    ];
    let tail = &messages[messages.len() - 1];
    Conversation {
        id: ConversationId::new_from_entropy([22u8; 32]),
        participant: ParticipantSnapshot {
            id: users::jennifer(),
            name: "Jennifer Lee".to_string(),
            avatar: avatars::JENNIFER.to_string(),
        },
        last_message: Some(LastMessage {
            content: tail.content.clone(),
            timestamp: tail.timestamp,
        }),
        unread_count: 0,
        messages,
    }
}
