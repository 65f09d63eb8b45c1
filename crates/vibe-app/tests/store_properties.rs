//! Property tests for the synchronous store invariants
//!
//! Exercises the like toggle, the unread aggregation, and the event
//! capacity rules under arbitrary operation sequences.

use proptest::prelude::*;
use vibe_app::fixtures;
use vibe_app::views::{EventsState, FeedState, MessagingState};
use vibe_core::UserId;

fn seeded_feed() -> FeedState {
    FeedState::from_posts(fixtures::seed_posts(chrono::Utc::now()))
}

fn seeded_messaging() -> MessagingState {
    MessagingState::from_conversations(fixtures::seed_conversations(chrono::Utc::now()))
}

fn seeded_events() -> EventsState {
    EventsState::from_events(fixtures::seed_events())
}

proptest! {
    /// Toggling the same like twice restores the like set, whatever state a
    /// prior toggle sequence left the feed in.
    #[test]
    fn toggle_like_twice_restores_likes(
        warmup in prop::collection::vec((0usize..3, 0u8..6), 0..20),
        target_post in 0usize..3,
        target_user in 0u8..6,
    ) {
        let mut feed = seeded_feed();
        for (post_index, user_seed) in warmup {
            let post_id = feed.posts()[post_index].id;
            feed.toggle_like(&post_id, UserId::new_from_entropy([user_seed; 32]));
        }

        let post_id = feed.posts()[target_post].id;
        let user = UserId::new_from_entropy([target_user; 32]);
        let before = feed.post(&post_id).unwrap().likes.clone();

        feed.toggle_like(&post_id, user);
        feed.toggle_like(&post_id, user);

        prop_assert_eq!(&feed.post(&post_id).unwrap().likes, &before);
    }

    /// A like set never holds the same user twice, whatever the sequence.
    #[test]
    fn likes_stay_unique(
        toggles in prop::collection::vec((0usize..3, 0u8..6), 0..30),
    ) {
        let mut feed = seeded_feed();
        for (post_index, user_seed) in toggles {
            let post_id = feed.posts()[post_index].id;
            feed.toggle_like(&post_id, UserId::new_from_entropy([user_seed; 32]));
        }

        for post in feed.posts() {
            let mut seen = post.likes.clone();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), post.likes.len());
        }
    }

    /// The unread total always equals the per-conversation sum, across any
    /// interleaving of sends and read-marks.
    #[test]
    fn unread_total_matches_sum(
        ops in prop::collection::vec((0usize..2, any::<bool>()), 0..30),
    ) {
        let mut messaging = seeded_messaging();
        for (conv_index, is_send) in ops {
            let conv_id = messaging.conversations()[conv_index].id;
            if is_send {
                messaging.send_message(&conv_id, fixtures::users::sarah(), "ping");
            } else {
                messaging.mark_as_read(&conv_id);
            }

            let sum: u32 = messaging
                .conversations()
                .iter()
                .map(|c| c.unread_count)
                .sum();
            prop_assert_eq!(messaging.total_unread_count(), sum);
        }
    }

    /// Capacity invariants survive arbitrary volunteer toggles: remaining
    /// spots never exceed capacity and always match the volunteer count.
    #[test]
    fn event_capacity_invariants_hold(
        toggles in prop::collection::vec((0usize..4, 0u8..30), 0..60),
    ) {
        let mut events = seeded_events();
        for (event_index, user_seed) in toggles {
            let event_id = events.events()[event_index].id;
            events.toggle_volunteer(&event_id, UserId::new_from_entropy([user_seed; 32]));

            for event in events.events() {
                prop_assert!(event.spots_available <= event.spots);
                prop_assert_eq!(
                    event.volunteers.len() as u32,
                    event.spots - event.spots_available
                );
            }
        }
    }
}
