//! Event board fixtures

use crate::fixtures::users;
use crate::views::{Event, EventCategory};
use vibe_core::EventId;

/// Seed events for the volunteering board, one per category.
pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: EventId::new_from_entropy([61u8; 32]),
            title: "Coastal Cleanup Day".to_string(),
            organization: "Ocean Guardians".to_string(),
            date: "2026-08-15".to_string(),
            time: "9:00 AM".to_string(),
            location: "Hellshire Beach".to_string(),
            description: "Join us for a morning of clearing plastic and debris from the \
                          shoreline. Gloves and bags provided."
                .to_string(),
            category: EventCategory::Environment,
            spots: 20,
            spots_available: 17,
            image: "https://images.unsplash.com/photo-1618477461853-cf6ed80faba5?w=800&h=600&fit=crop"
                .to_string(),
            volunteers: vec![users::marcus(), users::david(), users::amara()],
        },
        Event {
            id: EventId::new_from_entropy([62u8; 32]),
            title: "After-School Tutoring".to_string(),
            organization: "Bright Futures Initiative".to_string(),
            date: "2026-08-18".to_string(),
            time: "3:30 PM".to_string(),
            location: "St. Andrew Community Library".to_string(),
            description: "Help students with math and science homework. Experience with \
                          secondary-school material preferred."
                .to_string(),
            category: EventCategory::Education,
            spots: 10,
            spots_available: 8,
            image: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=800&h=600&fit=crop"
                .to_string(),
            volunteers: vec![users::sarah(), users::jennifer()],
        },
        Event {
            id: EventId::new_from_entropy([63u8; 32]),
            title: "Community Health Fair".to_string(),
            organization: "Hope Medical Mission".to_string(),
            date: "2026-08-22".to_string(),
            time: "10:00 AM".to_string(),
            location: "Kingston Town Square".to_string(),
            description: "Support free screenings and wellness education. Roles for both \
                          medical and non-medical volunteers."
                .to_string(),
            category: EventCategory::Health,
            spots: 15,
            spots_available: 15,
            image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=800&h=600&fit=crop"
                .to_string(),
            volunteers: Vec::new(),
        },
        Event {
            id: EventId::new_from_entropy([64u8; 32]),
            title: "Food Pantry Distribution".to_string(),
            organization: "Daily Bread Foundation".to_string(),
            date: "2026-08-25".to_string(),
            time: "8:00 AM".to_string(),
            location: "Downtown Shelter".to_string(),
            description: "Pack and hand out grocery parcels to families in need.".to_string(),
            category: EventCategory::PoorRelief,
            spots: 12,
            spots_available: 11,
            image: "https://images.unsplash.com/photo-1488521787991-ed7bbaae773c?w=800&h=600&fit=crop"
                .to_string(),
            volunteers: vec![users::marcus()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_invariants_hold() {
        for event in seed_events() {
            assert!(event.spots_available <= event.spots);
            assert_eq!(
                event.volunteers.len() as u32,
                event.spots - event.spots_available
            );
        }
    }

    #[test]
    fn test_every_category_is_represented() {
        let events = seed_events();
        for category in EventCategory::ALL {
            assert!(events.iter().any(|e| e.category == category));
        }
    }

    #[test]
    fn test_volunteer_sets_are_unique() {
        for event in seed_events() {
            let mut seen = event.volunteers.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), event.volunteers.len());
        }
    }
}
