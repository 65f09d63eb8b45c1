//! # Events View State
//!
//! The volunteering board: events with capacity tracking and a volunteer
//! toggle. Two invariants hold at all times:
//! `0 <= spots_available <= spots` and
//! `volunteers.len() == spots - spots_available`.

use serde::{Deserialize, Serialize};
use vibe_core::{EventId, UserId};

/// Category an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Tutoring, mentoring, school programs
    Education,
    /// Cleanups, conservation, green work
    Environment,
    /// Clinics, health fairs, care support
    Health,
    /// Food banks, shelters, relief drives
    PoorRelief,
}

impl EventCategory {
    /// Every category, in the order the category chips show them.
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Education,
        EventCategory::Environment,
        EventCategory::Health,
        EventCategory::PoorRelief,
    ];

    /// Display label for the category.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Environment => "Environment",
            Self::Health => "Health",
            Self::PoorRelief => "Poor Relief",
        }
    }
}

/// A volunteering event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier
    pub id: EventId,
    /// Event title
    pub title: String,
    /// Hosting organization
    pub organization: String,
    /// Calendar date, as displayed
    pub date: String,
    /// Start time, as displayed
    pub time: String,
    /// Where it happens
    pub location: String,
    /// What volunteers will do
    pub description: String,
    /// Category
    pub category: EventCategory,
    /// Total capacity
    pub spots: u32,
    /// Remaining capacity
    pub spots_available: u32,
    /// Cover image URL
    pub image: String,
    /// Ids of registered volunteers; each id appears at most once
    pub volunteers: Vec<UserId>,
}

impl Event {
    /// Whether a user is registered for this event.
    #[must_use]
    pub fn has_volunteer(&self, user_id: &UserId) -> bool {
        self.volunteers.contains(user_id)
    }

    /// Whether the event has no remaining spots.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.spots_available == 0
    }
}

/// Events state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsState {
    events: Vec<Event>,
}

impl EventsState {
    /// Create an empty events board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from seed events, preserving their order.
    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// All events.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get an event by id.
    pub fn event(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == *id)
    }

    /// Get a mutable event by id.
    pub fn event_mut(&mut self, id: &EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == *id)
    }

    /// Events in a category, in board order.
    pub fn events_in_category(&self, category: EventCategory) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Toggle a user's registration on an event.
    ///
    /// A registered user is removed and the spot freed; an unregistered user
    /// is added when a spot remains, and turned away otherwise. Returns
    /// whether the registration changed - `false` for an unknown event id or
    /// a full event.
    pub fn toggle_volunteer(&mut self, event_id: &EventId, user_id: UserId) -> bool {
        let Some(event) = self.event_mut(event_id) else {
            return false;
        };

        if event.has_volunteer(&user_id) {
            event.volunteers.retain(|id| *id != user_id);
            event.spots_available = event.spots.min(event.spots_available + 1);
            true
        } else if event.spots_available > 0 {
            event.volunteers.push(user_id);
            event.spots_available -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_event(seed: u8, spots: u32, spots_available: u32) -> Event {
        let taken = (spots - spots_available) as usize;
        let volunteers = (0..taken)
            .map(|i| UserId::new_from_entropy([seed + 50 + i as u8; 32]))
            .collect();
        Event {
            id: EventId::new_from_entropy([seed; 32]),
            title: format!("Event {}", seed),
            organization: "Test Org".to_string(),
            date: "2026-09-01".to_string(),
            time: "9:00 AM".to_string(),
            location: "Community Center".to_string(),
            description: "Help out".to_string(),
            category: EventCategory::Environment,
            spots,
            spots_available,
            image: "https://example.com/event.png".to_string(),
            volunteers,
        }
    }

    fn invariants_hold(event: &Event) -> bool {
        event.spots_available <= event.spots
            && event.volunteers.len() as u32 == event.spots - event.spots_available
    }

    #[test]
    fn test_toggle_volunteer_registers_and_unregisters() {
        let mut events = EventsState::from_events(vec![test_event(1, 10, 10)]);
        let event_id = EventId::new_from_entropy([1; 32]);
        let user = UserId::new_from_entropy([7; 32]);

        assert!(events.toggle_volunteer(&event_id, user));
        let event = events.event(&event_id).unwrap();
        assert!(event.has_volunteer(&user));
        assert_eq!(event.spots_available, 9);
        assert!(invariants_hold(event));

        assert!(events.toggle_volunteer(&event_id, user));
        let event = events.event(&event_id).unwrap();
        assert!(!event.has_volunteer(&user));
        assert_eq!(event.spots_available, 10);
        assert!(invariants_hold(event));
    }

    #[test]
    fn test_full_event_turns_new_volunteers_away() {
        let mut events = EventsState::from_events(vec![test_event(1, 2, 0)]);
        let event_id = EventId::new_from_entropy([1; 32]);
        let snapshot = events.clone();

        let newcomer = UserId::new_from_entropy([7; 32]);
        assert!(!events.toggle_volunteer(&event_id, newcomer));
        assert_eq!(events.events(), snapshot.events());
    }

    #[test]
    fn test_full_event_still_allows_cancellation() {
        let mut events = EventsState::from_events(vec![test_event(1, 2, 0)]);
        let event_id = EventId::new_from_entropy([1; 32]);
        let registered = events.event(&event_id).unwrap().volunteers[0];

        assert!(events.toggle_volunteer(&event_id, registered));
        let event = events.event(&event_id).unwrap();
        assert_eq!(event.spots_available, 1);
        assert!(!event.is_full());
        assert!(invariants_hold(event));
    }

    #[test]
    fn test_toggle_volunteer_missing_event_is_noop() {
        let mut events = EventsState::from_events(vec![test_event(1, 5, 5)]);
        let snapshot = events.clone();
        let missing = EventId::new_from_entropy([99; 32]);

        assert!(!events.toggle_volunteer(&missing, UserId::new_from_entropy([7; 32])));
        assert_eq!(events.events(), snapshot.events());
    }

    #[test]
    fn test_events_in_category() {
        let mut education = test_event(2, 5, 5);
        education.category = EventCategory::Education;
        let events = EventsState::from_events(vec![test_event(1, 5, 5), education]);

        let found = events.events_in_category(EventCategory::Education);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Event 2");
        assert!(events.events_in_category(EventCategory::Health).is_empty());
    }

    #[test]
    fn test_category_labels() {
        for category in EventCategory::ALL {
            assert!(!category.label().is_empty());
        }
        assert_eq!(EventCategory::PoorRelief.label(), "Poor Relief");
    }
}
