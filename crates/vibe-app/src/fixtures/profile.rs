//! Default profile fixture

use crate::fixtures::{avatars, users};
use crate::views::UserProfile;
use chrono::{DateTime, TimeZone, Utc};

/// The default seeded profile (Sarah Johnson).
pub fn seed_profile() -> UserProfile {
    UserProfile {
        id: users::sarah(),
        name: "Sarah Johnson".to_string(),
        email: "sarah.johnson@example.com".to_string(),
        avatar: avatars::SARAH.to_string(),
        total_hours: 142,
        activities_completed: 28,
        organizations_helped: 5,
        joined_date: joined_date(),
        bio: Some(
            "Passionate about making a difference in the community through volunteering."
                .to_string(),
        ),
        phone: Some("+1 (555) 123-4567".to_string()),
        location: Some("Kingston, Jamaica".to_string()),
        areas_of_expertise: Some("Education, Community Outreach".to_string()),
        education: Some("Graduate".to_string()),
    }
}

fn joined_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 3, 15, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_identity_is_stable() {
        assert_eq!(seed_profile().id, seed_profile().id);
        assert_eq!(seed_profile().id, users::sarah());
    }

    #[test]
    fn test_profile_stats() {
        let profile = seed_profile();
        assert_eq!(profile.total_hours, 142);
        assert_eq!(profile.activities_completed, 28);
        assert_eq!(profile.organizations_helped, 5);
        assert!(profile.bio.is_some());
    }
}
