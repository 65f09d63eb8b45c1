//! # Session View State
//!
//! Owns the authentication flag and the current user profile. The async
//! workflows in [`crate::workflows::session`] are the only writers that
//! touch durable storage; the methods here are the pure in-memory half.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vibe_core::UserId;

/// Avatar assigned to accounts created without one.
pub const DEFAULT_AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=200&h=200&fit=crop";

// ============================================================================
// Profile Types
// ============================================================================

/// A user profile.
///
/// Exactly one instance is the "current user" per session. Identity fields
/// (`id`, `email`, `joined_date`) are fixed at creation; everything else can
/// change through a [`ProfilePatch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Avatar URL
    pub avatar: String,
    /// Cumulative volunteered hours
    pub total_hours: u32,
    /// Number of completed activities
    pub activities_completed: u32,
    /// Number of distinct organizations helped
    pub organizations_helped: u32,
    /// When the account was created
    pub joined_date: DateTime<Utc>,
    /// Short self-description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Home location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-form expertise areas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areas_of_expertise: Option<String>,
    /// Education level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
}

impl UserProfile {
    /// Build a profile deterministically from an email address.
    ///
    /// This is the credential stub behind login: the id derives from the
    /// email, the name is the local part before `@`, the avatar is the
    /// default, and all stats start at zero. It performs no verification of
    /// any kind and must never be mistaken for authentication.
    pub fn from_email(email: &str, now: DateTime<Utc>) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            id: UserId::from_email(email),
            name,
            email: email.to_string(),
            avatar: DEFAULT_AVATAR_URL.to_string(),
            total_hours: 0,
            activities_completed: 0,
            organizations_helped: 0,
            joined_date: now,
            bio: None,
            phone: None,
            location: None,
            areas_of_expertise: None,
            education: None,
        }
    }

    /// Merge a patch into this profile, field by field.
    ///
    /// Present-in-patch overrides, absent-in-patch preserves. Returns the
    /// merged profile; `self` is untouched.
    #[must_use]
    pub fn merged(&self, patch: ProfilePatch) -> Self {
        let mut merged = self.clone();
        if let Some(name) = patch.name {
            merged.name = name;
        }
        if let Some(avatar) = patch.avatar {
            merged.avatar = avatar;
        }
        if let Some(total_hours) = patch.total_hours {
            merged.total_hours = total_hours;
        }
        if let Some(activities_completed) = patch.activities_completed {
            merged.activities_completed = activities_completed;
        }
        if let Some(organizations_helped) = patch.organizations_helped {
            merged.organizations_helped = organizations_helped;
        }
        if let Some(bio) = patch.bio {
            merged.bio = Some(bio);
        }
        if let Some(phone) = patch.phone {
            merged.phone = Some(phone);
        }
        if let Some(location) = patch.location {
            merged.location = Some(location);
        }
        if let Some(areas_of_expertise) = patch.areas_of_expertise {
            merged.areas_of_expertise = Some(areas_of_expertise);
        }
        if let Some(education) = patch.education {
            merged.education = Some(education);
        }
        merged
    }
}

/// Fields of a [`UserProfile`] that are allowed to change after creation.
///
/// Absent fields preserve the current value; there is no way to clear an
/// optional field back to unset through a patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    /// New display name
    pub name: Option<String>,
    /// New avatar URL
    pub avatar: Option<String>,
    /// New cumulative hours
    pub total_hours: Option<u32>,
    /// New completed-activity count
    pub activities_completed: Option<u32>,
    /// New helped-organization count
    pub organizations_helped: Option<u32>,
    /// New bio
    pub bio: Option<String>,
    /// New phone number
    pub phone: Option<String>,
    /// New location
    pub location: Option<String>,
    /// New expertise areas
    pub areas_of_expertise: Option<String>,
    /// New education level
    pub education: Option<String>,
}

impl ProfilePatch {
    /// A patch setting only the bio.
    pub fn bio(bio: impl Into<String>) -> Self {
        Self {
            bio: Some(bio.into()),
            ..Self::default()
        }
    }

    /// A patch setting only the display name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Caller-supplied fields for account registration.
///
/// Everything beyond the email is optional; defaults mirror
/// [`UserProfile::from_email`].
#[derive(Debug, Clone, Default)]
pub struct RegistrationDraft {
    /// Email address (required)
    pub email: String,
    /// Password. Collected by the registration screen but unused by the
    /// credential stub.
    pub password: Option<String>,
    /// Display name override
    pub name: Option<String>,
    /// Avatar override
    pub avatar: Option<String>,
    /// Initial bio
    pub bio: Option<String>,
    /// Initial phone number
    pub phone: Option<String>,
    /// Initial location
    pub location: Option<String>,
    /// Initial expertise areas
    pub areas_of_expertise: Option<String>,
    /// Initial education level
    pub education: Option<String>,
}

impl RegistrationDraft {
    /// A draft carrying only an email.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Build the profile this draft describes.
    pub fn into_profile(self, now: DateTime<Utc>) -> UserProfile {
        let mut profile = UserProfile::from_email(&self.email, now);
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(avatar) = self.avatar {
            profile.avatar = avatar;
        }
        profile.bio = self.bio;
        profile.phone = self.phone;
        profile.location = self.location;
        profile.areas_of_expertise = self.areas_of_expertise;
        profile.education = self.education;
        profile
    }
}

// ============================================================================
// SessionState
// ============================================================================

/// Session state.
///
/// `is_loading` starts `true` and flips to `false` once the restore workflow
/// has finished, whatever its outcome - frontends gate their first paint on
/// it, so nothing here may keep it `true` indefinitely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Whether a user is currently authenticated
    pub is_authenticated: bool,
    /// The current user profile, if any
    pub user: Option<UserProfile>,
    /// Whether the persisted session is still being restored
    pub is_loading: bool,
}

impl SessionState {
    /// Create the initial, not-yet-restored state.
    pub fn new() -> Self {
        Self {
            is_authenticated: false,
            user: None,
            is_loading: true,
        }
    }

    /// Get the current user, if logged in.
    #[must_use]
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Install a restored (flag, profile) pair exactly as persisted.
    pub fn install_pair(&mut self, is_authenticated: bool, user: UserProfile) {
        self.is_authenticated = is_authenticated;
        self.user = Some(user);
    }

    /// Install a freshly authenticated user.
    pub fn install_authenticated(&mut self, user: UserProfile) {
        self.is_authenticated = true;
        self.user = Some(user);
    }

    /// Replace the current profile, keeping the authentication flag.
    pub fn set_user(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    /// Clear the session back to unauthenticated.
    pub fn clear(&mut self) {
        self.is_authenticated = false;
        self.user = None;
    }

    /// Mark the restore pass as finished.
    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
