//! Session Workflow - Portable Business Logic
//!
//! The session operations every frontend shares: restore on launch, the
//! credential-stub login/register pair, logout, and profile updates. These
//! are the only operations in the app core that await durable storage, and
//! each one persists before (or as part of) updating in-memory state - after
//! a reload, memory equals the last successfully persisted snapshot.

use std::collections::HashMap;

use crate::core::SharedAppCore;
use crate::errors::AppError;
use crate::views::{ProfilePatch, RegistrationDraft, UserProfile};
use chrono::Utc;
use vibe_store::StorageEffects;

/// Storage key for the authentication flag
const AUTH_STORAGE_KEY: &str = "vibe_auth";
/// Storage key for the serialized user profile
const USER_PROFILE_KEY: &str = "vibe_user_profile";

/// Restore the persisted session.
///
/// **What it does**: Reads the (flag, profile) pair and installs it.
/// **Returns**: Nothing - absence, malformed data, and read errors all
/// degrade to an unauthenticated session. The loading flag always clears.
pub async fn restore(app: &SharedAppCore) {
    let storage = { app.read().await.storage().clone() };

    let keys = [AUTH_STORAGE_KEY.to_string(), USER_PROFILE_KEY.to_string()];
    let restored = match storage.retrieve_batch(&keys).await {
        Ok(mut entries) => {
            let auth = entries.remove(AUTH_STORAGE_KEY);
            let profile = entries.remove(USER_PROFILE_KEY);
            match (auth, profile) {
                (Some(auth), Some(profile)) => decode_pair(&auth, &profile),
                // Either entry missing means no session.
                _ => None,
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to read persisted session");
            None
        }
    };

    let mut core = app.write().await;
    if let Some((is_authenticated, user)) = restored {
        core.session.install_pair(is_authenticated, user);
    }
    core.session.finish_loading();
}

fn decode_pair(auth: &[u8], profile: &[u8]) -> Option<(bool, UserProfile)> {
    let is_authenticated = match serde_json::from_slice::<bool>(auth) {
        Ok(flag) => flag,
        Err(err) => {
            tracing::warn!(error = %err, "malformed auth flag in storage, discarding session");
            return None;
        }
    };
    match serde_json::from_slice::<UserProfile>(profile) {
        Ok(user) => Some((is_authenticated, user)),
        Err(err) => {
            tracing::warn!(error = %err, "malformed profile in storage, discarding session");
            None
        }
    }
}

/// Log in with an email and password.
///
/// **What it does**: Builds the profile deterministically from the email,
/// persists the session pair, then marks the session authenticated.
/// **Returns**: The logged-in profile; fails only on storage write error.
///
/// This is a local stub: the password is never checked, and no credential
/// ever causes a failure. It is not an authentication boundary.
pub async fn login(
    app: &SharedAppCore,
    email: &str,
    _password: &str,
) -> Result<UserProfile, AppError> {
    tracing::debug!(email, "logging in");
    let storage = { app.read().await.storage().clone() };

    let user = UserProfile::from_email(email, Utc::now());
    persist_session(storage.as_ref(), &user).await?;

    app.write().await.session.install_authenticated(user.clone());
    Ok(user)
}

/// Register a new account.
///
/// **What it does**: Builds a profile from the draft (caller-supplied fields
/// override the login defaults), persists the session pair, then marks the
/// session authenticated.
/// **Returns**: The registered profile; fails only on storage write error.
pub async fn register(
    app: &SharedAppCore,
    draft: RegistrationDraft,
) -> Result<UserProfile, AppError> {
    tracing::debug!(email = %draft.email, "registering");
    let storage = { app.read().await.storage().clone() };

    let user = draft.into_profile(Utc::now());
    persist_session(storage.as_ref(), &user).await?;

    app.write().await.session.install_authenticated(user.clone());
    Ok(user)
}

/// Log out.
///
/// **What it does**: Removes both persisted entries and clears the
/// in-memory session. Idempotent - logging out twice lands in the same
/// unauthenticated state.
/// **Returns**: Unit; fails only on storage error.
pub async fn logout(app: &SharedAppCore) -> Result<(), AppError> {
    let storage = { app.read().await.storage().clone() };

    // Absent keys are fine; only an I/O failure is an error.
    storage.remove(AUTH_STORAGE_KEY).await?;
    storage.remove(USER_PROFILE_KEY).await?;

    app.write().await.session.clear();
    Ok(())
}

/// Update the current user's profile.
///
/// **What it does**: Merges the patch into the logged-in profile, persists
/// the merged result, then installs it in memory.
/// **Returns**: The merged profile; [`AppError::NotAuthenticated`] when no
/// user is logged in (stored state untouched), or a storage write error.
pub async fn update_profile(
    app: &SharedAppCore,
    patch: ProfilePatch,
) -> Result<UserProfile, AppError> {
    let (storage, merged) = {
        let core = app.read().await;
        let user = core.session.current_user().ok_or(AppError::NotAuthenticated)?;
        (core.storage().clone(), user.merged(patch))
    };

    storage
        .store(USER_PROFILE_KEY, serde_json::to_vec(&merged)?)
        .await?;

    app.write().await.session.set_user(merged.clone());
    Ok(merged)
}

/// Persist the (authenticated, profile) pair as one batch so the two
/// entries always travel together.
async fn persist_session(
    storage: &dyn StorageEffects,
    user: &UserProfile,
) -> Result<(), AppError> {
    let mut pairs = HashMap::new();
    pairs.insert(AUTH_STORAGE_KEY.to_string(), serde_json::to_vec(&true)?);
    pairs.insert(USER_PROFILE_KEY.to_string(), serde_json::to_vec(user)?);
    storage.store_batch(pairs).await?;
    Ok(())
}
