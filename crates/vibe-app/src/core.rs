//! # Application Core
//!
//! The injectable container that owns the four stores and the storage
//! handler. Frontends construct one `AppCore`, wrap it in a
//! [`SharedAppCore`], run [`init`] before first paint, and hand the shared
//! handle to every screen. There are no module-level singletons.

use async_lock::RwLock;
use chrono::Utc;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::fixtures;
use crate::views::{EventsState, FeedState, MessagingState, SessionState};
use vibe_store::{FilesystemStorageHandler, StorageEffects};

/// Shared handle to the application core.
///
/// Session workflows take this handle so they can release the lock across
/// their storage awaits.
pub type SharedAppCore = Arc<RwLock<AppCore>>;

/// The application core: one store per domain collection plus the storage
/// boundary the session persists through.
pub struct AppCore {
    /// Authentication status and current user profile
    pub session: SessionState,
    /// The post feed
    pub feed: FeedState,
    /// Direct-message conversations
    pub messaging: MessagingState,
    /// The volunteering board
    pub events: EventsState,
    storage: Arc<dyn StorageEffects>,
}

impl AppCore {
    /// Create a core persisting under the configured data directory, with
    /// the feed, messaging, and events stores seeded from fixtures.
    pub fn new(config: &AppConfig) -> Self {
        let storage = Arc::new(FilesystemStorageHandler::new(config.data_dir.clone()));
        Self::with_storage(storage)
    }

    /// Create a core over an injected storage handler (tests, ephemeral
    /// sessions), seeded the same way as [`AppCore::new`].
    pub fn with_storage(storage: Arc<dyn StorageEffects>) -> Self {
        let now = Utc::now();
        Self {
            session: SessionState::new(),
            feed: FeedState::from_posts(fixtures::seed_posts(now)),
            messaging: MessagingState::from_conversations(fixtures::seed_conversations(now)),
            events: EventsState::from_events(fixtures::seed_events()),
            storage,
        }
    }

    /// The storage handler this core persists through.
    pub fn storage(&self) -> &Arc<dyn StorageEffects> {
        &self.storage
    }

    /// Wrap the core in the shared handle the workflows take.
    pub fn into_shared(self) -> SharedAppCore {
        Arc::new(RwLock::new(self))
    }

    /// Tear down in-memory state.
    ///
    /// Clears every store; durable session entries are left in place for the
    /// next launch.
    pub fn shutdown(&mut self) {
        self.session.clear();
        self.session.finish_loading();
        self.feed = FeedState::new();
        self.messaging = MessagingState::new();
        self.events = EventsState::new();
    }
}

/// Initialize a shared core: restore the persisted session.
///
/// Completes quickly whatever the storage does - failure degrades to an
/// unauthenticated session, and the loading flag always clears.
pub async fn init(app: &SharedAppCore) {
    crate::workflows::session::restore(app).await;
}
