//! # Vibe Application Core
//!
//! Portable headless core for the Vibe volunteer social app: the domain
//! state behind the feed, the events board, direct messaging, and profile
//! management. Frontends render from these stores and dispatch mutations in
//! response to user interaction; nothing here renders, navigates, or talks
//! to a network.
//!
//! # Architecture
//!
//! - [`views`] - one state store per domain collection (session, feed,
//!   messaging, events) with synchronous mutation methods
//! - [`workflows`] - async session operations over durable storage, the
//!   only suspension points in the core
//! - [`fixtures`] - deterministic seed data the stores start from
//! - [`AppCore`] / [`SharedAppCore`] - the injectable container with an
//!   explicit init/teardown lifecycle; no module-level singletons
//!
//! Stores never reach into each other: feed, messaging, and events
//! mutations take the active user's identity as parameters the frontend
//! supplies from the session store.
//!
//! # Usage
//!
//! ```no_run
//! use vibe_app::{core, workflows, AppConfig, AppCore};
//!
//! # async fn run() {
//! let app = AppCore::new(&AppConfig::default()).into_shared();
//! core::init(&app).await;
//!
//! let profile = workflows::session::login(&app, "sarah@example.com", "pw")
//!     .await
//!     .unwrap();
//! app.write().await.feed.add_post(vibe_app::views::PostDraft::text(
//!     vibe_app::views::AuthorSnapshot::new(profile.id, profile.name, profile.avatar),
//!     "First post!",
//! ));
//! # }
//! ```

pub mod config;
pub mod core;
pub mod errors;
pub mod fixtures;
pub mod views;
pub mod workflows;

pub use config::AppConfig;
pub use core::{AppCore, SharedAppCore};
pub use errors::AppError;
