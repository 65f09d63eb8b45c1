//! # Workflows
//!
//! Async operations over a [`crate::SharedAppCore`]. Only the session has
//! workflows - it is the one store backed by durable storage. Feed,
//! messaging, and events mutations are synchronous methods on their view
//! states.

pub mod session;
