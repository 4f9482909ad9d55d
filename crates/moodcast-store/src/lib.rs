//! # moodcast-store
//!
//! Typed storage layer for the Moodcast journal, backed by SQLite.
//!
//! The crate exposes a synchronous [`Database`] handle that wraps a
//! `rusqlite::Connection` and provides typed CRUD helpers for every domain
//! model. The default constructor opens an in-memory connection (journal
//! state is volatile, matching the app's session-only persistence);
//! [`Database::open_at`] lets embedders keep a file-backed journal behind
//! the same interface.

pub mod comments;
pub mod custom_emotions;
pub mod database;
pub mod entries;
pub mod migrations;
pub mod models;
pub mod profile;
pub mod reactions;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use models::*;
