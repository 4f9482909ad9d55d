use thiserror::Error;

use moodcast_shared::ValidationError;
use moodcast_store::StoreError;

/// Errors produced by the journal service. Nothing here is fatal: every
/// variant is reported to the caller with state left unchanged.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input rejected at the call boundary.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Store failure, including NotFound for unknown entry ids.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Reactions and comments are refused on private entries.
    #[error("Entry is private; social features are unavailable")]
    EntryPrivate,

    /// The author turned comments off for this entry.
    #[error("Comments are disabled on this entry")]
    CommentsDisabled,

    /// Embedded seed dataset failed to parse.
    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CoreError>;
