//! # moodcast-shared
//!
//! Shared domain vocabulary for the Moodcast journal: emotion tags,
//! reaction kinds, visibility levels, input limits, the weather lookup
//! tables, and the validation error taxonomy.
//!
//! Everything here is pure data with no storage or side effects, so both
//! the store and the journal service (and any presentation layer) can
//! depend on it.

pub mod constants;
pub mod error;
pub mod types;
pub mod weather;

pub use error::ValidationError;
pub use types::{Emotion, EmotionTag, ReactionKind, Visibility};
