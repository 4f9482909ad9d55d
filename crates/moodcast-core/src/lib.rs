//! # moodcast-core
//!
//! The Moodcast domain service. A presentation layer holds one
//! [`MoodJournal`] and drives everything through it: saving entries,
//! querying the day views, toggling reactions, commenting, and reading the
//! streak and character-progression state that the journal derives from
//! the entry stream.
//!
//! All operations are synchronous, single-session, in-memory state
//! transitions; there is no I/O beyond the embedded store.

pub mod error;
pub mod journal;
pub mod progression;
pub mod seed;
pub mod social;
pub mod streak;

pub use error::CoreError;
pub use journal::{EntryDraft, MoodJournal};
pub use progression::{CharacterRoster, EmotionCharacter};
pub use social::ReactionSummary;
pub use streak::{StreakTracker, UserStreak};
