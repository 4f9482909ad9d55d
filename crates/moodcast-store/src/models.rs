//! Domain model structs persisted in the local SQLite database.
//!
//! Every struct derives `Serialize` and `Deserialize` (camelCase, matching
//! the payloads the upstream UI exchanges) so it can be handed directly to
//! a presentation layer over IPC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use moodcast_shared::constants::{DEFAULT_USER_ID, DEFAULT_USER_NAME};
use moodcast_shared::types::{EmotionTag, ReactionKind, Visibility};

// ---------------------------------------------------------------------------
// MoodEntry
// ---------------------------------------------------------------------------

/// A single mood journal record.
///
/// Reactions and comments are embedded sub-collections owned by the entry:
/// they are hydrated on every read and replaced wholesale on update, so an
/// in-memory `MoodEntry` is always a complete snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// The journal text (at most 500 characters, non-empty after trimming).
    pub text: String,
    /// Built-in or custom emotion tag.
    pub emotion_tag: EmotionTag,
    /// Intensity on the 1..=5 scale.
    pub intensity: u8,
    /// Weather photo URL resolved from (tag, intensity) at save time.
    pub weather_image: String,
    /// Comfort message the user chose to keep with the entry, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_message: Option<String>,
    /// Snapshot of the custom emotion the entry was tagged with, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_emotion: Option<CustomEmotion>,
    /// Sharing scope.
    #[serde(default)]
    pub visibility: Visibility,
    /// Whether the author allows comments on this entry.
    #[serde(default = "default_true")]
    pub comments_enabled: bool,
    /// Reactions left on this entry.
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    /// Comments left on this entry.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Author identity.
    pub user_id: String,
    pub user_name: String,
    /// When the entry was recorded.
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Reaction
// ---------------------------------------------------------------------------

/// A typed acknowledgment left by a user on a shared entry. At most one
/// reaction per (entry, user, kind) exists at any time; the schema enforces
/// this with a unique index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    /// Unique reaction identifier.
    pub id: Uuid,
    /// Which of the four reaction buttons was pressed.
    #[serde(rename = "type")]
    pub kind: ReactionKind,
    /// Who reacted.
    pub user_id: String,
    pub user_name: String,
    /// When the reaction was left.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

/// A comment left on a shared entry (at most 200 characters).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment identifier.
    pub id: Uuid,
    pub text: String,
    /// Who commented.
    pub user_id: String,
    pub user_name: String,
    /// When the comment was left.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// CustomEmotion
// ---------------------------------------------------------------------------

/// A user-defined emotion created through the custom-emotion dialog. Names
/// are unique within one user's set and never auto-deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomEmotion {
    /// Unique emotion identifier.
    pub id: Uuid,
    /// Display name (at most 10 characters).
    pub name: String,
    /// Icon shown on the picker button and worn by the emotion's character.
    pub icon: String,
    /// Two-stop gradient class for the picker button.
    #[serde(rename = "color")]
    pub color_theme: String,
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// The journal owner's identity and preferences, stored as a single JSON
/// row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub user_name: String,
    /// Visibility applied to new entries unless the draft overrides it.
    pub default_visibility: Visibility,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            user_name: DEFAULT_USER_NAME.to_string(),
            default_visibility: Visibility::Private,
        }
    }
}
