//! The journal service.
//!
//! [`MoodJournal`] is the single object a presentation layer talks to. It
//! owns the entry store and the two pieces of derived state (streak,
//! character roster) and keeps them consistent: saving a new entry
//! advances both, exactly once, synchronously, before the save is
//! reported back; edits, deletes, and imports never do.

use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use moodcast_shared::constants::{MAX_EMOTION_NAME, MAX_ENTRY_TEXT, MAX_INTENSITY, MIN_INTENSITY};
use moodcast_shared::types::{Emotion, EmotionTag, ReactionKind, Visibility};
use moodcast_shared::{weather, ValidationError};
use moodcast_store::{CustomEmotion, Database, MoodEntry, Profile};

use crate::error::{CoreError, Result};
use crate::progression::{CharacterRoster, EmotionCharacter};
use crate::social;
use crate::streak::{StreakTracker, UserStreak};

// ---------------------------------------------------------------------------
// EntryDraft
// ---------------------------------------------------------------------------

/// What the entry form submits. Identity and defaults are filled in by the
/// journal at save time.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub text: String,
    pub emotion_tag: EmotionTag,
    pub intensity: u8,
    /// Overrides the profile's default visibility when set.
    pub visibility: Option<Visibility>,
    /// Comfort message the user chose to keep, if any.
    pub positive_message: Option<String>,
    /// Snapshot of the custom emotion when a custom tag is selected.
    pub custom_emotion: Option<CustomEmotion>,
    pub comments_enabled: bool,
    /// Entry timestamp; `None` means now. Backdating only moves the entry
    /// in the calendar; the streak always counts the save-time day.
    pub created_at: Option<DateTime<Utc>>,
}

impl EntryDraft {
    pub fn new(text: impl Into<String>, emotion_tag: EmotionTag, intensity: u8) -> Self {
        Self {
            text: text.into(),
            emotion_tag,
            intensity,
            visibility: None,
            positive_message: None,
            custom_emotion: None,
            comments_enabled: true,
            created_at: None,
        }
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let chars = trimmed.chars().count();
        if chars > MAX_ENTRY_TEXT {
            return Err(ValidationError::TextTooLong(chars));
        }
        if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&self.intensity) {
            return Err(ValidationError::IntensityOutOfRange(self.intensity));
        }
        Ok(())
    }
}

impl Default for EntryDraft {
    /// The entry form's initial state: 기쁨 at intensity 3.
    fn default() -> Self {
        Self::new(String::new(), EmotionTag::from(Emotion::Joy), 3)
    }
}

// ---------------------------------------------------------------------------
// MoodJournal
// ---------------------------------------------------------------------------

/// The mood journal domain service.
pub struct MoodJournal {
    db: Database,
    streak: StreakTracker,
    roster: CharacterRoster,
    profile: Profile,
}

impl MoodJournal {
    /// Open a session-volatile journal (in-memory store).
    pub fn new() -> Result<Self> {
        Self::with_database(Database::in_memory()?)
    }

    /// Open a journal backed by a database file.
    pub fn open_at(path: &Path) -> Result<Self> {
        Self::with_database(Database::open_at(path)?)
    }

    /// Wrap an already-open database. Custom emotions present in the store
    /// get their characters registered up front so they keep their icons.
    pub fn with_database(db: Database) -> Result<Self> {
        let profile = db.get_profile()?;
        let mut roster = CharacterRoster::new();
        for emotion in db.list_custom_emotions(&profile.user_id)? {
            roster.register_custom(&emotion);
        }
        Ok(Self {
            db,
            streak: StreakTracker::new(),
            roster,
            profile,
        })
    }

    // ------------------------------------------------------------------
    // Entries
    // ------------------------------------------------------------------

    /// Validate and save a new entry, then advance the streak and award
    /// character experience. This is the only code path that touches
    /// either piece of derived state.
    pub fn create(&mut self, draft: EntryDraft) -> Result<MoodEntry> {
        draft.validate()?;

        if let Some(ref custom) = draft.custom_emotion {
            self.roster.register_custom(custom);
        }

        let entry = MoodEntry {
            id: Uuid::new_v4(),
            text: draft.text.trim().to_string(),
            weather_image: weather::weather_image(&draft.emotion_tag, draft.intensity).to_string(),
            emotion_tag: draft.emotion_tag,
            intensity: draft.intensity,
            positive_message: draft.positive_message,
            custom_emotion: draft.custom_emotion,
            visibility: draft.visibility.unwrap_or(self.profile.default_visibility),
            comments_enabled: draft.comments_enabled,
            reactions: Vec::new(),
            comments: Vec::new(),
            user_id: self.profile.user_id.clone(),
            user_name: self.profile.user_name.clone(),
            created_at: draft.created_at.unwrap_or_else(Utc::now),
        };
        self.db.insert_entry(&entry)?;

        // Streak counts the wall-clock day of the save, not the entry's
        // own timestamp, so backdated drafts cannot rewrite history.
        let today = Local::now().date_naive();
        self.streak.on_entry_created(today);
        self.roster.award(&entry.emotion_tag, entry.intensity);

        info!(
            entry = %entry.id,
            tag = %entry.emotion_tag,
            intensity = entry.intensity,
            "entry saved"
        );
        Ok(entry)
    }

    /// Replace a stored entry. Unknown ids surface NotFound. Editing never
    /// re-awards experience or touches the streak.
    pub fn update(&mut self, entry: &MoodEntry) -> Result<()> {
        self.db.update_entry(entry)?;
        info!(entry = %entry.id, "entry updated");
        Ok(())
    }

    /// Delete an entry by id. Idempotent: deleting an unknown id returns
    /// `false` and changes nothing. Streak and experience are not rewound.
    pub fn delete(&mut self, id: Uuid) -> Result<bool> {
        let deleted = self.db.delete_entry(id)?;
        if deleted {
            info!(entry = %id, "entry deleted");
        }
        Ok(deleted)
    }

    /// Store a fully-formed entry from an outside source (the seed
    /// datasets, a sync collaborator). Imported entries belong to other
    /// users, so the owner's streak and characters are left alone.
    pub fn import(&mut self, entry: MoodEntry) -> Result<()> {
        self.db.insert_entry(&entry)?;
        Ok(())
    }

    pub fn get(&self, id: Uuid) -> Result<MoodEntry> {
        Ok(self.db.get_entry(id)?)
    }

    /// Entries logged on the given local calendar day, newest-first. Feeds
    /// both the "today" view and the calendar drill-down.
    pub fn entries_for_day(&self, day: NaiveDate) -> Result<Vec<MoodEntry>> {
        Ok(self.db.entries_for_day(day)?)
    }

    /// The entry shown as the day's weather: the most recent one of that
    /// day, if any.
    pub fn most_recent_for_day(&self, day: NaiveDate) -> Result<Option<MoodEntry>> {
        Ok(self.db.most_recent_for_day(day)?)
    }

    /// History view, newest-first.
    pub fn list_entries(&self, limit: u32, offset: u32) -> Result<Vec<MoodEntry>> {
        Ok(self.db.list_entries(limit, offset)?)
    }

    // ------------------------------------------------------------------
    // Social
    // ------------------------------------------------------------------

    /// Toggle the journal owner's reaction on a shared entry and persist
    /// the result. Private entries refuse reactions; this is where the
    /// visibility contract is enforced.
    pub fn toggle_reaction(&mut self, entry_id: Uuid, kind: ReactionKind) -> Result<MoodEntry> {
        let entry = self.db.get_entry(entry_id)?;
        if !entry.visibility.allows_social() {
            return Err(CoreError::EntryPrivate);
        }

        let updated =
            social::toggle_reaction(&entry, kind, &self.profile.user_id, &self.profile.user_name);
        self.db.update_entry(&updated)?;

        info!(entry = %entry_id, kind = kind.name(), "reaction toggled");
        Ok(updated)
    }

    /// Add a comment by the journal owner to a shared entry and persist
    /// the result. Enforces the visibility gate and the author's
    /// comments-enabled switch.
    pub fn add_comment(&mut self, entry_id: Uuid, text: &str) -> Result<MoodEntry> {
        let entry = self.db.get_entry(entry_id)?;
        if !entry.visibility.allows_social() {
            return Err(CoreError::EntryPrivate);
        }
        if !entry.comments_enabled {
            return Err(CoreError::CommentsDisabled);
        }

        let updated =
            social::add_comment(&entry, text, &self.profile.user_id, &self.profile.user_name)?;
        self.db.update_entry(&updated)?;

        info!(entry = %entry_id, "comment added");
        Ok(updated)
    }

    // ------------------------------------------------------------------
    // Custom emotions
    // ------------------------------------------------------------------

    /// Create a custom emotion for the journal owner and register its
    /// character. Names are trimmed, at most 10 characters, and unique
    /// within the owner's set.
    pub fn create_custom_emotion(
        &mut self,
        name: &str,
        icon: &str,
        color_theme: &str,
    ) -> Result<CustomEmotion> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmotionNameEmpty.into());
        }
        let chars = trimmed.chars().count();
        if chars > MAX_EMOTION_NAME {
            return Err(ValidationError::EmotionNameTooLong(chars).into());
        }
        if self
            .db
            .custom_emotion_name_exists(&self.profile.user_id, trimmed)?
        {
            return Err(ValidationError::DuplicateEmotionName(trimmed.to_string()).into());
        }

        let emotion = CustomEmotion {
            id: Uuid::new_v4(),
            name: trimmed.to_string(),
            icon: icon.to_string(),
            color_theme: color_theme.to_string(),
        };
        self.db
            .insert_custom_emotion(&self.profile.user_id, &emotion)?;
        self.roster.register_custom(&emotion);

        info!(name = %emotion.name, "custom emotion created");
        Ok(emotion)
    }

    /// The owner's custom emotions in creation order.
    pub fn custom_emotions(&self) -> Result<Vec<CustomEmotion>> {
        Ok(self.db.list_custom_emotions(&self.profile.user_id)?)
    }

    // ------------------------------------------------------------------
    // Derived state & profile
    // ------------------------------------------------------------------

    pub fn streak(&self) -> &UserStreak {
        self.streak.streak()
    }

    pub fn character(&self, tag: &EmotionTag) -> Option<&EmotionCharacter> {
        self.roster.get(tag)
    }

    pub fn characters(&self) -> impl Iterator<Item = &EmotionCharacter> {
        self.roster.iter()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn set_profile(&mut self, profile: Profile) -> Result<()> {
        self.db.set_profile(&profile)?;
        self.profile = profile;
        Ok(())
    }

    /// Direct store access for embedders; the typed operations above are
    /// the expected surface.
    pub fn database(&self) -> &Database {
        &self.db
    }
}
