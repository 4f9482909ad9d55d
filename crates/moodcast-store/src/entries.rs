//! CRUD operations for [`MoodEntry`] records.
//!
//! Entries are read back newest-first. `created_at DESC, rowid DESC` keeps
//! same-timestamp entries in creation order, so the history list is always
//! creation-order sortable.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

use moodcast_shared::types::{EmotionTag, Visibility};

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{CustomEmotion, MoodEntry};

const ENTRY_COLUMNS: &str = "id, text, emotion_tag, intensity, weather_image, positive_message, \
     custom_emotion, visibility, comments_enabled, user_id, user_name, created_at";

impl Database {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Insert a new entry together with its embedded reactions and
    /// comments (usually empty at creation; imports carry them).
    pub fn insert_entry(&self, entry: &MoodEntry) -> Result<()> {
        let tx = self.conn().unchecked_transaction()?;

        let custom_json = entry
            .custom_emotion
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        self.conn().execute(
            "INSERT INTO entries (id, text, emotion_tag, intensity, weather_image, \
             positive_message, custom_emotion, visibility, comments_enabled, user_id, \
             user_name, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                entry.id.to_string(),
                entry.text,
                entry.emotion_tag.label(),
                entry.intensity,
                entry.weather_image,
                entry.positive_message,
                custom_json,
                entry.visibility.name(),
                entry.comments_enabled,
                entry.user_id,
                entry.user_name,
                entry.created_at.to_rfc3339(),
            ],
        )?;

        self.replace_reactions(entry.id, &entry.reactions)?;
        self.replace_comments(entry.id, &entry.comments)?;

        tx.commit()?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// Fetch a single entry by id, with reactions and comments attached.
    pub fn get_entry(&self, id: Uuid) -> Result<MoodEntry> {
        let mut entry = self
            .conn()
            .query_row(
                &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1"),
                params![id.to_string()],
                row_to_entry,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
                other => StoreError::Sqlite(other),
            })?;

        entry.reactions = self.reactions_for_entry(entry.id)?;
        entry.comments = self.comments_for_entry(entry.id)?;
        Ok(entry)
    }

    /// List entries newest-first.
    pub fn list_entries(&self, limit: u32, offset: u32) -> Result<Vec<MoodEntry>> {
        let mut stmt = self.conn().prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?1 OFFSET ?2"
        ))?;

        let rows = stmt.query_map(params![limit, offset], row_to_entry)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        self.attach_social(&mut entries)?;
        Ok(entries)
    }

    /// List entries whose `created_at` falls on the given local calendar
    /// day, newest-first.
    pub fn entries_for_day(&self, day: NaiveDate) -> Result<Vec<MoodEntry>> {
        let (start, end) = day_bounds_utc(day);

        let mut stmt = self.conn().prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries
             WHERE created_at >= ?1 AND created_at < ?2
             ORDER BY created_at DESC, rowid DESC"
        ))?;

        let rows = stmt.query_map(params![start.to_rfc3339(), end.to_rfc3339()], row_to_entry)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        self.attach_social(&mut entries)?;
        Ok(entries)
    }

    /// The most recent entry of the given local calendar day, if any. This
    /// is the "today's weather" query.
    pub fn most_recent_for_day(&self, day: NaiveDate) -> Result<Option<MoodEntry>> {
        let (start, end) = day_bounds_utc(day);

        let entry = self
            .conn()
            .query_row(
                &format!(
                    "SELECT {ENTRY_COLUMNS} FROM entries
                     WHERE created_at >= ?1 AND created_at < ?2
                     ORDER BY created_at DESC, rowid DESC
                     LIMIT 1"
                ),
                params![start.to_rfc3339(), end.to_rfc3339()],
                row_to_entry,
            )
            .optional()?;

        match entry {
            Some(mut entry) => {
                entry.reactions = self.reactions_for_entry(entry.id)?;
                entry.comments = self.comments_for_entry(entry.id)?;
                Ok(Some(entry))
            }
            None => Ok(None),
        }
    }

    /// Total number of stored entries.
    pub fn count_entries(&self) -> Result<u32> {
        let count: u32 =
            self.conn()
                .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count)
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Replace the entry with the matching id, including its reaction and
    /// comment sub-collections. Unknown ids surface [`StoreError::NotFound`].
    pub fn update_entry(&self, entry: &MoodEntry) -> Result<()> {
        let tx = self.conn().unchecked_transaction()?;

        let custom_json = entry
            .custom_emotion
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let affected = self.conn().execute(
            "UPDATE entries
             SET text = ?2, emotion_tag = ?3, intensity = ?4, weather_image = ?5,
                 positive_message = ?6, custom_emotion = ?7, visibility = ?8,
                 comments_enabled = ?9, user_id = ?10, user_name = ?11, created_at = ?12
             WHERE id = ?1",
            params![
                entry.id.to_string(),
                entry.text,
                entry.emotion_tag.label(),
                entry.intensity,
                entry.weather_image,
                entry.positive_message,
                custom_json,
                entry.visibility.name(),
                entry.comments_enabled,
                entry.user_id,
                entry.user_name,
                entry.created_at.to_rfc3339(),
            ],
        )?;

        if affected == 0 {
            // Dropping the transaction rolls back.
            return Err(StoreError::NotFound);
        }

        self.replace_reactions(entry.id, &entry.reactions)?;
        self.replace_comments(entry.id, &entry.comments)?;

        tx.commit()?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Delete an entry by id. Returns `true` if a row was deleted;
    /// reactions and comments cascade with it.
    pub fn delete_entry(&self, id: Uuid) -> Result<bool> {
        let affected = self
            .conn()
            .execute("DELETE FROM entries WHERE id = ?1", params![id.to_string()])?;
        Ok(affected > 0)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn attach_social(&self, entries: &mut [MoodEntry]) -> Result<()> {
        for entry in entries.iter_mut() {
            entry.reactions = self.reactions_for_entry(entry.id)?;
            entry.comments = self.comments_for_entry(entry.id)?;
        }
        Ok(())
    }
}

/// UTC instants of the given local day's midnight and the next one.
fn day_bounds_utc(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = local_midnight_utc(day);
    let end = day.succ_opt().map(local_midnight_utc).unwrap_or(start);
    (start, end)
}

fn local_midnight_utc(day: NaiveDate) -> DateTime<Utc> {
    let midnight = day.and_time(NaiveTime::MIN);
    match midnight.and_local_timezone(Local).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        // A DST jump can make local midnight nonexistent; treat the naive
        // instant as UTC rather than losing the day.
        None => Utc.from_utc_datetime(&midnight),
    }
}

/// Map a `rusqlite::Row` to a [`MoodEntry`] with empty sub-collections.
fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<MoodEntry> {
    let id_str: String = row.get(0)?;
    let text: String = row.get(1)?;
    let tag_label: String = row.get(2)?;
    let intensity: i64 = row.get(3)?;
    let weather_image: String = row.get(4)?;
    let positive_message: Option<String> = row.get(5)?;
    let custom_json: Option<String> = row.get(6)?;
    let visibility_str: String = row.get(7)?;
    let comments_enabled: bool = row.get(8)?;
    let user_id: String = row.get(9)?;
    let user_name: String = row.get(10)?;
    let created_str: String = row.get(11)?;

    let id = Uuid::parse_str(&id_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let custom_emotion: Option<CustomEmotion> = custom_json
        .map(|json| serde_json::from_str(&json))
        .transpose()
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
        })?;

    let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(11, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(MoodEntry {
        id,
        text,
        emotion_tag: EmotionTag::parse(&tag_label),
        intensity: intensity as u8,
        weather_image,
        positive_message,
        custom_emotion,
        visibility: Visibility::from_name(&visibility_str).unwrap_or_default(),
        comments_enabled,
        reactions: Vec::new(),
        comments: Vec::new(),
        user_id,
        user_name,
        created_at,
    })
}
