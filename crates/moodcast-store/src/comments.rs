//! Persistence for the per-entry comment sub-collection. Same ownership
//! model as reactions: hydrated on read, replaced wholesale on update.

use chrono::{DateTime, Utc};
use rusqlite::params;
use uuid::Uuid;

use crate::database::Database;
use crate::error::Result;
use crate::models::Comment;

impl Database {
    /// Load the comments of one entry, oldest-first.
    pub fn comments_for_entry(&self, entry_id: Uuid) -> Result<Vec<Comment>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, text, user_id, user_name, created_at
             FROM comments WHERE entry_id = ?1
             ORDER BY created_at ASC, rowid ASC",
        )?;

        let rows = stmt.query_map(params![entry_id.to_string()], row_to_comment)?;

        let mut comments = Vec::new();
        for row in rows {
            comments.push(row?);
        }
        Ok(comments)
    }

    /// Replace the stored comment list of an entry.
    pub(crate) fn replace_comments(&self, entry_id: Uuid, comments: &[Comment]) -> Result<()> {
        self.conn().execute(
            "DELETE FROM comments WHERE entry_id = ?1",
            params![entry_id.to_string()],
        )?;

        for comment in comments {
            self.conn().execute(
                "INSERT INTO comments (id, entry_id, text, user_id, user_name, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    comment.id.to_string(),
                    entry_id.to_string(),
                    comment.text,
                    comment.user_id,
                    comment.user_name,
                    comment.created_at.to_rfc3339(),
                ],
            )?;
        }
        Ok(())
    }
}

fn row_to_comment(row: &rusqlite::Row<'_>) -> rusqlite::Result<Comment> {
    let id_str: String = row.get(0)?;
    let text: String = row.get(1)?;
    let user_id: String = row.get(2)?;
    let user_name: String = row.get(3)?;
    let created_str: String = row.get(4)?;

    let id = Uuid::parse_str(&id_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(Comment {
        id,
        text,
        user_id,
        user_name,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MoodEntry;
    use chrono::Duration;
    use moodcast_shared::types::{Emotion, EmotionTag, Visibility};

    fn public_entry() -> MoodEntry {
        MoodEntry {
            id: Uuid::new_v4(),
            text: "public".to_string(),
            emotion_tag: EmotionTag::from(Emotion::Lethargy),
            intensity: 4,
            weather_image: String::new(),
            positive_message: None,
            custom_emotion: None,
            visibility: Visibility::Public,
            comments_enabled: true,
            reactions: Vec::new(),
            comments: Vec::new(),
            user_id: "community-user-2".to_string(),
            user_name: "같은 마음".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn comments_come_back_oldest_first() {
        let db = Database::in_memory().unwrap();
        let mut entry = public_entry();
        db.insert_entry(&entry).unwrap();

        entry.comments.push(Comment {
            id: Uuid::new_v4(),
            text: "힘든 시간이지만 곧 좋아질 거예요. 응원해요!".to_string(),
            user_id: "user3".to_string(),
            user_name: "현우".to_string(),
            created_at: Utc::now() - Duration::minutes(10),
        });
        entry.comments.push(Comment {
            id: Uuid::new_v4(),
            text: "혼자가 아니에요 🤗".to_string(),
            user_id: "user4".to_string(),
            user_name: "지은".to_string(),
            created_at: Utc::now(),
        });
        db.update_entry(&entry).unwrap();

        let loaded = db.get_entry(entry.id).unwrap();
        assert_eq!(loaded.comments.len(), 2);
        assert_eq!(loaded.comments[0].user_name, "현우");
        assert_eq!(loaded.comments[1].user_name, "지은");
    }
}
