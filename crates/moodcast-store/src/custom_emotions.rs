//! CRUD operations for [`CustomEmotion`] records.
//!
//! Custom emotions are created once through the creation dialog and then
//! persist for the user's set; they are never auto-deleted. Name
//! uniqueness per user is validated at the service boundary and backed by
//! the schema's UNIQUE (user_id, name) constraint.

use rusqlite::params;
use uuid::Uuid;

use crate::database::Database;
use crate::error::Result;
use crate::models::CustomEmotion;

impl Database {
    /// Insert a new custom emotion for the given user.
    pub fn insert_custom_emotion(&self, user_id: &str, emotion: &CustomEmotion) -> Result<()> {
        self.conn().execute(
            "INSERT INTO custom_emotions (id, user_id, name, icon, color_theme)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                emotion.id.to_string(),
                user_id,
                emotion.name,
                emotion.icon,
                emotion.color_theme,
            ],
        )?;
        Ok(())
    }

    /// Whether the user already has a custom emotion with this name.
    pub fn custom_emotion_name_exists(&self, user_id: &str, name: &str) -> Result<bool> {
        let count: u32 = self.conn().query_row(
            "SELECT COUNT(*) FROM custom_emotions WHERE user_id = ?1 AND name = ?2",
            params![user_id, name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// List a user's custom emotions in creation order.
    pub fn list_custom_emotions(&self, user_id: &str) -> Result<Vec<CustomEmotion>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, name, icon, color_theme
             FROM custom_emotions
             WHERE user_id = ?1
             ORDER BY rowid ASC",
        )?;

        let rows = stmt.query_map(params![user_id], row_to_custom_emotion)?;

        let mut emotions = Vec::new();
        for row in rows {
            emotions.push(row?);
        }
        Ok(emotions)
    }
}

fn row_to_custom_emotion(row: &rusqlite::Row<'_>) -> rusqlite::Result<CustomEmotion> {
    let id_str: String = row.get(0)?;
    let name: String = row.get(1)?;
    let icon: String = row.get(2)?;
    let color_theme: String = row.get(3)?;

    let id = Uuid::parse_str(&id_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(CustomEmotion {
        id,
        name,
        icon,
        color_theme,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emotion(name: &str) -> CustomEmotion {
        CustomEmotion {
            id: Uuid::new_v4(),
            name: name.to_string(),
            icon: "🤗".to_string(),
            color_theme: "from-pink-400 to-red-500".to_string(),
        }
    }

    #[test]
    fn insert_and_list_in_creation_order() {
        let db = Database::in_memory().unwrap();
        db.insert_custom_emotion("current-user", &emotion("뿌듯함")).unwrap();
        db.insert_custom_emotion("current-user", &emotion("짜증")).unwrap();

        let listed = db.list_custom_emotions("current-user").unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "뿌듯함");
        assert_eq!(listed[1].name, "짜증");
    }

    #[test]
    fn names_are_scoped_per_user() {
        let db = Database::in_memory().unwrap();
        db.insert_custom_emotion("current-user", &emotion("뿌듯함")).unwrap();

        assert!(db
            .custom_emotion_name_exists("current-user", "뿌듯함")
            .unwrap());
        assert!(!db.custom_emotion_name_exists("friend-1", "뿌듯함").unwrap());

        // Another user may reuse the name.
        db.insert_custom_emotion("friend-1", &emotion("뿌듯함")).unwrap();

        // The same user may not; the schema rejects it.
        assert!(db
            .insert_custom_emotion("current-user", &emotion("뿌듯함"))
            .is_err());
    }
}
