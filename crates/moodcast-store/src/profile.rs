//! Profile settings persistence.
//!
//! The whole [`Profile`] is stored as one JSON document in a single-row
//! table, so adding a preference is a struct change rather than a schema
//! migration.

use rusqlite::params;

use crate::database::Database;
use crate::error::Result;
use crate::models::Profile;

impl Database {
    /// Load the journal owner's profile, falling back to the defaults when
    /// none has been saved yet.
    pub fn get_profile(&self) -> Result<Profile> {
        let result: std::result::Result<String, _> =
            self.conn()
                .query_row("SELECT json FROM profile WHERE id = 1", [], |row| {
                    row.get(0)
                });

        match result {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(Profile::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the journal owner's profile.
    pub fn set_profile(&self, profile: &Profile) -> Result<()> {
        let json = serde_json::to_string(profile)?;
        self.conn().execute(
            "INSERT OR REPLACE INTO profile (id, json) VALUES (1, ?1)",
            params![json],
        )?;
        tracing::info!(user = %profile.user_name, "profile updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodcast_shared::types::Visibility;

    #[test]
    fn missing_profile_falls_back_to_defaults() {
        let db = Database::in_memory().unwrap();
        let profile = db.get_profile().unwrap();
        assert_eq!(profile.user_id, "current-user");
        assert_eq!(profile.user_name, "나");
        assert_eq!(profile.default_visibility, Visibility::Private);
    }

    #[test]
    fn profile_round_trips() {
        let db = Database::in_memory().unwrap();

        let profile = Profile {
            user_id: "user-42".to_string(),
            user_name: "수진".to_string(),
            default_visibility: Visibility::Friends,
        };
        db.set_profile(&profile).unwrap();

        assert_eq!(db.get_profile().unwrap(), profile);
    }
}
