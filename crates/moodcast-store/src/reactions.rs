//! Persistence for the per-entry reaction sub-collection.
//!
//! Reactions are owned by their entry: reads hydrate the embedded list and
//! writes replace it wholesale (the social layer produces a full
//! copy-on-write snapshot). The `idx_reactions_unique` index backs the
//! at-most-one-per-(entry, user, kind) invariant at the schema level.

use chrono::{DateTime, Utc};
use rusqlite::params;
use uuid::Uuid;

use moodcast_shared::types::ReactionKind;

use crate::database::Database;
use crate::error::Result;
use crate::models::Reaction;

impl Database {
    /// Load the reactions of one entry, oldest-first.
    pub fn reactions_for_entry(&self, entry_id: Uuid) -> Result<Vec<Reaction>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, kind, user_id, user_name, created_at
             FROM reactions WHERE entry_id = ?1
             ORDER BY created_at ASC, rowid ASC",
        )?;

        let rows = stmt.query_map(params![entry_id.to_string()], row_to_reaction)?;

        let mut reactions = Vec::new();
        for row in rows {
            reactions.push(row?);
        }
        Ok(reactions)
    }

    /// Replace the stored reaction list of an entry. Runs inside the
    /// caller's transaction when invoked from the entry writers.
    pub(crate) fn replace_reactions(&self, entry_id: Uuid, reactions: &[Reaction]) -> Result<()> {
        self.conn().execute(
            "DELETE FROM reactions WHERE entry_id = ?1",
            params![entry_id.to_string()],
        )?;

        for reaction in reactions {
            self.conn().execute(
                "INSERT OR IGNORE INTO reactions (id, entry_id, kind, user_id, user_name, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    reaction.id.to_string(),
                    entry_id.to_string(),
                    reaction.kind.name(),
                    reaction.user_id,
                    reaction.user_name,
                    reaction.created_at.to_rfc3339(),
                ],
            )?;
        }
        Ok(())
    }
}

fn row_to_reaction(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reaction> {
    let id_str: String = row.get(0)?;
    let kind_str: String = row.get(1)?;
    let user_id: String = row.get(2)?;
    let user_name: String = row.get(3)?;
    let created_str: String = row.get(4)?;

    let id = Uuid::parse_str(&id_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let kind = ReactionKind::from_name(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            format!("unknown reaction kind: {kind_str}").into(),
        )
    })?;

    let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(Reaction {
        id,
        kind,
        user_id,
        user_name,
        created_at,
    })
}
