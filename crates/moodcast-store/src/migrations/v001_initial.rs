//! v001 -- Initial schema creation.
//!
//! Creates the two base tables: `entries` and `custom_emotions`.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Mood entries
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS entries (
    id               TEXT PRIMARY KEY NOT NULL,  -- UUID v4
    text             TEXT NOT NULL,
    emotion_tag      TEXT NOT NULL,              -- canonical label
    intensity        INTEGER NOT NULL,           -- 1..=5
    weather_image    TEXT NOT NULL,
    positive_message TEXT,
    custom_emotion   TEXT,                       -- JSON snapshot, nullable
    visibility       TEXT NOT NULL DEFAULT 'private',
    comments_enabled INTEGER NOT NULL DEFAULT 1, -- boolean 0/1
    user_id          TEXT NOT NULL,
    user_name        TEXT NOT NULL,
    created_at       TEXT NOT NULL               -- ISO-8601 / RFC-3339
);

-- History and day queries both read newest-first.
CREATE INDEX IF NOT EXISTS idx_entries_created ON entries(created_at DESC);

-- ----------------------------------------------------------------
-- Custom emotions
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS custom_emotions (
    id          TEXT PRIMARY KEY NOT NULL,       -- UUID v4
    user_id     TEXT NOT NULL,
    name        TEXT NOT NULL,
    icon        TEXT NOT NULL,
    color_theme TEXT NOT NULL,

    UNIQUE (user_id, name)
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
