//! v002 -- Social layer and profile.
//!
//! Adds per-entry reactions and comments plus the single-row profile
//! settings document.

use rusqlite::Connection;

const UP_SQL: &str = r#"
-- Reactions
CREATE TABLE IF NOT EXISTS reactions (
    id         TEXT PRIMARY KEY NOT NULL,   -- UUID v4
    entry_id   TEXT NOT NULL,               -- FK -> entries(id)
    kind       TEXT NOT NULL,               -- empathy / heart / hug / support
    user_id    TEXT NOT NULL,
    user_name  TEXT NOT NULL,
    created_at TEXT NOT NULL,               -- ISO-8601

    FOREIGN KEY (entry_id) REFERENCES entries(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_reactions_entry ON reactions(entry_id);
CREATE UNIQUE INDEX IF NOT EXISTS idx_reactions_unique ON reactions(entry_id, user_id, kind);

-- Comments
CREATE TABLE IF NOT EXISTS comments (
    id         TEXT PRIMARY KEY NOT NULL,   -- UUID v4
    entry_id   TEXT NOT NULL,               -- FK -> entries(id)
    text       TEXT NOT NULL,
    user_id    TEXT NOT NULL,
    user_name  TEXT NOT NULL,
    created_at TEXT NOT NULL,

    FOREIGN KEY (entry_id) REFERENCES entries(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_comments_entry ON comments(entry_id);

-- Profile settings (single JSON document)
CREATE TABLE IF NOT EXISTS profile (
    id   INTEGER PRIMARY KEY CHECK (id = 1),
    json TEXT NOT NULL
);
"#;

pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
