//! Embedded seed datasets.
//!
//! The friends feed and the public community feed ship as JSON documents
//! compiled into the crate. They are an external collaborator to the
//! core: the entries flow in through [`MoodJournal::import`] like records
//! from any other source satisfying the entry shape, and never touch the
//! owner's streak or characters.

use tracing::info;

use moodcast_store::MoodEntry;

use crate::error::Result;
use crate::journal::MoodJournal;

const SHARED_DIARIES_JSON: &str = include_str!("../data/shared_diaries.json");
const COMMUNITY_FEED_JSON: &str = include_str!("../data/community_feed.json");

/// Entries friends have shared with the user (visibility `friends`).
pub fn shared_diaries() -> Result<Vec<MoodEntry>> {
    Ok(serde_json::from_str(SHARED_DIARIES_JSON)?)
}

/// Entries shared publicly on the community feed (visibility `public`).
pub fn community_feed() -> Result<Vec<MoodEntry>> {
    Ok(serde_json::from_str(COMMUNITY_FEED_JSON)?)
}

/// Import both datasets into the journal. Returns how many entries were
/// loaded.
pub fn load_into(journal: &mut MoodJournal) -> Result<u32> {
    let mut count = 0;
    for entry in shared_diaries()?.into_iter().chain(community_feed()?) {
        journal.import(entry)?;
        count += 1;
    }
    info!(count, "seed entries imported");
    Ok(count)
}
