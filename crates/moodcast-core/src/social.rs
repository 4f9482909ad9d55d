//! Reactions and comments over a shared entry.
//!
//! These are pure copy-on-write functions: they take an entry snapshot and
//! return an updated snapshot without touching storage. The caller (the
//! journal's social wrappers) persists the result through the update path.
//! Visibility is deliberately not checked here; the gate lives in
//! [`MoodJournal`](crate::journal::MoodJournal).

use std::collections::HashMap;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use moodcast_shared::constants::MAX_COMMENT_TEXT;
use moodcast_shared::types::ReactionKind;
use moodcast_shared::ValidationError;
use moodcast_store::{Comment, MoodEntry, Reaction};

/// Toggle a user's reaction of the given kind: remove it if present,
/// append a fresh one otherwise. The at-most-one-per-(kind, user)
/// invariant holds after every call, and toggling twice restores the
/// original reaction set.
pub fn toggle_reaction(
    entry: &MoodEntry,
    kind: ReactionKind,
    user_id: &str,
    user_name: &str,
) -> MoodEntry {
    let mut updated = entry.clone();

    match updated
        .reactions
        .iter()
        .position(|r| r.kind == kind && r.user_id == user_id)
    {
        Some(index) => {
            updated.reactions.remove(index);
        }
        None => {
            updated.reactions.push(Reaction {
                id: Uuid::new_v4(),
                kind,
                user_id: user_id.to_string(),
                user_name: user_name.to_string(),
                created_at: Utc::now(),
            });
        }
    }
    updated
}

/// Append a comment. Over-length input is rejected, not truncated: 200
/// characters pass verbatim, 201 fail.
pub fn add_comment(
    entry: &MoodEntry,
    text: &str,
    user_id: &str,
    user_name: &str,
) -> Result<MoodEntry, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::CommentEmpty);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_COMMENT_TEXT {
        return Err(ValidationError::CommentTooLong(chars));
    }

    let mut updated = entry.clone();
    updated.comments.push(Comment {
        id: Uuid::new_v4(),
        text: trimmed.to_string(),
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        created_at: Utc::now(),
    });
    Ok(updated)
}

/// Aggregated view of an entry's reactions.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReactionSummary {
    pub total: usize,
    pub counts_by_kind: HashMap<ReactionKind, usize>,
}

impl ReactionSummary {
    pub fn count(&self, kind: ReactionKind) -> usize {
        self.counts_by_kind.get(&kind).copied().unwrap_or(0)
    }
}

/// Pure aggregation over the embedded reaction list; no mutation.
pub fn reaction_summary(entry: &MoodEntry) -> ReactionSummary {
    let mut counts_by_kind = HashMap::new();
    for reaction in &entry.reactions {
        *counts_by_kind.entry(reaction.kind).or_insert(0) += 1;
    }
    ReactionSummary {
        total: entry.reactions.len(),
        counts_by_kind,
    }
}

/// Whether this user already reacted with the given kind.
pub fn has_reacted(entry: &MoodEntry, kind: ReactionKind, user_id: &str) -> bool {
    entry
        .reactions
        .iter()
        .any(|r| r.kind == kind && r.user_id == user_id)
}

/// Names of the users who reacted with the given kind, in reaction order.
/// The feed shows the first few and an "외 N명" overflow.
pub fn reactor_names(entry: &MoodEntry, kind: ReactionKind) -> Vec<&str> {
    entry
        .reactions
        .iter()
        .filter(|r| r.kind == kind)
        .map(|r| r.user_name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodcast_shared::types::{Emotion, EmotionTag, Visibility};

    fn shared_entry() -> MoodEntry {
        MoodEntry {
            id: Uuid::new_v4(),
            text: "공유된 하루".to_string(),
            emotion_tag: EmotionTag::from(Emotion::Excitement),
            intensity: 4,
            weather_image: String::new(),
            positive_message: None,
            custom_emotion: None,
            visibility: Visibility::Friends,
            comments_enabled: true,
            reactions: Vec::new(),
            comments: Vec::new(),
            user_id: "friend-1".to_string(),
            user_name: "수진".to_string(),
            created_at: Utc::now(),
        }
    }

    fn reaction_pairs(entry: &MoodEntry) -> Vec<(ReactionKind, String)> {
        entry
            .reactions
            .iter()
            .map(|r| (r.kind, r.user_id.clone()))
            .collect()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let entry = shared_entry();

        let once = toggle_reaction(&entry, ReactionKind::Heart, "user1", "민지");
        assert_eq!(once.reactions.len(), 1);
        assert!(has_reacted(&once, ReactionKind::Heart, "user1"));

        let twice = toggle_reaction(&once, ReactionKind::Heart, "user1", "민지");
        assert_eq!(reaction_pairs(&twice), reaction_pairs(&entry));
    }

    #[test]
    fn toggle_never_stacks_per_kind_and_user() {
        let entry = shared_entry();
        let mut current = entry.clone();
        for _ in 0..5 {
            current = toggle_reaction(&current, ReactionKind::Hug, "user2", "준호");
        }
        // Odd number of toggles: exactly one reaction.
        assert_eq!(current.reactions.len(), 1);
    }

    #[test]
    fn different_kinds_and_users_coexist() {
        let entry = shared_entry();
        let a = toggle_reaction(&entry, ReactionKind::Heart, "user1", "민지");
        let b = toggle_reaction(&a, ReactionKind::Empathy, "user1", "민지");
        let c = toggle_reaction(&b, ReactionKind::Heart, "user2", "준호");
        assert_eq!(c.reactions.len(), 3);

        let summary = reaction_summary(&c);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.count(ReactionKind::Heart), 2);
        assert_eq!(summary.count(ReactionKind::Empathy), 1);
        assert_eq!(summary.count(ReactionKind::Support), 0);
        assert_eq!(reactor_names(&c, ReactionKind::Heart), vec!["민지", "준호"]);
    }

    #[test]
    fn comment_boundary_is_two_hundred_chars() {
        let entry = shared_entry();

        let exact: String = "가".repeat(200);
        let updated = add_comment(&entry, &exact, "user1", "민지").unwrap();
        assert_eq!(updated.comments.len(), 1);
        assert_eq!(updated.comments[0].text, exact);

        let over: String = "가".repeat(201);
        assert_eq!(
            add_comment(&entry, &over, "user1", "민지"),
            Err(ValidationError::CommentTooLong(201))
        );

        assert_eq!(
            add_comment(&entry, "   ", "user1", "민지"),
            Err(ValidationError::CommentEmpty)
        );
    }
}
