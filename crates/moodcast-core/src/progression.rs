//! Per-emotion character progression.
//!
//! Every emotion tag maps to one character that gains experience each time
//! a matching entry is saved. Levels only ever go up; there is no decay
//! and no cap. Awarding happens from exactly one call site
//! ([`MoodJournal::create`](crate::journal::MoodJournal::create)) so that
//! edits can never double-count.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use moodcast_shared::constants::{DEFAULT_CUSTOM_ICON, XP_PER_INTENSITY, XP_PER_LEVEL};
use moodcast_shared::types::{Emotion, EmotionTag};
use moodcast_shared::weather;
use moodcast_store::CustomEmotion;

/// A gamified avatar for one emotion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionCharacter {
    pub emotion_tag: EmotionTag,
    /// Derived: `experience_points / 100 + 1`.
    pub level: u32,
    pub experience_points: u32,
    /// Icon the character wears (the emotion icon, or the custom
    /// emotion's chosen icon).
    pub appearance: String,
}

impl EmotionCharacter {
    fn new(emotion_tag: EmotionTag, appearance: String) -> Self {
        Self {
            emotion_tag,
            level: 1,
            experience_points: 0,
            appearance,
        }
    }

    /// Progress through the current level, 0..100, for the experience bar.
    pub fn progress_percent(&self) -> u32 {
        (self.experience_points % XP_PER_LEVEL) * 100 / XP_PER_LEVEL
    }
}

/// The full cast of characters: one per built-in emotion from the start,
/// custom ones created lazily.
#[derive(Debug)]
pub struct CharacterRoster {
    characters: HashMap<EmotionTag, EmotionCharacter>,
}

impl CharacterRoster {
    /// Seed a level-1 character for each of the eight built-in emotions.
    pub fn new() -> Self {
        let characters = Emotion::ALL
            .iter()
            .map(|&emotion| {
                let tag = EmotionTag::from(emotion);
                let appearance = weather::emotion_icon(&tag).to_string();
                (tag.clone(), EmotionCharacter::new(tag, appearance))
            })
            .collect();
        Self { characters }
    }

    /// Create the character for a freshly-defined custom emotion, wearing
    /// its chosen icon. No-op if the character already exists.
    pub fn register_custom(&mut self, emotion: &CustomEmotion) {
        let tag = EmotionTag::Custom(emotion.name.clone());
        self.characters
            .entry(tag.clone())
            .or_insert_with(|| EmotionCharacter::new(tag, emotion.icon.clone()));
    }

    /// Add `intensity * 20` experience points to the character for `tag`,
    /// creating it first if this is an unseen custom tag.
    pub fn award(&mut self, tag: &EmotionTag, intensity: u8) -> &EmotionCharacter {
        let character = self.characters.entry(tag.clone()).or_insert_with(|| {
            let appearance = match tag {
                EmotionTag::Builtin(_) => weather::emotion_icon(tag),
                EmotionTag::Custom(_) => DEFAULT_CUSTOM_ICON,
            };
            EmotionCharacter::new(tag.clone(), appearance.to_string())
        });

        character.experience_points += u32::from(intensity) * XP_PER_INTENSITY;
        character.level = character.experience_points / XP_PER_LEVEL + 1;
        character
    }

    pub fn get(&self, tag: &EmotionTag) -> Option<&EmotionCharacter> {
        self.characters.get(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmotionCharacter> {
        self.characters.values()
    }
}

impl Default for CharacterRoster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn roster_starts_with_all_builtins_at_level_one() {
        let roster = CharacterRoster::new();
        assert_eq!(roster.iter().count(), 8);
        for emotion in Emotion::ALL {
            let character = roster.get(&EmotionTag::from(emotion)).unwrap();
            assert_eq!(character.level, 1);
            assert_eq!(character.experience_points, 0);
            assert!(!character.appearance.is_empty());
        }
    }

    #[test]
    fn one_hundred_xp_reaches_level_two() {
        let mut roster = CharacterRoster::new();
        let tag = EmotionTag::from(Emotion::Joy);

        // intensity 5 is worth exactly 100 xp
        let character = roster.award(&tag, 5);
        assert_eq!(character.experience_points, 100);
        assert_eq!(character.level, 2);
        assert_eq!(character.progress_percent(), 0);
    }

    #[test]
    fn five_max_intensity_awards_reach_level_six() {
        let mut roster = CharacterRoster::new();
        let tag = EmotionTag::from(Emotion::Calm);

        for _ in 0..5 {
            roster.award(&tag, 5);
        }
        let character = roster.get(&tag).unwrap();
        assert_eq!(character.experience_points, 500);
        assert_eq!(character.level, 6);
    }

    #[test]
    fn unseen_custom_tag_is_created_on_first_award() {
        let mut roster = CharacterRoster::new();
        let tag = EmotionTag::Custom("짜증".to_string());

        let character = roster.award(&tag, 2);
        assert_eq!(character.level, 1);
        assert_eq!(character.experience_points, 40);
        assert_eq!(character.appearance, DEFAULT_CUSTOM_ICON);
    }

    #[test]
    fn registered_custom_keeps_its_icon() {
        let mut roster = CharacterRoster::new();
        let custom = CustomEmotion {
            id: Uuid::new_v4(),
            name: "뿌듯함".to_string(),
            icon: "😎".to_string(),
            color_theme: "from-teal-400 to-blue-500".to_string(),
        };
        roster.register_custom(&custom);

        let tag = EmotionTag::Custom("뿌듯함".to_string());
        let character = roster.award(&tag, 3);
        assert_eq!(character.appearance, "😎");
        assert_eq!(character.experience_points, 60);
    }

    #[test]
    fn progress_percent_tracks_partial_levels() {
        let mut roster = CharacterRoster::new();
        let tag = EmotionTag::from(Emotion::Excitement);

        roster.award(&tag, 4); // 80 xp
        let character = roster.get(&tag).unwrap();
        assert_eq!(character.level, 1);
        assert_eq!(character.progress_percent(), 80);
    }
}
