use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Emotion
// ---------------------------------------------------------------------------

/// One of the eight built-in emotions. The canonical label (the string the
/// UI shows and the store persists) is Korean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Loneliness,
    Anxiety,
    Lethargy,
    Calm,
    Excitement,
}

impl Emotion {
    /// All built-in emotions, in the order the entry form offers them.
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Loneliness,
        Emotion::Anxiety,
        Emotion::Lethargy,
        Emotion::Calm,
        Emotion::Excitement,
    ];

    /// The canonical Korean label.
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Joy => "기쁨",
            Emotion::Sadness => "슬픔",
            Emotion::Anger => "분노",
            Emotion::Loneliness => "외로움",
            Emotion::Anxiety => "불안",
            Emotion::Lethargy => "무기력",
            Emotion::Calm => "평온",
            Emotion::Excitement => "설렘",
        }
    }

    /// Look up a built-in emotion by its canonical label.
    pub fn from_label(label: &str) -> Option<Emotion> {
        Emotion::ALL.iter().copied().find(|e| e.label() == label)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// EmotionTag
// ---------------------------------------------------------------------------

/// The emotion attached to an entry: either one of the eight built-ins or a
/// user-defined custom emotion, identified by its name.
///
/// The lookup tables in [`crate::weather`] match exhaustively on `Builtin`
/// and fall back to a default for `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum EmotionTag {
    Builtin(Emotion),
    Custom(String),
}

impl EmotionTag {
    /// Parse a label. Unknown labels are treated as custom emotion names,
    /// never rejected.
    pub fn parse(label: &str) -> EmotionTag {
        match Emotion::from_label(label) {
            Some(emotion) => EmotionTag::Builtin(emotion),
            None => EmotionTag::Custom(label.to_string()),
        }
    }

    /// The label shown to the user and persisted in the store.
    pub fn label(&self) -> &str {
        match self {
            EmotionTag::Builtin(emotion) => emotion.label(),
            EmotionTag::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, EmotionTag::Custom(_))
    }
}

impl From<Emotion> for EmotionTag {
    fn from(emotion: Emotion) -> Self {
        EmotionTag::Builtin(emotion)
    }
}

impl From<String> for EmotionTag {
    fn from(label: String) -> Self {
        EmotionTag::parse(&label)
    }
}

impl From<EmotionTag> for String {
    fn from(tag: EmotionTag) -> Self {
        tag.label().to_string()
    }
}

impl FromStr for EmotionTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EmotionTag::parse(s))
    }
}

impl fmt::Display for EmotionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// ReactionKind
// ---------------------------------------------------------------------------

/// The typed acknowledgments another user can leave on a shared entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Empathy,
    Heart,
    Hug,
    Support,
}

impl ReactionKind {
    /// All reaction kinds, in the order the reaction bar renders them.
    pub const ALL: [ReactionKind; 4] = [
        ReactionKind::Empathy,
        ReactionKind::Heart,
        ReactionKind::Hug,
        ReactionKind::Support,
    ];

    /// Stable wire/storage name.
    pub fn name(&self) -> &'static str {
        match self {
            ReactionKind::Empathy => "empathy",
            ReactionKind::Heart => "heart",
            ReactionKind::Hug => "hug",
            ReactionKind::Support => "support",
        }
    }

    pub fn from_name(name: &str) -> Option<ReactionKind> {
        ReactionKind::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// The Korean button label.
    pub fn label(&self) -> &'static str {
        match self {
            ReactionKind::Empathy => "공감",
            ReactionKind::Heart => "따뜻함",
            ReactionKind::Hug => "포옹",
            ReactionKind::Support => "응원",
        }
    }
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Sharing scope of an entry. Social features (reactions, comments) are
/// only meaningful above `Private`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Friends,
    Public,
}

impl Visibility {
    /// Stable wire/storage name.
    pub fn name(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Friends => "friends",
            Visibility::Public => "public",
        }
    }

    pub fn from_name(name: &str) -> Option<Visibility> {
        match name {
            "private" => Some(Visibility::Private),
            "friends" => Some(Visibility::Friends),
            "public" => Some(Visibility::Public),
            _ => None,
        }
    }

    /// The Korean option label.
    pub fn label(&self) -> &'static str {
        match self {
            Visibility::Private => "나만 보기",
            Visibility::Friends => "친구와 공유",
            Visibility::Public => "모두 공개",
        }
    }

    /// Whether reactions and comments may be exposed for an entry with this
    /// visibility.
    pub fn allows_social(&self) -> bool {
        !matches!(self, Visibility::Private)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_labels_round_trip() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_label(emotion.label()), Some(emotion));
        }
    }

    #[test]
    fn tag_parse_distinguishes_builtin_and_custom() {
        assert_eq!(EmotionTag::parse("기쁨"), EmotionTag::Builtin(Emotion::Joy));
        assert_eq!(
            EmotionTag::parse("뿌듯함"),
            EmotionTag::Custom("뿌듯함".to_string())
        );
    }

    #[test]
    fn tag_serializes_as_plain_label() {
        let tag = EmotionTag::Builtin(Emotion::Excitement);
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"설렘\"");

        let back: EmotionTag = serde_json::from_str("\"설렘\"").unwrap();
        assert_eq!(back, tag);

        let custom: EmotionTag = serde_json::from_str("\"짜증\"").unwrap();
        assert!(custom.is_custom());
    }

    #[test]
    fn reaction_kind_names_round_trip() {
        for kind in ReactionKind::ALL {
            assert_eq!(ReactionKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ReactionKind::from_name("wave"), None);
    }

    #[test]
    fn visibility_gates_social() {
        assert!(!Visibility::Private.allows_social());
        assert!(Visibility::Friends.allows_social());
        assert!(Visibility::Public.allows_social());
        assert_eq!(Visibility::default(), Visibility::Private);
    }
}
