//! The emotion → weather lookup tables.
//!
//! Every function here is total: custom tags and out-of-range intensities
//! fall back to a sensible default instead of failing, so the presentation
//! layer can call them with whatever an entry happens to carry.

use crate::types::{Emotion, EmotionTag};

// The four landscape photos the weather cards rotate through.
const CLEAR_FOREST: &str =
    "https://images.unsplash.com/photo-1518495973542-4542c06a5843?w=400&h=300&fit=crop";
const FOGGY_HILLS: &str =
    "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?w=400&h=300&fit=crop";
const RAINY_SHORE: &str =
    "https://images.unsplash.com/photo-1500375592092-40eb2168fd21?w=400&h=300&fit=crop";
const STORM_PINES: &str =
    "https://images.unsplash.com/photo-1509316975850-ff9c5deb0cd9?w=400&h=300&fit=crop";
const BRIGHT_BLOOM: &str =
    "https://images.unsplash.com/photo-1465146344425-f00d5f5c8f07?w=400&h=300&fit=crop";

/// Text icon for an emotion tag. Custom tags carry their own icon on
/// their emotion record; this is the tag-only fallback.
pub fn emotion_icon(tag: &EmotionTag) -> &'static str {
    match tag {
        EmotionTag::Builtin(Emotion::Joy) => "☀",
        EmotionTag::Builtin(Emotion::Sadness) => "☔",
        EmotionTag::Builtin(Emotion::Anger) => "⚡",
        EmotionTag::Builtin(Emotion::Loneliness) => "☁",
        EmotionTag::Builtin(Emotion::Anxiety) => "🌪",
        EmotionTag::Builtin(Emotion::Lethargy) => "🌫",
        EmotionTag::Builtin(Emotion::Calm) => "🌤",
        EmotionTag::Builtin(Emotion::Excitement) => "🌈",
        EmotionTag::Custom(_) => "☀",
    }
}

/// Weather photo URL for an (emotion, intensity) pair.
pub fn weather_image(tag: &EmotionTag, intensity: u8) -> &'static str {
    let emotion = match tag {
        EmotionTag::Builtin(emotion) => emotion,
        EmotionTag::Custom(_) => return CLEAR_FOREST,
    };
    match (emotion, intensity) {
        (Emotion::Sadness, 1..=2) => FOGGY_HILLS,
        (Emotion::Sadness, 3..=5) => RAINY_SHORE,
        (Emotion::Joy, 1..=3) => CLEAR_FOREST,
        (Emotion::Joy, 4..=5) => BRIGHT_BLOOM,
        (Emotion::Anger, 1) => FOGGY_HILLS,
        (Emotion::Anger, 2..=5) => STORM_PINES,
        (Emotion::Loneliness, 1..=5) => FOGGY_HILLS,
        (Emotion::Anxiety, 1..=5) => FOGGY_HILLS,
        (Emotion::Lethargy, 1..=2) => STORM_PINES,
        (Emotion::Lethargy, 3..=5) => FOGGY_HILLS,
        (Emotion::Calm, 1..=5) => CLEAR_FOREST,
        (Emotion::Excitement, 1) => CLEAR_FOREST,
        (Emotion::Excitement, 2..=5) => BRIGHT_BLOOM,
        _ => CLEAR_FOREST,
    }
}

/// Korean weather description for an (emotion, intensity) pair.
pub fn weather_description(tag: &EmotionTag, intensity: u8) -> &'static str {
    let emotion = match tag {
        EmotionTag::Builtin(emotion) => emotion,
        EmotionTag::Custom(_) => return "맑은 하늘",
    };
    match (emotion, intensity) {
        (Emotion::Sadness, 1..=2) => "약간 흐린 하늘",
        (Emotion::Sadness, 3) => "구름 낀 하늘",
        (Emotion::Sadness, 4..=5) => "비 오는 하늘",
        (Emotion::Joy, 1) => "맑은 하늘",
        (Emotion::Joy, 2..=3) => "따스한 햇살",
        (Emotion::Joy, 4..=5) => "밝은 태양",
        (Emotion::Anger, 1) => "약간 흐린 하늘",
        (Emotion::Anger, 2) => "구름 낀 하늘",
        (Emotion::Anger, 3..=4) => "천둥번개",
        (Emotion::Anger, 5) => "번개가 치는 하늘",
        (Emotion::Loneliness, 1..=5) => "안개 낀 풍경",
        (Emotion::Anxiety, 1..=3) => "바람 부는 날",
        (Emotion::Anxiety, 4..=5) => "토네이도",
        (Emotion::Lethargy, 1..=2) => "구름 낀 하늘",
        (Emotion::Lethargy, 3..=5) => "안개 낀 풍경",
        (Emotion::Calm, 1..=2) => "맑은 하늘",
        (Emotion::Calm, 3..=5) => "따스한 햇살",
        (Emotion::Excitement, 1) => "맑은 하늘",
        (Emotion::Excitement, 2..=4) => "무지개",
        (Emotion::Excitement, 5) => "반짝이는 하늘",
        _ => "맑은 하늘",
    }
}

/// Three-stop gradient class used by the feed and history cards.
pub fn weather_gradient(tag: &EmotionTag) -> &'static str {
    match tag {
        EmotionTag::Builtin(Emotion::Joy) => {
            "bg-gradient-to-br from-yellow-400 via-orange-400 to-pink-400"
        }
        EmotionTag::Builtin(Emotion::Sadness) => {
            "bg-gradient-to-br from-gray-500 via-blue-500 to-blue-700"
        }
        EmotionTag::Builtin(Emotion::Anger) => {
            "bg-gradient-to-br from-red-500 via-orange-500 to-yellow-500"
        }
        EmotionTag::Builtin(Emotion::Loneliness) => {
            "bg-gradient-to-br from-gray-600 via-gray-500 to-blue-400"
        }
        EmotionTag::Builtin(Emotion::Anxiety) => {
            "bg-gradient-to-br from-purple-500 via-gray-500 to-gray-600"
        }
        EmotionTag::Builtin(Emotion::Lethargy) => {
            "bg-gradient-to-br from-gray-700 via-gray-600 to-gray-500"
        }
        EmotionTag::Builtin(Emotion::Calm) => {
            "bg-gradient-to-br from-green-400 via-blue-400 to-blue-500"
        }
        EmotionTag::Builtin(Emotion::Excitement) => {
            "bg-gradient-to-br from-pink-500 via-purple-500 to-blue-500"
        }
        EmotionTag::Custom(_) => "bg-gradient-to-br from-gray-500 to-gray-600",
    }
}

/// Two-stop gradient class used by the emotion picker buttons.
pub fn emotion_gradient(tag: &EmotionTag) -> &'static str {
    match tag {
        EmotionTag::Builtin(Emotion::Joy) => "bg-gradient-to-br from-yellow-400 to-orange-400",
        EmotionTag::Builtin(Emotion::Sadness) => "bg-gradient-to-br from-gray-400 to-blue-500",
        EmotionTag::Builtin(Emotion::Anger) => "bg-gradient-to-br from-red-500 to-purple-500",
        EmotionTag::Builtin(Emotion::Loneliness) => "bg-gradient-to-br from-gray-500 to-blue-400",
        EmotionTag::Builtin(Emotion::Anxiety) => "bg-gradient-to-br from-purple-400 to-gray-500",
        EmotionTag::Builtin(Emotion::Lethargy) => "bg-gradient-to-br from-gray-600 to-gray-400",
        EmotionTag::Builtin(Emotion::Calm) => "bg-gradient-to-br from-green-400 to-blue-400",
        EmotionTag::Builtin(Emotion::Excitement) => "bg-gradient-to-br from-pink-400 to-purple-400",
        EmotionTag::Custom(_) => "bg-gradient-to-br from-gray-400 to-gray-500",
    }
}

/// Calendar-dot color class for an emotion tag.
pub fn emotion_color(tag: &EmotionTag) -> &'static str {
    match tag {
        EmotionTag::Builtin(Emotion::Joy) => "bg-yellow-400",
        EmotionTag::Builtin(Emotion::Sadness) => "bg-blue-500",
        EmotionTag::Builtin(Emotion::Anger) => "bg-red-500",
        EmotionTag::Builtin(Emotion::Loneliness) => "bg-gray-500",
        EmotionTag::Builtin(Emotion::Anxiety) => "bg-purple-500",
        EmotionTag::Builtin(Emotion::Lethargy) => "bg-gray-600",
        EmotionTag::Builtin(Emotion::Calm) => "bg-green-400",
        EmotionTag::Builtin(Emotion::Excitement) => "bg-pink-500",
        EmotionTag::Custom(_) => "bg-gray-400",
    }
}

/// Whether the emotion is one the app offers comfort messages for.
pub fn is_negative(tag: &EmotionTag) -> bool {
    matches!(
        tag,
        EmotionTag::Builtin(
            Emotion::Sadness
                | Emotion::Anger
                | Emotion::Loneliness
                | Emotion::Anxiety
                | Emotion::Lethargy
        )
    )
}

/// Comfort message for a negative emotion, with a generic affirmation for
/// everything else.
pub fn positive_message(tag: &EmotionTag) -> &'static str {
    match tag {
        EmotionTag::Builtin(Emotion::Sadness) => {
            "슬픔을 느끼는 것은 당신이 소중한 것들을 사랑할 줄 아는 마음이 있다는 증거예요."
        }
        EmotionTag::Builtin(Emotion::Anger) => {
            "화가 났다는 건, 당신에게 그만큼 중요한 가치가 있다는 뜻일지도 몰라요."
        }
        EmotionTag::Builtin(Emotion::Loneliness) => {
            "외로움을 느낄 수 있다는 건, 연결을 원하는 따뜻한 마음이 있다는 뜻이에요."
        }
        EmotionTag::Builtin(Emotion::Anxiety) => {
            "불안함은 당신이 앞으로 나아가려는 용기의 다른 이름일 수 있어요."
        }
        EmotionTag::Builtin(Emotion::Lethargy) => {
            "오늘은 아무것도 하지 않아도 괜찮아요. 당신이 멈춘 건, 회복의 시작일 수 있어요."
        }
        _ => "당신의 감정은 소중하고 의미가 있어요.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Emotion;

    fn all_tags() -> Vec<EmotionTag> {
        let mut tags: Vec<EmotionTag> = Emotion::ALL.iter().copied().map(EmotionTag::from).collect();
        tags.push(EmotionTag::Custom("뿌듯함".to_string()));
        tags
    }

    #[test]
    fn lookups_are_total() {
        // Valid intensities, custom tags, and garbage intensities all
        // resolve to non-empty values.
        for tag in all_tags() {
            for intensity in [0u8, 1, 2, 3, 4, 5, 6, 250] {
                assert!(!weather_image(&tag, intensity).is_empty());
                assert!(!weather_description(&tag, intensity).is_empty());
            }
            assert!(!emotion_icon(&tag).is_empty());
            assert!(!weather_gradient(&tag).is_empty());
            assert!(!emotion_gradient(&tag).is_empty());
            assert!(!emotion_color(&tag).is_empty());
            assert!(!positive_message(&tag).is_empty());
        }
    }

    #[test]
    fn intensity_shifts_the_forecast() {
        let joy = EmotionTag::from(Emotion::Joy);
        assert_eq!(weather_description(&joy, 1), "맑은 하늘");
        assert_eq!(weather_description(&joy, 5), "밝은 태양");
        assert_ne!(weather_image(&joy, 1), weather_image(&joy, 5));

        let sadness = EmotionTag::from(Emotion::Sadness);
        assert_eq!(weather_description(&sadness, 5), "비 오는 하늘");
    }

    #[test]
    fn negative_emotions_get_specific_comfort() {
        let sadness = EmotionTag::from(Emotion::Sadness);
        assert!(is_negative(&sadness));
        assert!(positive_message(&sadness).contains("슬픔"));

        let joy = EmotionTag::from(Emotion::Joy);
        assert!(!is_negative(&joy));
        assert_eq!(positive_message(&joy), "당신의 감정은 소중하고 의미가 있어요.");

        let custom = EmotionTag::Custom("짜증".to_string());
        assert!(!is_negative(&custom));
    }
}
