/// Maximum entry text length in characters.
pub const MAX_ENTRY_TEXT: usize = 500;

/// Maximum comment text length in characters.
pub const MAX_COMMENT_TEXT: usize = 200;

/// Maximum custom emotion name length in characters.
pub const MAX_EMOTION_NAME: usize = 10;

/// Lowest selectable emotion intensity.
pub const MIN_INTENSITY: u8 = 1;

/// Highest selectable emotion intensity.
pub const MAX_INTENSITY: u8 = 5;

/// Experience points a character gains per unit of intensity.
pub const XP_PER_INTENSITY: u32 = 20;

/// Experience points per character level.
pub const XP_PER_LEVEL: u32 = 100;

/// Identity used for the journal owner when no profile has been saved.
pub const DEFAULT_USER_ID: &str = "current-user";
pub const DEFAULT_USER_NAME: &str = "나";

/// Pre-selected icon in the custom emotion dialog.
pub const DEFAULT_CUSTOM_ICON: &str = "😊";

/// Pre-selected color theme in the custom emotion dialog.
pub const DEFAULT_CUSTOM_COLOR_THEME: &str = "from-blue-400 to-purple-500";

/// Icons offered by the custom emotion dialog.
pub const CUSTOM_EMOTION_ICONS: [&str; 12] = [
    "😊", "😢", "😡", "😰", "😴", "🤔", "😍", "🤗", "😎", "🥺", "😤", "😌",
];

/// Color themes offered by the custom emotion dialog.
pub const CUSTOM_COLOR_THEMES: [&str; 6] = [
    "from-blue-400 to-purple-500",
    "from-pink-400 to-red-500",
    "from-green-400 to-teal-500",
    "from-yellow-400 to-orange-500",
    "from-purple-400 to-pink-500",
    "from-teal-400 to-blue-500",
];
