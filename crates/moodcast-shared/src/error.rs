use thiserror::Error;

/// Input validation failures. All of these are recovered at the call
/// boundary: the operation is rejected and state is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Entry text was empty after trimming.
    #[error("Entry text is empty")]
    EmptyText,

    /// Entry text exceeded the 500-character limit.
    #[error("Entry text is {0} characters (max 500)")]
    TextTooLong(usize),

    /// Intensity outside the 1..=5 scale.
    #[error("Intensity {0} is out of range (1..=5)")]
    IntensityOutOfRange(u8),

    /// Comment text was empty after trimming.
    #[error("Comment text is empty")]
    CommentEmpty,

    /// Comment text exceeded the 200-character limit.
    #[error("Comment text is {0} characters (max 200)")]
    CommentTooLong(usize),

    /// Custom emotion name was empty after trimming.
    #[error("Emotion name is empty")]
    EmotionNameEmpty,

    /// Custom emotion name exceeded the 10-character limit.
    #[error("Emotion name is {0} characters (max 10)")]
    EmotionNameTooLong(usize),

    /// Custom emotion name already used by this user.
    #[error("Emotion name already exists: {0}")]
    DuplicateEmotionName(String),
}
