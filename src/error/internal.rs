use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to convert Unix timestamp to Discord timestamp
    ///
    /// Occurs when the current time cannot be converted to Discord's timestamp
    /// format, typically due to the timestamp being out of range.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },

    /// Failure to build the pattern that strips the bot's name from a prompt
    ///
    /// The name is escaped before use, so this indicates a bug rather than bad input.
    #[error("Failed to build mention pattern: {0}")]
    MentionPattern(#[from] regex::Error),
}
