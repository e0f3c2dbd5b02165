use std::time::Instant;

use serenity::all::{ChannelId, MessageId};

/// Green used for arrivals and continuations.
pub const COLOR_POSITIVE: u32 = 0x1e824c;
/// Red used for departures.
pub const COLOR_NEGATIVE: u32 = 0x96281b;

/// Rendered content of a notification, independent of the Discord embed builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEmbed {
    /// Short title shown in the author line
    pub title: String,
    pub description: String,
    pub color: u32,
    /// Avatar of the user the notice is about, shown next to the title
    pub icon_url: Option<String>,
}

/// Pointer to the most recently posted notification for a (guild, user, topic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationHandle {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub posted_at: Instant,
}

impl NotificationHandle {
    pub fn new(channel_id: ChannelId, message_id: MessageId) -> Self {
        Self {
            channel_id,
            message_id,
            posted_at: Instant::now(),
        }
    }
}
