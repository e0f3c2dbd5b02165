use serenity::all::{ChannelId, VoiceState};

/// Last known voice membership of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoiceRecord {
    /// Voice channel the user is connected to, `None` when disconnected
    pub channel_id: Option<ChannelId>,
    pub self_mute: bool,
    pub self_deaf: bool,
}

impl VoiceRecord {
    pub fn new(channel_id: Option<ChannelId>, self_mute: bool, self_deaf: bool) -> Self {
        Self {
            channel_id,
            self_mute,
            self_deaf,
        }
    }

    /// Whether the user is connected to any voice channel.
    pub fn is_connected(&self) -> bool {
        self.channel_id.is_some()
    }

    /// Whether mute/deaf flags differ from `other`, ignoring the channel.
    pub fn settings_differ(&self, other: &VoiceRecord) -> bool {
        self.self_mute != other.self_mute || self.self_deaf != other.self_deaf
    }
}

impl From<&VoiceState> for VoiceRecord {
    fn from(state: &VoiceState) -> Self {
        Self::new(state.channel_id, state.self_mute, state.self_deaf)
    }
}
