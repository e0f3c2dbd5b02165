use std::collections::HashMap;

use serenity::all::{ChannelId, GuildId};

use crate::model::transition::Topic;

/// Fixed channel names that designate the notice channels of a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLabels {
    pub voice: String,
    pub game: String,
}

/// Notice channels found in one guild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub voice_channel_id: Option<ChannelId>,
    pub game_channel_id: Option<ChannelId>,
}

/// Maps each guild to the channels that receive its voice and game notices.
///
/// Entries are matched by exact, case-sensitive channel name when a guild is
/// first seen and are never re-evaluated, so renaming a channel later has no
/// effect until the bot restarts. Channel names seen at that time are kept for
/// rendering voice notices.
#[derive(Debug)]
pub struct ChannelDirectory {
    labels: ChannelLabels,
    entries: HashMap<GuildId, DirectoryEntry>,
    channel_names: HashMap<ChannelId, String>,
}

impl ChannelDirectory {
    pub fn new(labels: ChannelLabels) -> Self {
        Self {
            labels,
            entries: HashMap::new(),
            channel_names: HashMap::new(),
        }
    }

    /// Registers the channels of a guild.
    ///
    /// Channel names are always remembered. The notice channels are resolved only
    /// the first time a guild is registered; later registrations keep the entry.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the channels belong to
    /// - `channels` - Every channel of the guild as `(id, name)`
    ///
    /// # Returns
    /// - `DirectoryEntry` - The entry in effect for the guild
    pub fn register_guild<'a, I>(&mut self, guild_id: GuildId, channels: I) -> DirectoryEntry
    where
        I: IntoIterator<Item = (ChannelId, &'a str)>,
    {
        let mut found = DirectoryEntry::default();

        for (channel_id, name) in channels {
            if name == self.labels.voice {
                found.voice_channel_id = Some(channel_id);
            }
            if name == self.labels.game {
                found.game_channel_id = Some(channel_id);
            }
            self.channel_names.insert(channel_id, name.to_string());
        }

        *self.entries.entry(guild_id).or_insert(found)
    }

    /// Channel that receives notices of `topic` in a guild, if one was found.
    pub fn channel_for(&self, guild_id: GuildId, topic: Topic) -> Option<ChannelId> {
        let entry = self.entries.get(&guild_id)?;
        match topic {
            Topic::Voice => entry.voice_channel_id,
            Topic::Game => entry.game_channel_id,
        }
    }

    /// Name of a channel as seen when its guild was registered.
    pub fn channel_name(&self, channel_id: ChannelId) -> Option<&str> {
        self.channel_names.get(&channel_id).map(String::as_str)
    }
}
