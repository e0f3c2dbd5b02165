//! Test factory for creating Serenity GuildChannel objects.

use serde_json::Value;
use serenity::all::GuildChannel;

const TEXT_CHANNEL: u8 = 0;
const VOICE_CHANNEL: u8 = 2;

/// Raw payload of a guild text channel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Guild the channel belongs to
/// - `name` - Channel name
pub fn test_text_channel_json(channel_id: u64, guild_id: u64, name: &str) -> Value {
    channel_json(channel_id, guild_id, name, TEXT_CHANNEL)
}

/// Raw payload of a guild voice channel.
pub fn test_voice_channel_json(channel_id: u64, guild_id: u64, name: &str) -> Value {
    let mut channel = channel_json(channel_id, guild_id, name, VOICE_CHANNEL);
    channel["bitrate"] = serde_json::json!(64000);
    channel["user_limit"] = serde_json::json!(0);
    channel
}

/// Creates a test guild text channel.
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_text_channel(channel_id: u64, guild_id: u64, name: &str) -> GuildChannel {
    serde_json::from_value(test_text_channel_json(channel_id, guild_id, name))
        .expect("Failed to create test text channel - invalid JSON structure")
}

/// Creates a test guild voice channel.
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_voice_channel(channel_id: u64, guild_id: u64, name: &str) -> GuildChannel {
    serde_json::from_value(test_voice_channel_json(channel_id, guild_id, name))
        .expect("Failed to create test voice channel - invalid JSON structure")
}

fn channel_json(channel_id: u64, guild_id: u64, name: &str, kind: u8) -> Value {
    serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": null,
    })
}
