//! Test factory for creating Serenity VoiceState objects.

use serde_json::Value;
use serenity::all::VoiceState;

/// Raw voice state payload.
///
/// # Arguments
/// - `guild_id` - Guild of the update, `None` as inside a guild snapshot
/// - `user_id` - User the voice state belongs to
/// - `channel_id` - Connected voice channel, `None` when disconnected
/// - `self_mute` - Whether the user muted themselves
/// - `self_deaf` - Whether the user deafened themselves
pub fn test_voice_state_json(
    guild_id: Option<u64>,
    user_id: u64,
    channel_id: Option<u64>,
    self_mute: bool,
    self_deaf: bool,
) -> Value {
    serde_json::json!({
        "guild_id": guild_id.map(|id| id.to_string()),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "session_id": format!("session-{}", user_id),
        "deaf": false,
        "mute": false,
        "self_deaf": self_deaf,
        "self_mute": self_mute,
        "self_stream": false,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    })
}

/// Creates a test voice state update.
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
pub fn create_test_voice_state(
    guild_id: Option<u64>,
    user_id: u64,
    channel_id: Option<u64>,
    self_mute: bool,
    self_deaf: bool,
) -> VoiceState {
    serde_json::from_value(test_voice_state_json(
        guild_id, user_id, channel_id, self_mute, self_deaf,
    ))
    .expect("Failed to create test voice state - invalid JSON structure")
}
