//! Test factory for creating Serenity Guild objects.
//!
//! This module provides factory functions for creating mock Serenity `Guild` structs
//! for testing purposes. These factories create valid Guild objects by deserializing
//! JSON, simulating the snapshot Discord sends in a `GUILD_CREATE` event.

use serde_json::Value;
use serenity::all::Guild;

/// Creates a test Serenity Guild without channels, voice states or presences.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(guild_id: u64, name: &str) -> Guild {
    create_test_guild_with(guild_id, name, vec![], vec![], vec![])
}

/// Creates a test Serenity Guild snapshot with the given nested payloads.
///
/// Use the `*_json` helpers of the sibling modules to build the entries.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `channels` - Raw channel payloads
/// - `voice_states` - Raw voice state payloads of connected users
/// - `presences` - Raw presence payloads of online users
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{
///     channel::test_voice_channel_json, guild::create_test_guild_with,
///     presence::test_presence_json,
/// };
///
/// let guild = create_test_guild_with(
///     1,
///     "Test Guild",
///     vec![test_voice_channel_json(21, 1, "general")],
///     vec![],
///     vec![test_presence_json(None, 7, &["Game X"])],
/// );
/// assert_eq!(guild.presences.len(), 1);
/// ```
pub fn create_test_guild_with(
    guild_id: u64,
    name: &str,
    channels: Vec<Value>,
    voice_states: Vec<Value>,
    presences: Vec<Value>,
) -> Guild {
    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "splash": null,
        "discovery_splash": null,
        "owner_id": "100000000000000000",
        "afk_channel_id": null,
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": voice_states,
        "channels": channels,
        "threads": [],
        "presences": presences,
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
