//! Guild event handler for channel discovery and state seeding.
//!
//! This module handles the `guild_create` event which fires when a guild becomes
//! available to the bot. This occurs in several scenarios:
//! - On bot startup for each guild the bot is already in
//! - When the bot joins a new guild
//! - When a guild becomes available after a Discord outage
//!
//! The snapshot carries the guild's channels, the voice states of connected users
//! and the presences of online users. The channels resolve the notice channels,
//! while the voice states and presences seed the trackers so that users already
//! in a channel or game at startup are not announced again.

use serenity::all::{Guild, UserId};

use crate::{model::voice::VoiceRecord, state::BotState};

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// Seeding never posts a notification. The bot's own voice state and presence
/// are skipped.
///
/// # Arguments
/// - `state` - Shared bot state holding the directory and trackers
/// - `guild` - Guild snapshot from Discord
pub async fn handle_guild_create(state: &BotState, guild: Guild) {
    let current_user = state.current_user().await;
    let is_self = |user_id: UserId| current_user.as_ref().is_some_and(|me| me.id == user_id);

    let mut store = state.store.lock().await;

    let entry = store.directory.register_guild(
        guild.id,
        guild
            .channels
            .iter()
            .map(|(channel_id, channel)| (*channel_id, channel.name.as_str())),
    );

    let mut seeded_voice = 0;
    for (user_id, voice_state) in &guild.voice_states {
        if is_self(*user_id) {
            continue;
        }
        store.voice.seed(guild.id, *user_id, VoiceRecord::from(voice_state));
        seeded_voice += 1;
    }

    let mut seeded_presences = 0;
    for (user_id, presence) in &guild.presences {
        if is_self(*user_id) {
            continue;
        }
        let activity = presence
            .activities
            .first()
            .map(|activity| activity.name.as_str())
            .unwrap_or_default();
        store.presence.seed(guild.id, *user_id, activity);
        seeded_presences += 1;
    }

    if entry.voice_channel_id.is_none() && entry.game_channel_id.is_none() {
        tracing::warn!(
            "Guild {} ({}) has no notice channels, notifications are disabled there",
            guild.name,
            guild.id
        );
    }

    tracing::info!(
        "Registered guild {} ({}): voice notices {:?}, game notices {:?}, {} voice states, {} presences",
        guild.name,
        guild.id,
        entry.voice_channel_id,
        entry.game_channel_id,
        seeded_voice,
        seeded_presences
    );
}
