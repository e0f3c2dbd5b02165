//! Voice state event handler.
//!
//! Forwards voice channel joins, leaves, moves and mute/deaf toggles to the
//! notification service. Updates outside guilds and the bot's own voice state
//! are ignored.

use serenity::all::VoiceState;

use crate::{
    model::voice::VoiceRecord, service::notification::NotificationService, state::BotState,
};

/// Handles a voice state update.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `voice_state` - New voice state from Discord
pub async fn handle_voice_state_update(state: &BotState, voice_state: VoiceState) {
    let Some(guild_id) = voice_state.guild_id else {
        return;
    };
    let user_id = voice_state.user_id;

    if state.is_current_user(user_id).await {
        return;
    }

    let mut store = state.store.lock().await;
    NotificationService::new(state.discord.as_ref(), &mut store)
        .voice_changed(guild_id, user_id, VoiceRecord::from(&voice_state))
        .await;
}
