//! Presence event handler.
//!
//! Forwards the first reported activity of a member to the notification
//! service. Presences outside guilds and the bot's own presence are ignored.

use serenity::all::Presence;

use crate::{service::notification::NotificationService, state::BotState};

/// Handles a presence update.
///
/// Holds the state lock across classification and delivery so that concurrent
/// updates for the same user are applied in order.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `presence` - Presence data from Discord
pub async fn handle_presence_update(state: &BotState, presence: Presence) {
    let Some(guild_id) = presence.guild_id else {
        return;
    };
    let user_id = presence.user.id;

    if state.is_current_user(user_id).await {
        return;
    }

    let activity = presence
        .activities
        .first()
        .map(|activity| activity.name.as_str())
        .unwrap_or_default();

    let mut store = state.store.lock().await;
    NotificationService::new(state.discord.as_ref(), &mut store)
        .presence_changed(guild_id, user_id, activity)
        .await;
}
