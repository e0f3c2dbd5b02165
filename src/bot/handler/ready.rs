//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The bot's
//! own identity is recorded here, which the relay needs to recognize messages
//! addressed to it and the other handlers need to skip the bot's own events.

use serenity::all::{ActivityData, Context, Ready};

use crate::{model::message::CurrentUserInfo, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// Records the bot's identity, then sets its activity to "playing ready to serve".
///
/// # Arguments
/// - `state` - Shared bot state receiving the identity
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    record_identity(state, CurrentUserInfo::from(&*ready.user)).await;

    ctx.set_activity(Some(ActivityData::playing("ready to serve")));

    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );
}

/// Stores the bot's identity, replacing the one from an earlier session.
pub async fn record_identity(state: &BotState, user: CurrentUserInfo) {
    tracing::debug!("Bot user is {} ({})", user.name, user.id);
    state.set_current_user(user).await;
}
