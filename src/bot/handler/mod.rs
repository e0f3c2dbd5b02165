use serenity::all::{Context, EventHandler, Guild, Message, Presence, Ready, VoiceState};
use serenity::async_trait;

use crate::state::BotState;

pub mod guild;
pub mod message;
pub mod presence;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub state: BotState,
}

impl Handler {
    pub fn new(state: BotState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, _ctx: Context, guild: Guild, _is_new: Option<bool>) {
        guild::handle_guild_create(&self.state, guild).await;
    }

    /// Called when a member's status or activity changes
    async fn presence_update(&self, _ctx: Context, new_data: Presence) {
        presence::handle_presence_update(&self.state, new_data).await;
    }

    /// Called when a member joins, leaves or changes settings in a voice channel
    async fn voice_state_update(&self, _ctx: Context, _old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.state, new).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, _ctx: Context, message: Message) {
        message::handle_message(&self.state, message).await;
    }
}
