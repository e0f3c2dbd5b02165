//! Voice notices.
//!
//! Voice state updates are classified by the voice tracker. Joins, leaves and
//! channel moves are announced in the guild's voice notice channel; a mute or
//! deafen toggle only refreshes the user's live notice.

use serenity::all::{GuildId, UserId};

use crate::model::{notification::NotificationHandle, transition::Topic, voice::VoiceRecord};

use super::{builder, NotificationService};

impl<'a> NotificationService<'a> {
    /// Handles a user's reported voice state.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the voice state update came from
    /// - `user_id` - User the update is about
    /// - `current` - Channel and mute/deaf flags reported by the update
    ///
    /// # Returns
    /// - `Some(NotificationHandle)` - Handle of the posted or edited notice
    /// - `None` - No transition, nowhere to post, or a failed call
    pub async fn voice_changed(
        &mut self,
        guild_id: GuildId,
        user_id: UserId,
        current: VoiceRecord,
    ) -> Option<NotificationHandle> {
        let transition = self.store.voice.observe(guild_id, user_id, current);
        let kind = transition.kind()?;
        tracing::debug!("Voice state of user {} in guild {}: {:?}", user_id, guild_id, transition);

        let channel_name = transition
            .channel_id()
            .and_then(|channel_id| self.store.directory.channel_name(channel_id))
            .unwrap_or(builder::UNKNOWN_CHANNEL_NAME)
            .to_string();

        self.notify(Topic::Voice, guild_id, user_id, kind, |profile, titles| {
            builder::render_voice(profile, &transition, &channel_name, titles)
        })
        .await
    }
}
