//! Game notices.
//!
//! A presence update carries the user's current activity. The presence tracker
//! classifies it, and anything other than `NoChange` is rendered and delivered to
//! the guild's game notice channel.

use serenity::all::{GuildId, UserId};

use crate::model::{notification::NotificationHandle, transition::Topic};

use super::{builder, NotificationService};

impl<'a> NotificationService<'a> {
    /// Handles a user's reported activity.
    ///
    /// The member profile is only fetched once it is clear a notice will be sent.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the presence update came from
    /// - `user_id` - User the update is about
    /// - `activity` - Name of the first reported activity, empty when idle
    ///
    /// # Returns
    /// - `Some(NotificationHandle)` - Handle of the posted or edited notice
    /// - `None` - No transition, nowhere to post, or a failed call
    pub async fn presence_changed(
        &mut self,
        guild_id: GuildId,
        user_id: UserId,
        activity: &str,
    ) -> Option<NotificationHandle> {
        let transition = self.store.presence.observe(guild_id, user_id, activity);
        let kind = transition.kind()?;
        tracing::debug!("Presence of user {} in guild {}: {:?}", user_id, guild_id, transition);

        self.notify(Topic::Game, guild_id, user_id, kind, |profile, titles| {
            builder::render_presence(profile, &transition, titles)
        })
        .await
    }
}
