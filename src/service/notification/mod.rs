//! Presence and voice notification service.
//!
//! This module provides the `NotificationService`, which turns tracked state
//! changes into Discord notices. A user has at most one live notice per guild and
//! topic. Continuations edit that notice in place while arrivals and departures
//! post a new one.
//!
//! The service is organized into separate modules by concern:
//! - `builder` - Notice rendering and embed building
//! - `presence` - Game start/stop/switch notices
//! - `voice` - Voice join/leave/move/mute notices
//! - `title` - Random notice titles

pub mod builder;
pub mod presence;
pub mod title;
pub mod voice;

use serenity::all::{ChannelId, GuildId, UserId};

use crate::{
    model::{
        notification::{NotificationEmbed, NotificationHandle},
        profile::UserProfile,
        transition::{NotificationKind, Topic},
    },
    service::discord::DiscordApi,
    state::StateStore,
};

use self::title::TitlePicker;

/// Where a notice goes: a new message or the user's live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delivery {
    Post { channel_id: ChannelId },
    Edit { handle: NotificationHandle },
}

/// Service delivering presence and voice notices.
///
/// Borrows the locked state store for the duration of one event, so the caller
/// holds the store's mutex across observe, render and post/edit.
pub struct NotificationService<'a> {
    /// Discord client for posting and editing notices
    api: &'a dyn DiscordApi,
    /// Trackers, channel directory, handles and title source
    store: &'a mut StateStore,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService instance.
    ///
    /// # Arguments
    /// - `api` - Discord client for outbound calls
    /// - `store` - Locked state store
    ///
    /// # Returns
    /// - `NotificationService` - New service instance
    pub fn new(api: &'a dyn DiscordApi, store: &'a mut StateStore) -> Self {
        Self { api, store }
    }

    /// Renders and delivers a notice for a user.
    ///
    /// Posts a new message and remembers it, or edits the user's live message when
    /// the kind is a continuation and such a message exists. The member profile is
    /// only fetched, and `render` only called, once it is clear a Discord call will
    /// be made. Failed Discord calls are logged and swallowed.
    ///
    /// # Arguments
    /// - `topic` - Notice topic, selects the target channel
    /// - `guild_id` - Guild the change happened in
    /// - `user_id` - User the notice is about
    /// - `kind` - Kind of transition being announced
    /// - `render` - Builds the notice from the member profile and the title source
    ///
    /// # Returns
    /// - `Some(NotificationHandle)` - Handle of the posted or edited message
    /// - `None` - No notice channel, a flag-only change without a live message,
    ///   nothing rendered, or a failed call
    pub async fn notify<F>(
        &mut self,
        topic: Topic,
        guild_id: GuildId,
        user_id: UserId,
        kind: NotificationKind,
        render: F,
    ) -> Option<NotificationHandle>
    where
        F: FnOnce(&UserProfile, &mut TitlePicker) -> Option<NotificationEmbed> + Send,
    {
        let delivery = self.plan_delivery(topic, guild_id, user_id, kind)?;
        let profile = self.profile(guild_id, user_id).await;
        let embed = render(&profile, &mut self.store.titles)?;

        self.deliver(delivery, topic, guild_id, user_id, &embed).await
    }

    /// Decides between posting and editing without touching Discord.
    ///
    /// # Returns
    /// - `Some(Delivery::Edit)` - Continuation with a live message
    /// - `Some(Delivery::Post)` - Anything else that may post
    /// - `None` - No notice channel, or a flag-only change without a live message
    fn plan_delivery(
        &self,
        topic: Topic,
        guild_id: GuildId,
        user_id: UserId,
        kind: NotificationKind,
    ) -> Option<Delivery> {
        let channel_id = self.store.directory.channel_for(guild_id, topic)?;

        let live = if kind.is_continuation() {
            self.store.handles.get(guild_id, user_id, topic)
        } else {
            None
        };

        match live {
            Some(handle) => Some(Delivery::Edit { handle }),
            None if kind.posts_without_handle() => Some(Delivery::Post { channel_id }),
            None => None,
        }
    }

    async fn deliver(
        &mut self,
        delivery: Delivery,
        topic: Topic,
        guild_id: GuildId,
        user_id: UserId,
        embed: &NotificationEmbed,
    ) -> Option<NotificationHandle> {
        match delivery {
            Delivery::Post { channel_id } => match self.api.send_embed(channel_id, embed).await {
                Ok(message_id) => {
                    let handle = NotificationHandle::new(channel_id, message_id);
                    self.store.handles.insert(guild_id, user_id, topic, handle);

                    tracing::info!(
                        "Posted {:?} notice {} for user {} in channel {}",
                        topic,
                        message_id,
                        user_id,
                        channel_id
                    );
                    Some(handle)
                }
                Err(e) => {
                    // An older notice must not be edited by a later continuation.
                    self.store.handles.remove(guild_id, user_id, topic);

                    tracing::error!(
                        "Failed to post {:?} notice for user {} in channel {}: {}",
                        topic,
                        user_id,
                        channel_id,
                        e
                    );
                    None
                }
            },
            Delivery::Edit { handle } => {
                match self
                    .api
                    .edit_embed(handle.channel_id, handle.message_id, embed)
                    .await
                {
                    Ok(()) => {
                        tracing::info!(
                            "Edited {:?} notice {} for user {}",
                            topic,
                            handle.message_id,
                            user_id
                        );
                        Some(handle)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to edit {:?} notice {} for user {}: {}",
                            topic,
                            handle.message_id,
                            user_id,
                            e
                        );
                        None
                    }
                }
            }
        }
    }

    /// Fetches the member's profile, falling back to a placeholder on failure.
    async fn profile(&self, guild_id: GuildId, user_id: UserId) -> UserProfile {
        match self.api.member_profile(guild_id, user_id).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::debug!(
                    "Could not fetch member {} of guild {}: {}",
                    user_id,
                    guild_id,
                    e
                );
                UserProfile::unknown(user_id)
            }
        }
    }
}
