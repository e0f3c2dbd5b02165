//! Outbound Discord operations.
//!
//! The notification engine and the completion relay only ever need a handful of
//! REST calls. They are collected in the [`DiscordApi`] trait so services can be
//! exercised against a recording mock, while production uses serenity's `Http`
//! client directly.

#[cfg(test)]
pub mod mock;

use serenity::{
    all::{ChannelId, CreateMessage, EditMessage, GuildId, MessageId, ReactionType, UserId},
    async_trait,
    http::Http,
};

use crate::{
    error::AppError,
    model::{notification::NotificationEmbed, profile::UserProfile},
    service::notification::builder::build_embed,
};

/// Discord operations used by the bot's services.
///
/// Every failure is reported as an opaque `AppError`; callers log and move on.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Posts a new message containing `embed` and returns its id.
    async fn send_embed(
        &self,
        channel_id: ChannelId,
        embed: &NotificationEmbed,
    ) -> Result<MessageId, AppError>;

    /// Replaces the embed of an existing message.
    async fn edit_embed(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        embed: &NotificationEmbed,
    ) -> Result<(), AppError>;

    /// Posts a plain text message.
    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError>;

    /// Adds a unicode emoji reaction to a message.
    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &str,
    ) -> Result<(), AppError>;

    /// Fetches the display name and avatar of a guild member.
    async fn member_profile(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<UserProfile, AppError>;
}

#[async_trait]
impl DiscordApi for Http {
    async fn send_embed(
        &self,
        channel_id: ChannelId,
        embed: &NotificationEmbed,
    ) -> Result<MessageId, AppError> {
        let builder = CreateMessage::new().embed(build_embed(embed)?);
        let message = Http::send_message(self, channel_id, vec![], &builder).await?;

        Ok(message.id)
    }

    async fn edit_embed(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        embed: &NotificationEmbed,
    ) -> Result<(), AppError> {
        let builder = EditMessage::new().embed(build_embed(embed)?);
        self.edit_message(channel_id, message_id, &builder, vec![])
            .await?;

        Ok(())
    }

    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError> {
        let builder = CreateMessage::new().content(content);
        Http::send_message(self, channel_id, vec![], &builder).await?;

        Ok(())
    }

    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &str,
    ) -> Result<(), AppError> {
        let reaction = ReactionType::Unicode(emoji.to_string());
        self.create_reaction(channel_id, message_id, &reaction)
            .await?;

        Ok(())
    }

    async fn member_profile(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<UserProfile, AppError> {
        let member = self.get_member(guild_id, user_id).await?;

        Ok(UserProfile::from(&member))
    }
}
