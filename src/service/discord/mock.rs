//! Recording stand-in for [`DiscordApi`] used by service and handler tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use serenity::{
    all::{ChannelId, GuildId, MessageId, UserId},
    async_trait,
};

use super::DiscordApi;
use crate::{
    error::AppError,
    model::{notification::NotificationEmbed, profile::UserProfile},
};

/// One outbound call observed by the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    SendEmbed {
        channel_id: ChannelId,
        embed: NotificationEmbed,
    },
    EditEmbed {
        channel_id: ChannelId,
        message_id: MessageId,
        embed: NotificationEmbed,
    },
    SendMessage {
        channel_id: ChannelId,
        content: String,
    },
    AddReaction {
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: String,
    },
    MemberProfile {
        guild_id: GuildId,
        user_id: UserId,
    },
}

/// Records every call and hands out increasing message ids starting at 1000.
///
/// Individual operations can be switched to fail to exercise error paths.
pub struct MockDiscordApi {
    calls: Mutex<Vec<ApiCall>>,
    profiles: Mutex<HashMap<UserId, UserProfile>>,
    next_message_id: AtomicU64,
    pub fail_sends: AtomicBool,
    pub fail_edits: AtomicBool,
    pub fail_reactions: AtomicBool,
}

impl MockDiscordApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            profiles: Mutex::new(HashMap::new()),
            next_message_id: AtomicU64::new(1000),
            fail_sends: AtomicBool::new(false),
            fail_edits: AtomicBool::new(false),
            fail_reactions: AtomicBool::new(false),
        }
    }

    /// Registers the profile returned for `user_id`; unknown users fail the lookup.
    pub fn with_profile(self, user_id: UserId, display_name: &str, avatar_url: &str) -> Self {
        self.profiles.lock().unwrap().insert(
            user_id,
            UserProfile {
                display_name: display_name.to_string(),
                avatar_url: Some(avatar_url.to_string()),
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than member lookups, i.e. the ones visible in Discord.
    pub fn visible_calls(&self) -> Vec<ApiCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, ApiCall::MemberProfile { .. }))
            .collect()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn failure() -> AppError {
        serenity::Error::Other("Unknown Message").into()
    }
}

#[async_trait]
impl DiscordApi for MockDiscordApi {
    async fn send_embed(
        &self,
        channel_id: ChannelId,
        embed: &NotificationEmbed,
    ) -> Result<MessageId, AppError> {
        self.record(ApiCall::SendEmbed {
            channel_id,
            embed: embed.clone(),
        });
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(Self::failure());
        }
        Ok(MessageId::new(
            self.next_message_id.fetch_add(1, Ordering::SeqCst),
        ))
    }

    async fn edit_embed(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        embed: &NotificationEmbed,
    ) -> Result<(), AppError> {
        self.record(ApiCall::EditEmbed {
            channel_id,
            message_id,
            embed: embed.clone(),
        });
        if self.fail_edits.load(Ordering::SeqCst) {
            return Err(Self::failure());
        }
        Ok(())
    }

    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError> {
        self.record(ApiCall::SendMessage {
            channel_id,
            content: content.to_string(),
        });
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(Self::failure());
        }
        Ok(())
    }

    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &str,
    ) -> Result<(), AppError> {
        self.record(ApiCall::AddReaction {
            channel_id,
            message_id,
            emoji: emoji.to_string(),
        });
        if self.fail_reactions.load(Ordering::SeqCst) {
            return Err(Self::failure());
        }
        Ok(())
    }

    async fn member_profile(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<UserProfile, AppError> {
        self.record(ApiCall::MemberProfile { guild_id, user_id });
        self.profiles
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .ok_or_else(Self::failure)
    }
}
