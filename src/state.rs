use std::{sync::Arc, time::Duration};

use serenity::all::UserId;
use tokio::sync::{Mutex, RwLock};

use crate::{
    data::{
        channel_directory::{ChannelDirectory, ChannelLabels},
        notification_handle::NotificationHandles,
        presence::PresenceTracker,
        voice::VoiceTracker,
    },
    model::message::CurrentUserInfo,
    service::{
        completion::CompletionClient, discord::DiscordApi, notification::title::TitlePicker,
    },
};

/// Everything the notification engine mutates.
///
/// Kept behind a single mutex so that observing a transition and deciding
/// between edit and post happen as one step per event.
#[derive(Debug)]
pub struct StateStore {
    pub presence: PresenceTracker,
    pub voice: VoiceTracker,
    pub directory: ChannelDirectory,
    pub handles: NotificationHandles,
    pub titles: TitlePicker,
}

impl StateStore {
    /// Creates an empty store.
    ///
    /// # Arguments
    /// - `labels` - Channel names that designate the notice channels
    /// - `ttl` - Age after which a notification handle is no longer edited, `None` to keep forever
    /// - `titles` - Random source for notification titles
    ///
    /// # Returns
    /// - `StateStore` - Store with no guilds, users or handles
    pub fn new(labels: ChannelLabels, ttl: Option<Duration>, titles: TitlePicker) -> Self {
        Self {
            presence: PresenceTracker::new(),
            voice: VoiceTracker::new(),
            directory: ChannelDirectory::new(labels),
            handles: NotificationHandles::new(ttl),
            titles,
        }
    }
}

/// Shared state handed to every event callback.
#[derive(Clone)]
pub struct BotState {
    /// Outbound Discord calls
    pub discord: Arc<dyn DiscordApi>,
    /// Text-completion backend used by the relay
    pub completion: Arc<dyn CompletionClient>,
    /// Model requested from the completion backend
    pub completion_model: String,
    /// Trackers, directory, handles and title source
    pub store: Arc<Mutex<StateStore>>,
    /// The bot's own identity, known once the ready event arrived
    pub current_user: Arc<RwLock<Option<CurrentUserInfo>>>,
}

impl BotState {
    pub fn new(
        discord: Arc<dyn DiscordApi>,
        completion: Arc<dyn CompletionClient>,
        completion_model: String,
        store: StateStore,
    ) -> Self {
        Self {
            discord,
            completion,
            completion_model,
            store: Arc::new(Mutex::new(store)),
            current_user: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn set_current_user(&self, user: CurrentUserInfo) {
        *self.current_user.write().await = Some(user);
    }

    pub async fn current_user(&self) -> Option<CurrentUserInfo> {
        self.current_user.read().await.clone()
    }

    /// Whether `user_id` is the bot itself; `false` before the ready event.
    pub async fn is_current_user(&self, user_id: UserId) -> bool {
        self.current_user
            .read()
            .await
            .as_ref()
            .is_some_and(|user| user.id == user_id)
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use crate::service::{completion::mock::MockCompletionClient, discord::mock::MockDiscordApi};

    pub const VOICE_CHANNEL: &str = "hampel";
    pub const GAME_CHANNEL: &str = "naughtyfications";

    /// Store with the default channel labels, no eviction and a fixed title seed.
    pub fn store() -> StateStore {
        StateStore::new(
            ChannelLabels {
                voice: VOICE_CHANNEL.to_string(),
                game: GAME_CHANNEL.to_string(),
            },
            None,
            TitlePicker::seeded(42),
        )
    }

    /// Bot state wired to the given mocks.
    pub fn bot_state(discord: Arc<MockDiscordApi>, completion: Arc<MockCompletionClient>) -> BotState {
        BotState::new(discord, completion, "test-model".to_string(), store())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{test_support, *};
    use crate::service::{completion::mock::MockCompletionClient, discord::mock::MockDiscordApi};

    /// Tests recognizing the bot's own user id.
    ///
    /// Expected: false before ready, true only for the recorded id afterwards
    #[tokio::test]
    async fn recognizes_current_user_after_ready() {
        let state = test_support::bot_state(
            Arc::new(MockDiscordApi::new()),
            Arc::new(MockCompletionClient::new()),
        );

        assert!(!state.is_current_user(UserId::new(1)).await);

        state
            .set_current_user(CurrentUserInfo {
                id: UserId::new(1),
                name: "aybot".to_string(),
            })
            .await;

        assert!(state.is_current_user(UserId::new(1)).await);
        assert!(!state.is_current_user(UserId::new(2)).await);
        assert_eq!(
            state.current_user().await.map(|user| user.name),
            Some("aybot".to_string())
        );
    }
}
