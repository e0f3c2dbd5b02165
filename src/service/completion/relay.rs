//! Chat relay between Discord and the completion service.
//!
//! Messages that address the bot by mention or by name are stripped of that
//! address and forwarded as a prompt; the reply is posted back into the same
//! channel. Independently, messages containing a shrug get a shrug reaction.

use regex::Regex;

use crate::{
    error::{internal::InternalError, AppError},
    model::{
        completion::CompletionRequest,
        message::{CurrentUserInfo, InboundMessage},
    },
    service::{completion::CompletionClient, discord::DiscordApi},
};

/// Lowercase fragments that trigger a shrug reaction.
pub const SHRUG_TOKENS: &[&str] = &["egal", "shrug", "🤷‍♂️", "¯\\_(ツ)_/¯"];
pub const SHRUG_REACTION: &str = "🤷‍♂️";
/// Reaction added when the completion service fails.
pub const FAILURE_REACTION: &str = "❌";

/// Whether the message text contains any shrug token, ignoring case.
pub fn contains_shrug(content: &str) -> bool {
    let content = content.to_lowercase();
    SHRUG_TOKENS.iter().any(|token| content.contains(token))
}

/// Whether a message from someone else mentions the bot or contains its name.
///
/// # Arguments
/// - `message` - Inbound chat message
/// - `me` - The bot's own identity
///
/// # Returns
/// - `true` - Message should be forwarded to the completion service
/// - `false` - Own message, or the bot is not addressed
pub fn is_addressed(message: &InboundMessage, me: &CurrentUserInfo) -> bool {
    if message.author_id == me.id {
        return false;
    }

    if message.mentions.contains(&me.id) {
        return true;
    }

    !me.name.is_empty()
        && message
            .content
            .to_lowercase()
            .contains(&me.name.to_lowercase())
}

/// Removes every way of addressing the bot from a message and trims the rest.
///
/// Strips `<@id>` and `<@!id>` mention tokens as well as `@name` and bare
/// `name`, the latter two case-insensitively.
///
/// # Returns
/// - `Ok(String)` - Prompt to forward
/// - `Err(AppError::InternalErr)` - The strip pattern could not be built
pub fn strip_prompt(content: &str, me: &CurrentUserInfo) -> Result<String, AppError> {
    let pattern = if me.name.is_empty() {
        format!(r"<@!?{}>", me.id)
    } else {
        format!(r"(?i)<@!?{}>|@?{}", me.id, regex::escape(&me.name))
    };
    let address = Regex::new(&pattern).map_err(InternalError::from)?;

    Ok(address.replace_all(content, "").trim().to_string())
}

/// Relays chat messages to the completion service and reacts to shrugs.
pub struct CompletionRelay<'a> {
    api: &'a dyn DiscordApi,
    completion: &'a dyn CompletionClient,
    /// Model requested for every prompt
    model: &'a str,
}

impl<'a> CompletionRelay<'a> {
    pub fn new(
        api: &'a dyn DiscordApi,
        completion: &'a dyn CompletionClient,
        model: &'a str,
    ) -> Self {
        Self {
            api,
            completion,
            model,
        }
    }

    /// Handles one inbound chat message.
    ///
    /// The shrug check runs first and applies to every message, including the
    /// bot's own. Relaying needs the bot's identity, so before the ready event
    /// messages are only shrug-checked.
    ///
    /// # Arguments
    /// - `message` - Inbound chat message
    /// - `me` - The bot's own identity, `None` before the ready event
    pub async fn handle_message(&self, message: &InboundMessage, me: Option<&CurrentUserInfo>) {
        if contains_shrug(&message.content) {
            self.react(message, SHRUG_REACTION).await;
        }

        let Some(me) = me else {
            return;
        };

        if is_addressed(message, me) {
            self.relay(message, me).await;
        }
    }

    /// Forwards an addressed message and posts the reply.
    ///
    /// A failed completion is answered with a failure reaction on the original
    /// message. Nothing is retried.
    pub async fn relay(&self, message: &InboundMessage, me: &CurrentUserInfo) {
        let prompt = match strip_prompt(&message.content, me) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::error!("Failed to extract prompt from message {}: {}", message.id, e);
                return;
            }
        };

        tracing::debug!("Forwarding prompt from message {}: {:?}", message.id, prompt);
        let request = CompletionRequest::new(self.model, prompt);

        match self.completion.complete(&request).await {
            Ok(completion) => {
                tracing::info!(
                    "Completion for message {} used {} tokens",
                    message.id,
                    completion.total_tokens
                );

                if let Err(e) = self
                    .api
                    .send_message(message.channel_id, &completion.text)
                    .await
                {
                    tracing::error!(
                        "Failed to post completion in channel {}: {}",
                        message.channel_id,
                        e
                    );
                }
            }
            Err(e) => {
                tracing::warn!("Completion for message {} failed: {}", message.id, e);
                self.react(message, FAILURE_REACTION).await;
            }
        }
    }

    async fn react(&self, message: &InboundMessage, emoji: &str) {
        if let Err(e) = self
            .api
            .add_reaction(message.channel_id, message.id, emoji)
            .await
        {
            tracing::error!(
                "Failed to react with {} to message {}: {}",
                emoji,
                message.id,
                e
            );
        }
    }
}
