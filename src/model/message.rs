use serenity::all::{ChannelId, Message, MessageId, User, UserId};

/// The parts of a chat message the completion relay and shrug reactor look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub author_id: UserId,
    pub content: String,
    /// Users mentioned through Discord's structured mention list
    pub mentions: Vec<UserId>,
}

impl From<&Message> for InboundMessage {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            channel_id: message.channel_id,
            author_id: message.author.id,
            content: message.content.clone(),
            mentions: message.mentions.iter().map(|user| user.id).collect(),
        }
    }
}

/// Identity of the bot, learned from the ready event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUserInfo {
    pub id: UserId,
    pub name: String,
}

impl From<&User> for CurrentUserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}
