//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

use super::user::test_user_json;

/// Creates a test guild message.
///
/// Authors and mentioned users are named `user<id>`.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `author_id` - Author of the message
/// - `content` - Message text
/// - `mentions` - Users mentioned through Discord's mention list
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    content: &str,
    mentions: &[u64],
) -> Message {
    let mentions: Vec<_> = mentions
        .iter()
        .map(|id| test_user_json(*id, &format!("user{}", id)))
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": "1",
        "author": test_user_json(author_id, &format!("user{}", author_id)),
        "content": content,
        "timestamp": "2020-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": mentions,
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
