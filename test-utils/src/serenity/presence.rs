//! Test factory for creating Serenity Presence objects.

use serde_json::Value;
use serenity::all::Presence;

/// Raw presence payload with one "playing" activity per name.
///
/// # Arguments
/// - `guild_id` - Guild of the update, `None` as inside a guild snapshot
/// - `user_id` - User the presence belongs to
/// - `activities` - Activity names in reported order, empty when idle
pub fn test_presence_json(guild_id: Option<u64>, user_id: u64, activities: &[&str]) -> Value {
    let activities: Vec<Value> = activities
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "type": 0,
                "created_at": 1_600_000_000_000u64,
            })
        })
        .collect();

    serde_json::json!({
        "user": { "id": user_id.to_string() },
        "guild_id": guild_id.map(|id| id.to_string()),
        "status": "online",
        "activities": activities,
        "client_status": { "desktop": "online" },
    })
}

/// Creates a test presence update.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Presence (indicates invalid test data)
pub fn create_test_presence(guild_id: Option<u64>, user_id: u64, activities: &[&str]) -> Presence {
    serde_json::from_value(test_presence_json(guild_id, user_id, activities))
        .expect("Failed to create test presence - invalid JSON structure")
}
