use std::collections::HashMap;

use serenity::all::{GuildId, UserId};

use crate::model::transition::PresenceTransition;

/// Tracks the activity each user is currently reported as doing, per guild.
///
/// An empty string means idle. Only the latest value per guild member is kept.
/// Discord sends a presence update for every guild a user shares with the bot,
/// so each guild classifies its own transitions.
#[derive(Debug, Default)]
pub struct PresenceTracker {
    presences: HashMap<(GuildId, UserId), String>,
}

impl PresenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes a user's current activity and classifies the change.
    ///
    /// The stored activity is only replaced when something actually changed, so
    /// repeated identical reports (e.g. a user toggling online/idle) are no-ops.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the presence update came from
    /// - `user_id` - User the presence update is about
    /// - `activity` - Name of the first reported activity, empty when idle
    ///
    /// # Returns
    /// - `PresenceTransition::NoChange` - Same activity as before, nothing stored
    /// - `PresenceTransition::Started` - Idle before, active now
    /// - `PresenceTransition::Stopped` - Active before, idle now
    /// - `PresenceTransition::Switched` - Active before with a different activity
    pub fn observe(
        &mut self,
        guild_id: GuildId,
        user_id: UserId,
        activity: &str,
    ) -> PresenceTransition {
        let previous = self.activity(guild_id, user_id);

        let transition = match (previous.is_empty(), activity.is_empty()) {
            _ if previous == activity => PresenceTransition::NoChange,
            (true, false) => PresenceTransition::Started {
                activity: activity.to_string(),
            },
            (false, true) => PresenceTransition::Stopped {
                activity: previous.to_string(),
            },
            _ => PresenceTransition::Switched {
                previous: previous.to_string(),
                activity: activity.to_string(),
            },
        };

        if transition != PresenceTransition::NoChange {
            self.presences
                .insert((guild_id, user_id), activity.to_string());
        }

        transition
    }

    /// Records a user's activity without classifying it.
    ///
    /// Used for the presence snapshot a guild delivers on connect.
    pub fn seed(&mut self, guild_id: GuildId, user_id: UserId, activity: &str) {
        self.presences
            .insert((guild_id, user_id), activity.to_string());
    }

    /// Current activity of a user, empty when idle or never seen.
    pub fn activity(&self, guild_id: GuildId, user_id: UserId) -> &str {
        self.presences
            .get(&(guild_id, user_id))
            .map(String::as_str)
            .unwrap_or("")
    }
}
