use std::collections::HashMap;
use std::time::{Duration, Instant};

use serenity::all::{GuildId, UserId};

use crate::model::{notification::NotificationHandle, transition::Topic};

type HandleKey = (GuildId, UserId, Topic);

/// Remembers the live notification message of each (guild, user, topic).
///
/// Handles older than the configured TTL are treated as absent and are swept
/// whenever a new handle is stored, so users who go permanently offline do not
/// keep entries forever. Without a TTL handles live until replaced.
#[derive(Debug, Default)]
pub struct NotificationHandles {
    handles: HashMap<HandleKey, NotificationHandle>,
    ttl: Option<Duration>,
}

impl NotificationHandles {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            handles: HashMap::new(),
            ttl,
        }
    }

    /// Live handle for a (guild, user, topic), ignoring expired ones.
    pub fn get(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        topic: Topic,
    ) -> Option<NotificationHandle> {
        self.handles
            .get(&(guild_id, user_id, topic))
            .filter(|handle| !self.is_expired(handle, Instant::now()))
            .copied()
    }

    /// Stores `handle` as the live notification, replacing any previous one.
    ///
    /// Expired handles of all users are removed at the same time.
    pub fn insert(
        &mut self,
        guild_id: GuildId,
        user_id: UserId,
        topic: Topic,
        handle: NotificationHandle,
    ) {
        self.sweep();
        self.handles.insert((guild_id, user_id, topic), handle);
    }

    /// Forgets the live notification of a (guild, user, topic).
    pub fn remove(&mut self, guild_id: GuildId, user_id: UserId, topic: Topic) {
        self.handles.remove(&(guild_id, user_id, topic));
    }

    /// Number of stored handles, including expired ones not yet swept.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    fn sweep(&mut self) {
        let Some(ttl) = self.ttl else {
            return;
        };
        let now = Instant::now();
        self.handles
            .retain(|_, handle| now.duration_since(handle.posted_at) < ttl);
    }

    fn is_expired(&self, handle: &NotificationHandle, now: Instant) -> bool {
        match self.ttl {
            Some(ttl) => now.duration_since(handle.posted_at) >= ttl,
            None => false,
        }
    }
}
