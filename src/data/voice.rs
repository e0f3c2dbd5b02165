use std::collections::HashMap;

use serenity::all::{GuildId, UserId};

use crate::model::{transition::VoiceTransition, voice::VoiceRecord};

/// Tracks the voice channel and mute/deaf flags of each connected user, per guild.
///
/// A user without an entry is not in any voice channel of that guild.
#[derive(Debug, Default)]
pub struct VoiceTracker {
    states: HashMap<(GuildId, UserId), VoiceRecord>,
}

impl VoiceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes a user's current voice state and classifies the change.
    ///
    /// The stored record is always replaced with `current`, even when nothing
    /// notable changed, since flags can change without a visible transition.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the voice state update came from
    /// - `user_id` - User the voice state update is about
    /// - `current` - Channel and flags reported by the update
    ///
    /// # Returns
    /// - `VoiceTransition::Joined` - Not connected before, connected now
    /// - `VoiceTransition::Left` - Connected before, disconnected now
    /// - `VoiceTransition::ChannelSwitched` - Connected to a different channel
    /// - `VoiceTransition::SettingsChanged` - Same channel, different mute/deaf flags
    /// - `VoiceTransition::NoChange` - Anything else
    pub fn observe(
        &mut self,
        guild_id: GuildId,
        user_id: UserId,
        current: VoiceRecord,
    ) -> VoiceTransition {
        let previous = self.record(guild_id, user_id);

        let transition = match (previous.channel_id, current.channel_id) {
            (None, Some(_)) => VoiceTransition::Joined { current },
            (Some(_), None) => VoiceTransition::Left { previous },
            (Some(old), Some(new)) if old != new => {
                VoiceTransition::ChannelSwitched { previous, current }
            }
            (Some(_), Some(_)) if previous.settings_differ(&current) => {
                VoiceTransition::SettingsChanged { previous, current }
            }
            _ => VoiceTransition::NoChange,
        };

        self.store((guild_id, user_id), current);

        transition
    }

    /// Records a user's voice state without classifying it.
    ///
    /// Used for the voice state snapshot a guild delivers on connect.
    pub fn seed(&mut self, guild_id: GuildId, user_id: UserId, record: VoiceRecord) {
        self.store((guild_id, user_id), record);
    }

    /// Last known record of a user, disconnected when never seen.
    pub fn record(&self, guild_id: GuildId, user_id: UserId) -> VoiceRecord {
        self.states
            .get(&(guild_id, user_id)).copied().unwrap_or_default()
    }

    fn store(&mut self, key: (GuildId, UserId), record: VoiceRecord) {
        if record.is_connected() {
            self.states.insert(key, record);
        } else {
            self.states.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use serenity::all::ChannelId;

    use super::*;
    use crate::model::transition::NotificationKind;

    fn guild() -> GuildId {
        GuildId::new(1)
    }

    fn user() -> UserId {
        UserId::new(42)
    }

    fn in_channel(channel: u64, self_mute: bool, self_deaf: bool) -> VoiceRecord {
        VoiceRecord::new(Some(ChannelId::new(channel)), self_mute, self_deaf)
    }

    fn disconnected() -> VoiceRecord {
        VoiceRecord::default()
    }

    /// Tests that connecting from no channel is a join.
    ///
    /// Expected: Joined with the new record stored
    #[test]
    fn joining_from_no_channel_is_joined() {
        let mut tracker = VoiceTracker::new();

        let transition = tracker.observe(guild(), user(), in_channel(1, false, false));

        assert_eq!(
            transition,
            VoiceTransition::Joined {
                current: in_channel(1, false, false)
            }
        );
        assert_eq!(tracker.record(guild(), user()), in_channel(1, false, false));
    }

    /// Tests that disconnecting is a leave carrying the old channel.
    ///
    /// Expected: Left with the previous record and no stored entry
    #[test]
    fn leaving_to_no_channel_is_left() {
        let mut tracker = VoiceTracker::new();
        tracker.observe(guild(), user(), in_channel(1, true, false));

        let transition = tracker.observe(guild(), user(), disconnected());

        assert_eq!(
            transition,
            VoiceTransition::Left {
                previous: in_channel(1, true, false)
            }
        );
        assert!(!tracker.record(guild(), user()).is_connected());
        assert!(tracker.states.is_empty());
    }

    /// Tests that flag-only changes in the same channel are settings changes.
    ///
    /// Expected: SettingsChanged for mute and for deaf toggles
    #[test]
    fn flag_change_is_settings_changed() {
        let mut tracker = VoiceTracker::new();
        tracker.observe(guild(), user(), in_channel(1, false, false));

        assert_eq!(
            tracker.observe(guild(), user(), in_channel(1, true, false)).kind(),
            Some(NotificationKind::SettingsChanged)
        );
        assert_eq!(
            tracker.observe(guild(), user(), in_channel(1, true, true)).kind(),
            Some(NotificationKind::SettingsChanged)
        );
        assert_eq!(tracker.record(guild(), user()), in_channel(1, true, true));
    }

    /// Tests that moving between channels is a channel switch, even with new flags.
    ///
    /// Expected: ChannelSwitched
    #[test]
    fn moving_channels_is_channel_switched() {
        let mut tracker = VoiceTracker::new();
        tracker.observe(guild(), user(), in_channel(1, false, false));

        let transition = tracker.observe(guild(), user(), in_channel(2, true, false));

        assert_eq!(
            transition,
            VoiceTransition::ChannelSwitched {
                previous: in_channel(1, false, false),
                current: in_channel(2, true, false)
            }
        );
    }

    /// Tests that identical observations are no-ops.
    ///
    /// Expected: NoChange for a repeat and for a disconnected unseen user
    #[test]
    fn repeated_value_is_no_change() {
        let mut tracker = VoiceTracker::new();

        assert_eq!(
            tracker.observe(guild(), user(), disconnected()),
            VoiceTransition::NoChange
        );

        tracker.observe(guild(), user(), in_channel(1, false, true));
        assert_eq!(
            tracker.observe(guild(), user(), in_channel(1, false, true)),
            VoiceTransition::NoChange
        );
    }

    /// Tests that seeded state is the baseline for later observations.
    ///
    /// Expected: a seeded user unmuting is a settings change, not a join
    #[test]
    fn seeded_state_is_previous_value() {
        let mut tracker = VoiceTracker::new();
        tracker.seed(guild(), user(), in_channel(3, true, false));

        assert_eq!(
            tracker.observe(guild(), user(), in_channel(3, false, false)).kind(),
            Some(NotificationKind::SettingsChanged)
        );
    }

    /// Tests that the same user is tracked separately in each guild.
    ///
    /// Expected: connecting in a second guild is a join there
    #[test]
    fn tracks_guilds_independently() {
        let mut tracker = VoiceTracker::new();
        tracker.observe(GuildId::new(1), user(), in_channel(1, false, false));

        assert_eq!(
            tracker
                .observe(GuildId::new(2), user(), in_channel(5, false, false))
                .kind(),
            Some(NotificationKind::Joined)
        );
        assert!(tracker.record(GuildId::new(1), user()).is_connected());
    }
}
