//! Classified state changes produced by the presence and voice trackers.

use serenity::all::ChannelId;

use crate::model::voice::VoiceRecord;

/// Kind of notification a user can have one live message for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Voice channel joins, leaves and mute/deaf changes
    Voice,
    /// Game (activity) starts, stops and switches
    Game,
}

/// Outcome of observing a user's current activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceTransition {
    NoChange,
    /// Idle to active
    Started { activity: String },
    /// Active to idle, carrying the activity that ended
    Stopped { activity: String },
    /// Active to a different activity
    Switched { previous: String, activity: String },
}

impl PresenceTransition {
    pub fn kind(&self) -> Option<NotificationKind> {
        match self {
            Self::NoChange => None,
            Self::Started { .. } => Some(NotificationKind::Started),
            Self::Stopped { .. } => Some(NotificationKind::Stopped),
            Self::Switched { .. } => Some(NotificationKind::Switched),
        }
    }
}

/// Outcome of observing a user's current voice state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceTransition {
    NoChange,
    Joined {
        current: VoiceRecord,
    },
    /// Carries the record the user had before leaving so the notice can name the channel.
    Left {
        previous: VoiceRecord,
    },
    SettingsChanged {
        previous: VoiceRecord,
        current: VoiceRecord,
    },
    ChannelSwitched {
        previous: VoiceRecord,
        current: VoiceRecord,
    },
}

impl VoiceTransition {
    pub fn kind(&self) -> Option<NotificationKind> {
        match self {
            Self::NoChange => None,
            Self::Joined { .. } => Some(NotificationKind::Joined),
            Self::Left { .. } => Some(NotificationKind::Left),
            Self::SettingsChanged { .. } => Some(NotificationKind::SettingsChanged),
            Self::ChannelSwitched { .. } => Some(NotificationKind::ChannelSwitched),
        }
    }

    /// The voice channel the notice should name.
    ///
    /// For a leave this is the channel the user left, otherwise the one they are in.
    pub fn channel_id(&self) -> Option<ChannelId> {
        match self {
            Self::NoChange => None,
            Self::Left { previous } => previous.channel_id,
            Self::Joined { current }
            | Self::SettingsChanged { current, .. }
            | Self::ChannelSwitched { current, .. } => current.channel_id,
        }
    }
}

/// Transition kinds that produce a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Started,
    Stopped,
    Switched,
    Joined,
    Left,
    SettingsChanged,
    ChannelSwitched,
}

impl NotificationKind {
    /// Departures always get a fresh message.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped | Self::Left)
    }

    /// Continuations edit the user's live message when one exists.
    pub fn is_continuation(&self) -> bool {
        matches!(
            self,
            Self::Switched | Self::SettingsChanged | Self::ChannelSwitched
        )
    }

    /// Whether the notice is rendered as an arrival (green) rather than a departure (red).
    pub fn is_positive(&self) -> bool {
        !self.is_terminal()
    }

    /// Whether the kind may post a new message when the user has no live message.
    ///
    /// A flag-only change never creates a post on its own.
    pub fn posts_without_handle(&self) -> bool {
        !matches!(self, Self::SettingsChanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the classification helpers of every notification kind.
    ///
    /// Expected: only Stopped/Left are terminal, only the three continuation kinds edit
    #[test]
    fn classifies_notification_kinds() {
        use NotificationKind::*;

        for kind in [Started, Joined] {
            assert!(!kind.is_terminal());
            assert!(!kind.is_continuation());
            assert!(kind.is_positive());
        }
        for kind in [Stopped, Left] {
            assert!(kind.is_terminal());
            assert!(!kind.is_continuation());
            assert!(!kind.is_positive());
        }
        for kind in [Switched, SettingsChanged, ChannelSwitched] {
            assert!(kind.is_continuation());
            assert!(kind.is_positive());
        }
        assert!(!SettingsChanged.posts_without_handle());
        assert!(ChannelSwitched.posts_without_handle());
    }

    /// Tests that a leave names the channel that was left.
    ///
    /// Expected: channel of the previous record
    #[test]
    fn left_names_previous_channel() {
        let previous = VoiceRecord::new(Some(ChannelId::new(7)), false, false);
        let transition = VoiceTransition::Left { previous };

        assert_eq!(transition.channel_id(), Some(ChannelId::new(7)));
        assert_eq!(transition.kind(), Some(NotificationKind::Left));
        assert_eq!(VoiceTransition::NoChange.kind(), None);
    }
}
