//! Notification rendering and embed building.
//!
//! Rendering turns a classified transition into a [`NotificationEmbed`]; building
//! turns that into serenity's `CreateEmbed` right before it is sent. Keeping the
//! two apart lets tests inspect exactly what would be posted.

use serenity::all::{CreateEmbed, CreateEmbedAuthor, Timestamp};

use crate::{
    error::{internal::InternalError, AppError},
    model::{
        notification::{NotificationEmbed, COLOR_NEGATIVE, COLOR_POSITIVE},
        profile::UserProfile,
        transition::{NotificationKind, PresenceTransition, VoiceTransition},
        voice::VoiceRecord,
    },
    service::notification::title::TitlePicker,
};

pub const VOICE_TITLES_JOINING: &[&str] = &[
    "Let's talk!",
    "Did you know?",
    "Who needs TeamSpeak?",
    "Someone.. talk to him!",
];
pub const VOICE_TITLES_LEAVING: &[&str] = &["Bye, bye!", "Uhm... gone already?"];
pub const GAME_TITLES_STARTING: &[&str] = &["Game on!", "Let's play!", "Who's joining?"];
pub const GAME_TITLES_STOPPING: &[&str] = &["Game over!", "GG!"];

/// Channel name used when the channel was never seen.
pub const UNKNOWN_CHANNEL_NAME: &str = "unknown";

/// Renders a game notice for a presence transition.
///
/// # Arguments
/// - `profile` - Display name and avatar of the user
/// - `transition` - Classified presence change
/// - `titles` - Random source for the author line
///
/// # Returns
/// - `Some(NotificationEmbed)` - Rendered notice
/// - `None` - The transition is `NoChange`
pub fn render_presence(
    profile: &UserProfile,
    transition: &PresenceTransition,
    titles: &mut TitlePicker,
) -> Option<NotificationEmbed> {
    let kind = transition.kind()?;
    let (verb, activity) = match transition {
        PresenceTransition::NoChange => return None,
        PresenceTransition::Started { activity } => ("started playing", activity),
        PresenceTransition::Switched { activity, .. } => ("is now playing", activity),
        PresenceTransition::Stopped { activity } => ("stopped playing", activity),
    };

    let pool = if kind.is_positive() {
        GAME_TITLES_STARTING
    } else {
        GAME_TITLES_STOPPING
    };

    Some(NotificationEmbed {
        title: titles.pick(pool).to_string(),
        description: format!("**{}** {} **{}**.", profile.display_name, verb, activity),
        color: color_for(kind),
        icon_url: profile.avatar_url.clone(),
    })
}

/// Renders a voice notice for a voice transition.
///
/// Users who are still connected get a suffix describing their mute state,
/// deafness taking precedence over muting.
///
/// # Arguments
/// - `profile` - Display name and avatar of the user
/// - `transition` - Classified voice change
/// - `channel_name` - Name of the channel joined, moved to, or left
/// - `titles` - Random source for the author line
///
/// # Returns
/// - `Some(NotificationEmbed)` - Rendered notice
/// - `None` - The transition is `NoChange`
pub fn render_voice(
    profile: &UserProfile,
    transition: &VoiceTransition,
    channel_name: &str,
    titles: &mut TitlePicker,
) -> Option<NotificationEmbed> {
    let kind = transition.kind()?;
    let (verb, current): (&str, Option<&VoiceRecord>) = match transition {
        VoiceTransition::NoChange => return None,
        VoiceTransition::Joined { current }
        | VoiceTransition::SettingsChanged { current, .. } => ("joined", Some(current)),
        VoiceTransition::ChannelSwitched { current, .. } => ("moved to", Some(current)),
        VoiceTransition::Left { .. } => ("left", None),
    };

    let suffix = match current {
        Some(record) if record.self_deaf => " and is *deaf*.",
        Some(record) if record.self_mute => " and is *muted*.",
        _ => ".",
    };

    let pool = if kind.is_positive() {
        VOICE_TITLES_JOINING
    } else {
        VOICE_TITLES_LEAVING
    };

    Some(NotificationEmbed {
        title: titles.pick(pool).to_string(),
        description: format!(
            "**{}** {} voice channel **#{}**{}",
            profile.display_name, verb, channel_name, suffix
        ),
        color: color_for(kind),
        icon_url: profile.avatar_url.clone(),
    })
}

fn color_for(kind: NotificationKind) -> u32 {
    if kind.is_positive() {
        COLOR_POSITIVE
    } else {
        COLOR_NEGATIVE
    }
}

/// Builds the Discord embed for a rendered notice.
///
/// The title and avatar go into the author line, and the embed is stamped with
/// the current time.
///
/// # Returns
/// - `Ok(CreateEmbed)` - Discord embed ready for posting or editing
/// - `Err(AppError::InternalErr)` - Current time is not a valid Discord timestamp
pub fn build_embed(notice: &NotificationEmbed) -> Result<CreateEmbed, AppError> {
    let now = chrono::Utc::now();
    let timestamp = Timestamp::from_unix_timestamp(now.timestamp()).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: now.timestamp(),
            reason: e.to_string(),
        }
    })?;

    let mut author = CreateEmbedAuthor::new(&notice.title);
    if let Some(icon_url) = &notice.icon_url {
        author = author.icon_url(icon_url);
    }

    Ok(CreateEmbed::new()
        .author(author)
        .description(&notice.description)
        .color(notice.color)
        .timestamp(timestamp))
}
