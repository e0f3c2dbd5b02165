//! Discord gateway integration.
//!
//! This module connects the bot to Discord's gateway and routes the events it
//! cares about into the notification service and the completion relay. The
//! handlers themselves stay thin: they pull the relevant fields out of the
//! serenity models, lock the shared state and hand over to a service.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild snapshots with channels and voice states on connect
//! - `GUILD_PRESENCES` - Activity changes of members (privileged intent)
//! - `GUILD_VOICE_STATES` - Voice channel joins, leaves and mute/deaf toggles
//! - `GUILD_MESSAGES` - Messages in guild channels
//! - `MESSAGE_CONTENT` - Text of those messages (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod handler;
pub mod start;
