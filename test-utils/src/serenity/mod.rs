//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, GuildChannel, Presence, VoiceState, Message, User) for testing
//! purposes. These factories create valid Serenity objects by deserializing
//! JSON, simulating what Discord's gateway would deliver.
//!
//! Objects that are usually nested inside others (channels, voice states and
//! presences inside a guild snapshot) also have a `*_json` variant returning the
//! raw payload, so they can be composed into a guild.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `guild::create_test_guild_with` - Guild snapshot with channels, voice states and presences
//! - `channel::create_test_text_channel` / `create_test_voice_channel` - Guild channels
//! - `presence::create_test_presence` - Presence updates
//! - `voice_state::create_test_voice_state` - Voice state updates
//! - `message::create_test_message` - Guild messages
//! - `user::create_test_user` - Users

pub mod channel;
pub mod guild;
pub mod message;
pub mod presence;
pub mod user;
pub mod voice_state;

// Re-export commonly used functions for convenience
pub use channel::{create_test_text_channel, create_test_voice_channel};
pub use guild::{create_test_guild, create_test_guild_with};
pub use message::create_test_message;
pub use presence::create_test_presence;
pub use user::create_test_user;
pub use voice_state::create_test_voice_state;
