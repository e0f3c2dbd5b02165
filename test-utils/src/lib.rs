//! aybot Test Utils
//!
//! Provides shared testing utilities for the aybot crate. The bot keeps no
//! database, so the utilities are limited to factories for the serenity models
//! delivered by Discord's gateway: guild snapshots, channels, presences, voice
//! states, messages and users.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{
//!     channel::test_text_channel_json, guild::create_test_guild_with,
//!     voice_state::test_voice_state_json,
//! };
//!
//! #[tokio::test]
//! async fn test_guild_registration() {
//!     let guild = create_test_guild_with(
//!         1,
//!         "Test Guild",
//!         vec![test_text_channel_json(20, 1, "naughtyfications")],
//!         vec![test_voice_state_json(None, 7, Some(21), false, false)],
//!         vec![],
//!     );
//!
//!     // Use in your tests...
//! }
//! ```

pub mod serenity;
