//! Business logic between the gateway event handlers and the outside world.
//!
//! - `discord` - The outbound Discord operations the bot depends on
//! - `notification` - Presence/voice notification engine (edit vs. post)
//! - `completion` - Completion service client and the message relay

pub mod completion;
pub mod discord;
pub mod notification;
