//! In-memory state owned by the bot for the lifetime of a session.
//!
//! Each store owns exactly one lookup table and exposes the operations that read
//! and mutate it. None of them persist anything; a restart starts from the
//! guild snapshots Discord sends on connect. The stores are plain synchronous
//! structs. Serializing access to them is the job of [`crate::state::StateStore`].

pub mod channel_directory;
pub mod notification_handle;
pub mod presence;
pub mod voice;
