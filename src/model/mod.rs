//! Domain models shared by the trackers, services and event handlers.
//!
//! These types are deliberately independent of serenity's gateway models so that
//! the transition rules and the notification logic can be exercised with plain
//! values. Handlers convert serenity events into these types at the boundary.

pub mod completion;
pub mod message;
pub mod notification;
pub mod profile;
pub mod transition;
pub mod voice;
