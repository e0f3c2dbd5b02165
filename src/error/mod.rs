//! Error types for startup and event processing.
//!
//! `AppError` is the top-level error type. It wraps the domain-specific errors
//! (configuration, completion service, internal invariants) together with the
//! errors of the external clients the bot talks to. Only startup code propagates
//! it out of `main`; event callbacks log it and carry on.

pub mod completion;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{completion::CompletionError, config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion with `?`. The serenity
/// error is boxed because it is large and would inflate every variant.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    ///
    /// Always fatal: the bot cannot connect without its credentials.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Completion service rejected the request or returned nothing usable.
    #[error(transparent)]
    CompletionErr(#[from] CompletionError),

    /// Unexpected state inside the bot itself.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// HTTP client request error from reqwest.
    ///
    /// Raised when the completion service cannot be reached or its response
    /// body cannot be decoded.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API or gateway error from Serenity.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to keep the size of `AppError` small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
