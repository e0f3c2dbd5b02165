//! Text-completion client and the chat relay built on top of it.
//!
//! - `relay` - Forwards messages addressed to the bot and reacts to shrugs

#[cfg(test)]
pub mod mock;
pub mod relay;

use serenity::async_trait;

use crate::{
    error::{completion::CompletionError, AppError},
    model::completion::{Completion, CompletionRequest, CompletionResponse},
};

/// A service that turns a prompt into generated text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Submits one completion request.
    ///
    /// # Returns
    /// - `Ok(Completion)` - Text of the first choice and the total token usage
    /// - `Err(AppError::CompletionErr)` - Rejected request, malformed or empty response
    /// - `Err(AppError::ReqwestErr)` - Service unreachable
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AppError>;
}

/// Client for an OpenAI-compatible `/completions` endpoint.
pub struct OpenAiCompletionClient {
    http: reqwest::Client,
    /// Base URL without trailing slash, e.g. `https://api.openai.com/v1`
    base_url: String,
    api_key: String,
}

impl OpenAiCompletionClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// - `http` - Shared reqwest client
    /// - `base_url` - API base URL, the `/completions` path is appended
    /// - `api_key` - Bearer token sent with every request
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AppError> {
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(parse_completion(&body)?)
    }
}

/// Extracts the first choice and the token usage from a response body.
///
/// A response without usage reports zero tokens.
///
/// # Returns
/// - `Ok(Completion)` - First choice's text
/// - `Err(CompletionError::MalformedResponse)` - Body is not a completion object
/// - `Err(CompletionError::EmptyResponse)` - No choices
pub fn parse_completion(body: &str) -> Result<Completion, CompletionError> {
    let response: CompletionResponse = serde_json::from_str(body)?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(CompletionError::EmptyResponse)?;

    Ok(Completion {
        text: choice.text,
        total_tokens: response.usage.map(|usage| usage.total_tokens).unwrap_or(0),
    })
}
