use std::time::Duration;

use crate::{
    config::Config,
    error::AppError,
    model::completion::CompletionRequest,
    service::completion::{CompletionClient, OpenAiCompletionClient},
};

/// Prompt sent once on startup to check the completion service.
pub const PROBE_PROMPT: &str = "Are you ready to play?";

/// Upper bound for a single completion request.
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(60);

/// Installs the global tracing subscriber.
///
/// Respects `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Builds the HTTP client used for the completion service.
///
/// Redirects are not followed so the bearer token is never sent to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(COMPLETION_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Creates the completion client from configuration.
pub fn setup_completion_client(config: &Config, http: reqwest::Client) -> OpenAiCompletionClient {
    OpenAiCompletionClient::new(
        http,
        config.completion_api_url.clone(),
        config.openai_api_token.clone(),
    )
}

/// Sends a single test prompt to the completion service.
///
/// A failure is only logged; the bot still starts and reacts with a failure
/// reaction to prompts until the service recovers.
///
/// # Arguments
/// - `client` - Completion client to probe
/// - `model` - Model to request
///
/// # Returns
/// - `true` - The service answered
/// - `false` - The service failed
pub async fn probe_completion(client: &dyn CompletionClient, model: &str) -> bool {
    match client
        .complete(&CompletionRequest::new(model, PROBE_PROMPT))
        .await
    {
        Ok(completion) => {
            tracing::info!(
                "Completion service is reachable ({} tokens): {}",
                completion.total_tokens,
                completion.text.trim()
            );
            true
        }
        Err(e) => {
            tracing::warn!("Completion service probe failed: {}", e);
            false
        }
    }
}
