use serde::{Deserialize, Serialize};

/// Request body for an OpenAI-compatible `/completions` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub best_of: u32,
}

impl CompletionRequest {
    /// Builds a request with the fixed sampling parameters the bot always uses.
    ///
    /// Bounded output length, moderate randomness and no repetition penalties.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens: 256,
            temperature: 0.7,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            best_of: 1,
        }
    }
}

/// Raw response body of a `/completions` call.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
    pub usage: Option<CompletionUsage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionUsage {
    pub total_tokens: u64,
}

/// Generated text together with its usage metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub total_tokens: u64,
}
