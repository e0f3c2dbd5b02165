//! Scripted stand-in for [`CompletionClient`].

use std::collections::VecDeque;
use std::sync::Mutex;

use serenity::async_trait;

use super::CompletionClient;
use crate::{
    error::{completion::CompletionError, AppError},
    model::completion::{Completion, CompletionRequest},
};

/// Answers requests from a queue of scripted replies and records every request.
///
/// An exhausted queue answers with `CompletionError::EmptyResponse`.
pub struct MockCompletionClient {
    replies: Mutex<VecDeque<Result<Completion, u16>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queues a successful reply.
    pub fn reply(self, text: &str, total_tokens: u64) -> Self {
        self.replies.lock().unwrap().push_back(Ok(Completion {
            text: text.to_string(),
            total_tokens,
        }));
        self
    }

    /// Queues a rejection with the given HTTP status.
    pub fn fail(self, status: u16) -> Self {
        self.replies.lock().unwrap().push_back(Err(status));
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AppError> {
        self.requests.lock().unwrap().push(request.clone());

        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(completion)) => Ok(completion),
            Some(Err(status)) => Err(CompletionError::Api {
                status,
                body: "scripted failure".to_string(),
            }
            .into()),
            None => Err(CompletionError::EmptyResponse.into()),
        }
    }
}
