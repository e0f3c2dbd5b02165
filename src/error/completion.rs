use thiserror::Error;

/// Errors reported by the text-completion service.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The service answered with a non-success status code.
    ///
    /// The body is kept verbatim since providers put the useful detail there.
    #[error("Completion service returned {status}: {body}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response body is not a completion object.
    #[error("Completion service returned a malformed body: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The service answered successfully but without any choices.
    #[error("Completion service returned no choices")]
    EmptyResponse,
}
