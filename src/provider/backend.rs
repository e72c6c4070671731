//! The completion backend seam.
//!
//! Anything that can turn a system instruction plus user text into a reply
//! implements [`CompletionBackend`]. The dispatcher only depends on this
//! trait, so tests substitute scripted backends for the network client.

use thiserror::Error;

/// A single completion request.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub system_instruction: &'a str,
    pub user_text: &'a str,
    pub max_tokens: u64,
    pub temperature: f64,
}

/// Failure of a remote completion.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The client reported an error (network, auth, quota, malformed response).
    #[error("remote request failed: {0}")]
    Request(String),
    /// The service answered with nothing but whitespace.
    #[error("remote service returned an empty reply")]
    EmptyReply,
    /// The session has no remote client.
    #[error("remote responder is not enabled")]
    NotEnabled,
}

/// A remote text-generation service.
#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Short provider label used in status output (e.g. `"OpenAI"`).
    fn label(&self) -> &str;

    /// Model identifier the backend sends requests to.
    fn model(&self) -> &str;

    /// Requests a completion and returns the raw reply text.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, RemoteError>;
}
