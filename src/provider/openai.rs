//! OpenAI completion backend built on rig-core.

use anyhow::{Context, Result};
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;

use super::backend::{CompletionBackend, CompletionRequest, RemoteError};

/// A configured OpenAI client ready to handle completion requests.
///
/// Agents are constructed on each call since they are cheap to create and
/// carry the per-request preamble and sampling settings.
pub struct OpenAiBackend {
    client: openai::Client,
    model: String,
}

impl OpenAiBackend {
    /// Builds a client for the public OpenAI API, or for an
    /// OpenAI-compatible endpoint when `base_url` is given.
    ///
    /// # Errors
    ///
    /// Returns an error if client construction fails.
    pub fn new(api_key: &str, base_url: Option<&str>, model: &str) -> Result<Self> {
        let client = match base_url {
            Some(url) => openai::Client::builder()
                .api_key(api_key)
                .base_url(url)
                .build()
                .context("Failed to create OpenAI client")?,
            None => openai::Client::new(api_key).context("Failed to create OpenAI client")?,
        };
        Ok(Self {
            client,
            model: model.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl CompletionBackend for OpenAiBackend {
    fn label(&self) -> &str {
        "OpenAI"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, RemoteError> {
        let agent = self
            .client
            .agent(&self.model)
            .preamble(request.system_instruction)
            .max_tokens(request.max_tokens)
            .temperature(request.temperature)
            .build();
        agent
            .prompt(request.user_text)
            .await
            .map_err(|e| RemoteError::Request(e.to_string()))
    }
}
