//! Client construction for the remote responder.
//!
//! [`connect`] turns the resolved credential into a [`ClientAvailability`],
//! which the dispatcher consumes once at startup to pick its session mode.

use anyhow::Result;
use std::fmt;

use super::backend::CompletionBackend;
use super::openai::OpenAiBackend;
use crate::config::Config;

/// Everything needed to construct the remote client.
#[derive(Debug, Clone, Default)]
pub struct RemoteSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
}

impl RemoteSettings {
    /// Resolves settings from config, with an optional model override
    /// from the command line.
    pub fn from_config(config: &Config, model_override: Option<&str>) -> Self {
        Self {
            api_key: config.resolve_api_key(),
            base_url: config
                .openai
                .base_url
                .clone()
                .filter(|url| !url.trim().is_empty()),
            model: model_override.unwrap_or(config.model()).to_string(),
        }
    }
}

/// Outcome of trying to construct the remote client.
pub enum ClientAvailability {
    /// A client is ready to serve completions.
    Ready(Box<dyn CompletionBackend>),
    /// No credential was configured.
    Unconfigured,
    /// A credential was present but the client could not be built.
    Unavailable(String),
}

impl fmt::Debug for ClientAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(backend) => write!(f, "Ready({})", backend.label()),
            Self::Unconfigured => write!(f, "Unconfigured"),
            Self::Unavailable(reason) => write!(f, "Unavailable({reason})"),
        }
    }
}

/// Builds the OpenAI client described by `settings`.
pub fn connect(settings: &RemoteSettings) -> ClientAvailability {
    connect_with(settings, |key| {
        let backend: Box<dyn CompletionBackend> = Box::new(OpenAiBackend::new(
            key,
            settings.base_url.as_deref(),
            &settings.model,
        )?);
        Ok(backend)
    })
}

/// Runs `build` with the credential from `settings`, mapping absence and
/// construction errors onto [`ClientAvailability`].
pub fn connect_with<F>(settings: &RemoteSettings, build: F) -> ClientAvailability
where
    F: FnOnce(&str) -> Result<Box<dyn CompletionBackend>>,
{
    let Some(key) = settings.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
        tracing::debug!("no API key configured");
        return ClientAvailability::Unconfigured;
    };

    match build(key) {
        Ok(backend) => {
            tracing::debug!(model = %backend.model(), "remote client ready");
            ClientAvailability::Ready(backend)
        }
        Err(e) => {
            tracing::warn!("remote client construction failed: {e:#}");
            ClientAvailability::Unavailable(format!("{e:#}"))
        }
    }
}
