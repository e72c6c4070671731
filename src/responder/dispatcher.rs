//! Per-turn choice between the remote and local responders.

use std::fmt;

use super::rules::RuleBook;
use crate::constants::{API_KEY_ENV, MAX_TOKENS, TEMPERATURE};
use crate::provider::{ClientAvailability, CompletionBackend, CompletionRequest, RemoteError};

/// Which responder a session prefers. Fixed for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Remote,
    Local,
}

/// How the reply for a turn was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Remote,
    Local,
    /// The remote call failed and the local responder answered instead.
    Fallback,
}

/// The answer to one input line. `text` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

/// Sampling settings and instruction for remote completions.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub system_instruction: String,
    pub max_tokens: u64,
    pub temperature: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            system_instruction: crate::constants::DEFAULT_SYSTEM_PROMPT.to_string(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

/// Startup outcome shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeStatus {
    Enabled { provider: String, model: String },
    Unavailable(String),
    Disabled,
    /// Remote mode was switched off on the command line.
    LocalOnly,
}

impl fmt::Display for ModeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled { provider, model } => {
                write!(f, "AI mode: enabled (using {provider}, model {model})")
            }
            Self::Unavailable(reason) => write!(
                f,
                "AI mode: unavailable ({reason}). Falling back to local responder."
            ),
            Self::Disabled => write!(
                f,
                "AI mode: disabled (no {API_KEY_ENV}). Using local responder."
            ),
            Self::LocalOnly => write!(f, "AI mode: off (--local). Using local responder."),
        }
    }
}

/// Decides, per input line, which responder answers.
///
/// A remote client is held only when the session started in
/// [`SessionMode::Remote`]. Remote failures fall back to the rule book for
/// that turn only; the next turn tries remote again.
pub struct Dispatcher {
    remote: Option<Box<dyn CompletionBackend>>,
    rules: RuleBook,
    generation: GenerationSettings,
    status: ModeStatus,
}

impl Dispatcher {
    /// Picks the session mode from the factory outcome. Never fails.
    pub fn initialize(
        availability: ClientAvailability,
        rules: RuleBook,
        generation: GenerationSettings,
    ) -> Self {
        let (remote, status) = match availability {
            ClientAvailability::Ready(backend) => {
                let status = ModeStatus::Enabled {
                    provider: backend.label().to_string(),
                    model: backend.model().to_string(),
                };
                (Some(backend), status)
            }
            ClientAvailability::Unconfigured => (None, ModeStatus::Disabled),
            ClientAvailability::Unavailable(reason) => (None, ModeStatus::Unavailable(reason)),
        };
        tracing::info!(mode = ?status, "responder initialized");
        Self {
            remote,
            rules,
            generation,
            status,
        }
    }

    /// A dispatcher that only ever answers from the rule book.
    pub fn local(rules: RuleBook) -> Self {
        tracing::info!("responder initialized in local-only mode");
        Self {
            remote: None,
            rules,
            generation: GenerationSettings::default(),
            status: ModeStatus::LocalOnly,
        }
    }

    /// The responder this session prefers. Fixed once initialized.
    pub fn mode(&self) -> SessionMode {
        if self.remote.is_some() {
            SessionMode::Remote
        } else {
            SessionMode::Local
        }
    }

    /// Startup status shown to the operator.
    pub fn status(&self) -> &ModeStatus {
        &self.status
    }

    /// Answers from the rule book. Pure and total.
    pub fn respond_local(&self, input: &str) -> String {
        self.rules.answer(input).to_string()
    }

    /// Asks the remote client and returns its trimmed reply.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] when there is no client, the call fails, or
    /// the reply is blank.
    pub async fn respond_remote(&self, input: &str) -> Result<String, RemoteError> {
        let backend = self.remote.as_deref().ok_or(RemoteError::NotEnabled)?;
        let request = CompletionRequest {
            system_instruction: &self.generation.system_instruction,
            user_text: input,
            max_tokens: self.generation.max_tokens,
            temperature: self.generation.temperature,
        };
        let reply = backend.complete(request).await?;
        let reply = reply.trim();
        if reply.is_empty() {
            return Err(RemoteError::EmptyReply);
        }
        Ok(reply.to_string())
    }

    /// Produces the reply for one turn. Never fails.
    pub async fn respond(&self, input: &str) -> Reply {
        if self.mode() == SessionMode::Local {
            return Reply {
                text: self.respond_local(input),
                source: ReplySource::Local,
            };
        }

        match self.respond_remote(input).await {
            Ok(text) => Reply {
                text,
                source: ReplySource::Remote,
            },
            Err(e) => {
                tracing::info!("falling back to local responder: {e}");
                Reply {
                    text: self.respond_local(input),
                    source: ReplySource::Fallback,
                }
            }
        }
    }
}
