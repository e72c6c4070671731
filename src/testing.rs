//! Test doubles shared by unit tests across modules.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::chat::{Input, LineSource};
use crate::provider::{CompletionBackend, CompletionRequest, RemoteError};

/// What a [`StubBackend`] does when asked for a completion.
enum Behavior {
    Reply(String),
    Fail(String),
    Script(Mutex<VecDeque<Result<String, String>>>),
}

/// A completion backend that answers from a script and counts its calls.
pub struct StubBackend {
    behavior: Behavior,
    calls: Arc<AtomicUsize>,
}

impl StubBackend {
    /// Always answers with `text`.
    pub fn replying(text: &str) -> Self {
        Self::with(Behavior::Reply(text.to_string()))
    }

    /// Always fails with `detail`.
    pub fn failing(detail: &str) -> Self {
        Self::with(Behavior::Fail(detail.to_string()))
    }

    /// Answers each call with the next scripted outcome; fails once exhausted.
    pub fn scripted(outcomes: Vec<Result<&str, &str>>) -> Self {
        let queue = outcomes
            .into_iter()
            .map(|o| o.map(str::to_string).map_err(str::to_string))
            .collect();
        Self::with(Behavior::Script(Mutex::new(queue)))
    }

    fn with(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the call counter, readable after the stub is boxed.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait::async_trait]
impl CompletionBackend for StubBackend {
    fn label(&self) -> &str {
        "Stub"
    }

    fn model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, _request: CompletionRequest<'_>) -> Result<String, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::Fail(detail) => Err(RemoteError::Request(detail.clone())),
            Behavior::Script(queue) => queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err("script exhausted".to_string()))
                .map_err(RemoteError::Request),
        }
    }
}

/// A line source that replays scripted input events.
pub struct ScriptedInput {
    events: VecDeque<Input>,
    pub prompts: usize,
}

impl ScriptedInput {
    /// Replays `lines` in order, then reports end-of-input.
    pub fn lines(lines: &[&str]) -> Self {
        Self::events(lines.iter().map(|l| Input::Line(l.to_string())).collect())
    }

    pub fn events(events: Vec<Input>) -> Self {
        Self {
            events: events.into(),
            prompts: 0,
        }
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Input {
        self.prompts += 1;
        self.events.pop_front().unwrap_or(Input::Closed)
    }
}

/// Reads a counter obtained from [`StubBackend::call_counter`].
pub fn counted(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
