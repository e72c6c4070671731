//! Interactive chat REPL for kindabot.
//!
//! Reads one line at a time, answers it through the [`Dispatcher`], and
//! prints the reply. Turns are independent: nothing from a previous turn is
//! sent with the next one.

mod input;

use anyhow::Result;

use crate::constants::{BANNER, EXIT_PHRASES, EXIT_REPLY, FAREWELL, USER_PROMPT};
use crate::output::{Renderer, TranscriptRenderer};
use crate::responder::{Dispatcher, Reply, ReplySource};

pub use input::{Input, LineSource, ReadlineSource};

/// Why a chat session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed an exit phrase.
    ExitPhrase,
    /// Input was closed (Ctrl+D or end of piped input).
    Closed,
    /// The user pressed Ctrl+C at the prompt.
    Interrupted,
}

/// Whether `line` is a request to end the session.
///
/// Only the whole trimmed line counts, compared case-insensitively:
/// `"Bye"` exits, `"bye for now"` does not.
pub fn is_exit_phrase(line: &str) -> bool {
    let line = line.trim().to_lowercase();
    EXIT_PHRASES.contains(&line.as_str())
}

/// Runs the interactive chat on the terminal.
///
/// # Readline behavior
///
/// - **Ctrl+C** / **Ctrl+D**: prints "Goodbye!" and exits cleanly
/// - Readline history is persisted to `~/.cache/kindabot/chat_history.txt`
pub async fn run_chat(dispatcher: Dispatcher) -> Result<()> {
    let mut source = ReadlineSource::new()?;
    let mut renderer = TranscriptRenderer::stdout();

    renderer.render_notice(BANNER);
    renderer.render_notice(&dispatcher.status().to_string());

    let end = run_session(&dispatcher, &mut source, &mut renderer).await;
    tracing::debug!(?end, "chat session ended");

    if let Err(e) = source.save_history() {
        tracing::warn!("could not save readline history: {e:#}");
    }
    Ok(())
}

/// Drives the read/respond loop until an exit phrase or end of input.
pub async fn run_session(
    dispatcher: &Dispatcher,
    source: &mut dyn LineSource,
    renderer: &mut dyn Renderer,
) -> SessionEnd {
    loop {
        let line = match source.read_line(USER_PROMPT) {
            Input::Line(line) => line,
            Input::Closed => {
                renderer.render_farewell(FAREWELL);
                return SessionEnd::Closed;
            }
            Input::Interrupted => {
                renderer.render_farewell(FAREWELL);
                return SessionEnd::Interrupted;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        source.remember(line);

        if is_exit_phrase(line) {
            renderer.render_reply(&Reply {
                text: EXIT_REPLY.to_string(),
                source: ReplySource::Local,
            });
            return SessionEnd::ExitPhrase;
        }

        let reply = dispatcher.respond(line).await;
        renderer.render_reply(&reply);
    }
}
