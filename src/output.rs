//! Transcript rendering for kindabot.
//!
//! Defines the [`Renderer`] trait that decouples the chat loop from the
//! display. [`TranscriptRenderer`] writes prefixed lines to any
//! [`Write`](std::io::Write) sink, stdout in the binary and a buffer in tests.

use colored::Colorize;
use std::io::{self, Write};

use crate::constants::BOT_NAME;
use crate::responder::{Reply, ReplySource};

/// Trait for rendering chat output.
pub trait Renderer {
    /// Render the reply for one turn, prefixed by its source.
    fn render_reply(&mut self, reply: &Reply);

    /// Render an informational line (banner, mode status).
    fn render_notice(&mut self, text: &str);

    /// Render the farewell printed when input closes or is interrupted.
    fn render_farewell(&mut self, text: &str);
}

/// Writes the transcript line by line, flushing after each line.
pub struct TranscriptRenderer<W: Write> {
    out: W,
}

impl TranscriptRenderer<io::Stdout> {
    /// Renders to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TranscriptRenderer<W> {
    /// Renders to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        // A closed stdout has nowhere to report to.
        writeln!(self.out, "{}", text).ok();
        self.out.flush().ok();
    }
}

/// The speaker label for a reply, e.g. `KindaBot:` or `KindaBot (fallback):`.
pub fn reply_prefix(source: ReplySource) -> String {
    match source {
        ReplySource::Remote | ReplySource::Local => format!("{}:", BOT_NAME),
        ReplySource::Fallback => format!("{} (fallback):", BOT_NAME),
    }
}

impl<W: Write> Renderer for TranscriptRenderer<W> {
    fn render_reply(&mut self, reply: &Reply) {
        let prefix = reply_prefix(reply.source);
        let prefix = match reply.source {
            ReplySource::Fallback => prefix.yellow().bold(),
            ReplySource::Remote | ReplySource::Local => prefix.cyan().bold(),
        };
        self.line(&format!("{} {}", prefix, reply.text));
    }

    fn render_notice(&mut self, text: &str) {
        self.line(&text.dimmed().to_string());
    }

    fn render_farewell(&mut self, text: &str) {
        self.line(text);
    }
}
